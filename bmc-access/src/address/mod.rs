//! BMC address parsing.
//!
//! BMC addresses arrive in several shapes: fully qualified URLs
//! (`redfish+https://bmc.example.com/redfish/v1/Systems/1`), `scheme:host`
//! strings without the `//`, or a bare `host` / `host:port` that implies IPMI.
//! This module normalizes all of them into a [`ParsedAddress`].

mod hostname;
mod parser;

pub use hostname::check_dns_valid;
pub use parser::parse_address;

use std::fmt;

use percent_encoding::percent_decode_str;
use url::{Host, Url};

/// Scheme assumed when an address does not carry one.
pub const DEFAULT_SCHEME: &str = "ipmi";

/// Structured form of a BMC connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress {
    /// Scheme including any `+transport` suffix (e.g. "ipmi", "redfish+https").
    pub scheme: String,

    /// Host with optional port; IPv6 literals keep their brackets.
    pub host: String,

    /// Host without port or brackets. May be empty.
    pub hostname: String,

    /// Explicit port, if the address carried one.
    pub port: Option<u16>,

    /// Percent-decoded path, used by some drivers as a system or resource ID.
    pub path: String,
}

impl ParsedAddress {
    pub(crate) fn from_url(url: &Url) -> Self {
        let hostname = match url.host() {
            Some(Host::Domain(domain)) => domain.to_string(),
            Some(Host::Ipv4(addr)) => addr.to_string(),
            Some(Host::Ipv6(addr)) => addr.to_string(),
            None => String::new(),
        };
        let host_str = url.host_str().unwrap_or_default();
        let host = match url.port() {
            Some(port) => format!("{}:{}", host_str, port),
            None => host_str.to_string(),
        };

        Self {
            scheme: url.scheme().to_string(),
            host,
            hostname,
            port: url.port(),
            path: percent_decode_str(url.path())
                .decode_utf8_lossy()
                .into_owned(),
        }
    }

    /// Scheme without the `+transport` suffix.
    pub fn base_scheme(&self) -> &str {
        split_scheme(&self.scheme).0
    }

    /// The `+transport` suffix of the scheme, if any (e.g. "http").
    pub fn transport(&self) -> Option<&str> {
        split_scheme(&self.scheme).1
    }

    /// The port as a string, empty when the address has none.
    pub fn port_str(&self) -> String {
        self.port.map(|p| p.to_string()).unwrap_or_default()
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.path)
    }
}

/// Split a BMC scheme into its base and `+transport` suffix.
///
/// `"idrac+http"` yields `("idrac", Some("http"))`; `"ilo5"` yields
/// `("ilo5", None)`. Only the first suffix is considered.
pub fn split_scheme(scheme: &str) -> (&str, Option<&str>) {
    let mut parts = scheme.split('+');
    let base = parts.next().unwrap_or_default();
    (base, parts.next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_scheme() {
        assert_eq!(split_scheme("idrac+http"), ("idrac", Some("http")));
        assert_eq!(split_scheme("redfish+https"), ("redfish", Some("https")));
        assert_eq!(split_scheme("ilo5"), ("ilo5", None));
        assert_eq!(split_scheme("a+b+c"), ("a", Some("b")));
    }

    #[test]
    fn test_accessors() {
        let parsed = parse_address("redfish+http://192.0.2.1:8000/redfish/v1/Systems/1").unwrap();
        assert_eq!(parsed.base_scheme(), "redfish");
        assert_eq!(parsed.transport(), Some("http"));
        assert_eq!(parsed.port_str(), "8000");
        assert_eq!(
            parsed.to_string(),
            "redfish+http://192.0.2.1:8000/redfish/v1/Systems/1"
        );
    }

    #[test]
    fn test_no_port() {
        let parsed = parse_address("ilo5://bmc.example.com").unwrap();
        assert_eq!(parsed.port, None);
        assert_eq!(parsed.port_str(), "");
        assert_eq!(parsed.transport(), None);
    }
}
