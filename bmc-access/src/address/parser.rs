//! Free-form BMC address to [`ParsedAddress`] conversion.

use log::debug;
use url::{ParseError, Url};

use super::{DEFAULT_SCHEME, ParsedAddress, check_dns_valid};
use crate::error::AddressError;

/// Parse a BMC address into its structured form.
///
/// Accepted shapes:
/// - `scheme://host[:port][/path]` and `scheme+transport://...`
/// - `scheme:host[:port]` (rewritten to `scheme://host[:port]`)
/// - bare `host`, `host:port`, `[v6addr]:port` (assumed to be IPMI)
/// - `//host[:port]`, which keeps the host but has an empty scheme
///
/// The resulting hostname must be empty, an IP literal or a DNS name.
/// Ports must fit in a `u16`; anything larger is rejected as malformed.
/// The path is percent-decoded.
pub fn parse_address(address: &str) -> Result<ParsedAddress, AddressError> {
    if address.starts_with("//") {
        // Scheme-relative: the authority is still a host, only the scheme is missing.
        let url = reparse(address, &format!("{}:{}", DEFAULT_SCHEME, address))?;
        let mut parsed = ParsedAddress::from_url(&url);
        parsed.scheme.clear();
        check_dns_valid(&parsed.hostname)?;
        return Ok(parsed);
    }

    let url = match Url::parse(address) {
        // "scheme:host" leaves everything after the colon as an opaque path
        Ok(url) if url.cannot_be_a_base() => {
            let rewritten = address.replacen(':', "://", 1);
            debug!("BMC address '{}' has no authority, reparsing as '{}'", address, rewritten);
            reparse(address, &rewritten)?
        }
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => {
            // No scheme at all. A colon can only be a port separator here.
            if address.contains(':') {
                split_host_port(address).map_err(|message| AddressError::InvalidHostPort {
                    address: address.to_string(),
                    message: message.to_string(),
                })?;
            }
            let rewritten = format!("{}://{}", DEFAULT_SCHEME, address);
            debug!("BMC address '{}' has no scheme, assuming '{}'", address, rewritten);
            reparse(address, &rewritten)?
        }
        Err(source) => {
            return Err(AddressError::Malformed {
                address: address.to_string(),
                source,
            });
        }
    };

    let parsed = ParsedAddress::from_url(&url);
    check_dns_valid(&parsed.hostname)?;
    Ok(parsed)
}

fn reparse(address: &str, rewritten: &str) -> Result<Url, AddressError> {
    Url::parse(rewritten).map_err(|source| AddressError::Malformed {
        address: address.to_string(),
        source,
    })
}

/// Split `host:port`, `[host]:port` into host and port.
///
/// The port is not checked for being numeric; URL parsing does that later.
pub(crate) fn split_host_port(hostport: &str) -> Result<(&str, &str), &'static str> {
    const MISSING_PORT: &str = "missing port in address";
    const TOO_MANY_COLONS: &str = "too many colons in address";

    let colon = hostport.rfind(':').ok_or(MISSING_PORT)?;

    let (host, rest_start, close) = if hostport.starts_with('[') {
        let end = hostport.find(']').ok_or("missing ']' in address")?;
        if end + 1 == hostport.len() {
            return Err(MISSING_PORT);
        }
        if end + 1 != colon {
            return Err(if hostport.as_bytes()[end + 1] == b':' {
                TOO_MANY_COLONS
            } else {
                MISSING_PORT
            });
        }
        (&hostport[1..end], 1, end + 1)
    } else {
        let host = &hostport[..colon];
        if host.contains(':') {
            return Err(TOO_MANY_COLONS);
        }
        (host, 0, 0)
    };

    if hostport[rest_start..].contains('[') {
        return Err("unexpected '[' in address");
    }
    if hostport[close..].contains(']') {
        return Err("unexpected ']' in address");
    }

    Ok((host, &hostport[colon + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_ip() {
        let parsed = parse_address("192.0.2.5").unwrap();
        assert_eq!(parsed.scheme, "ipmi");
        assert_eq!(parsed.hostname, "192.0.2.5");
        assert_eq!(parsed.host, "192.0.2.5");
        assert_eq!(parsed.port, None);
    }

    #[test]
    fn test_bare_ip_with_port() {
        let parsed = parse_address("192.0.2.5:623").unwrap();
        assert_eq!(parsed.scheme, "ipmi");
        assert_eq!(parsed.hostname, "192.0.2.5");
        assert_eq!(parsed.host, "192.0.2.5:623");
        assert_eq!(parsed.port, Some(623));
    }

    #[test]
    fn test_bare_hostname() {
        let parsed = parse_address("bmc.example.com").unwrap();
        assert_eq!(parsed.scheme, "ipmi");
        assert_eq!(parsed.hostname, "bmc.example.com");
    }

    #[test]
    fn test_bare_ipv6_with_port() {
        let parsed = parse_address("[fe80::1]:623").unwrap();
        assert_eq!(parsed.scheme, "ipmi");
        assert_eq!(parsed.hostname, "fe80::1");
        assert_eq!(parsed.host, "[fe80::1]:623");
        assert_eq!(parsed.port, Some(623));
    }

    #[test]
    fn test_bare_ipv6_without_brackets() {
        let err = parse_address("::1").unwrap_err();
        assert!(matches!(err, AddressError::InvalidHostPort { .. }));

        assert!(parse_address("fe80::1").is_err());
    }

    #[test]
    fn test_full_url() {
        let parsed = parse_address("ipmi://192.0.2.5:623").unwrap();
        assert_eq!(parsed.scheme, "ipmi");
        assert_eq!(parsed.hostname, "192.0.2.5");
        assert_eq!(parsed.port, Some(623));
        assert_eq!(parsed.path, "");
    }

    #[test]
    fn test_transport_suffix() {
        let parsed = parse_address("idrac+http://bmc.example.com").unwrap();
        assert_eq!(parsed.scheme, "idrac+http");
        assert_eq!(parsed.hostname, "bmc.example.com");
    }

    #[test]
    fn test_path_is_kept() {
        let parsed = parse_address("redfish://192.0.2.1/redfish/v1/Systems/1").unwrap();
        assert_eq!(parsed.scheme, "redfish");
        assert_eq!(parsed.host, "192.0.2.1");
        assert_eq!(parsed.path, "/redfish/v1/Systems/1");
    }

    #[test]
    fn test_ipv6_url() {
        let parsed = parse_address("redfish://[fe80::fc33:62ff:fe83:8a76]:8000/foo").unwrap();
        assert_eq!(parsed.hostname, "fe80::fc33:62ff:fe83:8a76");
        assert_eq!(parsed.host, "[fe80::fc33:62ff:fe83:8a76]:8000");
        assert_eq!(parsed.port, Some(8000));
        assert_eq!(parsed.path, "/foo");
    }

    #[test]
    fn test_scheme_without_slashes() {
        let parsed = parse_address("ipmi:192.0.2.5").unwrap();
        assert_eq!(parsed.scheme, "ipmi");
        assert_eq!(parsed.hostname, "192.0.2.5");

        let parsed = parse_address("idrac:bmc.example.com:443").unwrap();
        assert_eq!(parsed.scheme, "idrac");
        assert_eq!(parsed.hostname, "bmc.example.com");
        assert_eq!(parsed.port, Some(443));
    }

    #[test]
    fn test_bare_host_with_path() {
        let parsed = parse_address("bmc.example.com/some/path").unwrap();
        assert_eq!(parsed.scheme, "ipmi");
        assert_eq!(parsed.hostname, "bmc.example.com");
        assert_eq!(parsed.path, "/some/path");
    }

    #[test]
    fn test_empty_host_allowed() {
        let parsed = parse_address("redfish://").unwrap();
        assert_eq!(parsed.scheme, "redfish");
        assert_eq!(parsed.hostname, "");
    }

    #[test]
    fn test_invalid_hostname() {
        assert!(parse_address("redfish://not a valid host!!").is_err());

        let err = parse_address("redfish://bad_host").unwrap_err();
        assert!(
            matches!(err, AddressError::InvalidHostname { ref hostname } if hostname == "bad_host")
        );
    }

    #[test]
    fn test_invalid_port() {
        let err = parse_address("ipmi://192.0.2.5:notaport").unwrap_err();
        assert!(matches!(err, AddressError::Malformed { .. }));
    }

    #[test]
    fn test_scheme_relative_address() {
        let parsed = parse_address("//bmc.example.com:623/path").unwrap();
        assert_eq!(parsed.scheme, "");
        assert_eq!(parsed.hostname, "bmc.example.com");
        assert_eq!(parsed.port, Some(623));
        assert_eq!(parsed.path, "/path");

        let err = parse_address("//bad_host").unwrap_err();
        assert!(matches!(err, AddressError::InvalidHostname { .. }));
    }

    #[test]
    fn test_encoded_path_is_decoded() {
        let parsed = parse_address("redfish://192.0.2.1/redfish/v1/Systems/System%201").unwrap();
        assert_eq!(parsed.path, "/redfish/v1/Systems/System 1");
    }

    #[test]
    fn test_port_out_of_range() {
        for address in ["ipmi://192.0.2.5:70000", "192.0.2.5:70000"] {
            let err = parse_address(address).unwrap_err();
            assert!(
                matches!(err, AddressError::Malformed { source: ParseError::InvalidPort, .. }),
                "{address}"
            );
        }
    }

    #[test]
    fn test_split_host_port() {
        assert_eq!(split_host_port("host:623"), Ok(("host", "623")));
        assert_eq!(split_host_port("[fe80::1]:623"), Ok(("fe80::1", "623")));
        assert_eq!(split_host_port("host:"), Ok(("host", "")));
        assert_eq!(split_host_port("host"), Err("missing port in address"));
        assert_eq!(split_host_port("a:b:c"), Err("too many colons in address"));
        assert_eq!(split_host_port("[fe80::1]"), Err("missing port in address"));
        assert_eq!(split_host_port("[fe80::1"), Err("missing ']' in address"));
        assert_eq!(
            split_host_port("[fe80::1]::623"),
            Err("too many colons in address")
        );
        assert_eq!(
            split_host_port("ho[st:623"),
            Err("unexpected '[' in address")
        );
    }
}
