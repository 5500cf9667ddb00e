//! Connection details shared by every vendor's access details.

use serde_json::Value;

use super::{Credentials, DriverInfo};
use crate::address::ParsedAddress;

/// Transport used when a scheme carries no `+http`/`+https` suffix.
const DEFAULT_TRANSPORT: &str = "https";

/// The parts of a parsed BMC address that vendor drivers consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BmcEndpoint {
    /// Scheme as parsed, e.g. "idrac+http".
    pub bmc_type: String,

    /// The `+transport` suffix of the scheme.
    pub transport: Option<String>,

    /// Host with port.
    pub host: String,

    /// Host without port.
    pub hostname: String,

    pub port: Option<u16>,

    pub path: String,

    pub disable_certificate_verification: bool,
}

impl BmcEndpoint {
    pub fn new(parsed: &ParsedAddress, disable_certificate_verification: bool) -> Self {
        Self {
            bmc_type: parsed.scheme.clone(),
            transport: parsed.transport().map(str::to_string),
            host: parsed.host.clone(),
            hostname: parsed.hostname.clone(),
            port: parsed.port,
            path: parsed.path.clone(),
            disable_certificate_verification,
        }
    }

    /// The transport suffix, defaulting to https.
    pub fn transport_or_default(&self) -> &str {
        self.transport.as_deref().unwrap_or(DEFAULT_TRANSPORT)
    }

    /// `transport://host[:port]` for HTTP based drivers.
    pub fn http_address(&self) -> String {
        format!("{}://{}", self.transport_or_default(), self.host)
    }

    /// Start a driver info map with `<prefix>_username`, `<prefix>_password`,
    /// `<prefix>_address` and, if verification is disabled, `<prefix>_verify_ca`.
    pub fn driver_info(&self, prefix: &str, address: impl Into<Value>, creds: &Credentials) -> DriverInfo {
        let mut info = DriverInfo::new();
        info.insert(format!("{prefix}_username"), Value::from(creds.username.as_str()));
        info.insert(format!("{prefix}_password"), Value::from(creds.password()));
        info.insert(format!("{prefix}_address"), address.into());
        if self.disable_certificate_verification {
            info.insert(format!("{prefix}_verify_ca"), Value::Bool(false));
        }
        info
    }

    /// Insert `key` with the port when the address carried one.
    pub fn insert_port(&self, info: &mut DriverInfo, key: &str) {
        if let Some(port) = self.port {
            info.insert(key.to_string(), Value::from(port.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::parse_address;

    fn endpoint(address: &str, disable: bool) -> BmcEndpoint {
        BmcEndpoint::new(&parse_address(address).unwrap(), disable)
    }

    #[test]
    fn test_transport_from_scheme() {
        let ep = endpoint("redfish+http://192.0.2.1:8000", false);
        assert_eq!(ep.transport.as_deref(), Some("http"));
        assert_eq!(ep.http_address(), "http://192.0.2.1:8000");

        let ep = endpoint("redfish://192.0.2.1", false);
        assert_eq!(ep.transport, None);
        assert_eq!(ep.http_address(), "https://192.0.2.1");
    }

    #[test]
    fn test_driver_info_base_keys() {
        let creds = Credentials::new("admin", "secret");
        let info = endpoint("ibmc://192.0.2.1", false).driver_info("ibmc", "x", &creds);
        assert_eq!(info.len(), 3);
        assert_eq!(info["ibmc_username"], "admin");
        assert_eq!(info["ibmc_password"], "secret");
        assert_eq!(info["ibmc_address"], "x");
        assert!(!info.contains_key("ibmc_verify_ca"));
    }

    #[test]
    fn test_driver_info_verify_ca() {
        let creds = Credentials::new("admin", "secret");
        let info = endpoint("ibmc://192.0.2.1", true).driver_info("ibmc", "x", &creds);
        assert_eq!(info["ibmc_verify_ca"], Value::Bool(false));
    }

    #[test]
    fn test_insert_port() {
        let mut info = DriverInfo::new();
        endpoint("idrac://192.0.2.1", false).insert_port(&mut info, "drac_port");
        assert!(info.is_empty());

        endpoint("idrac://192.0.2.1:8443", false).insert_port(&mut info, "drac_port");
        assert_eq!(info["drac_port"], "8443");
    }
}
