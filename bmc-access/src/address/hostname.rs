//! Hostname syntax validation.

use std::net::IpAddr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::AddressError;

/// RFC 1123 host name: dot-separated labels of up to 63 alphanumerics or
/// hyphens, not starting or ending with a hyphen.
static DNS_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(([a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])\.)*([A-Za-z0-9]|[A-Za-z0-9][A-Za-z0-9\-]{0,61}[A-Za-z0-9])$",
    )
    .expect("DNS name pattern is valid")
});

/// Check that `hostname` is empty, an IPv4/IPv6 literal, or a DNS name.
pub fn check_dns_valid(hostname: &str) -> Result<(), AddressError> {
    if hostname.is_empty() || hostname.parse::<IpAddr>().is_ok() || DNS_NAME.is_match(hostname) {
        return Ok(());
    }

    Err(AddressError::InvalidHostname {
        hostname: hostname.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_valid() {
        assert!(check_dns_valid("").is_ok());
    }

    #[test]
    fn test_ip_literals() {
        assert!(check_dns_valid("192.0.2.5").is_ok());
        assert!(check_dns_valid("fe80::1").is_ok());
        assert!(check_dns_valid("2001:db8::dead:beef").is_ok());
    }

    #[test]
    fn test_dns_names() {
        assert!(check_dns_valid("localhost").is_ok());
        assert!(check_dns_valid("bmc-01.rack2.example.com").is_ok());
        assert!(check_dns_valid("a").is_ok());
        assert!(check_dns_valid("623").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        for bad in [
            "bad_host",
            "-leading.example.com",
            "trailing-.example.com",
            "double..dot",
            "host!!",
            "example.com.",
        ] {
            let err = check_dns_valid(bad).unwrap_err();
            assert!(
                matches!(err, AddressError::InvalidHostname { ref hostname } if hostname == bad),
                "expected {bad} to be rejected"
            );
        }
    }

    #[test]
    fn test_label_length_limit() {
        let ok = "a".repeat(63);
        assert!(check_dns_valid(&ok).is_ok());

        let too_long = "a".repeat(64);
        assert!(check_dns_valid(&too_long).is_err());
    }
}
