//! Generic IPMI driver.
//!
//! This is the fallback for addresses without a scheme, so `192.0.2.5` and
//! `192.0.2.5:623` both end up here.

use serde_json::Value;

use crate::address::ParsedAddress;
use crate::bmc::{
    AccessDetails, BiosSetting, BmcEndpoint, Credentials, DriverInfo, DriverRegistry,
    FirmwareConfig, reject_bios_settings,
};
use crate::error::Result;

/// Scheme name for IPMI.
pub const BMC_TYPE: &str = "ipmi";

/// Port used when the address does not carry one.
pub const DEFAULT_PORT: &str = "623";

pub(crate) fn register(registry: &mut DriverRegistry) {
    registry.register_builtin(BMC_TYPE, new_access_details, &[]);
}

/// Build IPMI access details.
pub fn new_access_details(
    parsed: &ParsedAddress,
    disable_certificate_verification: bool,
) -> Result<Box<dyn AccessDetails>> {
    Ok(Box::new(IpmiAccessDetails {
        endpoint: BmcEndpoint::new(parsed, disable_certificate_verification),
    }))
}

#[derive(Debug, Clone)]
struct IpmiAccessDetails {
    endpoint: BmcEndpoint,
}

impl AccessDetails for IpmiAccessDetails {
    fn bmc_type(&self) -> &str {
        &self.endpoint.bmc_type
    }

    fn driver(&self) -> &str {
        "ipmi"
    }

    fn disable_certificate_verification(&self) -> bool {
        self.endpoint.disable_certificate_verification
    }

    fn driver_info(&self, creds: &Credentials) -> DriverInfo {
        let mut info = self
            .endpoint
            .driver_info("ipmi", self.endpoint.hostname.as_str(), creds);
        let port = self
            .endpoint
            .port
            .map(|p| p.to_string())
            .unwrap_or_else(|| DEFAULT_PORT.to_string());
        info.insert("ipmi_port".to_string(), Value::from(port));
        info
    }

    fn bios_interface(&self) -> &str {
        ""
    }

    fn boot_interface(&self) -> &str {
        "ipxe"
    }

    fn firmware_interface(&self) -> &str {
        ""
    }

    fn management_interface(&self) -> &str {
        ""
    }

    fn power_interface(&self) -> &str {
        ""
    }

    fn raid_interface(&self) -> &str {
        "no-raid"
    }

    fn vendor_interface(&self) -> &str {
        ""
    }

    fn supports_secure_boot(&self) -> bool {
        false
    }

    fn supports_iso_preprovisioning_image(&self) -> bool {
        false
    }

    fn build_bios_settings(&self, config: Option<&FirmwareConfig>) -> Result<Vec<BiosSetting>> {
        reject_bios_settings(self.driver(), config)
    }
}
