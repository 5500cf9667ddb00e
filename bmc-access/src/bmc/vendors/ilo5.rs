//! HPE iLO 5 driver.
//!
//! Shares driver info and BIOS names with iLO 4 but has its own driver
//! family and hardware RAID support.

use super::ilo4::{ILO_BIOS, ilo_driver_info};
use crate::address::ParsedAddress;
use crate::bmc::{
    AccessDetails, BiosSetting, BmcEndpoint, Credentials, DriverInfo, DriverRegistry,
    FirmwareConfig,
};
use crate::error::Result;

/// Scheme name for iLO 5.
pub const BMC_TYPE: &str = "ilo5";

pub(crate) fn register(registry: &mut DriverRegistry) {
    registry.register_builtin(BMC_TYPE, new_access_details, &[]);
}

/// Build iLO 5 access details.
pub fn new_access_details(
    parsed: &ParsedAddress,
    disable_certificate_verification: bool,
) -> Result<Box<dyn AccessDetails>> {
    Ok(Box::new(Ilo5AccessDetails {
        endpoint: BmcEndpoint::new(parsed, disable_certificate_verification),
    }))
}

#[derive(Debug, Clone)]
struct Ilo5AccessDetails {
    endpoint: BmcEndpoint,
}

impl AccessDetails for Ilo5AccessDetails {
    fn bmc_type(&self) -> &str {
        &self.endpoint.bmc_type
    }

    fn driver(&self) -> &str {
        "ilo5"
    }

    fn disable_certificate_verification(&self) -> bool {
        self.endpoint.disable_certificate_verification
    }

    fn driver_info(&self, creds: &Credentials) -> DriverInfo {
        ilo_driver_info(&self.endpoint, creds)
    }

    fn bios_interface(&self) -> &str {
        ""
    }

    fn boot_interface(&self) -> &str {
        "ilo-ipxe"
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
        "ilo5"
    }

    fn vendor_interface(&self) -> &str {
        ""
    }

    fn supports_secure_boot(&self) -> bool {
        true
    }

    fn supports_iso_preprovisioning_image(&self) -> bool {
        false
    }

    fn build_bios_settings(&self, config: Option<&FirmwareConfig>) -> Result<Vec<BiosSetting>> {
        Ok(ILO_BIOS.translate(config))
    }
}
