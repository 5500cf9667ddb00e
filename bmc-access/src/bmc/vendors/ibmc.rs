//! Huawei iBMC driver.

use super::HTTP_SCHEMES;
use crate::address::ParsedAddress;
use crate::bmc::{
    AccessDetails, BiosSetting, BmcEndpoint, Credentials, DriverInfo, DriverRegistry,
    FirmwareConfig, reject_bios_settings,
};
use crate::error::Result;

/// Scheme name for iBMC.
pub const BMC_TYPE: &str = "ibmc";

pub(crate) fn register(registry: &mut DriverRegistry) {
    registry.register_builtin(BMC_TYPE, new_access_details, HTTP_SCHEMES);
}

/// Build iBMC access details.
pub fn new_access_details(
    parsed: &ParsedAddress,
    disable_certificate_verification: bool,
) -> Result<Box<dyn AccessDetails>> {
    Ok(Box::new(IbmcAccessDetails {
        endpoint: BmcEndpoint::new(parsed, disable_certificate_verification),
    }))
}

#[derive(Debug, Clone)]
struct IbmcAccessDetails {
    endpoint: BmcEndpoint,
}

impl AccessDetails for IbmcAccessDetails {
    fn bmc_type(&self) -> &str {
        &self.endpoint.bmc_type
    }

    fn driver(&self) -> &str {
        "ibmc"
    }

    fn disable_certificate_verification(&self) -> bool {
        self.endpoint.disable_certificate_verification
    }

    fn driver_info(&self, creds: &Credentials) -> DriverInfo {
        self.endpoint
            .driver_info("ibmc", self.endpoint.http_address(), creds)
    }

    fn bios_interface(&self) -> &str {
        ""
    }

    fn boot_interface(&self) -> &str {
        "pxe"
    }

    fn firmware_interface(&self) -> &str {
        ""
    }

    fn management_interface(&self) -> &str {
        "ibmc"
    }

    fn power_interface(&self) -> &str {
        "ibmc"
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
