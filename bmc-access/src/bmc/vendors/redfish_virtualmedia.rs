//! Generic Redfish driver booting over virtual media.

use super::HTTP_SCHEMES;
use super::redfish::redfish_driver_info;
use crate::address::ParsedAddress;
use crate::bmc::{
    AccessDetails, BiosSetting, BmcEndpoint, Credentials, DriverInfo, DriverRegistry,
    FirmwareConfig, reject_bios_settings,
};
use crate::error::Result;

/// Scheme name for Redfish virtual media.
pub const BMC_TYPE: &str = "redfish-virtualmedia";

/// Scheme name for HPE iLO 5 through Redfish virtual media.
pub const ILO5_BMC_TYPE: &str = "ilo5-virtualmedia";

pub(crate) fn register(registry: &mut DriverRegistry) {
    registry.register_builtin(BMC_TYPE, new_access_details, HTTP_SCHEMES);
    registry.register_builtin(ILO5_BMC_TYPE, new_access_details, HTTP_SCHEMES);
}

/// Build Redfish virtual media access details.
pub fn new_access_details(
    parsed: &ParsedAddress,
    disable_certificate_verification: bool,
) -> Result<Box<dyn AccessDetails>> {
    Ok(Box::new(RedfishVirtualMediaAccessDetails {
        endpoint: BmcEndpoint::new(parsed, disable_certificate_verification),
    }))
}

#[derive(Debug, Clone)]
struct RedfishVirtualMediaAccessDetails {
    endpoint: BmcEndpoint,
}

impl AccessDetails for RedfishVirtualMediaAccessDetails {
    fn bmc_type(&self) -> &str {
        &self.endpoint.bmc_type
    }

    fn driver(&self) -> &str {
        "redfish"
    }

    fn disable_certificate_verification(&self) -> bool {
        self.endpoint.disable_certificate_verification
    }

    fn driver_info(&self, creds: &Credentials) -> DriverInfo {
        redfish_driver_info(&self.endpoint, creds)
    }

    fn bios_interface(&self) -> &str {
        ""
    }

    fn boot_interface(&self) -> &str {
        "redfish-virtual-media"
    }

    fn firmware_interface(&self) -> &str {
        "redfish"
    }

    fn management_interface(&self) -> &str {
        ""
    }

    fn power_interface(&self) -> &str {
        ""
    }

    fn raid_interface(&self) -> &str {
        "redfish"
    }

    fn vendor_interface(&self) -> &str {
        ""
    }

    fn supports_secure_boot(&self) -> bool {
        true
    }

    fn supports_iso_preprovisioning_image(&self) -> bool {
        true
    }

    fn build_bios_settings(&self, config: Option<&FirmwareConfig>) -> Result<Vec<BiosSetting>> {
        reject_bios_settings(self.driver(), config)
    }
}
