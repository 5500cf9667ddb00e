//! Dell iDRAC driver booting over Redfish virtual media.
//!
//! The driver family stays `idrac`, but every interface is switched to the
//! Redfish implementation and the ramdisk is attached as an ISO, so no
//! provisioning network is needed.

use serde_json::Value;

use super::HTTP_SCHEMES;
use crate::address::ParsedAddress;
use crate::bmc::{
    AccessDetails, BiosSetting, BmcEndpoint, Credentials, DriverInfo, DriverRegistry,
    FirmwareConfig, reject_bios_settings,
};
use crate::error::Result;

/// Scheme name for iDRAC virtual media.
pub const BMC_TYPE: &str = "idrac-virtualmedia";

pub(crate) fn register(registry: &mut DriverRegistry) {
    registry.register_builtin(BMC_TYPE, new_access_details, HTTP_SCHEMES);
}

/// Build iDRAC virtual media access details.
pub fn new_access_details(
    parsed: &ParsedAddress,
    disable_certificate_verification: bool,
) -> Result<Box<dyn AccessDetails>> {
    Ok(Box::new(IdracVirtualMediaAccessDetails {
        endpoint: BmcEndpoint::new(parsed, disable_certificate_verification),
    }))
}

#[derive(Debug, Clone)]
struct IdracVirtualMediaAccessDetails {
    endpoint: BmcEndpoint,
}

impl AccessDetails for IdracVirtualMediaAccessDetails {
    fn bmc_type(&self) -> &str {
        &self.endpoint.bmc_type
    }

    fn driver(&self) -> &str {
        "idrac"
    }

    fn disable_certificate_verification(&self) -> bool {
        self.endpoint.disable_certificate_verification
    }

    fn driver_info(&self, creds: &Credentials) -> DriverInfo {
        let mut info = self
            .endpoint
            .driver_info("redfish", self.endpoint.http_address(), creds);
        info.insert(
            "redfish_system_id".to_string(),
            Value::from(self.endpoint.path.as_str()),
        );
        info
    }

    fn bios_interface(&self) -> &str {
        "idrac-redfish"
    }

    fn boot_interface(&self) -> &str {
        "idrac-redfish-virtual-media"
    }

    fn firmware_interface(&self) -> &str {
        "redfish"
    }

    fn management_interface(&self) -> &str {
        "idrac-redfish"
    }

    fn power_interface(&self) -> &str {
        "idrac-redfish"
    }

    fn raid_interface(&self) -> &str {
        "idrac-redfish"
    }

    fn vendor_interface(&self) -> &str {
        "idrac-redfish"
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
