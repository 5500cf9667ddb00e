//! Dell iDRAC driver using the legacy WSMAN interfaces.
//!
//! Addresses look like `idrac://host[:port][/path]`, optionally with a
//! `+http` or `+https` transport suffix which becomes `drac_protocol`.

use serde_json::Value;

use super::HTTP_SCHEMES;
use crate::address::ParsedAddress;
use crate::bmc::{
    AccessDetails, BiosSetting, BiosVocabulary, BmcEndpoint, Credentials, DriverInfo,
    DriverRegistry, FirmwareConfig,
};
use crate::error::Result;

/// Scheme name for iDRAC.
pub const BMC_TYPE: &str = "idrac";

/// Dell BIOS attribute names.
const IDRAC_BIOS: BiosVocabulary = BiosVocabulary {
    virtualization: "ProcVirtualization",
    simultaneous_multithreading: "LogicalProc",
    sriov: "SriovGlobalEnable",
    enabled: "Enabled",
    disabled: "Disabled",
};

pub(crate) fn register(registry: &mut DriverRegistry) {
    registry.register_builtin(BMC_TYPE, new_access_details, HTTP_SCHEMES);
}

/// Build iDRAC access details.
pub fn new_access_details(
    parsed: &ParsedAddress,
    disable_certificate_verification: bool,
) -> Result<Box<dyn AccessDetails>> {
    Ok(Box::new(IdracAccessDetails {
        endpoint: BmcEndpoint::new(parsed, disable_certificate_verification),
    }))
}

#[derive(Debug, Clone)]
struct IdracAccessDetails {
    endpoint: BmcEndpoint,
}

impl AccessDetails for IdracAccessDetails {
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
            .driver_info("drac", self.endpoint.hostname.as_str(), creds);
        if let Some(protocol) = &self.endpoint.transport {
            info.insert("drac_protocol".to_string(), Value::from(protocol.as_str()));
        }
        self.endpoint.insert_port(&mut info, "drac_port");
        if !self.endpoint.path.is_empty() {
            info.insert("drac_path".to_string(), Value::from(self.endpoint.path.as_str()));
        }
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
        ""
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
        Ok(IDRAC_BIOS.translate(config))
    }
}
