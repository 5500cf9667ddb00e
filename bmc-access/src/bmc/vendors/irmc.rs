//! Fujitsu iRMC driver.
//!
//! iRMC is driven over both its own protocol and IPMI, so credentials and
//! address are emitted under both the `irmc_` and `ipmi_` prefixes.

use serde_json::Value;

use crate::address::ParsedAddress;
use crate::bmc::{
    AccessDetails, BiosSetting, BiosVocabulary, BmcEndpoint, Credentials, DriverInfo,
    DriverRegistry, FirmwareConfig,
};
use crate::error::Result;

/// Scheme name for iRMC.
pub const BMC_TYPE: &str = "irmc";

/// iRMC BIOS setting names. Values are the strings "True"/"False".
const IRMC_BIOS: BiosVocabulary = BiosVocabulary {
    virtualization: "cpu_vt_enabled",
    simultaneous_multithreading: "hyper_threading_enabled",
    sriov: "single_root_io_virtualization_support_enabled",
    enabled: "True",
    disabled: "False",
};

pub(crate) fn register(registry: &mut DriverRegistry) {
    registry.register_builtin(BMC_TYPE, new_access_details, &[]);
}

/// Build iRMC access details.
pub fn new_access_details(
    parsed: &ParsedAddress,
    disable_certificate_verification: bool,
) -> Result<Box<dyn AccessDetails>> {
    Ok(Box::new(IrmcAccessDetails {
        endpoint: BmcEndpoint::new(parsed, disable_certificate_verification),
    }))
}

#[derive(Debug, Clone)]
struct IrmcAccessDetails {
    endpoint: BmcEndpoint,
}

impl AccessDetails for IrmcAccessDetails {
    fn bmc_type(&self) -> &str {
        &self.endpoint.bmc_type
    }

    fn driver(&self) -> &str {
        "irmc"
    }

    fn disable_certificate_verification(&self) -> bool {
        self.endpoint.disable_certificate_verification
    }

    fn driver_info(&self, creds: &Credentials) -> DriverInfo {
        let hostname = self.endpoint.hostname.as_str();
        let mut info = self.endpoint.driver_info("irmc", hostname, creds);
        info.insert("ipmi_username".to_string(), Value::from(creds.username.as_str()));
        info.insert("ipmi_password".to_string(), Value::from(creds.password()));
        info.insert("ipmi_address".to_string(), Value::from(hostname));
        self.endpoint.insert_port(&mut info, "irmc_port");
        info
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
        ""
    }

    fn power_interface(&self) -> &str {
        "ipmitool"
    }

    fn raid_interface(&self) -> &str {
        "irmc"
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
        Ok(IRMC_BIOS.translate(config))
    }
}
