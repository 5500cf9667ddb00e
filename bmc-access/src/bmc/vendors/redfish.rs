//! Redfish drivers booting over the provisioning network.
//!
//! - `redfish` and `ilo5-redfish` use the generic Redfish driver.
//! - `idrac-redfish` keeps the `idrac` driver family but selects the
//!   Redfish implementation of every interface instead of WSMAN.
//!
//! The address path is the Redfish system ID, e.g.
//! `redfish+https://bmc.example.com/redfish/v1/Systems/1`.

use serde_json::Value;

use super::HTTP_SCHEMES;
use crate::address::ParsedAddress;
use crate::bmc::{
    AccessDetails, BiosSetting, BmcEndpoint, Credentials, DriverInfo, DriverRegistry,
    FirmwareConfig, reject_bios_settings,
};
use crate::error::Result;

/// Scheme name for generic Redfish.
pub const BMC_TYPE: &str = "redfish";

/// Scheme name for HPE iLO 5 through generic Redfish.
pub const ILO5_BMC_TYPE: &str = "ilo5-redfish";

/// Scheme name for Dell iDRAC through Redfish.
pub const IDRAC_BMC_TYPE: &str = "idrac-redfish";

pub(crate) fn register(registry: &mut DriverRegistry) {
    registry.register_builtin(BMC_TYPE, new_access_details, HTTP_SCHEMES);
    registry.register_builtin(ILO5_BMC_TYPE, new_access_details, HTTP_SCHEMES);
    registry.register_builtin(IDRAC_BMC_TYPE, new_idrac_access_details, HTTP_SCHEMES);
}

/// Build generic Redfish access details.
pub fn new_access_details(
    parsed: &ParsedAddress,
    disable_certificate_verification: bool,
) -> Result<Box<dyn AccessDetails>> {
    Ok(Box::new(RedfishAccessDetails {
        endpoint: BmcEndpoint::new(parsed, disable_certificate_verification),
        flavor: Flavor::Generic,
    }))
}

/// Build iDRAC Redfish access details.
pub fn new_idrac_access_details(
    parsed: &ParsedAddress,
    disable_certificate_verification: bool,
) -> Result<Box<dyn AccessDetails>> {
    Ok(Box::new(RedfishAccessDetails {
        endpoint: BmcEndpoint::new(parsed, disable_certificate_verification),
        flavor: Flavor::Idrac,
    }))
}

/// Redfish driver info, also used by the virtual media drivers.
pub(crate) fn redfish_driver_info(endpoint: &BmcEndpoint, creds: &Credentials) -> DriverInfo {
    let mut info = endpoint.driver_info("redfish", endpoint.http_address(), creds);
    info.insert(
        "redfish_system_id".to_string(),
        Value::from(endpoint.path.as_str()),
    );
    info
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flavor {
    Generic,
    Idrac,
}

#[derive(Debug, Clone)]
struct RedfishAccessDetails {
    endpoint: BmcEndpoint,
    flavor: Flavor,
}

impl RedfishAccessDetails {
    /// Interface name for management, power and vendor.
    fn idrac_or_default(&self) -> &str {
        match self.flavor {
            Flavor::Generic => "",
            Flavor::Idrac => "idrac-redfish",
        }
    }
}

impl AccessDetails for RedfishAccessDetails {
    fn bmc_type(&self) -> &str {
        &self.endpoint.bmc_type
    }

    fn driver(&self) -> &str {
        match self.flavor {
            Flavor::Generic => "redfish",
            Flavor::Idrac => "idrac",
        }
    }

    fn disable_certificate_verification(&self) -> bool {
        self.endpoint.disable_certificate_verification
    }

    fn driver_info(&self, creds: &Credentials) -> DriverInfo {
        redfish_driver_info(&self.endpoint, creds)
    }

    fn bios_interface(&self) -> &str {
        self.idrac_or_default()
    }

    fn boot_interface(&self) -> &str {
        "ipxe"
    }

    fn firmware_interface(&self) -> &str {
        "redfish"
    }

    fn management_interface(&self) -> &str {
        self.idrac_or_default()
    }

    fn power_interface(&self) -> &str {
        self.idrac_or_default()
    }

    fn raid_interface(&self) -> &str {
        match self.flavor {
            Flavor::Generic => "redfish",
            Flavor::Idrac => "idrac-redfish",
        }
    }

    fn vendor_interface(&self) -> &str {
        self.idrac_or_default()
    }

    fn supports_secure_boot(&self) -> bool {
        true
    }

    fn supports_iso_preprovisioning_image(&self) -> bool {
        false
    }

    fn build_bios_settings(&self, config: Option<&FirmwareConfig>) -> Result<Vec<BiosSetting>> {
        reject_bios_settings(self.driver(), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::parse_address;
    use crate::error::{Error, FirmwareError};

    fn details(address: &str, disable: bool) -> Box<dyn AccessDetails> {
        let parsed = parse_address(address).unwrap();
        if parsed.base_scheme() == IDRAC_BMC_TYPE {
            new_idrac_access_details(&parsed, disable).unwrap()
        } else {
            new_access_details(&parsed, disable).unwrap()
        }
    }

    #[test]
    fn test_redfish_interfaces() {
        let redfish = details("redfish://192.0.2.1/redfish/v1/Systems/1", false);
        assert_eq!(redfish.driver(), "redfish");
        assert_eq!(redfish.bios_interface(), "");
        assert_eq!(redfish.boot_interface(), "ipxe");
        assert_eq!(redfish.management_interface(), "");
        assert_eq!(redfish.power_interface(), "");
        assert_eq!(redfish.raid_interface(), "redfish");
        assert_eq!(redfish.vendor_interface(), "");
        assert_eq!(redfish.firmware_interface(), "redfish");
        assert!(redfish.supports_secure_boot());
        assert!(!redfish.supports_iso_preprovisioning_image());
        assert!(redfish.requires_provisioning_network());
    }

    #[test]
    fn test_ilo5_redfish_is_generic() {
        let redfish = details("ilo5-redfish://192.0.2.1", false);
        assert_eq!(redfish.bmc_type(), "ilo5-redfish");
        assert_eq!(redfish.driver(), "redfish");
    }

    #[test]
    fn test_idrac_redfish_interfaces() {
        let idrac = details("idrac-redfish+https://192.0.2.1/redfish/v1/Systems/System.Embedded.1", false);
        assert_eq!(idrac.bmc_type(), "idrac-redfish+https");
        assert_eq!(idrac.driver(), "idrac");
        assert_eq!(idrac.bios_interface(), "idrac-redfish");
        assert_eq!(idrac.boot_interface(), "ipxe");
        assert_eq!(idrac.management_interface(), "idrac-redfish");
        assert_eq!(idrac.power_interface(), "idrac-redfish");
        assert_eq!(idrac.raid_interface(), "idrac-redfish");
        assert_eq!(idrac.vendor_interface(), "idrac-redfish");
        assert!(idrac.supports_secure_boot());
        assert!(idrac.requires_provisioning_network());
    }

    #[test]
    fn test_redfish_driver_info() {
        let creds = Credentials::new("admin", "secret");
        let info = details("redfish+http://192.0.2.1:8000/redfish/v1/Systems/1", true)
            .driver_info(&creds);
        assert_eq!(info["redfish_address"], "http://192.0.2.1:8000");
        assert_eq!(info["redfish_system_id"], "/redfish/v1/Systems/1");
        assert_eq!(info["redfish_username"], "admin");
        assert_eq!(info["redfish_password"], "secret");
        assert_eq!(info["redfish_verify_ca"], false);
    }

    #[test]
    fn test_redfish_system_id_is_decoded() {
        let creds = Credentials::new("admin", "secret");
        let info = details("redfish://192.0.2.1/redfish/v1/Systems/System%201", false)
            .driver_info(&creds);
        assert_eq!(info["redfish_system_id"], "/redfish/v1/Systems/System 1");
    }

    #[test]
    fn test_redfish_driver_info_defaults() {
        let creds = Credentials::new("admin", "secret");
        let info = details("redfish://[fe80::1]", false).driver_info(&creds);
        assert_eq!(info["redfish_address"], "https://[fe80::1]");
        assert_eq!(info["redfish_system_id"], "");
        assert!(!info.contains_key("redfish_verify_ca"));
    }

    #[test]
    fn test_redfish_bios_settings_unsupported() {
        for address in ["redfish://192.0.2.1", "idrac-redfish://192.0.2.1"] {
            let redfish = details(address, false);
            assert!(redfish.build_bios_settings(None).unwrap().is_empty());

            let err = redfish
                .build_bios_settings(Some(&FirmwareConfig::default()))
                .unwrap_err();
            assert!(matches!(
                err,
                Error::Firmware(FirmwareError::UnsupportedSettings { .. })
            ));
        }
    }
}
