//! HPE iLO 4 driver, with and without virtual media boot.

use crate::address::ParsedAddress;
use crate::bmc::{
    AccessDetails, BiosSetting, BiosVocabulary, BmcEndpoint, Credentials, DriverInfo,
    DriverRegistry, FirmwareConfig,
};
use crate::error::Result;

/// Scheme name for iLO 4.
pub const BMC_TYPE: &str = "ilo4";

/// Scheme name for iLO 4 booting over virtual media.
pub const VIRTUAL_MEDIA_BMC_TYPE: &str = "ilo4-virtualmedia";

/// HPE BIOS attribute names, shared with iLO 5.
pub(crate) const ILO_BIOS: BiosVocabulary = BiosVocabulary {
    virtualization: "ProcVirtualization",
    simultaneous_multithreading: "ProcHyperthreading",
    sriov: "Sriov",
    enabled: "Enabled",
    disabled: "Disabled",
};

pub(crate) fn register(registry: &mut DriverRegistry) {
    registry.register_builtin(BMC_TYPE, new_access_details, &["https"]);
    registry.register_builtin(
        VIRTUAL_MEDIA_BMC_TYPE,
        new_virtual_media_access_details,
        &["https"],
    );
}

/// Build iLO 4 access details.
pub fn new_access_details(
    parsed: &ParsedAddress,
    disable_certificate_verification: bool,
) -> Result<Box<dyn AccessDetails>> {
    Ok(Box::new(Ilo4AccessDetails {
        endpoint: BmcEndpoint::new(parsed, disable_certificate_verification),
        use_virtual_media: false,
    }))
}

/// Build iLO 4 access details that boot over virtual media.
pub fn new_virtual_media_access_details(
    parsed: &ParsedAddress,
    disable_certificate_verification: bool,
) -> Result<Box<dyn AccessDetails>> {
    Ok(Box::new(Ilo4AccessDetails {
        endpoint: BmcEndpoint::new(parsed, disable_certificate_verification),
        use_virtual_media: true,
    }))
}

/// iLO driver info, also used by iLO 5.
pub(crate) fn ilo_driver_info(endpoint: &BmcEndpoint, creds: &Credentials) -> DriverInfo {
    let mut info = endpoint.driver_info("ilo", endpoint.hostname.as_str(), creds);
    endpoint.insert_port(&mut info, "client_port");
    info
}

#[derive(Debug, Clone)]
struct Ilo4AccessDetails {
    endpoint: BmcEndpoint,
    use_virtual_media: bool,
}

impl AccessDetails for Ilo4AccessDetails {
    fn bmc_type(&self) -> &str {
        &self.endpoint.bmc_type
    }

    fn driver(&self) -> &str {
        "ilo"
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
        if self.use_virtual_media {
            "ilo-virtual-media"
        } else {
            "ilo-ipxe"
        }
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
        true
    }

    fn supports_iso_preprovisioning_image(&self) -> bool {
        self.use_virtual_media
    }

    fn build_bios_settings(&self, config: Option<&FirmwareConfig>) -> Result<Vec<BiosSetting>> {
        Ok(ILO_BIOS.translate(config))
    }
}
