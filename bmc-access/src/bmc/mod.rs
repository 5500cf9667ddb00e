//! BMC access details for multi-vendor support.
//!
//! Every BMC family is described by an [`AccessDetails`] implementation that
//! tells the provisioning engine which driver and sub-driver interfaces to
//! use, which capabilities the hardware has, and how to translate generic
//! firmware knobs into vendor BIOS settings.

mod builder;
mod credentials;
mod endpoint;
mod firmware;
mod registry;
pub mod vendors;

pub use builder::AccessDetailsBuilder;
pub use credentials::Credentials;
pub use firmware::{BiosSetting, FirmwareConfig};
pub use registry::{AccessDetailsFactory, DriverRegistry, new_access_details};

pub(crate) use endpoint::BmcEndpoint;
pub(crate) use firmware::{BiosVocabulary, reject_bios_settings};

use std::fmt;

use indexmap::IndexMap;

use crate::error::Result;

/// Driver configuration handed to the provisioning engine for a node.
///
/// Values are strings, except `*_verify_ca` which is a boolean.
pub type DriverInfo = IndexMap<String, serde_json::Value>;

/// Capability description of one BMC family.
///
/// Instances are immutable once built from a parsed address. Callers should
/// only ever go through this trait and never special-case a vendor.
pub trait AccessDetails: fmt::Debug + Send + Sync {
    /// The scheme the details were built from, including any `+transport`.
    fn bmc_type(&self) -> &str;

    /// Whether the provisioning engine must create a port for the boot MAC
    /// instead of relying on discovery.
    fn needs_mac(&self) -> bool {
        true
    }

    /// Driver family name (e.g. "idrac", "ilo5", "redfish").
    fn driver(&self) -> &str;

    /// Whether TLS certificate verification was disabled at construction.
    fn disable_certificate_verification(&self) -> bool;

    /// Build the driver configuration for these details and credentials.
    fn driver_info(&self, creds: &Credentials) -> DriverInfo;

    /// BIOS interface; empty selects the driver default.
    fn bios_interface(&self) -> &str;

    /// Boot interface; empty selects the driver default.
    fn boot_interface(&self) -> &str;

    /// Firmware interface; empty selects the driver default.
    fn firmware_interface(&self) -> &str;

    /// Management interface; empty selects the driver default.
    fn management_interface(&self) -> &str;

    /// Power interface; empty selects the driver default.
    fn power_interface(&self) -> &str;

    /// RAID interface; empty selects the driver default.
    fn raid_interface(&self) -> &str;

    /// Vendor interface; empty selects the driver default.
    fn vendor_interface(&self) -> &str;

    /// Whether UEFI secure boot can be managed.
    fn supports_secure_boot(&self) -> bool;

    /// Whether the ramdisk can be delivered as an ISO over virtual media.
    fn supports_iso_preprovisioning_image(&self) -> bool;

    /// Whether a provisioning network is needed to boot the ramdisk.
    fn requires_provisioning_network(&self) -> bool {
        !self.supports_iso_preprovisioning_image()
    }

    /// Translate generic firmware knobs into vendor BIOS settings.
    ///
    /// `None` is always accepted and yields no settings. Drivers without
    /// BIOS setting support fail for any `Some` config rather than
    /// dropping the request.
    fn build_bios_settings(&self, config: Option<&FirmwareConfig>) -> Result<Vec<BiosSetting>>;
}
