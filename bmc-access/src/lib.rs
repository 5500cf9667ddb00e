//! # bmc-access
//!
//! BMC address parsing and vendor driver capability descriptions for
//! bare-metal provisioning.
//!
//! bmc-access turns a free-form Baseboard Management Controller address such
//! as `idrac-virtualmedia://10.0.0.5/redfish/v1/Systems/System.Embedded.1`
//! or just `10.0.0.5:623` into an [`AccessDetails`] trait object. The trait
//! tells a provisioning engine which driver and interfaces to use, what the
//! hardware can do, and how to translate generic firmware knobs into vendor
//! BIOS settings. No hardware is contacted.
//!
//! ## Features
//!
//! - Tolerant address parsing (bare hosts default to IPMI)
//! - Multi-vendor support (IPMI, iDRAC, iLO 4/5, iRMC, Redfish, iBMC)
//! - `+http` / `+https` transport suffixes on HTTP based schemes
//! - Explicit, extensible driver registry
//!
//! ## Quick Start
//!
//! ```rust
//! use bmc_access::{Credentials, FirmwareConfig, new_access_details};
//!
//! fn main() -> Result<(), bmc_access::Error> {
//!     let details = new_access_details("idrac+https://192.168.1.10", false)?;
//!
//!     let creds = Credentials::new("root", "calvin");
//!     let driver_info = details.driver_info(&creds);
//!     assert_eq!(driver_info["drac_protocol"], "https");
//!
//!     let config = FirmwareConfig {
//!         virtualization_enabled: Some(true),
//!         ..Default::default()
//!     };
//!     let settings = details.build_bios_settings(Some(&config))?;
//!     assert_eq!(settings[0].name, "ProcVirtualization");
//!     Ok(())
//! }
//! ```

pub mod address;
pub mod bmc;
pub mod error;

// Re-export main types for convenience
pub use address::{ParsedAddress, parse_address};
pub use bmc::{
    AccessDetails, AccessDetailsBuilder, AccessDetailsFactory, BiosSetting, Credentials,
    DriverInfo, DriverRegistry, FirmwareConfig, new_access_details,
};
pub use error::{Error, Result};
