//! Built-in BMC vendor drivers.
//!
//! Each module registers its schemes through a `register` function called by
//! [`DriverRegistry::with_builtin_drivers`](crate::DriverRegistry::with_builtin_drivers).

pub mod ibmc;
pub mod idrac;
pub mod idrac_virtualmedia;
pub mod ilo4;
pub mod ilo5;
pub mod ipmi;
pub mod irmc;
pub mod redfish;
pub mod redfish_virtualmedia;

/// Transport suffixes accepted by HTTP based drivers.
const HTTP_SCHEMES: &[&str] = &["http", "https"];
