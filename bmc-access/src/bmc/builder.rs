//! Builder for creating access details.

use super::{AccessDetails, DriverRegistry};
use crate::error::{RegistryError, Result};

/// Builder for constructing [`AccessDetails`] from a BMC address.
///
/// # Example
///
/// ```rust
/// use bmc_access::AccessDetailsBuilder;
///
/// # fn example() -> Result<(), bmc_access::Error> {
/// let details = AccessDetailsBuilder::new("idrac-virtualmedia://192.168.1.10/redfish/v1/Systems/System.Embedded.1")
///     .disable_certificate_verification(true)
///     .build()?;
///
/// assert_eq!(details.driver(), "idrac");
/// assert!(details.supports_iso_preprovisioning_image());
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct AccessDetailsBuilder<'a> {
    address: String,
    disable_certificate_verification: bool,
    registry: Option<&'a DriverRegistry>,
}

impl<'a> AccessDetailsBuilder<'a> {
    /// Create a new builder for the specified BMC address.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            disable_certificate_verification: false,
            registry: None,
        }
    }

    /// Skip TLS certificate verification when talking to the BMC.
    pub fn disable_certificate_verification(mut self, disable: bool) -> Self {
        self.disable_certificate_verification = disable;
        self
    }

    /// Look the scheme up in `registry` instead of the global registry.
    pub fn registry(mut self, registry: &'a DriverRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the access details.
    pub fn build(self) -> Result<Box<dyn AccessDetails>> {
        match self.registry {
            Some(registry) => {
                registry.new_access_details(&self.address, self.disable_certificate_verification)
            }
            None => DriverRegistry::global()
                .read()
                .map_err(|_| RegistryError::LockPoisoned)?
                .new_access_details(&self.address, self.disable_certificate_verification),
        }
    }
}
