//! Registry mapping BMC schemes to access details factories.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use log::{debug, warn};
use once_cell::sync::Lazy;

use super::AccessDetails;
use super::vendors;
use crate::address::{ParsedAddress, parse_address};
use crate::error::{RegistryError, Result};

/// Builds access details from a parsed address and the
/// disable-certificate-verification flag.
pub type AccessDetailsFactory =
    Arc<dyn Fn(&ParsedAddress, bool) -> Result<Box<dyn AccessDetails>> + Send + Sync>;

/// Global driver registry, pre-populated with the built-in drivers.
static REGISTRY: Lazy<RwLock<DriverRegistry>> =
    Lazy::new(|| RwLock::new(DriverRegistry::with_builtin_drivers()));

/// Registry of access details factories, keyed by scheme.
///
/// Registration is expected to finish before lookups start. The global
/// instance is behind an `RwLock`; an owned registry can be passed around
/// by reference instead.
#[derive(Default)]
pub struct DriverRegistry {
    factories: HashMap<String, AccessDetailsFactory>,
}

impl DriverRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in vendor driver.
    pub fn with_builtin_drivers() -> Self {
        let mut registry = Self::new();
        registry.register_builtin_drivers();
        registry
    }

    /// Get the global registry.
    pub fn global() -> &'static RwLock<DriverRegistry> {
        &REGISTRY
    }

    fn register_builtin_drivers(&mut self) {
        vendors::ipmi::register(self);
        vendors::idrac::register(self);
        vendors::idrac_virtualmedia::register(self);
        vendors::ilo4::register(self);
        vendors::ilo5::register(self);
        vendors::irmc::register(self);
        vendors::redfish::register(self);
        vendors::redfish_virtualmedia::register(self);
        vendors::ibmc::register(self);
    }

    /// Register a built-in factory under `name` and `name+<scheme>` for each
    /// extra scheme. Built-in names never collide, so no check is done.
    pub(crate) fn register_builtin<F>(&mut self, name: &str, factory: F, extra_schemes: &[&str])
    where
        F: Fn(&ParsedAddress, bool) -> Result<Box<dyn AccessDetails>> + Send + Sync + 'static,
    {
        let factory: AccessDetailsFactory = Arc::new(factory);
        for key in scheme_keys(name, extra_schemes) {
            self.factories.insert(key, Arc::clone(&factory));
        }
    }

    /// Register a factory under `name` and `name+<scheme>` for each extra
    /// scheme (e.g. `"redfish"` with `["http", "https"]`).
    ///
    /// Fails without registering anything if any of those keys is taken.
    pub fn register_factory<F>(&mut self, name: &str, factory: F, extra_schemes: &[&str]) -> Result<()>
    where
        F: Fn(&ParsedAddress, bool) -> Result<Box<dyn AccessDetails>> + Send + Sync + 'static,
    {
        let keys = scheme_keys(name, extra_schemes);
        if let Some(taken) = keys.iter().find(|key| self.factories.contains_key(*key)) {
            warn!("refusing to register BMC type '{}' twice", taken);
            return Err(RegistryError::AlreadyRegistered {
                scheme: taken.clone(),
            }
            .into());
        }

        debug!("registering BMC types {:?}", keys);
        let factory: AccessDetailsFactory = Arc::new(factory);
        for key in keys {
            self.factories.insert(key, Arc::clone(&factory));
        }
        Ok(())
    }

    /// Parse `address` and build access details with the matching factory.
    pub fn new_access_details(
        &self,
        address: &str,
        disable_certificate_verification: bool,
    ) -> Result<Box<dyn AccessDetails>> {
        if address.is_empty() {
            return Err(RegistryError::EmptyAddress.into());
        }

        let parsed = parse_address(address)?;

        let Some(factory) = self.factories.get(&parsed.scheme) else {
            warn!("no BMC driver registered for type '{}'", parsed.scheme);
            return Err(RegistryError::UnknownBmcType {
                address: address.to_string(),
                bmc_type: parsed.scheme,
            }
            .into());
        };

        debug!("building access details for BMC type '{}' at '{}'", parsed.scheme, parsed.host);
        factory(&parsed, disable_certificate_verification)
    }

    /// Check if a scheme is registered.
    pub fn contains(&self, scheme: &str) -> bool {
        self.factories.contains_key(scheme)
    }

    /// List all registered schemes, sorted.
    pub fn schemes(&self) -> Vec<&str> {
        let mut schemes: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        schemes.sort_unstable();
        schemes
    }
}

impl fmt::Debug for DriverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverRegistry")
            .field("schemes", &self.schemes())
            .finish()
    }
}

fn scheme_keys(name: &str, extra_schemes: &[&str]) -> Vec<String> {
    std::iter::once(name.to_string())
        .chain(extra_schemes.iter().map(|scheme| format!("{name}+{scheme}")))
        .collect()
}

/// Build access details using the global registry.
pub fn new_access_details(
    address: &str,
    disable_certificate_verification: bool,
) -> Result<Box<dyn AccessDetails>> {
    DriverRegistry::global()
        .read()
        .map_err(|_| RegistryError::LockPoisoned)?
        .new_access_details(address, disable_certificate_verification)
}
