//! Error types for bmc-access.

use thiserror::Error;

/// Main error type for bmc-access operations.
#[derive(Error, Debug)]
pub enum Error {
    /// BMC address parsing errors
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    /// Driver registry errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Firmware setting translation errors
    #[error("Firmware error: {0}")]
    Firmware(#[from] FirmwareError),

    /// Credential validation errors
    #[error("Credentials error: {0}")]
    Credentials(#[from] CredentialsError),
}

/// Address parsing errors.
#[derive(Error, Debug)]
pub enum AddressError {
    /// The address could not be coerced into any URL shape
    #[error("failed to parse BMC address information '{address}': {source}")]
    Malformed {
        address: String,
        #[source]
        source: url::ParseError,
    },

    /// The address looked like `host:port` but could not be split
    #[error("failed to parse BMC address information '{address}': {message}")]
    InvalidHostPort { address: String, message: String },

    /// The hostname is neither an IP literal nor a DNS name
    #[error("failed to parse BMC address information: invalid hostname '{hostname}'")]
    InvalidHostname { hostname: String },
}

/// Driver registry errors.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No address was supplied
    #[error("missing BMC address")]
    EmptyAddress,

    /// No factory is registered for the parsed scheme
    #[error("Unknown BMC type '{bmc_type}' for address {address}")]
    UnknownBmcType { address: String, bmc_type: String },

    /// A factory is already registered under this scheme
    #[error("BMC type '{scheme}' is already registered")]
    AlreadyRegistered { scheme: String },

    /// The global registry lock was poisoned by a panicking writer
    #[error("Failed to acquire registry lock")]
    LockPoisoned,
}

/// Firmware (BIOS) setting errors.
#[derive(Error, Debug)]
pub enum FirmwareError {
    /// The driver cannot apply firmware settings
    #[error("firmware settings for {driver} are not supported")]
    UnsupportedSettings { driver: String },
}

/// Credential validation errors.
#[derive(Error, Debug)]
pub enum CredentialsError {
    /// A required credential field is empty
    #[error("Missing BMC connection detail '{field}' in credentials")]
    MissingField { field: String },
}

/// Result type alias using bmc-access's Error.
pub type Result<T> = std::result::Result<T, Error>;
