//! BMC login credentials.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{CredentialsError, Result};

/// Username and password used to log in to a BMC.
///
/// The password is kept in a [`SecretString`] so it never shows up in
/// `Debug` output or logs.
#[derive(Debug)]
pub struct Credentials {
    /// Login name.
    pub username: String,

    /// Login password.
    pub password: SecretString,
}

impl Credentials {
    /// Create credentials from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Expose the password for inclusion in driver configuration.
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }

    /// Check that both the username and password are set.
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() {
            return Err(CredentialsError::MissingField {
                field: "username".to_string(),
            }
            .into());
        }
        if self.password().is_empty() {
            return Err(CredentialsError::MissingField {
                field: "password".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_valid_credentials() {
        let creds = Credentials::new("admin", "secret");
        assert!(creds.validate().is_ok());
        assert_eq!(creds.password(), "secret");
    }

    #[test]
    fn test_missing_username() {
        let err = Credentials::new("", "secret").validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Credentials(CredentialsError::MissingField { ref field }) if field == "username"
        ));
        assert!(err.to_string().contains("'username'"));
    }

    #[test]
    fn test_missing_password() {
        let err = Credentials::new("admin", "").validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Credentials(CredentialsError::MissingField { ref field }) if field == "password"
        ));
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("admin", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }
}
