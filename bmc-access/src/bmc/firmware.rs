//! Firmware configuration and vendor BIOS setting translation.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{FirmwareError, Result};

/// Generic firmware knobs. `None` leaves the current setting unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmwareConfig {
    /// CPU virtualization extensions (VT-x / AMD-V).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtualization_enabled: Option<bool>,

    /// Simultaneous multithreading (Hyper-Threading).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simultaneous_multithreading_enabled: Option<bool>,

    /// SR-IOV support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sriov_enabled: Option<bool>,
}

/// A single vendor BIOS setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiosSetting {
    /// Vendor setting name.
    pub name: String,

    /// Vendor setting value.
    pub value: String,
}

impl BiosSetting {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Vendor names and value spellings for the [`FirmwareConfig`] knobs.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BiosVocabulary {
    pub virtualization: &'static str,
    pub simultaneous_multithreading: &'static str,
    pub sriov: &'static str,
    pub enabled: &'static str,
    pub disabled: &'static str,
}

impl BiosVocabulary {
    /// Emit one setting per knob that is set, in declaration order.
    pub fn translate(&self, config: Option<&FirmwareConfig>) -> Vec<BiosSetting> {
        let Some(config) = config else {
            return Vec::new();
        };

        [
            (self.virtualization, config.virtualization_enabled),
            (
                self.simultaneous_multithreading,
                config.simultaneous_multithreading_enabled,
            ),
            (self.sriov, config.sriov_enabled),
        ]
        .into_iter()
        .filter_map(|(name, knob)| {
            knob.map(|on| BiosSetting::new(name, if on { self.enabled } else { self.disabled }))
        })
        .collect()
    }
}

/// Settings handler for drivers that cannot change BIOS settings.
pub(crate) fn reject_bios_settings(
    driver: &str,
    config: Option<&FirmwareConfig>,
) -> Result<Vec<BiosSetting>> {
    match config {
        None => Ok(Vec::new()),
        Some(config) => {
            debug!("rejecting firmware settings {:?} for driver {}", config, driver);
            Err(FirmwareError::UnsupportedSettings {
                driver: driver.to_string(),
            }
            .into())
        }
    }
}
