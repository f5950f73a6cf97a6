use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::KitError;

/// Which [`IdProvider`](crate::IdProvider) the kit hands to new instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Deterministic `dialog-1`, `dialog-2`, ... ids. Stable across SSR runs.
    #[default]
    Sequential,
    /// Short random ids, safe when several kits share a document.
    Random,
}

/// Tunables shared by every component in the kit.
///
/// Every field has a default so that a missing or partial `kit.toml`
/// still yields a working configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitConfig {
    /// Viewports narrower than this many pixels render the mobile layout.
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u32,
    #[serde(default = "default_submenu_hide_delay_ms")]
    pub submenu_hide_delay_ms: u64,
    /// Fallback delay before a closed portal is detached, in case no
    /// animation-end signal arrives.
    #[serde(default = "default_portal_removal_delay_ms")]
    pub portal_removal_delay_ms: u64,
    #[serde(default)]
    pub tooltip_hide_delay_ms: u64,
    #[serde(default)]
    pub ids: IdStrategy,
}

fn default_mobile_breakpoint() -> u32 {
    768
}

fn default_submenu_hide_delay_ms() -> u64 {
    150
}

fn default_portal_removal_delay_ms() -> u64 {
    200
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: default_mobile_breakpoint(),
            submenu_hide_delay_ms: default_submenu_hide_delay_ms(),
            portal_removal_delay_ms: default_portal_removal_delay_ms(),
            tooltip_hide_delay_ms: 0,
            ids: IdStrategy::default(),
        }
    }
}

/// Top-level file structure matching `kit.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KitFile {
    #[serde(default)]
    kit: Option<KitConfig>,
}

impl KitConfig {
    /// Parse the `[kit]` table of a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, KitError> {
        let file: KitFile = toml::from_str(contents).map_err(|e| KitError::config(e.to_string()))?;
        Ok(file.kit.unwrap_or_default())
    }

    /// Read `path`, falling back to defaults when the file is missing or
    /// unparseable.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    tracing::debug!(?config, path = %path.display(), "loaded kit config");
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "failed to parse kit config, using defaults"
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::debug!(
                    path = %path.display(),
                    error = %e,
                    "kit config not found, using defaults"
                );
                Self::default()
            }
        }
    }

    pub fn submenu_hide_delay(&self) -> Duration {
        Duration::from_millis(self.submenu_hide_delay_ms)
    }

    pub fn portal_removal_delay(&self) -> Duration {
        Duration::from_millis(self.portal_removal_delay_ms)
    }

    pub fn tooltip_hide_delay(&self) -> Duration {
        Duration::from_millis(self.tooltip_hide_delay_ms)
    }
}
