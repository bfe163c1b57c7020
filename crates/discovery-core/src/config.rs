//! Runtime configuration, read from `settings.toml`.
//!
//! Every table is optional; missing keys take their defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use discovery_model::FlowKind;

use crate::error::{DiscoveryError, Result};
use crate::flow::FlowDefinition;
use crate::gate::ColumnGatePolicy;

pub const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// ROOT CONFIG
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Delays of the simulated operations.
    pub timing: TimingConfig,

    /// Flow selection and gating.
    pub flow: FlowConfig,
}

impl DiscoveryConfig {
    /// Load from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| DiscoveryError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| DiscoveryError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` if given, else from the platform config directory.
    ///
    /// Falls back to defaults when no file exists at the default location. An
    /// explicitly given path must exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from(path);
        }
        match Self::config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Default config file location.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "CompanyDiscovery", "discovery")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Step table for `kind` with this config's gating and padding.
    pub fn flow_definition(&self, kind: FlowKind) -> FlowDefinition {
        FlowDefinition::for_kind(kind, self.flow.column_gate, self.flow.padding_target)
    }
}

// =============================================================================
// TIMING
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub fetch_delay_ms: u64,
    pub save_delay_ms: u64,
    /// How long the save confirmation stays before closing itself.
    pub save_dismiss_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fetch_delay_ms: 1200,
            save_delay_ms: 2000,
            save_dismiss_ms: 2000,
        }
    }
}

impl TimingConfig {
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    pub fn save_delay(&self) -> Duration {
        Duration::from_millis(self.save_delay_ms)
    }

    pub fn save_dismiss(&self) -> Duration {
        Duration::from_millis(self.save_dismiss_ms)
    }
}

// =============================================================================
// FLOW
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub default_flow: FlowKind,
    /// Result count of the padded preview.
    pub padding_target: usize,
    /// Replaces each variant's own column gating when set.
    pub column_gate: Option<ColumnGatePolicy>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            default_flow: FlowKind::default(),
            padding_target: 10,
            column_gate: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::Gate;

    #[test]
    fn empty_file_gives_defaults() {
        let config: DiscoveryConfig = toml::from_str("").expect("parse");
        assert_eq!(config, DiscoveryConfig::default());
        assert_eq!(config.timing.fetch_delay(), Duration::from_millis(1200));
        assert_eq!(config.flow.default_flow, FlowKind::ThreeStage);
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config: DiscoveryConfig = toml::from_str(
            r#"
[timing]
fetch_delay_ms = 10

[flow]
default_flow = "dashboard"
column_gate = "per-stage"
"#,
        )
        .expect("parse");
        assert_eq!(config.timing.fetch_delay_ms, 10);
        assert_eq!(config.timing.save_delay_ms, 2000);
        assert_eq!(config.flow.padding_target, 10);
        let definition = config.flow_definition(FlowKind::Dashboard);
        assert_eq!(definition.steps()[1].gate, Gate::IndustrySpecific);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-settings.toml");
        let err = DiscoveryConfig::load_or_default(Some(&path)).unwrap_err();
        assert!(matches!(err, DiscoveryError::ConfigIo { .. }));
    }

    #[test]
    fn unknown_flow_is_rejected() {
        assert!(toml::from_str::<DiscoveryConfig>("[flow]\ndefault_flow = \"wizard\"").is_err());
    }
}
