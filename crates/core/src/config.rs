use crate::error::{BundlescopeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BUNDLE_SIGNATURE: &str = "Unity";

/// Switches for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeConfig {
    /// Hand every attributed object to the host exporter.
    pub export_on_analyze: bool,
    /// Only analyze scene bundles; non-scene bundles are loaded but not walked.
    pub scene_only: bool,
    /// Magic prefix identifying a bundle file during a directory scan.
    pub bundle_signature: String,
    pub scene_poll_interval_ms: u64,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            export_on_analyze: false,
            scene_only: false,
            bundle_signature: DEFAULT_BUNDLE_SIGNATURE.to_string(),
            scene_poll_interval_ms: 100,
        }
    }
}

impl AnalyzeConfig {
    /// Loads `~/.bundlescope/config.json`, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_path() -> PathBuf {
        base_dir().join("config.json")
    }

    fn validate(&self) -> Result<()> {
        if self.bundle_signature.is_empty() {
            return Err(BundlescopeError::Config(
                "bundle_signature must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Root of all per-user state (`~/.bundlescope`).
pub fn base_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bundlescope")
}
