//! Bundle discovery.
//!
//! Strategies are tried in priority order and the first one that returns
//! `Some` wins, even when the returned list is empty:
//!
//! ```text
//! custom hook ──None──▶ manifest ──None──▶ signature scan ──None──▶ exhausted
//! ```

pub mod custom;
pub mod manifest;
pub mod scan;

pub use custom::{CustomDiscoveryFn, CustomHookStrategy};
pub use manifest::ManifestStrategy;
pub use scan::SignatureScanStrategy;

use bundlescope_api::BundleRecord;
use bundlescope_plugin::ManifestLoader;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// One way of producing the bundle list of a build output directory.
pub trait DiscoveryStrategy: Send + Sync {
    /// `None` means "not applicable" and lets the next strategy run.
    fn discover(&self, root: &Path) -> Option<Vec<BundleRecord>>;

    /// Strategy name (for logging/reporting)
    fn name(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct DiscoveryOutcome {
    pub strategy: String,
    pub records: Vec<BundleRecord>,
}

/// Runs discovery strategies in priority order
pub struct BundleDiscovery {
    strategies: Vec<Box<dyn DiscoveryStrategy>>,
}

impl BundleDiscovery {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Hook (if any), then manifest, then signature scan.
    pub fn standard(
        custom: Option<CustomDiscoveryFn>,
        manifest: Arc<dyn ManifestLoader>,
        signature: &str,
    ) -> Self {
        let mut discovery = Self::new();
        if let Some(hook) = custom {
            discovery = discovery.add_strategy(Box::new(CustomHookStrategy::new(hook)));
        }
        discovery
            .add_strategy(Box::new(ManifestStrategy::new(manifest)))
            .add_strategy(Box::new(SignatureScanStrategy::new(signature)))
    }

    /// Append a strategy with the lowest priority so far
    pub fn add_strategy(mut self, strategy: Box<dyn DiscoveryStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn discover(&self, root: &Path) -> Option<DiscoveryOutcome> {
        for strategy in &self.strategies {
            debug!("Trying discovery strategy: {}", strategy.name());
            if let Some(records) = strategy.discover(root) {
                info!(
                    "Discovered {} bundles in {} via {}",
                    records.len(),
                    root.display(),
                    strategy.name()
                );
                return Some(DiscoveryOutcome {
                    strategy: strategy.name().to_string(),
                    records,
                });
            }
        }
        None
    }
}

impl Default for BundleDiscovery {
    fn default() -> Self {
        Self::new()
    }
}
