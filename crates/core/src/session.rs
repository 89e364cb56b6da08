//! Analysis session: owns all state of one `analyze` run.
//!
//! ```text
//! Idle ─▶ Discovering ─▶ Building ─▶ Walking ─┬─▶ Done
//!  ▲           │                               └─▶ WaitingForScenes ─(poll)─▶ Done
//!  └─ failure ─┘            clear() from any state returns to Idle
//! ```

use crate::attribution::{AttributionStats, attribute};
use crate::config::AnalyzeConfig;
use crate::discovery::{BundleDiscovery, CustomDiscoveryFn};
use crate::error::{BundlescopeError, Result};
use crate::graph::{DependencyGraph, compute_reverse_depends};
use crate::registry::BundleRegistry;
use crate::report::build_report;
use crate::scene::SceneTracker;
use crate::signal::{CompletionEvent, CompletionListener, CompletionSignal};
use crate::walker::ObjectGraphWalker;
use bundlescope_api::{AnalysisReport, AnalysisState, AssetGuid, AssetRecord, BundleRecord};
use bundlescope_plugin::HostCaps;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

pub struct AnalysisSessionBuilder {
    caps: HostCaps,
    config: AnalyzeConfig,
    custom: Option<CustomDiscoveryFn>,
    listeners: Vec<CompletionListener>,
}

impl AnalysisSessionBuilder {
    pub fn with_config(mut self, config: AnalyzeConfig) -> Self {
        self.config = config;
        self
    }

    /// Discovery hook tried before the manifest and scan strategies
    pub fn with_custom_discovery(mut self, hook: CustomDiscoveryFn) -> Self {
        self.custom = Some(hook);
        self
    }

    pub fn on_completed(mut self, listener: CompletionListener) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn build(self) -> AnalysisSession {
        let mut signal = CompletionSignal::new();
        for listener in self.listeners {
            signal.subscribe(listener);
        }

        AnalysisSession {
            scenes: SceneTracker::new(self.caps.scenes.clone()),
            caps: self.caps,
            config: self.config,
            custom: self.custom,
            state: AnalysisState::Idle,
            root: None,
            strategy: None,
            registry: BundleRegistry::new(),
            signal,
            run: 0,
        }
    }
}

pub struct AnalysisSession {
    caps: HostCaps,
    config: AnalyzeConfig,
    custom: Option<CustomDiscoveryFn>,
    state: AnalysisState,
    root: Option<PathBuf>,
    strategy: Option<String>,
    registry: BundleRegistry,
    scenes: SceneTracker,
    signal: CompletionSignal,
    run: u64,
}

impl AnalysisSession {
    pub fn builder(caps: HostCaps) -> AnalysisSessionBuilder {
        AnalysisSessionBuilder {
            caps,
            config: AnalyzeConfig::default(),
            custom: None,
            listeners: Vec::new(),
        }
    }

    /// Analyzes every bundle under `root`.
    ///
    /// Any state of a previous run is discarded first. On failure the session
    /// is back in `Idle` with nothing retained. On success the returned state
    /// is `Done`, or `WaitingForScenes` if scene analysis is still running
    /// (see [`AnalysisSession::poll`]).
    pub fn analyze(&mut self, root: &Path) -> Result<AnalysisState> {
        self.reset();
        self.run += 1;

        if !root.is_dir() {
            error!("{} does not exist", root.display());
            return Err(BundlescopeError::DirectoryNotFound(root.to_path_buf()));
        }

        self.state = AnalysisState::Discovering;
        let discovery = BundleDiscovery::standard(
            self.custom.clone(),
            self.caps.manifest.clone(),
            &self.config.bundle_signature,
        );
        debug!("Discovery order: {:?}", discovery.strategy_names());
        let Some(outcome) = discovery.discover(root) else {
            error!("No bundles found in {}", root.display());
            self.reset();
            return Err(BundlescopeError::DiscoveryExhausted(root.to_path_buf()));
        };

        self.root = Some(root.to_path_buf());
        self.strategy = Some(outcome.strategy);
        self.registry.set_bundles(outcome.records);

        self.state = AnalysisState::Building;
        compute_reverse_depends(self.registry.bundles_mut());

        self.state = AnalysisState::Walking;
        self.walk_bundles();

        Ok(self.settle())
    }

    fn walk_bundles(&mut self) {
        let mut totals = AttributionStats::default();

        for idx in 0..self.registry.bundle_count() {
            let path = self.registry.bundles()[idx].path.clone();
            let handle = match self.caps.bundles.load_bundle(&path) {
                Ok(handle) => handle,
                Err(e) => {
                    warn!("Failed to load bundle {}: {}", path.display(), e);
                    continue;
                }
            };

            if handle.is_streamed_scene() {
                self.registry.bundles_mut()[idx].is_scene = true;
                let scene_paths = handle.scene_paths();
                self.scenes.hand_off(&self.registry.bundles()[idx], &scene_paths);
            } else if !self.config.scene_only {
                let roots = handle.root_objects();
                let (visited, _) = ObjectGraphWalker::new(&self.caps).walk(&roots);
                let record = self.registry.bundles()[idx].clone();
                let stats = attribute(
                    &record,
                    visited,
                    &self.caps,
                    &mut self.registry,
                    self.config.export_on_analyze,
                );
                totals.attributed += stats.attributed;
                totals.unidentified += stats.unidentified;
            }

            debug!("Releasing bundle {}", path.display());
            drop(handle);
        }

        info!(
            "Walked {} bundles: {} objects attributed, {} unidentified, {} assets",
            self.registry.bundle_count(),
            totals.attributed,
            totals.unidentified,
            self.registry.assets().len()
        );
    }

    fn settle(&mut self) -> AnalysisState {
        if self.scenes.is_pending() {
            info!("Waiting for {} scene bundles", self.scenes.handed_off().len());
            self.state = AnalysisState::WaitingForScenes;
        } else {
            self.complete();
        }
        self.state
    }

    fn complete(&mut self) {
        self.state = AnalysisState::Done;
        let event = CompletionEvent {
            run: self.run,
            root: self.root.clone().unwrap_or_default(),
            bundle_count: self.registry.bundle_count(),
            asset_count: self.registry.assets().len(),
        };
        if self.signal.fire(&event) {
            info!(
                "Analysis of {} complete: {} bundles, {} assets",
                event.root.display(),
                event.bundle_count,
                event.asset_count
            );
        }
    }

    /// Advances `WaitingForScenes` to `Done` once the scene analyzer is idle.
    pub fn poll(&mut self) -> AnalysisState {
        if self.state == AnalysisState::WaitingForScenes && !self.scenes.is_pending() {
            self.complete();
        }
        self.state
    }

    /// Discards all state and asks the host to reclaim cached artifacts.
    pub fn clear(&mut self) {
        self.reset();
        self.caps.bundles.release_unused();
        debug!("Analysis session cleared");
    }

    fn reset(&mut self) {
        self.registry.clear();
        self.scenes.reset();
        self.root = None;
        self.strategy = None;
        self.state = AnalysisState::Idle;
    }

    pub fn subscribe(&mut self, listener: CompletionListener) {
        self.signal.subscribe(listener);
    }

    pub fn state(&self) -> AnalysisState {
        self.state
    }

    pub fn config(&self) -> &AnalyzeConfig {
        &self.config
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Name of the discovery strategy that produced the current bundles
    pub fn strategy(&self) -> Option<&str> {
        self.strategy.as_deref()
    }

    pub fn registry(&self) -> &BundleRegistry {
        &self.registry
    }

    pub fn all_bundles(&self) -> &[BundleRecord] {
        self.registry.bundles()
    }

    pub fn bundle(&self, name: &str) -> Option<&BundleRecord> {
        self.registry.bundle(name)
    }

    pub fn all_assets(&self) -> &BTreeMap<AssetGuid, AssetRecord> {
        self.registry.assets()
    }

    /// Get-or-create lookup
    pub fn asset(&mut self, guid: AssetGuid) -> &mut AssetRecord {
        self.registry.asset_or_insert(guid)
    }

    pub fn find_asset(&self, guid: AssetGuid) -> Option<&AssetRecord> {
        self.registry.asset(guid)
    }

    pub fn dependency_graph(&self) -> DependencyGraph {
        DependencyGraph::build(self.registry.bundles())
    }

    pub fn report(&self) -> AnalysisReport {
        build_report(
            &self.registry,
            self.root.clone().unwrap_or_default(),
            self.state,
            self.strategy.clone(),
        )
    }
}
