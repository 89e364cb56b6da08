//! Hand-off of streamed-scene bundles to the host's scene analyzer.

use bundlescope_api::BundleRecord;
use bundlescope_plugin::SceneAnalyzer;
use std::sync::Arc;
use tracing::{info, warn};

/// Tracks scene bundles handed to the analyzer during one run.
pub struct SceneTracker {
    analyzer: Option<Arc<dyn SceneAnalyzer>>,
    handed_off: Vec<String>,
}

impl SceneTracker {
    pub fn new(analyzer: Option<Arc<dyn SceneAnalyzer>>) -> Self {
        Self {
            analyzer,
            handed_off: Vec::new(),
        }
    }

    /// Starts scene analysis for `bundle`. Returns false when no analyzer is
    /// configured, in which case the bundle stays unanalyzed.
    pub fn hand_off(&mut self, bundle: &BundleRecord, scene_paths: &[String]) -> bool {
        let Some(analyzer) = &self.analyzer else {
            warn!(
                "No scene analyzer configured, skipping scene bundle {}",
                bundle.name
            );
            return false;
        };

        info!(
            "Handing {} scenes of {} to the scene analyzer",
            scene_paths.len(),
            bundle.name
        );
        analyzer.begin(bundle, scene_paths);
        self.handed_off.push(bundle.name.clone());
        true
    }

    pub fn handed_off(&self) -> &[String] {
        &self.handed_off
    }

    /// True while handed-off work has not finished.
    pub fn is_pending(&self) -> bool {
        if self.handed_off.is_empty() {
            return false;
        }
        self.analyzer.as_ref().is_some_and(|a| a.is_pending())
    }

    pub fn reset(&mut self) {
        self.handed_off.clear();
    }
}
