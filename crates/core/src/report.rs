use crate::graph::DependencyGraph;
use crate::registry::BundleRegistry;
use bundlescope_api::{AnalysisReport, AnalysisState, ReportStats};
use std::path::PathBuf;

pub fn build_report(
    registry: &BundleRegistry,
    root: PathBuf,
    state: AnalysisState,
    strategy: Option<String>,
) -> AnalysisReport {
    let graph = DependencyGraph::build(registry.bundles());
    let duplicates = registry.duplicates();

    let stats = ReportStats {
        bundle_count: registry.bundle_count(),
        scene_bundle_count: registry.bundles().iter().filter(|b| b.is_scene).count(),
        asset_count: registry.assets().len(),
        duplicate_count: duplicates.len(),
        root_bundle_count: registry
            .bundles()
            .iter()
            .filter(|b| b.be_depends.is_empty())
            .count(),
    };

    AnalysisReport {
        root,
        state,
        strategy,
        bundles: registry.bundles().to_vec(),
        assets: registry.assets().values().cloned().collect(),
        duplicates,
        cross_bundle: registry.cross_bundle_edges(),
        cycles: graph.cycles(),
        stats,
    }
}
