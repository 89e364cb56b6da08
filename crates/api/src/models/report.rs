use super::asset::{AssetGuid, AssetRecord};
use super::bundle::{AnalysisState, BundleRecord};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Serializable snapshot of one analysis run.
#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
pub struct AnalysisReport {
    pub root: PathBuf,
    pub state: AnalysisState,
    /// Name of the discovery strategy that produced the bundle list.
    pub strategy: Option<String>,
    pub bundles: Vec<BundleRecord>,
    pub assets: Vec<AssetRecord>,
    /// Guids of assets carried by more than one bundle.
    pub duplicates: Vec<AssetGuid>,
    pub cross_bundle: Vec<BundleEdge>,
    pub cycles: Vec<Vec<String>>,
    pub stats: ReportStats,
}

/// `from` carries `count` assets owned by `to`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, JsonSchema)]
pub struct BundleEdge {
    pub from: String,
    pub to: String,
    pub count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct ReportStats {
    pub bundle_count: usize,
    pub scene_bundle_count: usize,
    pub asset_count: usize,
    pub duplicate_count: usize,
    /// Bundles that nothing depends on.
    pub root_bundle_count: usize,
}
