use crate::cap::{
    AnimatorCap, BundleLoader, HierarchyCap, IdentityCap, IntrospectCap, ManifestLoader,
    ObjectExporter, SceneAnalyzer,
};
use std::sync::Arc;

/// Everything the analysis core needs from an asset-runtime host.
#[derive(Clone)]
pub struct HostCaps {
    pub manifest: Arc<dyn ManifestLoader>,
    pub bundles: Arc<dyn BundleLoader>,
    pub introspect: Arc<dyn IntrospectCap>,
    pub hierarchy: Arc<dyn HierarchyCap>,
    pub animator: Arc<dyn AnimatorCap>,
    pub identity: Arc<dyn IdentityCap>,
    pub scenes: Option<Arc<dyn SceneAnalyzer>>,
    pub exporter: Option<Arc<dyn ObjectExporter>>,
}
