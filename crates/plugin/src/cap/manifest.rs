use crate::BoxError;
use std::path::Path;

/// A loaded bundle manifest.
pub trait BundleManifest {
    fn all_bundle_names(&self) -> Vec<String>;

    fn direct_dependencies(&self, bundle: &str) -> Vec<String>;

    /// Transitive closure of [`BundleManifest::direct_dependencies`].
    fn all_dependencies(&self, bundle: &str) -> Vec<String>;
}

/// Loads the manifest that declares every bundle of a build output.
pub trait ManifestLoader: Send + Sync {
    fn load_manifest(&self, path: &Path) -> Result<Box<dyn BundleManifest>, BoxError>;
}
