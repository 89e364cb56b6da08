use super::DiscoveryStrategy;
use bundlescope_api::BundleRecord;
use bundlescope_plugin::ManifestLoader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Reads the build manifest, which carries complete dependency lists.
///
/// The manifest is the file named after the output directory itself, e.g.
/// `Bundles/Android/Android`.
pub struct ManifestStrategy {
    loader: Arc<dyn ManifestLoader>,
}

impl ManifestStrategy {
    pub fn new(loader: Arc<dyn ManifestLoader>) -> Self {
        Self { loader }
    }

    pub fn manifest_path(root: &Path) -> Option<PathBuf> {
        let dir_name = match root.file_name() {
            Some(name) => name.to_os_string(),
            None => root.canonicalize().ok()?.file_name()?.to_os_string(),
        };
        Some(root.join(dir_name))
    }
}

impl DiscoveryStrategy for ManifestStrategy {
    fn discover(&self, root: &Path) -> Option<Vec<BundleRecord>> {
        let Some(manifest_path) = Self::manifest_path(root) else {
            debug!("Cannot derive a manifest name from {}", root.display());
            return None;
        };
        if !manifest_path.is_file() {
            debug!("No manifest at {}", manifest_path.display());
            return None;
        }

        let manifest = match self.loader.load_manifest(&manifest_path) {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!("Failed to load manifest {}: {}", manifest_path.display(), e);
                return None;
            }
        };

        let records = manifest
            .all_bundle_names()
            .into_iter()
            .map(|name| {
                let direct = manifest.direct_dependencies(&name);
                let all = manifest.all_dependencies(&name);
                BundleRecord::new(name.clone(), root.join(&name), root).with_depends(direct, all)
            })
            .collect();

        Some(records)
    }

    fn name(&self) -> &str {
        "manifest"
    }
}
