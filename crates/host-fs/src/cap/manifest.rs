use crate::model::ManifestEntry;
use crate::{FsHost, parser, sidecar_path};
use bundlescope_plugin::{BoxError, BundleManifest, ManifestLoader};
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;
use tracing::debug;

/// Manifest read from the text sidecar of the manifest bundle.
pub struct TextManifest {
    entries: Vec<ManifestEntry>,
    index: HashMap<String, usize>,
}

impl TextManifest {
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();
        Self { entries, index }
    }
}

impl BundleManifest for TextManifest {
    fn all_bundle_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    fn direct_dependencies(&self, bundle: &str) -> Vec<String> {
        self.index
            .get(bundle)
            .map(|&i| self.entries[i].dependencies.clone())
            .unwrap_or_default()
    }

    /// Breadth-first closure over direct dependencies.
    fn all_dependencies(&self, bundle: &str) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::from([bundle.to_string()]);
        let mut queue: VecDeque<String> = self.direct_dependencies(bundle).into();
        let mut all = Vec::new();

        while let Some(dep) = queue.pop_front() {
            if !seen.insert(dep.clone()) {
                continue;
            }
            queue.extend(self.direct_dependencies(&dep));
            all.push(dep);
        }
        all
    }
}

impl ManifestLoader for FsHost {
    fn load_manifest(&self, path: &Path) -> Result<Box<dyn BundleManifest>, BoxError> {
        let sidecar = sidecar_path(path);
        debug!("Reading manifest sidecar {}", sidecar.display());
        let source = std::fs::read_to_string(&sidecar)?;
        let entries = parser::parse_manifest(&source)?;
        Ok(Box::new(TextManifest::new(entries)))
    }
}
