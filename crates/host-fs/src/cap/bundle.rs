use crate::model::BundleHeader;
use crate::{FsHost, parser, sidecar_path};
use bundlescope_plugin::{BoxError, BundleHandle, BundleLoader, ObjectId};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A bundle opened from disk. Only its header and sidecar are read.
#[derive(Debug)]
pub struct FsBundle {
    pub path: PathBuf,
    pub header: BundleHeader,
    scene_paths: Vec<String>,
}

impl FsBundle {
    pub fn open(path: &Path) -> Result<Self, BoxError> {
        let mut reader = BufReader::new(File::open(path)?);
        let header = parser::read_header(&mut reader)?;
        debug!(
            "Opened {} (format {}, engine {}, {:?})",
            path.display(),
            header.format_version,
            header.engine_revision,
            header.compression()
        );

        Ok(Self {
            path: path.to_path_buf(),
            header,
            scene_paths: Self::read_scene_paths(path),
        })
    }

    /// Scene list from the bundle's sidecar; empty when the sidecar is
    /// missing or unreadable.
    fn read_scene_paths(path: &Path) -> Vec<String> {
        let sidecar = sidecar_path(path);
        let Ok(source) = std::fs::read_to_string(&sidecar) else {
            return Vec::new();
        };
        match parser::parse_bundle_sidecar(&source) {
            Ok(sidecar) => sidecar.scene_paths(),
            Err(e) => {
                warn!("Ignoring sidecar {}: {}", sidecar.display(), e);
                Vec::new()
            }
        }
    }
}

impl BundleHandle for FsBundle {
    fn is_streamed_scene(&self) -> bool {
        !self.scene_paths.is_empty()
    }

    fn root_objects(&self) -> Vec<ObjectId> {
        Vec::new()
    }

    fn scene_paths(&self) -> Vec<String> {
        self.scene_paths.clone()
    }
}

impl BundleLoader for FsHost {
    fn load_bundle(&self, path: &Path) -> Result<Box<dyn BundleHandle>, BoxError> {
        Ok(Box::new(FsBundle::open(path)?))
    }
}
