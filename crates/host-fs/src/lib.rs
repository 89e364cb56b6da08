//! Filesystem host: reads build output directly from disk, without a live
//! asset runtime.
//!
//! Bundle-level information (names, dependencies, headers, scene contents)
//! comes from the bundle files and their `.manifest` sidecars. Object
//! introspection is unavailable, so walks over bundles loaded by this host
//! are empty.

pub mod cap;
pub mod error;
pub mod model;
pub mod parser;

pub use cap::fs_caps;
pub use error::FsHostError;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub struct FsHost {
    _private: (),
}

impl FsHost {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for FsHost {
    fn default() -> Self {
        Self::new()
    }
}

/// `Bundles/Android/ui` -> `Bundles/Android/ui.manifest`
pub fn sidecar_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".manifest");
    PathBuf::from(name)
}
