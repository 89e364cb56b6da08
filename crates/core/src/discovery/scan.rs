use super::DiscoveryStrategy;
use bundlescope_api::BundleRecord;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Last-resort discovery: every file under the directory whose first bytes
/// match the bundle signature.
///
/// Lossy. A scan cannot recover dependencies, so every record has empty
/// (unknown, not "none") depend lists.
pub struct SignatureScanStrategy {
    signature: Vec<u8>,
}

impl SignatureScanStrategy {
    pub fn new(signature: &str) -> Self {
        Self {
            signature: signature.as_bytes().to_vec(),
        }
    }

    /// Reads exactly `signature.len()` bytes; shorter files never match.
    pub fn has_signature(path: &Path, signature: &[u8]) -> io::Result<bool> {
        let mut file = File::open(path)?;
        let mut prefix = vec![0u8; signature.len()];
        match file.read_exact(&mut prefix) {
            Ok(()) => Ok(prefix == signature),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Relative path with `/` separators, matching manifest-style names.
    fn relative_name(root: &Path, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(root).ok()?;
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        Some(parts.join("/"))
    }
}

impl DiscoveryStrategy for SignatureScanStrategy {
    fn discover(&self, root: &Path) -> Option<Vec<BundleRecord>> {
        let mut records = Vec::new();

        for entry in WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            match Self::has_signature(path, &self.signature) {
                Ok(true) => {
                    if let Some(name) = Self::relative_name(root, path) {
                        records.push(BundleRecord::new(name, path, root));
                    }
                }
                Ok(false) => debug!("Not a bundle: {}", path.display()),
                Err(e) => warn!("Failed to read {}: {}", path.display(), e),
            }
        }

        if records.is_empty() {
            return None;
        }
        Some(records)
    }

    fn name(&self) -> &str {
        "signature-scan"
    }
}
