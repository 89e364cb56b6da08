use serde::Deserialize;
use serde_yaml::Mapping;

/// Sidecar of the manifest bundle (`<dir>/<dir>.manifest`).
#[derive(Debug, Deserialize)]
pub struct ManifestDocument {
    #[serde(rename = "AssetBundleManifest")]
    pub manifest: ManifestBody,
}

#[derive(Debug, Deserialize)]
pub struct ManifestBody {
    /// `Info_N` -> [`ManifestInfo`]
    #[serde(rename = "AssetBundleInfos", default)]
    pub infos: Option<Mapping>,
}

#[derive(Debug, Deserialize)]
pub struct ManifestInfo {
    #[serde(rename = "Name")]
    pub name: String,
    /// `Dependency_N` -> bundle name
    #[serde(rename = "Dependencies", default)]
    pub dependencies: Option<Mapping>,
}

/// One bundle of the manifest with its direct dependencies in build order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub name: String,
    pub dependencies: Vec<String>,
}

/// Sidecar of a single bundle (`<bundle>.manifest`). Only the asset list is
/// of interest here.
#[derive(Debug, Default, Deserialize)]
pub struct BundleSidecar {
    #[serde(rename = "Assets", default)]
    pub assets: Vec<String>,
}

impl BundleSidecar {
    /// Scene assets carried by the bundle.
    pub fn scene_paths(&self) -> Vec<String> {
        self.assets
            .iter()
            .filter(|a| a.ends_with(".unity"))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Lzma,
    Lz4,
    Lz4Hc,
    Unknown(u32),
}

/// Fixed part of a `UnityFS` bundle header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleHeader {
    pub signature: String,
    pub format_version: u32,
    pub player_version: String,
    pub engine_revision: String,
    pub size: u64,
    pub compressed_blocks_info_size: u32,
    pub uncompressed_blocks_info_size: u32,
    pub flags: u32,
}

impl BundleHeader {
    const COMPRESSION_MASK: u32 = 0x3f;
    const BLOCKS_INFO_AT_END: u32 = 0x80;

    pub fn compression(&self) -> Compression {
        match self.flags & Self::COMPRESSION_MASK {
            0 => Compression::None,
            1 => Compression::Lzma,
            2 => Compression::Lz4,
            3 => Compression::Lz4Hc,
            other => Compression::Unknown(other),
        }
    }

    pub fn blocks_info_at_end(&self) -> bool {
        self.flags & Self::BLOCKS_INFO_AT_END != 0
    }
}
