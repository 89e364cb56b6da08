use crate::error::FsHostError;
use crate::model::{BundleHeader, BundleSidecar, ManifestDocument, ManifestEntry, ManifestInfo};
use byteorder::{BigEndian, ReadBytesExt};
use serde_yaml::{Mapping, Value};
use std::io::{BufRead, Read};

pub const UNITY_FS_SIGNATURE: &str = "UnityFS";

/// Upper bound for the null-terminated strings of a header.
const MAX_HEADER_STRING: u64 = 256;

pub fn parse_manifest(source: &str) -> Result<Vec<ManifestEntry>, FsHostError> {
    let document: ManifestDocument = serde_yaml::from_str(source)?;
    let Some(infos) = document.manifest.infos else {
        return Ok(Vec::new());
    };

    let mut entries = Vec::new();
    for value in ordered_values(&infos) {
        let info: ManifestInfo = serde_yaml::from_value(value.clone())?;
        let dependencies = info
            .dependencies
            .as_ref()
            .map(|deps| {
                ordered_values(deps)
                    .into_iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        entries.push(ManifestEntry {
            name: info.name,
            dependencies,
        });
    }
    Ok(entries)
}

pub fn parse_bundle_sidecar(source: &str) -> Result<BundleSidecar, FsHostError> {
    Ok(serde_yaml::from_str(source)?)
}

/// Values of a `Key_N` mapping ordered by `N`. Keys without a numeric
/// suffix keep document order after the numbered ones.
fn ordered_values(mapping: &Mapping) -> Vec<&Value> {
    let mut indexed: Vec<(usize, &Value)> = mapping
        .iter()
        .map(|(key, value)| {
            let index = key
                .as_str()
                .and_then(|k| k.rsplit('_').next())
                .and_then(|n| n.parse().ok())
                .unwrap_or(usize::MAX);
            (index, value)
        })
        .collect();
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, value)| value).collect()
}

pub fn read_header<R: BufRead>(reader: &mut R) -> Result<BundleHeader, FsHostError> {
    let signature = read_cstring(reader)?;
    if signature != UNITY_FS_SIGNATURE {
        return Err(FsHostError::UnsupportedSignature(signature));
    }

    let format_version = reader.read_u32::<BigEndian>()?;
    let player_version = read_cstring(reader)?;
    let engine_revision = read_cstring(reader)?;
    let size = reader.read_u64::<BigEndian>()?;
    let compressed_blocks_info_size = reader.read_u32::<BigEndian>()?;
    let uncompressed_blocks_info_size = reader.read_u32::<BigEndian>()?;
    let flags = reader.read_u32::<BigEndian>()?;

    Ok(BundleHeader {
        signature,
        format_version,
        player_version,
        engine_revision,
        size,
        compressed_blocks_info_size,
        uncompressed_blocks_info_size,
        flags,
    })
}

fn read_cstring<R: BufRead>(reader: &mut R) -> Result<String, FsHostError> {
    let mut bytes = Vec::new();
    reader.by_ref().take(MAX_HEADER_STRING).read_until(0, &mut bytes)?;
    if bytes.pop() != Some(0) {
        return Err(FsHostError::MalformedHeader("unterminated string"));
    }
    String::from_utf8(bytes).map_err(|_| FsHostError::MalformedHeader("string is not utf-8"))
}
