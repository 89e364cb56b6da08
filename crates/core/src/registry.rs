//! Discovered bundles and assets of one analysis session.

use bundlescope_api::{AssetGuid, AssetRecord, BundleEdge, BundleRecord};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

#[derive(Debug, Default)]
pub struct BundleRegistry {
    /// Bundles in discovery order
    bundles: Vec<BundleRecord>,
    /// Name -> position in `bundles`
    name_index: HashMap<String, usize>,
    assets: BTreeMap<AssetGuid, AssetRecord>,
}

impl BundleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the bundle set. Later records reusing a name are dropped.
    pub fn set_bundles(&mut self, records: Vec<BundleRecord>) {
        self.bundles.clear();
        self.name_index.clear();

        for record in records {
            if self.name_index.contains_key(&record.name) {
                warn!("Duplicate bundle name {}, keeping the first", record.name);
                continue;
            }
            self.name_index.insert(record.name.clone(), self.bundles.len());
            self.bundles.push(record);
        }
    }

    pub fn bundles(&self) -> &[BundleRecord] {
        &self.bundles
    }

    /// Mutable access for annotating records. Names must not be changed.
    pub fn bundles_mut(&mut self) -> &mut [BundleRecord] {
        &mut self.bundles
    }

    pub fn bundle(&self, name: &str) -> Option<&BundleRecord> {
        self.name_index.get(name).map(|&idx| &self.bundles[idx])
    }

    pub fn bundle_count(&self) -> usize {
        self.bundles.len()
    }

    pub fn assets(&self) -> &BTreeMap<AssetGuid, AssetRecord> {
        &self.assets
    }

    pub fn asset(&self, guid: AssetGuid) -> Option<&AssetRecord> {
        self.assets.get(&guid)
    }

    /// Get-or-insert lookup.
    pub fn asset_or_insert(&mut self, guid: AssetGuid) -> &mut AssetRecord {
        self.assets
            .entry(guid)
            .or_insert_with(|| AssetRecord::new(guid))
    }

    /// Assets whose walk membership includes `bundle`.
    pub fn assets_of<'a>(&'a self, bundle: &'a str) -> impl Iterator<Item = &'a AssetRecord> {
        self.assets
            .values()
            .filter(move |a| a.bundles.contains(bundle))
    }

    pub fn duplicates(&self) -> Vec<AssetGuid> {
        self.assets
            .values()
            .filter(|a| a.is_duplicated())
            .map(|a| a.guid)
            .collect()
    }

    /// Edges from each bundle to the owners of assets it carries but does not own.
    pub fn cross_bundle_edges(&self) -> Vec<BundleEdge> {
        let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
        for asset in self.assets.values() {
            let Some(owner) = asset.owner.as_deref() else {
                continue;
            };
            for borrower in asset.borrowers() {
                *counts.entry((borrower, owner)).or_default() += 1;
            }
        }

        counts
            .into_iter()
            .map(|((from, to), count)| BundleEdge {
                from: from.to_string(),
                to: to.to_string(),
                count,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty() && self.assets.is_empty()
    }

    pub fn clear(&mut self) {
        self.bundles.clear();
        self.name_index.clear();
        self.assets.clear();
    }
}
