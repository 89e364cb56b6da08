use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 64-bit asset identifier issued by the host.
pub type AssetGuid = i64;

/// One unique asset, keyed by guid, and the bundles that contain it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct AssetRecord {
    pub guid: AssetGuid,
    pub name: Option<String>,
    pub type_name: Option<String>,
    pub asset_path: Option<String>,
    /// Every bundle whose object walk reached this asset.
    #[serde(default)]
    pub bundles: BTreeSet<String>,
    /// Bundles that list this asset among their root objects.
    #[serde(default)]
    pub explicit_bundles: BTreeSet<String>,
    /// The single bundle this asset is attributed to.
    pub owner: Option<String>,
}

impl AssetRecord {
    pub fn new(guid: AssetGuid) -> Self {
        Self {
            guid,
            name: None,
            type_name: None,
            asset_path: None,
            bundles: BTreeSet::new(),
            explicit_bundles: BTreeSet::new(),
            owner: None,
        }
    }

    /// Records that `bundle` contains this asset.
    ///
    /// An explicit (root) membership takes ownership away from a bundle that
    /// only reached the asset by reference; otherwise the first bundle keeps it.
    pub fn attach(&mut self, bundle: &str, explicit: bool) {
        self.bundles.insert(bundle.to_string());
        if explicit {
            self.explicit_bundles.insert(bundle.to_string());
            let owner_is_explicit = self
                .owner
                .as_ref()
                .is_some_and(|o| self.explicit_bundles.contains(o));
            if !owner_is_explicit {
                self.owner = Some(bundle.to_string());
            }
        } else if self.owner.is_none() {
            self.owner = Some(bundle.to_string());
        }
    }

    /// True when more than one bundle carries a copy of this asset.
    pub fn is_duplicated(&self) -> bool {
        self.bundles.len() > 1
    }

    /// Bundles that contain the asset without owning it.
    pub fn borrowers(&self) -> impl Iterator<Item = &str> {
        self.bundles
            .iter()
            .map(String::as_str)
            .filter(move |b| self.owner.as_deref() != Some(*b))
    }
}
