use bundlescope_api::{AssetRecord, BundleEdge, BundleRecord};
use tabled::Tabled;

/// A terminal view of one bundle
#[derive(Tabled)]
pub struct BundleView {
    pub name: String,
    pub scene: String,
    pub depends: usize,
    pub all_depends: usize,
    pub dependents: usize,
}

impl BundleView {
    pub fn from_record(record: &BundleRecord) -> Self {
        Self {
            name: record.name.clone(),
            scene: if record.is_scene { "yes" } else { "-" }.to_string(),
            depends: record.direct_depends.len(),
            all_depends: record.all_depends.len(),
            dependents: record.be_depends.len(),
        }
    }
}

/// A duplicated asset and where its copies live
#[derive(Tabled)]
pub struct DuplicateView {
    pub guid: i64,
    pub name: String,
    #[tabled(rename = "type")]
    pub type_name: String,
    pub owner: String,
    pub bundles: String,
}

impl DuplicateView {
    pub fn from_asset(asset: &AssetRecord) -> Self {
        Self {
            guid: asset.guid,
            name: asset.name.clone().unwrap_or_else(|| "-".to_string()),
            type_name: asset.type_name.clone().unwrap_or_else(|| "-".to_string()),
            owner: asset.owner.clone().unwrap_or_else(|| "-".to_string()),
            bundles: join_or_dash(asset.bundles.iter().map(String::as_str)),
        }
    }
}

#[derive(Tabled)]
pub struct EdgeView {
    pub from: String,
    pub to: String,
    pub count: usize,
}

impl From<&BundleEdge> for EdgeView {
    fn from(edge: &BundleEdge) -> Self {
        Self {
            from: edge.from.clone(),
            to: edge.to.clone(),
            count: edge.count,
        }
    }
}

/// Forward and reverse edges of one bundle
#[derive(Tabled)]
pub struct DependencyView {
    pub bundle: String,
    pub depends_on: String,
    pub depended_by: String,
}

pub fn join_or_dash<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let joined = names.into_iter().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}
