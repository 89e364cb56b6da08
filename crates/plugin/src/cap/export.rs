use crate::BoxError;
use crate::object::{AssetIdentity, ObjectId};
use bundlescope_api::BundleRecord;

/// Side effect applied to each attributed object when export-on-analyze is on.
pub trait ObjectExporter: Send + Sync {
    fn export(
        &self,
        bundle: &BundleRecord,
        object: ObjectId,
        identity: Option<&AssetIdentity>,
    ) -> Result<(), BoxError>;
}
