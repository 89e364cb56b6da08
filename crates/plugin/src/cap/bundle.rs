use crate::BoxError;
use crate::object::ObjectId;
use std::path::Path;

/// A loaded bundle. Dropping the handle unloads it.
pub trait BundleHandle {
    fn is_streamed_scene(&self) -> bool;

    /// Objects stored at the top level of the bundle.
    fn root_objects(&self) -> Vec<ObjectId>;

    fn scene_paths(&self) -> Vec<String>;
}

pub trait BundleLoader: Send + Sync {
    fn load_bundle(&self, path: &Path) -> Result<Box<dyn BundleHandle>, BoxError>;

    /// Reclaims whatever the host cached across loads.
    fn release_unused(&self) {}
}
