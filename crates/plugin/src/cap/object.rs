use crate::BoxError;
use crate::object::{
    AssetIdentity, ControllerRef, InspectMode, ObjectClass, ObjectId, SerializedField,
};

/// Field-level view of one object. Dropping the handle disposes it.
pub trait ObjectHandle {
    fn object(&self) -> ObjectId;

    /// Every field visible under the mode the handle was opened with.
    fn visible_fields(&self) -> Box<dyn Iterator<Item = SerializedField> + '_>;
}

pub trait IntrospectCap: Send + Sync {
    fn introspect(
        &self,
        object: ObjectId,
        mode: InspectMode,
    ) -> Result<Box<dyn ObjectHandle>, BoxError>;
}

pub trait HierarchyCap: Send + Sync {
    fn classify(&self, object: ObjectId) -> ObjectClass;

    /// Components attached to a container and to all of its children,
    /// inactive ones included. Missing components are omitted.
    fn components_of(&self, container: ObjectId) -> Vec<ObjectId>;
}

pub trait AnimatorCap: Send + Sync {
    fn runtime_controller(&self, animator: ObjectId) -> Option<ControllerRef>;
}

pub trait IdentityCap: Send + Sync {
    /// `None` for objects that are not persistent assets.
    fn identify(&self, object: ObjectId) -> Option<AssetIdentity>;
}
