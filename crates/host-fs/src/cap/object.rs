use crate::{FsHost, FsHostError};
use bundlescope_plugin::{
    AnimatorCap, AssetIdentity, BoxError, ControllerRef, HierarchyCap, IdentityCap, InspectMode,
    IntrospectCap, ObjectClass, ObjectHandle, ObjectId,
};

// Bundles from this host expose no objects, so these are never reached by a
// walk. They answer conservatively for callers probing them directly.

impl IntrospectCap for FsHost {
    fn introspect(
        &self,
        _object: ObjectId,
        _mode: InspectMode,
    ) -> Result<Box<dyn ObjectHandle>, BoxError> {
        Err(Box::new(FsHostError::NoRuntime))
    }
}

impl HierarchyCap for FsHost {
    fn classify(&self, _object: ObjectId) -> ObjectClass {
        ObjectClass::Asset
    }

    fn components_of(&self, _container: ObjectId) -> Vec<ObjectId> {
        Vec::new()
    }
}

impl AnimatorCap for FsHost {
    fn runtime_controller(&self, _animator: ObjectId) -> Option<ControllerRef> {
        None
    }
}

impl IdentityCap for FsHost {
    fn identify(&self, _object: ObjectId) -> Option<AssetIdentity> {
        None
    }
}
