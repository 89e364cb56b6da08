use bundlescope_api::AssetGuid;
use serde::{Deserialize, Serialize};

/// Identity of a live object inside a loaded bundle.
///
/// Issued by the host; two distinct objects never share an id while their
/// bundle is loaded, even if they are structurally identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Field visibility requested from an introspection handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InspectMode {
    #[default]
    Normal,
    /// Also exposes internal fields hidden from the normal view.
    Debug,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    ObjectReference,
    Value,
}

/// One visible serialized field of an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedField {
    pub path: String,
    pub kind: FieldKind,
    /// Target of an object-reference field; `None` for null references and
    /// value fields.
    pub reference: Option<ObjectId>,
}

impl SerializedField {
    pub fn reference(path: impl Into<String>, target: Option<ObjectId>) -> Self {
        Self {
            path: path.into(),
            kind: FieldKind::ObjectReference,
            reference: target,
        }
    }

    pub fn value(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: FieldKind::Value,
            reference: None,
        }
    }

    /// The referenced object, if this is a non-null object reference.
    pub fn followable(&self) -> Option<ObjectId> {
        match self.kind {
            FieldKind::ObjectReference => self.reference,
            FieldKind::Value => None,
        }
    }
}

/// Runtime type of an object, as far as the walker cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectClass {
    #[default]
    Asset,
    /// A scene-object container whose attached components must be visited.
    Container,
    Component(ComponentKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Generic,
    /// Carries a runtime-bound controller invisible to field introspection.
    Animator,
}

/// The controller bound to an animator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerRef {
    Plain { clips: Vec<ObjectId> },
    /// Override remapping is not modeled; its clips are not traversed.
    Override,
}

/// Persistent identity of an object, used to attribute it to bundles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetIdentity {
    pub guid: AssetGuid,
    pub name: Option<String>,
    pub type_name: Option<String>,
    pub asset_path: Option<String>,
}

impl AssetIdentity {
    pub fn new(guid: AssetGuid) -> Self {
        Self {
            guid,
            name: None,
            type_name: None,
            asset_path: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self.type_name = Some(type_name.into());
        self
    }
}
