//! Object-graph traversal within one loaded bundle.
//!
//! Starting from a bundle's root objects, the walker follows every visible
//! object-reference field (including the normally hidden ones exposed by
//! [`InspectMode::Debug`]), the components attached to containers, and the
//! clips of plain animator controllers. The object graph is cyclic, so every
//! object is registered in the [`VisitedSet`] before its children are
//! explored and is never entered twice.

use bundlescope_plugin::{
    ComponentKind, ControllerRef, HostCaps, InspectMode, ObjectClass, ObjectHandle, ObjectId,
};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, warn};

/// An object reached during a walk.
pub struct VisitedObject {
    /// `None` when introspection failed; the object is still attributed.
    pub handle: Option<Box<dyn ObjectHandle>>,
    /// Listed among the bundle's root objects.
    pub root: bool,
    /// Discovery position within the walk.
    pub order: usize,
}

/// Bundle-local visited set keyed by object identity.
///
/// Owns the introspection handles; dropping the set releases them.
#[derive(Default)]
pub struct VisitedSet {
    entries: HashMap<ObjectId, VisitedObject>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, object: ObjectId) -> bool {
        self.entries.contains_key(&object)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, object: ObjectId) -> Option<&VisitedObject> {
        self.entries.get(&object)
    }

    /// Entries in discovery order.
    pub fn into_ordered(self) -> Vec<(ObjectId, VisitedObject)> {
        let mut entries: Vec<_> = self.entries.into_iter().collect();
        entries.sort_by_key(|(_, v)| v.order);
        entries
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkStats {
    pub visited: usize,
    pub followed_references: usize,
    pub components: usize,
    pub animator_clips: usize,
    pub introspection_failures: usize,
}

pub struct ObjectGraphWalker<'a> {
    caps: &'a HostCaps,
    visited: VisitedSet,
    stats: WalkStats,
}

impl<'a> ObjectGraphWalker<'a> {
    pub fn new(caps: &'a HostCaps) -> Self {
        Self {
            caps,
            visited: VisitedSet::new(),
            stats: WalkStats::default(),
        }
    }

    /// Walks from every root and returns the visited set.
    pub fn walk(mut self, roots: &[ObjectId]) -> (VisitedSet, WalkStats) {
        for &root in roots {
            self.visit(root, true);
        }
        debug!(
            "Walked {} objects ({} references, {} components, {} clips, {} failures)",
            self.stats.visited,
            self.stats.followed_references,
            self.stats.components,
            self.stats.animator_clips,
            self.stats.introspection_failures
        );
        (self.visited, self.stats)
    }

    /// Depth-first visit driven by an explicit frame stack. Each frame holds
    /// the not-yet-entered children of one object, in the order a recursive
    /// walk would enter them.
    pub fn visit(&mut self, object: ObjectId, root: bool) {
        let Some(children) = self.enter(object, root) else {
            return;
        };

        let mut stack = vec![children.into_iter()];
        while let Some(frame) = stack.last_mut() {
            match frame.next() {
                Some(child) => {
                    if let Some(grandchildren) = self.enter(child, false) {
                        stack.push(grandchildren.into_iter());
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    /// Registers `object` and returns its children, or `None` if it was
    /// already visited.
    fn enter(&mut self, object: ObjectId, root: bool) -> Option<Vec<ObjectId>> {
        let order = self.visited.len();
        let slot = match self.visited.entries.entry(object) {
            Entry::Occupied(mut seen) => {
                if root {
                    seen.get_mut().root = true;
                }
                return None;
            }
            Entry::Vacant(slot) => slot,
        };

        let handle = match self.caps.introspect.introspect(object, InspectMode::Debug) {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!("Failed to introspect object {}: {}", object, e);
                self.stats.introspection_failures += 1;
                None
            }
        };

        let mut children: Vec<ObjectId> = handle
            .as_ref()
            .map(|h| h.visible_fields().filter_map(|f| f.followable()).collect())
            .unwrap_or_default();
        self.stats.followed_references += children.len();

        slot.insert(VisitedObject {
            handle,
            root,
            order,
        });
        self.stats.visited += 1;

        match self.caps.hierarchy.classify(object) {
            ObjectClass::Container => {
                let components = self.caps.hierarchy.components_of(object);
                self.stats.components += components.len();
                children.extend(components);
            }
            ObjectClass::Component(ComponentKind::Animator) => {
                children.extend(self.animator_clips(object));
            }
            ObjectClass::Component(ComponentKind::Generic) | ObjectClass::Asset => {}
        }

        Some(children)
    }

    fn animator_clips(&mut self, animator: ObjectId) -> Vec<ObjectId> {
        match self.caps.animator.runtime_controller(animator) {
            Some(ControllerRef::Plain { clips }) => {
                self.stats.animator_clips += clips.len();
                clips
            }
            Some(ControllerRef::Override) => {
                debug!("Skipping override controller on animator {}", animator);
                Vec::new()
            }
            None => Vec::new(),
        }
    }
}
