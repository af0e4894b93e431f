//! Scene management
//!
//! Root objects live in a generational arena and are addressed by
//! [`ObjectId`]. Nested children are addressed by an [`ObjectRef`]: the root
//! handle plus a path of child indices, resolved on every use so a removed
//! root never leaves a dangling reference behind.

mod object;
#[allow(clippy::module_inception)]
mod scene;

pub use object::SceneObject;
pub use scene::Scene;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle of a root object in a [`Scene`]
    pub struct ObjectId;
}

/// Storage for root objects
pub type ObjectArena = SlotMap<ObjectId, SceneObject>;

/// Address of any node: a root handle plus a child index path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    /// Root object the path starts from
    pub root: ObjectId,
    /// Child indices from the root down to the node
    pub path: Vec<usize>,
}

impl ObjectRef {
    /// Reference to a root object itself
    pub fn root(root: ObjectId) -> Self {
        Self { root, path: Vec::new() }
    }

    /// Reference to a nested child
    pub fn child(root: ObjectId, path: Vec<usize>) -> Self {
        Self { root, path }
    }

    /// Find the node in an arena; `None` once the root is removed or the
    /// path no longer matches
    pub fn resolve<'a>(&self, objects: &'a ObjectArena) -> Option<&'a SceneObject> {
        objects.get(self.root)?.descendant(&self.path)
    }

    /// Mutable variant of [`ObjectRef::resolve`]
    pub fn resolve_mut<'a>(&self, objects: &'a mut ObjectArena) -> Option<&'a mut SceneObject> {
        objects.get_mut(self.root)?.descendant_mut(&self.path)
    }
}

impl From<ObjectId> for ObjectRef {
    fn from(id: ObjectId) -> Self {
        Self::root(id)
    }
}
