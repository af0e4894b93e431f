//! Hierarchical scene object
//!
//! A node owns its mesh parts and its children. Its transform is local to
//! the parent, so moving a parent carries the whole subtree along.

use std::sync::Arc;

use crate::foundation::math::{Mat4, Transform, Vec3};
use crate::render::{BackendResult, Mesh, RenderBackend};

/// Node of the scene hierarchy
#[derive(Debug, Clone, Default)]
pub struct SceneObject {
    name: String,
    transform: Transform,
    meshes: Vec<Arc<Mesh>>,
    children: Vec<SceneObject>,
}

impl SceneObject {
    /// Create an object drawing the given mesh parts
    pub fn new(meshes: Vec<Arc<Mesh>>) -> Self {
        Self {
            meshes,
            ..Self::default()
        }
    }

    /// Object with no geometry, used as a grouping node
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder pattern: set the name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Translate by `delta` in parent space
    pub fn move_by(&mut self, delta: Vec3) {
        self.transform.position += delta;
    }

    /// Multiply the scale component-wise
    pub fn grow(&mut self, factor: Vec3) {
        self.transform.scale.component_mul_assign(&factor);
    }

    /// Add Euler angles (radians) to the orientation
    pub fn rotate(&mut self, delta: Vec3) {
        self.transform.orientation += delta;
    }

    /// Replace the position
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    /// Replace the orientation
    pub fn set_orientation(&mut self, orientation: Vec3) {
        self.transform.orientation = orientation;
    }

    /// Replace the scale
    pub fn set_scale(&mut self, scale: Vec3) {
        self.transform.scale = scale;
    }

    /// Position in parent space
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Orientation as Euler angles in radians
    pub fn orientation(&self) -> Vec3 {
        self.transform.orientation
    }

    /// Scale factors
    pub fn scale(&self) -> Vec3 {
        self.transform.scale
    }

    /// Full local transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Object name, empty when never set
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the object
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Append a child, returning its index
    pub fn add_child(&mut self, child: SceneObject) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    /// Child at `index`
    ///
    /// # Panics
    /// Panics when `index` is out of range. Use [`SceneObject::get_child`]
    /// when the index is not known to be valid.
    pub fn child(&self, index: usize) -> &SceneObject {
        &self.children[index]
    }

    /// Mutable child at `index`
    ///
    /// # Panics
    /// Panics when `index` is out of range.
    pub fn child_mut(&mut self, index: usize) -> &mut SceneObject {
        &mut self.children[index]
    }

    /// Child at `index`, if any
    pub fn get_child(&self, index: usize) -> Option<&SceneObject> {
        self.children.get(index)
    }

    /// Mutable child at `index`, if any
    pub fn get_child_mut(&mut self, index: usize) -> Option<&mut SceneObject> {
        self.children.get_mut(index)
    }

    /// Children in insertion order
    pub fn children(&self) -> &[SceneObject] {
        &self.children
    }

    /// Mesh parts in draw order
    pub fn meshes(&self) -> &[Arc<Mesh>] {
        &self.meshes
    }

    /// Walk a child index path starting at this node
    pub fn descendant(&self, path: &[usize]) -> Option<&SceneObject> {
        path.iter().try_fold(self, |node, &index| node.get_child(index))
    }

    /// Mutable variant of [`SceneObject::descendant`]
    pub fn descendant_mut(&mut self, path: &[usize]) -> Option<&mut SceneObject> {
        path.iter()
            .try_fold(self, |node, &index| node.get_child_mut(index))
    }

    /// Scale, then rotate, then translate
    pub fn local_matrix(&self) -> Mat4 {
        self.transform.to_matrix()
    }

    /// Draw this node and its subtree, pre-order
    ///
    /// Every mesh part of a node is drawn with
    /// `parent_world * local_matrix()` before any of its children.
    pub fn render<B: RenderBackend + ?Sized>(&self, backend: &mut B, parent_world: &Mat4) -> BackendResult<()> {
        let world = parent_world * self.local_matrix();
        for mesh in &self.meshes {
            backend.draw_mesh(mesh, &world)?;
        }
        for child in &self.children {
            child.render(backend, &world)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::HALF_PI;
    use crate::render::RecordingBackend;
    use approx::assert_relative_eq;

    fn named_mesh(name: &str) -> Arc<Mesh> {
        Arc::new(Mesh::cube().with_name(name))
    }

    #[test]
    fn test_defaults() {
        let object = SceneObject::empty();
        assert_eq!(object.name(), "");
        assert_eq!(object.position(), Vec3::zeros());
        assert_eq!(object.scale(), Vec3::new(1.0, 1.0, 1.0));
        assert!(object.meshes().is_empty());
        assert!(object.children().is_empty());
    }

    #[test]
    fn test_relative_and_absolute_edits() {
        let mut object = SceneObject::empty();
        object.move_by(Vec3::new(1.0, 0.0, 0.0));
        object.move_by(Vec3::new(0.0, 2.0, 0.0));
        object.grow(Vec3::new(2.0, 2.0, 2.0));
        object.grow(Vec3::new(0.5, 3.0, 1.0));
        object.rotate(Vec3::new(0.0, 0.25, 0.0));
        object.rotate(Vec3::new(0.0, 0.25, 0.0));

        assert_eq!(object.position(), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(object.scale(), Vec3::new(1.0, 6.0, 2.0));
        assert_relative_eq!(object.orientation().y, 0.5);

        object.set_position(Vec3::new(-3.0, 0.0, 0.0));
        object.set_scale(Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(object.position(), Vec3::new(-3.0, 0.0, 0.0));
        assert_eq!(object.scale(), Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_add_child_returns_index() {
        let mut parent = SceneObject::empty();
        assert_eq!(parent.add_child(SceneObject::empty().with_name("a")), 0);
        assert_eq!(parent.add_child(SceneObject::empty().with_name("b")), 1);
        assert_eq!(parent.child(1).name(), "b");
        assert!(parent.get_child(2).is_none());
    }

    #[test]
    #[should_panic]
    fn test_child_out_of_range_panics() {
        let parent = SceneObject::empty();
        let _ = parent.child(0);
    }

    #[test]
    fn test_descendant_path() {
        let mut grandchild_parent = SceneObject::empty();
        grandchild_parent.add_child(SceneObject::empty().with_name("leaf"));
        let mut root = SceneObject::empty();
        root.add_child(SceneObject::empty());
        root.add_child(grandchild_parent);

        assert_eq!(root.descendant(&[1, 0]).map(SceneObject::name), Some("leaf"));
        assert!(root.descendant(&[0, 0]).is_none());
        assert!(root.descendant(&[]).is_some());
    }

    #[test]
    fn test_local_matrix_order_is_scale_rotate_translate() {
        let mut object = SceneObject::empty();
        object.grow(Vec3::new(2.0, 2.0, 2.0));
        object.rotate(Vec3::new(0.0, HALF_PI, 0.0));
        object.move_by(Vec3::new(10.0, 0.0, 0.0));

        // (1,0,0) scaled to (2,0,0), yawed to (0,0,-2), then shifted
        let p = object.local_matrix().transform_point(&nalgebra::Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, nalgebra::Point3::new(10.0, 0.0, -2.0), epsilon = 1e-5);
    }

    #[test]
    fn test_render_is_pre_order_with_world_matrices() {
        let mut child = SceneObject::new(vec![named_mesh("child")]);
        child.move_by(Vec3::new(0.0, 1.0, 0.0));
        let mut root = SceneObject::new(vec![named_mesh("root_a"), named_mesh("root_b")]);
        root.move_by(Vec3::new(5.0, 0.0, 0.0));
        root.add_child(child);
        root.add_child(SceneObject::new(vec![named_mesh("second")]));

        let mut backend = RecordingBackend::new();
        root.render(&mut backend, &Mat4::identity()).unwrap();

        let names: Vec<_> = backend.draws.iter().map(|d| d.mesh_name.as_str()).collect();
        assert_eq!(names, ["root_a", "root_b", "child", "second"]);

        let child_world = backend.draws[2].model;
        assert_relative_eq!(child_world[(0, 3)], 5.0);
        assert_relative_eq!(child_world[(1, 3)], 1.0);
    }
}
