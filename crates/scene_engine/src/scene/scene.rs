//! Scene: shader program, ordered root objects and animators

use crate::animation::Animator;
use crate::foundation::math::{Mat4, Point3, Vec3};
use crate::render::{BackendResult, RenderBackend, ShaderProgram};
use crate::scene::{ObjectArena, ObjectId, ObjectRef, SceneObject};

/// Everything drawn with one shader program
///
/// Root objects are drawn in insertion order. Removing an object keeps the
/// relative order of the others and leaves their handles valid.
#[derive(Debug, Default)]
pub struct Scene {
    program: ShaderProgram,
    objects: ObjectArena,
    order: Vec<ObjectId>,
    animators: Vec<Animator>,
}

impl Scene {
    /// Create an empty scene drawn with `program`
    pub fn new(program: ShaderProgram) -> Self {
        Self {
            program,
            ..Self::default()
        }
    }

    /// Shader program used for every object
    pub fn program(&self) -> &ShaderProgram {
        &self.program
    }

    /// Mutable access to the program, for setting uniforms
    pub fn program_mut(&mut self) -> &mut ShaderProgram {
        &mut self.program
    }

    /// Append a root object
    pub fn add_object(&mut self, object: SceneObject) -> ObjectId {
        let id = self.objects.insert(object);
        self.order.push(id);
        id
    }

    /// Remove a root object, returning it
    ///
    /// Returns `None` if the handle was already removed.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<SceneObject> {
        let object = self.objects.remove(id)?;
        self.order.retain(|&other| other != id);
        log::debug!("Removed object '{}' ({} left)", object.name(), self.order.len());
        Some(object)
    }

    /// Root object by handle
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    /// Mutable root object by handle
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id)
    }

    /// Any node by reference
    pub fn resolve(&self, reference: &ObjectRef) -> Option<&SceneObject> {
        reference.resolve(&self.objects)
    }

    /// Any node by reference, mutably
    pub fn resolve_mut(&mut self, reference: &ObjectRef) -> Option<&mut SceneObject> {
        reference.resolve_mut(&mut self.objects)
    }

    /// First root object (in draw order) with the given name
    pub fn find_by_name(&self, name: &str) -> Option<ObjectId> {
        self.order
            .iter()
            .copied()
            .find(|&id| self.objects.get(id).is_some_and(|o| o.name() == name))
    }

    /// Product of local matrices from the root down to the node
    pub fn world_transform(&self, reference: &ObjectRef) -> Option<Mat4> {
        let mut node = self.objects.get(reference.root)?;
        let mut world = node.local_matrix();
        for &index in &reference.path {
            node = node.get_child(index)?;
            world *= node.local_matrix();
        }
        Some(world)
    }

    /// Origin of the node in world space
    pub fn world_position(&self, reference: &ObjectRef) -> Option<Vec3> {
        self.world_transform(reference)
            .map(|world| world.transform_point(&Point3::origin()).coords)
    }

    /// Number of root objects
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the scene has no root objects
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Root objects in draw order
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.objects.get(id).map(|object| (id, object)))
    }

    /// Register an animator; it is started with the others
    pub fn add_animator(&mut self, animator: Animator) {
        self.animators.push(animator);
    }

    /// Registered animators
    pub fn animators(&self) -> &[Animator] {
        &self.animators
    }

    /// Start every registered animator
    pub fn start_animators(&mut self) {
        for animator in &mut self.animators {
            animator.start();
        }
    }

    /// Advance every animator by the same `dt`
    pub fn tick_animators(&mut self, dt: f32) {
        for animator in &mut self.animators {
            animator.tick(&mut self.objects, dt);
        }
    }

    /// Bind the program and draw all root objects in order
    pub fn render<B: RenderBackend + ?Sized>(&self, backend: &mut B) -> BackendResult<()> {
        backend.bind_program(&self.program)?;
        let identity = Mat4::identity();
        for (_, object) in self.iter() {
            object.render(backend, &identity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::RotationAnimation;
    use crate::render::RecordingBackend;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::Arc;

    fn named(name: &str) -> SceneObject {
        SceneObject::new(vec![Arc::new(crate::render::Mesh::cube().with_name(name))]).with_name(name)
    }

    fn random_vec(rng: &mut StdRng, range: std::ops::Range<f32>) -> Vec3 {
        Vec3::new(
            rng.gen_range(range.clone()),
            rng.gen_range(range.clone()),
            rng.gen_range(range),
        )
    }

    #[test]
    fn test_remove_preserves_order_and_other_handles() {
        let mut scene = Scene::default();
        let a = scene.add_object(named("a"));
        let b = scene.add_object(named("b"));
        let c = scene.add_object(named("c"));

        assert!(scene.remove_object(b).is_some());
        assert!(scene.remove_object(b).is_none());
        assert_eq!(scene.len(), 2);

        let names: Vec<_> = scene.iter().map(|(_, o)| o.name().to_string()).collect();
        assert_eq!(names, ["a", "c"]);
        assert_eq!(scene.object(a).map(SceneObject::name), Some("a"));
        assert_eq!(scene.object(c).map(SceneObject::name), Some("c"));
        assert!(scene.object(b).is_none());
    }

    #[test]
    fn test_find_by_name_after_removal() {
        let mut scene = Scene::default();
        let steve = scene.add_object(named("Steve"));
        let creeper = scene.add_object(named("Creeper"));

        assert_eq!(scene.find_by_name("Creeper"), Some(creeper));
        scene.remove_object(steve);
        assert_eq!(scene.find_by_name("Creeper"), Some(creeper));
        assert_eq!(scene.find_by_name("Steve"), None);
    }

    #[test]
    fn test_child_reference_goes_stale_with_root() {
        let mut sky = SceneObject::empty();
        let mut sun = named("sun");
        sun.set_position(Vec3::new(-30.0, 40.0, -20.0));
        sky.add_child(sun);

        let mut scene = Scene::default();
        let sky_id = scene.add_object(sky);
        let sun_ref = ObjectRef::child(sky_id, vec![0]);

        assert_eq!(scene.resolve(&sun_ref).map(SceneObject::name), Some("sun"));
        assert_relative_eq!(
            scene.world_position(&sun_ref).unwrap(),
            Vec3::new(-30.0, 40.0, -20.0),
            epsilon = 1e-5
        );
        assert!(scene.resolve(&ObjectRef::child(sky_id, vec![1])).is_none());

        scene.remove_object(sky_id);
        assert!(scene.resolve(&sun_ref).is_none());
        assert!(scene.world_transform(&sun_ref).is_none());
    }

    #[test]
    fn test_world_transform_composes_parent_and_local() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..50 {
            let depth = rng.gen_range(1..5);
            let mut nodes: Vec<SceneObject> = (0..=depth)
                .map(|_| {
                    let mut node = SceneObject::empty();
                    node.move_by(random_vec(&mut rng, -10.0..10.0));
                    node.rotate(random_vec(&mut rng, -3.0..3.0));
                    node.grow(random_vec(&mut rng, 0.2..3.0));
                    node
                })
                .collect();

            let expected = nodes
                .iter()
                .fold(Mat4::identity(), |world, node| world * node.local_matrix());

            let mut chain = nodes.pop().unwrap_or_default();
            while let Some(mut parent) = nodes.pop() {
                parent.add_child(chain);
                chain = parent;
            }

            let mut scene = Scene::default();
            let root = scene.add_object(chain);
            let leaf = ObjectRef::child(root, vec![0; depth]);

            let world = scene.world_transform(&leaf).unwrap();
            assert_relative_eq!(world, expected, epsilon = 1e-3, max_relative = 1e-4);

            let parent = ObjectRef::child(root, vec![0; depth - 1]);
            let parent_world = scene.world_transform(&parent).unwrap();
            let local = scene.resolve(&leaf).unwrap().local_matrix();
            assert_relative_eq!(world, parent_world * local, epsilon = 1e-3, max_relative = 1e-4);
        }
    }

    #[test]
    fn test_render_draws_roots_in_order() {
        let mut program = ShaderProgram::default();
        program.activate();
        let mut scene = Scene::new(program);
        scene.add_object(named("floor"));
        let middle = scene.add_object(named("steve"));
        scene.add_object(named("creeper"));
        scene.remove_object(middle);

        let mut backend = RecordingBackend::new();
        scene.render(&mut backend).unwrap();
        let names: Vec<_> = backend.draws.iter().map(|d| d.mesh_name.as_str()).collect();
        assert_eq!(names, ["floor", "creeper"]);
    }

    #[test]
    fn test_animators_only_run_after_start() {
        let mut scene = Scene::default();
        let cube = scene.add_object(named("cube"));
        let mut animator = Animator::new();
        animator.add_animation(Box::new(RotationAnimation::new(
            cube.into(),
            2.0,
            Vec3::new(0.0, 1.0, 0.0),
        )));
        scene.add_animator(animator);

        scene.tick_animators(1.0);
        assert_relative_eq!(scene.object(cube).unwrap().orientation().y, 0.0);

        scene.start_animators();
        scene.tick_animators(1.0);
        assert_relative_eq!(scene.object(cube).unwrap().orientation().y, 0.5);
    }
}
