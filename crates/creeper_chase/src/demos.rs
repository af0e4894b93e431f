//! Demo scenes
//!
//! Each constructor builds a [`Scene`] with its objects and animators.
//! Models that cannot be imported are replaced by placeholder cubes, so a
//! checkout without the model pack still produces every scene. Shaders are
//! required.

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use scene_engine::animation::{Animator, RotationAnimation};
use scene_engine::assets::load_model_or_placeholder;
use scene_engine::foundation::math::Vec3;
use scene_engine::render::{Mesh, ShaderError, ShaderProgram, Texture};
use scene_engine::scene::{ObjectId, ObjectRef, Scene, SceneObject};
use serde::{Deserialize, Serialize};

use crate::config::DemoConfig;
use crate::gameplay::FleeingTarget;

/// Available scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemoKind {
    /// Spinning bunny
    Bunny,
    /// Marble floor square
    MarbleSquare,
    /// Cube spinning on two axes
    Cube,
    /// Tiger riding a spinning boat
    LifeOfPi,
    /// Creeper chasing Steve and a pig
    Minecraft,
}

/// Objects the chase logic acts on
#[derive(Debug, Clone, Default)]
pub struct SceneRoles {
    /// Object steered by the player
    pub hunter: Option<ObjectId>,
    /// Objects running away
    pub targets: Vec<FleeingTarget>,
    /// Sun node moved by the day cycle
    pub sun: Option<ObjectRef>,
}

/// A built scene plus its chase roles, if it has any
#[derive(Debug)]
pub struct DemoScene {
    /// The scene
    pub scene: Scene,
    /// Chase roles; `None` for scenes that are only viewed
    pub roles: Option<SceneRoles>,
}

impl DemoScene {
    fn view_only(scene: Scene) -> Self {
        Self { scene, roles: None }
    }
}

/// Build the configured demo
pub fn build(config: &DemoConfig) -> Result<DemoScene, ShaderError> {
    let root = config.asset_root.as_path();
    log::info!("Building {:?} scene from {}", config.kind, root.display());

    let demo = match config.kind {
        DemoKind::Bunny => bunny(root)?,
        DemoKind::MarbleSquare => marble_square(root)?,
        DemoKind::Cube => cube(root)?,
        DemoKind::LifeOfPi => life_of_pi(root)?,
        DemoKind::Minecraft => minecraft(root, config.floor_half_extent)?,
    };

    log::info!(
        "Scene ready: {} root object(s), {} animator(s)",
        demo.scene.len(),
        demo.scene.animators().len()
    );
    Ok(demo)
}

/// Program that applies the Phong reflection model
///
/// The lighting shaders are incomplete; no demo uses this yet.
pub fn phong_lighting_shader(root: &Path) -> Result<ShaderProgram, ShaderError> {
    let shaders = root.join("shaders");
    ShaderProgram::load(shaders.join("light_perspective.vert"), shaders.join("lighting.frag"))
}

/// Program that does texture mapping with no lighting
pub fn texturing_shader(root: &Path) -> Result<ShaderProgram, ShaderError> {
    let shaders = root.join("shaders");
    ShaderProgram::load(shaders.join("texture_perspective.vert"), shaders.join("texturing.frag"))
}

/// Load a texture, substituting a flat gray one when the file is unusable
pub fn load_texture(path: &Path, sampler_name: &str) -> Texture {
    Texture::load(path, sampler_name).unwrap_or_else(|e| {
        log::warn!("Texture {} unavailable ({}), using flat gray", path.display(), e);
        Texture::solid_color(1, 1, [128, 128, 128, 255], sampler_name)
    })
}

fn model_path(root: &Path, relative: &str) -> PathBuf {
    root.join("models").join(relative)
}

fn rotation(target: impl Into<ObjectRef>, seconds: f32, delta: Vec3) -> Box<RotationAnimation> {
    Box::new(RotationAnimation::new(target.into(), seconds, delta))
}

/// Bunny grown to fill the view, spinning once every ten seconds
pub fn bunny(root: &Path) -> Result<DemoScene, ShaderError> {
    let mut scene = Scene::new(texturing_shader(root)?);

    let mut bunny = load_model_or_placeholder(model_path(root, "bunny_textured.obj"), true);
    bunny.grow(Vec3::new(9.0, 9.0, 9.0));
    bunny.move_by(Vec3::new(0.2, -1.0, 0.0));
    let bunny = scene.add_object(bunny);

    let mut spin = Animator::new();
    spin.add_animation(rotation(bunny, 10.0, Vec3::new(0.0, TAU, 0.0)));
    scene.add_animator(spin);

    Ok(DemoScene::view_only(scene))
}

/// Textured square laid flat as a floor
pub fn marble_square(root: &Path) -> Result<DemoScene, ShaderError> {
    let mut scene = Scene::new(texturing_shader(root)?);

    let marble = load_texture(
        &model_path(root, "White_marble_03/Textures_2K/white_marble_03_2k_baseColor.tga"),
        "baseTexture",
    );
    let mut floor = SceneObject::new(vec![Arc::new(Mesh::square(vec![marble]))]).with_name("floor");
    floor.grow(Vec3::new(5.0, 5.0, 5.0));
    floor.move_by(Vec3::new(0.0, -1.5, 0.0));
    floor.rotate(Vec3::new(-FRAC_PI_2, 0.0, 0.0));
    scene.add_object(floor);

    Ok(DemoScene::view_only(scene))
}

/// Cube spinning around Y and X at the same time
pub fn cube(root: &Path) -> Result<DemoScene, ShaderError> {
    let mut scene = Scene::new(texturing_shader(root)?);

    let cube = scene.add_object(load_model_or_placeholder(model_path(root, "cube.obj"), true));

    let mut spin = Animator::new();
    spin.add_animation(rotation(cube, 10.0, Vec3::new(0.0, TAU, 0.0)));
    spin.add_animation(rotation(cube, 10.0, Vec3::new(TAU, 0.0, 0.0)));
    scene.add_animator(spin);

    Ok(DemoScene::view_only(scene))
}

/// Tiger sitting in a boat; the boat turns and the tiger rolls inside it
pub fn life_of_pi(root: &Path) -> Result<DemoScene, ShaderError> {
    let mut scene = Scene::new(texturing_shader(root)?);

    let mut boat = load_model_or_placeholder(model_path(root, "boat/boat.fbx"), true);
    boat.move_by(Vec3::new(0.0, -0.7, 0.0));
    boat.grow(Vec3::new(0.01, 0.01, 0.01));

    let mut tiger = load_model_or_placeholder(model_path(root, "tiger/scene.gltf"), true);
    tiger.set_name("tiger");
    tiger.move_by(Vec3::new(0.0, -5.0, 10.0));
    let tiger_index = boat.add_child(tiger);

    let boat = scene.add_object(boat);

    let mut boat_spin = Animator::new();
    boat_spin.add_animation(rotation(boat, 10.0, Vec3::new(0.0, TAU, 0.0)));
    let mut tiger_spin = Animator::new();
    tiger_spin.add_animation(rotation(
        ObjectRef::child(boat, vec![tiger_index]),
        10.0,
        Vec3::new(0.0, 0.0, TAU),
    ));
    scene.add_animator(boat_spin);
    scene.add_animator(tiger_spin);

    Ok(DemoScene::view_only(scene))
}

/// Cobblestone field with a creeper hunting Steve and a pig
///
/// Draw order: floor tiles, Steve, the pig, the sky (sun and cloud as
/// children), and the creeper last.
pub fn minecraft(root: &Path, half_extent: i32) -> Result<DemoScene, ShaderError> {
    let mut scene = Scene::new(texturing_shader(root)?);

    let cobble = load_texture(&model_path(root, "Minecraft/cobblestone.png"), "baseTexture");
    let tile_mesh = Arc::new(Mesh::square(vec![cobble]));
    let spacing = 1.0;
    for x in -half_extent..=half_extent {
        for z in -half_extent..=half_extent {
            let mut tile = SceneObject::new(vec![Arc::clone(&tile_mesh)]);
            tile.move_by(Vec3::new(x as f32 * spacing, -1.5, z as f32 * spacing));
            tile.rotate(Vec3::new(-FRAC_PI_2, 0.0, 0.0));
            scene.add_object(tile);
        }
    }
    log::debug!("Laid {} floor tiles", scene.len());

    let mut creeper = load_model_or_placeholder(model_path(root, "Minecraft/Creeper.gltf"), true);
    creeper.set_name("Creeper");
    creeper.grow(Vec3::new(1.5, 1.5, 1.5));

    let mut steve = load_model_or_placeholder(model_path(root, "Minecraft/Steve/Steve.gltf"), true);
    steve.set_name("Steve");
    steve.grow(Vec3::new(0.1, 0.1, 0.1));
    steve.move_by(Vec3::new(0.0, 0.0, 6.0));
    steve.set_orientation(Vec3::new(0.0, PI, 0.0));
    let steve = scene.add_object(steve);

    let mut pig = load_model_or_placeholder(model_path(root, "Minecraft/Pig/pig.gltf"), true);
    pig.set_name("Pig");
    pig.grow(Vec3::new(0.1, 0.1, 0.1));
    pig.move_by(Vec3::new(0.0, 0.0, -6.0));
    pig.set_orientation(Vec3::new(0.0, PI, 0.0));
    let pig = scene.add_object(pig);

    let mut sun = load_model_or_placeholder(model_path(root, "Minecraft/sun.gltf"), true);
    sun.move_by(Vec3::new(-30.0, 40.0, -20.0));
    sun.grow(Vec3::new(0.3, 0.3, 0.3));
    let mut cloud = load_model_or_placeholder(model_path(root, "Minecraft/Clouds/cloud.gltf"), true);
    cloud.move_by(Vec3::new(-25.0, 42.0, -22.0));
    cloud.grow(Vec3::new(1.5, 1.5, 1.5));

    let mut sky = SceneObject::empty().with_name("sky");
    let sun_index = sky.add_child(sun);
    sky.add_child(cloud);
    let sky = scene.add_object(sky);

    let creeper = scene.add_object(creeper);

    let roles = SceneRoles {
        hunter: Some(creeper),
        targets: vec![
            FleeingTarget::new("Steve", steve, Vec3::new(-1.0, 0.0, 0.0)),
            FleeingTarget::new("Pig", pig, Vec3::new(1.0, 0.0, 0.0)),
        ],
        sun: Some(ObjectRef::child(sky, vec![sun_index])),
    };

    Ok(DemoScene {
        scene,
        roles: Some(roles),
    })
}
