//! End-to-end chase scenarios

use std::path::PathBuf;

use approx::assert_relative_eq;
use creeper_chase::config::GameConfig;
use creeper_chase::demos::{self, DemoKind, SceneRoles};
use creeper_chase::gameplay::day_cycle::{NIGHT, ORANGE, WHITE};
use creeper_chase::gameplay::{FleeingTarget, FrameOutcome, GameState};
use creeper_chase::CreeperChaseGame;
use scene_engine::foundation::math::Vec3;
use scene_engine::input::{HeadlessEvents, InputState, KeyCode};
use scene_engine::render::NullBackend;
use scene_engine::scene::{ObjectId, ObjectRef, Scene, SceneObject};
use scene_engine::Engine;

fn asset_root(tag: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("creeper_chase_it_{}_{}", std::process::id(), tag));
    let shaders = root.join("shaders");
    std::fs::create_dir_all(&shaders).unwrap();
    for name in ["texture_perspective.vert", "texturing.frag"] {
        std::fs::write(shaders.join(name), "#version 330 core\nvoid main() {}\n").unwrap();
    }
    root
}

struct Arena {
    scene: Scene,
    hunter: ObjectId,
    near: ObjectId,
    far: ObjectId,
}

/// Hunter at the origin, one target closing in along -X, one far away
fn small_arena() -> Arena {
    let mut scene = Scene::default();
    let mut near = SceneObject::empty().with_name("Steve");
    near.set_position(Vec3::new(1.05, 0.0, 0.0));
    let near = scene.add_object(near);
    let mut far = SceneObject::empty().with_name("Pig");
    far.set_position(Vec3::new(0.0, 0.0, -30.0));
    let far = scene.add_object(far);
    let hunter = scene.add_object(SceneObject::empty().with_name("Creeper"));
    Arena { scene, hunter, near, far }
}

fn roles(arena: &Arena) -> SceneRoles {
    SceneRoles {
        hunter: Some(arena.hunter),
        targets: vec![
            FleeingTarget::new("Steve", arena.near, Vec3::new(-1.0, 0.0, 0.0)),
            FleeingTarget::new("Pig", arena.far, Vec3::new(1.0, 0.0, 0.0)),
        ],
        sun: None,
    }
}

#[test]
fn target_is_pruned_on_the_tick_it_comes_in_range() {
    let mut arena = small_arena();
    let mut state = GameState::new(Some(roles(&arena)), &GameConfig::default());
    let input = InputState::new();

    // 1.05 -> 0.95 -> 0.85: still out of range
    for _ in 0..2 {
        assert_eq!(state.update(&mut arena.scene, &input, 0.1), FrameOutcome::Running);
        assert_eq!(arena.scene.len(), 3);
    }

    // 0.75 < 0.8
    assert_eq!(state.update(&mut arena.scene, &input, 0.1), FrameOutcome::Running);
    assert_eq!(arena.scene.len(), 2);
    assert!(arena.scene.object(arena.near).is_none());
    assert!(state.targets[0].handle.is_none());
    assert_eq!(state.hunter, Some(arena.hunter));
    assert_eq!(state.hunter, arena.scene.find_by_name("Creeper"));

    // Removal is terminal: more frames never remove anything else nearby
    for _ in 0..10 {
        state.update(&mut arena.scene, &input, 0.1);
    }
    assert_eq!(arena.scene.len(), 2);
    assert_eq!(state.catches().len(), 1);
    assert_eq!(state.catches()[0].label, "Steve");

    // The survivor kept fleeing the whole time
    let pig = arena.scene.object(arena.far).unwrap();
    assert_relative_eq!(pig.position().x, 1.3, epsilon = 1e-4);
    assert_relative_eq!(pig.orientation().y, std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
}

#[test]
fn hunter_walking_forward_catches_the_target_ahead() {
    let mut scene = Scene::default();
    let mut steve = SceneObject::empty().with_name("Steve");
    steve.set_position(Vec3::new(0.0, 0.0, -2.05));
    let steve = scene.add_object(steve);
    let mut pig = SceneObject::empty().with_name("Pig");
    pig.set_position(Vec3::new(20.0, 0.0, 20.0));
    let pig = scene.add_object(pig);
    let hunter = scene.add_object(SceneObject::empty().with_name("Creeper"));

    let roles = SceneRoles {
        hunter: Some(hunter),
        targets: vec![
            FleeingTarget::new("Steve", steve, Vec3::new(0.0, 0.0, -1.0)),
            FleeingTarget::new("Pig", pig, Vec3::new(1.0, 0.0, 0.0)),
        ],
        sun: None,
    };
    let mut state = GameState::new(Some(roles), &GameConfig::default());
    let forward: InputState = [KeyCode::Up].into_iter().collect();

    // The hunter gains 0.1 per tick on a target 2.05 ahead
    for tick in 1..=12 {
        state.update(&mut scene, &forward, 0.1);
        assert_eq!(scene.len(), 3, "tick {tick}");
    }
    assert_relative_eq!(scene.object(hunter).unwrap().position().z, -2.4, epsilon = 1e-4);

    state.update(&mut scene, &forward, 0.1);
    assert_eq!(scene.len(), 2);
    assert!(scene.object(steve).is_none());
    assert!(state.targets[0].handle.is_none());
    assert!(state.targets[1].is_alive());
    assert_eq!(state.hunter, Some(hunter));
    assert_relative_eq!(scene.object(hunter).unwrap().position().z, -2.6, epsilon = 1e-4);
    assert_eq!(state.catches().len(), 1);
    assert_eq!(state.catches()[0].label, "Steve");
}

#[test]
fn catching_every_target_finishes_the_chase() {
    let mut arena = small_arena();
    arena.scene.object_mut(arena.far).unwrap().set_position(Vec3::new(0.0, 0.0, 0.5));
    let mut state = GameState::new(Some(roles(&arena)), &GameConfig::default());

    let outcome = state.update(&mut arena.scene, &InputState::new(), 0.1);

    // Pig is caught on its first step, Steve on the third
    assert_eq!(outcome, FrameOutcome::Running);
    assert_eq!(state.catches().len(), 1);
    state.update(&mut arena.scene, &InputState::new(), 0.1);
    assert_eq!(
        state.update(&mut arena.scene, &InputState::new(), 0.1),
        FrameOutcome::Finished
    );
    assert_eq!(arena.scene.len(), 1);
    assert!(state.is_finished());
}

#[test]
fn target_bounces_off_the_map_edge() {
    let mut arena = small_arena();
    arena.scene.object_mut(arena.far).unwrap().set_position(Vec3::new(49.95, 0.0, 10.0));
    let mut state = GameState::new(Some(roles(&arena)), &GameConfig::default());

    state.update(&mut arena.scene, &InputState::new(), 0.1);

    assert_eq!(state.targets[1].flee_dir, Vec3::new(-1.0, 0.0, 0.0));
    let pig = arena.scene.object(arena.far).unwrap();
    assert_relative_eq!(pig.position().x, 49.85, epsilon = 1e-4);
    assert_relative_eq!(pig.orientation().y, -std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
}

#[test]
fn day_cycle_colors_and_sun_track_time() {
    let mut scene = Scene::default();
    let mut sky = SceneObject::empty();
    let sun_index = sky.add_child(SceneObject::empty().with_name("sun"));
    let sky = scene.add_object(sky);
    let sun = ObjectRef::child(sky, vec![sun_index]);

    let roles = SceneRoles {
        sun: Some(sun.clone()),
        ..SceneRoles::default()
    };
    let mut state = GameState::new(Some(roles), &GameConfig::default());
    let input = InputState::new();
    assert_relative_eq!(state.ambient_color(), WHITE);

    let advance = |seconds: u32, state: &mut GameState, scene: &mut Scene| {
        for _ in 0..seconds {
            state.update(scene, &input, 1.0);
        }
    };

    advance(15, &mut state, &mut scene);
    assert_relative_eq!(state.ambient_color(), Vec3::new(1.0, 0.8, 0.6), epsilon = 1e-5);
    assert_relative_eq!(scene.world_position(&sun).unwrap(), Vec3::new(-15.0, 40.0, -20.0), epsilon = 1e-4);

    advance(15, &mut state, &mut scene);
    assert_relative_eq!(state.ambient_color(), ORANGE, epsilon = 1e-5);

    advance(30, &mut state, &mut scene);
    assert_relative_eq!(state.ambient_color(), NIGHT, epsilon = 1e-5);
    assert_relative_eq!(scene.world_position(&sun).unwrap().x, 30.0, epsilon = 1e-4);

    advance(1, &mut state, &mut scene);
    assert_relative_eq!(scene.world_position(&sun).unwrap().x, 1000.0);

    advance(29, &mut state, &mut scene);
    assert_relative_eq!(state.day_cycle.time(), 0.0);
    assert_relative_eq!(state.ambient_color(), WHITE);
    assert_relative_eq!(scene.world_position(&sun).unwrap().x, -30.0, epsilon = 1e-4);

    // No targets: the chase never reports finished
    assert!(!state.is_finished());
}

#[test]
fn autopilot_clears_the_minecraft_scene() {
    let mut config = GameConfig::default();
    config.demo.kind = DemoKind::Minecraft;
    config.demo.asset_root = asset_root("autopilot");
    config.demo.floor_half_extent = 2;
    config.gameplay.shutdown_delay_ms = 0;
    config.engine.max_frames = Some(3000);

    let demo = demos::build(&config.demo).unwrap();
    let tiles = 25;
    assert_eq!(demo.scene.len(), tiles + 4);

    let mut game = CreeperChaseGame::new(demo.roles, &config);
    let mut engine = Engine::new(demo.scene, Box::new(NullBackend::new()), config.engine.clone());
    engine.run(&mut game, &mut HeadlessEvents::new(None)).unwrap();

    assert!(game.is_finished());
    assert!(engine.frame_count() < 3000);
    let labels: Vec<_> = game.state().catches().iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, ["Steve", "Pig"]);

    // Floor, sky and the creeper remain, in their original order
    assert_eq!(engine.scene.len(), tiles + 2);
    let tail: Vec<_> = engine.scene.iter().skip(tiles).map(|(_, o)| o.name().to_string()).collect();
    assert_eq!(tail, ["sky", "Creeper"]);
    assert_relative_eq!(engine.ambient_color, game.state().ambient_color());
}
