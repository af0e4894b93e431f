//! Creeper chase binary

use creeper_chase::config::CONFIG_FILE;
use creeper_chase::{demos, CreeperChaseGame, GameConfig, GameError};
use scene_engine::config::Config;
use scene_engine::foundation::logging;
use scene_engine::input::HeadlessEvents;
use scene_engine::render::NullBackend;
use scene_engine::Engine;

fn run(config: &GameConfig) -> Result<(), GameError> {
    let demo = demos::build(&config.demo)?;

    let mut game = CreeperChaseGame::new(demo.roles, config);
    let mut engine = Engine::new(demo.scene, Box::new(NullBackend::new()), config.engine.clone());
    let mut events = HeadlessEvents::new(config.engine.max_frames);

    engine.run(&mut game, &mut events)?;
    Ok(())
}

fn main() {
    let config = match GameConfig::load_or_default(CONFIG_FILE) {
        Ok(config) => config,
        Err(e) => {
            logging::init_with_level("info");
            log::error!("Failed to load {}: {}", CONFIG_FILE, e);
            std::process::exit(1);
        }
    };
    logging::init_with_level(&config.log_level.0);

    log::info!("Starting Creeper Chase ({:?})", config.demo.kind);

    if let Err(e) = run(&config) {
        log::error!("{}", e);
        std::process::exit(1);
    }

    log::info!("Creeper Chase finished successfully");
}
