//! Cytotoxic Cataclysm Simulation Core
//!
//! ECS-симуляция на Bevy 0.16: world update loop + движок случайных
//! эффектов с откатом по таймеру.
//!
//! Core владеет только game state. Снаружи (collaborators):
//! - window/input: зовёт `Simulation::on_key` / `on_mouse_move`
//! - physics: пишет `CollisionDetected`, потом `Simulation::handle_collisions`
//! - render: читает Motion / ScreenTransform / RenderRequest / ScreenState
//! - audio: читает `PlaySound` events и `AudioMixer`

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod audio;
pub mod components;
pub mod config;
pub mod effects;
pub mod game;
pub mod input;
pub mod logger;
pub mod simulation;

// Re-exports для удобства
pub use audio::{AudioMixer, PlaySound, SoundBank, SoundCue, SoundPlugin};
pub use components::*;
pub use config::{ConfigError, GameConfig};
pub use effects::{
    apply_random_effect, EffectCategory, EffectId, EffectOutcome, EffectRegistry, EffectsPlugin,
    TriggerRandomEffect,
};
pub use game::{
    restart_game, start_entity_death, CollisionDetected, FrameTime, GamePlugin, GameSpeed,
};
pub use input::{InputState, Key, KeyAction, Modifiers};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel,
    LogPrinter,
};
pub use simulation::Simulation;

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// GameConfig / DeterministicRng можно вставить до plugin'а: init_resource
/// их не перезапишет.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .init_resource::<ScreenState>()
            .init_resource::<Camera2dState>()
            .add_plugins((SoundPlugin, GamePlugin, EffectsPlugin));

        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }
    }
}

/// Детерминистичный RNG resource (seeded один раз на процесс)
///
/// Общий для выбора эффектов и спавна на restart; restart не пересеивает.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
