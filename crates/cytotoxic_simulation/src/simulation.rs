//! Simulation: frame driver API поверх Bevy App
//!
//! Владеет App; window loop зовёт `step` каждый кадр, physics
//! collaborator: `handle_collisions` после своего broad phase.

use bevy::prelude::*;

use crate::audio::{PlaySound, SoundCue};
use crate::config::GameConfig;
use crate::effects::{self, EffectOutcome, TriggerRandomEffect};
use crate::game::{find_player, restart_game, CollisionDetected, CollisionUpdate, FrameTime, GameSpeed};
use crate::input::{self, Key, KeyAction, Modifiers};
use crate::{create_headless_app, logger, SimulationPlugin};

pub struct Simulation {
    app: App,
}

impl Simulation {
    /// Мир с default config; сразу после создания игрок и враги на месте
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    pub fn with_config(seed: u64, config: GameConfig) -> Self {
        let mut app = create_headless_app(seed);
        app.insert_resource(config);
        app.add_plugins(SimulationPlugin);

        restart_game(app.world_mut());
        logger::log_info(&format!("Simulation ready (seed: {})", seed));

        Self { app }
    }

    /// Один кадр: timed events → триггеры эффектов → world loop
    ///
    /// Всегда true, restart это обычный путь, а не ошибка.
    pub fn step(&mut self, elapsed_ms: f32) -> bool {
        self.app
            .world_mut()
            .insert_resource(FrameTime { elapsed_ms });
        self.app.update();
        true
    }

    /// Разобрать коллизии, накопленные с прошлого вызова
    pub fn handle_collisions(&mut self) {
        self.app.world_mut().run_schedule(CollisionUpdate);
    }

    /// Physics collaborator сообщает о коллизии
    pub fn report_collision(&mut self, collision: CollisionDetected) {
        self.app.world_mut().send_event(collision);
    }

    /// Немедленно применить случайный эффект
    pub fn apply_random_effect(&mut self) -> EffectOutcome {
        effects::apply_random_effect(self.app.world_mut())
    }

    /// Отложенный триггер: эффект применится в следующем `step`
    pub fn trigger_random_effect(&mut self) {
        self.app.world_mut().send_event(TriggerRandomEffect);
    }

    pub fn on_key(&mut self, key: Key, action: KeyAction, modifiers: Modifiers) {
        input::on_key(self.app.world_mut(), key, action, modifiers);
    }

    pub fn on_mouse_move(&mut self, position: Vec2) {
        input::on_mouse_move(self.app.world_mut(), position);
    }

    /// Audio collaborator забирает накопленные cue
    pub fn drain_sound_cues(&mut self) -> Vec<SoundCue> {
        self.app
            .world_mut()
            .resource_mut::<Events<PlaySound>>()
            .drain()
            .map(|sound| sound.cue)
            .collect()
    }

    pub fn game_speed(&self) -> f32 {
        self.app.world().resource::<GameSpeed>().0
    }

    pub fn player(&mut self) -> Option<Entity> {
        find_player(self.app.world_mut())
    }

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
