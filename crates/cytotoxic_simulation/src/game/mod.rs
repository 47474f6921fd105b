//! World update loop
//!
//! Один кадр (`Update` schedule, chained):
//! 1. FrameSet::Effects: тик timed events → триггеры эффектов
//! 2. FrameSet::World: debug cleanup → death timers → health bar →
//!    darken → movement → facing → (restart, если кто-то его запросил)
//!
//! Restart short-circuit: death/health системы ставят
//! `FrameState::restart_requested`, остальные системы кадра пропускаются
//! через run_if, последней выполняется restart.
//!
//! Collision resolution: отдельный schedule (`CollisionUpdate`), его
//! запускает frame driver после physics collaborator.

use bevy::ecs::schedule::ScheduleLabel;
use bevy::prelude::*;

pub mod collision;
pub mod death;
pub mod health;
pub mod restart;

pub use collision::{handle_collisions, Collision, CollisionDetected};
pub use death::{start_entity_death, tick_death_timers};
pub use health::{animate_health_bar, update_darken_factor};
pub use restart::restart_game;

use crate::components::{DebugMarker, Player, DARKEN_WINDOW_MS};
use crate::input::{apply_player_movement, update_player_facing, InputState};

/// Elapsed time текущего кадра (ms); frame driver пишет перед `app.update()`
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    pub elapsed_ms: f32,
}

/// Per-frame scratch state (сбрасывается в начале World set)
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Минимальный оставшийся таймер (все death timers + health timer
    /// при target ≤ 0); из него считается darken
    pub min_timer_ms: f32,
    pub restart_requested: bool,
}

impl Default for FrameState {
    fn default() -> Self {
        Self {
            min_timer_ms: DARKEN_WINDOW_MS,
            restart_requested: false,
        }
    }
}

/// После коллизии один кадр без input-ускорения (иначе прожимаемся сквозь
/// границу / врага)
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccelerationGate {
    pub allow: bool,
}

impl Default for AccelerationGate {
    fn default() -> Self {
        Self { allow: true }
    }
}

/// Множитель elapsed time (frame driver умножает на него сам)
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct GameSpeed(pub f32);

impl Default for GameSpeed {
    fn default() -> Self {
        Self(1.0)
    }
}

impl GameSpeed {
    /// Сдвиг скорости, не ниже 0
    pub fn adjust(&mut self, delta: f32) {
        self.0 = (self.0 + delta).max(0.0);
    }
}

/// F зажата → collision resolution рисует DebugMarker'ы
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugMode {
    pub enabled: bool,
}

/// Custom schedule: collision resolution (вне основного кадра)
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollisionUpdate;

/// Фазы кадра
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Effects,
    World,
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameTime>()
            .init_resource::<FrameState>()
            .init_resource::<AccelerationGate>()
            .init_resource::<GameSpeed>()
            .init_resource::<DebugMode>()
            .init_resource::<InputState>()
            .add_event::<CollisionDetected>();

        app.configure_sets(Update, (FrameSet::Effects, FrameSet::World).chain());

        app.add_systems(
            Update,
            (
                begin_frame,
                clear_debug_markers,
                tick_death_timers,
                animate_health_bar.run_if(restart_not_requested),
                update_darken_factor.run_if(restart_not_requested),
                apply_player_movement.run_if(restart_not_requested),
                update_player_facing.run_if(restart_not_requested),
                restart::restart_on_request.run_if(restart_requested),
            )
                .chain()
                .in_set(FrameSet::World),
        );

        app.init_schedule(CollisionUpdate);
        app.add_systems(CollisionUpdate, handle_collisions);
    }
}

fn begin_frame(mut frame: ResMut<FrameState>) {
    *frame = FrameState::default();
}

/// Debug-визуализация живёт ровно один кадр
fn clear_debug_markers(mut commands: Commands, markers: Query<Entity, With<DebugMarker>>) {
    for entity in markers.iter() {
        commands.entity(entity).despawn();
    }
}

fn restart_requested(frame: Res<FrameState>) -> bool {
    frame.restart_requested
}

fn restart_not_requested(frame: Res<FrameState>) -> bool {
    !frame.restart_requested
}

/// Единственный player (None между despawn и spawn внутри restart)
pub fn find_player(world: &mut World) -> Option<Entity> {
    world
        .query_filtered::<Entity, With<Player>>()
        .iter(world)
        .next()
}
