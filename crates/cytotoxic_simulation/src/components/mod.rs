//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: Player, Enemy, Region, Health
//! - movement: Motion
//! - combat: Weapon, DeathTimer
//! - world: ScreenState, Camera2dState, DebugMarker
//! - ui: RenderRequest, ScreenTransform (иконки эффектов)

pub mod actor;
pub mod combat;
pub mod movement;
pub mod ui;
pub mod world;

// Re-exports для удобного импорта
pub use actor::*;
pub use combat::*;
pub use movement::*;
pub use ui::*;
pub use world::*;
