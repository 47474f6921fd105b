//! Player input module
//!
//! ```text
//! Window system (keyboard/mouse callbacks)
//!     ↓
//! Simulation::on_key / on_mouse_move - handlers.rs
//!     ↓
//! InputState resource (какие клавиши зажаты, где курсор) - state.rs
//!     ↓
//! apply_player_movement / update_player_facing (ECS systems) - systems.rs
//! ```
//!
//! Одноразовые действия (R restart, F debug, Shift+,/. speed) выполняются
//! сразу в handler'е, а не в кадре.

pub mod handlers;
pub mod state;
pub mod systems;

pub use handlers::*;
pub use state::*;
pub use systems::*;
