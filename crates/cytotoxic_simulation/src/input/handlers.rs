//! Input callbacks (вызываются window collaborator'ом между кадрами)

use bevy::prelude::*;

use super::state::{InputState, Key, KeyAction, Modifiers};
use crate::components::DeathTimer;
use crate::game::{find_player, restart_game, DebugMode, GameSpeed};
use crate::logger;

/// Шаг изменения game speed на Shift+, / Shift+.
pub const SPEED_STEP: f32 = 0.1;

/// Key callback
pub fn on_key(world: &mut World, key: Key, action: KeyAction, modifiers: Modifiers) {
    if action == KeyAction::Release && key == Key::R {
        restart_game(world);
    }

    {
        let mut input = world.resource_mut::<InputState>();
        match action {
            KeyAction::Press => input.press(key),
            KeyAction::Release => input.release(key),
            KeyAction::Repeat => {}
        }
    }

    if key == Key::F {
        world.resource_mut::<DebugMode>().enabled = action != KeyAction::Release;
    }

    if action == KeyAction::Release && modifiers.shift {
        let delta = match key {
            Key::Comma => Some(-SPEED_STEP),
            Key::Period => Some(SPEED_STEP),
            _ => None,
        };

        if let Some(delta) = delta {
            let mut speed = world.resource_mut::<GameSpeed>();
            speed.adjust(delta);
            logger::log_info(&format!("Current speed = {:.1}", speed.0));
        }
    }
}

/// Cursor callback: пока игрок умирает, взгляд замораживается
pub fn on_mouse_move(world: &mut World, position: Vec2) {
    if let Some(player) = find_player(world) {
        if world.get::<DeathTimer>(player).is_some() {
            return;
        }
    }

    world.resource_mut::<InputState>().mouse = position;
}
