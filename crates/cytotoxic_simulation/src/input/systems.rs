//! Player movement + facing (ECS systems, раз в кадр)

use bevy::prelude::*;
use std::f32::consts::PI;

use super::state::{InputState, Key};
use crate::components::{Motion, Player};
use crate::config::GameConfig;
use crate::game::AccelerationGate;

/// Поправка угла под ориентацию спрайта игрока (rad)
pub const FACING_OFFSET: f32 = 0.70;

/// Одна ось: зажатая клавиша добавляет unit; ни одной или обе → damping
pub fn accelerate_axis(velocity: f32, positive: bool, negative: bool, unit: f32, damping: f32) -> f32 {
    let mut velocity = velocity;
    if positive {
        velocity += unit;
    }
    if negative {
        velocity -= unit;
    }
    if positive == negative {
        velocity *= damping;
    }
    velocity
}

/// System: WASD → velocity игрока
///
/// Если в прошлом collision pass была коллизия, этот кадр пропускается
/// (gate сбрасывается обратно в allow).
pub fn apply_player_movement(
    input: Res<InputState>,
    config: Res<GameConfig>,
    mut gate: ResMut<AccelerationGate>,
    mut players: Query<&mut Motion, With<Player>>,
) {
    if !gate.allow {
        gate.allow = true;
        return;
    }

    let Ok(mut motion) = players.single_mut() else {
        return;
    };

    let damping = motion.acceleration_unit;
    let (up, down) = input.axis(Key::W, Key::S);
    let (right, left) = input.axis(Key::D, Key::A);

    motion.velocity.y = accelerate_axis(motion.velocity.y, up, down, config.velocity_unit, damping);
    motion.velocity.x = accelerate_axis(motion.velocity.x, right, left, config.velocity_unit, damping);
    motion.clamp_speed();
}

/// Угол взгляда игрока на курсор (игрок всегда в центре окна)
pub fn facing_angle(mouse: Vec2, window_width: f32, window_height: f32) -> f32 {
    (mouse.y - window_height / 2.0).atan2(window_width / 2.0 - mouse.x) + PI + FACING_OFFSET
}

/// System: facing пересчитывается каждый кадр
pub fn update_player_facing(
    input: Res<InputState>,
    config: Res<GameConfig>,
    mut players: Query<&mut Motion, With<Player>>,
) {
    let Ok(mut motion) = players.single_mut() else {
        return;
    };

    motion.angle = facing_angle(input.mouse, config.window_width_px, config.window_height_px);
}
