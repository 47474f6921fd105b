//! Health bar animation + darken feedback

use bevy::prelude::*;

use super::{FrameState, FrameTime};
use crate::components::{darken_factor_for, Health, Player, ScreenState, HEALTH_BAR_SLEW_MS};

/// System: health bar догоняет target
///
/// Пока bar анимируется, таймер тикает; на ≤ 0 current = target и таймер
/// возвращается к HEALTH_BAR_SLEW_MS. Когда target ≤ 0, таймер health bar
/// тоже участвует в darken. current ≤ 0 → restart.
pub fn animate_health_bar(
    time: Res<FrameTime>,
    mut frame: ResMut<FrameState>,
    mut screen: ResMut<ScreenState>,
    mut players: Query<&mut Health, With<Player>>,
) {
    let Ok(mut health) = players.single_mut() else {
        return;
    };

    if !health.is_animating() {
        return;
    }

    health.timer_ms -= time.elapsed_ms;

    if health.target_percentage <= 0.0 {
        frame.min_timer_ms = frame.min_timer_ms.min(health.timer_ms);
    }

    if health.timer_ms <= 0.0 {
        health.current_percentage = health.target_percentage;
        health.timer_ms = HEALTH_BAR_SLEW_MS;
    }

    if health.current_percentage <= 0.0 {
        screen.darken_factor = 0.0;
        frame.restart_requested = true;
    }
}

/// System: darken = 1 − min_timer / 3000
pub fn update_darken_factor(frame: Res<FrameState>, mut screen: ResMut<ScreenState>) {
    screen.darken_factor = darken_factor_for(frame.min_timer_ms);
}
