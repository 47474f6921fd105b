//! Глобальное состояние экрана и камеры

use bevy::prelude::*;

/// Окно darken-эффекта (ms): таймер 3000 → darken 0, таймер 0 → darken 1
pub const DARKEN_WINDOW_MS: f32 = 3000.0;

/// Состояние экрана (ровно один экземпляр: поэтому Resource, а не Component)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenState {
    /// 0 = обычная яркость, 1 = полностью затемнено
    pub darken_factor: f32,
    /// FOV debuff: render collaborator ограничивает видимость
    pub limit_fov: bool,
}

/// darken = 1 − t / DARKEN_WINDOW_MS, clamp в [0, 1]
pub fn darken_factor_for(min_timer_ms: f32) -> f32 {
    (1.0 - min_timer_ms / DARKEN_WINDOW_MS).clamp(0.0, 1.0)
}

/// Камера (позицию двигает render layer; core только читает)
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Camera2dState {
    pub position: Vec2,
}

/// Transient debug-визуализация; живёт ровно один кадр
#[derive(Component, Debug, Clone, Copy)]
pub struct DebugMarker {
    pub position: Vec2,
}
