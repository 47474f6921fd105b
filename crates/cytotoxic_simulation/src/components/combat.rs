//! Combat компоненты: Weapon игрока, DeathTimer

use bevy::prelude::*;

/// Базовая задержка между выстрелами (ms)
///
/// DAMAGE и NO_ATTACK при откате ставят attack_delay именно сюда,
/// а не в snapshot.
pub const ATTACK_DELAY: f32 = 200.0;

/// Базовый цвет пули
pub const DEFAULT_PROJECTILE_COLOR: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);

/// Оружие игрока (стрельба выполняется снаружи core)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Weapon {
    pub damage: f32,
    /// Задержка между выстрелами (ms)
    pub attack_delay: f32,
    /// Текущий cooldown (ms, уменьшается до 0)
    pub attack_timer: f32,
    pub bullet_speed: f32,
    pub size: Vec2,
    pub color: Vec4,
}

impl Default for Weapon {
    fn default() -> Self {
        Self {
            damage: 10.0,
            attack_delay: ATTACK_DELAY,
            attack_timer: 0.0,
            bullet_speed: 500.0,
            size: Vec2::new(12.0, 12.0),
            color: DEFAULT_PROJECTILE_COLOR,
        }
    }
}

/// Entity умирает; таймер ушёл в минус → restart всего мира
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct DeathTimer {
    pub timer_ms: f32,
}

impl Default for DeathTimer {
    fn default() -> Self {
        Self { timer_ms: 3000.0 }
    }
}
