//! Effect durations and parameters.

use bevy::prelude::{Vec2, Vec4};

/// Timer (ms) для flag-only эффектов (HEAL, CLEAR_SCREEN)
pub const DEFAULT_EFFECT_TIME: f32 = 3000.0;
/// Timer (ms) тихой активации HEAL когда health уже полный
pub const SILENT_HEAL_TIME: f32 = 2000.0;

/// DAMAGE duration (ms)
pub const DAMAGE_EFFECT_TIME: f32 = 8000.0;
/// Weapon damage multiplier while DAMAGE is active
pub const DAMAGE_MULTIPLIER: f32 = 2.0;
/// Attack delay multiplier while DAMAGE is active (0.5 = стреляем вдвое чаще)
pub const ATTACK_DELAY_MULTIPLIER: f32 = 0.5;
pub const BULLET_SPEED_MULTIPLIER: f32 = 1.5;
pub const BULLET_SIZE_MULTIPLIER: f32 = 1.5;
pub const DAMAGE_BUFF_PROJECTILE_COLOR: Vec4 = Vec4::new(1.0, 0.3, 0.3, 1.0);

/// CLEAR_SCREEN действует на врагов ближе 90% видимого радиуса
pub const CLEAR_SCREEN_RADIUS_FRACTION: f32 = 0.9;

/// SLOW duration (ms)
pub const SLOW_EFFECT_TIME: f32 = 6000.0;
/// Damping во время SLOW (сильнее базового 0.9)
pub const SLOW_ACCELERATION_UNIT: f32 = 0.3;
pub const SLOW_MAX_VELOCITY: f32 = 200.0;

/// FOV duration (ms)
pub const FOV_EFFECT_TIME: f32 = 6000.0;
/// На сколько FOV приглушает общую громкость (шкала 0..=128)
pub const FOV_VOLUME_DELTA: i32 = 75;

/// NO_ATTACK duration (ms)
pub const NO_ATTACK_TIME: f32 = 5000.0;
/// «Бесконечная» задержка выстрела
pub const NO_ATTACK_DELAY: f32 = 99999.0;

/// Иконки эффектов: горизонтальная полоса в screen space
pub const EFFECTS_POSITION: Vec2 = Vec2::new(40.0, 40.0);
pub const ICON_SIZE: Vec2 = Vec2::new(32.0, 32.0);
pub const ICON_SCALE: f32 = 1.5;
pub const PADDING: f32 = 10.0;
