//! Motion: позиция, скорость и параметры разгона движущихся entity
//!
//! Всё, у чего есть Motion, уничтожается на restart.

use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Motion {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Damping за кадр по оси без input (0.9 = теряем 10%)
    pub acceleration_unit: f32,
    /// Clamp модуля velocity после input
    pub max_velocity: f32,
    /// Facing (радианы), пересчитывается из курсора
    pub angle: f32,
    pub scale: Vec2,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration_unit: 0.9,
            max_velocity: 400.0,
            angle: 0.0,
            scale: Vec2::splat(1.0),
        }
    }
}

impl Motion {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..default()
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Обрезает velocity до max_velocity (направление сохраняется)
    pub fn clamp_speed(&mut self) {
        let magnitude = self.velocity.length();
        if magnitude > self.max_velocity {
            self.velocity *= self.max_velocity / magnitude;
        }
    }
}
