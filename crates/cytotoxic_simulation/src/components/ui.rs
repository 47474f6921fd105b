//! Render requests для UI (иконки эффектов)
//!
//! Core только регистрирует draw request; текстуры, шейдеры и сам draw
//! у render collaborator.

use bevy::prelude::*;

/// Текстуры, которые core может запросить
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum TextureId {
    EffectDamage,
    EffectSlow,
    EffectFov,
    EffectNoAttack,
}

/// Порядок отрисовки (UI поверх всего)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Reflect)]
pub enum RenderOrder {
    Background,
    Objects,
    Ui,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct RenderRequest {
    pub texture: TextureId,
    pub order: RenderOrder,
}

/// Позиция в screen space (не world space)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ScreenTransform {
    pub position: Vec2,
    pub scale: Vec2,
}
