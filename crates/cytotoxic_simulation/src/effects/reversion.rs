//! PendingReversion: snapshot состояния до активации эффекта
//!
//! Вместо замыканий с захваченными значениями: один tagged union на
//! effect id, лежит в arena по индексу id. TimedEvent знает только id.
//! Entity handles generation-checked: после restart старый player просто
//! не находится, и restore пропускается.

use bevy::prelude::*;

use super::registry::{EffectId, EFFECT_COUNT};
use crate::audio::SoundCue;

/// Значения Weapon до DAMAGE (attack_delay не сохраняем: откат в базу)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponSnapshot {
    pub owner: Entity,
    pub damage: f32,
    pub bullet_speed: f32,
    pub size: Vec2,
    pub color: Vec4,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSnapshot {
    pub owner: Entity,
    pub acceleration_unit: f32,
    pub max_velocity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PendingReversion {
    Damage(WeaponSnapshot),
    Slow(MotionSnapshot),
    Fov { volume: i32 },
    NoAttack { owner: Entity, shoot_cue: SoundCue },
    /// Откат = только снять is_active (HEAL, CLEAR_SCREEN, тихий HEAL)
    FlagOnly,
}

/// Arena: максимум один pending откат на effect id
#[derive(Resource, Debug, Default)]
pub struct PendingReversions {
    slots: [Option<PendingReversion>; EFFECT_COUNT],
}

impl PendingReversions {
    /// Кладёт snapshot; слот обязан быть пустым (id не может быть активен дважды)
    pub fn install(&mut self, id: EffectId, reversion: PendingReversion) {
        let slot = &mut self.slots[id.index()];
        debug_assert!(
            slot.is_none(),
            "reversion for {:?} already pending: {:?}",
            id,
            slot
        );
        *slot = Some(reversion);
    }

    /// Забирает snapshot (второй take вернёт None: откат идемпотентен)
    pub fn take(&mut self, id: EffectId) -> Option<PendingReversion> {
        self.slots[id.index()].take()
    }

    pub fn is_pending(&self, id: EffectId) -> bool {
        self.slots[id.index()].is_some()
    }

    pub fn pending_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
