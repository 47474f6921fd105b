//! Status effects: случайные buff/debuff с откатом по таймеру
//!
//! - registry: статическая таблица эффектов + флаги активности
//! - apply: выбор категории, weighted draw, handler'ы активации
//! - reversion: snapshot'ы значений до активации (arena по effect id)
//! - timed_event: очередь отложенных откатов
//! - tuning: длительности и множители
//!
//! Инвариант: эффект активен ⇔ ровно один pending откат (кроме DIRECTION,
//! который снимается сразу) ⇔ ровно один TimedEvent с его id.

use bevy::prelude::*;

pub mod apply;
pub mod registry;
pub mod reversion;
pub mod timed_event;
pub mod tuning;


pub use apply::{
    activate_effect, apply_random_effect, display_effect, preactivate_heal_when_full,
    process_effect_triggers, set_active_timer, EffectIcon, EffectOutcome, TriggerRandomEffect,
};
pub use registry::{Effect, EffectCategory, EffectDef, EffectId, EffectRegistry, EFFECT_COUNT, EFFECT_TABLE};
pub use reversion::{MotionSnapshot, PendingReversion, PendingReversions, WeaponSnapshot};
pub use timed_event::{revert_effect, schedule_reversion, tick_timed_events, TimedEvent};

use crate::game::FrameSet;

/// Effects Plugin
///
/// Порядок в кадре (FrameSet::Effects, до world loop):
/// 1. tick_timed_events: истёкшие откаты
/// 2. process_effect_triggers: TriggerRandomEffect events этого кадра
pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EffectRegistry>()
            .init_resource::<PendingReversions>()
            .add_event::<TriggerRandomEffect>();

        app.add_systems(
            Update,
            (tick_timed_events, process_effect_triggers)
                .chain()
                .in_set(FrameSet::Effects),
        );
    }
}
