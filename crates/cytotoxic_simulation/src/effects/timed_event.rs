//! Timed-event queue: отложенный откат эффектов
//!
//! Каждый TimedEvent: отдельная entity с countdown и id эффекта.
//! Тикает раз в кадр на elapsed ms; на ≤ 0 entity удаляется и откат
//! выполняется ровно один раз. Отмены нет: restart не трогает очередь.

use bevy::prelude::*;

use super::registry::{EffectId, EffectRegistry};
use super::reversion::{PendingReversion, PendingReversions};
use crate::audio::{AudioMixer, SoundBank};
use crate::components::{Motion, ScreenState, Weapon, ATTACK_DELAY};
use crate::game::FrameTime;
use crate::logger;

#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct TimedEvent {
    /// Оставшееся время (ms)
    pub timer_ms: f32,
    /// Чей откат запустить
    pub effect: EffectId,
}

/// Кладёт snapshot в arena и ставит TimedEvent в очередь
pub fn schedule_reversion(
    world: &mut World,
    effect: EffectId,
    timer_ms: f32,
    reversion: PendingReversion,
) -> Entity {
    world
        .resource_mut::<PendingReversions>()
        .install(effect, reversion);
    world.spawn(TimedEvent { timer_ms, effect }).id()
}

/// System (exclusive): тик очереди + запуск истёкших откатов
pub fn tick_timed_events(world: &mut World) {
    let elapsed_ms = world.resource::<FrameTime>().elapsed_ms;

    let mut expired: Vec<(Entity, EffectId)> = Vec::new();
    let mut query = world.query::<(Entity, &mut TimedEvent)>();
    for (entity, mut event) in query.iter_mut(world) {
        event.timer_ms -= elapsed_ms;
        if event.timer_ms <= 0.0 {
            expired.push((entity, event.effect));
        }
    }

    for (entity, effect) in expired {
        world.despawn(entity);
        revert_effect(world, effect);
    }
}

/// Откат эффекта: restore snapshot (если target жив) + is_active = false
pub fn revert_effect(world: &mut World, effect: EffectId) {
    let reversion = world.resource_mut::<PendingReversions>().take(effect);

    match reversion {
        Some(PendingReversion::Damage(snapshot)) => {
            if let Some(mut weapon) = world.get_mut::<Weapon>(snapshot.owner) {
                weapon.damage = snapshot.damage;
                // Намеренно в базу, а не в snapshot
                weapon.attack_delay = ATTACK_DELAY;
                weapon.bullet_speed = snapshot.bullet_speed;
                weapon.size = snapshot.size;
                weapon.color = snapshot.color;
            } else {
                log_target_gone(effect, snapshot.owner);
            }
        }

        Some(PendingReversion::Slow(snapshot)) => {
            if let Some(mut motion) = world.get_mut::<Motion>(snapshot.owner) {
                motion.acceleration_unit = snapshot.acceleration_unit;
                motion.max_velocity = snapshot.max_velocity;
            } else {
                log_target_gone(effect, snapshot.owner);
            }
        }

        Some(PendingReversion::Fov { volume }) => {
            world.resource_mut::<ScreenState>().limit_fov = false;
            world.resource_mut::<AudioMixer>().set_volume(volume);
        }

        Some(PendingReversion::NoAttack { owner, shoot_cue }) => {
            if let Some(mut weapon) = world.get_mut::<Weapon>(owner) {
                weapon.attack_delay = ATTACK_DELAY;
                weapon.attack_timer = 0.0;
            } else {
                log_target_gone(effect, owner);
            }
            // Sound bank глобальный: откатываем в любом случае
            world.resource_mut::<SoundBank>().player_shoot = shoot_cue;
        }

        Some(PendingReversion::FlagOnly) => {}

        None => {
            logger::log_warning(&format!(
                "Timed event for {:?} fired without pending reversion",
                effect
            ));
        }
    }

    world.resource_mut::<EffectRegistry>().set_active(effect, false);
    logger::log(&format!("Effect {:?} reverted", effect));
}

fn log_target_gone(effect: EffectId, owner: Entity) {
    logger::log_info(&format!(
        "Effect {:?} target {:?} is gone (restart?), skipping restore",
        effect, owner
    ));
}
