//! Effect selection & application
//!
//! apply_random_effect: бросаем категорию → weighted draw среди неактивных →
//! handler мутирует состояние, кладёт snapshot + TimedEvent, рисует иконку →
//! cue категории. Все функции exclusive (`&mut World`): handler'ы трогают
//! resources, компоненты player'а и спавнят entity в одном проходе.

use bevy::prelude::*;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use super::registry::{EffectCategory, EffectId, EffectRegistry};
use super::reversion::{MotionSnapshot, PendingReversion, WeaponSnapshot};
use super::timed_event::schedule_reversion;
use super::tuning::*;
use crate::audio::{AudioMixer, PlaySound, SoundBank, SoundCue};
use crate::components::{
    Camera2dState, Enemy, EnemyKind, Health, Motion, RenderOrder, RenderRequest, ScreenState,
    ScreenTransform, Weapon,
};
use crate::config::GameConfig;
use crate::game::{find_player, start_entity_death};
use crate::logger;
use crate::DeterministicRng;

/// Результат одного триггера
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectOutcome {
    /// Эффект активирован (для DIRECTION: и сразу снят)
    Applied(EffectId),
    /// В категории нечего выбрать: сыграли empty cue, state не тронут
    Exhausted(EffectCategory),
    /// Эффект уже активен (прямой вызов activate_effect)
    AlreadyActive(EffectId),
    /// Нет player entity (между despawn и spawn на restart)
    NoPlayer,
    /// У player нет компонента, который трогает handler
    MissingComponents(EffectId),
}

/// Иконка активного эффекта в UI-полосе
///
/// Отдельная entity от TimedEvent; откат её не удаляет (это забота render layer).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct EffectIcon {
    pub effect: EffectId,
}

/// Event: внешний триггер (например, попадание в cyst), обрабатывается в step
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct TriggerRandomEffect;

/// System (exclusive): применить эффект на каждый TriggerRandomEffect кадра
pub fn process_effect_triggers(world: &mut World) {
    let triggers = world
        .resource_mut::<Events<TriggerRandomEffect>>()
        .drain()
        .count();

    for _ in 0..triggers {
        apply_random_effect(world);
    }
}

/// Выбрать и применить один случайный эффект
pub fn apply_random_effect(world: &mut World) -> EffectOutcome {
    let Some(player) = find_player(world) else {
        logger::log_warning("apply_random_effect: no player entity, trigger ignored");
        return EffectOutcome::NoPlayer;
    };

    let positive_probability = world.resource::<GameConfig>().positive_probability;
    let roll: f32 = world.resource_mut::<DeterministicRng>().rng.gen();
    let category = if roll < positive_probability {
        EffectCategory::Positive
    } else {
        EffectCategory::Negative
    };

    if category == EffectCategory::Positive {
        preactivate_heal_when_full(world, player);
    }

    let Some(effect) = draw_inactive_effect(world, category) else {
        play_sound(world, SoundCue::CystEmpty);
        logger::log_info(&format!("No available {:?} effect", category));
        return EffectOutcome::Exhausted(category);
    };

    activate_effect(world, player, effect)
}

/// HEAL при полном health: тихо занимаем HEAL (без иконки и звука), чтобы
/// weighted draw его не выбрал. Draw после этого продолжается как обычно.
///
/// Возвращает true, если HEAL был занят этим вызовом.
pub fn preactivate_heal_when_full(world: &mut World, player: Entity) -> bool {
    let heal_active = world.resource::<EffectRegistry>().is_active(EffectId::Heal);
    let health_full = world
        .get::<Health>(player)
        .is_some_and(|health| health.is_full());

    if heal_active || !health_full {
        return false;
    }

    set_active_timer(world, EffectId::Heal, SILENT_HEAL_TIME);
    true
}

/// Rejection sampling по весам категории, пока не выпадет неактивный id
///
/// None: категория исчерпана (или свободны только id с нулевым весом).
fn draw_inactive_effect(world: &mut World, category: EffectCategory) -> Option<EffectId> {
    let registry = world.resource::<EffectRegistry>().clone();
    if registry.is_exhausted(category) || !registry.has_drawable(category) {
        return None;
    }

    let offset = registry.category_range(category).start;
    let distribution = WeightedIndex::new(registry.weights(category)).ok()?;
    let mut rng = world.resource_mut::<DeterministicRng>();

    loop {
        let effect = EffectId::from_index(offset + distribution.sample(&mut rng.rng))?;
        if !registry.is_active(effect) {
            return Some(effect);
        }
    }
}

/// Пометить активным, выполнить handler, сыграть cue категории
pub fn activate_effect(world: &mut World, player: Entity, effect: EffectId) -> EffectOutcome {
    if world.resource::<EffectRegistry>().is_active(effect) {
        logger::log_warning(&format!("Effect {:?} is already active", effect));
        return EffectOutcome::AlreadyActive(effect);
    }

    world.resource_mut::<EffectRegistry>().set_active(effect, true);

    let applied = match effect {
        EffectId::Damage => activate_damage(world, player),
        EffectId::Heal => activate_heal(world, player),
        EffectId::ClearScreen => activate_clear_screen(world),
        EffectId::Slow => activate_slow(world, player),
        EffectId::Fov => activate_fov(world),
        EffectId::Direction => activate_direction(world),
        EffectId::NoAttack => activate_no_attack(world, player),
    };

    if applied.is_none() {
        world.resource_mut::<EffectRegistry>().set_active(effect, false);
        logger::log_error(&format!(
            "Effect {:?}: player {:?} lacks required components",
            effect, player
        ));
        return EffectOutcome::MissingComponents(effect);
    }

    let cue = match world.resource::<EffectRegistry>().get_effect(effect).category {
        EffectCategory::Positive => SoundCue::CystPositive,
        EffectCategory::Negative => SoundCue::CystNegative,
    };
    play_sound(world, cue);

    logger::log_info(&format!("Effect {:?} activated", effect));
    EffectOutcome::Applied(effect)
}

/// Flag-only эффект: is_active + TimedEvent, который только снимает флаг
pub fn set_active_timer(world: &mut World, effect: EffectId, timer_ms: f32) -> Entity {
    world.resource_mut::<EffectRegistry>().set_active(effect, true);
    schedule_reversion(world, effect, timer_ms, PendingReversion::FlagOnly)
}

/*************************[ positive effects ]*************************/

fn activate_damage(world: &mut World, player: Entity) -> Option<()> {
    let mut weapon = world.get_mut::<Weapon>(player)?;

    let snapshot = WeaponSnapshot {
        owner: player,
        damage: weapon.damage,
        bullet_speed: weapon.bullet_speed,
        size: weapon.size,
        color: weapon.color,
    };

    weapon.damage *= DAMAGE_MULTIPLIER;
    weapon.attack_delay *= ATTACK_DELAY_MULTIPLIER;
    weapon.bullet_speed *= BULLET_SPEED_MULTIPLIER;
    weapon.size *= BULLET_SIZE_MULTIPLIER;
    weapon.color = DAMAGE_BUFF_PROJECTILE_COLOR;

    schedule_reversion(
        world,
        EffectId::Damage,
        DAMAGE_EFFECT_TIME,
        PendingReversion::Damage(snapshot),
    );
    display_effect(world, EffectId::Damage);
    Some(())
}

fn activate_heal(world: &mut World, player: Entity) -> Option<()> {
    world.get_mut::<Health>(player)?.restore_full();
    set_active_timer(world, EffectId::Heal, DEFAULT_EFFECT_TIME);
    Some(())
}

fn activate_clear_screen(world: &mut World) -> Option<()> {
    let camera = world.resource::<Camera2dState>().position;
    let radius = world.resource::<GameConfig>().screen_radius * CLEAR_SCREEN_RADIUS_FRACTION;

    let doomed: Vec<Entity> = world
        .query::<(Entity, &Enemy, &Motion)>()
        .iter(world)
        .filter(|(_, enemy, motion)| {
            enemy.kind != EnemyKind::Boss && motion.position.distance(camera) < radius
        })
        .map(|(entity, _, _)| entity)
        .collect();

    logger::log(&format!("CLEAR_SCREEN: {} enemies start dying", doomed.len()));
    for entity in doomed {
        start_entity_death(world, entity);
    }

    set_active_timer(world, EffectId::ClearScreen, DEFAULT_EFFECT_TIME);
    Some(())
}

/*************************[ negative effects ]*************************/

fn activate_slow(world: &mut World, player: Entity) -> Option<()> {
    let mut motion = world.get_mut::<Motion>(player)?;

    let snapshot = MotionSnapshot {
        owner: player,
        acceleration_unit: motion.acceleration_unit,
        max_velocity: motion.max_velocity,
    };
    motion.acceleration_unit = SLOW_ACCELERATION_UNIT;
    motion.max_velocity = SLOW_MAX_VELOCITY;

    schedule_reversion(
        world,
        EffectId::Slow,
        SLOW_EFFECT_TIME,
        PendingReversion::Slow(snapshot),
    );
    display_effect(world, EffectId::Slow);
    Some(())
}

fn activate_fov(world: &mut World) -> Option<()> {
    world.resource_mut::<ScreenState>().limit_fov = true;

    let mut mixer = world.resource_mut::<AudioMixer>();
    let volume = mixer.volume();
    mixer.set_volume(volume - FOV_VOLUME_DELTA);

    schedule_reversion(
        world,
        EffectId::Fov,
        FOV_EFFECT_TIME,
        PendingReversion::Fov { volume },
    );
    display_effect(world, EffectId::Fov);
    Some(())
}

/// Placeholder: без gameplay-эффекта, флаг снимается сразу
fn activate_direction(world: &mut World) -> Option<()> {
    world
        .resource_mut::<EffectRegistry>()
        .set_active(EffectId::Direction, false);
    Some(())
}

fn activate_no_attack(world: &mut World, player: Entity) -> Option<()> {
    world.get_mut::<Weapon>(player)?.attack_delay = NO_ATTACK_DELAY;

    let mut bank = world.resource_mut::<SoundBank>();
    let shoot_cue = bank.player_shoot;
    bank.player_shoot = SoundCue::NoAmmo;

    schedule_reversion(
        world,
        EffectId::NoAttack,
        NO_ATTACK_TIME,
        PendingReversion::NoAttack {
            owner: player,
            shoot_cue,
        },
    );
    display_effect(world, EffectId::NoAttack);
    Some(())
}

/*************************[ helpers ]*************************/

/// Иконка в горизонтальной UI-полосе (слот из статической таблицы)
pub fn display_effect(world: &mut World, effect: EffectId) -> Option<Entity> {
    let (Some(slot), Some(texture)) = (effect.icon_slot(), effect.icon_texture()) else {
        return None;
    };

    let offset = slot as f32 * ICON_SIZE.x * ICON_SCALE + PADDING;
    let icon = world
        .spawn((
            EffectIcon { effect },
            ScreenTransform {
                position: Vec2::new(EFFECTS_POSITION.x + offset, EFFECTS_POSITION.y),
                scale: ICON_SIZE * ICON_SCALE,
            },
            RenderRequest {
                texture,
                order: RenderOrder::Ui,
            },
        ))
        .id();
    Some(icon)
}

fn play_sound(world: &mut World, cue: SoundCue) {
    world.send_event(PlaySound { cue });
}
