//! Restart: снести всё, что двигается, и построить мир заново
//!
//! Restart не трогает effect registry и очередь TimedEvent: активные эффекты
//! доживают до своего таймера, откат к уже удалённому player пропускается.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use super::GameSpeed;
use crate::components::{DeathTimer, Enemy, Health, Motion, Player, Region, Tint, Weapon};
use crate::config::GameConfig;
use crate::effects::{EffectIcon, TimedEvent};
use crate::logger;
use crate::DeterministicRng;

/// Цвет игрока
pub const PLAYER_TINT: Vec3 = Vec3::new(1.0, 0.8, 0.8);

/// Отступ спавна врагов от края окна (px)
pub const ENEMY_SPAWN_MARGIN: f32 = 50.0;

/// Регион занимает кольцо [0.5, 1.0] × screen_radius
const REGION_MIN_RADIUS_FRACTION: f32 = 0.5;
const REGION_MIN_SCALE: f32 = 80.0;
const REGION_MAX_SCALE: f32 = 200.0;

/// System (exclusive): restart в конце кадра, если death/health его запросили
pub fn restart_on_request(world: &mut World) {
    restart_game(world);
}

/// Сбросить мир в начальное состояние
///
/// - game speed = 1
/// - все entity с Motion удаляются
/// - player в (0, 0), `region_count` регионов, `enemy_count` врагов
///   (позиции из общего RNG, он не пересеивается)
pub fn restart_game(world: &mut World) {
    log_entity_census(world, "before restart");
    logger::log_info("Restarting");

    world.resource_mut::<GameSpeed>().0 = 1.0;

    let doomed: Vec<Entity> = world
        .query_filtered::<Entity, With<Motion>>()
        .iter(world)
        .collect();
    for entity in doomed {
        world.despawn(entity);
    }

    log_entity_census(world, "after cleanup");

    let config = world.resource::<GameConfig>().clone();

    world.spawn((
        Player,
        Motion::at(Vec2::ZERO),
        Health::default(),
        Weapon::default(),
        Tint(PLAYER_TINT),
    ));

    world.resource_scope(|world, mut rng: Mut<DeterministicRng>| {
        for index in 0..config.region_count {
            let (position, scale) = region_placement(&mut rng.rng, &config, index);
            world.spawn((Region { index }, Motion::at(position).with_scale(scale)));
        }

        for _ in 0..config.enemy_count {
            let position = enemy_spawn_position(&mut rng.rng, &config);
            world.spawn((Enemy::default(), Motion::at(position)));
        }
    });

    logger::log(&format!(
        "World rebuilt: {} regions, {} enemies",
        config.region_count, config.enemy_count
    ));
}

/// 50 + u · (size − 100) по каждой оси
pub fn enemy_spawn_position(rng: &mut impl Rng, config: &GameConfig) -> Vec2 {
    let u: f32 = rng.gen();
    let v: f32 = rng.gen();
    Vec2::new(
        ENEMY_SPAWN_MARGIN + u * (config.window_width_px - 2.0 * ENEMY_SPAWN_MARGIN),
        ENEMY_SPAWN_MARGIN + v * (config.window_height_px - 2.0 * ENEMY_SPAWN_MARGIN),
    )
}

/// Регион `index`: в своём угловом секторе вокруг центра карты
fn region_placement(rng: &mut impl Rng, config: &GameConfig, index: usize) -> (Vec2, Vec2) {
    let sector = TAU / config.region_count.max(1) as f32;
    let angle = sector * (index as f32 + rng.gen::<f32>());
    let radius = config.screen_radius * rng.gen_range(REGION_MIN_RADIUS_FRACTION..=1.0);
    let size = rng.gen_range(REGION_MIN_SCALE..=REGION_MAX_SCALE);

    (Vec2::from_angle(angle) * radius, Vec2::splat(size))
}

/// Debug: сколько чего живёт (поиск утечек entity между restart)
pub fn log_entity_census(world: &mut World, label: &str) {
    let motions = world.query::<&Motion>().iter(world).count();
    let players = world.query::<&Player>().iter(world).count();
    let enemies = world.query::<&Enemy>().iter(world).count();
    let regions = world.query::<&Region>().iter(world).count();
    let dying = world.query::<&DeathTimer>().iter(world).count();
    let timed_events = world.query::<&TimedEvent>().iter(world).count();
    let icons = world.query::<&EffectIcon>().iter(world).count();

    logger::log(&format!(
        "Entity census ({}): total={} motion={} player={} enemy={} region={} dying={} timed_events={} icons={}",
        label,
        world.entities().len(),
        motions,
        players,
        enemies,
        regions,
        dying,
        timed_events,
        icons
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_enemy_spawn_inside_margins() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..200 {
            let position = enemy_spawn_position(&mut rng, &config);
            assert!(position.x >= ENEMY_SPAWN_MARGIN);
            assert!(position.x <= config.window_width_px - ENEMY_SPAWN_MARGIN);
            assert!(position.y >= ENEMY_SPAWN_MARGIN);
            assert!(position.y <= config.window_height_px - ENEMY_SPAWN_MARGIN);
        }
    }

    #[test]
    fn test_region_stays_in_its_sector() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let sector = TAU / config.region_count as f32;

        for index in 0..config.region_count {
            let (position, scale) = region_placement(&mut rng, &config, index);

            let distance = position.length();
            assert!(distance >= config.screen_radius * REGION_MIN_RADIUS_FRACTION - 1e-3);
            assert!(distance <= config.screen_radius + 1e-3);

            let angle = position.y.atan2(position.x).rem_euclid(TAU);
            assert!(angle >= sector * index as f32 - 1e-3);
            assert!(angle <= sector * (index + 1) as f32 + 1e-3);

            assert!(scale.x >= REGION_MIN_SCALE && scale.x <= REGION_MAX_SCALE);
        }
    }
}
