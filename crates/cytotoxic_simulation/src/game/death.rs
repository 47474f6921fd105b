//! Death timers: умирающие entity, darken и restart по истечении таймера

use bevy::prelude::*;

use super::{FrameState, FrameTime};
use crate::components::{DeathTimer, Motion, Player, ScreenState};
use crate::config::GameConfig;
use crate::logger;

/// Запускает death sequence: DeathTimer + остановка
///
/// Повторный вызов на уже умирающей entity ничего не делает (таймер не
/// перезапускается).
pub fn start_entity_death(world: &mut World, entity: Entity) -> bool {
    let timer_ms = world.resource::<GameConfig>().death_timer_ms;

    let Ok(mut entity_mut) = world.get_entity_mut(entity) else {
        logger::log_warning(&format!("start_entity_death: {:?} does not exist", entity));
        return false;
    };

    if entity_mut.contains::<DeathTimer>() {
        return false;
    }

    entity_mut.insert(DeathTimer { timer_ms });
    if let Some(mut motion) = entity_mut.get_mut::<Motion>() {
        motion.velocity = Vec2::ZERO;
    }
    true
}

/// System: тик всех DeathTimer
///
/// Каждый таймер (игрок или враг) участвует в min для darken. Любой таймер
/// ушёл в минус → снять его, darken = 0, запросить restart (дальше кадр не
/// обрабатывается).
pub fn tick_death_timers(
    mut commands: Commands,
    time: Res<FrameTime>,
    mut frame: ResMut<FrameState>,
    mut screen: ResMut<ScreenState>,
    mut timers: Query<(Entity, &mut DeathTimer, Has<Player>)>,
) {
    for (entity, mut timer, is_player) in timers.iter_mut() {
        timer.timer_ms -= time.elapsed_ms;
        frame.min_timer_ms = frame.min_timer_ms.min(timer.timer_ms);

        if timer.timer_ms >= 0.0 {
            continue;
        }

        commands.entity(entity).remove::<DeathTimer>();
        screen.darken_factor = 0.0;
        frame.restart_requested = true;
        logger::log_info(&format!(
            "Death timer expired ({:?}, player={}) → restart",
            entity, is_player
        ));
        break;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_config() -> World {
        let mut world = World::new();
        world.insert_resource(GameConfig::default());
        world
    }

    #[test]
    fn test_start_entity_death_stops_entity() {
        let mut world = world_with_config();
        let enemy = world
            .spawn(Motion::at(Vec2::new(10.0, 10.0)).with_velocity(Vec2::new(50.0, 0.0)))
            .id();

        assert!(start_entity_death(&mut world, enemy));

        assert_eq!(world.get::<DeathTimer>(enemy).unwrap().timer_ms, 3000.0);
        assert_eq!(world.get::<Motion>(enemy).unwrap().velocity, Vec2::ZERO);
    }

    #[test]
    fn test_start_entity_death_does_not_reset_timer() {
        let mut world = world_with_config();
        let enemy = world
            .spawn((Motion::default(), DeathTimer { timer_ms: 120.0 }))
            .id();

        assert!(!start_entity_death(&mut world, enemy));
        assert_eq!(world.get::<DeathTimer>(enemy).unwrap().timer_ms, 120.0);
    }

    fn tick_app(elapsed_ms: f32) -> App {
        let mut app = App::new();
        app.insert_resource(GameConfig::default())
            .insert_resource(FrameTime { elapsed_ms })
            .init_resource::<FrameState>()
            .init_resource::<ScreenState>()
            .add_systems(Update, tick_death_timers);
        app
    }

    #[test]
    fn test_enemy_timer_feeds_darken_minimum() {
        let mut app = tick_app(1500.0);
        app.world_mut()
            .spawn((Motion::default(), DeathTimer { timer_ms: 3000.0 }));

        app.update();

        let frame = *app.world().resource::<FrameState>();
        assert_eq!(frame.min_timer_ms, 1500.0);
        assert!(!frame.restart_requested);
    }

    #[test]
    fn test_expired_enemy_timer_requests_restart() {
        let mut app = tick_app(100.0);
        app.world_mut().resource_mut::<ScreenState>().darken_factor = 0.97;
        let enemy = app
            .world_mut()
            .spawn((Motion::default(), DeathTimer { timer_ms: 50.0 }))
            .id();

        app.update();

        let world = app.world();
        assert!(world.resource::<FrameState>().restart_requested);
        assert_eq!(world.resource::<ScreenState>().darken_factor, 0.0);
        assert!(world.get::<DeathTimer>(enemy).is_none());
        // Сама entity живёт до restart
        assert!(world.get_entity(enemy).is_ok());
    }

    #[test]
    fn test_timer_at_exactly_zero_is_not_expired() {
        let mut app = tick_app(300.0);
        app.world_mut()
            .spawn((Motion::default(), DeathTimer { timer_ms: 300.0 }));

        app.update();

        let frame = *app.world().resource::<FrameState>();
        assert_eq!(frame.min_timer_ms, 0.0);
        assert!(!frame.restart_requested);
    }

    #[test]
    fn test_start_entity_death_on_despawned_entity() {
        let mut world = world_with_config();
        let enemy = world.spawn(Motion::default()).id();
        world.despawn(enemy);

        assert!(!start_entity_death(&mut world, enemy));
    }
}
