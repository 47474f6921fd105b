//! Collision resolution
//!
//! Physics collaborator пишет `CollisionDetected` (broad/narrow phase не
//! здесь), мы за один проход превращаем их в изменения velocity:
//! - граница: отражение с потерей 5% импульса
//! - player vs enemy: knockback игрока от врага на max скорости
//! - enemy vs enemy: обрабатываемый враг копирует velocity другого
//!   (порядок событий важен: ответ несимметричный)

use bevy::prelude::*;

use super::{AccelerationGate, DebugMode};
use crate::components::{DebugMarker, Motion};
use crate::config::GameConfig;
use crate::logger;

/// Сколько velocity остаётся после отражения от границы
pub const BOUNDARY_RESTITUTION: f32 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    WithBoundary,
    PlayerWithEnemy { enemy: Entity },
    EnemyWithEnemy { other: Entity },
}

/// Event: `entity` столкнулась с чем-то в этом кадре
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionDetected {
    pub entity: Entity,
    pub collision: Collision,
}

impl CollisionDetected {
    pub fn boundary(entity: Entity) -> Self {
        Self {
            entity,
            collision: Collision::WithBoundary,
        }
    }

    pub fn player_with_enemy(player: Entity, enemy: Entity) -> Self {
        Self {
            entity: player,
            collision: Collision::PlayerWithEnemy { enemy },
        }
    }

    pub fn enemy_with_enemy(enemy: Entity, other: Entity) -> Self {
        Self {
            entity: enemy,
            collision: Collision::EnemyWithEnemy { other },
        }
    }
}

/// Отражение от круглой границы (центр в origin)
///
/// n = −normalize(position); отражаем только если velocity смотрит наружу
/// (v·n < 0), иначе entity застрянет в границе. None: velocity не меняется.
pub fn reflect_off_boundary(position: Vec2, velocity: Vec2) -> Option<Vec2> {
    let normal = -position.normalize_or_zero();
    if normal == Vec2::ZERO {
        return None;
    }

    let along_normal = velocity.dot(normal);
    if along_normal >= 0.0 {
        return None;
    }

    Some(BOUNDARY_RESTITUTION * (velocity - 2.0 * along_normal * normal))
}

/// Knockback игрока прямо от врага
pub fn knockback_velocity(player: Vec2, enemy: Vec2, speed: f32) -> Vec2 {
    speed * (player - enemy).normalize_or_zero()
}

/// System: разобрать коллизии кадра (события потребляются)
pub fn handle_collisions(
    mut commands: Commands,
    mut collisions: ResMut<Events<CollisionDetected>>,
    mut motions: Query<&mut Motion>,
    mut gate: ResMut<AccelerationGate>,
    config: Res<GameConfig>,
    debug: Res<DebugMode>,
) {
    for event in collisions.drain() {
        let Ok(motion) = motions.get(event.entity) else {
            logger::log(&format!("Collision for missing entity {:?} skipped", event.entity));
            continue;
        };
        let (position, velocity) = (motion.position, motion.velocity);

        let resolved = match event.collision {
            Collision::WithBoundary => reflect_off_boundary(position, velocity),

            Collision::PlayerWithEnemy { enemy } => motions
                .get(enemy)
                .ok()
                .map(|enemy| knockback_velocity(position, enemy.position, config.max_velocity)),

            Collision::EnemyWithEnemy { other } => {
                motions.get(other).ok().map(|other| other.velocity)
            }
        };

        let Some(new_velocity) = resolved else {
            continue;
        };

        if let Ok(mut motion) = motions.get_mut(event.entity) {
            motion.velocity = new_velocity;
        }

        if !matches!(event.collision, Collision::EnemyWithEnemy { .. }) {
            gate.allow = false;
        }

        if debug.enabled {
            commands.spawn(DebugMarker { position });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_reflects_outgoing_velocity() {
        let reflected = reflect_off_boundary(Vec2::new(1.0, 0.0), Vec2::new(10.0, 0.0)).unwrap();
        assert!((reflected - Vec2::new(-9.5, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_boundary_keeps_inward_velocity() {
        assert_eq!(
            reflect_off_boundary(Vec2::new(1.0, 0.0), Vec2::new(-10.0, 0.0)),
            None
        );
        // Касательная скорость тоже не отражается
        assert_eq!(
            reflect_off_boundary(Vec2::new(1.0, 0.0), Vec2::new(0.0, 10.0)),
            None
        );
    }

    #[test]
    fn test_boundary_at_origin_is_noop() {
        assert_eq!(reflect_off_boundary(Vec2::ZERO, Vec2::new(10.0, 0.0)), None);
    }

    #[test]
    fn test_diagonal_reflection_preserves_tangent() {
        // Граница в (0, 5): нормаль (0, −1); tangent x сохраняется
        let reflected = reflect_off_boundary(Vec2::new(0.0, 5.0), Vec2::new(3.0, 4.0)).unwrap();
        assert!((reflected - Vec2::new(3.0 * 0.95, -4.0 * 0.95)).length() < 1e-5);
    }

    #[test]
    fn test_knockback_points_away_from_enemy() {
        let velocity = knockback_velocity(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0), 400.0);
        assert!((velocity - Vec2::new(-240.0, -320.0)).length() < 1e-3);
    }

    #[test]
    fn test_knockback_same_position_is_zero() {
        assert_eq!(
            knockback_velocity(Vec2::ONE, Vec2::ONE, 400.0),
            Vec2::ZERO
        );
    }
}
