//! Акторы: Player, Enemy, Region, Health

use bevy::prelude::*;

/// Максимум health игрока (абсолютные единицы)
pub const MAX_HEALTH: f32 = 100.0;

/// Время, за которое health bar догоняет target (ms)
///
/// После snap таймер возвращается к этому значению: следующее изменение
/// target снова анимируется за то же время.
pub const HEALTH_BAR_SLEW_MS: f32 = 500.0;

/// Marker component для player-controlled entity
///
/// Единственный на restart. Эффекты и input работают только с ним.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Тип врага
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum EnemyKind {
    #[default]
    Red,
    /// Босс: иммунен к CLEAR_SCREEN
    Boss,
}

#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Enemy {
    pub kind: EnemyKind,
}

/// Регион карты (процедурно размещается на restart)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Region {
    pub index: usize,
}

/// Цвет спрайта (RGB multiplier для render collaborator)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Tint(pub Vec3);

/// Здоровье игрока + состояние анимации health bar
///
/// Инварианты:
/// - 0 ≤ health ≤ max_health
/// - current_percentage сходится к target_percentage за HEALTH_BAR_SLEW_MS
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub health: f32,
    pub max_health: f32,
    /// Что сейчас нарисовано (0..100)
    pub current_percentage: f32,
    /// Куда анимируемся (0..100)
    pub target_percentage: f32,
    /// Оставшееся время анимации (ms)
    pub timer_ms: f32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(MAX_HEALTH)
    }
}

impl Health {
    pub fn new(max_health: f32) -> Self {
        Self {
            health: max_health,
            max_health,
            current_percentage: 100.0,
            target_percentage: 100.0,
            timer_ms: HEALTH_BAR_SLEW_MS,
        }
    }

    pub fn is_full(&self) -> bool {
        self.health >= self.max_health
    }

    /// Bar ещё не догнал target и таймер тикает
    pub fn is_animating(&self) -> bool {
        self.current_percentage != self.target_percentage && self.timer_ms > 0.0
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
        self.target_percentage = self.health / self.max_health * 100.0;
    }

    /// HEAL: health = max, bar анимируется к 100%
    pub fn restore_full(&mut self) {
        self.health = self.max_health;
        self.target_percentage = 100.0;
    }
}
