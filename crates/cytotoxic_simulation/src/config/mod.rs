//! GameConfig: параметры мира, движения и спавна
//!
//! Default значения = боевые константы игры. Можно переопределить JSON
//! файлом (headless прогоны, балансировка). Тюнинг эффектов живёт отдельно
//! в `effects::tuning` (он фиксирован и не конфигурируется).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Параметры мира (один resource на App)
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Размер окна (px): нужен для спавна врагов и facing angle
    pub window_width_px: f32,
    pub window_height_px: f32,

    /// Сколько врагов спавнится на каждом restart
    pub enemy_count: usize,
    /// Сколько регионов карты на каждом restart
    pub region_count: usize,

    /// Вероятность выбрать POSITIVE категорию в apply_random_effect
    pub positive_probability: f32,

    /// Прибавка к velocity за кадр при зажатой клавише
    pub velocity_unit: f32,
    /// Базовый damping (умножается на velocity когда ось не нажата)
    pub acceleration_unit: f32,
    /// Базовая max velocity игрока; также скорость knockback
    pub max_velocity: f32,

    /// Видимый радиус вокруг камеры (CLEAR_SCREEN берёт 90% от него)
    pub screen_radius: f32,

    /// Начальное значение DeathTimer (ms)
    pub death_timer_ms: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width_px: 1200.0,
            window_height_px: 800.0,
            enemy_count: 5,
            region_count: 6,
            positive_probability: 0.5,
            velocity_unit: 20.0,
            acceleration_unit: 0.9,
            max_velocity: 400.0,
            screen_radius: 720.0,
            death_timer_ms: 3000.0,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;

        crate::logger::log_info(&format!("Loaded game config from {}", path.display()));
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.positive_probability) {
            return Err(ConfigError::Invalid {
                field: "positive_probability",
                reason: format!("{} is outside [0, 1]", self.positive_probability),
            });
        }
        // Спавн врагов: 50 + u * (size - 100), окно меньше 100px ломает формулу
        if self.window_width_px <= 100.0 || self.window_height_px <= 100.0 {
            return Err(ConfigError::Invalid {
                field: "window_width_px/window_height_px",
                reason: format!(
                    "{}x{} is too small (must be > 100px)",
                    self.window_width_px, self.window_height_px
                ),
            });
        }
        if self.max_velocity <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "max_velocity",
                reason: format!("{} must be positive", self.max_velocity),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.enemy_count, 5);
        assert_eq!(config.max_velocity, 400.0);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = GameConfig::from_json_str(r#"{ "enemy_count": 12 }"#).unwrap();

        assert_eq!(config.enemy_count, 12);
        assert_eq!(config.region_count, GameConfig::default().region_count);
        assert_eq!(config.velocity_unit, 20.0);
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let err = GameConfig::from_json_str(r#"{ "positive_probability": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { field: "positive_probability", .. }
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json_str("{ enemy_count: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
