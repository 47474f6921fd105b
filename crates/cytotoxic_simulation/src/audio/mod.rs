//! Audio collaborator interface
//!
//! Core не играет звук сам: пишет `PlaySound` events и держит громкость /
//! sound bank как resources. Mixer снаружи читает events каждый кадр.

use bevy::prelude::*;

/// SDL-style шкала громкости (0..=128)
pub const MAX_VOLUME: i32 = 128;

/// Звуковые cue, которые может запросить core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Активирован POSITIVE эффект
    CystPositive,
    /// Активирован NEGATIVE эффект
    CystNegative,
    /// Свободных эффектов в категории нет
    CystEmpty,
    PlayerShoot,
    NoAmmo,
}

/// Event: проиграть cue (ECS → audio mixer)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySound {
    pub cue: SoundCue,
}

/// Глобальная громкость
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioMixer {
    volume: i32,
}

impl Default for AudioMixer {
    fn default() -> Self {
        Self { volume: MAX_VOLUME }
    }
}

impl AudioMixer {
    pub fn volume(&self) -> i32 {
        self.volume
    }

    /// Clamp в 0..=MAX_VOLUME (как Mix_Volume)
    pub fn set_volume(&mut self, volume: i32) {
        self.volume = volume.clamp(0, MAX_VOLUME);
    }
}

/// Какой cue играет на каком игровом действии (NO_ATTACK подменяет shoot)
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundBank {
    pub player_shoot: SoundCue,
}

impl Default for SoundBank {
    fn default() -> Self {
        Self {
            player_shoot: SoundCue::PlayerShoot,
        }
    }
}

/// Регистрирует audio resources + PlaySound event
pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlaySound>()
            .init_resource::<AudioMixer>()
            .init_resource::<SoundBank>();
    }
}
