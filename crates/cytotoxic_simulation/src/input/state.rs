//! InputState + клавиши, которые понимает core

use bevy::prelude::*;
use std::collections::HashSet;

/// Клавиши (маппинг из кодов window system: у collaborator'а)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    /// Restart (на отпускание)
    R,
    /// Debug mode, пока зажата
    F,
    /// Shift+Comma = медленнее
    Comma,
    /// Shift+Period = быстрее
    Period,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Release,
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false };
    pub const SHIFT: Self = Self { shift: true };
}

/// Что сейчас зажато + последняя позиция курсора (window px)
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pressed: HashSet<Key>,
    pub mouse: Vec2,
}

impl InputState {
    pub fn press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// (positive зажата, negative зажата)
    pub fn axis(&self, positive: Key, negative: Key) -> (bool, bool) {
        (self.is_pressed(positive), self.is_pressed(negative))
    }
}
