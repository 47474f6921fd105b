//! Effect registry: статическая таблица эффектов + флаги активности
//!
//! Таблица упорядочена: сначала POSITIVE, потом NEGATIVE (`neg_start`:
//! индекс первого негативного). Индекс в таблице == `EffectId as usize`,
//! поэтому lookup по id не может промахнуться.

use bevy::prelude::*;
use std::ops::Range;

use crate::components::TextureId;

pub const EFFECT_COUNT: usize = 7;

/// Закрытое множество эффектов (порядок = порядок в EFFECT_TABLE)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum EffectId {
    Damage,
    Heal,
    ClearScreen,
    Slow,
    Fov,
    Direction,
    NoAttack,
}

impl EffectId {
    pub const ALL: [EffectId; EFFECT_COUNT] = [
        EffectId::Damage,
        EffectId::Heal,
        EffectId::ClearScreen,
        EffectId::Slow,
        EffectId::Fov,
        EffectId::Direction,
        EffectId::NoAttack,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Слот иконки в UI-полосе (None = эффект без иконки)
    pub fn icon_slot(self) -> Option<usize> {
        match self {
            EffectId::Damage => Some(0),
            EffectId::Slow => Some(1),
            EffectId::Fov => Some(2),
            EffectId::NoAttack => Some(3),
            EffectId::Heal | EffectId::ClearScreen | EffectId::Direction => None,
        }
    }

    pub fn icon_texture(self) -> Option<TextureId> {
        match self {
            EffectId::Damage => Some(TextureId::EffectDamage),
            EffectId::Slow => Some(TextureId::EffectSlow),
            EffectId::Fov => Some(TextureId::EffectFov),
            EffectId::NoAttack => Some(TextureId::EffectNoAttack),
            EffectId::Heal | EffectId::ClearScreen | EffectId::Direction => None,
        }
    }
}

/// Buff или debuff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum EffectCategory {
    Positive,
    Negative,
}

/// Статическое описание эффекта
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectDef {
    pub id: EffectId,
    pub category: EffectCategory,
    /// Вес в weighted draw внутри категории (≥ 0; 0 = никогда не выпадает)
    pub weight: f32,
}

pub const EFFECT_TABLE: [EffectDef; EFFECT_COUNT] = [
    EffectDef { id: EffectId::Damage, category: EffectCategory::Positive, weight: 1.0 },
    EffectDef { id: EffectId::Heal, category: EffectCategory::Positive, weight: 1.0 },
    EffectDef { id: EffectId::ClearScreen, category: EffectCategory::Positive, weight: 0.5 },
    EffectDef { id: EffectId::Slow, category: EffectCategory::Negative, weight: 1.0 },
    EffectDef { id: EffectId::Fov, category: EffectCategory::Negative, weight: 1.0 },
    EffectDef { id: EffectId::Direction, category: EffectCategory::Negative, weight: 0.5 },
    EffectDef { id: EffectId::NoAttack, category: EffectCategory::Negative, weight: 1.0 },
];

/// Эффект + его runtime флаг
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effect {
    pub id: EffectId,
    pub category: EffectCategory,
    pub weight: f32,
    pub is_active: bool,
}

/// Registry всех эффектов (Resource, живёт весь процесс: restart не сбрасывает)
#[derive(Resource, Debug, Clone)]
pub struct EffectRegistry {
    effects: [Effect; EFFECT_COUNT],
    weights: [f32; EFFECT_COUNT],
    neg_start: usize,
}

impl Default for EffectRegistry {
    fn default() -> Self {
        Self::from_table(&EFFECT_TABLE)
    }
}

impl EffectRegistry {
    /// Строит registry из таблицы
    ///
    /// # Panics
    /// Если порядок таблицы не совпадает с `EffectId`, категории не образуют
    /// POSITIVE prefix + NEGATIVE suffix, или вес отрицательный / не конечный.
    /// Таблица статическая: это ошибка сборки, а не runtime условие.
    pub fn from_table(table: &[EffectDef; EFFECT_COUNT]) -> Self {
        let mut neg_start = EFFECT_COUNT;

        for (index, def) in table.iter().enumerate() {
            assert_eq!(
                def.id.index(),
                index,
                "effect table out of order: {:?} at slot {}",
                def.id,
                index
            );
            assert!(
                def.weight.is_finite() && def.weight >= 0.0,
                "effect {:?} has invalid weight {}",
                def.id,
                def.weight
            );

            match def.category {
                EffectCategory::Negative if neg_start == EFFECT_COUNT => neg_start = index,
                EffectCategory::Positive => assert!(
                    neg_start == EFFECT_COUNT,
                    "positive effect {:?} after negative suffix start {}",
                    def.id,
                    neg_start
                ),
                EffectCategory::Negative => {}
            }
        }

        let effects = table.map(|def| Effect {
            id: def.id,
            category: def.category,
            weight: def.weight,
            is_active: false,
        });
        let weights = table.map(|def| def.weight);

        Self {
            effects,
            weights,
            neg_start,
        }
    }

    pub fn get_effect(&self, id: EffectId) -> &Effect {
        let effect = &self.effects[id.index()];
        debug_assert_eq!(effect.id, id, "EffectId not found in registry");
        effect
    }

    pub fn get_effect_mut(&mut self, id: EffectId) -> &mut Effect {
        let effect = &mut self.effects[id.index()];
        debug_assert_eq!(effect.id, id, "EffectId not found in registry");
        effect
    }

    pub fn is_active(&self, id: EffectId) -> bool {
        self.get_effect(id).is_active
    }

    pub fn set_active(&mut self, id: EffectId, active: bool) {
        self.get_effect_mut(id).is_active = active;
    }

    /// Индекс первого NEGATIVE эффекта
    pub fn neg_start(&self) -> usize {
        self.neg_start
    }

    pub fn category_range(&self, category: EffectCategory) -> Range<usize> {
        match category {
            EffectCategory::Positive => 0..self.neg_start,
            EffectCategory::Negative => self.neg_start..EFFECT_COUNT,
        }
    }

    pub fn category_len(&self, category: EffectCategory) -> usize {
        self.category_range(category).len()
    }

    pub fn count_active(&self, category: EffectCategory) -> usize {
        self.effects
            .iter()
            .filter(|effect| effect.is_active && effect.category == category)
            .count()
    }

    /// Все эффекты категории уже активны → выбирать нечего
    pub fn is_exhausted(&self, category: EffectCategory) -> bool {
        self.count_active(category) >= self.category_len(category)
    }

    /// Есть хотя бы один неактивный эффект с положительным весом
    ///
    /// Rejection sampling завершается только если это true.
    pub fn has_drawable(&self, category: EffectCategory) -> bool {
        self.effects[self.category_range(category)]
            .iter()
            .any(|effect| !effect.is_active && effect.weight > 0.0)
    }

    pub fn positive_weights(&self) -> &[f32] {
        &self.weights[..self.neg_start]
    }

    pub fn negative_weights(&self) -> &[f32] {
        &self.weights[self.neg_start..]
    }

    pub fn weights(&self, category: EffectCategory) -> &[f32] {
        match category {
            EffectCategory::Positive => self.positive_weights(),
            EffectCategory::Negative => self.negative_weights(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_and_neg_start() {
        let registry = EffectRegistry::default();

        assert_eq!(registry.neg_start(), 3);
        assert_eq!(registry.category_len(EffectCategory::Positive), 3);
        assert_eq!(registry.category_len(EffectCategory::Negative), 4);
        assert_eq!(registry.positive_weights(), &[1.0, 1.0, 0.5]);
        assert_eq!(registry.negative_weights(), &[1.0, 1.0, 0.5, 1.0]);
    }

    #[test]
    fn test_get_effect_matches_id() {
        let registry = EffectRegistry::default();
        for id in EffectId::ALL {
            assert_eq!(registry.get_effect(id).id, id);
            assert!(!registry.get_effect(id).is_active);
        }
        assert_eq!(registry.get_effect(EffectId::Fov).category, EffectCategory::Negative);
    }

    #[test]
    fn test_count_active_per_category() {
        let mut registry = EffectRegistry::default();
        registry.set_active(EffectId::Damage, true);
        registry.set_active(EffectId::Slow, true);
        registry.set_active(EffectId::NoAttack, true);

        assert_eq!(registry.count_active(EffectCategory::Positive), 1);
        assert_eq!(registry.count_active(EffectCategory::Negative), 2);
        assert!(
            registry.count_active(EffectCategory::Positive)
                + registry.count_active(EffectCategory::Negative)
                <= EFFECT_COUNT
        );
    }

    #[test]
    fn test_exhaustion() {
        let mut registry = EffectRegistry::default();
        assert!(!registry.is_exhausted(EffectCategory::Positive));

        for id in [EffectId::Damage, EffectId::Heal, EffectId::ClearScreen] {
            registry.set_active(id, true);
        }
        assert!(registry.is_exhausted(EffectCategory::Positive));
        assert!(!registry.has_drawable(EffectCategory::Positive));
        assert!(!registry.is_exhausted(EffectCategory::Negative));
    }

    #[test]
    fn test_zero_weight_is_not_drawable() {
        let mut table = EFFECT_TABLE;
        table[EffectId::Direction.index()].weight = 0.0;
        let mut registry = EffectRegistry::from_table(&table);

        for id in [EffectId::Slow, EffectId::Fov, EffectId::NoAttack] {
            registry.set_active(id, true);
        }

        // Direction ещё свободен, но с весом 0 его никогда не вытянуть
        assert!(!registry.is_exhausted(EffectCategory::Negative));
        assert!(!registry.has_drawable(EffectCategory::Negative));
    }

    #[test]
    #[should_panic(expected = "positive effect")]
    fn test_interleaved_categories_rejected() {
        let mut table = EFFECT_TABLE;
        table[EffectId::ClearScreen.index()].category = EffectCategory::Negative;
        table[EffectId::Slow.index()].category = EffectCategory::Positive;
        let _ = EffectRegistry::from_table(&table);
    }

    #[test]
    #[should_panic(expected = "out of order")]
    fn test_misordered_table_rejected() {
        let mut table = EFFECT_TABLE;
        table.swap(0, 1);
        let _ = EffectRegistry::from_table(&table);
    }

    #[test]
    fn test_icon_slots_unique() {
        let slots: Vec<usize> = EffectId::ALL.iter().filter_map(|id| id.icon_slot()).collect();
        let mut deduped = slots.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(slots.len(), deduped.len());

        for id in EffectId::ALL {
            assert_eq!(id.icon_slot().is_some(), id.icon_texture().is_some());
        }
    }
}
