//! Items: inert values found in rooms, dropped by enemies and carried by the player.
//!
//! # Design: Category + Stats
//!
//! Every item carries the same four stats; the category decides which of
//! them matters (attack bonus for weapons, defense bonus for armor, health
//! points for consumables, key type for keys). Rocks are the "nothing here"
//! sentinel and carry no useful stats.

use strum::{Display, EnumIter};

/// Name given to the sentinel item left behind once a room has been explored.
pub const ROCK_NAME: &str = "Rock";
pub const ROCK_DESCRIPTION: &str = "Just a rock";

/// Name a consumable takes once it has been used up.
pub const EMPTY_CONSUMABLE_NAME: &str = "Empty bottle";
pub const EMPTY_CONSUMABLE_DESCRIPTION: &str = "An empty bottle";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ItemCategory {
    Weapon,
    Armor,
    Consumable,
    Key,
    Rock,
}

impl ItemCategory {
    /// Single-character code used by world descriptions.
    pub const fn code(self) -> char {
        match self {
            Self::Weapon => 'W',
            Self::Armor => 'A',
            Self::Consumable => 'C',
            Self::Key => 'K',
            Self::Rock => 'R',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'W' => Some(Self::Weapon),
            'A' => Some(Self::Armor),
            'C' => Some(Self::Consumable),
            'K' => Some(Self::Key),
            'R' => Some(Self::Rock),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ItemProperty {
    AttackBonus,
    DefenseBonus,
    HealthPoints,
    KeyType,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemStats {
    pub attack_bonus: i32,
    pub defense_bonus: i32,
    pub health_points: i32,
    pub key_type: i32,
}

impl ItemStats {
    pub fn get(&self, property: ItemProperty) -> i32 {
        match property {
            ItemProperty::AttackBonus => self.attack_bonus,
            ItemProperty::DefenseBonus => self.defense_bonus,
            ItemProperty::HealthPoints => self.health_points,
            ItemProperty::KeyType => self.key_type,
        }
    }

    pub fn set(&mut self, property: ItemProperty, value: i32) {
        let slot = match property {
            ItemProperty::AttackBonus => &mut self.attack_bonus,
            ItemProperty::DefenseBonus => &mut self.defense_bonus,
            ItemProperty::HealthPoints => &mut self.health_points,
            ItemProperty::KeyType => &mut self.key_type,
        };
        *slot = value;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    name: String,
    description: String,
    category: ItemCategory,
    stats: ItemStats,
    spent: bool,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: ItemCategory,
        stats: ItemStats,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
            stats,
            spent: false,
        }
    }

    /// The sentinel item: found in explored rooms, carried by enemies without loot.
    pub fn rock() -> Self {
        Self::new(
            ROCK_NAME,
            ROCK_DESCRIPTION,
            ItemCategory::Rock,
            ItemStats::default(),
        )
    }

    pub fn weapon(
        name: impl Into<String>,
        description: impl Into<String>,
        attack_bonus: i32,
    ) -> Self {
        let stats = ItemStats {
            attack_bonus,
            ..ItemStats::default()
        };
        Self::new(name, description, ItemCategory::Weapon, stats)
    }

    pub fn armor(
        name: impl Into<String>,
        description: impl Into<String>,
        defense_bonus: i32,
    ) -> Self {
        let stats = ItemStats {
            defense_bonus,
            ..ItemStats::default()
        };
        Self::new(name, description, ItemCategory::Armor, stats)
    }

    pub fn consumable(
        name: impl Into<String>,
        description: impl Into<String>,
        health_points: i32,
    ) -> Self {
        let stats = ItemStats {
            health_points,
            ..ItemStats::default()
        };
        Self::new(name, description, ItemCategory::Consumable, stats)
    }

    pub fn key(name: impl Into<String>, description: impl Into<String>, key_type: i32) -> Self {
        let stats = ItemStats {
            key_type,
            ..ItemStats::default()
        };
        Self::new(name, description, ItemCategory::Key, stats)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn stats(&self) -> &ItemStats {
        &self.stats
    }

    pub fn property(&self, property: ItemProperty) -> i32 {
        self.stats.get(property)
    }

    pub fn set_property(&mut self, property: ItemProperty, value: i32) {
        self.stats.set(property, value);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn is_rock(&self) -> bool {
        self.category == ItemCategory::Rock
    }

    /// A consumable that has already been drunk. A fresh one is never spent,
    /// even when it restores nothing.
    pub fn is_spent(&self) -> bool {
        self.spent
    }

    /// Empties a consumable in place and returns the health it held.
    ///
    /// The item keeps its inventory slot so indices of the items after it
    /// stay valid.
    pub(crate) fn drain(&mut self) -> i32 {
        let health = self.stats.health_points;
        self.stats.health_points = 0;
        self.spent = true;
        self.name = EMPTY_CONSUMABLE_NAME.to_owned();
        self.description = EMPTY_CONSUMABLE_DESCRIPTION.to_owned();
        health
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::rock()
    }
}
