//! The player character and its inventory.

use dungeon_collections::Vector;

use super::{Combatant, Entity, EntityStats};
use crate::combat::mitigate;
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::item::{Item, ItemCategory};

/// Inventory slot of the weapon every player starts with.
pub const STARTING_WEAPON_SLOT: usize = 0;
/// Inventory slot of the armor every player starts with.
pub const STARTING_ARMOR_SLOT: usize = 1;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("there's no item at index {index}")]
    NoItemAt { index: usize },

    #[error("the item at index {index} is {found}, not {expected}")]
    WrongCategory {
        index: usize,
        expected: ItemCategory,
        found: ItemCategory,
    },

    #[error("health is already full")]
    HealthFull,

    #[error("the item at index {index} has already been used up")]
    Spent { index: usize },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoItemAt { .. } => "NO_ITEM_AT",
            Self::WrongCategory { .. } => "WRONG_CATEGORY",
            Self::HealthFull => "HEALTH_FULL",
            Self::Spent { .. } => "SPENT",
        }
    }
}

/// Result of drinking a consumable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Consumed {
    /// Name and description the item had before it was emptied.
    pub name: String,
    pub description: String,
    /// Health actually restored after clamping to the maximum.
    pub healed: i32,
}

/// The adventurer.
///
/// # Invariants
///
/// - the equipped weapon and armor indices always point into `inventory`
///   (the inventory is seeded with bare fists and clothes and never shrinks)
/// - the equipped weapon slot always holds a weapon, the armor slot an armor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    entity: Entity,
    inventory: Vector<Item>,
    equipped_weapon: usize,
    equipped_armor: usize,
}

impl Player {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_stats(name, description, EntityStats::default())
    }

    pub fn with_stats(
        name: impl Into<String>,
        description: impl Into<String>,
        stats: EntityStats,
    ) -> Self {
        let mut inventory = Vector::with_capacity(4);
        inventory.push(Item::weapon("Fists", "Your fists", 0));
        inventory.push(Item::armor("Clothes", "Your clothes", 0));

        Self {
            entity: Entity::new(name, description, stats),
            inventory,
            equipped_weapon: STARTING_WEAPON_SLOT,
            equipped_armor: STARTING_ARMOR_SLOT,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(&config.player_name, &config.player_description)
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn inventory(&self) -> &Vector<Item> {
        &self.inventory
    }

    /// Adds `item` to the end of the inventory and returns its index.
    pub fn add_item(&mut self, item: Item) -> usize {
        self.inventory.push(item);
        self.inventory.len() - 1
    }

    pub fn equipped_weapon_index(&self) -> usize {
        self.equipped_weapon
    }

    pub fn equipped_armor_index(&self) -> usize {
        self.equipped_armor
    }

    pub fn equipped_weapon(&self) -> Option<&Item> {
        self.inventory.get(self.equipped_weapon).ok()
    }

    pub fn equipped_armor(&self) -> Option<&Item> {
        self.inventory.get(self.equipped_armor).ok()
    }

    /// Outgoing damage per hit: base attack plus the weapon's bonus.
    pub fn attack_rating(&self) -> i32 {
        let bonus = self
            .equipped_weapon()
            .map_or(0, |weapon| weapon.stats().attack_bonus);
        self.entity.stats().base_attack_damage.saturating_add(bonus)
    }

    /// Damage absorbed per hit: base defense plus the armor's bonus.
    pub fn defense_rating(&self) -> i32 {
        let bonus = self
            .equipped_armor()
            .map_or(0, |armor| armor.stats().defense_bonus);
        self.entity.stats().base_defense.saturating_add(bonus)
    }

    pub fn equip_weapon(&mut self, index: usize) -> Result<&Item, InventoryError> {
        self.expect_category(index, ItemCategory::Weapon)?;
        self.equipped_weapon = index;
        self.item(index)
    }

    pub fn equip_armor(&mut self, index: usize) -> Result<&Item, InventoryError> {
        self.expect_category(index, ItemCategory::Armor)?;
        self.equipped_armor = index;
        self.item(index)
    }

    /// Drinks the consumable at `index`.
    ///
    /// The bottle stays in the inventory, renamed and emptied, so other
    /// indices do not shift.
    pub fn use_consumable(&mut self, index: usize) -> Result<Consumed, InventoryError> {
        self.expect_category(index, ItemCategory::Consumable)?;
        if self.entity.health() >= GameConfig::MAX_HEALTH {
            return Err(InventoryError::HealthFull);
        }

        let item = self
            .inventory
            .get_mut(index)
            .map_err(|_| InventoryError::NoItemAt { index })?;
        if item.is_spent() {
            return Err(InventoryError::Spent { index });
        }

        let name = item.name().to_owned();
        let description = item.description().to_owned();
        let health = item.drain();
        let healed = self.entity.heal(health);

        Ok(Consumed {
            name,
            description,
            healed,
        })
    }

    fn item(&self, index: usize) -> Result<&Item, InventoryError> {
        self.inventory
            .get(index)
            .map_err(|_| InventoryError::NoItemAt { index })
    }

    fn expect_category(&self, index: usize, expected: ItemCategory) -> Result<(), InventoryError> {
        let found = self.item(index)?.category();
        if found != expected {
            return Err(InventoryError::WrongCategory {
                index,
                expected,
                found,
            });
        }
        Ok(())
    }
}

impl Combatant for Player {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn attack(&self, target: &mut dyn Combatant) {
        target.take_damage(self.attack_rating());
    }

    fn take_damage(&mut self, amount: i32) {
        let damage = mitigate(amount, self.defense_rating());
        self.entity.lose_health(damage);
    }
}
