//! Room guardians.

use super::{Combatant, Entity, EntityStats};
use crate::item::Item;

/// A room guardian.
///
/// Enemies have no armor: every point of incoming damage lands. Their
/// outgoing damage is base attack plus `aggression`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    entity: Entity,
    aggression: i32,
    loot: Item,
}

impl Enemy {
    /// Starts building an enemy with default stats, no aggression and a rock for loot.
    pub fn builder(name: impl Into<String>) -> EnemyBuilder {
        EnemyBuilder::new(name)
    }

    pub fn new(entity: Entity, aggression: i32, loot: Item) -> Self {
        Self {
            entity,
            aggression,
            loot,
        }
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn aggression(&self) -> i32 {
        self.aggression
    }

    pub fn set_aggression(&mut self, aggression: i32) {
        self.aggression = aggression;
    }

    pub fn loot(&self) -> &Item {
        &self.loot
    }

    pub fn attack_rating(&self) -> i32 {
        self.entity
            .stats()
            .base_attack_damage
            .saturating_add(self.aggression)
    }

    /// Consumes the enemy, handing over what it carried.
    pub fn into_loot(self) -> Item {
        self.loot
    }
}

impl Combatant for Enemy {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn attack(&self, target: &mut dyn Combatant) {
        target.take_damage(self.attack_rating());
    }

    fn take_damage(&mut self, amount: i32) {
        self.entity.lose_health(amount);
    }
}

#[derive(Clone, Debug)]
pub struct EnemyBuilder {
    name: String,
    description: String,
    stats: EntityStats,
    aggression: i32,
    loot: Item,
}

impl EnemyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            stats: EntityStats::default(),
            aggression: 0,
            loot: Item::rock(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn health(mut self, health: i32) -> Self {
        self.stats.set_health(health);
        self
    }

    pub fn base_attack_damage(mut self, damage: i32) -> Self {
        self.stats.base_attack_damage = damage;
        self
    }

    pub fn base_defense(mut self, defense: i32) -> Self {
        self.stats.base_defense = defense;
        self
    }

    pub fn aggression(mut self, aggression: i32) -> Self {
        self.aggression = aggression;
        self
    }

    pub fn loot(mut self, loot: Item) -> Self {
        self.loot = loot;
        self
    }

    pub fn build(self) -> Enemy {
        Enemy::new(
            Entity::new(self.name, self.description, self.stats),
            self.aggression,
            self.loot,
        )
    }
}
