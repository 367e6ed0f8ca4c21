//! Combat participants.
//!
//! This module contains the stat-bearing types that take part in fights:
//! - Entity: name, description and base stats shared by every combatant
//! - Player: the adventurer, with an inventory and equipped gear
//! - Enemy: room guardians, with aggression and loot
//!
//! Player and Enemy both implement [`Combatant`], the attack/defend contract
//! used by combat resolution.

pub mod enemy;
pub mod player;

pub use enemy::{Enemy, EnemyBuilder};
pub use player::{Consumed, InventoryError, Player};

use strum::{Display, EnumIter};

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum EntityProperty {
    Health,
    BaseAttackDamage,
    BaseDefense,
}

/// Base stats of a combatant.
///
/// # Invariants
///
/// - `health` stays within `[0, GameConfig::MAX_HEALTH]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityStats {
    health: i32,
    pub base_attack_damage: i32,
    pub base_defense: i32,
}

impl EntityStats {
    pub fn new(health: i32, base_attack_damage: i32, base_defense: i32) -> Self {
        Self {
            health: clamp_health(health),
            base_attack_damage,
            base_defense,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn set_health(&mut self, health: i32) {
        self.health = clamp_health(health);
    }

    pub fn get(&self, property: EntityProperty) -> i32 {
        match property {
            EntityProperty::Health => self.health,
            EntityProperty::BaseAttackDamage => self.base_attack_damage,
            EntityProperty::BaseDefense => self.base_defense,
        }
    }

    pub fn set(&mut self, property: EntityProperty, value: i32) {
        match property {
            EntityProperty::Health => self.set_health(value),
            EntityProperty::BaseAttackDamage => self.base_attack_damage = value,
            EntityProperty::BaseDefense => self.base_defense = value,
        }
    }
}

impl Default for EntityStats {
    fn default() -> Self {
        Self::new(
            GameConfig::DEFAULT_HEALTH,
            GameConfig::DEFAULT_BASE_ATTACK_DAMAGE,
            GameConfig::DEFAULT_BASE_DEFENSE,
        )
    }
}

fn clamp_health(health: i32) -> i32 {
    health.clamp(0, GameConfig::MAX_HEALTH)
}

/// Identity and base stats shared by players and enemies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    name: String,
    description: String,
    stats: EntityStats,
}

impl Entity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        stats: EntityStats,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            stats,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn stats(&self) -> &EntityStats {
        &self.stats
    }

    pub fn property(&self, property: EntityProperty) -> i32 {
        self.stats.get(property)
    }

    /// Overwrites a base stat. Health is clamped to `[0, MAX_HEALTH]`.
    pub fn set_property(&mut self, property: EntityProperty, value: i32) {
        self.stats.set(property, value);
    }

    pub fn health(&self) -> i32 {
        self.stats.health
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.stats.health > 0
    }

    /// Removes `amount` health, never going below zero. Negative amounts are ignored.
    pub(crate) fn lose_health(&mut self, amount: i32) {
        let health = crate::combat::apply_damage(self.stats.health, amount);
        self.stats.set_health(health);
    }

    /// Restores up to `amount` health and returns how much was actually restored.
    pub(crate) fn heal(&mut self, amount: i32) -> i32 {
        let before = self.stats.health;
        self.stats.set_health(before.saturating_add(amount.max(0)));
        self.stats.health - before
    }
}

/// Attack/defend contract implemented by every combat participant.
///
/// `attack` computes the attacker's outgoing damage and hands it to
/// `target.take_damage`; each implementor applies its own mitigation there.
pub trait Combatant {
    fn entity(&self) -> &Entity;

    /// Strikes `target` once.
    fn attack(&self, target: &mut dyn Combatant);

    /// Absorbs an incoming hit of `amount` raw damage.
    fn take_damage(&mut self, amount: i32);

    fn name(&self) -> &str {
        self.entity().name()
    }

    fn health(&self) -> i32 {
        self.entity().health()
    }

    fn is_alive(&self) -> bool {
        self.entity().is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn default_stats_match_config() {
        let stats = EntityStats::default();
        assert_eq!(stats.health(), GameConfig::DEFAULT_HEALTH);
        assert_eq!(stats.base_attack_damage, GameConfig::DEFAULT_BASE_ATTACK_DAMAGE);
        assert_eq!(stats.base_defense, GameConfig::DEFAULT_BASE_DEFENSE);
    }

    #[test]
    fn health_is_clamped_on_every_path() {
        assert_eq!(EntityStats::new(-5, 1, 1).health(), 0);
        assert_eq!(EntityStats::new(9_999, 1, 1).health(), GameConfig::MAX_HEALTH);

        let mut entity = Entity::new("Dummy", "Target practice", EntityStats::default());
        entity.set_property(EntityProperty::Health, 1_000);
        assert_eq!(entity.health(), GameConfig::MAX_HEALTH);
        entity.set_property(EntityProperty::Health, -1);
        assert_eq!(entity.health(), 0);
        assert!(!entity.is_alive());
    }

    #[test]
    fn every_property_is_readable() {
        let entity = Entity::new("Dummy", "", EntityStats::new(40, 7, 3));
        let values: Vec<_> = EntityProperty::iter().map(|p| entity.property(p)).collect();
        assert_eq!(values, [40, 7, 3]);
    }

    #[test]
    fn heal_reports_restored_amount() {
        let mut entity = Entity::new("Dummy", "", EntityStats::new(140, 0, 0));
        assert_eq!(entity.heal(30), GameConfig::MAX_HEALTH - 140);
        assert_eq!(entity.health(), GameConfig::MAX_HEALTH);
        assert_eq!(entity.heal(-10), 0);
    }

    #[test]
    fn lose_health_stops_at_zero() {
        let mut entity = Entity::new("Dummy", "", EntityStats::new(10, 0, 0));
        entity.lose_health(4);
        assert_eq!(entity.health(), 6);
        entity.lose_health(-3);
        assert_eq!(entity.health(), 6);
        entity.lose_health(50);
        assert_eq!(entity.health(), 0);
    }
}
