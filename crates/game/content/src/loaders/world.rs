//! World description loader.
//!
//! # Format
//!
//! ```json
//! {
//!   "rooms": [
//!     {
//!       "name": "Entrance",
//!       "description": "A cold stone hall",
//!       "item": {
//!         "name": "Sword", "description": "Sharp", "type": "W",
//!         "properties": { "attack_bonus": 5 }
//!       },
//!       "enemies": [
//!         {
//!           "name": "Goblin", "description": "Small and angry",
//!           "health": 20, "base_attack_damage": 5, "base_defense": 0,
//!           "aggression": 1, "loot": null
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Item `type` is one of `W` (weapon), `A` (armor), `C` (consumable),
//! `K` (key) or `R` (rock). A missing or null item is a rock.

use std::path::Path;

use game_core::{Dungeon, Enemy, GameConfig, Item, ItemCategory, ItemStats, Room};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadError, LoadResult, read_file};

/// Top-level world description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSpec {
    pub rooms: Vec<RoomSpec>,
}

/// Rooms are linked in the order they are listed. Unknown keys such as `id`
/// are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub item: Option<ItemSpec>,
    #[serde(default)]
    pub enemies: Vec<EnemySpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub properties: PropertiesSpec,
}

/// Numeric item properties; any that are missing are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertiesSpec {
    pub attack_bonus: i32,
    pub defense_bonus: i32,
    pub heal_amount: i32,
    pub key_type: i32,
}

/// Enemy stats that are missing fall back to the entity defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemySpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_health")]
    pub health: i32,
    #[serde(default = "default_attack")]
    pub base_attack_damage: i32,
    #[serde(default = "default_defense")]
    pub base_defense: i32,
    #[serde(default)]
    pub aggression: i32,
    #[serde(default)]
    pub loot: Option<ItemSpec>,
}

fn default_health() -> i32 {
    GameConfig::DEFAULT_HEALTH
}

fn default_attack() -> i32 {
    GameConfig::DEFAULT_BASE_ATTACK_DAMAGE
}

fn default_defense() -> i32 {
    GameConfig::DEFAULT_BASE_DEFENSE
}

impl ItemSpec {
    /// Resolves the single-character type code.
    pub fn category(&self) -> LoadResult<ItemCategory> {
        let code = self.kind.chars().next().ok_or(LoadError::EmptyItemType)?;
        ItemCategory::from_code(code).ok_or(LoadError::UnknownItemType(code))
    }

    pub fn build(&self) -> LoadResult<Item> {
        let category = self.category()?;
        if category == ItemCategory::Rock {
            return Ok(Item::rock());
        }

        let stats = ItemStats {
            attack_bonus: self.properties.attack_bonus,
            defense_bonus: self.properties.defense_bonus,
            health_points: self.properties.heal_amount,
            key_type: self.properties.key_type,
        };
        Ok(Item::new(&self.name, &self.description, category, stats))
    }
}

impl EnemySpec {
    pub fn build(&self) -> LoadResult<Enemy> {
        let loot = build_optional_item(self.loot.as_ref())?;
        Ok(Enemy::builder(&self.name)
            .description(&self.description)
            .health(self.health)
            .base_attack_damage(self.base_attack_damage)
            .base_defense(self.base_defense)
            .aggression(self.aggression)
            .loot(loot)
            .build())
    }
}

impl RoomSpec {
    pub fn build(&self) -> LoadResult<Room> {
        let mut room = Room::new(&self.name, &self.description)
            .with_item(build_optional_item(self.item.as_ref())?);
        for enemy in &self.enemies {
            room.add_enemy(enemy.build()?);
        }
        Ok(room)
    }
}

impl WorldSpec {
    /// Builds the linked dungeon. A world without rooms is rejected.
    pub fn build(&self) -> LoadResult<Dungeon> {
        if self.rooms.is_empty() {
            return Err(LoadError::NoRooms);
        }
        let rooms = self
            .rooms
            .iter()
            .map(RoomSpec::build)
            .collect::<LoadResult<Vec<_>>>()?;
        Ok(Dungeon::new(rooms))
    }
}

fn build_optional_item(spec: Option<&ItemSpec>) -> LoadResult<Item> {
    spec.map_or_else(|| Ok(Item::rock()), ItemSpec::build)
}

/// Loader for world descriptions in JSON.
pub struct WorldLoader;

impl WorldLoader {
    /// Load a dungeon from a JSON file.
    ///
    /// The file is read in full and closed before parsing.
    pub fn load(path: &Path) -> LoadResult<Dungeon> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Load a dungeon from JSON text.
    pub fn parse(content: &str) -> LoadResult<Dungeon> {
        let spec: WorldSpec = serde_json::from_str(content)?;
        spec.build()
    }
}
