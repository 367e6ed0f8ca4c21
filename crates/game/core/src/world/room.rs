use dungeon_collections::{CollectionError, Queue};

use crate::entity::Enemy;
use crate::item::Item;

/// A single location: one item slot and a line of enemies guarding it.
///
/// While any enemy is queued the room blocks movement in both directions.
#[derive(Clone, Debug)]
pub struct Room {
    name: String,
    description: String,
    item: Item,
    enemies: Queue<Enemy>,
}

impl Room {
    /// Creates an empty room holding only a rock.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            item: Item::rock(),
            enemies: Queue::new(),
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.add_item(item);
        self
    }

    pub fn with_enemy(mut self, enemy: Enemy) -> Self {
        self.add_enemy(enemy);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Item currently lying in the room.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Replaces the room's item.
    pub fn add_item(&mut self, item: Item) {
        self.item = item;
    }

    /// Searches the room, taking whatever lies there and leaving a rock behind.
    pub fn explore(&mut self) -> Item {
        std::mem::take(&mut self.item)
    }

    /// Puts `enemy` at the back of the line.
    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.enqueue(enemy);
    }

    /// Takes the enemy at the front of the line.
    pub fn next_enemy(&mut self) -> Result<Enemy, CollectionError> {
        self.enemies.dequeue()
    }

    #[inline]
    pub fn has_enemies(&self) -> bool {
        !self.enemies.is_empty()
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> + '_ {
        self.enemies.iter()
    }
}
