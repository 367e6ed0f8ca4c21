//! The dungeon: an ordered chain of rooms and the cursor that walks it.

pub mod dungeon;
pub mod room;

pub use dungeon::{Direction, Dungeon, DungeonError, DungeonState, Traversal};
pub use room::Room;
