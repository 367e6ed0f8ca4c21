//! Game rules and data types for the dungeon crawler.
//!
//! `game-core` defines the items, combatants, rooms and the session state
//! machine, and exposes I/O-free APIs that the content loader and the
//! terminal client build on. All state mutation during play flows through
//! [`session::GameSession`]; supporting crates depend on the types
//! re-exported here.
pub mod combat;
pub mod command;
pub mod config;
pub mod entity;
pub mod error;
pub mod item;
pub mod session;
pub mod world;

pub use combat::{Blow, Encounter, EncounterOutcome, apply_damage, mitigate, resolve_encounter};
pub use command::Command;
pub use config::GameConfig;
pub use entity::{
    Combatant, Consumed, Enemy, EnemyBuilder, Entity, EntityProperty, EntityStats,
    InventoryError, Player,
};
pub use error::{ErrorSeverity, GameError};
pub use item::{Item, ItemCategory, ItemProperty, ItemStats};
pub use session::{GameOutcome, GameSession, MoveError, SessionError, SessionState};
pub use world::{Direction, Dungeon, DungeonError, DungeonState, Room, Traversal};
