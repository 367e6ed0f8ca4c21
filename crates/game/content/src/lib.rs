//! Data-driven content loaders.
//!
//! This crate turns data files into game-core values:
//! - World descriptions (JSON): rooms, their items and their enemies
//! - Game configuration (TOML): player identity
//!
//! Content is read once at startup; the resulting [`game_core::Dungeon`] and
//! [`game_core::GameConfig`] carry no reference back to the files.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EnemySpec, ItemSpec, LoadError, LoadResult, PropertiesSpec,
    RoomSpec, WorldLoader, WorldSpec,
};
