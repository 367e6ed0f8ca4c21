//! Owning sequence containers used throughout the dungeon game.
//!
//! Every container owns its elements outright and releases each of them
//! exactly once when dropped.
//!
//! - [`Vector`]: growable array, doubles when full and halves at quarter occupancy
//! - [`Stack`]: LIFO over boxed singly-linked nodes
//! - [`Queue`]: FIFO over index-linked nodes in a slot arena
//! - [`List`]: doubly-linked list over a slot arena, navigable by [`NodeId`]
//!
//! Underflow and out-of-range access are reported as [`CollectionError`]
//! rather than panics, so callers can decide whether the failure is fatal.

mod arena;
pub mod error;
pub mod list;
pub mod queue;
pub mod stack;
pub mod vector;

pub use error::{CollectionError, Result};
pub use list::{List, NodeId};
pub use queue::Queue;
pub use stack::Stack;
pub use vector::Vector;
