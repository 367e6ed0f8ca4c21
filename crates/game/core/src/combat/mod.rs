//! Combat resolution.
//!
//! # Core Functions
//!
//! - `mitigate`: incoming damage reduced by defense (never negative)
//! - `apply_damage`: health reduction (clamped to 0)
//! - `resolve_encounter`: one enemy fought to a conclusion
//!
//! Attacks themselves go through [`Combatant`](crate::entity::Combatant);
//! this module only sequences them and records what happened.

pub mod damage;
pub mod encounter;

pub use damage::{apply_damage, mitigate};
pub use encounter::{Blow, Encounter, EncounterOutcome, resolve_encounter};
