//! Terminal front end for the dungeon crawler.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ ClientConfig   (environment, .env, command line)
//!   ├─→ logging        (tracing to a log file)
//!   ├─→ game-content   (world and player config from disk)
//!   └─→ Interface      (turn loop over a GameSession)
//!         ├─→ InputReader (line-based commands)
//!         └─→ Printer     (text output)
//! ```
//!
//! The interface is generic over its input and output so whole sessions can
//! be scripted in tests.

mod builder;

pub mod config;
pub mod input;
pub mod interface;
pub mod logging;
pub mod printer;

pub use builder::InterfaceBuilder;
pub use config::ClientConfig;
pub use input::{InputError, InputReader};
pub use interface::Interface;
pub use printer::Printer;
