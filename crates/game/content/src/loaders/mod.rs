//! Content loaders for reading game data from files.
//!
//! Every loader reads its whole file through [`read_file`] first, so the
//! handle is closed before parsing starts.

pub mod config;
pub mod factory;
pub mod world;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use world::{EnemySpec, ItemSpec, PropertiesSpec, RoomSpec, WorldLoader, WorldSpec};

use std::path::{Path, PathBuf};

use game_core::{ErrorSeverity, GameError};

/// Common result type for loaders.
pub type LoadResult<T> = Result<T, LoadError>;

/// Reasons content could not be loaded. None of them can be recovered from
/// at runtime: the game refuses to start.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse world description: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to parse config TOML: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unknown item type '{0}'")]
    UnknownItemType(char),

    #[error("item type is empty")]
    EmptyItemType,

    #[error("the world has no rooms")]
    NoRooms,
}

impl GameError for LoadError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "IO",
            Self::Parse(_) => "PARSE",
            Self::Config(_) => "CONFIG",
            Self::UnknownItemType(_) => "UNKNOWN_ITEM_TYPE",
            Self::EmptyItemType => "EMPTY_ITEM_TYPE",
            Self::NoRooms => "NO_ROOMS",
        }
    }
}

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
