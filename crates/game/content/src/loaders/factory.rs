//! Content factory for loading everything from one data directory.

use std::path::{Path, PathBuf};

use game_core::{Dungeon, GameConfig};

use crate::loaders::{ConfigLoader, LoadResult, WorldLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── dungeon.json
/// └── menu.txt
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const WORLD_FILE: &'static str = "dungeon.json";
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const MENU_FILE: &'static str = "menu.txt";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.config_path())
    }

    /// Load the dungeon from `dungeon.json`.
    pub fn load_world(&self) -> LoadResult<Dungeon> {
        WorldLoader::load(&self.world_path())
    }

    pub fn world_path(&self) -> PathBuf {
        self.data_dir.join(Self::WORLD_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(Self::CONFIG_FILE)
    }

    pub fn menu_path(&self) -> PathBuf {
        self.data_dir.join(Self::MENU_FILE)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.world_path(), Path::new("/tmp/data/dungeon.json"));
        assert_eq!(factory.menu_path(), Path::new("/tmp/data/menu.txt"));
    }
}
