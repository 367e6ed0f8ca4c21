//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`GameConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::LoadError;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse(r#"player_name = "Ada""#).unwrap();
        assert_eq!(config.player_name, "Ada");
        assert_eq!(
            config.player_description,
            GameConfig::DEFAULT_PLAYER_DESCRIPTION
        );
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn malformed_config_is_rejected() {
        let error = ConfigLoader::parse("player_name = ").unwrap_err();
        assert!(matches!(error, LoadError::Config(_)));
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = ConfigLoader::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(error.to_string().contains("/definitely/not/here.toml"));
    }
}
