//! Client configuration loaded from the process environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use game_content::ContentFactory;

/// Paths and presentation settings for one run of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// JSON world description to load.
    pub world_file: PathBuf,
    /// Help text printed by the menu command.
    pub menu_file: PathBuf,
    /// Optional TOML file with player settings.
    pub config_file: Option<PathBuf>,
    /// Pause after each printed character. Zero prints instantly.
    pub text_delay: Duration,
    /// Directory the log file is written to.
    pub log_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_data_dir(Self::DEFAULT_DATA_DIR)
    }
}

impl ClientConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";
    pub const DEFAULT_LOG_DIR: &'static str = "logs";

    /// Defaults with the world and menu files taken from `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let content = ContentFactory::new(data_dir);
        Self {
            world_file: content.world_path(),
            menu_file: content.menu_path(),
            config_file: None,
            text_delay: Duration::ZERO,
            log_dir: PathBuf::from(Self::DEFAULT_LOG_DIR),
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_DATA_DIR` - Directory holding dungeon.json and menu.txt (default: data)
    /// - `DUNGEON_WORLD_FILE` - World description (default: <data dir>/dungeon.json)
    /// - `DUNGEON_MENU_FILE` - Menu text (default: <data dir>/menu.txt)
    /// - `DUNGEON_CONFIG_FILE` - Player settings TOML (default: none)
    /// - `DUNGEON_TEXT_DELAY_MS` - Per-character print delay (default: 0)
    /// - `DUNGEON_LOG_DIR` - Log directory (default: logs)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = match read_path(&var, "DUNGEON_DATA_DIR") {
            Some(data_dir) => Self::with_data_dir(data_dir),
            None => Self::default(),
        };

        if let Some(path) = read_path(&var, "DUNGEON_WORLD_FILE") {
            config.world_file = path;
        }
        if let Some(path) = read_path(&var, "DUNGEON_MENU_FILE") {
            config.menu_file = path;
        }
        config.config_file = read_path(&var, "DUNGEON_CONFIG_FILE");
        if let Some(millis) = read_var::<u64>(&var, "DUNGEON_TEXT_DELAY_MS") {
            config.text_delay = Duration::from_millis(millis);
        }
        if let Some(path) = read_path(&var, "DUNGEON_LOG_DIR") {
            config.log_dir = path;
        }

        config
    }

    /// Overrides the world file, e.g. from a command-line argument.
    pub fn with_world_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.world_file = path.into();
        self
    }
}

fn read_var<T>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    var(key)?.trim().parse().ok()
}

fn read_path(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<PathBuf> {
    var(key)
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(config(&[]), ClientConfig::default());
        assert_eq!(
            ClientConfig::default().world_file,
            PathBuf::from("data/dungeon.json")
        );
    }

    #[test]
    fn variables_override_defaults() {
        let config = config(&[
            ("DUNGEON_WORLD_FILE", "worlds/tower.json"),
            ("DUNGEON_CONFIG_FILE", "me.toml"),
            ("DUNGEON_TEXT_DELAY_MS", "15"),
            ("DUNGEON_LOG_DIR", "/tmp/dungeon-logs"),
        ]);
        assert_eq!(config.world_file, PathBuf::from("worlds/tower.json"));
        assert_eq!(config.config_file, Some(PathBuf::from("me.toml")));
        assert_eq!(config.text_delay, Duration::from_millis(15));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/dungeon-logs"));
        assert_eq!(config.menu_file, PathBuf::from("data/menu.txt"));
    }

    #[test]
    fn data_dir_moves_default_files() {
        let config = config(&[
            ("DUNGEON_DATA_DIR", "campaigns/tower"),
            ("DUNGEON_MENU_FILE", "help.txt"),
        ]);
        assert_eq!(config.world_file, PathBuf::from("campaigns/tower/dungeon.json"));
        assert_eq!(config.menu_file, PathBuf::from("help.txt"));
    }

    #[test]
    fn unparsable_values_are_ignored() {
        let config = config(&[("DUNGEON_TEXT_DELAY_MS", "soon"), ("DUNGEON_MENU_FILE", "  ")]);
        assert_eq!(config.text_delay, Duration::ZERO);
        assert_eq!(config.menu_file, ClientConfig::default().menu_file);
    }

    #[test]
    fn command_line_world_wins() {
        let config = config(&[("DUNGEON_WORLD_FILE", "a.json")]).with_world_file("b.json");
        assert_eq!(config.world_file, PathBuf::from("b.json"));
    }
}
