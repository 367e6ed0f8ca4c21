/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameConfig {
    /// Name shown for the player character.
    pub player_name: String,
    /// Flavor text shown on the stats screen.
    pub player_description: String,
}

impl GameConfig {
    // ===== fixed rules shared by every entity =====
    /// Upper bound for health; no entity is ever healed past it.
    pub const MAX_HEALTH: i32 = 150;
    pub const DEFAULT_HEALTH: i32 = 100;
    pub const DEFAULT_BASE_ATTACK_DAMAGE: i32 = 10;
    pub const DEFAULT_BASE_DEFENSE: i32 = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_NAME: &'static str = "Player";
    pub const DEFAULT_PLAYER_DESCRIPTION: &'static str = "A brave adventurer";

    pub fn new() -> Self {
        Self {
            player_name: Self::DEFAULT_PLAYER_NAME.to_owned(),
            player_description: Self::DEFAULT_PLAYER_DESCRIPTION.to_owned(),
        }
    }

    pub fn with_player(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            player_name: name.into(),
            player_description: description.into(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
