//! Game session state machine.
//!
//! A [`GameSession`] owns the dungeon and the player and enforces the rules
//! that span both: guarded rooms block movement, combat results feed the
//! inventory, and the session ends on escape or defeat. It performs no I/O;
//! the interface layer turns its results into text.

use dungeon_collections::CollectionError;

use crate::combat::{self, Encounter, EncounterOutcome};
use crate::config::GameConfig;
use crate::entity::{Consumed, Enemy, InventoryError, Player};
use crate::error::{ErrorSeverity, GameError};
use crate::item::Item;
use crate::world::{Direction, Dungeon, DungeonError, Room, Traversal};

/// How the session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum GameOutcome {
    /// The player walked out past the last room.
    Escaped,
    /// The player's health reached zero.
    Defeated,
}

/// Flags the interface loop reads between commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_fighting: bool,
    pub game_over: bool,
    pub last_command_succeeded: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("there are enemies guarding the way")]
    EnemiesPresent,

    #[error("there's no room behind the first one")]
    NoRoomBehind,

    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Dungeon(DungeonError),
}

impl From<DungeonError> for MoveError {
    fn from(error: DungeonError) -> Self {
        match error {
            DungeonError::NoRoomBehind => Self::NoRoomBehind,
            other => Self::Dungeon(other),
        }
    }
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EnemiesPresent | Self::NoRoomBehind | Self::GameOver => {
                ErrorSeverity::Recoverable
            }
            Self::Dungeon(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EnemiesPresent => "ENEMIES_PRESENT",
            Self::NoRoomBehind => "NO_ROOM_BEHIND",
            Self::GameOver => "GAME_OVER",
            Self::Dungeon(error) => error.error_code(),
        }
    }
}

/// Broken invariants surfaced while running combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Dungeon(#[from] DungeonError),

    #[error("enemy queue: {0}")]
    Collection(#[from] CollectionError),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Dungeon(error) => error.severity(),
            Self::Collection(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Dungeon(error) => error.error_code(),
            Self::Collection(error) => error.error_code(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GameSession {
    dungeon: Dungeon,
    player: Player,
    state: SessionState,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    pub fn new(dungeon: Dungeon, player: Player) -> Self {
        Self {
            dungeon,
            player,
            state: SessionState::default(),
            outcome: None,
        }
    }

    /// Starts a session with a fresh player built from `config`.
    pub fn with_config(dungeon: Dungeon, config: &GameConfig) -> Self {
        Self::new(dungeon, Player::from_config(config))
    }

    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn is_fighting(&self) -> bool {
        self.state.is_fighting
    }

    pub fn current_room(&self) -> Result<&Room, DungeonError> {
        self.dungeon.current_room()
    }

    /// Records whether the last player command did what was asked.
    pub fn record_command(&mut self, succeeded: bool) {
        self.state.last_command_succeeded = succeeded;
    }

    /// Walks to the neighbouring room.
    ///
    /// A room with enemies in it blocks both directions. Walking forward out
    /// of the last room ends the session as an escape.
    pub fn move_player(&mut self, direction: Direction) -> Result<Traversal, MoveError> {
        if self.state.game_over {
            return Err(MoveError::GameOver);
        }
        if self.dungeon.current_room()?.has_enemies() {
            return Err(MoveError::EnemiesPresent);
        }

        let traversal = self.dungeon.move_player(direction)?;
        if traversal == Traversal::Completed {
            self.finish(GameOutcome::Escaped);
        }
        Ok(traversal)
    }

    /// Enters the fighting state if the current room is guarded.
    ///
    /// Returns whether there is anything to fight.
    pub fn begin_combat(&mut self) -> Result<bool, DungeonError> {
        let guarded = !self.state.game_over && self.dungeon.current_room()?.has_enemies();
        self.state.is_fighting = guarded;
        Ok(guarded)
    }

    /// Takes the next enemy off the current room's queue.
    pub fn next_enemy(&mut self) -> Result<Enemy, SessionError> {
        Ok(self.dungeon.current_room_mut()?.next_enemy()?)
    }

    /// Fights `enemy` to a conclusion and applies the result to the session.
    ///
    /// Defeat ends the session. A stalemated enemy goes back to the end of
    /// the room's queue and combat ends so the player can change equipment.
    pub fn resolve_encounter(&mut self, enemy: Enemy) -> Result<Encounter, DungeonError> {
        let encounter = combat::resolve_encounter(&mut self.player, enemy);

        match &encounter.outcome {
            EncounterOutcome::Defeat => self.finish(GameOutcome::Defeated),
            EncounterOutcome::Stalemate(enemy) => {
                self.dungeon.current_room_mut()?.add_enemy(enemy.clone());
                self.end_combat();
            }
            EncounterOutcome::Victory { .. } | EncounterOutcome::AlreadyDefeated => {}
        }
        Ok(encounter)
    }

    pub fn end_combat(&mut self) {
        self.state.is_fighting = false;
    }

    /// Searches the current room.
    ///
    /// Anything other than a rock is moved into the inventory; a copy is
    /// returned for display. Returns `None` when only a rock is left.
    pub fn explore_room(&mut self) -> Result<Option<Item>, DungeonError> {
        let item = self.dungeon.current_room_mut()?.explore();
        if item.is_rock() {
            return Ok(None);
        }
        self.player.add_item(item.clone());
        Ok(Some(item))
    }

    pub fn equip_weapon(&mut self, index: usize) -> Result<&Item, InventoryError> {
        self.player.equip_weapon(index)
    }

    pub fn equip_armor(&mut self, index: usize) -> Result<&Item, InventoryError> {
        self.player.equip_armor(index)
    }

    pub fn use_consumable(&mut self, index: usize) -> Result<Consumed, InventoryError> {
        self.player.use_consumable(index)
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.state.game_over = true;
        self.state.is_fighting = false;
        self.outcome = Some(outcome);
    }
}
