//! Room chain with a movable cursor.

use dungeon_collections::{List, NodeId};
use strum::{Display, EnumIter};

use super::room::Room;
use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Maps the movement keys: `n` for forward, `p` for backward.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'n' => Some(Self::Forward),
            'p' => Some(Self::Backward),
            _ => None,
        }
    }
}

/// What a successful move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// The cursor now points at a neighbouring room.
    Moved,
    /// The player walked out past the last room.
    Completed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DungeonState {
    #[default]
    Active,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DungeonError {
    #[error("the dungeon has no rooms")]
    NullRoom,

    #[error("there's no room behind the first one")]
    NoRoomBehind,
}

impl GameError for DungeonError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NullRoom => ErrorSeverity::Internal,
            Self::NoRoomBehind => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NullRoom => "NULL_ROOM",
            Self::NoRoomBehind => "NO_ROOM_BEHIND",
        }
    }
}

/// Ordered rooms and the player's position among them.
///
/// # Invariants
///
/// - `cursor` is `Some` whenever `rooms` is non-empty
/// - completing the dungeon never moves the cursor off the last room
#[derive(Clone, Debug, Default)]
pub struct Dungeon {
    rooms: List<Room>,
    cursor: Option<NodeId>,
    state: DungeonState,
}

impl Dungeon {
    /// Links `rooms` in order and places the cursor on the first one.
    pub fn new(rooms: impl IntoIterator<Item = Room>) -> Self {
        let rooms: List<Room> = rooms.into_iter().collect();
        let cursor = rooms.head();
        Self {
            rooms,
            cursor,
            state: DungeonState::Active,
        }
    }

    pub fn state(&self) -> DungeonState {
        self.state
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.iter()
    }

    /// Zero-based index of the current room.
    pub fn position(&self) -> Result<usize, DungeonError> {
        let cursor = self.cursor()?;
        self.rooms.position(cursor).ok_or(DungeonError::NullRoom)
    }

    pub fn current_room(&self) -> Result<&Room, DungeonError> {
        let cursor = self.cursor()?;
        self.rooms.node(cursor).ok_or(DungeonError::NullRoom)
    }

    pub fn current_room_mut(&mut self) -> Result<&mut Room, DungeonError> {
        let cursor = self.cursor()?;
        self.rooms.node_mut(cursor).ok_or(DungeonError::NullRoom)
    }

    /// True when nothing lies behind the current room (also for an empty dungeon).
    pub fn is_first_room(&self) -> bool {
        self.cursor.is_none_or(|cursor| self.rooms.prev(cursor).is_none())
    }

    /// True when nothing lies ahead of the current room (also for an empty dungeon).
    pub fn is_last_room(&self) -> bool {
        self.cursor.is_none_or(|cursor| self.rooms.next(cursor).is_none())
    }

    /// Moves the cursor one room in `direction`.
    ///
    /// Going forward from the last room completes the dungeon instead of
    /// moving. Guards (enemies) are the session's concern, not the map's.
    pub fn move_player(&mut self, direction: Direction) -> Result<Traversal, DungeonError> {
        let cursor = self.cursor()?;
        let neighbour = match direction {
            Direction::Forward => self.rooms.next(cursor),
            Direction::Backward => self.rooms.prev(cursor),
        };

        match (neighbour, direction) {
            (Some(room), _) => {
                self.cursor = Some(room);
                Ok(Traversal::Moved)
            }
            (None, Direction::Forward) => {
                self.state = DungeonState::Completed;
                Ok(Traversal::Completed)
            }
            (None, Direction::Backward) => Err(DungeonError::NoRoomBehind),
        }
    }

    fn cursor(&self) -> Result<NodeId, DungeonError> {
        self.cursor.ok_or(DungeonError::NullRoom)
    }
}
