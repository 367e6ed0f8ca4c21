//! Single-key player commands.

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::world::Direction;

/// Every action the player can request.
///
/// Keys are case-sensitive: `a` attacks, `A` equips armor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Command {
    MoveForward,
    MoveBackward,
    ShowMenu,
    EquipWeapon,
    EquipArmor,
    UseConsumable,
    ShowStats,
    ShowInventory,
    ExploreRoom,
    /// Only accepted while fighting.
    Attack,
}

impl Command {
    pub const fn key(self) -> char {
        match self {
            Self::MoveForward => 'n',
            Self::MoveBackward => 'p',
            Self::ShowMenu => 'H',
            Self::EquipWeapon => 'W',
            Self::EquipArmor => 'A',
            Self::UseConsumable => 'C',
            Self::ShowStats => 'S',
            Self::ShowInventory => 'I',
            Self::ExploreRoom => 'E',
            Self::Attack => 'a',
        }
    }

    pub fn parse(key: char) -> Option<Self> {
        Self::iter().find(|command| command.key() == key)
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::MoveForward => "Move to the next room",
            Self::MoveBackward => "Move to the previous room",
            Self::ShowMenu => "Show this menu",
            Self::EquipWeapon => "Equip a weapon from your inventory",
            Self::EquipArmor => "Equip armor from your inventory",
            Self::UseConsumable => "Use a consumable from your inventory",
            Self::ShowStats => "Show your stats",
            Self::ShowInventory => "Show your inventory",
            Self::ExploreRoom => "Explore the current room",
            Self::Attack => "Attack (during combat)",
        }
    }

    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::MoveForward => Some(Direction::Forward),
            Self::MoveBackward => Some(Direction::Backward),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique_and_parse_back() {
        let keys: HashSet<char> = Command::iter().map(Command::key).collect();
        assert_eq!(keys.len(), Command::iter().count());

        for command in Command::iter() {
            assert_eq!(Command::parse(command.key()), Some(command));
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert_eq!(Command::parse('a'), Some(Command::Attack));
        assert_eq!(Command::parse('A'), Some(Command::EquipArmor));
        assert_eq!(Command::parse('N'), None);
        assert_eq!(Command::parse('x'), None);
    }

    #[test]
    fn only_moves_have_directions() {
        let moves: Vec<_> = Command::iter().filter_map(Command::direction).collect();
        assert_eq!(moves, [Direction::Forward, Direction::Backward]);
    }
}
