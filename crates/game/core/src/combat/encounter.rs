//! Turn-by-turn resolution of a single enemy encounter.

use crate::entity::{Combatant, Enemy, Player};
use crate::item::Item;

/// One landed (or absorbed) attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blow {
    /// The player struck the enemy.
    PlayerHit { damage: i32, enemy_health: i32 },
    /// The enemy struck back.
    EnemyHit { damage: i32, player_health: i32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncounterOutcome {
    /// The enemy fell; a copy of the loot added to the inventory.
    Victory { loot: Item },
    /// The player fell. Nothing else in the room is fought.
    Defeat,
    /// The enemy arrived with no health left. No exchange, no loot.
    AlreadyDefeated,
    /// Neither side can hurt the other. The enemy is handed back untouched
    /// by the loop so the caller can return it to the room.
    Stalemate(Enemy),
}

/// Full record of an encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encounter {
    pub enemy_name: String,
    pub blows: Vec<Blow>,
    pub outcome: EncounterOutcome,
}

/// Fights `enemy` until one side reaches zero health.
///
/// The player always strikes first. After each player hit that leaves the
/// enemy standing, the enemy strikes back. A round in which neither side
/// loses health ends the encounter as a stalemate.
pub fn resolve_encounter(player: &mut Player, mut enemy: Enemy) -> Encounter {
    let enemy_name = enemy.name().to_owned();
    let mut blows = Vec::new();

    if !enemy.is_alive() {
        return Encounter {
            enemy_name,
            blows,
            outcome: EncounterOutcome::AlreadyDefeated,
        };
    }

    let outcome = loop {
        let before = enemy.health();
        player.attack(&mut enemy);
        let dealt = before - enemy.health();
        blows.push(Blow::PlayerHit {
            damage: dealt,
            enemy_health: enemy.health(),
        });

        if !enemy.is_alive() {
            let loot = enemy.into_loot();
            player.add_item(loot.clone());
            break EncounterOutcome::Victory { loot };
        }

        let before = player.health();
        enemy.attack(player);
        let taken = before - player.health();
        blows.push(Blow::EnemyHit {
            damage: taken,
            player_health: player.health(),
        });

        if !player.is_alive() {
            break EncounterOutcome::Defeat;
        }
        if dealt == 0 && taken == 0 {
            break EncounterOutcome::Stalemate(enemy);
        }
    };

    Encounter {
        enemy_name,
        blows,
        outcome,
    }
}
