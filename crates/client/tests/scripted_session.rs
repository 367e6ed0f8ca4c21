//! Whole sessions driven by scripted input.

use std::fs;
use std::io::Cursor;

use dungeon_client::Interface;
use game_content::WorldLoader;
use game_core::{
    Combatant, Dungeon, Enemy, EntityStats, GameOutcome, GameSession, Item, Player, Room,
};
use tempfile::TempDir;

fn play(dungeon: Dungeon, script: &str) -> (GameSession, String) {
    let mut interface = Interface::builder()
        .dungeon(dungeon)
        .input(Cursor::new(script.to_owned()))
        .output(Vec::new())
        .build()
        .expect("interface");
    interface.run().expect("session runs to completion");

    let (session, output) = interface.into_parts();
    (session, String::from_utf8(output).expect("utf-8 output"))
}

fn goblin() -> Enemy {
    Enemy::builder("Goblin")
        .description("Small and angry")
        .health(20)
        .base_attack_damage(5)
        .loot(Item::consumable("Potion", "Red", 20))
        .build()
}

#[test]
fn dead_guard_is_cleared_without_a_prompt() {
    let dir = TempDir::new().unwrap();
    let world = dir.path().join("crypt.json");
    fs::write(
        &world,
        r#"{ "rooms": [ { "name": "Crypt", "description": "Bones everywhere",
              "item": null,
              "enemies": [ { "name": "Skeleton", "description": "Already dust",
                             "health": 0, "base_attack_damage": 50,
                             "base_defense": 0, "aggression": 0, "loot": null } ] } ] }"#,
    )
    .unwrap();
    let dungeon = WorldLoader::load(&world).unwrap();

    // begin, acknowledge the guarded room, walk out
    let (session, output) = play(dungeon, "\n\nn\n");

    assert!(!output.contains("Type 'a' to attack"));
    assert!(output.contains("Skeleton is already defeated"));
    assert!(output.contains("All Enemies have been defeated!"));
    assert_eq!(session.outcome(), Some(GameOutcome::Escaped));
    assert_eq!(session.player().inventory().len(), 2);
}

#[test]
fn fight_then_escape() {
    let dungeon = Dungeon::new([
        Room::new("Guard Post", "A goblin blocks the door").with_enemy(goblin()),
        Room::new("Gate", "Fresh air"),
    ]);

    // begin, acknowledge, try to flee, attack, inventory, move, escape
    let (session, output) = play(dungeon, "\n\nn\na\nI\nn\nn\n");

    assert!(output.contains("You are in combat!"));
    assert!(output.contains("You have encountered Goblin"));
    assert!(output.contains("You have defeated Goblin"));
    assert!(output.contains("You have gained Potion"));
    assert!(output.contains("[2] Potion"));
    assert!(output.contains("Gate"));
    assert!(output.contains("YOU ESCAPED!"));

    assert_eq!(session.outcome(), Some(GameOutcome::Escaped));
    assert_eq!(session.player().health(), 100);
    assert!(!session.current_room().unwrap().has_enemies());
}

#[test]
fn guarded_room_blocks_until_cleared() {
    let dungeon = Dungeon::new([
        Room::new("Start", ""),
        Room::new("Hall", "").with_enemy(goblin()),
    ]);

    // begin, move into the hall, acknowledge, attack, go back, forward, escape
    let (session, output) = play(dungeon, "\nn\n\na\np\nn\nn\n");

    assert!(output.contains("There are enemies in this room!"));
    assert!(output.contains("You can now proceed"));
    assert_eq!(session.outcome(), Some(GameOutcome::Escaped));
}

#[test]
fn stalemated_guard_is_fought_again_after_each_command() {
    // bare fists deal nothing and clothes absorb the goblin's 5
    let player = Player::with_stats("Hero", "", EntityStats::new(100, 0, 5));
    let room = Room::new("Barracks", "")
        .with_item(Item::weapon("Sword", "Sharp", 5))
        .with_enemy(goblin());

    // begin, acknowledge, attack, explore, attack, equip the sword, attack, escape
    let script = "\n\na\nE\na\nW\n2\na\nn\n";
    let mut interface = Interface::builder()
        .dungeon(Dungeon::new([room]))
        .player(player)
        .input(Cursor::new(script.to_owned()))
        .output(Vec::new())
        .build()
        .expect("interface");
    interface.run().expect("session runs to completion");

    let (session, output) = interface.into_parts();
    let output = String::from_utf8(output).expect("utf-8 output");

    assert_eq!(output.matches("Neither you nor Goblin can do any harm").count(), 2);
    assert_eq!(output.matches("Type 'a' to attack when ready").count(), 3);
    assert!(output.contains("You found: Sword"));
    assert!(output.contains("You have defeated Goblin"));
    assert_eq!(session.outcome(), Some(GameOutcome::Escaped));
}

#[test]
fn moving_into_a_guarded_room_shows_it_before_the_fight() {
    let dungeon = Dungeon::new([
        Room::new("Start", ""),
        Room::new("Hall", "Dusty banners").with_enemy(goblin()),
    ]);

    let (_, output) = play(dungeon, "\nn\n\na\nn\n");

    let warning = output.find("There are enemies in this room!").expect("warning shown");
    let hall = output.find("Dusty banners").expect("hall shown");
    let prompt = output.find("Type 'a' to attack when ready").expect("attack prompt");
    assert!(hall < warning);
    assert!(warning < prompt);
}

#[test]
fn equipment_and_consumables() {
    let mut start = Room::new("Armory", "Racks of old gear");
    start.add_item(Item::weapon("Sword", "Sharp", 5));
    let dungeon = Dungeon::new([start]);

    let script = [
        "",  // begin
        "E", // find the sword
        "W", "2", // equip it
        "S", // stats
        "A", "2", // a sword is not armor
        "C", // no consumables
        "E", // only a rock is left
        "n", // escape
    ]
    .join("\n")
        + "\n";
    let (session, output) = play(dungeon, &script);

    assert!(output.contains("You found: Sword"));
    assert!(output.contains("Equipped: Sword"));
    assert!(output.contains("Attack Damage: 15"));
    assert!(output.contains("Can't do that"));
    assert!(output.contains("No consumables available in your inventory."));
    assert!(output.contains("You found a rock."));
    assert_eq!(session.player().equipped_weapon().unwrap().name(), "Sword");
    assert_eq!(session.player().equipped_armor_index(), 1);
}

#[test]
fn defeat_ends_the_game() {
    let brute = Enemy::builder("Ogre")
        .health(150)
        .base_attack_damage(200)
        .build();
    let dungeon = Dungeon::new([
        Room::new("Den", "").with_enemy(brute).with_enemy(goblin()),
        Room::new("Exit", ""),
    ]);

    let (session, output) = play(dungeon, "\n\na\n");

    assert!(output.contains("You have been defeated by Ogre"));
    assert!(output.contains("GAME OVER"));
    assert_eq!(session.outcome(), Some(GameOutcome::Defeated));
    assert_eq!(session.current_room().unwrap().enemy_count(), 1);
}

#[test]
fn closed_input_ends_quietly() {
    let dungeon = Dungeon::new([Room::new("Start", ""), Room::new("End", "")]);

    let (session, output) = play(dungeon, "\nz\np\n");

    assert!(output.contains("I don't know what to do with that"));
    assert!(output.contains("You cannot go back there"));
    assert_eq!(session.outcome(), None);
    assert_eq!(session.dungeon().position(), Ok(0));
}

#[test]
fn menu_file_is_printed_verbatim() {
    let dir = TempDir::new().unwrap();
    let menu = dir.path().join("menu.txt");
    fs::write(&menu, "WELCOME, ADVENTURER\nn - onwards\n").unwrap();

    let mut interface = Interface::builder()
        .dungeon(Dungeon::new([Room::new("Start", "")]))
        .input(Cursor::new("\nH\nn\n".to_owned()))
        .output(Vec::new())
        .menu_file(&menu)
        .build()
        .unwrap();
    interface.run().unwrap();

    let output = String::from_utf8(interface.into_parts().1).unwrap();
    assert_eq!(output.matches("WELCOME, ADVENTURER").count(), 2);
}

#[test]
fn builder_requires_a_dungeon() {
    let result = Interface::<Cursor<Vec<u8>>, Vec<u8>>::builder()
        .input(Cursor::new(Vec::new()))
        .output(Vec::new())
        .build();
    assert!(result.is_err());
}
