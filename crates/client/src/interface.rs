//! Turn loop: reads commands, drives the session, prints what happened.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use game_core::{
    Blow, Combatant, Command, Direction, EncounterOutcome, GameError, GameOutcome, GameSession,
    InventoryError, Item, ItemCategory, MoveError, Traversal,
};
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

use crate::builder::InterfaceBuilder;
use crate::input::{InputError, InputReader};
use crate::printer::Printer;

const UNKNOWN_COMMAND: &str = "I don't know what to do with that";
const ATTACK_PROMPT: &str = "Type 'a' to attack when ready";

/// Labels and action for the two equipment menus.
struct EquipMenu {
    category: ItemCategory,
    equip: fn(&mut GameSession, usize) -> Result<&Item, InventoryError>,
    title: &'static str,
    noun: &'static str,
    none_available: &'static str,
    done: &'static str,
}

const WEAPON_MENU: EquipMenu = EquipMenu {
    category: ItemCategory::Weapon,
    equip: GameSession::equip_weapon,
    title: "WEAPON EQUIPMENT MENU",
    noun: "weapon",
    none_available: "  No weapons available in your inventory.",
    done: "WEAPON EQUIPPED!",
};

const ARMOR_MENU: EquipMenu = EquipMenu {
    category: ItemCategory::Armor,
    equip: GameSession::equip_armor,
    title: "ARMOR EQUIPMENT MENU",
    noun: "armor",
    none_available: "  No armor available in your inventory.",
    done: "ARMOR EQUIPPED!",
};

/// Text front end for one [`GameSession`].
///
/// Expected failures (blocked paths, bad indices) are printed and play
/// continues. Broken invariants and I/O failures are returned as errors.
pub struct Interface<R, W> {
    session: GameSession,
    input: InputReader<R>,
    printer: Printer<W>,
    menu_file: Option<PathBuf>,
    last_input: Option<char>,
}

impl<R: BufRead, W: Write> Interface<R, W> {
    pub fn builder() -> InterfaceBuilder<R, W> {
        InterfaceBuilder::new()
    }

    pub(crate) fn new(
        session: GameSession,
        input: InputReader<R>,
        printer: Printer<W>,
        menu_file: Option<PathBuf>,
    ) -> Self {
        Self {
            session,
            input,
            printer,
            menu_file,
            last_input: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn output(&self) -> &W {
        self.printer.get_ref()
    }

    pub fn into_parts(self) -> (GameSession, W) {
        (self.session, self.printer.into_inner())
    }

    /// Plays until the player escapes, dies, or input runs out.
    pub fn run(&mut self) -> Result<()> {
        info!(
            rooms = self.session.dungeon().room_count(),
            player = self.session.player().name(),
            "Session started"
        );

        match self.play() {
            Ok(()) => {}
            Err(error)
                if matches!(error.downcast_ref::<InputError>(), Some(InputError::Closed)) =>
            {
                info!("Input closed, ending session");
                return Ok(());
            }
            Err(error) => return Err(error),
        }

        self.show_final_banner()?;
        info!(outcome = ?self.session.outcome(), "Session finished");
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.show_menu()?;
        self.printer.line("Press Enter to begin...")?;
        self.input.wait_for_enter()?;

        while !self.session.is_game_over() {
            self.display_current_room()?;
            self.fight_enemies()?;
            while !self.player_has_moved() {
                self.prompt_user()?;
                // A stalemated guard is still here; fight again unless the player just left.
                if !self.player_has_moved() && self.room_is_guarded()? {
                    self.fight_enemies()?;
                }
            }
        }
        Ok(())
    }

    /// True once the last command moved the player or the game ended.
    pub fn player_has_moved(&self) -> bool {
        let moved = matches!(self.last_input, Some('n' | 'p'))
            && self.session.state().last_command_succeeded;
        moved || self.session.is_game_over()
    }

    pub fn display_current_room(&mut self) -> Result<()> {
        self.last_input = None;
        self.session.record_command(true);

        let room = self.session.current_room()?;
        let (name, description) = (room.name().to_owned(), room.description().to_owned());
        let guarded = room.has_enemies();
        debug!(room = %name, guarded, "Entered room");

        self.printer.line("")?;
        self.printer.line(&name)?;
        self.printer.line("")?;
        self.printer.line(&description)?;
        self.printer.line("")?;

        if guarded {
            self.printer.line("There are enemies in this room!")?;
            self.printer.line("You must defeat them before moving on.")?;
            self.printer.line("Press Enter to continue...")?;
            self.input.wait_for_enter()?;
        }
        Ok(())
    }

    /// Fights every enemy in the current room, in order.
    ///
    /// Each living enemy waits for an `a` before the encounter starts. An
    /// enemy that is already dead is cleared without a prompt.
    pub fn fight_enemies(&mut self) -> Result<()> {
        if !self.session.begin_combat()? {
            return Ok(());
        }

        while self.room_is_guarded()? {
            let enemy = self.session.next_enemy()?;
            if enemy.is_alive() {
                self.printer.line(ATTACK_PROMPT)?;
                self.wait_for_attack()?;
            }

            self.printer
                .line(&format!("You have encountered {}", enemy.name()))?;
            let encounter = self.session.resolve_encounter(enemy)?;
            let enemy_name = encounter.enemy_name.as_str();

            for blow in &encounter.blows {
                debug!(enemy = enemy_name, ?blow, "Combat exchange");
                match *blow {
                    Blow::PlayerHit { damage, enemy_health } => self.printer.line(&format!(
                        "You hit {enemy_name} for {damage} damage ({enemy_health} HP left)"
                    ))?,
                    Blow::EnemyHit { damage: 0, .. } => {
                        self.printer.line("Your armor absorbs the blow")?
                    }
                    Blow::EnemyHit { player_health, .. } => self.printer.line(&format!(
                        "You have taken damage! ({player_health} HP left)"
                    ))?,
                }
            }

            match &encounter.outcome {
                EncounterOutcome::Victory { loot } => {
                    info!(enemy = enemy_name, loot = loot.name(), "Enemy defeated");
                    self.printer
                        .line(&format!("You have defeated {enemy_name}"))?;
                    self.printer
                        .line(&format!("You have gained {}", loot.name()))?;
                }
                EncounterOutcome::AlreadyDefeated => {
                    debug!(enemy = enemy_name, "Enemy was already dead");
                    self.printer
                        .line(&format!("{enemy_name} is already defeated"))?;
                }
                EncounterOutcome::Defeat => {
                    info!(enemy = enemy_name, "Player defeated");
                    self.printer
                        .line(&format!("You have been defeated by {enemy_name}"))?;
                    return Ok(());
                }
                EncounterOutcome::Stalemate(_) => {
                    info!(enemy = enemy_name, "Stalemate");
                    self.printer.line(&format!(
                        "Neither you nor {enemy_name} can do any harm. Try different equipment."
                    ))?;
                    return Ok(());
                }
            }
        }

        self.session.end_combat();
        self.printer.line("All Enemies have been defeated!")?;
        self.printer.line("You can now proceed")?;
        Ok(())
    }

    /// Reads and handles one command.
    pub fn prompt_user(&mut self) -> Result<()> {
        if self.session.is_game_over() {
            return Ok(());
        }

        self.last_input = None;
        self.printer.text("> ")?;
        let key = self.input.read_key()?;
        self.last_input = Some(key);
        self.handle_input(key)?;
        Ok(())
    }

    /// Runs the command bound to `key` and reports whether it succeeded.
    pub fn handle_input(&mut self, key: char) -> Result<bool> {
        debug!(%key, "Command received");

        let succeeded = match Command::parse(key) {
            Some(command) => self.dispatch(command)?,
            None => {
                self.printer.line(UNKNOWN_COMMAND)?;
                false
            }
        };

        self.session.record_command(succeeded);
        Ok(succeeded)
    }

    fn dispatch(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::MoveForward => self.move_player(Direction::Forward),
            Command::MoveBackward => self.move_player(Direction::Backward),
            Command::ShowMenu => self.show_menu(),
            Command::EquipWeapon => self.change_equipment(&WEAPON_MENU),
            Command::EquipArmor => self.change_equipment(&ARMOR_MENU),
            Command::UseConsumable => self.use_consumable(),
            Command::ShowStats => self.show_stats(),
            Command::ShowInventory => self.show_inventory(),
            Command::ExploreRoom => self.explore_room(),
            Command::Attack => {
                self.printer.line("There is nothing to attack here")?;
                Ok(false)
            }
        }
    }

    fn move_player(&mut self, direction: Direction) -> Result<bool> {
        match self.session.move_player(direction) {
            Ok(Traversal::Moved) => {
                debug!(%direction, "Player moved");
                Ok(true)
            }
            Ok(Traversal::Completed) => {
                info!("Player left the last room");
                Ok(true)
            }
            Err(error) if error.severity().is_internal() => Err(error.into()),
            Err(MoveError::EnemiesPresent) => {
                self.printer.line("There are enemies guarding the way!")?;
                Ok(false)
            }
            Err(MoveError::NoRoomBehind) => {
                self.printer.line("You cannot go back there")?;
                Ok(false)
            }
            Err(error) => {
                debug!(code = error.error_code(), "Move refused");
                Ok(false)
            }
        }
    }

    /// Prints the menu file, or a generated command list when it can't be read.
    pub fn show_menu(&mut self) -> Result<bool> {
        let text = match &self.menu_file {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(text) => Some(text),
                Err(error) => {
                    warn!(
                        path = %path.display(),
                        %error,
                        "Menu file unavailable, using built-in help"
                    );
                    None
                }
            },
            None => None,
        };

        match text {
            Some(text) => {
                for line in text.lines() {
                    self.printer.line(line)?;
                }
            }
            None => {
                self.printer.banner("COMMANDS")?;
                self.printer.line("")?;
                for command in Command::iter() {
                    self.printer
                        .line(&format!("  {}  {}", command.key(), command.description()))?;
                }
            }
        }
        Ok(true)
    }

    fn change_equipment(&mut self, menu: &EquipMenu) -> Result<bool> {
        self.printer.banner(menu.title)?;
        self.printer.line("")?;

        if !self.list_items(menu.category)? {
            self.printer.line("")?;
            self.printer.line(menu.none_available)?;
            return Ok(false);
        }

        self.printer.divider()?;
        let prompt = format!("  Enter the index of the {} you want to equip: ", menu.noun);
        let Some(index) = self.prompt_index(&prompt)? else {
            return Ok(false);
        };

        let item = match (menu.equip)(&mut self.session, index) {
            Ok(item) => item.clone(),
            Err(error) => {
                self.report(&error)?;
                return Ok(false);
            }
        };

        debug!(item = item.name(), index, "Equipped");
        self.printer.banner(menu.done)?;
        self.printer.line("")?;
        self.printer.line(&format!("  Equipped: {}", item.name()))?;
        self.printer.line(&format!("  {}", item.description()))?;
        Ok(true)
    }

    fn use_consumable(&mut self) -> Result<bool> {
        self.printer.banner("CONSUMABLES MENU")?;
        self.printer.line("")?;

        if !self.list_items(ItemCategory::Consumable)? {
            self.printer.line("")?;
            self.printer
                .line("  No consumables available in your inventory.")?;
            return Ok(false);
        }

        self.printer.divider()?;
        let Some(index) =
            self.prompt_index("  Enter the index of the consumable you want to use: ")?
        else {
            return Ok(false);
        };

        let consumed = match self.session.use_consumable(index) {
            Ok(consumed) => consumed,
            Err(error) => {
                self.report(&error)?;
                return Ok(false);
            }
        };

        debug!(item = %consumed.name, healed = consumed.healed, "Consumed");
        self.printer.banner("CONSUMABLE USED!")?;
        self.printer.line("")?;
        self.printer.line(&format!("  Used: {}", consumed.name))?;
        self.printer.line(&format!("  {}", consumed.description))?;
        self.printer
            .line(&format!("  Restored {} HP", consumed.healed))?;
        Ok(true)
    }

    fn show_stats(&mut self) -> Result<bool> {
        let player = self.session.player();
        let mut lines = vec![
            format!("  Name: {}", player.name()),
            format!("  Description: {}", player.entity().description()),
            String::new(),
            format!("  Health: {}", player.health()),
            format!("  Attack Damage: {}", player.attack_rating()),
            format!("  Defense: {}", player.defense_rating()),
        ];
        if let Some(weapon) = player.equipped_weapon() {
            lines.push(String::new());
            lines.push(format!("  Equipped Weapon: {}", weapon.name()));
            lines.push(format!("  {}", weapon.description()));
        }
        if let Some(armor) = player.equipped_armor() {
            lines.push(String::new());
            lines.push(format!("  Equipped Armor: {}", armor.name()));
            lines.push(format!("  {}", armor.description()));
        }

        self.printer.banner("PLAYER STATS")?;
        self.printer.line("")?;
        for line in &lines {
            self.printer.line(line)?;
        }
        Ok(true)
    }

    fn show_inventory(&mut self) -> Result<bool> {
        let player = self.session.player();
        let equipped = [player.equipped_weapon_index(), player.equipped_armor_index()];
        let lines: Vec<String> = player
            .inventory()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let marker = if equipped.contains(&index) { " (equipped)" } else { "" };
                format!("  [{index}] {}{marker}", item.name())
            })
            .collect();

        self.printer.banner("PLAYER INVENTORY")?;
        self.printer.line("")?;
        for line in &lines {
            self.printer.line(line)?;
        }
        Ok(true)
    }

    fn explore_room(&mut self) -> Result<bool> {
        let found = self.session.explore_room()?;

        self.printer.banner("   ROOM EXPLORATION")?;
        self.printer.line("")?;
        self.printer.line("  You look around the room carefully...")?;
        self.printer.line("")?;

        let Some(item) = found else {
            debug!("Explored an empty room");
            self.printer.line("  You found a rock.")?;
            self.printer
                .line("  Amazing. Truly a once-in-a-lifetime discovery.")?;
            self.printer
                .line("  Maybe if you collect enough, you can start a museum.")?;
            self.printer.line("")?;
            self.printer.line("  You decide to leave it where it is.")?;
            return Ok(false);
        };

        info!(item = item.name(), "Item found");
        self.printer.line(&format!("  You found: {}", item.name()))?;
        self.printer.line(&format!("  {}", item.description()))?;
        self.printer.line("")?;
        self.printer
            .line("  The item has been added to your inventory.")?;
        Ok(true)
    }

    /// Prints inventory entries of `category`; returns whether there were any.
    fn list_items(&mut self, category: ItemCategory) -> Result<bool> {
        let lines: Vec<String> = self
            .session
            .player()
            .inventory()
            .iter()
            .enumerate()
            .filter(|(_, item)| item.category() == category)
            .map(|(index, item)| match category {
                ItemCategory::Consumable => format!(
                    "  [{index}] {} (+{} HP)",
                    item.name(),
                    item.stats().health_points
                ),
                _ => format!("  [{index}] {}", item.name()),
            })
            .collect();

        for line in &lines {
            self.printer.line(line)?;
        }
        Ok(!lines.is_empty())
    }

    fn prompt_index(&mut self, prompt: &str) -> Result<Option<usize>> {
        self.printer.text(prompt)?;
        let index = self.input.read_index()?;
        if index.is_none() {
            self.printer.line("  That is not a valid index.")?;
        }
        Ok(index)
    }

    fn report(&mut self, error: &InventoryError) -> Result<()> {
        debug!(code = error.error_code(), %error, "Inventory command refused");
        self.printer.line(&format!("  Can't do that: {error}."))?;
        Ok(())
    }

    fn wait_for_attack(&mut self) -> Result<()> {
        loop {
            self.printer.text("> ")?;
            let key = self.input.read_key()?;
            if key == Command::Attack.key() {
                self.session.record_command(true);
                return Ok(());
            }
            self.session.record_command(false);
            self.printer
                .line("You are in combat! Only 'a' works right now.")?;
        }
    }

    fn room_is_guarded(&self) -> Result<bool> {
        Ok(!self.session.is_game_over() && self.session.current_room()?.has_enemies())
    }

    fn show_final_banner(&mut self) -> Result<()> {
        match self.session.outcome() {
            Some(GameOutcome::Escaped) => {
                self.printer.banner("YOU ESCAPED!")?;
                self.printer.line("")?;
                self.printer
                    .line("  Daylight at last. You made it out of the dungeon.")?;
            }
            Some(GameOutcome::Defeated) => {
                self.printer.banner("GAME OVER")?;
                self.printer.line("")?;
                self.printer.line("  Your adventure ends here.")?;
            }
            None => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Dungeon, Room};
    use std::io::Cursor;

    fn interface(input: &str, rooms: Vec<Room>) -> Interface<Cursor<String>, Vec<u8>> {
        Interface::builder()
            .dungeon(Dungeon::new(rooms))
            .input(Cursor::new(input.to_owned()))
            .output(Vec::new())
            .build()
            .unwrap()
    }

    fn output<R: BufRead>(interface: &Interface<R, Vec<u8>>) -> String {
        String::from_utf8_lossy(interface.output()).into_owned()
    }

    #[test]
    fn unknown_key_changes_nothing() {
        let mut ui = interface("", vec![Room::new("Hall", "")]);
        assert!(!ui.handle_input('z').unwrap());
        assert!(output(&ui).contains(UNKNOWN_COMMAND));
        assert!(!ui.session().state().last_command_succeeded);
        assert_eq!(ui.session().dungeon().position(), Ok(0));
    }

    #[test]
    fn attack_outside_combat_fails() {
        let mut ui = interface("", vec![Room::new("Hall", "")]);
        assert!(!ui.handle_input('a').unwrap());
    }

    #[test]
    fn menu_falls_back_to_command_list() {
        let mut ui = interface("", vec![Room::new("Hall", "")]);
        assert!(ui.handle_input('H').unwrap());
        let text = output(&ui);
        for command in Command::iter() {
            assert!(text.contains(command.description()));
        }
    }

    #[test]
    fn empty_equipment_menus_fail() {
        let mut ui = interface("", vec![Room::new("Hall", "")]);
        assert!(!ui.handle_input('C').unwrap());
        assert!(output(&ui).contains("No consumables available in your inventory."));
    }

    #[test]
    fn non_numeric_index_is_rejected() {
        let mut ui = interface("sword\n", vec![Room::new("Hall", "")]);
        assert!(!ui.handle_input('W').unwrap());
        assert!(output(&ui).contains("That is not a valid index."));
        assert_eq!(ui.session().player().equipped_weapon_index(), 0);
    }

    #[test]
    fn moving_away_from_the_start() {
        let mut ui = interface("", vec![Room::new("A", ""), Room::new("B", "")]);
        assert!(!ui.handle_input('p').unwrap());
        assert!(output(&ui).contains("You cannot go back there"));
        assert!(ui.handle_input('n').unwrap());
        assert_eq!(ui.session().current_room().unwrap().name(), "B");
    }

    #[test]
    fn explore_reports_rock_as_failure() {
        let room = Room::new("Hall", "").with_item(Item::armor("Shield", "Round", 3));
        let mut ui = interface("", vec![room]);
        assert!(ui.handle_input('E').unwrap());
        assert!(!ui.handle_input('E').unwrap());
        let text = output(&ui);
        assert!(text.contains("You found: Shield"));
        assert!(text.contains("You found a rock."));
    }

    #[test]
    fn has_moved_after_successful_move_key() {
        let mut ui = interface("n\n", vec![Room::new("A", ""), Room::new("B", "")]);
        assert!(!ui.player_has_moved());
        ui.prompt_user().unwrap();
        assert!(ui.player_has_moved());
    }
}
