//! Interface builder.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use game_core::{Dungeon, GameConfig, GameSession, Player};

use crate::input::InputReader;
use crate::interface::Interface;
use crate::printer::Printer;

/// Builder for constructing an [`Interface`].
///
/// A dungeon, an input source and an output sink are required. The player
/// defaults to one built from [`GameConfig::default`].
pub struct InterfaceBuilder<R, W> {
    dungeon: Option<Dungeon>,
    player: Option<Player>,
    input: Option<R>,
    output: Option<W>,
    menu_file: Option<PathBuf>,
    text_delay: Duration,
}

impl<R, W> Default for InterfaceBuilder<R, W> {
    fn default() -> Self {
        Self {
            dungeon: None,
            player: None,
            input: None,
            output: None,
            menu_file: None,
            text_delay: Duration::ZERO,
        }
    }
}

impl<R: BufRead, W: Write> InterfaceBuilder<R, W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dungeon to play (required).
    pub fn dungeon(mut self, dungeon: Dungeon) -> Self {
        self.dungeon = Some(dungeon);
        self
    }

    pub fn player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }

    /// Builds the player from `config`.
    pub fn config(self, config: &GameConfig) -> Self {
        self.player(Player::from_config(config))
    }

    /// Set where commands are read from (required).
    pub fn input(mut self, input: R) -> Self {
        self.input = Some(input);
        self
    }

    /// Set where text is written to (required).
    pub fn output(mut self, output: W) -> Self {
        self.output = Some(output);
        self
    }

    /// Text file shown by the menu command. Without one, a generated
    /// command list is shown.
    pub fn menu_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.menu_file = Some(path.into());
        self
    }

    pub fn text_delay(mut self, delay: Duration) -> Self {
        self.text_delay = delay;
        self
    }

    /// Build the Interface.
    ///
    /// # Errors
    ///
    /// Returns an error if the dungeon, input or output is not set.
    pub fn build(self) -> Result<Interface<R, W>> {
        let dungeon = self
            .dungeon
            .context("Dungeon is required. Use .dungeon() to set it.")?;
        let input = self
            .input
            .context("Input is required. Use .input() to set it.")?;
        let output = self
            .output
            .context("Output is required. Use .output() to set it.")?;
        let player = self
            .player
            .unwrap_or_else(|| Player::from_config(&GameConfig::default()));

        Ok(Interface::new(
            GameSession::new(dungeon, player),
            InputReader::new(input),
            Printer::with_delay(output, self.text_delay),
            self.menu_file,
        ))
    }
}
