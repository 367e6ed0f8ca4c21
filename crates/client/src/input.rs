//! Line-oriented input.
//!
//! Every prompt reads one line. Commands are the first non-blank character
//! of the line; indices are the whole trimmed line.

use std::io::{self, BufRead};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The input source reached end of file.
    #[error("input closed")]
    Closed,

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

pub struct InputReader<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    /// Reads the next line, trimmed.
    pub fn read_line(&mut self) -> Result<&str, InputError> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(self.line.trim())
    }

    /// Reads lines until one contains a character and returns that character.
    pub fn read_key(&mut self) -> Result<char, InputError> {
        loop {
            if let Some(key) = self.read_line()?.chars().next() {
                return Ok(key);
            }
        }
    }

    /// Reads one line as an inventory index. `None` if it is not a number.
    pub fn read_index(&mut self) -> Result<Option<usize>, InputError> {
        Ok(self.read_line()?.parse().ok())
    }

    /// Blocks until the player presses Enter. End of input counts as Enter.
    pub fn wait_for_enter(&mut self) -> Result<(), InputError> {
        match self.read_line() {
            Ok(_) | Err(InputError::Closed) => Ok(()),
            Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn keys_skip_blank_lines() {
        let mut input = InputReader::new(Cursor::new("\n   \n  nope\nW\n"));
        assert_eq!(input.read_key().unwrap(), 'n');
        assert_eq!(input.read_key().unwrap(), 'W');
        assert!(matches!(input.read_key(), Err(InputError::Closed)));
    }

    #[test]
    fn indices_parse_the_whole_line() {
        let mut input = InputReader::new(Cursor::new(" 3 \nx\n-1\n"));
        assert_eq!(input.read_index().unwrap(), Some(3));
        assert_eq!(input.read_index().unwrap(), None);
        assert_eq!(input.read_index().unwrap(), None);
    }

    #[test]
    fn enter_tolerates_end_of_input() {
        let mut input = InputReader::new(Cursor::new(""));
        assert!(input.wait_for_enter().is_ok());
    }
}
