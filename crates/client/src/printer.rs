//! Plain-text output with an optional typewriter effect.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const RULE: &str = "====================================";
const DIVIDER: &str = "------------------------------------";

pub struct Printer<W> {
    out: W,
    delay: Duration,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self::with_delay(out, Duration::ZERO)
    }

    /// Pauses `delay` after every character written.
    pub fn with_delay(out: W, delay: Duration) -> Self {
        Self { out, delay }
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.write("\n")
    }

    /// Writes `text` without a newline and flushes, for prompts.
    pub fn text(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.out.flush()
    }

    /// A title framed by two rules.
    pub fn banner(&mut self, title: &str) -> io::Result<()> {
        self.line("")?;
        self.line(RULE)?;
        self.line(&format!("       {title}"))?;
        self.line(RULE)
    }

    pub fn divider(&mut self) -> io::Result<()> {
        self.line("")?;
        self.line(DIVIDER)
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        if self.delay.is_zero() {
            return self.out.write_all(text.as_bytes());
        }

        let mut buf = [0u8; 4];
        for ch in text.chars() {
            self.out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            self.out.flush()?;
            thread::sleep(self.delay);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(printer: Printer<Vec<u8>>) -> String {
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn lines_and_prompts() {
        let mut printer = Printer::new(Vec::new());
        printer.line("Hello").unwrap();
        printer.text("> ").unwrap();
        assert_eq!(printed(printer), "Hello\n> ");
    }

    #[test]
    fn banner_frames_the_title() {
        let mut printer = Printer::new(Vec::new());
        printer.banner("STATS").unwrap();
        let out = printed(printer);
        assert_eq!(out.matches(RULE).count(), 2);
        assert!(out.contains("       STATS\n"));
    }

    #[test]
    fn delayed_output_is_identical() {
        let mut printer = Printer::with_delay(Vec::new(), Duration::from_micros(1));
        printer.line("héllo").unwrap();
        assert_eq!(printed(printer), "héllo\n");
    }
}
