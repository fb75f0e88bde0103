//! Console interaction primitives used by the quiz runner.
//!
//! Generic over the reader and writer so the whole flow can be driven from
//! an in-memory buffer in tests.

use crate::errors::{AppError, AppResult};
use crate::utils::colors::{BLUE, GREEN, RED, RESET, YELLOW};
use crate::utils::formatting::bold;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    width: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            width: 70,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line. End of input counts as the participant walking away.
    fn read_line(&mut self) -> AppResult<String> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            return Err(AppError::Cancelled);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Print `prompt` and read the raw answer (may be blank).
    pub fn ask_text(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{} ", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Integer in `lower..=upper`. Re-asks on junk, `None` on a blank line.
    pub fn ask_integer(&mut self, prompt: &str, lower: u32, upper: u32) -> AppResult<Option<u32>> {
        loop {
            let raw = self.ask_text(&format!("{} ({}-{})", prompt, lower, upper))?;
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(None);
            }
            match raw.parse::<u32>() {
                Ok(n) if (lower..=upper).contains(&n) => return Ok(Some(n)),
                _ => self.warn(&format!(
                    "Please enter a whole number between {} and {}.",
                    lower, upper
                ))?,
            }
        }
    }

    /// Numbered option list followed by a free answer line.
    pub fn ask_choice(&mut self, prompt: &str, choices: &[String]) -> AppResult<String> {
        writeln!(self.output, "{}", prompt)?;
        for (i, c) in choices.iter().enumerate() {
            writeln!(self.output, "  {}{}){} {}", BLUE, i + 1, RESET, c)?;
        }
        self.ask_text(">")
    }

    /// Yes/no question; anything but y/yes is a no.
    pub fn confirm(&mut self, question: &str) -> AppResult<bool> {
        let answer = self.ask_text(&format!("{} [y/N]:", question))?;
        let answer = answer.trim().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    pub fn title(&mut self, title: &str) -> AppResult<()> {
        writeln!(self.output, "\n{}", bold(title))?;
        Ok(())
    }

    pub fn message(&mut self, msg: &str) -> AppResult<()> {
        for line in textwrap::wrap(msg, self.width) {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    pub fn good(&mut self, msg: &str) -> AppResult<()> {
        writeln!(self.output, "{}{}{}", GREEN, msg, RESET)?;
        Ok(())
    }

    pub fn bad(&mut self, msg: &str) -> AppResult<()> {
        writeln!(self.output, "{}{}{}", RED, msg, RESET)?;
        Ok(())
    }

    pub fn warn(&mut self, msg: &str) -> AppResult<()> {
        writeln!(self.output, "{}{}{}", YELLOW, msg, RESET)?;
        Ok(())
    }

    pub fn separator(&mut self) -> AppResult<()> {
        writeln!(self.output, "{}", "-".repeat(50))?;
        Ok(())
    }

    /// Longer text block (the end-of-quiz summary) inside a simple frame.
    pub fn show_text(&mut self, title: &str, text: &str) -> AppResult<()> {
        let rule = "=".repeat(self.width.min(60));
        writeln!(self.output, "\n{}\n{}\n{}", rule, bold(title), rule)?;
        for line in text.lines() {
            if line.is_empty() {
                writeln!(self.output)?;
                continue;
            }
            for wrapped in textwrap::wrap(line, self.width) {
                writeln!(self.output, "{}", wrapped)?;
            }
        }
        writeln!(self.output, "{}", rule)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn integer_reasks_until_in_bounds() {
        let mut c = console("abc\n99\n4\n");
        assert_eq!(c.ask_integer("How many?", 1, 15).unwrap(), Some(4));
        let out = String::from_utf8(c.into_output()).unwrap();
        assert_eq!(out.matches("whole number").count(), 2);
    }

    #[test]
    fn blank_integer_is_none() {
        let mut c = console("\n");
        assert_eq!(c.ask_integer("How many?", 1, 15).unwrap(), None);
    }

    #[test]
    fn end_of_input_cancels() {
        let mut c = console("");
        assert!(matches!(c.ask_text("Name:"), Err(AppError::Cancelled)));
    }

    #[test]
    fn confirm_defaults_to_no() {
        let mut c = console("\nYES\n");
        assert!(!c.confirm("Quit?").unwrap());
        assert!(c.confirm("Quit?").unwrap());
    }
}
