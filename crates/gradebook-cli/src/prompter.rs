//! Line-oriented terminal input.

use std::io::{self, BufRead, Write};

/// Reads answers from `input` after writing prompts to `output`.
///
/// Generic over the streams so the shell can be driven from tests.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Show `prompt` and read one trimmed line. `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Yes/no question. Accepts `y`, `yes` and `s`; anything else is no.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        Ok(self.ask(prompt)?.map(|answer| {
            matches!(answer.to_lowercase().as_str(), "y" | "yes" | "s")
        }))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_and_detects_eof() {
        let mut p = Prompter::new(Cursor::new("  Math  \n"), Vec::new());
        assert_eq!(p.ask("Name: ").unwrap().as_deref(), Some("Math"));
        assert_eq!(p.ask("Name: ").unwrap(), None);
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "Name: Name: ");
    }

    #[test]
    fn test_confirm() {
        let mut p = Prompter::new(Cursor::new("y\nS\nYES\nn\n\n"), Vec::new());
        assert_eq!(p.confirm("? ").unwrap(), Some(true));
        assert_eq!(p.confirm("? ").unwrap(), Some(true));
        assert_eq!(p.confirm("? ").unwrap(), Some(true));
        assert_eq!(p.confirm("? ").unwrap(), Some(false));
        assert_eq!(p.confirm("? ").unwrap(), Some(false));
        assert_eq!(p.confirm("? ").unwrap(), None);
    }
}
