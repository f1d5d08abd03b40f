//! Line-oriented console with optional ANSI coloring.

use std::io::{self, BufRead, Write};

use crossterm::style::{Color, Stylize, style};

/// Semantic color of a console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Prompt,
    Highlight,
    Summary,
    Error,
}

impl Tone {
    const fn color(self) -> Color {
        match self {
            Tone::Prompt => Color::Green,
            Tone::Highlight => Color::Yellow,
            Tone::Summary => Color::Blue,
            Tone::Error => Color::Red,
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Write one line made of styled segments separated by spaces.
    pub fn say(&mut self, parts: &[(Tone, &str)]) -> io::Result<()> {
        self.write_parts(parts)?;
        writeln!(self.output)?;
        self.output.flush()
    }

    /// Print `prompt` without a trailing newline and read the reply.
    ///
    /// Returns `None` at end of input.
    pub fn ask(&mut self, prompt: &[(Tone, &str)]) -> io::Result<Option<String>> {
        self.write_parts(prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line, trimmed and lower-cased. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_parts(&mut self, parts: &[(Tone, &str)]) -> io::Result<()> {
        for (idx, (tone, text)) in parts.iter().enumerate() {
            if idx > 0 {
                write!(self.output, " ")?;
            }
            if self.color {
                write!(self.output, "{}", style(*text).with(tone.color()))?;
            } else {
                write!(self.output, "{text}")?;
            }
        }
        Ok(())
    }
}
