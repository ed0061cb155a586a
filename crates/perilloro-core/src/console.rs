//! Prefixed, line-oriented console output
//!
//! Every line the timer prints starts with [`PREFIX`]. Countdown lines are
//! redrawn in place with a carriage return and indented to line up with
//! the prefixed lines above them.

use std::io::{self, Stdout, Write};

/// Prefix for every message line
pub const PREFIX: &str = "[perilloro] ";

/// Writer for the timer's standard output
pub struct Console<W: Write> {
    out: W,
}

impl Console<Stdout> {
    /// Console on the process's standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a prefixed message followed by a newline
    pub fn message(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{}{}", PREFIX, msg)?;
        self.out.flush()
    }

    /// Write a prefixed message and leave the cursor on the same line
    pub fn message_inline(&mut self, msg: &str) -> io::Result<()> {
        write!(self.out, "{}{}", PREFIX, msg)?;
        self.out.flush()
    }

    /// Write a prefixed `warning:` line
    pub fn warn(&mut self, msg: &str) -> io::Result<()> {
        self.message(&format!("warning: {}", msg))
    }

    /// Redraw the current line, indented past the prefix
    pub fn status(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "\r{}{}", " ".repeat(PREFIX.len()), text)?;
        self.out.flush()
    }

    /// Write unprefixed text as-is
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    pub fn newline(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
