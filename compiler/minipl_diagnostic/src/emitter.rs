//! Terminal Emitter
//!
//! Writes diagnostics in their plain text formats, optionally highlighting
//! the headline (`Error`, `Assertion failed`) with ANSI colors.

use std::fmt;
use std::io::{self, Write};

use crate::{Diagnostic, DiagnosticKind};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create an emitter over `writer`. `is_tty` is used for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Render one diagnostic followed by a newline.
    pub fn emit(&mut self, diagnostic: &Diagnostic) {
        let text = self.render(diagnostic);
        let _ = writeln!(self.writer, "{text}");
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut text = String::new();
        if self.colors {
            let color = match diagnostic.kind {
                DiagnosticKind::AssertionFailed => colors::WARNING,
                _ => colors::ERROR,
            };
            let _ = diagnostic.write_with(&mut text, &|out: &mut dyn fmt::Write, head: &str| {
                write!(out, "{color}{head}{}", colors::RESET)
            });
        } else {
            let _ = diagnostic.write_with(&mut text, &|out: &mut dyn fmt::Write, head: &str| {
                out.write_str(head)
            });
        }
        text
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Emitter for stderr. `is_tty` is whether stderr is a terminal.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}
