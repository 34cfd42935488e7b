//! Where `read` gets its lines.
//!
//! Same shape as the print handlers: a stdin reader for the CLI and a
//! scripted queue for tests and embedding.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use parking_lot::Mutex;

/// Reads lines from stdin.
#[derive(Default)]
pub struct StdinInputHandler;

impl StdinInputHandler {
    /// Read one line, including its terminator. `None` at end of input.
    ///
    /// Stdout is flushed first so a prompt printed without a newline shows
    /// up before the program blocks.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        io::stdout().flush()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    }
}

/// Serves a fixed list of lines, then reports end of input.
#[derive(Default)]
pub struct ScriptedInputHandler {
    lines: Mutex<VecDeque<String>>,
}

impl ScriptedInputHandler {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInputHandler {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn read_line(&self) -> io::Result<Option<String>> {
        Ok(self.lines.lock().pop_front())
    }
}

pub enum InputHandlerImpl {
    Stdin(StdinInputHandler),
    Scripted(ScriptedInputHandler),
}

impl InputHandlerImpl {
    pub fn read_line(&self) -> io::Result<Option<String>> {
        match self {
            Self::Stdin(h) => h.read_line(),
            Self::Scripted(h) => h.read_line(),
        }
    }
}

pub type SharedInputHandler = std::sync::Arc<InputHandlerImpl>;

pub fn stdin_handler() -> SharedInputHandler {
    std::sync::Arc::new(InputHandlerImpl::Stdin(StdinInputHandler))
}

/// Input handler that yields `lines` in order.
pub fn scripted_handler<I, S>(lines: I) -> SharedInputHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    std::sync::Arc::new(InputHandlerImpl::Scripted(ScriptedInputHandler::new(
        lines,
    )))
}
