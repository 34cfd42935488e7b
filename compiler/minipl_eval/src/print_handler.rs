//! Where program output and diagnostics go.
//!
//! - Stdout: `print` writes to stdout, diagnostics to stderr (the CLI)
//! - Buffer: both are captured in memory (tests and embedding)
//!
//! Uses enum dispatch instead of trait objects; the set of sinks is closed.

use std::io::{self, IsTerminal, Write};

use minipl_diagnostic::{ColorMode, Diagnostic, TerminalEmitter};
use parking_lot::Mutex;
use tracing::warn;

fn write_flushed(out: &mut impl Write, msg: &str) -> io::Result<()> {
    out.write_all(msg.as_bytes())?;
    out.flush()
}

/// Writes program output to stdout and diagnostics to stderr.
#[derive(Default)]
pub struct StdoutPrintHandler {
    color: ColorMode,
}

impl StdoutPrintHandler {
    pub fn new(color: ColorMode) -> Self {
        StdoutPrintHandler { color }
    }

    /// Print without newline, flushing so prompts appear before `read`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        write_flushed(&mut std::io::stdout().lock(), msg)
    }

    /// Report a diagnostic on stderr.
    ///
    /// Stdout is flushed first so output and diagnostics interleave in
    /// program order on a terminal.
    pub fn report(&self, diagnostic: &Diagnostic) {
        if let Err(error) = std::io::stdout().flush() {
            warn!(%error, "cannot flush stdout before a diagnostic");
        }
        let mut emitter = TerminalEmitter::stderr(self.color, std::io::stderr().is_terminal());
        emitter.emit(diagnostic);
        emitter.flush();
    }
}

/// Captures output and diagnostics in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    output: Mutex<String>,
    diagnostics: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler::default()
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.output.lock().push_str(msg);
        Ok(())
    }

    /// Append a diagnostic, uncolored, one per line.
    pub fn report(&self, diagnostic: &Diagnostic) {
        let mut buf = self.diagnostics.lock();
        buf.push_str(&diagnostic.to_string());
        buf.push('\n');
    }

    pub fn get_output(&self) -> String {
        self.output.lock().clone()
    }

    pub fn get_diagnostics(&self) -> String {
        self.diagnostics.lock().clone()
    }
}

pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Print without newline. Fails only if the underlying stream does.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
        }
    }

    pub fn report(&self, diagnostic: &Diagnostic) {
        match self {
            Self::Stdout(h) => h.report(diagnostic),
            Self::Buffer(h) => h.report(diagnostic),
        }
    }

    /// Captured program output; empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout(_) => String::new(),
            Self::Buffer(h) => h.get_output(),
        }
    }

    /// Captured diagnostics; empty for stdout.
    pub fn get_diagnostics(&self) -> String {
        match self {
            Self::Stdout(_) => String::new(),
            Self::Buffer(h) => h.get_diagnostics(),
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = std::sync::Arc<PrintHandlerImpl>;

/// Create a stdout print handler.
pub fn stdout_handler(color: ColorMode) -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler::new(color)))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}
