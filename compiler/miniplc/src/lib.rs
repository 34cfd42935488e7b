//! MiniPL driver.
//!
//! Wires the stages together for one source text:
//!
//! ```text
//! source -> lex -> parse -> check -> interpret
//! ```
//!
//! Lexical and parse errors are both reported before stopping, so a single
//! run shows every syntax problem. Type checking only runs on a clean parse,
//! and the interpreter only runs on a clean type check. The stage that
//! stopped the run decides the [`ExitStatus`].
//!
//! The `minipl` binary is a thin argument parser over [`commands`].

pub mod commands;
mod pipeline;
mod status;
mod tracing_setup;

pub use pipeline::{check_source, run_source, Frontend, RunOutcome};
pub use status::ExitStatus;
pub use tracing_setup::init_tracing;
