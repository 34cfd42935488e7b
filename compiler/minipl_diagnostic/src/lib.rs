//! Diagnostic reporting for MiniPL.
//!
//! Every pipeline stage reports problems as plain data. This crate turns
//! those into [`Diagnostic`]s with the user-facing text formats, collects
//! them in a [`DiagnosticQueue`], and writes them out through a
//! [`TerminalEmitter`].
//!
//! # Formats
//!
//! ```text
//! [line 3] Error at ';': Expect expression.      (lexical / syntax)
//! Undeclared variable 'x'.                       (type / runtime)
//! (line 7).
//! Assertion failed: x(=5) < 3                    (failed assert)
//! (line 9).
//! ```
//!
//! # Error Guarantees
//!
//! [`ErrorGuaranteed`] is proof that at least one error was recorded. It can
//! only be obtained from a non-zero error count, so a stage that claims
//! failure must have reported something.

mod diagnostic;
pub mod emitter;
mod guarantee;
mod queue;

pub use diagnostic::{Diagnostic, DiagnosticKind, Location};
pub use emitter::{ColorMode, TerminalEmitter};
pub use guarantee::ErrorGuaranteed;
pub use queue::DiagnosticQueue;
