//! Tree-walking interpreter for MiniPL.
//!
//! The [`Interpreter`] executes a type-checked statement list against a flat
//! variable store. Program output and diagnostics go through a
//! [`SharedPrintHandler`]; `read` pulls lines from a [`SharedInputHandler`].
//! Both come in a real-terminal flavor and a buffered one for tests and
//! embedding.
//!
//! A [`RuntimeError`] aborts execution at the statement that raised it.
//! Output produced before that point stands. A failed `assert` is reported
//! and execution continues.

mod environment;
pub mod errors;
mod input_handler;
mod interpreter;
mod operators;
mod print_handler;

pub use environment::{AssignError, Environment, Variable};
pub use errors::{EvalResult, RuntimeError, RuntimeErrorKind};
pub use input_handler::{
    scripted_handler, stdin_handler, InputHandlerImpl, ScriptedInputHandler, SharedInputHandler,
    StdinInputHandler,
};
pub use interpreter::Interpreter;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
