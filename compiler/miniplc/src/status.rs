//! Process exit statuses.

/// How a run ended, in the order the stages can stop it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExitStatus {
    /// The whole program ran (failed assertions included).
    Success,
    /// Lexical or parse errors.
    SyntaxError,
    TypeError,
    RuntimeError,
    /// Bad command line.
    Usage,
    /// The input file could not be read.
    NoInput,
}

impl ExitStatus {
    /// Numeric process exit code.
    pub const fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::SyntaxError => 1,
            ExitStatus::TypeError => 2,
            ExitStatus::RuntimeError => 3,
            // sysexits.h EX_USAGE / EX_NOINPUT
            ExitStatus::Usage => 64,
            ExitStatus::NoInput => 66,
        }
    }
}

#[cfg(test)]
mod tests;
