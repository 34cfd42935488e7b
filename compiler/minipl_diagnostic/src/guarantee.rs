//! Proof that an error was reported.

use std::fmt;

/// Zero-sized token proving at least one error diagnostic was recorded.
///
/// The field is private: the only way to get one is
/// [`ErrorGuaranteed::from_error_count`] with a non-zero count, which
/// [`DiagnosticQueue::has_errors`](crate::DiagnosticQueue::has_errors) uses.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    #[inline]
    pub(crate) const fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// `Some` if `count` is non-zero.
    #[inline]
    pub const fn from_error_count(count: usize) -> Option<Self> {
        if count > 0 {
            Some(ErrorGuaranteed::new())
        } else {
            None
        }
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error(s) emitted")
    }
}

#[cfg(test)]
mod tests;
