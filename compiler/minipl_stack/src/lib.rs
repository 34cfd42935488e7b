//! Stack growth guard for recursive stages.
//!
//! The parser, type checker, interpreter, and expression printer all recurse
//! on nested groupings and nested `for` bodies. Source like `((((...))))`
//! can be nested arbitrarily deep, so every recursive entry point goes
//! through [`ensure_sufficient_stack`], which grows the stack on a fresh
//! segment when the remaining space drops under [`RED_ZONE`].

/// Remaining stack below which a new segment is allocated.
pub const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment.
pub const GROWTH: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// On wasm the host owns the stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
