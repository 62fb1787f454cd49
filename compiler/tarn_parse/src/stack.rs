//! Stack growth for deeply recursive grammars.
//!
//! Every rule entry goes through [`ensure_sufficient_stack`], so input like
//! `((((…))))` nested thousands deep does not overflow the native stack.
//! This bounds stack depth only; a grammar that re-parses the same prefix
//! in several alternatives still pays for it in time.
//! Exported for code that walks the resulting trees recursively.

/// Grow the stack when less than this remains (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
