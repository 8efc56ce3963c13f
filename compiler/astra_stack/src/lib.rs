//! Stack growth for recursive grammar productions.
//!
//! Conditions nest through `and`, `or`, `not`, `contains` and the sampling
//! conditions of statistics, and value expressions nest through parentheses
//! and operators. Content authors can nest arbitrarily deep, so recursive
//! productions run inside [`ensure_sufficient_stack`], which moves execution
//! onto a freshly allocated segment when the current one runs low.
//!
//! On `wasm32` the call is a passthrough.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// within [`RED_ZONE`] of its end.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
