//! Stack growth for deeply recursive phases.
//!
//! The parser recurses once per nesting level and the evaluator once per
//! user function call, so a long unary numeral or a deeply recursive
//! NullScript function would otherwise exhaust the native stack. Wrapping
//! each recursive entry point in [`ensure_sufficient_stack`] moves the
//! computation onto a freshly allocated segment when the current one is
//! nearly full.
//!
//! On `wasm32` the closure is called directly.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```
/// use ns_stack::ensure_sufficient_stack;
///
/// fn depth(n: u32) -> u32 {
///     ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
/// }
///
/// assert_eq!(depth(50_000), 50_000);
/// ```
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
