//! Recursion bounds.
//!
//! Tags and embedded expressions recurse into each other, so input nesting
//! turns directly into call depth. Two guards apply:
//!
//! - a logical limit, [`ParseConfig::max_depth`](crate::ParseConfig), which
//!   turns runaway nesting into a `NestingTooDeep` error;
//! - [`ensure_sufficient_stack`], which grows the stack on demand so the
//!   logical limit is reachable even on small thread stacks.

use crate::error::{ParseError, ParseErrorKind};
use crate::Parser;

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

impl Parser<'_> {
    /// Run a recursive production one nesting level deeper.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(self.cursor.error_here(ParseErrorKind::NestingTooDeep {
                limit: self.config.max_depth,
            }));
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }
}

#[cfg(test)]
mod tests;
