//! Parser snapshots for speculative parsing.
//!
//! A snapshot records the cursor position and the output length. Restoring
//! one rolls back both, so anything written since is retracted.
//!
//! Snapshots stay valid across a re-scan of the token list: a re-scan only
//! replaces tokens at or after the cursor, never before it.

use crate::Parser;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ParserSnapshot {
    pub(crate) cursor_pos: usize,
    pub(crate) output_len: usize,
}

impl Parser<'_> {
    #[inline]
    pub(crate) fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot {
            cursor_pos: self.cursor.position(),
            output_len: self.out.len(),
        }
    }

    #[inline]
    pub(crate) fn restore(&mut self, snapshot: ParserSnapshot) {
        self.cursor.set_position(snapshot.cursor_pos);
        self.out.truncate(snapshot.output_len);
    }

    /// Run `f` and roll back whatever it consumed or wrote.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.snapshot();
        let result = f(self);
        self.restore(snapshot);
        result
    }
}

#[cfg(test)]
mod tests;
