//! Output accumulation.

/// Append-only text buffer the parser writes the result into.
///
/// The only way back is [`truncate`](Self::truncate) to a length recorded
/// earlier, which retracts a tentative write.
#[derive(Debug, Default)]
pub(crate) struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        OutputBuffer {
            text: String::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    #[inline]
    pub(crate) fn push(&mut self, c: char) {
        self.text.push(c);
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.text.len()
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        debug_assert!(len <= self.text.len(), "truncate past the end");
        self.text.truncate(len);
    }

    /// Write `s` as a single-quoted literal.
    ///
    /// A `'` gets a backslash unless it already has one. Nothing else is
    /// escaped.
    pub(crate) fn push_quoted(&mut self, s: &str) {
        self.text.push('\'');
        let mut prev = None;
        for c in s.chars() {
            if c == '\'' && prev != Some('\\') {
                self.text.push('\\');
            }
            self.text.push(c);
            prev = Some(c);
        }
        self.text.push('\'');
    }

    pub(crate) fn into_string(self) -> String {
        self.text
    }
}
