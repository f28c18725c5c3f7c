use std::fmt;

use crate::{ErrorCode, SourceLine};

/// Severity level for diagnostics.
///
/// A parse failure is a warning when the caller falls back to the original
/// source, and an error when it gives up.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A reportable problem with the location it refers to.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    /// The offending line and the caret column, when known.
    pub source_line: Option<SourceLine>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            source_line: None,
            notes: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_source_line(mut self, source_line: SourceLine) -> Self {
        self.source_line = Some(source_line);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// 1-based line of the primary location.
    pub fn line(&self) -> Option<u32> {
        self.source_line.as_ref().map(|l| l.line)
    }
}

/// Plain rendering without colors: header, source line, caret, notes.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;

        if let Some(source_line) = &self.source_line {
            let gutter = format!("{} | ", source_line.line);
            write!(f, "\n{gutter}{}", source_line.text)?;
            write!(
                f,
                "\n{}{}^",
                " ".repeat(gutter.len()),
                source_line.caret_padding()
            )?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        Ok(())
    }
}
