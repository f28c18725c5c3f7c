//! Diagnostics for markup transforms.
//!
//! A diagnostic names what went wrong (an [`ErrorCode`] plus a message) and
//! where: the offending line, rebuilt from the token list by
//! [`SourceLine::reconstruct`], and the column of the offending token in
//! that line. Emitters render it as
//!
//! ```text
//! error[E1002]: expected closing tag for `div`, found `</span>`
//! 1 | <div></span>
//!            ^
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
mod snippet;

pub use diagnostic::{Diagnostic, Severity};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
pub use snippet::SourceLine;
