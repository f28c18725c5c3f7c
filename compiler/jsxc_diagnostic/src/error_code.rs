use std::fmt;

/// Error codes for transform diagnostics.
///
/// Format: E#### where the first digit is the phase. Tokenizing never
/// fails, so every code currently belongs to the parser (E1xxx).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unexpected token
    E1001,
    /// Mismatched closing tag
    E1002,
    /// Unclosed embedded expression
    E1003,
    /// Markup nested too deeply
    E1004,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
        }
    }

    /// One-line summary, as listed by `--explain`.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "mismatched closing tag",
            ErrorCode::E1003 => "unclosed embedded expression",
            ErrorCode::E1004 => "markup nested too deeply",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    /// Case-insensitive: `e1002` parses as [`ErrorCode::E1002`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
