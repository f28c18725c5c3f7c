//! Source-line reconstruction from tokens.
//!
//! The parser never keeps line tables; tokens already know their starting
//! line. The visual line an error sits on is rebuilt by concatenating the
//! tokens stamped with that line.

use jsxc_lexer::{Token, TokenKind};

/// One rebuilt source line with the column of the token being reported.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourceLine {
    /// 1-based line number.
    pub line: u32,
    /// Line text, without any line break.
    pub text: String,
    /// 0-based character column of the reported token within `text`.
    pub column: usize,
}

impl SourceLine {
    /// Rebuild the line of `tokens[index]` and locate that token in it.
    ///
    /// Rules:
    /// - every token stamped with the line contributes its text, cut at its
    ///   first line break;
    /// - a whitespace token contributes only when the token after it is
    ///   still on the same line (trailing whitespace is dropped);
    /// - a multi-line token from an earlier line contributes whatever
    ///   follows its last line break (indentation, or the tail of a
    ///   multi-line string).
    pub fn reconstruct(tokens: &[Token<'_>], index: usize) -> SourceLine {
        let Some(target) = tokens.get(index) else {
            return SourceLine::default();
        };
        let line = target.line;
        let mut text = String::new();
        let mut column = 0;

        for (i, token) in tokens.iter().enumerate() {
            if token.line > line {
                break;
            }
            if token.line < line {
                continue;
            }
            if i > 0 && tokens[i - 1].line < line {
                if let Some(newline) = tokens[i - 1].text.rfind('\n') {
                    text.push_str(&tokens[i - 1].text[newline + 1..]);
                }
            }
            if i == index {
                column = text.chars().count();
            }
            let keep = token.kind != TokenKind::Space
                || tokens.get(i + 1).is_some_and(|next| next.line == line);
            if keep {
                let visible = token.text.split('\n').next().unwrap_or_default();
                text.push_str(visible.trim_end_matches('\r'));
            }
        }

        SourceLine { line, text, column }
    }

    /// Text to put before the caret: the line's first `column` characters
    /// with everything except tabs replaced by spaces, so the caret lines up
    /// under tab-indented code.
    pub fn caret_padding(&self) -> String {
        self.text
            .chars()
            .take(self.column)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect()
    }
}
