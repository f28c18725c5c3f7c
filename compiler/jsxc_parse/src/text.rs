//! Children text normalization.

/// Clean up a raw text run between tags.
///
/// Line breaks are dropped, the rest is trimmed, and `&nbsp;` becomes a
/// plain space. Returns `None` when nothing is left, so whitespace between
/// tags produces no child.
pub(crate) fn normalize(raw: &str) -> Option<String> {
    let joined: String = raw.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.replace("&nbsp;", " "))
}

#[cfg(test)]
mod tests;
