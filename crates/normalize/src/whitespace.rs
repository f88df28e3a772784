//! Whitespace normalization utilities.

/// Collapses repeated whitespace, trims edges, and normalizes newlines to
/// single spaces.
///
/// Uses Unicode's definition of whitespace via `split_whitespace()`, so tabs,
/// newlines, and non-breaking spaces all act as delimiters. Returns the empty
/// string for empty or whitespace-only input.
///
/// # Examples
///
/// ```rust
/// use normalize::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  leite   1l  "), "leite 1l");
/// assert_eq!(collapse_whitespace("arroz\t\nbranco"), "arroz branco");
/// assert_eq!(collapse_whitespace("   \n\t   "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_whitespace_cases() {
        let cases = [
            ("  leite\n\n   integral\t 1  l  ", "leite integral 1 l"),
            ("\n", ""),
            ("ja normalizado", "ja normalizado"),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(collapse_whitespace(input), expected);
        }
    }
}
