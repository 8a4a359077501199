//! The injection-prevention boundary
//!
//! Every user-supplied string embedded in generated text passes through
//! [`sanitize`] exactly once, at serialization time. This is deliberately
//! narrow: it strips the three characters that would let a value escape
//! its quoted context or break the line-oriented formats (double quote,
//! CR, LF). It is not a general-purpose escaper.

/// Strip `"`, `\r` and `\n` from a value before embedding it in generated
/// text.
pub fn sanitize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '"' | '\r' | '\n'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_quotes_and_line_breaks() {
        assert_eq!(sanitize("My \"Best\" Mix\r\n"), "My Best Mix");
    }

    #[test]
    fn test_leaves_everything_else() {
        assert_eq!(sanitize("Rock & Roll, 100%"), "Rock & Roll, 100%");
        assert_eq!(sanitize("l'été"), "l'été");
    }
}
