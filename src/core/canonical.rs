//! Line-ending and trailing-newline normalization for body comparison.
//!
//! The remote may hand back the stored body with CRLF endings or a different
//! number of trailing newlines than was sent. Neither difference means the
//! content diverged, so equality checks go through [`canonicalize`] on both
//! sides.

/// Text after normalization. Compared structurally only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalText(String);

impl CanonicalText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Normalize text for equality checks: CRLF to LF, then exactly one trailing
/// newline. Total and deterministic; lone `\r` bytes are left alone.
pub fn canonicalize(text: &str) -> CanonicalText {
    let unified = text.replace("\r\n", "\n");
    let mut out = unified.trim_end_matches('\n').to_string();
    out.push('\n');
    CanonicalText(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_and_lf_canonicalize_identically() {
        let lf = "Adds an LRU cache.\n\nFixes #42.\n";
        let crlf = "Adds an LRU cache.\r\n\r\nFixes #42.\r\n";
        assert_eq!(canonicalize(lf), canonicalize(crlf));
        assert_eq!(canonicalize(crlf).as_str(), lf);
    }

    #[test]
    fn canonicalize_is_idempotent() {
        for input in ["", "a", "a\n", "a\r\n\r\n", "a\n\n\n", "\r\n"] {
            let once = canonicalize(input);
            let twice = canonicalize(once.as_str());
            assert_eq!(once, twice, "input {input:?}");
        }
    }

    #[test]
    fn trailing_newlines_collapse_to_one() {
        assert_eq!(canonicalize("body\n\n\n").as_str(), "body\n");
        assert_eq!(canonicalize("body").as_str(), "body\n");
    }

    #[test]
    fn empty_text_becomes_single_newline() {
        assert_eq!(canonicalize("").as_str(), "\n");
    }

    #[test]
    fn lone_carriage_return_is_preserved() {
        assert_eq!(canonicalize("a\rb\n").as_str(), "a\rb\n");
    }
}
