//! Domain types providing compile-time safety and self-documentation
//!
//! These newtype wrappers keep the captured text of a backtrace frame
//! apart from the text produced by the resolver, so a frame pointer can
//! never be handed to the resolver where a program counter is expected.

use std::fmt;

/// Address token captured from a backtrace line (e.g. `0x00001234`)
///
/// The token is kept exactly as captured. The resolver receives this text
/// verbatim and the output line reproduces it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The captured token as written in the backtrace
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Frame counter captured after the `#` marker
///
/// Holds the digits as captured so `#03` is reprinted as `#03`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameIndex(String);

impl FrameIndex {
    pub fn new(digits: impl Into<String>) -> Self {
        Self(digits.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text produced by the resolver for one address
///
/// Surrounding whitespace, including the trailing newline the resolver
/// prints, is stripped on construction. The content is otherwise opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolText(String);

/// Annotation used when the resolver fails and failures are not fatal
pub const UNRESOLVED: &str = "<unresolved>";

impl SymbolText {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// Placeholder annotation for a failed lookup
    #[must_use]
    pub fn unresolved() -> Self {
        Self(UNRESOLVED.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Collapse multi-line output onto one line
    ///
    /// `addr2line -f -C` prints the function on one line and `file:line` on
    /// the next; joining with `" at "` gives `func at file.c:42`.
    #[must_use]
    pub fn joined(&self, sep: &str) -> Self {
        let parts: Vec<&str> =
            self.0.lines().map(str::trim).filter(|line| !line.is_empty()).collect();
        Self(parts.join(sep))
    }
}

impl fmt::Display for SymbolText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_display_is_verbatim() {
        assert_eq!(Address::new("0x00009ABC").to_string(), "0x00009ABC");
    }

    #[test]
    fn test_frame_index_keeps_leading_zeros() {
        let index = FrameIndex::new("03");
        assert_eq!(index.to_string(), "03");
        assert_eq!(index.as_str(), "03");
    }

    #[test]
    fn test_symbol_text_trims() {
        let text = SymbolText::new("  rust_main\nsrc/main.rs:42\n");
        assert_eq!(text.as_str(), "rust_main\nsrc/main.rs:42");
        assert!(SymbolText::new(" \n").is_empty());
    }

    #[test]
    fn test_symbol_text_joined() {
        let text = SymbolText::new("rust_main\nsrc/main.rs:42\n");
        assert_eq!(text.joined(" at ").as_str(), "rust_main at src/main.rs:42");

        // Single-line text is left alone
        let single = SymbolText::new("foo at file.c:42");
        assert_eq!(single.joined(" at "), single);
    }
}
