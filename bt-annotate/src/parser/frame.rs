use regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;

use crate::domain::{Address, FrameIndex, SymbolText};

/// `#3 PC: 0x00001234 FP: 0x00005678`
static PC_FP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#([0-9]+) PC: (0x[0-9A-F]+) FP: (0x[0-9A-F]+)")
        .expect("pc-fp frame pattern is valid")
});

/// `#2 0x00009ABC fp 0x0000DEF0`
static FP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#([0-9]+) (0x[0-9A-F]+) fp (0x[0-9A-F]+)").expect("fp frame pattern is valid")
});

/// Which backtrace dialect is recognised during a run
///
/// Exactly one variant is active per run. The kernel panic handler prints
/// `PC:`/`FP:` labelled frames; the frame-pointer walker prints the bare
/// program counter followed by an `fp` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternVariant {
    /// `#<n> PC: <pc> FP: <fp>`
    #[default]
    PcFp,
    /// `#<n> <pc> fp <fp>`
    Fp,
}

impl PatternVariant {
    fn regex(self) -> &'static Regex {
        match self {
            PatternVariant::PcFp => &*PC_FP_PATTERN,
            PatternVariant::Fp => &*FP_PATTERN,
        }
    }

    /// Parse one line of input
    ///
    /// The pattern is searched anywhere in the line; text around the
    /// captured frame is not retained.
    #[must_use]
    pub fn parse(self, line: &str) -> ParsedLine {
        match self.regex().captures(line) {
            Some(caps) => ParsedLine::Frame(self.frame_from(&caps)),
            None => ParsedLine::NoMatch,
        }
    }

    fn frame_from(self, caps: &Captures<'_>) -> ParsedFrame {
        let index = FrameIndex::new(&caps[1]);
        let pc = Address::new(&caps[2]);
        let fp = Address::new(&caps[3]);
        match self {
            PatternVariant::PcFp => ParsedFrame::PcFp { index, pc, fp },
            PatternVariant::Fp => ParsedFrame::Fp { index, pc, fp },
        }
    }
}

impl fmt::Display for PatternVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternVariant::PcFp => f.write_str("pc-fp"),
            PatternVariant::Fp => f.write_str("fp"),
        }
    }
}

/// Result of matching a line against the active pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    NoMatch,
    Frame(ParsedFrame),
}

/// A recognised backtrace frame
///
/// Fields are positional and fixed by the variant that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedFrame {
    PcFp { index: FrameIndex, pc: Address, fp: Address },
    Fp { index: FrameIndex, pc: Address, fp: Address },
}

impl ParsedFrame {
    /// The address handed to the resolver
    #[must_use]
    pub fn address(&self) -> &Address {
        match self {
            ParsedFrame::PcFp { pc, .. } | ParsedFrame::Fp { pc, .. } => pc,
        }
    }

    #[must_use]
    pub fn index(&self) -> &FrameIndex {
        match self {
            ParsedFrame::PcFp { index, .. } | ParsedFrame::Fp { index, .. } => index,
        }
    }

    /// Rebuild the frame with the resolved symbol appended
    #[must_use]
    pub fn render(&self, symbol: &SymbolText) -> String {
        match self {
            ParsedFrame::PcFp { index, pc, fp } => format!("#{index} PC: {pc} FP: {fp} {symbol}"),
            ParsedFrame::Fp { index, pc, fp } => format!("#{index} {pc} fp {fp} {symbol}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pc_fp_frame() {
        let parsed = PatternVariant::PcFp.parse("#3 PC: 0x00001234 FP: 0x00005678");
        assert_eq!(
            parsed,
            ParsedLine::Frame(ParsedFrame::PcFp {
                index: FrameIndex::new("3"),
                pc: Address::new("0x00001234"),
                fp: Address::new("0x00005678"),
            })
        );
    }

    #[test]
    fn test_fp_frame() {
        let parsed = PatternVariant::Fp.parse("#2 0x00009ABC fp 0x0000DEF0");
        let ParsedLine::Frame(frame) = parsed else {
            panic!("expected a frame");
        };
        assert_eq!(frame.index().as_str(), "2");
        assert_eq!(frame.address().as_str(), "0x00009ABC");
    }

    #[test]
    fn test_pattern_found_inside_line() {
        let parsed = PatternVariant::PcFp.parse("[ERROR] #12 PC: 0x80200ABC FP: 0x80411F00\n");
        let ParsedLine::Frame(frame) = parsed else {
            panic!("expected a frame");
        };
        assert_eq!(frame.index().as_str(), "12");
        assert_eq!(frame.address().as_str(), "0x80200ABC");
    }

    #[test]
    fn test_variants_do_not_cross_match() {
        assert_eq!(PatternVariant::Fp.parse("#3 PC: 0x00001234 FP: 0x00005678"), ParsedLine::NoMatch);
        assert_eq!(PatternVariant::PcFp.parse("#2 0x00009ABC fp 0x0000DEF0"), ParsedLine::NoMatch);
    }

    #[test]
    fn test_lowercase_hex_is_not_an_address() {
        assert_eq!(PatternVariant::PcFp.parse("#3 PC: 0xdeadbeef FP: 0x00005678"), ParsedLine::NoMatch);
    }

    #[test]
    fn test_non_frame_lines() {
        for line in ["Segmentation fault", "", "\n", "panicked at 'oops', src/main.rs:10:5"] {
            assert_eq!(PatternVariant::PcFp.parse(line), ParsedLine::NoMatch);
            assert_eq!(PatternVariant::Fp.parse(line), ParsedLine::NoMatch);
        }
    }

    #[test]
    fn test_render_templates() {
        let symbol = SymbolText::new("foo at file.c:42");

        let ParsedLine::Frame(frame) = PatternVariant::PcFp.parse("#3 PC: 0x00001234 FP: 0x00005678")
        else {
            panic!("expected a frame");
        };
        assert_eq!(frame.render(&symbol), "#3 PC: 0x00001234 FP: 0x00005678 foo at file.c:42");

        let ParsedLine::Frame(frame) = PatternVariant::Fp.parse("#2 0x00009ABC fp 0x0000DEF0") else {
            panic!("expected a frame");
        };
        assert_eq!(frame.render(&symbol), "#2 0x00009ABC fp 0x0000DEF0 foo at file.c:42");
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(PatternVariant::PcFp.to_string(), "pc-fp");
        assert_eq!(PatternVariant::Fp.to_string(), "fp");
        assert_eq!(PatternVariant::default(), PatternVariant::PcFp);
    }
}
