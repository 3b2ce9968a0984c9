//! The backtrace annotator
//!
//! Walks the input line by line. Lines matching the active pattern are
//! rebuilt with the resolver's answer appended; every other line is
//! written back exactly as read.

use log::{info, warn};
use std::io::Write;

use crate::domain::{AnnotateError, SymbolText};
use crate::parser::{ParsedFrame, ParsedLine, PatternVariant};
use crate::symbolization::AddressResolver;

/// Separator used by `--join` between function and location
const JOIN_SEPARATOR: &str = " at ";

/// What to do when a single lookup fails
///
/// A resolver that cannot be started is always fatal regardless of policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Annotate the frame with `<unresolved>` and keep going
    #[default]
    Placeholder,
    /// Abort the run with the lookup error
    Propagate,
}

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationStats {
    pub lines: usize,
    pub frames: usize,
    pub unresolved: usize,
}

/// Rewrites backtrace frames with resolved symbol text
pub struct Annotator<R> {
    resolver: R,
    pattern: PatternVariant,
    policy: FailurePolicy,
    join: bool,
    stats: AnnotationStats,
}

impl<R: AddressResolver> Annotator<R> {
    pub fn new(resolver: R, pattern: PatternVariant) -> Self {
        Self {
            resolver,
            pattern,
            policy: FailurePolicy::default(),
            join: false,
            stats: AnnotationStats::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Collapse multi-line resolver output onto the frame's line
    #[must_use]
    pub fn with_join(mut self, join: bool) -> Self {
        self.join = join;
        self
    }

    #[cfg(test)]
    fn stats(&self) -> AnnotationStats {
        self.stats
    }

    #[cfg(test)]
    fn into_resolver(self) -> R {
        self.resolver
    }

    /// Annotate a single line
    ///
    /// Returns the line unchanged (terminator included) when it is not a
    /// frame. A recognised frame comes back rebuilt from its captured
    /// fields, without a line terminator.
    ///
    /// # Errors
    /// Propagates resolver errors that the failure policy does not absorb.
    pub fn annotate_line(&mut self, line: &str) -> Result<String, AnnotateError> {
        Ok(self.annotate(line)?.unwrap_or_else(|| line.to_string()))
    }

    /// `Some(rebuilt)` for frames, `None` for passthrough lines
    fn annotate(&mut self, line: &str) -> Result<Option<String>, AnnotateError> {
        self.stats.lines += 1;
        match self.pattern.parse(line) {
            ParsedLine::NoMatch => Ok(None),
            ParsedLine::Frame(frame) => {
                self.stats.frames += 1;
                let symbol = self.symbol_for(&frame)?;
                Ok(Some(frame.render(&symbol)))
            }
        }
    }

    fn symbol_for(&mut self, frame: &ParsedFrame) -> Result<SymbolText, AnnotateError> {
        match self.resolver.resolve(frame.address()) {
            Ok(text) if self.join => Ok(text.joined(JOIN_SEPARATOR)),
            Ok(text) => Ok(text),
            Err(e) if e.is_lookup_failure() && self.policy == FailurePolicy::Placeholder => {
                warn!("Frame #{}: {e}", frame.index());
                self.stats.unresolved += 1;
                Ok(SymbolText::unresolved())
            }
            Err(e) => Err(e),
        }
    }

    /// Annotate a whole backtrace and write the result
    ///
    /// Frames are written with a trailing `\n`; passthrough lines keep
    /// whatever terminator they had. The writer is flushed after every
    /// line so earlier output survives a later fatal error.
    ///
    /// # Errors
    /// Returns the first resolver error not absorbed by the policy, or any
    /// write error.
    pub fn run<W: Write>(
        &mut self,
        input: &str,
        out: &mut W,
    ) -> Result<AnnotationStats, AnnotateError> {
        for line in input.split_inclusive('\n') {
            match self.annotate(line)? {
                Some(frame) => writeln!(out, "{frame}")?,
                None => out.write_all(line.as_bytes())?,
            }
            out.flush()?;
        }

        info!(
            "Annotated {} lines: {} frames, {} unresolved",
            self.stats.lines, self.stats.frames, self.stats.unresolved
        );
        Ok(self.stats)
    }
}
