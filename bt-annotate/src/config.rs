//! Run configuration resolved once from the command line
//!
//! The resolver and the binary it symbolizes against are fixed for the
//! whole run and handed to the resolver at construction.

use log::warn;
use std::path::{Path, PathBuf};

use crate::annotator::FailurePolicy;
use crate::cli::Args;
use crate::parser::PatternVariant;

const DEBUG_MODE: &str = "debug";

/// Where the resolver lives and which binary it reads symbols from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorConfig {
    pub resolver_path: PathBuf,
    pub target_binary: PathBuf,
}

impl AnnotatorConfig {
    pub fn new(resolver_path: impl Into<PathBuf>, target_binary: impl Into<PathBuf>) -> Self {
        Self { resolver_path: resolver_path.into(), target_binary: target_binary.into() }
    }
}

/// Everything `main` needs to drive a run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub annotator: AnnotatorConfig,
    pub pattern: PatternVariant,
    pub policy: FailurePolicy,
    pub join: bool,
    pub input: Option<PathBuf>,
    pub quiet: bool,
}

impl From<&Args> for RunConfig {
    fn from(args: &Args) -> Self {
        let pattern = PatternVariant::from(args.pattern);
        let target_binary = args.binary.clone().unwrap_or_else(|| {
            target_binary_path(&args.arch, build_mode(pattern, &args.mode), &args.binary_name)
        });

        Self {
            annotator: AnnotatorConfig::new(&args.resolver, target_binary),
            pattern,
            policy: if args.strict { FailurePolicy::Propagate } else { FailurePolicy::Placeholder },
            join: args.join,
            input: args.input.clone(),
            quiet: args.quiet,
        }
    }
}

/// Frame-pointer walker output only ever comes from debug builds
fn build_mode(pattern: PatternVariant, mode: &str) -> &str {
    if pattern != PatternVariant::Fp {
        return mode;
    }
    if mode != DEBUG_MODE {
        warn!("Ignoring build mode \"{mode}\": fp backtraces are resolved against {DEBUG_MODE}");
    }
    DEBUG_MODE
}

/// Cargo output location of a build: `target/<arch>/<mode>/<name>`
#[must_use]
pub fn target_binary_path(arch: &str, mode: &str, name: &str) -> PathBuf {
    Path::new("target").join(arch).join(mode).join(name)
}
