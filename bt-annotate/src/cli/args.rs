//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::parser::PatternVariant;

#[derive(Parser, Debug)]
#[command(
    name = "bt-annotate",
    version,
    about = "Annotate a pasted backtrace with function names and source lines",
    after_help = "\
EXAMPLES:
    bt-annotate riscv64-unknown-elf-addr2line riscv32 release
                                             Resolve against target/riscv32/release/rcore
    bt-annotate addr2line x86_64 --pattern fp
                                             Frame-pointer walker output, debug build
    bt-annotate addr2line x86_64 --binary build/kernel.elf --input panic.log"
)]
pub struct Args {
    /// Path to an addr2line-compatible executable
    #[arg(value_name = "RESOLVER")]
    pub resolver: PathBuf,

    /// Target architecture (directory under target/)
    #[arg(value_name = "ARCH")]
    pub arch: String,

    /// Build profile directory (debug, release, ...); always debug with `--pattern fp`
    #[arg(value_name = "MODE", default_value = "debug")]
    pub mode: String,

    /// File name of the binary inside target/<ARCH>/<MODE>/
    #[arg(long, value_name = "NAME", default_value = "rcore")]
    pub binary_name: String,

    /// Explicit path to the binary (overrides ARCH/MODE/--binary-name)
    #[arg(long, value_name = "PATH")]
    pub binary: Option<PathBuf>,

    /// Backtrace format to recognise
    #[arg(long, value_enum, default_value_t = PatternArg::PcFp)]
    pub pattern: PatternArg,

    /// Read the backtrace from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Put function and file:line on a single line
    #[arg(long)]
    pub join: bool,

    /// Abort when the resolver fails instead of annotating `<unresolved>`
    #[arg(long)]
    pub strict: bool,

    /// Suppress the paste prompt and separator
    #[arg(short, long)]
    pub quiet: bool,
}

/// Backtrace format as spelled on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternArg {
    /// `#3 PC: 0x00001234 FP: 0x00005678`
    PcFp,
    /// `#2 0x00009ABC fp 0x0000DEF0`
    Fp,
}

impl From<PatternArg> for PatternVariant {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::PcFp => PatternVariant::PcFp,
            PatternArg::Fp => PatternVariant::Fp,
        }
    }
}
