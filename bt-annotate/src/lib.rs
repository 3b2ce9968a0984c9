//! # bt-annotate - Backtrace Symbolizer
//!
//! Post-processes crash backtraces printed by a kernel or bare-metal
//! program. Raw program-counter values are handed to an external
//! `addr2line`-compatible tool and the answer (function name and
//! `file:line`) is appended to the frame.
//!
//! ```text
//!  stdin / --input                                       stdout
//! ┌──────────────┐   ┌──────────┐   ┌─────────────┐   ┌──────────────┐
//! │  backtrace   │──▶│  parser  │──▶│  annotator  │──▶│  annotated   │
//! │    text      │   │ (regex)  │   │             │   │  backtrace   │
//! └──────────────┘   └──────────┘   └──────┬──────┘   └──────────────┘
//!                                          │ one lookup per frame
//!                                          ▼
//!                                   ┌─────────────┐
//!                                   │  addr2line  │
//!                                   │ (subprocess)│
//!                                   └─────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`]: recognises frames in one of two formats and rebuilds them
//! - [`symbolization`]: the [`symbolization::AddressResolver`] capability
//!   and its subprocess implementation
//! - [`annotator`]: drives parsing and resolution over the whole input
//! - [`config`]: resolver path and target binary, resolved from the CLI
//! - [`cli`]: command-line argument parsing
//! - [`domain`]: newtypes (`Address`, `SymbolText`) and errors
//!
//! ## Typical Usage
//!
//! ```bash
//! # Paste a panic backtrace, finish with Ctrl-D
//! bt-annotate riscv64-unknown-elf-addr2line riscv32 release
//!
//! # Frame-pointer walker output from a file, one line per frame
//! bt-annotate addr2line x86_64 --pattern fp --join --input panic.log
//! ```

pub mod annotator;
pub mod cli;
pub mod config;
pub mod domain;
pub mod parser;
pub mod symbolization;
