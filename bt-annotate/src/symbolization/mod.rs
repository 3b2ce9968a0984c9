//! # Address Resolution
//!
//! Converts raw program-counter tokens taken from a backtrace into
//! human-readable text: the function name and the `file:line` it came
//! from. This is **symbolization**.
//!
//! The work itself is delegated to an external `addr2line`-compatible
//! tool (GNU binutils, LLVM `llvm-addr2line`, or a cross toolchain's
//! `riscv64-unknown-elf-addr2line`). Nothing here reads ELF or DWARF.
//!
//! ```text
//! 0x80200ABC
//!     │  addr2line -e target/riscv32/release/rcore -f -C 0x80200ABC
//!     ▼
//! rust_main
//! /home/user/rcore/src/lib.rs:42
//! ```
//!
//! ## Module Structure
//!
//! - **`resolver`**: the [`AddressResolver`] trait and [`Addr2LineTool`],
//!   the subprocess-backed implementation. One process is spawned per
//!   address, sequentially, with no caching.

pub mod resolver;

pub use resolver::{Addr2LineTool, AddressResolver};
