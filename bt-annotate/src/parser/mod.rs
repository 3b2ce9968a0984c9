//! Backtrace line recognition
//!
//! Turns raw input lines into a typed [`ParsedLine`]: either
//! [`ParsedLine::NoMatch`] (the line is passed through untouched) or a
//! [`ParsedFrame`] holding the captured frame counter and addresses.
//! Reconstruction of the output line lives here too, so each pattern
//! variant owns both its regex and its output template.
//!
//! ```text
//! pc-fp:  #3 PC: 0x00001234 FP: 0x00005678  ->  #3 PC: 0x00001234 FP: 0x00005678 <symbol>
//! fp:     #2 0x00009ABC fp 0x0000DEF0       ->  #2 0x00009ABC fp 0x0000DEF0 <symbol>
//! ```

pub mod frame;

pub use frame::{ParsedFrame, ParsedLine, PatternVariant};
