//! ANSI-aware line scanning.
//!
//! This module turns raw text into [`Line`]s: sequences of segments that are
//! either escape runs (emitted verbatim, zero display width) or single
//! grapheme clusters tagged with their on-screen column width. Scanning is
//! pure and fail-soft: malformed or truncated escape sequences degrade to
//! literal text instead of erroring, so a torn upstream write can never take
//! the display down.
//!
//! [`LineAssembler`] sits in front of the scanner and splits a raw byte
//! stream into newline-terminated records, holding the trailing partial
//! record until the next read.

mod assemble;
mod line;

pub use assemble::{LineAssembler, MAX_LINE_BYTES};
pub use line::{Line, Segment, MAX_SEGMENTS};
