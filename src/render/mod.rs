//! Render engine: turn viewport state into one batched terminal write.
//!
//! Every frame is rebuilt from scratch into a pre-allocated
//! [`OutputBuffer`] and flushed with a single `write()` syscall, the same
//! discipline the rest of the crate applies to input: bounded work per
//! event, no per-row syscalls.

mod frame;
mod output;

pub use frame::{clip_line, render_frame};
pub use output::OutputBuffer;
