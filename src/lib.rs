//! # Lognowrap
//!
//! View ANSI-colored access logs in a terminal without line wrapping.
//!
//! The crate is a two-stage pipeline:
//!
//! - **Colorize** (`colorize-nginx-logs` binary): parse nginx access-log
//!   lines and annotate them with ANSI colors and column alignment.
//! - **Display** (`lognowrap` binary): render arbitrarily long,
//!   already-colorized lines in a fixed-width viewport, scrolling
//!   horizontally with the arrow keys instead of wrapping.
//!
//! ## Core Concepts
//!
//! - **ANSI-aware scanning**: lines are tokenized into escape runs and
//!   width-measured graphemes, so clipping never tears an escape sequence
//! - **Bounded viewport**: only the newest terminal-height lines are kept
//! - **Batched rendering**: each frame is one `write()` syscall
//! - **Actor threads**: stdin and keyboard feed bounded channels; a single
//!   `select!` loop owns all state
//!
//! ## Example
//!
//! ```rust,ignore
//! use lognowrap::{Session, SessionConfig};
//!
//! let outcome = Session::run(&SessionConfig::default())?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod colorize;
pub mod error;
pub mod event;
pub mod render;
pub mod scan;
pub mod terminal;
pub mod viewport;

// Re-exports for convenience
pub use colorize::{ColorizeConfig, Colorizer, Fields, IpFilter};
pub use error::{Error, Result};
pub use event::{InputEvent, KeyCode, KeyModifiers, Outcome, Session, SessionConfig};
pub use render::{render_frame, OutputBuffer};
pub use scan::{Line, LineAssembler, Segment};
pub use terminal::TerminalGuard;
pub use viewport::{Geometry, HScroll, ViewportBuffer};
