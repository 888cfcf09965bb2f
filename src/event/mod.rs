//! Event multiplexing: one control loop over three input sources.
//!
//! Two helper threads feed bounded crossbeam channels and the main loop
//! multiplexes them with `select!`, so no source is ever the target of an
//! unbounded blocking read from the loop's point of view:
//!
//! ```text
//! ┌───────────────┐     StreamEvent     ┌──────────────┐
//! │ Stream Thread │ ─────────────────▶  │              │
//! │   (stdin)     │                     │  Main Loop   │──▶ render ──▶ stdout
//! └───────────────┘                     │  (Session)   │
//! ┌───────────────┐     InputEvent      │              │
//! │ Input Thread  │ ─────────────────▶  │              │
//! │ (keys+resize) │                     └──────────────┘
//! └───────────────┘
//! ```
//!
//! Resize arrives through the input thread as an ordinary event: the OS
//! signal only marks readiness inside crossterm, and our loop reacts when
//! it next receives — no state is touched in signal context. All viewport
//! state lives on the main loop thread and handlers run to completion, so
//! no locking is needed anywhere.

mod input;
mod messages;
mod session;
mod stream;

pub use input::InputActor;
pub use messages::{InputEvent, KeyCode, KeyModifiers, StreamEvent};
pub use session::{Outcome, Session, SessionConfig};
pub use stream::StreamActor;
