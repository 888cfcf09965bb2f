//! Message types for the event threads.

use bitflags::bitflags;

/// Key codes the viewer reacts to.
///
/// A deliberately small subset of crossterm's key space: horizontal scroll
/// and quit are the only keyboard surface, everything else is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Escape key.
    Esc,
}

bitflags! {
    /// Key modifiers held during a key press.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        /// Shift key held.
        const SHIFT = 1;
        /// Control key held.
        const CONTROL = 1 << 1;
        /// Alt/Option key held.
        const ALT = 1 << 2;
    }
}

/// Events from the input thread (keyboard and terminal resize).
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// A key was pressed.
    Key {
        /// The key code.
        code: KeyCode,
        /// Modifiers held during the keypress.
        modifiers: KeyModifiers,
    },

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        cols: u16,
        /// New height in rows.
        rows: u16,
    },

    /// Input thread encountered an error.
    Error(String),

    /// Input thread is shutting down.
    Shutdown,
}

/// Events from the stream thread (upstream data on stdin).
#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// A chunk of raw bytes became available.
    Data(Vec<u8>),
    /// Upstream closed; treated as normal termination.
    Eof,
}
