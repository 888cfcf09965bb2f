//! Viewport state: bounded line buffer, terminal geometry, scroll offset.
//!
//! The viewport follows new input: the newest line is always retained and
//! the oldest is evicted first when capacity is reached, so the display
//! behaves like `tail -f` with horizontal scrolling layered on top.

mod buffer;
mod scroll;

pub use buffer::ViewportBuffer;
pub use scroll::HScroll;

/// Terminal dimensions, floored at 1x1.
///
/// Written only by the resize handler; read by the render engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Columns available for display.
    pub cols: u16,
    /// Visible rows.
    pub rows: u16,
}

impl Geometry {
    /// Build a geometry, clamping degenerate sizes up to 1x1.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }
}
