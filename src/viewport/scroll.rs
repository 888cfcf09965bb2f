//! Horizontal scroll state.

/// Horizontal scroll offset in display columns, shared by every buffered
/// line.
///
/// Invariant: `0 <= offset <= max_offset` where `max_offset` is
/// `longest_line_width - columns` (saturating at 0). Callers re-clamp after
/// every buffer or geometry mutation since both can shrink the valid range.
#[derive(Debug, Clone, Copy)]
pub struct HScroll {
    offset: usize,
    step: usize,
}

impl HScroll {
    /// Create a scroll state at offset 0 moving `step` columns per key
    /// press (floored at 1).
    pub fn new(step: usize) -> Self {
        Self {
            offset: 0,
            step: step.max(1),
        }
    }

    /// Current offset in columns.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Scroll toward column 0. Returns true if the offset changed.
    pub fn scroll_left(&mut self) -> bool {
        let prev = self.offset;
        self.offset = self.offset.saturating_sub(self.step);
        self.offset != prev
    }

    /// Scroll right, clamped to `max_offset`. Returns true if the offset
    /// changed.
    pub fn scroll_right(&mut self, max_offset: usize) -> bool {
        let prev = self.offset;
        self.offset = (self.offset + self.step).min(max_offset);
        self.offset != prev
    }

    /// Re-clamp after a buffer or geometry change.
    pub fn clamp(&mut self, max_offset: usize) {
        self.offset = self.offset.min(max_offset);
    }
}
