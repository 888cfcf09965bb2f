//! Viewport buffer: bounded FIFO of the most recent scanned lines.

use crate::scan::Line;
use std::collections::VecDeque;

/// Ordered collection of the most recently received lines, bounded to the
/// terminal's visible row count.
///
/// Invariant: `len() <= capacity()` after every operation. When a new line
/// arrives at capacity the oldest is evicted, so the newest line is always
/// visible.
#[derive(Debug)]
pub struct ViewportBuffer {
    lines: VecDeque<Line>,
    capacity: usize,
}

impl ViewportBuffer {
    /// Create a buffer bounded to `capacity` lines (floored at 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a line, evicting from the front if over capacity.
    pub fn push(&mut self, line: Line) {
        self.lines.push_back(line);
        while self.lines.len() > self.capacity {
            self.lines.pop_front();
        }
    }

    /// Update the row bound; evicts oldest lines immediately if the new
    /// bound is smaller.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.lines.len() > self.capacity {
            self.lines.pop_front();
        }
    }

    /// Current row bound.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of buffered lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the buffer holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by index from the oldest buffered line.
    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Iterate buffered lines in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Width of the widest buffered line, in columns.
    pub fn max_width(&self) -> usize {
        self.lines.iter().map(Line::width).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_append_and_order() {
        let mut buf = ViewportBuffer::new(10);
        buf.push(Line::scan("first"));
        buf.push(Line::scan("second"));
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.get(0).unwrap().raw(), "first");
        assert_eq!(buf.get(1).unwrap().raw(), "second");
    }

    #[test]
    fn test_buffer_evicts_oldest_at_capacity() {
        // 200 appends against a bound of 40 keep exactly the newest 40.
        let mut buf = ViewportBuffer::new(40);
        for i in 0..200 {
            buf.push(Line::scan(&format!("line {i}")));
        }
        assert_eq!(buf.len(), 40);
        assert_eq!(buf.get(0).unwrap().raw(), "line 160");
        assert_eq!(buf.get(39).unwrap().raw(), "line 199");
    }

    #[test]
    fn test_buffer_shrink_evicts_immediately() {
        let mut buf = ViewportBuffer::new(40);
        for i in 0..40 {
            buf.push(Line::scan(&format!("line {i}")));
        }
        buf.set_capacity(10);
        assert_eq!(buf.len(), 10);
        assert_eq!(buf.get(0).unwrap().raw(), "line 30");
        assert_eq!(buf.get(9).unwrap().raw(), "line 39");
    }

    #[test]
    fn test_buffer_grow_keeps_lines() {
        let mut buf = ViewportBuffer::new(2);
        buf.push(Line::scan("a"));
        buf.push(Line::scan("b"));
        buf.set_capacity(5);
        assert_eq!(buf.len(), 2);
        buf.push(Line::scan("c"));
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_buffer_bound_holds_under_mixed_operations() {
        let mut buf = ViewportBuffer::new(7);
        for i in 0..50 {
            buf.push(Line::scan(&format!("{i}")));
            assert!(buf.len() <= buf.capacity());
            if i % 13 == 0 {
                buf.set_capacity(3 + (i % 5));
                assert!(buf.len() <= buf.capacity());
            }
        }
    }

    #[test]
    fn test_buffer_max_width_skips_escapes() {
        let mut buf = ViewportBuffer::new(5);
        buf.push(Line::scan("abc"));
        buf.push(Line::scan("\x1b[31mdefgh\x1b[0m"));
        assert_eq!(buf.max_width(), 5);
    }

    #[test]
    fn test_buffer_capacity_floor() {
        let mut buf = ViewportBuffer::new(0);
        assert_eq!(buf.capacity(), 1);
        buf.set_capacity(0);
        assert_eq!(buf.capacity(), 1);
    }
}
