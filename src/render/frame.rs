//! Frame construction: clip lines against the scroll window.

use super::OutputBuffer;
use crate::scan::{Line, Segment};
use crate::viewport::{Geometry, ViewportBuffer};

/// Emit the windowed portion of one line into `out`.
///
/// Escape-run segments are copied unconditionally, in order, exactly once
/// each; they carry no width and clipping one would corrupt terminal
/// state. Visible graphemes are kept iff their column range intersects
/// `[offset, offset + cols)`. A line entirely left of the window thus
/// renders as its escape runs only, which keeps any style it opened or
/// closed consistent with the frame's reset-per-row discipline.
pub fn clip_line(line: &Line, offset: usize, cols: usize, out: &mut OutputBuffer) {
    let window_end = offset.saturating_add(cols);
    let mut pos = 0;

    for segment in line.segments() {
        match segment {
            Segment::Escape(seq) => out.write_str(seq),
            Segment::Visible { text, width } => {
                let start = pos;
                pos += width;
                // Zero-width graphemes ride along with the window; a
                // straddling wide grapheme is kept (autowrap is off).
                if *width == 0 {
                    if start > offset && start < window_end {
                        out.write_str(text);
                    }
                } else if pos > offset && start < window_end {
                    out.write_str(text);
                }
            }
        }
    }
}

/// Build one full frame: home the cursor, then for each terminal row emit
/// an SGR reset, an erase-line, and the clipped line (blank when the
/// buffer has no line for that row).
///
/// The reset-per-row prefix is mandatory: without it a style opened on a
/// long line would leak into shorter neighbours whenever the window moves.
/// `first_frame` additionally clears the whole screen. The output is a
/// pure function of `(buffer, geometry, offset, first_frame)`, so
/// re-rendering unchanged state is byte-identical.
pub fn render_frame(
    buffer: &ViewportBuffer,
    geometry: Geometry,
    offset: usize,
    first_frame: bool,
    out: &mut OutputBuffer,
) {
    out.clear();
    if first_frame {
        out.clear_screen();
    }
    out.cursor_home();

    let rows = geometry.rows as usize;
    let cols = geometry.cols as usize;
    for row in 0..rows {
        out.reset_attrs();
        out.clear_line();
        if let Some(line) = buffer.get(row) {
            clip_line(line, offset, cols, out);
        }
        if row + 1 < rows {
            out.crlf();
        }
    }
}
