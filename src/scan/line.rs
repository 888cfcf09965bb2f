//! Line scanner: tokenize text into escape runs and measured graphemes.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Escape introducer byte.
const ESC: u8 = 0x1b;

/// Maximum number of segments stored for a single line.
///
/// A pathologically long record stops scanning here and gets a `…` marker
/// appended instead of growing without bound. Below this cap the byte
/// round-trip invariant holds exactly.
pub const MAX_SEGMENTS: usize = 64 * 1024;

/// One unit of a scanned line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A recognized escape sequence, emitted verbatim. Zero display width.
    Escape(String),
    /// A single grapheme cluster of visible text.
    Visible {
        /// The grapheme's raw text.
        text: String,
        /// Display width in terminal columns (0 for control/combining).
        width: usize,
    },
}

impl Segment {
    /// The raw text of this segment, escape bytes included.
    pub fn raw(&self) -> &str {
        match self {
            Self::Escape(seq) => seq,
            Self::Visible { text, .. } => text,
        }
    }

    /// Display width of this segment in columns.
    pub const fn width(&self) -> usize {
        match self {
            Self::Escape(_) => 0,
            Self::Visible { width, .. } => *width,
        }
    }
}

/// A scanned line: an ordered sequence of segments plus its memoized total
/// visible width. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    segments: Vec<Segment>,
    width: usize,
    truncated: bool,
}

impl Line {
    /// Scan a raw line into segments.
    ///
    /// Escape sequences recognized: CSI (`ESC [` up to a final byte in
    /// `@`..=`~`), OSC (`ESC ]` up to BEL or `ESC \`), charset designations
    /// (`ESC ( ) # %` plus one byte), and any other two-byte `ESC x` pair.
    /// An introducer that never completes is kept as literal text: the ESC
    /// byte itself becomes a zero-width grapheme and scanning resumes at the
    /// next byte, so truncated upstream writes never panic here.
    pub fn scan(raw: &str) -> Self {
        let bytes = raw.as_bytes();
        let mut segments = Vec::new();
        let mut width = 0;
        let mut truncated = false;
        let mut i = 0;

        'outer: while i < bytes.len() {
            if segments.len() >= MAX_SEGMENTS {
                truncated = true;
                break;
            }

            if bytes[i] == ESC {
                if let Some(end) = consume_escape(raw, i) {
                    segments.push(Segment::Escape(raw[i..end].to_owned()));
                    i = end;
                } else {
                    // Incomplete introducer at end of line: literal text.
                    segments.push(Segment::Visible {
                        text: "\u{1b}".to_owned(),
                        width: 0,
                    });
                    i += 1;
                }
                continue;
            }

            // Visible run up to the next escape introducer.
            let end = bytes[i..]
                .iter()
                .position(|&b| b == ESC)
                .map_or(bytes.len(), |p| i + p);
            for grapheme in raw[i..end].graphemes(true) {
                if segments.len() >= MAX_SEGMENTS {
                    truncated = true;
                    break 'outer;
                }
                let w = grapheme_width(grapheme);
                width += w;
                segments.push(Segment::Visible {
                    text: grapheme.to_owned(),
                    width: w,
                });
            }
            i = end;
        }

        if truncated {
            segments.push(Segment::Visible {
                text: "\u{2026}".to_owned(),
                width: 1,
            });
            width += 1;
        }

        Self {
            segments,
            width,
            truncated,
        }
    }

    /// The segments of this line, in input order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total visible width in columns (escape runs excluded).
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Whether scanning hit the per-line segment cap.
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Reconstruct the original text from the segments.
    pub fn raw(&self) -> String {
        self.segments.iter().map(Segment::raw).collect()
    }
}

/// Display width of a grapheme cluster.
///
/// Control characters (C0, DEL, C1) never advance the cursor here; for
/// everything else unicode-width's East-Asian-aware tables decide, which
/// already degrades to width 1 where no better data exists.
fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_control() {
            return 0;
        }
    }
    grapheme.width()
}

/// Find the end (exclusive byte index) of the escape sequence starting at
/// `start`, or `None` if it does not complete within the line.
fn consume_escape(raw: &str, start: usize) -> Option<usize> {
    let bytes = raw.as_bytes();
    let next = *bytes.get(start + 1)?;
    match next {
        b'[' => {
            // CSI: parameter/intermediate bytes up to a final in @..=~.
            let mut i = start + 2;
            while i < bytes.len() {
                if (0x40..=0x7e).contains(&bytes[i]) {
                    return Some(i + 1);
                }
                i += 1;
            }
            None
        }
        b']' => {
            // OSC: terminated by BEL or the ST pair ESC \.
            let mut i = start + 2;
            while i < bytes.len() {
                if bytes[i] == 0x07 {
                    return Some(i + 1);
                }
                if bytes[i] == ESC && bytes.get(i + 1) == Some(&b'\\') {
                    return Some(i + 2);
                }
                i += 1;
            }
            None
        }
        b'(' | b')' | b'#' | b'%' => {
            // Charset designation: one more byte.
            let end = start + 3;
            if end <= bytes.len() && raw.is_char_boundary(end) {
                Some(end)
            } else {
                None
            }
        }
        b if b.is_ascii() => Some(start + 2),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_of(line: &Line) -> String {
        line.raw()
    }

    #[test]
    fn test_scan_plain_text() {
        let line = Line::scan("hello");
        assert_eq!(line.width(), 5);
        assert_eq!(line.segments().len(), 5);
        assert_eq!(raw_of(&line), "hello");
    }

    #[test]
    fn test_scan_csi_sequence() {
        let line = Line::scan("\x1b[32mOK\x1b[0m");
        assert_eq!(line.width(), 2);
        assert_eq!(
            line.segments()[0],
            Segment::Escape("\x1b[32m".to_owned())
        );
        assert_eq!(raw_of(&line), "\x1b[32mOK\x1b[0m");
    }

    #[test]
    fn test_scan_osc_bel_terminated() {
        let line = Line::scan("\x1b]0;title\x07x");
        assert_eq!(line.width(), 1);
        assert_eq!(
            line.segments()[0],
            Segment::Escape("\x1b]0;title\x07".to_owned())
        );
    }

    #[test]
    fn test_scan_osc_st_terminated() {
        let line = Line::scan("\x1b]8;;http://e\x1b\\link");
        assert_eq!(line.segments()[0].raw(), "\x1b]8;;http://e\x1b\\");
        assert_eq!(line.width(), 4);
    }

    #[test]
    fn test_scan_charset_designation() {
        let line = Line::scan("\x1b(Babc");
        assert_eq!(line.segments()[0], Segment::Escape("\x1b(B".to_owned()));
        assert_eq!(line.width(), 3);
    }

    #[test]
    fn test_round_trip_only_escapes() {
        let input = "\x1b[1m\x1b[31m\x1b[0m";
        assert_eq!(Line::scan(input).raw(), input);
        assert_eq!(Line::scan(input).width(), 0);
    }

    #[test]
    fn test_round_trip_malformed_trailing_introducer() {
        // Unterminated CSI degrades to literal text, bytes preserved.
        let input = "abc\x1b[32";
        let line = Line::scan(input);
        assert_eq!(line.raw(), input);
        // ESC itself measures zero; "[32" stays visible.
        assert_eq!(line.width(), 6);
    }

    #[test]
    fn test_round_trip_lone_escape_at_end() {
        let input = "abc\x1b";
        let line = Line::scan(input);
        assert_eq!(line.raw(), input);
        assert_eq!(line.width(), 3);
    }

    #[test]
    fn test_round_trip_empty() {
        let line = Line::scan("");
        assert!(line.segments().is_empty());
        assert_eq!(line.width(), 0);
    }

    #[test]
    fn test_wide_characters() {
        let line = Line::scan("日本");
        assert_eq!(line.width(), 4);
        assert_eq!(line.segments().len(), 2);
        assert_eq!(line.segments()[0].width(), 2);
    }

    #[test]
    fn test_combining_grapheme_is_one_segment() {
        // e + combining acute: one cluster, one column.
        let line = Line::scan("e\u{301}x");
        assert_eq!(line.segments().len(), 2);
        assert_eq!(line.width(), 2);
    }

    #[test]
    fn test_control_characters_measure_zero() {
        let line = Line::scan("a\tb");
        assert_eq!(line.width(), 2);
        assert_eq!(line.raw(), "a\tb");
    }

    #[test]
    fn test_escape_before_multibyte_char_is_literal() {
        // ESC followed by a non-ASCII char is not a recognizable pair.
        let input = "\x1b\u{00e9}";
        let line = Line::scan(input);
        assert_eq!(line.raw(), input);
    }

    #[test]
    fn test_segment_cap_appends_marker() {
        let input = "x".repeat(MAX_SEGMENTS + 10);
        let line = Line::scan(&input);
        assert!(line.is_truncated());
        assert_eq!(line.segments().len(), MAX_SEGMENTS + 1);
        assert_eq!(line.segments().last().unwrap().raw(), "\u{2026}");
        assert_eq!(line.width(), MAX_SEGMENTS + 1);
    }
}
