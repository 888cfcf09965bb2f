//! Line assembly: split a raw byte stream into newline-terminated records.

/// Safety cap for malformed or unbounded input: a record that grows past
/// this many bytes without a newline is force-split.
pub const MAX_LINE_BYTES: usize = 1024 * 1024;

/// Accumulates stream chunks and yields complete lines.
///
/// Holds the trailing partial record between reads. Lines are decoded
/// lossily (invalid UTF-8 becomes replacement characters) and a trailing
/// `\r` is stripped, so CRLF input displays cleanly.
#[derive(Debug, Default)]
pub struct LineAssembler {
    pending: Vec<u8>,
}

impl LineAssembler {
    /// Create an empty assembler.
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Feed a chunk of stream bytes, returning every line it completes.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);

        let mut lines = Vec::new();
        loop {
            if let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
                let record: Vec<u8> = self.pending.drain(..=pos).collect();
                lines.push(decode(&record[..pos]));
            } else if self.pending.len() > MAX_LINE_BYTES {
                // Force-split an unterminated record at the cap; the tail
                // rescans as its own line on a later chunk.
                let record: Vec<u8> = self.pending.drain(..MAX_LINE_BYTES).collect();
                lines.push(decode(&record));
            } else {
                break;
            }
        }
        lines
    }

    /// Drain the held partial record at end of input, if any.
    pub fn finish(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        let record = std::mem::take(&mut self.pending);
        Some(decode(&record))
    }

    /// Bytes currently held waiting for a newline.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

fn decode(record: &[u8]) -> String {
    let record = record.strip_suffix(b"\r").unwrap_or(record);
    String::from_utf8_lossy(record).into_owned()
}
