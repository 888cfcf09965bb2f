//! Stream Actor: Dedicated thread reading upstream bytes from stdin.
//!
//! stdin has no portable readiness primitive that composes with crossterm's
//! event source, so the blocking read lives on its own thread and the main
//! loop sees only bounded channel receives. Reads are chunked, never
//! line-buffered, so a slow producer cannot delay keyboard handling and a
//! fast one cannot stall mid-line.

use super::messages::StreamEvent;
use crossbeam_channel::Sender;
use std::io::{self, ErrorKind, Read};
use std::thread::{self, JoinHandle};

/// Read size per chunk.
const CHUNK_SIZE: usize = 4096;

/// Stream actor that forwards stdin chunks to the main loop.
pub struct StreamActor {
    handle: Option<JoinHandle<()>>,
}

impl StreamActor {
    /// Spawn the stream reader thread.
    ///
    /// The thread exits when stdin reaches end-of-input (sending
    /// [`StreamEvent::Eof`]) or when the receiving side hangs up. A thread
    /// parked in `read()` with an idle producer simply dies with the
    /// process; there is nothing to interrupt it with, and nothing it
    /// could corrupt.
    pub fn spawn(sender: Sender<StreamEvent>) -> Self {
        let handle = thread::Builder::new()
            .name("lognowrap-stream".to_owned())
            .spawn(move || {
                Self::run_loop(&sender);
            })
            .expect("Failed to spawn stream thread");

        Self {
            handle: Some(handle),
        }
    }

    /// Detach the reader thread handle.
    pub fn detach(mut self) {
        self.handle.take();
    }

    fn run_loop(sender: &Sender<StreamEvent>) {
        let mut stdin = io::stdin().lock();
        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            match stdin.read(&mut chunk) {
                Ok(0) => {
                    let _ = sender.send(StreamEvent::Eof);
                    break;
                }
                Ok(n) => {
                    if sender.send(StreamEvent::Data(chunk[..n].to_vec())).is_err() {
                        // Receiver dropped, exit
                        break;
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(_) => {
                    // A dead upstream is normal termination, not an error.
                    let _ = sender.send(StreamEvent::Eof);
                    break;
                }
            }
        }
    }
}

impl Drop for StreamActor {
    fn drop(&mut self) {
        // Never join: the thread may be parked in a blocking read. Dropping
        // the receiver makes its next send fail, which ends the loop.
        self.handle.take();
    }
}
