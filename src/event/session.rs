//! Session: the main control loop and the state it owns.
//!
//! The session is the single writer of the viewport buffer, scroll offset,
//! and geometry. Event handlers run to completion and set a dirty flag; the
//! loop redraws at most once per wakeup, after draining whatever is already
//! queued, so a burst of input becomes one frame instead of many.

use super::input::InputActor;
use super::messages::{InputEvent, KeyCode, KeyModifiers, StreamEvent};
use super::stream::StreamActor;
use crate::error::{Error, Result};
use crate::render::{render_frame, OutputBuffer};
use crate::scan::{Line, LineAssembler};
use crate::terminal::TerminalGuard;
use crate::viewport::{Geometry, HScroll, ViewportBuffer};
use crossbeam_channel::{bounded, select};
use crossterm::terminal;
use std::io::{self, Write};
use std::time::Duration;

/// Idle wakeup period for the main loop. Bounds worst-case latency from
/// any event to its redraw well under the 100ms contract.
const IDLE_TICK: Duration = Duration::from_millis(50);

/// Poll timeout for the input thread.
const INPUT_POLL: Duration = Duration::from_millis(10);

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Upstream reached end-of-input.
    EndOfInput,
    /// The user quit explicitly (`q` or Esc).
    Quit,
    /// The user interrupted with Ctrl+C.
    Interrupted,
}

/// Configuration for a viewer session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Columns scrolled per arrow key press.
    pub scroll_step: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { scroll_step: 1 }
    }
}

/// A running viewer: viewport state plus the event loop that mutates it.
pub struct Session {
    buffer: ViewportBuffer,
    scroll: HScroll,
    geometry: Geometry,
    assembler: LineAssembler,
    output: OutputBuffer,
    dirty: bool,
    first_frame: bool,
}

impl Session {
    fn new(config: &SessionConfig, geometry: Geometry) -> Self {
        Self {
            buffer: ViewportBuffer::new(geometry.rows as usize),
            scroll: HScroll::new(config.scroll_step),
            geometry,
            assembler: LineAssembler::new(),
            output: OutputBuffer::new(),
            dirty: true,
            first_frame: true,
        }
    }

    /// Run a session to completion: acquire the terminal, spawn the stream
    /// and input threads, and multiplex until end-of-input or quit.
    ///
    /// The terminal is restored on every exit path, including errors,
    /// because the guard is held across the whole loop.
    pub fn run(config: &SessionConfig) -> Result<Outcome> {
        let (cols, rows) = terminal::size().map_err(Error::Terminal)?;
        let guard = TerminalGuard::acquire()?;

        let mut session = Self::new(config, Geometry::new(cols, rows));

        let (stream_tx, stream_rx) = bounded::<StreamEvent>(64);
        let (input_tx, input_rx) = bounded::<InputEvent>(64);
        let stream_actor = StreamActor::spawn(stream_tx);
        let input_actor = InputActor::spawn(input_tx, INPUT_POLL);

        let mut stdout = io::stdout();

        let outcome = 'main: loop {
            select! {
                recv(stream_rx) -> msg => {
                    let Ok(event) = msg else {
                        break 'main Outcome::EndOfInput;
                    };
                    if let Some(outcome) = session.on_stream(event) {
                        break 'main outcome;
                    }
                    // Coalesce already-queued chunks into this frame.
                    while let Ok(event) = stream_rx.try_recv() {
                        if let Some(outcome) = session.on_stream(event) {
                            break 'main outcome;
                        }
                    }
                }
                recv(input_rx) -> msg => {
                    let Ok(event) = msg else {
                        break 'main Outcome::Quit;
                    };
                    if let Some(outcome) = session.on_input(&event) {
                        break 'main outcome;
                    }
                    while let Ok(event) = input_rx.try_recv() {
                        if let Some(outcome) = session.on_input(&event) {
                            break 'main outcome;
                        }
                    }
                }
                default(IDLE_TICK) => {}
            }

            if session.dirty {
                session.render_to(&mut stdout)?;
            }
        };

        // Final frame so the terminating state (e.g. a flushed partial
        // line at EOF) is on screen before the terminal is restored.
        if session.dirty {
            session.render_to(&mut stdout)?;
        }

        input_actor.join();
        stream_actor.detach();
        drop(guard);
        Ok(outcome)
    }

    /// Apply one stream event.
    fn on_stream(&mut self, event: StreamEvent) -> Option<Outcome> {
        match event {
            StreamEvent::Data(chunk) => {
                self.ingest(&chunk);
                None
            }
            StreamEvent::Eof => {
                if let Some(partial) = self.assembler.finish() {
                    self.append_line(&partial);
                }
                Some(Outcome::EndOfInput)
            }
        }
    }

    /// Apply one input event.
    fn on_input(&mut self, event: &InputEvent) -> Option<Outcome> {
        match event {
            InputEvent::Key { code, modifiers } => self.on_key(*code, *modifiers),
            InputEvent::Resize { cols, rows } => {
                self.on_resize(*cols, *rows);
                None
            }
            // A hiccup in the key source is not worth tearing down the
            // display for; the stream keeps rendering.
            InputEvent::Error(_) | InputEvent::Shutdown => None,
        }
    }

    fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Option<Outcome> {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            return Some(Outcome::Interrupted);
        }
        match code {
            KeyCode::Left => {
                if self.scroll.scroll_left() {
                    self.dirty = true;
                }
            }
            KeyCode::Right => {
                let max = self.max_offset();
                if self.scroll.scroll_right(max) {
                    self.dirty = true;
                }
            }
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => return Some(Outcome::Quit),
            KeyCode::Char(_) => {}
        }
        None
    }

    fn on_resize(&mut self, cols: u16, rows: u16) {
        self.geometry = Geometry::new(cols, rows);
        self.buffer.set_capacity(self.geometry.rows as usize);
        self.scroll.clamp(self.max_offset());
        self.dirty = true;
    }

    /// Split a chunk into complete lines and append each.
    fn ingest(&mut self, chunk: &[u8]) {
        for line in self.assembler.push_chunk(chunk) {
            self.append_line(&line);
        }
    }

    fn append_line(&mut self, raw: &str) {
        self.buffer.push(Line::scan(raw));
        self.dirty = true;
    }

    fn max_offset(&self) -> usize {
        self.buffer
            .max_width()
            .saturating_sub(self.geometry.cols as usize)
    }

    /// Clamp the scroll offset and write one frame.
    fn render_to<W: Write>(&mut self, writer: &mut W) -> Result<()> {
        self.scroll.clamp(self.max_offset());
        render_frame(
            &self.buffer,
            self.geometry,
            self.scroll.offset(),
            self.first_frame,
            &mut self.output,
        );
        self.output.flush_to(writer)?;
        self.first_frame = false;
        self.dirty = false;
        Ok(())
    }
}
