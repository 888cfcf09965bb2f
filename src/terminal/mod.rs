//! Terminal mode as a scoped resource.
//!
//! Raw mode, hidden cursor, and disabled autowrap are acquired once at
//! startup and restored by `Drop` on every exit path. Acquisition rolls
//! back anything partially entered before returning an error, so a failed
//! startup never leaves the terminal garbled.

use crate::error::{Error, Result};
use crossterm::{cursor, execute, terminal};
use std::io;

/// Guard over the terminal's raw mode and display flags.
///
/// Hold this for the lifetime of the display loop. Autowrap is disabled so
/// a wide grapheme straddling the right edge cannot force a wrap; the
/// renderer pre-clips everything else to the column budget.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enter raw mode, hide the cursor, and disable autowrap.
    ///
    /// # Errors
    ///
    /// [`Error::Terminal`] if terminal control is unavailable (for example
    /// when not attached to a terminal). Raw mode is rolled back first.
    pub fn acquire() -> Result<Self> {
        terminal::enable_raw_mode().map_err(Error::Terminal)?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, cursor::Hide, terminal::DisableLineWrap) {
            // Roll back the partial acquisition before reporting.
            let _ = terminal::disable_raw_mode();
            return Err(Error::Terminal(e));
        }

        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, terminal::EnableLineWrap);
        let _ = io::Write::write_all(&mut stdout, b"\x1b[0m");
        let _ = io::Write::flush(&mut stdout);
        let _ = terminal::disable_raw_mode();
    }
}
