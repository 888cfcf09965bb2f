//! Crate error type.

use thiserror::Error;

/// Errors the viewer can surface to its caller.
///
/// Everything else is absorbed locally: malformed escapes degrade to
/// literal text, a closed upstream is normal termination.
#[derive(Debug, Error)]
pub enum Error {
    /// Terminal control could not be acquired (not attached to a terminal,
    /// or raw mode unsupported). Fatal at startup; any partially entered
    /// terminal mode has already been rolled back when this is returned.
    #[error("terminal control unavailable: {0}")]
    Terminal(#[source] std::io::Error),

    /// An I/O failure while rendering.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
