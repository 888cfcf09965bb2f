//! `lognowrap`: display ANSI-colored input without line wrapping.
//!
//! ```text
//! tail -f /var/log/nginx/access.log | colorize-nginx-logs | lognowrap
//! ```
//!
//! Controls: Left/Right arrows scroll horizontally, `q`/Esc quit,
//! Ctrl+C interrupts.

use clap::Parser;
use lognowrap::{Outcome, Session, SessionConfig};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "lognowrap",
    version,
    about = "Display ANSI-colored input without line wrapping",
    long_about = "Accepts ANSI-colored text on stdin and displays it with \
                  horizontal scrolling instead of line wrapping. Preserves \
                  all color codes, streams in real time, and handles \
                  terminal resize."
)]
struct Args {
    /// Columns scrolled per arrow key press
    #[arg(long, default_value_t = 1)]
    step: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = SessionConfig {
        scroll_step: args.step,
    };

    match Session::run(&config) {
        Ok(Outcome::EndOfInput | Outcome::Quit) => ExitCode::SUCCESS,
        // Conventional exit status for SIGINT-style termination.
        Ok(Outcome::Interrupted) => ExitCode::from(130),
        Err(e) => {
            eprintln!("lognowrap: {e}");
            ExitCode::FAILURE
        }
    }
}
