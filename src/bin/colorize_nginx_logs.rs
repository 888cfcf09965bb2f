//! `colorize-nginx-logs`: colorize nginx access logs with automatic
//! format detection.
//!
//! ```text
//! tail -f /var/log/nginx/access.log | colorize-nginx-logs -m 1.2.3.4
//! ```
//!
//! Reads log lines on stdin, writes colorized, column-aligned lines on
//! stdout, one line at a time so `tail -f` pipelines stay real-time.

use clap::Parser;
use lognowrap::colorize::{ColorizeConfig, Colorizer, Fields, IpFilter, MAX_AUTHOR_IPS};
use std::io::{self, BufRead, ErrorKind, Write};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "colorize-nginx-logs",
    version,
    about = "Colorize nginx logs with automatic format detection",
    long_about = "Auto-detects the nginx \"combined\" format and a custom \
                  format with cache status, color-codes HTTP status, cache \
                  status, IPs, and request paths, and aligns fields into \
                  columns for vertical scanning. Unrecognized lines pass \
                  through unchanged."
)]
struct Args {
    /// Suppress referrer output (show only UA)
    #[arg(long)]
    short: bool,

    /// Suppress both referrer and user agent output
    #[arg(long)]
    shortshort: bool,

    /// Display only IPv4 requests
    #[arg(short = '4', long = "ipv4", conflicts_with = "ipv6_only")]
    ipv4_only: bool,

    /// Display only IPv6 requests
    #[arg(short = '6', long = "ipv6")]
    ipv6_only: bool,

    /// Highlight your IP address in bright yellow
    #[arg(short = 'm', long = "my-ip", value_name = "IP")]
    my_ip: Option<String>,

    /// Highlight post author IP in bright green (repeatable, max 4)
    #[arg(short = 'a', long = "author-ip", value_name = "IP")]
    author_ips: Vec<String>,

    /// Highlight this internal server IP in orange (repeatable)
    #[arg(long = "server-ip", value_name = "IP")]
    special_server_ips: Vec<String>,

    /// Highlight request paths containing this pattern (repeatable)
    #[arg(long = "path-pattern", value_name = "PATTERN")]
    special_path_patterns: Vec<String>,

    /// Column width for the server hostname (custom format)
    #[arg(long, default_value_t = 24, value_name = "COLS")]
    hostname_width: usize,
}

impl Args {
    fn into_config(self) -> ColorizeConfig {
        let mut fields = Fields::all();
        if self.short {
            fields.remove(Fields::REFERER);
        }
        if self.shortshort {
            fields = Fields::empty();
        }

        let ip_filter = if self.ipv4_only {
            Some(IpFilter::V4)
        } else if self.ipv6_only {
            Some(IpFilter::V6)
        } else {
            None
        };

        ColorizeConfig {
            fields,
            ip_filter,
            my_ip: self.my_ip,
            author_ips: self.author_ips,
            special_server_ips: self.special_server_ips,
            special_path_patterns: self.special_path_patterns,
            hostname_width: self.hostname_width,
        }
    }
}

fn run(colorizer: &Colorizer) -> io::Result<()> {
    let mut stdin = io::stdin().lock();
    // Stdout is line-buffered, so every record reaches the next pipeline
    // stage as soon as it is written.
    let mut stdout = io::stdout().lock();

    let mut raw = Vec::new();
    loop {
        raw.clear();
        if stdin.read_until(b'\n', &mut raw)? == 0 {
            return Ok(());
        }
        if raw.last() == Some(&b'\n') {
            raw.pop();
        }
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }

        let line = String::from_utf8_lossy(&raw);
        if let Some(colorized) = colorizer.colorize(&line) {
            writeln!(stdout, "{colorized}")?;
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    if args.author_ips.len() > MAX_AUTHOR_IPS {
        eprintln!("colorize-nginx-logs: maximum {MAX_AUTHOR_IPS} author IPs allowed");
        return ExitCode::from(2);
    }

    let colorizer = Colorizer::new(args.into_config());
    match run(&colorizer) {
        Ok(()) => ExitCode::SUCCESS,
        // The reader going away mid-stream is how these pipelines end.
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("colorize-nginx-logs: {e}");
            ExitCode::FAILURE
        }
    }
}
