//! Log format detection.
//!
//! Two formats are auto-detected per line:
//!
//! - nginx "combined": `$remote_addr - $remote_user [$time_local]
//!   "$request" $status $body_bytes_sent "$http_referer"
//!   "$http_user_agent"`
//! - a custom format carrying server name and cache status:
//!   `[$time_local] $server_name | $remote_addr | $status
//!   [$upstream_cache_status] $request | Ref: "$http_referer" UA:
//!   "$http_user_agent"`
//!
//! The custom pattern is tried first since it is the more specific one.

use regex::Regex;

/// A parsed access-log record, borrowing from the input line.
#[derive(Debug, PartialEq, Eq)]
pub struct Record<'a> {
    /// `$time_local`, without the surrounding brackets.
    pub timestamp: &'a str,
    /// Server hostname (custom format only).
    pub server_name: Option<&'a str>,
    /// Client address.
    pub remote_addr: &'a str,
    /// HTTP status code.
    pub status: &'a str,
    /// Upstream cache status (custom format only).
    pub cache_status: Option<&'a str>,
    /// The request line, e.g. `GET /index.html HTTP/1.1`.
    pub request: &'a str,
    /// Referrer header value.
    pub referer: &'a str,
    /// User-agent header value.
    pub user_agent: &'a str,
}

/// Compiled format patterns. Build once at startup, reuse per line.
#[derive(Debug)]
pub struct LogFormats {
    combined: Regex,
    custom: Regex,
}

impl LogFormats {
    /// Compile the format patterns.
    pub fn new() -> Self {
        Self {
            combined: Regex::new(
                r#"^(\S+) - (\S+) \[([^\]]+)\] "([^"]*)" (\d+) (\S+) "([^"]*)" "([^"]*)""#,
            )
            .expect("combined pattern compiles"),
            custom: Regex::new(
                r#"^\[([^\]]+)\] ([^|]+) \| ([^|]+) \| (\d+) \[([^\]]+)\] (.*?) \| Ref: "(.*?)" UA: "(.*?)"\s*$"#,
            )
            .expect("custom pattern compiles"),
        }
    }

    /// Parse a line against the known formats.
    ///
    /// Returns `None` for lines in neither format; callers pass those
    /// through verbatim.
    pub fn parse<'a>(&self, line: &'a str) -> Option<Record<'a>> {
        if let Some(caps) = self.custom.captures(line) {
            let group = |i| caps.get(i).map_or("", |m| m.as_str());
            return Some(Record {
                timestamp: group(1),
                server_name: Some(group(2)),
                remote_addr: group(3),
                status: group(4),
                cache_status: Some(group(5)),
                request: group(6),
                referer: group(7),
                user_agent: group(8),
            });
        }

        let caps = self.combined.captures(line)?;
        let group = |i| caps.get(i).map_or("", |m| m.as_str());
        Some(Record {
            timestamp: group(3),
            server_name: None,
            remote_addr: group(1),
            status: group(5),
            cache_status: None,
            request: group(4),
            referer: group(7),
            user_agent: group(8),
        })
    }
}

impl Default for LogFormats {
    fn default() -> Self {
        Self::new()
    }
}
