//! Colorizing stage: annotate access-log lines with ANSI colors and
//! column alignment.
//!
//! This is the upstream half of the pipeline: it reads plain log lines and
//! emits the colorized, column-aligned text that the viewer displays. It
//! performs no terminal control of its own; output is ordinary
//! newline-terminated text for any ANSI-capable sink.
//!
//! # Example
//!
//! ```rust,ignore
//! use lognowrap::colorize::{Colorizer, ColorizeConfig};
//!
//! let colorizer = Colorizer::new(ColorizeConfig::default());
//! if let Some(line) = colorizer.colorize(raw_line) {
//!     println!("{line}");
//! }
//! ```

mod config;
mod format;
pub mod palette;

pub use config::{ColorizeConfig, Fields, IpFilter, MAX_AUTHOR_IPS};
pub use format::{LogFormats, Record};

use palette::{
    cache_abbrev, cache_color, status_color, BRIGHT_CYAN, BRIGHT_YELLOW, CYAN, DARK_GRAY,
    DARK_GREEN, DARK_ORANGE, DARK_PURPLE, GRAY, ORANGE, RED, RESET,
};
use std::fmt::Write;

/// Column width for the bracketed timestamp.
const TIMESTAMP_WIDTH: usize = 29;
/// Column width for the HTTP method.
const METHOD_WIDTH: usize = 6;
/// Column width for the status code.
const STATUS_WIDTH: usize = 3;

/// File extensions displayed as image requests.
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg", ".ico"];

/// Whether an address looks like IPv4 (contains dots).
pub fn is_ipv4(addr: &str) -> bool {
    addr.contains('.')
}

/// Whether an address looks like IPv6 (contains colons).
pub fn is_ipv6(addr: &str) -> bool {
    addr.contains(':')
}

/// The request line split into method and path components.
enum RequestParts<'a> {
    /// Could not split into method/path/version; shown verbatim.
    Malformed(&'a str),
    /// A well-formed request line.
    Parsed {
        method: &'a str,
        scheme: &'a str,
        path: &'a str,
        version: &'a str,
    },
}

/// Stateless line colorizer driven by an immutable configuration.
#[derive(Debug)]
pub struct Colorizer {
    config: ColorizeConfig,
    formats: LogFormats,
}

impl Colorizer {
    /// Build a colorizer for the given configuration.
    pub fn new(config: ColorizeConfig) -> Self {
        Self {
            config,
            formats: LogFormats::new(),
        }
    }

    /// Colorize one log line.
    ///
    /// Lines in neither known format pass through verbatim. Returns `None`
    /// when an IP-version filter excludes the record entirely.
    pub fn colorize(&self, line: &str) -> Option<String> {
        let Some(record) = self.formats.parse(line) else {
            return Some(line.to_owned());
        };

        let addr = record.remote_addr.trim();
        match self.config.ip_filter {
            Some(IpFilter::V4) if !is_ipv4(addr) => return None,
            Some(IpFilter::V6) if !is_ipv6(addr) => return None,
            _ => {}
        }

        Some(self.render(&record))
    }

    /// Build the colorized, column-aligned output for a parsed record.
    fn render(&self, record: &Record<'_>) -> String {
        let mut out = String::with_capacity(256);

        let timestamp = format!("[{}]", record.timestamp);
        let _ = write!(
            out,
            "{DARK_GRAY}{timestamp:<width$}{RESET} ",
            width = TIMESTAMP_WIDTH
        );

        if let Some(name) = record.server_name {
            let width = self.config.hostname_width;
            let name = name.trim();
            let _ = write!(out, "{CYAN}{name:>width$}{RESET}  ");
        }

        let addr = record.remote_addr.trim();
        let ip_width = self.config.ip_width();
        let _ = write!(out, "{}{addr:<ip_width$}{RESET} ", self.ip_color(addr));

        let parts = parse_request(record.request);
        out.push_str(&colorize_method(&parts));
        out.push(' ');

        let status = record.status;
        let _ = write!(
            out,
            "{}{status:>width$}{RESET} ",
            status_color(status),
            width = STATUS_WIDTH
        );

        if let Some(cache) = record.cache_status {
            let tag = format!("[{}]", cache_abbrev(cache));
            let _ = write!(out, "{}{tag}{RESET} ", cache_color(cache));
        }

        out.push_str(&self.colorize_path(&parts));

        let fields = self.config.fields;
        if fields.contains(Fields::REFERER) && fields.contains(Fields::USER_AGENT) {
            let _ = write!(
                out,
                " {DARK_GRAY}Ref: \"{}\" UA: \"{}\"{RESET}",
                record.referer, record.user_agent
            );
        } else if fields.contains(Fields::REFERER) {
            let _ = write!(out, " {DARK_GRAY}Ref: \"{}\"{RESET}", record.referer);
        } else if fields.contains(Fields::USER_AGENT) {
            let _ = write!(out, " {DARK_GRAY}UA: \"{}\"{RESET}", record.user_agent);
        }

        out
    }

    /// IP highlight with priority: own IP > author IPs > special servers >
    /// default.
    fn ip_color(&self, addr: &str) -> &'static str {
        if self.config.my_ip.as_deref() == Some(addr) {
            BRIGHT_YELLOW
        } else if self.config.author_ips.iter().any(|ip| ip == addr) {
            DARK_GREEN
        } else if self.config.special_server_ips.iter().any(|ip| ip == addr) {
            ORANGE
        } else {
            BRIGHT_CYAN
        }
    }

    /// Colorize the request path (and version, unless it is the common
    /// HTTP/2.0 case).
    fn colorize_path(&self, parts: &RequestParts<'_>) -> String {
        match *parts {
            RequestParts::Malformed(request) => request.to_owned(),
            RequestParts::Parsed {
                scheme,
                path,
                version,
                ..
            } => {
                let lower = path.to_lowercase();
                let color = if IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
                    DARK_PURPLE
                } else if self
                    .config
                    .special_path_patterns
                    .iter()
                    .any(|pat| path.contains(pat.as_str()))
                {
                    DARK_ORANGE
                } else {
                    RESET
                };

                let mut out = format!("{scheme}{color}{path}{RESET}");
                if version != "HTTP/2.0" {
                    let _ = write!(out, " {version}");
                }
                out
            }
        }
    }
}

/// Split a request line into method, path, and version.
///
/// A scheme prefix (from `${scheme_if_http}`) is peeled off first. The
/// version is the whole remainder after the path, so trailing garbage does
/// not flip a mostly-valid request to malformed. A line that does not
/// yield all three parts is malformed and rendered verbatim.
fn parse_request(request: &str) -> RequestParts<'_> {
    let request = request.trim();

    let (scheme, rest) = match request.find("://") {
        Some(pos) if request.starts_with("http://") || request.starts_with("https://") => {
            request.split_at(pos + 3)
        }
        _ => ("", request),
    };

    let Some(method_end) = rest.find(char::is_whitespace) else {
        return RequestParts::Malformed(request);
    };
    let (method, rest) = rest.split_at(method_end);
    let rest = rest.trim_start();

    let Some(path_end) = rest.find(char::is_whitespace) else {
        return RequestParts::Malformed(request);
    };
    let (path, version) = rest.split_at(path_end);
    let version = version.trim();
    if version.is_empty() {
        return RequestParts::Malformed(request);
    }

    RequestParts::Parsed {
        method,
        scheme,
        path,
        version,
    }
}

/// Pad and colorize the HTTP method.
///
/// Padding is applied to the visible text before the color codes so the
/// column alignment survives the escape sequences. A malformed request has
/// no method; its column stays blank.
fn colorize_method(parts: &RequestParts<'_>) -> String {
    match *parts {
        RequestParts::Malformed(_) => " ".repeat(METHOD_WIDTH),
        RequestParts::Parsed { method, .. } => {
            let color = match method {
                "POST" => RED,
                "HEAD" | "OPTIONS" | "TRACE" | "CONNECT" => GRAY,
                _ => RESET,
            };
            format!("{color}{method:<width$}{RESET}", width = METHOD_WIDTH)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMBINED: &str = r#"203.0.113.7 - alice [23/Dec/2025:11:17:05 -0600] "GET /index.html HTTP/1.1" 200 1532 "https://example.com/" "Mozilla/5.0""#;
    const CUSTOM: &str = r#"[23/Dec/2025:11:17:05 -0600] www.example.com | 2001:db8::1 | 503 [MISS] POST /api/submit HTTP/2.0 | Ref: "-" UA: "curl/8.0""#;

    fn colorizer(config: ColorizeConfig) -> Colorizer {
        Colorizer::new(config)
    }

    #[test]
    fn test_unmatched_line_passes_through() {
        let c = colorizer(ColorizeConfig::default());
        assert_eq!(c.colorize("not a log line"), Some("not a log line".to_owned()));
    }

    #[test]
    fn test_combined_line_colorized() {
        let c = colorizer(ColorizeConfig::default());
        let out = c.colorize(COMBINED).unwrap();
        assert!(out.contains("\x1b[92m200\x1b[0m"), "status colored green");
        assert!(out.contains("\x1b[96m203.0.113.7"), "default IP bright cyan");
        assert!(out.contains("Ref: \"https://example.com/\""));
        assert!(out.contains("UA: \"Mozilla/5.0\""));
    }

    #[test]
    fn test_custom_line_colorized() {
        let c = colorizer(ColorizeConfig::default());
        let out = c.colorize(CUSTOM).unwrap();
        assert!(out.contains("www.example.com"));
        assert!(out.contains("\x1b[34m[M]\x1b[0m"), "MISS cache tag in blue");
        assert!(out.contains("\x1b[30;101m503\x1b[0m"), "5xx black-on-red");
        assert!(out.contains("\x1b[31mPOST"), "POST method in red");
        assert!(!out.contains("HTTP/2.0"), "common version elided");
    }

    #[test]
    fn test_method_column_alignment() {
        let c = colorizer(ColorizeConfig::default());
        let out = c.colorize(COMBINED).unwrap();
        // GET padded to the method column width before the reset.
        assert!(out.contains("\x1b[0mGET   \x1b[0m"));
    }

    #[test]
    fn test_ip_filtering() {
        let v4_only = colorizer(ColorizeConfig {
            ip_filter: Some(IpFilter::V4),
            ..ColorizeConfig::default()
        });
        let v6_only = colorizer(ColorizeConfig {
            ip_filter: Some(IpFilter::V6),
            ..ColorizeConfig::default()
        });

        assert!(v4_only.colorize(COMBINED).is_some());
        assert!(v6_only.colorize(COMBINED).is_none());
        assert!(v4_only.colorize(CUSTOM).is_none());
        assert!(v6_only.colorize(CUSTOM).is_some());
        // Unmatched lines pass through even under a filter.
        assert!(v6_only.colorize("noise").is_some());
    }

    #[test]
    fn test_ip_highlight_priority() {
        let c = colorizer(ColorizeConfig {
            my_ip: Some("203.0.113.7".to_owned()),
            author_ips: vec!["203.0.113.7".to_owned()],
            ..ColorizeConfig::default()
        });
        let out = c.colorize(COMBINED).unwrap();
        assert!(out.contains(palette::BRIGHT_YELLOW), "own IP wins over author IP");
    }

    #[test]
    fn test_field_visibility_flags() {
        let short = colorizer(ColorizeConfig {
            fields: Fields::USER_AGENT,
            ..ColorizeConfig::default()
        });
        let out = short.colorize(COMBINED).unwrap();
        assert!(!out.contains("Ref:"));
        assert!(out.contains("UA: \"Mozilla/5.0\""));

        let shortshort = colorizer(ColorizeConfig {
            fields: Fields::empty(),
            ..ColorizeConfig::default()
        });
        let out = shortshort.colorize(COMBINED).unwrap();
        assert!(!out.contains("Ref:"));
        assert!(!out.contains("UA:"));
    }

    #[test]
    fn test_image_path_highlight() {
        let line = r#"203.0.113.7 - - [01/Jan/2026:00:00:00 +0000] "GET /img/logo.PNG HTTP/1.1" 200 99 "-" "-""#;
        let c = colorizer(ColorizeConfig::default());
        let out = c.colorize(line).unwrap();
        assert!(out.contains(&format!("{DARK_PURPLE}/img/logo.PNG{RESET}")));
    }

    #[test]
    fn test_special_path_pattern_highlight() {
        let line = r#"203.0.113.7 - - [01/Jan/2026:00:00:00 +0000] "GET /api/v2/posts HTTP/1.1" 200 99 "-" "-""#;
        let c = colorizer(ColorizeConfig {
            special_path_patterns: vec!["api/v2".to_owned()],
            ..ColorizeConfig::default()
        });
        let out = c.colorize(line).unwrap();
        assert!(out.contains(&format!("{DARK_ORANGE}/api/v2/posts{RESET}")));
    }

    #[test]
    fn test_malformed_request_rendered_verbatim() {
        let line = r#"203.0.113.7 - - [01/Jan/2026:00:00:00 +0000] "garbage" 400 0 "-" "-""#;
        let c = colorizer(ColorizeConfig::default());
        let out = c.colorize(line).unwrap();
        assert!(out.contains("garbage"));
    }

    #[test]
    fn test_scheme_prefix_peeled() {
        // ${scheme_if_http} prepends the scheme to the whole request line.
        match parse_request("http://GET /plain HTTP/1.1") {
            RequestParts::Parsed {
                method,
                scheme,
                path,
                version,
            } => {
                assert_eq!(scheme, "http://");
                assert_eq!(method, "GET");
                assert_eq!(path, "/plain");
                assert_eq!(version, "HTTP/1.1");
            }
            RequestParts::Malformed(_) => panic!("should parse"),
        }
    }

    #[test]
    fn test_parse_request_ordinary() {
        match parse_request("GET /a/b HTTP/1.1") {
            RequestParts::Parsed {
                method,
                scheme,
                path,
                version,
            } => {
                assert_eq!(method, "GET");
                assert_eq!(scheme, "");
                assert_eq!(path, "/a/b");
                assert_eq!(version, "HTTP/1.1");
            }
            RequestParts::Malformed(_) => panic!("should parse"),
        }
    }
}
