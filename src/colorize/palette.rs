//! ANSI palette and color lookups for log fields.

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// Timestamp, referrer, and user-agent text.
pub const DARK_GRAY: &str = "\x1b[90m";
/// Server hostname.
pub const CYAN: &str = "\x1b[36m";
/// Special server IPs.
pub const ORANGE: &str = "\x1b[38;5;208m";
/// Configured path patterns.
pub const DARK_ORANGE: &str = "\x1b[38;5;94m";
/// Default client IP.
pub const BRIGHT_CYAN: &str = "\x1b[96m";
/// Image requests.
pub const DARK_PURPLE: &str = "\x1b[38;5;90m";
/// POST method.
pub const RED: &str = "\x1b[31m";
/// HEAD and other low-interest methods.
pub const GRAY: &str = "\x1b[90m";
/// The viewer's own IP.
pub const BRIGHT_YELLOW: &str = "\x1b[93m";
/// Post author IPs.
pub const DARK_GREEN: &str = "\x1b[38;5;028m";

const STATUS_200: &str = "\x1b[92m";
const STATUS_REDIRECT: &str = "\x1b[38;5;039m";
const STATUS_304: &str = "\x1b[38;5;028m";
const STATUS_403: &str = "\x1b[38;5;124m";
const STATUS_404: &str = "\x1b[30;47m";
const STATUS_5XX: &str = "\x1b[30;101m";
const STATUS_OTHER: &str = "\x1b[1;37m";

const CACHE_HIT: &str = "\x1b[32m";
const CACHE_BYPASS: &str = "\x1b[33m";
const CACHE_MISS: &str = "\x1b[34m";
const CACHE_NONE: &str = "\x1b[90m";

/// Color for an HTTP status code.
pub fn status_color(status: &str) -> &'static str {
    if status.starts_with('5') {
        return STATUS_5XX;
    }
    match status {
        "200" => STATUS_200,
        "301" | "302" => STATUS_REDIRECT,
        "304" => STATUS_304,
        "400" | "403" | "405" => STATUS_403,
        "404" => STATUS_404,
        _ => STATUS_OTHER,
    }
}

/// Color for an upstream cache status.
pub fn cache_color(status: &str) -> &'static str {
    match status.trim() {
        "HIT" => CACHE_HIT,
        "BYPASS" => CACHE_BYPASS,
        "MISS" => CACHE_MISS,
        _ => CACHE_NONE,
    }
}

/// Single-letter abbreviation for an upstream cache status.
pub fn cache_abbrev(status: &str) -> &'static str {
    match status.trim() {
        "HIT" => "H",
        "BYPASS" => "B",
        "MISS" => "M",
        "-" => "-",
        _ => "---",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color("200"), STATUS_200);
        assert_eq!(status_color("301"), STATUS_REDIRECT);
        assert_eq!(status_color("302"), STATUS_REDIRECT);
        assert_eq!(status_color("304"), STATUS_304);
        assert_eq!(status_color("403"), STATUS_403);
        assert_eq!(status_color("404"), STATUS_404);
        assert_eq!(status_color("500"), STATUS_5XX);
        assert_eq!(status_color("503"), STATUS_5XX);
        assert_eq!(status_color("418"), STATUS_OTHER);
    }

    #[test]
    fn test_cache_lookups() {
        assert_eq!(cache_abbrev("HIT"), "H");
        assert_eq!(cache_abbrev(" BYPASS "), "B");
        assert_eq!(cache_abbrev("-"), "-");
        assert_eq!(cache_abbrev("EXPIRED"), "---");
        assert_eq!(cache_color("MISS"), CACHE_MISS);
        assert_eq!(cache_color("whatever"), CACHE_NONE);
    }
}
