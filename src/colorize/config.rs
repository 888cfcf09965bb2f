//! Colorizer configuration.
//!
//! All per-environment knobs — highlighted IPs, path patterns, column
//! widths, field visibility — live in one immutable value constructed at
//! startup and handed to the [`Colorizer`](super::Colorizer). Nothing is
//! read from ambient global state.

use bitflags::bitflags;

/// Maximum number of author IPs accepted on the command line.
pub const MAX_AUTHOR_IPS: usize = 4;

/// Column width for IPv4 addresses (xxx.xxx.xxx.xxx).
pub const IP_WIDTH_V4: usize = 15;
/// Column width for full IPv6 addresses.
pub const IP_WIDTH_V6: usize = 40;

bitflags! {
    /// Trailing record fields to include in the output.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Fields: u8 {
        /// Emit the referrer.
        const REFERER = 1;
        /// Emit the user agent.
        const USER_AGENT = 1 << 1;
    }
}

impl Default for Fields {
    fn default() -> Self {
        Self::all()
    }
}

/// Restrict output to one IP version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpFilter {
    /// Only IPv4 requests.
    V4,
    /// Only IPv6 requests.
    V6,
}

/// Immutable colorizer settings.
#[derive(Debug, Clone)]
pub struct ColorizeConfig {
    /// Which trailing fields to emit.
    pub fields: Fields,
    /// Optional IP-version filter.
    pub ip_filter: Option<IpFilter>,
    /// The viewer's own IP, highlighted bright yellow.
    pub my_ip: Option<String>,
    /// Post author IPs, highlighted dark green (at most [`MAX_AUTHOR_IPS`]).
    pub author_ips: Vec<String>,
    /// Internal server IPs, highlighted orange.
    pub special_server_ips: Vec<String>,
    /// Request-path substrings highlighted dark orange.
    pub special_path_patterns: Vec<String>,
    /// Column width for the server hostname (custom format only).
    pub hostname_width: usize,
}

impl Default for ColorizeConfig {
    fn default() -> Self {
        Self {
            fields: Fields::default(),
            ip_filter: None,
            my_ip: None,
            author_ips: Vec::new(),
            special_server_ips: Vec::new(),
            special_path_patterns: Vec::new(),
            hostname_width: 24,
        }
    }
}

impl ColorizeConfig {
    /// Column width for the address field, driven by the IP filter.
    pub const fn ip_width(&self) -> usize {
        match self.ip_filter {
            Some(IpFilter::V6) => IP_WIDTH_V6,
            _ => IP_WIDTH_V4,
        }
    }
}
