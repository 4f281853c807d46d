// file: src/extractor/patterns.rs
// description: compiled regex patterns for indicator extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Network indicators
    pub static ref URL: Regex = Regex::new(
        r#"(?i)\b[a-z][a-z0-9+.-]*://[^\s<>"')\]]+"#
    ).expect("URL regex is valid");

    // Strict dotted-quad: each octet constrained to 0-255 by the pattern
    // itself, so 999.999.999.999 never matches.
    pub static ref IP_ADDRESS: Regex = Regex::new(
        r"\b(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b"
    ).expect("IP_ADDRESS regex is valid");

    pub static ref DOMAIN: Regex = Regex::new(
        r"(?i)\b(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,}\b"
    ).expect("DOMAIN regex is valid");

    // Filesystem indicators. POSIX form requires at least two segments so a
    // lone "/word" token in prose is not reported as a path.
    pub static ref POSIX_PATH: Regex = Regex::new(
        r"(?:/[\w.+-]+){2,}"
    ).expect("POSIX_PATH regex is valid");

    pub static ref WINDOWS_PATH: Regex = Regex::new(
        r"\b[A-Za-z]:\\[\w.+\\-]+"
    ).expect("WINDOWS_PATH regex is valid");

    // Standalone 3-digit tokens in the HTTP status ranges (1xx-5xx)
    pub static ref STATUS_CODE: Regex = Regex::new(
        r"\b[1-5][0-9]{2}\b"
    ).expect("STATUS_CODE regex is valid");
}

/// Whether a token has the dotted-quad IPv4 shape with in-range octets.
pub fn is_ipv4(token: &str) -> bool {
    IP_ADDRESS
        .find(token)
        .map(|m| m.start() == 0 && m.end() == token.len())
        .unwrap_or(false)
}

/// Host portion of a URL match: the substring between `://` and the first
/// `/`, `?`, `#` or `:` that follows it.
pub fn url_host(url: &str) -> &str {
    let after_scheme = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };
    match after_scheme.find(['/', '?', '#', ':']) {
        Some(idx) => &after_scheme[..idx],
        None => after_scheme,
    }
}
