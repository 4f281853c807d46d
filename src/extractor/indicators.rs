// file: src/extractor/indicators.rs
// description: deterministic indicator extraction pipeline with span-based precedence
// reference: threat intelligence ioc standards

use crate::error::Result;
use crate::extractor::patterns::{
    DOMAIN, IP_ADDRESS, POSIX_PATH, STATUS_CODE, URL, WINDOWS_PATH, is_ipv4, url_host,
};
use crate::extractor::vocabulary::{build_keyword_regex, default_vocabulary};
use crate::models::IndicatorSet;
use regex::Regex;
use std::collections::HashSet;

/// Characters trimmed from the tail of URL and path matches: sentence
/// punctuation that the greedy patterns pick up from surrounding prose.
const TRAILING_PUNCT: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// Extracts security-relevant indicators from raw log text.
///
/// Each call to [`extract`](Self::extract) is pure: identical input yields
/// an identical [`IndicatorSet`], and no state carries over between calls,
/// so a single extractor can be shared across threads freely.
///
/// The scans run in a fixed order (URL, IP, domain, file path, status code,
/// keyword) and earlier scans consume the byte spans they matched; a later
/// scan never re-reports a span an earlier one claimed. The host of every
/// recorded URL is additionally suppressed by value, so it cannot reappear
/// in `ips` or `domains` even from a separate occurrence in the text.
pub struct IndicatorExtractor {
    keyword_re: Regex,
}

impl IndicatorExtractor {
    /// Builds an extractor over a custom keyword vocabulary.
    pub fn new(vocabulary: &[String]) -> Result<Self> {
        Ok(Self {
            keyword_re: build_keyword_regex(vocabulary)?,
        })
    }

    /// Builds an extractor over [`DEFAULT_KEYWORDS`](crate::extractor::vocabulary::DEFAULT_KEYWORDS).
    pub fn with_defaults() -> Self {
        Self::new(&default_vocabulary()).expect("default vocabulary is valid")
    }

    pub fn extract(&self, log_text: &str) -> IndicatorSet {
        let text = log_text;
        let mut consumed: Vec<(usize, usize)> = Vec::new();
        let mut consumed_hosts: HashSet<String> = HashSet::new();

        // 1. URLs. Full match spans are consumed and hosts remembered so the
        //    IP and domain scans cannot re-report them.
        let mut urls = Vec::new();
        let mut seen_urls = HashSet::new();
        for m in URL.find_iter(text) {
            let value = m.as_str().trim_end_matches(TRAILING_PUNCT);
            let host = url_host(value);
            if host.is_empty() {
                continue;
            }
            consumed.push((m.start(), m.start() + value.len()));
            consumed_hosts.insert(host.to_lowercase());
            if seen_urls.insert(value.to_string()) {
                urls.push(value.to_string());
            }
        }

        // 2. IPv4 literals. Every occurrence span is consumed, including
        //    duplicates and URL hosts, so no octet survives into the status
        //    code scan.
        let mut ips = Vec::new();
        let mut seen_ips = HashSet::new();
        for m in IP_ADDRESS.find_iter(text) {
            if overlaps(&consumed, m.start(), m.end()) {
                continue;
            }
            consumed.push((m.start(), m.end()));
            let ip = m.as_str();
            if consumed_hosts.contains(ip) {
                continue;
            }
            if seen_ips.insert(ip.to_string()) {
                ips.push(ip.to_string());
            }
        }

        // 3. Bare domains, lowercased. A dotted token right after a path
        //    separator is a filename, not a domain.
        let mut domains = Vec::new();
        let mut seen_domains = HashSet::new();
        for m in DOMAIN.find_iter(text) {
            if overlaps(&consumed, m.start(), m.end()) {
                continue;
            }
            if is_ipv4(m.as_str()) || follows_path_separator(text, m.start()) {
                continue;
            }
            consumed.push((m.start(), m.end()));
            let domain = m.as_str().to_lowercase();
            if consumed_hosts.contains(&domain) {
                continue;
            }
            if seen_domains.insert(domain.clone()) {
                domains.push(domain);
            }
        }

        // 4. File paths, POSIX and Windows shapes merged in positional order.
        let mut file_paths = Vec::new();
        let mut seen_paths = HashSet::new();
        let mut path_matches: Vec<(usize, &str)> = POSIX_PATH
            .find_iter(text)
            .chain(WINDOWS_PATH.find_iter(text))
            .map(|m| (m.start(), m.as_str()))
            .collect();
        path_matches.sort_by_key(|&(start, _)| start);
        for (start, raw) in path_matches {
            let value = raw.trim_end_matches(TRAILING_PUNCT);
            if value.is_empty() {
                continue;
            }
            let end = start + value.len();
            if overlaps(&consumed, start, end) {
                continue;
            }
            consumed.push((start, end));
            if seen_paths.insert(value.to_string()) {
                file_paths.push(value.to_string());
            }
        }

        // 5. Status codes: any standalone 3-digit token in 100-599. Spans
        //    already claimed (IP octets, URL ports, path segments) are out.
        let mut status_codes = Vec::new();
        let mut seen_codes = HashSet::new();
        for m in STATUS_CODE.find_iter(text) {
            if overlaps(&consumed, m.start(), m.end()) {
                continue;
            }
            let code = m.as_str();
            if seen_codes.insert(code.to_string()) {
                status_codes.push(code.to_string());
            }
        }

        // 6. Keywords scan the full text: a severity word is a signal
        //    wherever it appears, so consumed spans do not apply.
        let mut keywords = Vec::new();
        let mut seen_keywords = HashSet::new();
        for m in self.keyword_re.find_iter(text) {
            let keyword = m.as_str().to_lowercase();
            if seen_keywords.insert(keyword.clone()) {
                keywords.push(keyword);
            }
        }

        IndicatorSet::from_lists(ips, domains, urls, file_paths, status_codes, keywords)
    }
}

impl Default for IndicatorExtractor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn overlaps(spans: &[(usize, usize)], start: usize, end: usize) -> bool {
    spans.iter().any(|&(s, e)| start < e && s < end)
}

fn follows_path_separator(text: &str, start: usize) -> bool {
    start > 0 && matches!(text.as_bytes()[start - 1], b'/' | b'\\')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IndicatorCategory;
    use pretty_assertions::assert_eq;

    fn extract(text: &str) -> IndicatorSet {
        IndicatorExtractor::with_defaults().extract(text)
    }

    #[test]
    fn test_empty_input() {
        let set = extract("");
        assert!(set.is_empty());
        assert_eq!(set.counts.ips, 0);
        assert_eq!(set.counts.keywords, 0);
    }

    #[test]
    fn test_indicator_free_input() {
        let set = extract("nothing interesting happened today");
        assert!(set.is_empty());
    }

    #[test]
    fn test_example_log_line() {
        let set =
            extract("2026-01-07 10:01:22 connection from 8.8.8.8 to api.example.com failed: 403");

        assert_eq!(set.ips, vec!["8.8.8.8"]);
        assert_eq!(set.domains, vec!["api.example.com"]);
        assert!(set.urls.is_empty());
        assert!(set.file_paths.is_empty());
        assert_eq!(set.status_codes, vec!["403"]);
        assert_eq!(set.keywords, vec!["failed"]);
        assert_eq!(set.counts.ips, 1);
        assert_eq!(set.counts.domains, 1);
        assert_eq!(set.counts.urls, 0);
        assert_eq!(set.counts.file_paths, 0);
        assert_eq!(set.counts.status_codes, 1);
        assert_eq!(set.counts.keywords, 1);
    }

    #[test]
    fn test_url_consumes_host_and_path() {
        let set = extract("POST https://api.example.com/v1/login failed");

        assert_eq!(set.urls, vec!["https://api.example.com/v1/login"]);
        assert!(set.domains.is_empty());
        assert!(set.file_paths.is_empty());
        assert_eq!(set.keywords, vec!["failed"]);
    }

    #[test]
    fn test_url_host_suppressed_by_value() {
        let set = extract("fetch https://api.example.com/health then ping api.example.com again");

        assert_eq!(set.urls, vec!["https://api.example.com/health"]);
        assert!(set.domains.is_empty());
    }

    #[test]
    fn test_ip_url_host_not_reported_separately() {
        let set = extract("probe http://10.99.1.2:8080/admin and retry from 10.99.1.2");

        assert_eq!(set.urls, vec!["http://10.99.1.2:8080/admin"]);
        assert!(set.ips.is_empty());
        // the port must not leak into status codes
        assert!(set.status_codes.is_empty());
    }

    #[test]
    fn test_ip_octets_are_not_status_codes() {
        let set = extract("blocked 203.120.155.255 at the edge");

        assert_eq!(set.ips, vec!["203.120.155.255"]);
        assert!(set.status_codes.is_empty());
    }

    #[test]
    fn test_strict_octet_range() {
        let set = extract("garbage token 999.999.999.999 in line");

        assert!(set.ips.is_empty());
        assert!(set.domains.is_empty());
    }

    #[test]
    fn test_posix_path() {
        let set = extract("tail -f /var/log/auth.log shows the failures");

        assert_eq!(set.file_paths, vec!["/var/log/auth.log"]);
        // auth.log is a filename here, not a domain
        assert!(set.domains.is_empty());
    }

    #[test]
    fn test_windows_path() {
        let set = extract(r"dropped C:\Windows\Temp\payload.exe on host");

        assert_eq!(set.file_paths, vec![r"C:\Windows\Temp\payload.exe"]);
    }

    #[test]
    fn test_keyword_case_insensitive_canonical_lowercase() {
        let set = extract("Connection DENIED by policy");

        assert_eq!(set.keywords, vec!["denied"]);
    }

    #[test]
    fn test_dedup_preserves_first_seen_order() {
        let set = extract("error from 9.9.9.9 then 1.1.1.1 then 9.9.9.9 again, Error repeated");

        assert_eq!(set.ips, vec!["9.9.9.9", "1.1.1.1"]);
        assert_eq!(set.keywords, vec!["error"]);
        assert_eq!(set.counts.ips, 2);
    }

    #[test]
    fn test_status_code_without_marker_word() {
        // policy: any standalone 3-digit token in 100-599 qualifies
        let set = extract("responded 200 then 503 then 200");

        assert_eq!(set.status_codes, vec!["200", "503"]);
    }

    #[test]
    fn test_out_of_range_code_ignored() {
        let set = extract("metric value 999 and counter 042");

        assert!(set.status_codes.is_empty());
    }

    #[test]
    fn test_date_digits_not_status_codes() {
        let set = extract("2026-01-07 08:30:00 healthy");

        assert!(set.status_codes.is_empty());
    }

    #[test]
    fn test_determinism() {
        let extractor = IndicatorExtractor::with_defaults();
        let text = "2026-02-03 GET https://cdn.example.net/a.js 404 from 8.8.4.4, \
                    see /var/log/nginx/error.log, upstream evil.example.org timeout";

        let first = extractor.extract(text);
        let second = extractor.extract(text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_count_consistency_and_no_repeats() {
        let text = "denied denied 403 403 https://a.example.com/x https://a.example.com/x \
                    10.55.0.3 10.55.0.3 /etc/passwd /etc/passwd b.example.com b.example.com";
        let set = extract(text);

        for category in IndicatorCategory::ALL {
            let list = set.list(category);
            assert_eq!(set.count(category), list.len());

            let unique: HashSet<&String> = list.iter().collect();
            assert_eq!(unique.len(), list.len());
        }
    }

    #[test]
    fn test_no_cross_category_overlap() {
        let text = "hit https://api.example.com/login from 8.8.8.8 and api.example.com 8.8.8.8";
        let set = extract(text);

        for url in &set.urls {
            let host = url_host(url);
            assert!(!set.domains.iter().any(|d| d == host));
            assert!(!set.ips.iter().any(|i| i == host));
        }
        for ip in &set.ips {
            assert!(!set.domains.contains(ip));
        }
    }

    #[test]
    fn test_multiline_input() {
        let text = "line one: timeout talking to db.internal.example.com\n\
                    line two: wrote /tmp/dump.bin\n\
                    line three: refused connection from 172.16.9.9\n";
        let set = extract(text);

        assert_eq!(set.domains, vec!["db.internal.example.com"]);
        assert_eq!(set.file_paths, vec!["/tmp/dump.bin"]);
        assert_eq!(set.ips, vec!["172.16.9.9"]);
        assert_eq!(set.keywords, vec!["timeout", "refused"]);
    }

    #[test]
    fn test_trailing_punctuation_trimmed() {
        let set = extract("see https://status.example.com/incidents. then check /var/log/syslog.");

        assert_eq!(set.urls, vec!["https://status.example.com/incidents"]);
        assert_eq!(set.file_paths, vec!["/var/log/syslog"]);
    }

    #[test]
    fn test_mixed_case_domain_lowercased() {
        let set = extract("beacon to Evil.Example.ORG observed");

        assert_eq!(set.domains, vec!["evil.example.org"]);
    }

    #[test]
    fn test_custom_vocabulary() {
        let extractor =
            IndicatorExtractor::new(&["breach".to_string(), "locked".to_string()]).unwrap();
        let set = extractor.extract("account LOCKED after breach attempt, error ignored");

        assert_eq!(set.keywords, vec!["locked", "breach"]);
    }

    #[test]
    fn test_keyword_inside_url_still_counts() {
        let set = extract("redirect to https://example.com/error/500");

        assert_eq!(set.urls, vec!["https://example.com/error/500"]);
        assert_eq!(set.keywords, vec!["error"]);
        // the 500 belongs to the URL span, not the status list
        assert!(set.status_codes.is_empty());
    }
}
