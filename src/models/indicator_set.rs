// file: src/models/indicator_set.rs
// description: structured indicator extraction result model
// reference: threat intelligence ioc standards

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorCategory {
    Ip = 1,
    Domain = 2,
    Url = 3,
    FilePath = 4,
    StatusCode = 5,
    Keyword = 6,
}

impl IndicatorCategory {
    pub const ALL: [IndicatorCategory; 6] = [
        IndicatorCategory::Ip,
        IndicatorCategory::Domain,
        IndicatorCategory::Url,
        IndicatorCategory::FilePath,
        IndicatorCategory::StatusCode,
        IndicatorCategory::Keyword,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorCategory::Ip => "ips",
            IndicatorCategory::Domain => "domains",
            IndicatorCategory::Url => "urls",
            IndicatorCategory::FilePath => "file_paths",
            IndicatorCategory::StatusCode => "status_codes",
            IndicatorCategory::Keyword => "keywords",
        }
    }
}

/// Per-category distinct-item counts. Serialized as a mapping keyed by the
/// six category names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorCounts {
    pub ips: usize,
    pub domains: usize,
    pub urls: usize,
    pub file_paths: usize,
    pub status_codes: usize,
    pub keywords: usize,
}

/// Result of one extraction call. Each list holds distinct values in
/// first-appearance order; `counts` always mirrors the list lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub ips: Vec<String>,
    pub domains: Vec<String>,
    pub urls: Vec<String>,
    pub file_paths: Vec<String>,
    pub status_codes: Vec<String>,
    pub keywords: Vec<String>,
    pub counts: IndicatorCounts,
}

impl IndicatorSet {
    /// Builds the result from the six category lists, deriving `counts`
    /// from the list lengths so the two can never disagree.
    pub fn from_lists(
        ips: Vec<String>,
        domains: Vec<String>,
        urls: Vec<String>,
        file_paths: Vec<String>,
        status_codes: Vec<String>,
        keywords: Vec<String>,
    ) -> Self {
        let counts = IndicatorCounts {
            ips: ips.len(),
            domains: domains.len(),
            urls: urls.len(),
            file_paths: file_paths.len(),
            status_codes: status_codes.len(),
            keywords: keywords.len(),
        };

        Self {
            ips,
            domains,
            urls,
            file_paths,
            status_codes,
            keywords,
            counts,
        }
    }

    pub fn list(&self, category: IndicatorCategory) -> &[String] {
        match category {
            IndicatorCategory::Ip => &self.ips,
            IndicatorCategory::Domain => &self.domains,
            IndicatorCategory::Url => &self.urls,
            IndicatorCategory::FilePath => &self.file_paths,
            IndicatorCategory::StatusCode => &self.status_codes,
            IndicatorCategory::Keyword => &self.keywords,
        }
    }

    pub fn count(&self, category: IndicatorCategory) -> usize {
        match category {
            IndicatorCategory::Ip => self.counts.ips,
            IndicatorCategory::Domain => self.counts.domains,
            IndicatorCategory::Url => self.counts.urls,
            IndicatorCategory::FilePath => self.counts.file_paths,
            IndicatorCategory::StatusCode => self.counts.status_codes,
            IndicatorCategory::Keyword => self.counts.keywords,
        }
    }

    pub fn empty() -> Self {
        Self::from_lists(vec![], vec![], vec![], vec![], vec![], vec![])
    }

    pub fn is_empty(&self) -> bool {
        self.ips.is_empty()
            && self.domains.is_empty()
            && self.urls.is_empty()
            && self.file_paths.is_empty()
            && self.status_codes.is_empty()
            && self.keywords.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.ips
            + self.counts.domains
            + self.counts.urls
            + self.counts.file_paths
            + self.counts.status_codes
            + self.counts.keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_derived_from_lists() {
        let set = IndicatorSet::from_lists(
            vec!["8.8.8.8".to_string()],
            vec!["api.example.com".to_string()],
            vec![],
            vec![],
            vec!["403".to_string(), "500".to_string()],
            vec!["failed".to_string()],
        );

        assert_eq!(set.counts.ips, 1);
        assert_eq!(set.counts.domains, 1);
        assert_eq!(set.counts.urls, 0);
        assert_eq!(set.counts.file_paths, 0);
        assert_eq!(set.counts.status_codes, 2);
        assert_eq!(set.counts.keywords, 1);
        assert_eq!(set.total(), 5);
    }

    #[test]
    fn test_empty_set() {
        let set = IndicatorSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.total(), 0);
    }

    #[test]
    fn test_serialized_shape() {
        let set = IndicatorSet::empty();
        let value = serde_json::to_value(&set).unwrap();
        let obj = value.as_object().unwrap();

        for key in [
            "ips",
            "domains",
            "urls",
            "file_paths",
            "status_codes",
            "keywords",
        ] {
            assert!(obj[key].is_array());
            assert_eq!(obj["counts"][key], 0);
        }
    }

    #[test]
    fn test_category_names() {
        assert_eq!(IndicatorCategory::Ip.as_str(), "ips");
        assert_eq!(IndicatorCategory::StatusCode.as_str(), "status_codes");
    }
}
