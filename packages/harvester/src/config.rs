//! Configuration and URL building for the law.go.kr open API.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{HarvesterError, Result};

/// Base URL of the law.go.kr open API.
pub const BASE_URL: &str = "http://www.law.go.kr";

/// Default OC (open-API caller) credential.
pub const DEFAULT_OC: &str = "chetera";

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Statutes requested per search page (API maximum).
pub const PAGE_SIZE: u32 = 100;

/// Upper bound on search pages fetched per query.
///
/// The listing is normally drained by comparing against the reported total;
/// this bound caps the loop when the server misreports it.
pub const MAX_PAGES: u32 = 50;

/// MST (법령일련번호) pattern: a decimal serial.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MST_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").expect("valid regex"));

/// Connection settings for the law.go.kr API.
///
/// The OC credential is injected here at construction and passed explicitly
/// to every request; it is never read from ambient state by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// OC credential identifying the API caller.
    pub oc: String,

    /// API base URL; overridable for tests.
    pub base_url: String,
}

impl ApiConfig {
    /// Create a configuration with the default base URL.
    #[must_use]
    pub fn new(oc: impl Into<String>) -> Self {
        Self {
            oc: oc.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the statute search URL for one result page.
    ///
    /// The query is wrapped in double quotes for exact-phrase search before
    /// percent-encoding.
    #[must_use]
    pub fn search_url(&self, query: &str, page: u32) -> String {
        let exact = format!("\"{query}\"");
        let encoded = urlencoding::encode(&exact);
        format!(
            "{base}/DRF/lawSearch.do?OC={oc}&target=law&type=XML&display={PAGE_SIZE}&page={page}&search=2&knd=A0002&query={encoded}",
            base = self.base_url,
            oc = self.oc,
        )
    }

    /// Build the statute document URL for a serial number.
    #[must_use]
    pub fn document_url(&self, mst: &str) -> String {
        format!(
            "{base}/DRF/lawService.do?OC={oc}&target=law&MST={mst}&type=XML",
            base = self.base_url,
            oc = self.oc,
        )
    }
}

/// Validate a statute serial number (MST).
///
/// # Examples
/// ```
/// use gaejeong_harvester::config::validate_mst;
///
/// assert!(validate_mst("248613").is_ok());
/// assert!(validate_mst("abc").is_err());
/// ```
pub fn validate_mst(mst: &str) -> Result<()> {
    if MST_PATTERN.is_match(mst) {
        Ok(())
    } else {
        Err(HarvesterError::InvalidMst(mst.to_string()))
    }
}

/// Validate a search query.
///
/// # Returns
/// * `Ok(())` if the query contains non-whitespace characters
/// * `Err(HarvesterError::EmptyQuery)` otherwise
pub fn validate_query(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        Err(HarvesterError::EmptyQuery)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_mst_valid() {
        assert!(validate_mst("248613").is_ok());
        assert!(validate_mst("1").is_ok());
    }

    #[test]
    fn test_validate_mst_invalid() {
        assert!(validate_mst("").is_err());
        assert!(validate_mst("24a613").is_err());
        assert!(validate_mst("-3").is_err());
    }

    #[test]
    fn test_validate_query() {
        assert!(validate_query("담보").is_ok());
        assert!(validate_query("").is_err());
        assert!(validate_query("   ").is_err());
    }

    #[test]
    fn test_search_url_encodes_exact_phrase() {
        let config = ApiConfig::new("chetera");
        let url = config.search_url("담보", 1);
        assert!(url.starts_with("http://www.law.go.kr/DRF/lawSearch.do?OC=chetera"));
        assert!(url.contains("display=100"));
        assert!(url.contains("page=1"));
        // Exact-phrase quotes are percent-encoded
        assert!(url.contains("query=%22"));
        assert!(!url.contains('\"'));
    }

    #[test]
    fn test_document_url() {
        let config = ApiConfig::new("chetera");
        assert_eq!(
            config.document_url("248613"),
            "http://www.law.go.kr/DRF/lawService.do?OC=chetera&target=law&MST=248613&type=XML"
        );
    }

    #[test]
    fn test_base_url_override() {
        let config = ApiConfig::new("test").with_base_url("http://127.0.0.1:9000");
        assert!(config.search_url("담보", 1).starts_with("http://127.0.0.1:9000/"));
    }
}
