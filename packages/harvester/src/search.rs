//! Statute candidate search (DRF/lawSearch.do).
//!
//! Drains the paginated search listing for an exact-phrase query and returns
//! the candidate statutes in listing order, deduplicated by serial number.

use std::collections::HashSet;

use reqwest::blocking::Client;
use roxmltree::Document;

use gaejeong_engine::StatuteSummary;

use crate::config::{validate_query, ApiConfig, MAX_PAGES};
use crate::error::{HarvesterError, Result};
use crate::http::fetch_text;
use crate::xml::{child_text, find_children};

/// One parsed search result page.
#[derive(Debug, PartialEq, Eq)]
pub struct SearchPage {
    /// Statutes listed on this page, in listing order.
    pub entries: Vec<StatuteSummary>,

    /// Total result count reported by the server.
    pub total_count: usize,
}

/// Fetch the full candidate statute list for a query.
///
/// Pages are requested until the reported total is reached, the server
/// returns an empty page, or [`MAX_PAGES`] is hit (logged as a warning).
/// Entries are deduplicated by serial number, first occurrence winning.
pub fn fetch_statute_list(
    client: &Client,
    config: &ApiConfig,
    query: &str,
) -> Result<Vec<StatuteSummary>> {
    validate_query(query)?;

    let mut statutes: Vec<StatuteSummary> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut listed = 0usize;

    for page in 1..=MAX_PAGES {
        let url = config.search_url(query, page);
        let body = fetch_text(client, &url).map_err(|source| HarvesterError::SearchDownload {
            query: query.to_string(),
            page,
            source: Box::new(source),
        })?;

        let parsed = parse_search_page(&body)?;
        if parsed.entries.is_empty() {
            break;
        }

        listed += parsed.entries.len();
        for entry in parsed.entries {
            if seen.insert(entry.id.clone()) {
                statutes.push(entry);
            }
        }

        if listed >= parsed.total_count {
            return Ok(statutes);
        }
    }

    if listed > 0 {
        tracing::warn!(query, max_pages = MAX_PAGES, "Search listing not fully drained");
    }
    Ok(statutes)
}

/// Parse one search result page.
///
/// Entries without a serial number are dropped; a missing or unparseable
/// `totalCnt` is treated as zero, which ends pagination.
pub fn parse_search_page(xml: &str) -> Result<SearchPage> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let total_count = child_text(root, "totalCnt").parse().unwrap_or(0);

    let entries = find_children(root, "law")
        .filter_map(|law| {
            let id = child_text(law, "법령일련번호");
            if id.is_empty() {
                tracing::debug!("Search entry without serial number, dropping");
                return None;
            }
            let name = child_text(law, "법령명한글");
            Some(StatuteSummary::new(id, name))
        })
        .collect();

    Ok(SearchPage {
        entries,
        total_count,
    })
}
