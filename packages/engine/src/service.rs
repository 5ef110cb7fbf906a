//! Statute search service.
//!
//! Drives a full run over a [`StatuteProvider`]: fetch the candidate list
//! for a keyword, fetch each statute's document, and hand the located
//! occurrences to the amendment or highlight pipeline. Partial success is
//! the norm — a statute whose fetch fails is skipped with a warning, never
//! fatal to the run. Output ordering equals candidate order.

use serde::Serialize;

use crate::amendment::{render_sentence, NO_TARGETS_WARNING};
use crate::error::Result;
use crate::grouping::group_locations;
use crate::highlight::highlight_document;
use crate::locate::{locate, Keyword};
use crate::types::{StatuteDocument, StatuteSummary};

/// Source of candidate statutes and their documents.
///
/// Implementations own all I/O concerns (pagination, retries, timeouts).
/// `fetch_document` returns `Ok(None)` when a statute cannot be retrieved;
/// the service treats both that and `Err` as "skip this statute".
pub trait StatuteProvider {
    /// Fetch the deduplicated, fully drained candidate list for a keyword.
    fn fetch_candidates(&self, keyword: &str) -> Result<Vec<StatuteSummary>>;

    /// Fetch one statute's full document, or `None` if unavailable.
    fn fetch_document(&self, summary: &StatuteSummary) -> Result<Option<StatuteDocument>>;
}

/// The matching passages of one statute, search mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatuteHighlights {
    /// Statute display name.
    pub name: String,

    /// Rendered passages, one per article with visible output.
    pub passages: Vec<String>,
}

/// Search and amendment-generation service over a statute provider.
#[derive(Debug)]
pub struct StatuteSearchService<P> {
    provider: P,
}

impl<P: StatuteProvider> StatuteSearchService<P> {
    /// Create a service over the given provider.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Generate amendment sentences for every statute in which `keyword`
    /// occurs, stating its replacement by `replacement`.
    ///
    /// Returns one rendered sentence per statute with at least one
    /// qualifying location, numbered sequentially, or a single warning
    /// string when none qualified.
    #[must_use]
    pub fn generate_amendments(&self, keyword: &str, replacement: &str) -> Vec<String> {
        let search = Keyword::new(keyword);
        let mut sentences = Vec::new();

        for summary in self.candidates(keyword) {
            let Some(document) = self.document(&summary) else {
                continue;
            };

            let occurrences = locate(&document, &search);
            let Some(grouped) = group_locations(&occurrences) else {
                tracing::debug!(statute = %summary.name, "no qualifying location");
                continue;
            };

            let index = sentences.len() + 1;
            sentences.push(render_sentence(
                index,
                &document.name,
                &grouped,
                keyword,
                replacement,
            ));
        }

        if sentences.is_empty() {
            return vec![NO_TARGETS_WARNING.to_string()];
        }
        sentences
    }

    /// Render the matching passages of every statute in which `keyword`
    /// occurs, statutes with no visible output omitted.
    #[must_use]
    pub fn generate_highlights(&self, keyword: &str) -> Vec<StatuteHighlights> {
        let search = Keyword::new(keyword);
        let mut results = Vec::new();

        for summary in self.candidates(keyword) {
            let Some(document) = self.document(&summary) else {
                continue;
            };

            let passages = highlight_document(&document, &search);
            if passages.is_empty() {
                continue;
            }
            results.push(StatuteHighlights {
                name: document.name,
                passages,
            });
        }

        results
    }

    /// Candidate list, degraded to empty on provider failure.
    fn candidates(&self, keyword: &str) -> Vec<StatuteSummary> {
        match self.provider.fetch_candidates(keyword) {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!(error = %e, "candidate search failed");
                Vec::new()
            }
        }
    }

    /// One statute's document, `None` on failure or absence (skip).
    fn document(&self, summary: &StatuteSummary) -> Option<StatuteDocument> {
        match self.provider.fetch_document(summary) {
            Ok(Some(document)) => Some(document),
            Ok(None) => {
                tracing::warn!(statute = %summary.name, "document unavailable, skipping");
                None
            }
            Err(e) => {
                tracing::warn!(statute = %summary.name, error = %e, "document fetch failed, skipping");
                None
            }
        }
    }
}
