//! Error types for the harvester.

use thiserror::Error;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvesterError {
    /// Empty search query.
    #[error("Search query must not be empty")]
    EmptyQuery,

    /// Invalid statute serial number format.
    #[error("Invalid statute serial number: '{0}'. Expected a decimal MST (e.g. 248613)")]
    InvalidMst(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to download the statute search listing.
    #[error("Failed to download search listing for '{query}' (page {page}): {source}")]
    SearchDownload {
        query: String,
        page: u32,
        #[source]
        source: Box<HarvesterError>,
    },

    /// Failed to download a statute document.
    #[error("Failed to download statute {mst}: {source}")]
    DocumentDownload {
        mst: String,
        #[source]
        source: Box<HarvesterError>,
    },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// JSON output serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// All retry attempts exhausted.
    #[error("Request failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },
}

impl From<HarvesterError> for gaejeong_engine::EngineError {
    fn from(err: HarvesterError) -> Self {
        gaejeong_engine::EngineError::provider(err)
    }
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvesterError>;
