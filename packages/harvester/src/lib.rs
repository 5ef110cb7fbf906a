//! Gaejeong Harvester - Fetch Korean legislation from the law.go.kr open API.
//!
//! This crate implements the document-retrieval side of the gaejeong
//! toolchain: searching the statute database for a keyword, downloading each
//! candidate statute's article tree, and exposing the results to the engine
//! through its [`StatuteProvider`](gaejeong_engine::StatuteProvider) seam.
//!
//! # Example
//!
//! ```
//! use gaejeong_harvester::config::{validate_mst, ApiConfig};
//!
//! assert!(validate_mst("248613").is_ok());
//! let config = ApiConfig::new("chetera");
//! assert!(config.document_url("248613").contains("MST=248613"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: API configuration, credential injection and URL building
//! - [`error`]: Error types and Result alias
//! - [`http`]: Blocking HTTP client with retry logic
//! - [`xml`]: XML navigation utilities
//! - [`search`]: Paginated candidate statute search
//! - [`document`]: Statute document download and tree parsing
//! - [`provider`]: `StatuteProvider` implementation over the API
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod http;
pub mod provider;
pub mod search;
pub mod xml;

// Re-export commonly used items
pub use config::{validate_mst, validate_query, ApiConfig};
pub use document::{fetch_statute_document, parse_statute_xml};
pub use error::{HarvesterError, Result};
pub use provider::ApiStatuteProvider;
pub use search::fetch_statute_list;
