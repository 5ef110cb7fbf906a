//! Gaejeong Engine - Statute keyword location and amendment generation.
//!
//! This library locates occurrences of a search term inside hierarchically
//! structured Korean statutes (조 → 항 → 호 → 목) and produces either
//! legislative amendment sentences ("제3조제1항 중 \"담보\"를 \"보증\"으로
//! 한다") or matching passages with the term emphasized.
//!
//! The engine is pure computation over already-fetched documents: no I/O,
//! no shared mutable state, referentially transparent per statute. Document
//! retrieval sits behind the [`StatuteProvider`] trait.
//!
//! # Architecture
//!
//! - [`types`]: Statute tree model and occurrence records
//! - [`phonology`]: Korean particle (조사) selection
//! - [`numeral`]: Numeral label normalization across scripts
//! - [`locate`]: Whitespace-insensitive occurrence location
//! - [`grouping`]: Collapsing occurrences into minimal location phrases
//! - [`amendment`]: Amendment sentence rendering
//! - [`highlight`]: Matching-passage rendering with cascading visibility
//! - [`service`]: The run driver over a statute provider
//! - [`error`]: Error types and Result alias
//!
//! # Example
//!
//! ```ignore
//! use gaejeong_engine::StatuteSearchService;
//!
//! let service = StatuteSearchService::new(provider);
//! for sentence in service.generate_amendments("담보", "보증") {
//!     println!("{sentence}");
//! }
//! ```

pub mod amendment;
pub mod error;
pub mod grouping;
pub mod highlight;
pub mod locate;
pub mod numeral;
pub mod phonology;
pub mod service;
pub mod types;

// Re-export commonly used items
pub use amendment::{ordinal_marker, render_sentence, NO_TARGETS_WARNING};
pub use error::{EngineError, Result};
pub use grouping::{group_locations, GroupedLocations};
pub use highlight::highlight_document;
pub use locate::{locate, Keyword};
pub use phonology::{particle, Particle};
pub use service::{StatuteHighlights, StatuteProvider, StatuteSearchService};
pub use types::{
    ArticleNode, ItemNode, Occurrence, OccurrenceKind, ParagraphNode, StatuteDocument,
    StatuteSummary, SubItemNode,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
