//! Keyword occurrence location.
//!
//! Walks a statute tree and reports every node whose text contains the
//! search term under whitespace-insensitive comparison. The comparison
//! strips all whitespace, interior included, from both sides: source
//! documents break phrases across lines and pad them with spaces freely,
//! and a term split as "담 보" must still match "담보".

use crate::numeral::is_numeric_label;
use crate::types::{Occurrence, OccurrenceKind, StatuteDocument};

/// A search keyword with its whitespace-stripped form precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    raw: String,
    stripped: String,
}

impl Keyword {
    /// Create a keyword from raw user input.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let stripped = strip_whitespace(&raw);
        Self { raw, stripped }
    }

    /// The keyword as the user typed it.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether the keyword is empty after stripping whitespace.
    ///
    /// An empty keyword matches nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stripped.is_empty()
    }

    /// Whether `text` contains this keyword under whitespace-insensitive
    /// comparison.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        !self.is_empty() && strip_whitespace(text).contains(&self.stripped)
    }

    /// The trimmed non-blank lines of a multi-line fragment that individually
    /// match this keyword, in source order.
    #[must_use]
    pub fn matched_lines<'a>(&self, fragment: &'a str) -> Vec<&'a str> {
        fragment
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && self.matches(line))
            .collect()
    }
}

/// Remove all whitespace, interior included.
fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Locate every occurrence of `keyword` in `document`, in document order.
///
/// Per article the title is tested before the body; paragraphs, items and
/// sub-item fragment lines follow in source order. Paragraph-body hits are
/// only emitted for paragraphs whose label is numeric, but non-numeric
/// (unlabeled) paragraphs are still descended into — their descendants carry
/// no paragraph label. Output is not deduplicated.
#[must_use]
pub fn locate(document: &StatuteDocument, keyword: &Keyword) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();
    if keyword.is_empty() {
        return occurrences;
    }

    for article in &document.articles {
        if keyword.matches(&article.title) {
            occurrences.push(Occurrence {
                article: article.label.clone(),
                paragraph: None,
                item: None,
                subitem: None,
                snippet: article.title.clone(),
                kind: OccurrenceKind::Title,
            });
        }
        if keyword.matches(&article.body) {
            occurrences.push(Occurrence {
                article: article.label.clone(),
                paragraph: None,
                item: None,
                subitem: None,
                snippet: article.body.clone(),
                kind: OccurrenceKind::ArticleBody,
            });
        }

        for paragraph in &article.paragraphs {
            let paragraph_label = if is_numeric_label(&paragraph.label) {
                Some(paragraph.label.clone())
            } else {
                None
            };

            if paragraph_label.is_some() && keyword.matches(&paragraph.body) {
                occurrences.push(Occurrence {
                    article: article.label.clone(),
                    paragraph: paragraph_label.clone(),
                    item: None,
                    subitem: None,
                    snippet: paragraph.body.clone(),
                    kind: OccurrenceKind::ParagraphBody,
                });
            }

            for item in &paragraph.items {
                if keyword.matches(&item.body) {
                    occurrences.push(Occurrence {
                        article: article.label.clone(),
                        paragraph: paragraph_label.clone(),
                        item: Some(item.label.clone()),
                        subitem: None,
                        snippet: item.body.clone(),
                        kind: OccurrenceKind::ItemBody,
                    });
                }

                for subitem in &item.subitems {
                    for fragment in &subitem.fragments {
                        for line in keyword.matched_lines(fragment) {
                            occurrences.push(Occurrence {
                                article: article.label.clone(),
                                paragraph: paragraph_label.clone(),
                                item: Some(item.label.clone()),
                                subitem: Some(subitem.label.clone()),
                                snippet: line.to_string(),
                                kind: OccurrenceKind::SubItemBody,
                            });
                        }
                    }
                }
            }
        }
    }

    occurrences
}
