//! Core data types for the engine.
//!
//! These types represent Korean statutes (법령) and their hierarchical
//! components: articles (조), paragraphs (항), items (호) and sub-items (목).
//! Documents are immutable once parsed; the engine never mutates them.

use serde::{Deserialize, Serialize};

/// A candidate statute returned by a keyword search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatuteSummary {
    /// Opaque statute serial number (법령일련번호, MST).
    pub id: String,

    /// Display name (법령명).
    pub name: String,
}

impl StatuteSummary {
    /// Create a new statute summary.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A complete statute document with its article tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatuteDocument {
    /// Opaque statute serial number (법령일련번호, MST).
    pub id: String,

    /// Display name (법령명).
    pub name: String,

    /// Articles in document order.
    pub articles: Vec<ArticleNode>,
}

impl StatuteDocument {
    /// Create a new statute document without articles.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            articles: Vec::new(),
        }
    }

    /// Set the articles.
    #[must_use]
    pub fn with_articles(mut self, articles: Vec<ArticleNode>) -> Self {
        self.articles = articles;
        self
    }

    /// Append an article.
    pub fn add_article(&mut self, article: ArticleNode) {
        self.articles.push(article);
    }
}

/// An article (조) node.
///
/// Legal documents routinely omit levels: an article may have no title,
/// no body text, or no paragraphs at all. Absent parts are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleNode {
    /// Article number (조번호, e.g. "3").
    pub label: String,

    /// Article title (조문제목, may be empty).
    pub title: String,

    /// Article body text (조문내용, may be empty).
    pub body: String,

    /// Paragraphs in document order (may be empty).
    pub paragraphs: Vec<ParagraphNode>,
}

impl ArticleNode {
    /// Create a new article with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            title: String::new(),
            body: String::new(),
            paragraphs: Vec::new(),
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the body text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the paragraphs.
    #[must_use]
    pub fn with_paragraphs(mut self, paragraphs: Vec<ParagraphNode>) -> Self {
        self.paragraphs = paragraphs;
        self
    }
}

/// A paragraph (항) node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphNode {
    /// Paragraph number (항번호), normalized to a decimal string where
    /// possible. A non-numeric label marks an unlabeled paragraph, which is
    /// excluded from paragraph-level phrase construction but still descended
    /// into.
    pub label: String,

    /// Paragraph body text (항내용, may be empty).
    pub body: String,

    /// Items in document order (may be empty).
    pub items: Vec<ItemNode>,
}

impl ParagraphNode {
    /// Create a new paragraph with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: String::new(),
            items: Vec::new(),
        }
    }

    /// Set the body text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the items.
    #[must_use]
    pub fn with_items(mut self, items: Vec<ItemNode>) -> Self {
        self.items = items;
        self
    }
}

/// An item (호) node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemNode {
    /// Item number (호번호) with trailing punctuation stripped (e.g. "1").
    pub label: String,

    /// Item body text (호내용, may be empty).
    pub body: String,

    /// Sub-items in document order (may be empty).
    pub subitems: Vec<SubItemNode>,
}

impl ItemNode {
    /// Create a new item with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: String::new(),
            subitems: Vec::new(),
        }
    }

    /// Set the body text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the sub-items.
    #[must_use]
    pub fn with_subitems(mut self, subitems: Vec<SubItemNode>) -> Self {
        self.subitems = subitems;
        self
    }
}

/// A sub-item (목) node.
///
/// A sub-item may carry multiple text fragments (목내용 blocks), each itself
/// possibly multi-line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItemNode {
    /// Sub-item label (목번호) with trailing punctuation stripped (e.g. "가").
    pub label: String,

    /// Text fragments in document order.
    pub fragments: Vec<String>,
}

impl SubItemNode {
    /// Create a new sub-item with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fragments: Vec::new(),
        }
    }

    /// Set the text fragments.
    #[must_use]
    pub fn with_fragments(mut self, fragments: Vec<String>) -> Self {
        self.fragments = fragments;
        self
    }
}

/// Hierarchy level at which a keyword occurrence was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccurrenceKind {
    /// Article title (조문제목).
    Title,

    /// Article body text (조문내용).
    ArticleBody,

    /// Paragraph body text (항내용).
    ParagraphBody,

    /// Item body text (호내용).
    ItemBody,

    /// A line of a sub-item text fragment (목내용).
    SubItemBody,
}

impl OccurrenceKind {
    /// Get the string value for JSON output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::ArticleBody => "article_body",
            Self::ParagraphBody => "paragraph_body",
            Self::ItemBody => "item_body",
            Self::SubItemBody => "subitem_body",
        }
    }
}

/// A single keyword occurrence, tagged with the full label path of the node
/// it was found in.
///
/// Occurrences are produced in document order and are not deduplicated by
/// the locator; grouping and deduplication policy is mode-specific.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Article number.
    pub article: String,

    /// Paragraph number, absent for article-level hits and for descendants
    /// of unlabeled paragraphs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<String>,

    /// Item number, absent above item level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,

    /// Sub-item label, absent above sub-item level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subitem: Option<String>,

    /// The matched text snippet.
    pub snippet: String,

    /// Hierarchy level of the match.
    pub kind: OccurrenceKind,
}

impl Occurrence {
    /// The location tuple used for deduplication, ignoring snippet and kind.
    #[must_use]
    pub fn location_key(&self) -> (&str, Option<&str>, Option<&str>, Option<&str>) {
        (
            self.article.as_str(),
            self.paragraph.as_deref(),
            self.item.as_deref(),
            self.subitem.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_builder() {
        let mut doc = StatuteDocument::new("248613", "민법");
        assert_eq!(doc.id, "248613");
        assert_eq!(doc.name, "민법");
        assert!(doc.articles.is_empty());

        doc.add_article(ArticleNode::new("1").with_body("본문"));
        assert_eq!(doc.articles.len(), 1);
    }

    #[test]
    fn test_article_builder() {
        let article = ArticleNode::new("3")
            .with_title("담보책임")
            .with_body("제3조(담보책임) 본문")
            .with_paragraphs(vec![ParagraphNode::new("1").with_body("항 본문")]);

        assert_eq!(article.label, "3");
        assert_eq!(article.title, "담보책임");
        assert_eq!(article.paragraphs.len(), 1);
    }

    #[test]
    fn test_subitem_fragments() {
        let subitem = SubItemNode::new("가")
            .with_fragments(vec!["첫 줄".to_string(), "둘째 줄\n셋째 줄".to_string()]);
        assert_eq!(subitem.fragments.len(), 2);
    }

    #[test]
    fn test_occurrence_location_key() {
        let occ = Occurrence {
            article: "5".to_string(),
            paragraph: Some("2".to_string()),
            item: Some("1".to_string()),
            subitem: None,
            snippet: "담보를 제공한다".to_string(),
            kind: OccurrenceKind::ItemBody,
        };
        assert_eq!(occ.location_key(), ("5", Some("2"), Some("1"), None));
    }

    #[test]
    fn test_occurrence_kind_as_str() {
        assert_eq!(OccurrenceKind::Title.as_str(), "title");
        assert_eq!(OccurrenceKind::SubItemBody.as_str(), "subitem_body");
    }

    #[test]
    fn test_occurrence_serialization_skips_absent_levels() {
        let occ = Occurrence {
            article: "3".to_string(),
            paragraph: None,
            item: None,
            subitem: None,
            snippet: "본문".to_string(),
            kind: OccurrenceKind::ArticleBody,
        };
        let json = serde_json::to_string(&occ).expect("serializes");
        assert!(!json.contains("paragraph"));
        assert!(json.contains("\"article_body\""));
    }
}
