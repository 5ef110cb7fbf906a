//! Statute document retrieval and parsing (DRF/lawService.do).
//!
//! Converts the article-unit XML (조문단위) of a statute into the engine's
//! tree model. Every element is optional: legal documents routinely omit
//! levels, so absent children become empty strings, never errors.

use reqwest::blocking::Client;
use roxmltree::{Document, Node};

use gaejeong_engine::numeral::{normalize_label, strip_label_punctuation};
use gaejeong_engine::{ArticleNode, ItemNode, ParagraphNode, StatuteDocument, SubItemNode};

use crate::config::{validate_mst, ApiConfig};
use crate::error::Result;
use crate::http::fetch_text;
use crate::xml::{child_text, find_children, node_text};

/// Fetch and parse one statute's document.
///
/// A statute that cannot be downloaded yields `Ok(None)` — the run treats
/// it as "skip this statute", not as a fatal error. A response that is not
/// valid XML is an error.
pub fn fetch_statute_document(
    client: &Client,
    config: &ApiConfig,
    mst: &str,
    name: &str,
) -> Result<Option<StatuteDocument>> {
    validate_mst(mst)?;

    let url = config.document_url(mst);
    let xml = match fetch_text(client, &url) {
        Ok(xml) => xml,
        Err(e) => {
            tracing::warn!(mst, statute = name, error = %e, "Statute download failed");
            return Ok(None);
        }
    };

    Ok(Some(parse_statute_xml(&xml, mst, name)?))
}

/// Parse a statute service response into the engine tree model.
pub fn parse_statute_xml(xml: &str, mst: &str, name: &str) -> Result<StatuteDocument> {
    let doc = Document::parse(xml)?;

    let articles = doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "조문단위")
        .filter_map(parse_article)
        .collect();

    Ok(StatuteDocument::new(mst, name).with_articles(articles))
}

/// Parse one article unit. Units without an article number are skipped.
fn parse_article(node: Node<'_, '_>) -> Option<ArticleNode> {
    let label = child_text(node, "조번호");
    if label.is_empty() {
        tracing::debug!("Article unit without number, skipping");
        return None;
    }

    let paragraphs = find_children(node, "항").map(parse_paragraph).collect();

    Some(
        ArticleNode::new(label)
            .with_title(child_text(node, "조문제목"))
            .with_body(child_text(node, "조문내용"))
            .with_paragraphs(paragraphs),
    )
}

fn parse_paragraph(node: Node<'_, '_>) -> ParagraphNode {
    let label = normalize_label(&child_text(node, "항번호"));
    let items = find_children(node, "호").map(parse_item).collect();

    ParagraphNode::new(label)
        .with_body(child_text(node, "항내용"))
        .with_items(items)
}

fn parse_item(node: Node<'_, '_>) -> ItemNode {
    let label = strip_label_punctuation(&child_text(node, "호번호")).to_string();
    let subitems = find_children(node, "목").map(parse_subitem).collect();

    ItemNode::new(label)
        .with_body(child_text(node, "호내용"))
        .with_subitems(subitems)
}

fn parse_subitem(node: Node<'_, '_>) -> SubItemNode {
    let label = strip_label_punctuation(&child_text(node, "목번호")).to_string();
    let fragments = find_children(node, "목내용")
        .map(node_text)
        .filter(|text| !text.is_empty())
        .collect();

    SubItemNode::new(label).with_fragments(fragments)
}
