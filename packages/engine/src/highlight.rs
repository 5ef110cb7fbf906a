//! Matching-passage rendering for search mode.
//!
//! Renders the passages of a statute that contain the keyword, with the
//! keyword visually emphasized and ancestor context forced visible: a match
//! inside an item pulls its paragraph's own text into the output even when
//! the paragraph text itself does not match, so the reader always sees the
//! citation context. Output is HTML-fragment text, one passage per article,
//! lines joined with `<br>`.

use crate::locate::Keyword;
use crate::types::{ParagraphNode, StatuteDocument};

/// Opening tag wrapped around emphasized keyword occurrences.
const EMPHASIS_OPEN: &str = "<span style='color:red'>";

/// Closing tag for emphasized keyword occurrences.
const EMPHASIS_CLOSE: &str = "</span>";

/// Indentation step per hierarchy level below the paragraph.
const INDENT: &str = "&nbsp;&nbsp;";

/// Line joiner within one article's passage.
const LINE_BREAK: &str = "<br>";

/// Emphasize exact occurrences of the raw keyword in `text`.
///
/// Occurrences split by whitespace in the source text are matched by the
/// locator but cannot be anchored to a contiguous substring, so they display
/// unmarked.
#[must_use]
pub fn emphasize(text: &str, keyword: &Keyword) -> String {
    if text.is_empty() || keyword.raw().is_empty() {
        return text.to_string();
    }
    text.replace(
        keyword.raw(),
        &format!("{EMPHASIS_OPEN}{}{EMPHASIS_CLOSE}", keyword.raw()),
    )
}

/// Render the matching passages of one statute, one entry per article with
/// visible output.
///
/// The first paragraph displayed for an article whose own body did not match
/// is merged onto the article's line, mirroring the legal-citation
/// convention of presenting 조 and first 항 together. A later paragraph whose
/// body text repeats the merged paragraph's is suppressed.
#[must_use]
pub fn highlight_document(document: &StatuteDocument, keyword: &Keyword) -> Vec<String> {
    let mut passages = Vec::new();
    if keyword.is_empty() {
        return passages;
    }

    for article in &document.articles {
        let article_matched = keyword.matches(&article.body);
        let mut lines: Vec<String> = Vec::new();
        if article_matched {
            lines.push(emphasize(&article.body, keyword));
        }

        let mut merged_paragraph_text: Option<String> = None;

        for paragraph in &article.paragraphs {
            let paragraph_lines = render_paragraph(paragraph, keyword);
            if paragraph_lines.is_empty() {
                continue;
            }

            if !article_matched && merged_paragraph_text.is_none() {
                let mut rest = paragraph_lines.into_iter();
                let first = rest.next().unwrap_or_default();
                lines.push(format!("{} {first}", emphasize(&article.body, keyword)));
                lines.extend(rest);
                merged_paragraph_text = Some(paragraph.body.trim().to_string());
            } else if merged_paragraph_text.as_deref() == Some(paragraph.body.trim()) {
                // Duplicate-content guard.
                continue;
            } else {
                lines.extend(paragraph_lines);
            }
        }

        if !lines.is_empty() {
            passages.push(lines.join(LINE_BREAK));
        }
    }

    passages
}

/// Render one paragraph's lines: its own body first, then indented item and
/// sub-item lines. Empty when neither the paragraph nor any descendant
/// matches.
fn render_paragraph(paragraph: &ParagraphNode, keyword: &Keyword) -> Vec<String> {
    let mut child_lines: Vec<String> = Vec::new();

    for item in &paragraph.items {
        let subitem_lines: Vec<String> = item
            .subitems
            .iter()
            .flat_map(|subitem| subitem.fragments.iter())
            .flat_map(|fragment| keyword.matched_lines(fragment))
            .map(|line| format!("{INDENT}{INDENT}{}", emphasize(line, keyword)))
            .collect();

        if keyword.matches(&item.body) || !subitem_lines.is_empty() {
            // The item line is shown even when only a sub-item matched.
            child_lines.push(format!("{INDENT}{}", emphasize(&item.body, keyword)));
            child_lines.extend(subitem_lines);
        }
    }

    if keyword.matches(&paragraph.body) || !child_lines.is_empty() {
        let mut lines = vec![emphasize(&paragraph.body, keyword)];
        lines.extend(child_lines);
        lines
    } else {
        Vec::new()
    }
}
