//! Location grouping for amendment sentences.
//!
//! Collapses the occurrence sequence of one statute into the minimal
//! natural-language enumeration used by Korean legislative drafting
//! convention: sibling item-level hits under one paragraph are compressed
//! under a single paragraph number ("제5조제2항제1호ㆍ제3호"), articles are
//! joined with ", " and a final " 및 ", and title matches render as
//! "제N조의 제목". Ordering always follows first-seen document order.

use serde::Serialize;

use crate::types::{Occurrence, OccurrenceKind};

/// Joiner between compressed sibling locations and between an article's
/// phrases.
const MIDDLE_DOT: &str = "ㆍ";

/// The grouped location phrase for one statute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedLocations {
    /// The rendered location phrase, e.g. "제3조제1항 및 제5조제2항제1호ㆍ제3호".
    pub phrase: String,

    /// Number of deduplicated locations, driving the "각각" plural qualifier.
    pub location_count: usize,
}

/// A deduplicated body location below article level.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BodyLocation {
    paragraph: Option<String>,
    item: Option<String>,
    subitem: Option<String>,
}

impl BodyLocation {
    /// The phrase suffix below paragraph level ("제1호", "제2호가목"), empty
    /// for bare article- or paragraph-level hits.
    fn suffix(&self) -> String {
        let mut suffix = String::new();
        if let Some(item) = &self.item {
            suffix.push_str(&format!("제{item}호"));
        }
        if let Some(subitem) = &self.subitem {
            suffix.push_str(&format!("{subitem}목"));
        }
        suffix
    }
}

/// Occurrences of one article, split into title and body entries.
#[derive(Debug)]
struct ArticleGroup {
    label: String,
    has_title: bool,
    body: Vec<BodyLocation>,
}

/// Group a statute's occurrences into a single location phrase.
///
/// Returns `None` when no occurrence qualifies (the statute is then skipped
/// by the caller). Duplicate (article, paragraph, item, sub-item) tuples are
/// collapsed, first-seen order preserved throughout.
#[must_use]
pub fn group_locations(occurrences: &[Occurrence]) -> Option<GroupedLocations> {
    let groups = collect_groups(occurrences);
    if groups.is_empty() {
        return None;
    }

    let location_count = groups
        .iter()
        .map(|g| g.body.len() + usize::from(g.has_title))
        .sum();

    let article_phrases: Vec<String> = groups.iter().map(render_article).collect();
    let phrase = join_articles(&article_phrases);

    Some(GroupedLocations {
        phrase,
        location_count,
    })
}

/// Collect per-article groups with deduplicated body tuples.
fn collect_groups(occurrences: &[Occurrence]) -> Vec<ArticleGroup> {
    let mut groups: Vec<ArticleGroup> = Vec::new();

    for occurrence in occurrences {
        let position = groups.iter().position(|g| g.label == occurrence.article);
        let group = match position {
            Some(index) => &mut groups[index],
            None => {
                groups.push(ArticleGroup {
                    label: occurrence.article.clone(),
                    has_title: false,
                    body: Vec::new(),
                });
                // Just pushed, so the last element exists.
                let last = groups.len() - 1;
                &mut groups[last]
            }
        };

        if occurrence.kind == OccurrenceKind::Title {
            group.has_title = true;
            continue;
        }

        let location = BodyLocation {
            paragraph: occurrence.paragraph.clone(),
            item: occurrence.item.clone(),
            subitem: occurrence.subitem.clone(),
        };
        if !group.body.contains(&location) {
            group.body.push(location);
        }
    }

    groups
}

/// Render one article's phrase: the title phrase (if any) and the body
/// phrases joined with the middle dot.
fn render_article(group: &ArticleGroup) -> String {
    let mut phrases: Vec<String> = Vec::new();

    if group.has_title {
        phrases.push(format!("제{}조의 제목", group.label));
    }
    phrases.extend(render_body(&group.label, &group.body));

    phrases.join(MIDDLE_DOT)
}

/// Render an article's body locations, compressing sibling hits under a
/// shared paragraph prefix where possible.
fn render_body(article: &str, locations: &[BodyLocation]) -> Vec<String> {
    // Group by paragraph label, first-seen order. Locations without a
    // paragraph label (article-level hits, descendants of unlabeled
    // paragraphs) form their own group.
    let mut paragraph_groups: Vec<(Option<&str>, Vec<&BodyLocation>)> = Vec::new();
    for location in locations {
        let key = location.paragraph.as_deref();
        match paragraph_groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(location),
            None => paragraph_groups.push((key, vec![location])),
        }
    }

    let mut phrases = Vec::new();
    for (paragraph, members) in paragraph_groups {
        let mut prefix = format!("제{article}조");
        if let Some(paragraph) = paragraph {
            prefix.push_str(&format!("제{paragraph}항"));
        }

        let suffixes: Vec<String> = members.iter().map(|m| m.suffix()).collect();
        if suffixes.iter().all(|s| !s.is_empty()) {
            // Shared-prefix compression: the paragraph number is stated once.
            phrases.push(format!("{prefix}{}", suffixes.join(MIDDLE_DOT)));
        } else {
            // A bare paragraph-level hit in the group disables compression.
            for suffix in suffixes {
                phrases.push(format!("{prefix}{suffix}"));
            }
        }
    }

    phrases
}

/// Join article phrases with ", " and the Korean list conjunction " 및 "
/// before the last.
fn join_articles(phrases: &[String]) -> String {
    match phrases {
        [] => String::new(),
        [single] => single.clone(),
        [head @ .., last] => format!("{} 및 {last}", head.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn occurrence(
        article: &str,
        paragraph: Option<&str>,
        item: Option<&str>,
        subitem: Option<&str>,
        kind: OccurrenceKind,
    ) -> Occurrence {
        Occurrence {
            article: article.to_string(),
            paragraph: paragraph.map(String::from),
            item: item.map(String::from),
            subitem: subitem.map(String::from),
            snippet: String::new(),
            kind,
        }
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert_eq!(group_locations(&[]), None);
    }

    #[test]
    fn test_single_paragraph_hit() {
        let grouped = group_locations(&[occurrence(
            "3",
            Some("1"),
            None,
            None,
            OccurrenceKind::ParagraphBody,
        )])
        .expect("grouped");

        assert_eq!(grouped.phrase, "제3조제1항");
        assert_eq!(grouped.location_count, 1);
    }

    #[test]
    fn test_article_body_hit() {
        let grouped =
            group_locations(&[occurrence("3", None, None, None, OccurrenceKind::ArticleBody)])
                .expect("grouped");

        assert_eq!(grouped.phrase, "제3조");
    }

    #[test]
    fn test_sibling_items_compressed_under_one_paragraph() {
        let grouped = group_locations(&[
            occurrence("5", Some("2"), Some("1"), None, OccurrenceKind::ItemBody),
            occurrence("5", Some("2"), Some("3"), None, OccurrenceKind::ItemBody),
        ])
        .expect("grouped");

        // The paragraph number must render exactly once.
        assert_eq!(grouped.phrase, "제5조제2항제1호ㆍ제3호");
        assert_eq!(grouped.location_count, 2);
    }

    #[test]
    fn test_bare_paragraph_hit_disables_compression() {
        let grouped = group_locations(&[
            occurrence("5", Some("2"), None, None, OccurrenceKind::ParagraphBody),
            occurrence("5", Some("2"), Some("1"), None, OccurrenceKind::ItemBody),
        ])
        .expect("grouped");

        assert_eq!(grouped.phrase, "제5조제2항ㆍ제5조제2항제1호");
        assert_eq!(grouped.location_count, 2);
    }

    #[test]
    fn test_subitem_suffix_rendered_after_item() {
        let grouped = group_locations(&[occurrence(
            "9",
            Some("1"),
            Some("2"),
            Some("가"),
            OccurrenceKind::SubItemBody,
        )])
        .expect("grouped");

        assert_eq!(grouped.phrase, "제9조제1항제2호가목");
    }

    #[test]
    fn test_items_without_paragraph_compress_under_article() {
        // Items under an unlabeled paragraph carry no paragraph label; the
        // shared prefix is the bare article.
        let grouped = group_locations(&[
            occurrence("7", None, Some("1"), None, OccurrenceKind::ItemBody),
            occurrence("7", None, Some("2"), None, OccurrenceKind::ItemBody),
        ])
        .expect("grouped");

        assert_eq!(grouped.phrase, "제7조제1호ㆍ제2호");
    }

    #[test]
    fn test_duplicate_tuples_deduplicated() {
        let grouped = group_locations(&[
            occurrence("3", Some("1"), None, None, OccurrenceKind::ParagraphBody),
            occurrence("3", Some("1"), None, None, OccurrenceKind::ParagraphBody),
        ])
        .expect("grouped");

        assert_eq!(grouped.phrase, "제3조제1항");
        assert_eq!(grouped.location_count, 1);
    }

    #[test]
    fn test_two_articles_joined_with_conjunction() {
        let grouped = group_locations(&[
            occurrence("3", Some("1"), None, None, OccurrenceKind::ParagraphBody),
            occurrence("5", Some("2"), None, None, OccurrenceKind::ParagraphBody),
        ])
        .expect("grouped");

        assert_eq!(grouped.phrase, "제3조제1항 및 제5조제2항");
    }

    #[test]
    fn test_three_articles_comma_then_conjunction() {
        let grouped = group_locations(&[
            occurrence("1", None, None, None, OccurrenceKind::ArticleBody),
            occurrence("2", None, None, None, OccurrenceKind::ArticleBody),
            occurrence("3", None, None, None, OccurrenceKind::ArticleBody),
        ])
        .expect("grouped");

        assert_eq!(grouped.phrase, "제1조, 제2조 및 제3조");
    }

    #[test]
    fn test_title_only_article() {
        let grouped =
            group_locations(&[occurrence("4", None, None, None, OccurrenceKind::Title)])
                .expect("grouped");

        assert_eq!(grouped.phrase, "제4조의 제목");
        assert_eq!(grouped.location_count, 1);
    }

    #[test]
    fn test_title_prefixed_to_body_phrase() {
        let grouped = group_locations(&[
            occurrence("4", None, None, None, OccurrenceKind::Title),
            occurrence("4", None, None, None, OccurrenceKind::ArticleBody),
        ])
        .expect("grouped");

        assert_eq!(grouped.phrase, "제4조의 제목ㆍ제4조");
        assert_eq!(grouped.location_count, 2);
    }

    #[test]
    fn test_first_seen_order_never_sorted() {
        let grouped = group_locations(&[
            occurrence("10", Some("2"), None, None, OccurrenceKind::ParagraphBody),
            occurrence("2", Some("1"), None, None, OccurrenceKind::ParagraphBody),
        ])
        .expect("grouped");

        assert_eq!(grouped.phrase, "제10조제2항 및 제2조제1항");
    }

    #[test]
    fn test_paragraph_groups_within_article_keep_order() {
        let grouped = group_locations(&[
            occurrence("6", Some("3"), Some("1"), None, OccurrenceKind::ItemBody),
            occurrence("6", Some("1"), None, None, OccurrenceKind::ParagraphBody),
            occurrence("6", Some("3"), Some("2"), None, OccurrenceKind::ItemBody),
        ])
        .expect("grouped");

        assert_eq!(grouped.phrase, "제6조제3항제1호ㆍ제2호ㆍ제6조제1항");
    }
}
