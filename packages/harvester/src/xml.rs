//! XML utility functions for navigating the law.go.kr response trees.

use roxmltree::Node;
use unicode_normalization::UnicodeNormalization;

/// Find the first child element with the given tag name.
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == tag)
}

/// Find all child elements with the given tag name.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == tag)
}

/// Text content of the first child element with the given tag name, NFC
/// normalized and trimmed. Empty string when the child or its text is
/// absent — documents routinely omit levels and that must never fail.
pub fn child_text(node: Node<'_, '_>, tag: &str) -> String {
    find_child(node, tag).map(node_text).unwrap_or_default()
}

/// Full text content of a node, including nested elements, NFC normalized
/// and trimmed.
///
/// NFC matters for matching: decomposed Hangul jamo in the source would
/// never compare equal to the precomposed keyword the user typed.
pub fn node_text(node: Node<'_, '_>) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text.trim().nfc().collect()
}

fn collect_text(node: Node<'_, '_>, out: &mut String) {
    if let Some(t) = node.text() {
        out.push_str(t);
    }
    for child in node.children() {
        if child.is_element() {
            collect_text(child, out);
        }
        if let Some(tail) = child.tail() {
            out.push_str(tail);
        }
    }
}
