//! Amendment sentence rendering.
//!
//! Combines a statute name, grouped location phrase and the search /
//! replacement terms into one legislative amendment sentence:
//!
//! ```text
//! ① 민법 일부를 다음과 같이 개정한다. 제3조제1항 중 "담보"를 "보증"으로 한다.
//! ```

use crate::grouping::GroupedLocations;
use crate::phonology::{particle, Particle};

/// Warning emitted when an entire run produced no qualifying location.
pub const NO_TARGETS_WARNING: &str = "⚠️ 개정 대상 조문이 없습니다.";

/// First code point of the circled-digit block (①).
const CIRCLED_ONE: u32 = 0x2460;

/// Largest index with a circled-digit glyph.
const CIRCLED_MAX: usize = 20;

/// Ordinal marker for a sentence index: ①-⑳ for 1..=20, the plain decimal
/// string beyond.
#[must_use]
pub fn ordinal_marker(index: usize) -> String {
    if (1..=CIRCLED_MAX).contains(&index) {
        // Index is within the circled-digit block, so the code point is valid.
        let cp = CIRCLED_ONE + (index as u32) - 1;
        char::from_u32(cp).map_or_else(|| index.to_string(), String::from)
    } else {
        index.to_string()
    }
}

/// Render one amendment sentence.
///
/// The "각각" (respectively) qualifier is inserted before the replacement
/// clause whenever the statute has more than one location; particles follow
/// the final-syllable phonology of the quoted terms.
#[must_use]
pub fn render_sentence(
    index: usize,
    statute_name: &str,
    grouped: &GroupedLocations,
    keyword: &str,
    replacement: &str,
) -> String {
    let ordinal = ordinal_marker(index);
    let object = particle(keyword, Particle::Object);
    let instrumental = particle(replacement, Particle::Instrumental);
    let qualifier = if grouped.location_count > 1 {
        "각각 "
    } else {
        ""
    };

    format!(
        "{ordinal} {statute_name} 일부를 다음과 같이 개정한다. {phrase} 중 \"{keyword}\"{object} {qualifier}\"{replacement}\"{instrumental} 한다.",
        phrase = grouped.phrase,
    )
}
