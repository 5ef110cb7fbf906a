//! Korean particle (조사) selection.
//!
//! Amendment sentences attach a particle to the quoted search and replacement
//! terms, and the correct form depends on whether the preceding syllable ends
//! in a final consonant (받침). Getting this wrong in a legal document is not
//! acceptable, so selection is a total function with a deterministic fallback
//! for non-Hangul input.

/// First code point of the precomposed Hangul syllable block (가).
const HANGUL_SYLLABLE_FIRST: u32 = 0xAC00;

/// Last code point of the precomposed Hangul syllable block (힣).
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// Number of final-consonant (종성) classes per syllable; class 0 means the
/// syllable has no final consonant.
const JONGSEONG_COUNT: u32 = 28;

/// Final-consonant class of ㄹ, which takes the short instrumental form.
const JONGSEONG_RIEUL: u32 = 8;

/// Particle kinds used by the amendment sentence template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Particle {
    /// Object marker: 을 / 를.
    Object,

    /// Instrumental marker: 으로 / 로.
    Instrumental,
}

/// Select the correct particle form for a word.
///
/// Inspects the final character of `word`. Within the Hangul syllable block
/// the final-consonant class decides the form; outside it (Latin letters,
/// digits, empty string) the with-final-consonant form is returned as a
/// deterministic default.
///
/// # Examples
/// ```
/// use gaejeong_engine::phonology::{particle, Particle};
///
/// assert_eq!(particle("학교", Particle::Object), "를");
/// assert_eq!(particle("법률", Particle::Object), "을");
/// assert_eq!(particle("도로", Particle::Instrumental), "로");
/// assert_eq!(particle("보증금", Particle::Instrumental), "으로");
/// ```
#[must_use]
pub fn particle(word: &str, kind: Particle) -> &'static str {
    match (kind, jongseong_class(word)) {
        (Particle::Object, Some(0)) => "를",
        (Particle::Object, _) => "을",
        (Particle::Instrumental, Some(0) | Some(JONGSEONG_RIEUL)) => "로",
        (Particle::Instrumental, _) => "으로",
    }
}

/// Final-consonant class of the last character of `word`.
///
/// Returns `None` when the word is empty or its last character lies outside
/// the precomposed Hangul syllable block; callers treat that the same as a
/// syllable with a final consonant.
fn jongseong_class(word: &str) -> Option<u32> {
    let last = word.chars().next_back()? as u32;
    if (HANGUL_SYLLABLE_FIRST..=HANGUL_SYLLABLE_LAST).contains(&last) {
        Some((last - HANGUL_SYLLABLE_FIRST) % JONGSEONG_COUNT)
    } else {
        None
    }
}
