//! Numeral label normalization.
//!
//! Source documents label paragraphs and items in mixed numeral scripts:
//! circled digits (①), fullwidth digits (１), Sino-Korean numerals (십일)
//! written in CJK ideographs, or plain ASCII. Labels are normalized to a
//! canonical decimal string so that hierarchy positions compare and render
//! consistently. Unrecognized labels pass through unchanged.

/// Normalize a label to its canonical base-10 string form.
///
/// ASCII digit strings pass through with leading zeros stripped; enclosed
/// numerals, fullwidth digits and CJK numerals up to 99 are converted via
/// their numeric value. If the text cannot be interpreted as a numeral it is
/// returned unchanged — this function never fails.
///
/// # Examples
/// ```
/// use gaejeong_engine::numeral::normalize_label;
///
/// assert_eq!(normalize_label("①"), "1");
/// assert_eq!(normalize_label("０３"), "3");
/// assert_eq!(normalize_label("二十三"), "23");
/// assert_eq!(normalize_label("가"), "가");
/// ```
#[must_use]
pub fn normalize_label(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return text.to_string();
    }

    match interpret_numeral(trimmed) {
        Some(value) => value.to_string(),
        None => text.to_string(),
    }
}

/// Whether a label normalizes to a numeral.
///
/// Non-numeric paragraph labels mark unlabeled paragraphs, which are excluded
/// from paragraph-level phrase construction.
#[must_use]
pub fn is_numeric_label(text: &str) -> bool {
    interpret_numeral(text.trim()).is_some()
}

/// Strip trailing label punctuation and surrounding whitespace.
///
/// Item and sub-item numbers arrive with list punctuation attached
/// ("1." / "가." / "2)").
#[must_use]
pub fn strip_label_punctuation(text: &str) -> &str {
    text.trim().trim_end_matches(['.', ')']).trim_end()
}

/// Interpret a trimmed string as a numeral, if possible.
fn interpret_numeral(text: &str) -> Option<u64> {
    if text.is_empty() {
        return None;
    }

    if text.chars().all(|c| c.is_ascii_digit()) {
        return text.parse().ok();
    }

    // Single enclosed numerals: ①-⑳, ⑴-⒇, ⒈-⒛
    let mut chars = text.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(value) = enclosed_value(c) {
            return Some(value);
        }
    }

    // Fullwidth digit strings: ０-９
    if text.chars().all(is_fullwidth_digit) {
        let decimal: String = text
            .chars()
            .filter_map(|c| char::from_u32(u32::from(c) - 0xFF10 + u32::from(b'0')))
            .collect();
        return decimal.parse().ok();
    }

    cjk_value(text)
}

/// Numeric value of a single enclosed-alphanumeric character.
fn enclosed_value(c: char) -> Option<u64> {
    let cp = u32::from(c);
    match cp {
        // ① .. ⑳
        0x2460..=0x2473 => Some(u64::from(cp - 0x2460 + 1)),
        // ⑴ .. ⒇
        0x2474..=0x2487 => Some(u64::from(cp - 0x2474 + 1)),
        // ⒈ .. ⒛
        0x2488..=0x249B => Some(u64::from(cp - 0x2488 + 1)),
        _ => None,
    }
}

/// Whether a character is a fullwidth digit (０-９).
fn is_fullwidth_digit(c: char) -> bool {
    ('\u{FF10}'..='\u{FF19}').contains(&c)
}

/// Value of a CJK numeral string up to 99 (e.g. 三, 十, 二十三).
fn cjk_value(text: &str) -> Option<u64> {
    let mut tens: Option<u64> = None;
    let mut units: Option<u64> = None;
    let mut seen_ten = false;

    for c in text.chars() {
        if c == '十' {
            if seen_ten {
                return None;
            }
            seen_ten = true;
            tens = Some(units.take().unwrap_or(1));
        } else {
            let digit = cjk_digit(c)?;
            if units.is_some() {
                return None;
            }
            units = Some(digit);
        }
    }

    if !seen_ten {
        return units;
    }
    Some(tens.unwrap_or(1) * 10 + units.unwrap_or(0))
}

/// Value of a single CJK digit character.
fn cjk_digit(c: char) -> Option<u64> {
    match c {
        '〇' | '零' => Some(0),
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(normalize_label("1"), "1");
        assert_eq!(normalize_label("12"), "12");
        assert_eq!(normalize_label(" 7 "), "7");
    }

    #[test]
    fn test_leading_zeros_stripped() {
        assert_eq!(normalize_label("01"), "1");
        assert_eq!(normalize_label("003"), "3");
    }

    #[test]
    fn test_circled_digits() {
        assert_eq!(normalize_label("①"), "1");
        assert_eq!(normalize_label("②"), "2");
        assert_eq!(normalize_label("⑳"), "20");
    }

    #[test]
    fn test_parenthesized_and_dotted_digits() {
        assert_eq!(normalize_label("⑴"), "1");
        assert_eq!(normalize_label("⒇"), "20");
        assert_eq!(normalize_label("⒈"), "1");
        assert_eq!(normalize_label("⒛"), "20");
    }

    #[test]
    fn test_fullwidth_digits() {
        assert_eq!(normalize_label("１"), "1");
        assert_eq!(normalize_label("１２"), "12");
        assert_eq!(normalize_label("０３"), "3");
    }

    #[test]
    fn test_cjk_numerals() {
        assert_eq!(normalize_label("一"), "1");
        assert_eq!(normalize_label("九"), "9");
        assert_eq!(normalize_label("十"), "10");
        assert_eq!(normalize_label("十一"), "11");
        assert_eq!(normalize_label("二十"), "20");
        assert_eq!(normalize_label("二十三"), "23");
    }

    #[test]
    fn test_unrecognized_returns_original() {
        assert_eq!(normalize_label("가"), "가");
        assert_eq!(normalize_label("단서"), "단서");
        assert_eq!(normalize_label(""), "");
        assert_eq!(normalize_label("1a"), "1a");
        assert_eq!(normalize_label("十十"), "十十");
    }

    #[test]
    fn test_is_numeric_label() {
        assert!(is_numeric_label("1"));
        assert!(is_numeric_label("①"));
        assert!(is_numeric_label("二十三"));
        assert!(!is_numeric_label("가"));
        assert!(!is_numeric_label(""));
        assert!(!is_numeric_label("단서"));
    }

    #[test]
    fn test_strip_label_punctuation() {
        assert_eq!(strip_label_punctuation("1."), "1");
        assert_eq!(strip_label_punctuation("가."), "가");
        assert_eq!(strip_label_punctuation("2)"), "2");
        assert_eq!(strip_label_punctuation(" 3. "), "3");
        assert_eq!(strip_label_punctuation("10"), "10");
    }
}
