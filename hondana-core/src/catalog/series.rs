//! Series-name derivation from a book title

use regex::Regex;
use std::sync::OnceLock;

fn volume_marker() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // One trailing volume marker: 第3巻 / 3巻, a parenthesized number
    // (ASCII or full-width parens), a circled digit, or a bare number.
    PATTERN.get_or_init(|| {
        Regex::new(r"\s*(第?[0-9]+巻|[（(][0-9]+[）)]|[①-⑳]|[0-9]+)\s*$").unwrap()
    })
}

/// Strip a trailing volume marker from a title to get its series name.
///
/// Idempotent: a title with no trailing marker comes back unchanged apart
/// from surrounding whitespace.
pub fn derive_series_name(title: &str) -> String {
    volume_marker().replace(title, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_kanji_volume_marker() {
        assert_eq!(derive_series_name("サンプル 第3巻"), "サンプル");
        assert_eq!(derive_series_name("サンプル 3巻"), "サンプル");
    }

    #[test]
    fn test_strips_parenthesized_number() {
        assert_eq!(derive_series_name("サンプル(3)"), "サンプル");
        assert_eq!(derive_series_name("サンプル（12）"), "サンプル");
    }

    #[test]
    fn test_strips_circled_digit() {
        assert_eq!(derive_series_name("サンプル⑫"), "サンプル");
    }

    #[test]
    fn test_strips_bare_trailing_number() {
        assert_eq!(derive_series_name("Title 12"), "Title");
    }

    #[test]
    fn test_unmarked_title_is_unchanged() {
        assert_eq!(derive_series_name("Title"), "Title");
        assert_eq!(derive_series_name("  Title  "), "Title");
    }

    #[test]
    fn test_idempotent() {
        let once = derive_series_name("Title(12)");
        assert_eq!(derive_series_name(&once), once);
    }

    #[test]
    fn test_number_inside_title_is_kept() {
        assert_eq!(derive_series_name("2001年宇宙の旅"), "2001年宇宙の旅");
    }
}
