//! Locale-aware string ordering for display names.
//!
//! Approximates the root Unicode collation the host's UI sorts with:
//! letters compare case- and accent-insensitively first, whitespace and
//! punctuation sort before digits, digits before letters. Accents break ties
//! before case does, and lowercase sorts before uppercase.
//!
//! ASCII punctuation and symbols follow the root collation's relative order.
//! Other non-alphanumeric characters sort after them by code point.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two display strings the way a user expects them listed.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

/// ASCII punctuation, then symbols, in root collation order.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

fn primary_weight(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        (0, u32::from(c))
    } else if c.is_alphabetic() {
        (3, u32::from(c))
    } else if c.is_numeric() {
        (2, u32::from(c))
    } else {
        let rank = PUNCTUATION_ORDER
            .chars()
            .position(|p| p == c)
            .and_then(|rank| u32::try_from(rank).ok());
        match rank {
            Some(rank) => (1, rank),
            None => (1, 0x100 + u32::from(c)),
        }
    }
}

fn primary_key(s: &str) -> Vec<(u8, u32)> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(primary_weight)
        .collect()
}

fn accent_key(s: &str) -> Vec<char> {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn case_key(s: &str) -> Vec<bool> {
    s.nfd().map(char::is_uppercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_order_case_insensitively() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn should_place_lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("Kitchen", "kitchen"), Ordering::Greater);
    }

    #[test]
    fn should_ignore_accents_at_first_level() {
        assert_eq!(locale_cmp("école", "ezra"), Ordering::Less);
        assert_eq!(locale_cmp("Éte", "ete"), Ordering::Greater);
        assert_eq!(locale_cmp("ete", "été"), Ordering::Less);
    }

    #[test]
    fn should_sort_punctuation_before_digits_before_letters() {
        assert_eq!(locale_cmp("_x", "1x"), Ordering::Less);
        assert_eq!(locale_cmp("1x", "ax"), Ordering::Less);
    }

    #[test]
    fn should_order_punctuation_by_collation_rank() {
        assert_eq!(locale_cmp("Living_Room", "Living-Room"), Ordering::Less);
        assert_eq!(locale_cmp("light_a", "light.a"), Ordering::Less);
        assert_eq!(locale_cmp("a-b", "a+b"), Ordering::Less);
        assert_eq!(locale_cmp("a$b", "a\u{2022}b"), Ordering::Less);
    }

    #[test]
    fn should_sort_prefix_first() {
        assert_eq!(locale_cmp("Bed", "Bedroom"), Ordering::Less);
        assert_eq!(locale_cmp("", "a"), Ordering::Less);
    }

    #[test]
    fn should_report_equal_for_identical_strings() {
        assert_eq!(locale_cmp("Living Room", "Living Room"), Ordering::Equal);
    }
}
