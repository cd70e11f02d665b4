//! Translation of plain English queries into a [`FilterSet`].
//!
//! This is a fixed set of pattern rules, not language understanding. The
//! rules run in order against one working filter set so that a later rule
//! can see, and conflict with, what an earlier rule recorded. Any number of
//! rules may contribute to the same query.
//!
//! ```
//! use stringscope::translator::translate;
//! let filters = translate("all single word palindromic strings").unwrap();
//! assert_eq!(filters.is_palindrome, Some(true));
//! assert_eq!(filters.word_count, Some(1));
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::error::{Result, StringscopeError};
use crate::filter::FilterSet;

type Rule = fn(&str, &mut FilterSet) -> Result<()>;

/// Rules in the order their effects are recorded.
const RULES: [(&str, Rule); 7] = [
    ("palindrome", palindrome),
    ("named word count", named_word_count),
    ("numeric word count", numeric_word_count),
    ("longer than", longer_than),
    ("shorter than", shorter_than),
    ("exact length", exact_length),
    ("contains character", contains_character),
];

lazy_static! {
    // Cardinal words that fit "<number> word". Only single and one to ten are
    // supported, the rest are recognized in order to be rejected.
    static ref NAMED_WORD_COUNT: Regex = Regex::new(
        r"\b(single|one|two|three|four|five|six|seven|eight|nine|ten|zero|eleven|twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen|twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety|hundred|thousand)[\s-]+words?\b"
    ).unwrap();
    static ref NUMERIC_WORD_COUNT: Regex = Regex::new(r"\b(\d+)\s+words?\b").unwrap();
    static ref LONGER_THAN: Regex = Regex::new(r"\blonger\s+than\s+(\d+)").unwrap();
    static ref SHORTER_THAN: Regex = Regex::new(r"\bshorter\s+than\s+(\d+)").unwrap();
    static ref EXACTLY: Regex = Regex::new(r"\bexactly\s+(\d+)").unwrap();
    static ref CONTAINS_LETTER: Regex =
        Regex::new(r"\bcontain(?:s|ing)?\s+the\s+letter\s+([a-z])\b").unwrap();
    static ref CONTAINS_FIRST_VOWEL: Regex =
        Regex::new(r"\bcontain(?:s|ing)?\s+the\s+first\s+vowel\b").unwrap();
}

/// Translates `query` into filters. Never returns an empty set: a query no
/// rule recognizes is an [`StringscopeError::UnparseableQuery`].
pub fn translate(query: &str) -> Result<FilterSet> {
    let lowered = query.to_lowercase();
    let mut filters = FilterSet::new();
    for (name, rule) in RULES {
        if let Err(e) = rule(&lowered, &mut filters) {
            debug!(rule = name, error = %e, "translation rule failed");
            return Err(e);
        }
    }
    if let (Some(min), Some(max)) = (filters.min_length, filters.max_length) {
        if min > max {
            return Err(StringscopeError::conflict(format!(
                "min_length {min} exceeds max_length {max}"
            )));
        }
    }
    if filters.is_empty() {
        return Err(StringscopeError::UnparseableQuery { query: query.to_owned() });
    }
    Ok(filters)
}

// The number captured by the first group, if any. Numbers too large to
// represent leave the rule without effect.
fn captured_number(pattern: &Regex, query: &str) -> Option<usize> {
    pattern.captures(query)?.get(1)?.as_str().parse().ok()
}

fn palindrome(query: &str, filters: &mut FilterSet) -> Result<()> {
    // "palindromic" contains "palindrom" but not "palindrome"
    if query.contains("palindrome") || query.contains("palindromic") {
        filters.is_palindrome = Some(true);
    }
    Ok(())
}

fn named_word_count(query: &str, filters: &mut FilterSet) -> Result<()> {
    let Some(word) = NAMED_WORD_COUNT.captures(query).and_then(|c| c.get(1)) else {
        return Ok(());
    };
    let count = match word.as_str() {
        "single" | "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        other => {
            return Err(StringscopeError::UnsupportedWordCount { word: other.to_owned() });
        }
    };
    filters.word_count = Some(count);
    Ok(())
}

// Only consulted when no number word was found.
fn numeric_word_count(query: &str, filters: &mut FilterSet) -> Result<()> {
    if filters.word_count.is_none() {
        filters.word_count = captured_number(&NUMERIC_WORD_COUNT, query);
    }
    Ok(())
}

fn longer_than(query: &str, filters: &mut FilterSet) -> Result<()> {
    let Some(n) = captured_number(&LONGER_THAN, query) else {
        return Ok(());
    };
    let min = n.saturating_add(1);
    if let Some(existing) = filters.min_length {
        if existing > min {
            return Err(StringscopeError::conflict(format!(
                "longer than {n} contradicts min_length {existing}"
            )));
        }
    }
    filters.min_length = Some(min);
    Ok(())
}

fn shorter_than(query: &str, filters: &mut FilterSet) -> Result<()> {
    let Some(n) = captured_number(&SHORTER_THAN, query) else {
        return Ok(());
    };
    let Some(max) = n.checked_sub(1) else {
        return Err(StringscopeError::conflict("shorter than 0 excludes every length"));
    };
    if let Some(existing) = filters.max_length {
        if existing < max {
            return Err(StringscopeError::conflict(format!(
                "shorter than {n} contradicts max_length {existing}"
            )));
        }
    }
    filters.max_length = Some(max);
    Ok(())
}

fn exact_length(query: &str, filters: &mut FilterSet) -> Result<()> {
    let Some(n) = captured_number(&EXACTLY, query) else {
        return Ok(());
    };
    if filters.min_length.is_some_and(|min| min > n) {
        return Err(StringscopeError::conflict(format!(
            "exactly {n} is below the lower length bound"
        )));
    }
    if filters.max_length.is_some_and(|max| max < n) {
        return Err(StringscopeError::conflict(format!(
            "exactly {n} is above the upper length bound"
        )));
    }
    filters.min_length = Some(n);
    filters.max_length = Some(n);
    Ok(())
}

fn contains_character(query: &str, filters: &mut FilterSet) -> Result<()> {
    let letter = CONTAINS_LETTER
        .captures(query)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().chars().next());
    if let Some(c) = letter {
        filters.contains_character = Some(c);
    } else if CONTAINS_FIRST_VOWEL.is_match(query) {
        filters.contains_character = Some('a');
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_apply_to_an_empty_set_independently() {
        let mut filters = FilterSet::new();
        longer_than("longer than 3", &mut filters).unwrap();
        assert_eq!(filters.min_length, Some(4));
        let mut filters = FilterSet::new();
        shorter_than("shorter than 3", &mut filters).unwrap();
        assert_eq!(filters.max_length, Some(2));
    }

    #[test]
    fn lower_bound_conflict_is_seen_by_the_rule() {
        let mut filters = FilterSet { min_length: Some(20), ..FilterSet::default() };
        assert!(matches!(
            longer_than("longer than 10", &mut filters),
            Err(StringscopeError::ConflictingFilters { .. })
        ));
    }

    #[test]
    fn upper_bound_conflict_is_seen_by_the_rule() {
        let mut filters = FilterSet { max_length: Some(2), ..FilterSet::default() };
        assert!(matches!(
            shorter_than("shorter than 10", &mut filters),
            Err(StringscopeError::ConflictingFilters { .. })
        ));
    }

    #[test]
    fn numeric_word_count_defers_to_named() {
        let mut filters = FilterSet { word_count: Some(2), ..FilterSet::default() };
        numeric_word_count("7 words", &mut filters).unwrap();
        assert_eq!(filters.word_count, Some(2));
    }
}
