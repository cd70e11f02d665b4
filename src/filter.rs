//! Structured filter predicates.
//!
//! A [`FilterSet`] has one optional slot per recognized filter. Absent slots
//! impose no constraint and present ones are combined conjunctively. Values
//! are validated when a set is built (see [`FilterSet::from_params`] and the
//! translator), so evaluation itself cannot fail.

use std::collections::HashMap;
use std::hash::BuildHasher;

use serde::Serialize;

use crate::construct::AnalyzedString;
use crate::error::{Result, StringscopeError};

pub const IS_PALINDROME: &str = "is_palindrome";
pub const MIN_LENGTH: &str = "min_length";
pub const MAX_LENGTH: &str = "max_length";
pub const WORD_COUNT: &str = "word_count";
pub const CONTAINS_CHARACTER: &str = "contains_character";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, analyzed: &AnalyzedString) -> bool {
        let properties = analyzed.properties();
        self.is_palindrome.is_none_or(|v| properties.is_palindrome() == v)
            && self.min_length.is_none_or(|min| properties.length() >= min)
            && self.max_length.is_none_or(|max| properties.length() <= max)
            && self.word_count.is_none_or(|v| properties.word_count() == v)
            && self
                .contains_character
                .is_none_or(|c| properties.contains_character(c))
    }

    /// Builds a set from raw query parameters. Unknown names are ignored and
    /// empty values count as absent. The bounds are not checked against each
    /// other: a minimum above the maximum just matches nothing.
    pub fn from_params<S: BuildHasher>(params: &HashMap<String, String, S>) -> Result<Self> {
        let param = |name: &str| params.get(name).map(String::as_str).filter(|v| !v.is_empty());
        let mut filters = Self::new();
        if let Some(raw) = param(IS_PALINDROME) {
            filters.is_palindrome = Some(parse_bool(raw).ok_or(StringscopeError::InvalidFilterValue {
                name: IS_PALINDROME,
                expected: "must be boolean (true/false)",
            })?);
        }
        if let Some(raw) = param(MIN_LENGTH) {
            filters.min_length = Some(parse_count(MIN_LENGTH, raw)?);
        }
        if let Some(raw) = param(MAX_LENGTH) {
            filters.max_length = Some(parse_count(MAX_LENGTH, raw)?);
        }
        if let Some(raw) = param(WORD_COUNT) {
            filters.word_count = Some(parse_count(WORD_COUNT, raw)?);
        }
        if let Some(raw) = param(CONTAINS_CHARACTER) {
            let mut chars = raw.chars();
            filters.contains_character = match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => {
                    return Err(StringscopeError::InvalidFilterValue {
                        name: CONTAINS_CHARACTER,
                        expected: "must be a single character",
                    });
                }
            };
        }
        Ok(filters)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn parse_count(name: &'static str, raw: &str) -> Result<usize> {
    raw.parse::<usize>().map_err(|_| StringscopeError::InvalidFilterValue {
        name,
        expected: "must be a non-negative integer",
    })
}
