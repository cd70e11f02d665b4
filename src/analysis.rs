//! Derivation of string properties.
//!
//! Everything here is a pure function of the input string. Two different
//! normalizations are in play and must not be merged: the palindrome check
//! works on a lower-cased skeleton of letters and numbers, while the unique
//! character count and the frequency map work on the original code points.

// used to hold the character histogram
use std::collections::HashMap;
// used for the content hash
use sha2::{Digest, Sha256};
// used to expose the computed properties in responses
use serde::Serialize;
// used to pick letters and digits by general category
use lazy_static::lazy_static;
use regex::Regex;

use crate::construct::OtherHasher;

lazy_static! {
    // Letters and numbers by general category. Combining marks such as
    // vowel signs are alphabetic but are not letters.
    static ref LETTER_OR_NUMBER: Regex = Regex::new(r"[\p{L}\p{N}]").unwrap();
}

pub type CharacterFrequency = HashMap<char, usize, OtherHasher>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringProperties {
    length: usize,
    is_palindrome: bool,
    unique_characters: usize,
    word_count: usize,
    #[serde(rename = "sha256_hash")]
    content_hash: String,
    #[serde(rename = "character_frequency_map")]
    character_frequency: CharacterFrequency,
}

impl StringProperties {
    /// Number of Unicode code points.
    pub fn length(&self) -> usize {
        self.length
    }
    pub fn is_palindrome(&self) -> bool {
        self.is_palindrome
    }
    pub fn unique_characters(&self) -> usize {
        self.unique_characters
    }
    pub fn word_count(&self) -> usize {
        self.word_count
    }
    /// Lowercase hexadecimal SHA-256 of the raw bytes, 64 characters.
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }
    pub fn character_frequency(&self) -> &CharacterFrequency {
        &self.character_frequency
    }
    pub fn contains_character(&self, c: char) -> bool {
        self.character_frequency.contains_key(&c)
    }
}

/// Computes every property of `value`. Total: the empty string is analyzed too.
pub fn analyze(value: &str) -> StringProperties {
    let character_frequency = character_frequency(value);
    StringProperties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: character_frequency.len(),
        word_count: word_count(value),
        content_hash: content_hash(value),
        character_frequency,
    }
}

pub fn content_hash(value: &str) -> String {
    format!("{:x}", Sha256::digest(value.as_bytes()))
}

/// Case-insensitive, ignoring everything that is not a letter or a digit.
/// A string with nothing left after stripping is a palindrome.
pub fn is_palindrome(value: &str) -> bool {
    let lowered = value.to_lowercase();
    let skeleton: Vec<char> = LETTER_OR_NUMBER
        .find_iter(&lowered)
        .flat_map(|m| m.as_str().chars())
        .collect();
    skeleton
        .iter()
        .zip(skeleton.iter().rev())
        .take(skeleton.len() / 2)
        .all(|(front, back)| front == back)
}

pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

pub fn character_frequency(value: &str) -> CharacterFrequency {
    let mut frequency = CharacterFrequency::default();
    for c in value.chars() {
        *frequency.entry(c).or_insert(0) += 1;
    }
    frequency
}
