use stringscope::analysis::{analyze, content_hash};

#[test]
fn hash_is_sixty_four_lowercase_hex_digits() {
    for s in ["", "a", "hello world", "ünïcödé ✓", "   "] {
        let hash = content_hash(s);
        assert_eq!(hash.len(), 64, "hash of {s:?}");
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(hash, analyze(s).content_hash(), "hash must be a pure function of {s:?}");
    }
    assert_eq!(
        content_hash("hello"),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
}

#[test]
fn length_counts_code_points_not_bytes() {
    let properties = analyze("héllo ✓");
    assert_eq!(properties.length(), 7);
    assert_eq!(analyze("").length(), 0);
}

#[test]
fn palindrome_ignores_case_and_punctuation() {
    assert!(analyze("A man, a plan, a canal: Panama").is_palindrome());
    assert!(analyze("Racecar").is_palindrome());
    assert!(analyze("12321").is_palindrome());
    assert!(analyze("").is_palindrome());
    assert!(analyze("?!").is_palindrome());
    assert!(!analyze("hello").is_palindrome());
    // inserting punctuation that leaves the skeleton alone changes nothing
    assert_eq!(
        analyze("step on no pets").is_palindrome(),
        analyze("Step -- on, NO pets!").is_palindrome()
    );
}

#[test]
fn palindrome_skeleton_keeps_only_letters_and_numbers() {
    // the Devanagari vowel sign I (a spacing combining mark) is dropped,
    // leaving the single letter KA
    assert!(analyze("\u{915}\u{93F}").is_palindrome());
    assert!(!analyze("\u{915}\u{93F}\u{916}").is_palindrome());
    // numbers of any script count
    assert!(analyze("\u{661}x\u{661}").is_palindrome());
    assert!(!analyze("\u{661}x\u{662}").is_palindrome());
}

#[test]
fn unique_characters_are_case_sensitive_and_unfiltered() {
    // A, a and the space are all distinct
    assert_eq!(analyze("Aa a").unique_characters(), 3);
    assert_eq!(analyze("").unique_characters(), 0);
}

#[test]
fn word_count_splits_on_whitespace_runs() {
    assert_eq!(analyze("one").word_count(), 1);
    assert_eq!(analyze("  two\t\twords \n").word_count(), 2);
    assert_eq!(analyze(" \t\n ").word_count(), 0);
    assert_eq!(analyze("").word_count(), 0);
}

#[test]
fn frequency_map_is_complete() {
    for s in ["", "mississippi", "A man, a plan", "ünïcödé ✓✓"] {
        let properties = analyze(s);
        let frequency = properties.character_frequency();
        assert_eq!(frequency.values().sum::<usize>(), properties.length(), "sum for {s:?}");
        assert_eq!(frequency.len(), properties.unique_characters());
        for c in s.chars() {
            assert!(frequency[&c] >= 1, "{c:?} missing for {s:?}");
        }
    }
    let properties = analyze("mississippi");
    assert_eq!(properties.character_frequency()[&'s'], 4);
    assert_eq!(properties.character_frequency()[&'m'], 1);
    assert!(properties.contains_character('p'));
    assert!(!properties.contains_character('M'));
}
