//! WordlistEngine tests: load/view state machine, settings and reset.

use wordlist::{SortKey, Stoplist, Tokenizer, WordEntry, WordlistEngine, WordlistError};

// ==================== Helpers ====================

fn rows(pairs: &[(&str, u32)]) -> Vec<WordEntry> {
    pairs.iter().map(|&(w, c)| WordEntry::new(w, c)).collect()
}

fn words(view: &[WordEntry]) -> Vec<&str> {
    view.iter().map(|r| r.word.as_str()).collect()
}

// ==================== State machine ====================

#[test]
fn test_engine_starts_empty() {
    let engine = WordlistEngine::new();
    assert!(!engine.is_loaded());
    assert!(engine.view().is_empty());
    assert_eq!(engine.text(), None);
    assert!(engine.index().is_none());
    assert_eq!(engine.total_tokens(), 0);
    assert_eq!(engine.sort_key(), SortKey::ByWordStart);
}

#[test]
fn test_engine_load_counts_words() {
    let mut engine = WordlistEngine::new();
    engine.load("the cat sat on the mat");

    assert!(engine.is_loaded());
    assert_eq!(engine.total_tokens(), 6);
    assert_eq!(
        engine.view(),
        rows(&[("cat", 1), ("mat", 1), ("on", 1), ("sat", 1), ("the", 2)])
    );
}

#[test]
fn test_engine_keeps_original_text() {
    let mut engine = WordlistEngine::new();
    engine.load("The Cat, the MAT!");
    assert_eq!(engine.text(), Some("The Cat, the MAT!"));
    assert_eq!(words(&engine.view()), vec!["cat", "mat", "the"]);
}

#[test]
fn test_engine_reload_replaces_index() {
    let mut engine = WordlistEngine::new();
    engine.load("apple banana apple");
    engine.load("cherry banana");

    let view = engine.view();
    assert_eq!(view, rows(&[("banana", 1), ("cherry", 1)]));
    assert!(!words(&view).contains(&"apple"));
    assert_eq!(engine.text(), Some("cherry banana"));
}

#[test]
fn test_engine_load_empty_text_is_loaded_but_empty() {
    let mut engine = WordlistEngine::new();
    engine.load("");
    assert!(engine.is_loaded());
    assert!(engine.view().is_empty());
}

#[test]
fn test_engine_load_bytes_decode_error_keeps_state() {
    let mut engine = WordlistEngine::new();
    engine.load("kept words");

    let err = engine.load_bytes(&[0x66, 0x6f, 0xff, 0xfe]).unwrap_err();
    assert!(matches!(err, WordlistError::Decode { .. }));
    assert_eq!(engine.text(), Some("kept words"));
    assert_eq!(words(&engine.view()), vec!["kept", "words"]);
}

#[test]
fn test_engine_load_bytes_valid_utf8() {
    let mut engine = WordlistEngine::new();
    engine.load_bytes("na\u{00ef}ve NA\u{00cf}VE".as_bytes()).unwrap();
    assert_eq!(engine.view(), rows(&[("na\u{00ef}ve", 2)]));
}

#[test]
fn test_engine_decode_error_on_empty_engine_stays_empty() {
    let mut engine = WordlistEngine::new();
    assert!(engine.load_bytes(&[0xc3]).is_err());
    assert!(!engine.is_loaded());
}

// ==================== Sort and search ====================

#[test]
fn test_engine_example_by_frequency_with_stoplist() {
    let mut engine = WordlistEngine::new();
    engine.stoplist_mut().replace(["the", "on"]);
    engine.load("the cat sat on the mat");
    engine.set_sort_key(SortKey::ByFrequency);

    assert_eq!(engine.view(), rows(&[("cat", 1), ("mat", 1), ("sat", 1)]));
}

#[test]
fn test_engine_search_substring() {
    let mut engine = WordlistEngine::new();
    engine.load("the cat sat on the mat");
    engine.set_search(Some("at"));

    assert_eq!(engine.search(), Some("at"));
    assert_eq!(engine.view(), rows(&[("cat", 1), ("mat", 1), ("sat", 1)]));

    engine.clear_search();
    assert_eq!(engine.view().len(), 5);
}

#[test]
fn test_engine_blank_search_clears() {
    let mut engine = WordlistEngine::new();
    engine.set_search(Some("  "));
    assert_eq!(engine.search(), None);
}

#[test]
fn test_engine_setters_apply_on_next_view() {
    let mut engine = WordlistEngine::new();
    engine.load("b a b");

    let before = engine.view();
    engine.set_sort_key(SortKey::ByFrequency);
    assert_eq!(before, rows(&[("a", 1), ("b", 2)]));
    assert_eq!(engine.view(), rows(&[("b", 2), ("a", 1)]));
}

#[test]
fn test_engine_view_is_idempotent() {
    let mut engine = WordlistEngine::new();
    engine.load("one two two three three three four four four four");
    for key in SortKey::ALL {
        engine.set_sort_key(key);
        assert_eq!(engine.view(), engine.view(), "key {}", key);
    }
}

#[test]
fn test_engine_load_resets_sort_key_to_default() {
    let mut engine = WordlistEngine::new().with_default_sort(SortKey::ByFrequency);
    assert_eq!(engine.sort_key(), SortKey::ByFrequency);

    engine.load("x y");
    engine.set_sort_key(SortKey::ByWordEnd);
    engine.load("x y z");
    assert_eq!(engine.sort_key(), SortKey::ByFrequency);
    assert_eq!(engine.default_sort(), SortKey::ByFrequency);
}

#[test]
fn test_engine_load_keeps_search_term() {
    let mut engine = WordlistEngine::new();
    engine.set_search(Some("an"));
    engine.load("banana cherry");
    engine.load("mango kiwi");
    assert_eq!(engine.view(), rows(&[("mango", 1)]));
}

#[test]
fn test_engine_find_next_follows_view_order() {
    let mut engine = WordlistEngine::new();
    engine.load("cat cat cat mat sat dog");
    engine.set_sort_key(SortKey::ByFrequency);

    // View: cat(3), dog, mat, sat
    assert_eq!(engine.find_next("at", None), Some(0));
    assert_eq!(engine.find_next("at", Some(0)), Some(2));
    assert_eq!(engine.find_next("at", Some(3)), Some(0));
    assert_eq!(engine.find_next("og", None), Some(1));
}

// ==================== Stoplist ====================

#[test]
fn test_engine_stoplist_persists_across_reload() {
    let mut engine = WordlistEngine::new();
    engine.stoplist_mut().add("the");
    engine.load("the first text");
    engine.load("the second text");

    assert!(engine.stoplist().contains("the"));
    assert_eq!(words(&engine.view()), vec!["second", "text"]);
}

#[test]
fn test_engine_stoplist_edits_do_not_touch_index() {
    let mut engine = WordlistEngine::new();
    engine.load("red green red");
    engine.stoplist_mut().add("red");

    assert_eq!(words(&engine.view()), vec!["green"]);
    assert_eq!(engine.index().map(|i| i.count("red")), Some(2));

    engine.stoplist_mut().remove("red");
    assert_eq!(words(&engine.view()), vec!["green", "red"]);
}

#[test]
fn test_engine_with_stoplist_builder() {
    let mut engine = WordlistEngine::new().with_stoplist(Stoplist::english());
    engine.load("the quick brown fox and the dog");
    assert_eq!(words(&engine.view()), vec!["brown", "dog", "fox", "quick"]);
}

#[test]
fn test_engine_with_tokenizer() {
    let mut engine = WordlistEngine::new().with_tokenizer(Tokenizer::with_apostrophes(false));
    engine.load("don't");
    assert_eq!(words(&engine.view()), vec!["don", "t"]);
}

// ==================== Reset ====================

#[test]
fn test_engine_reset_returns_to_empty() {
    let mut engine = WordlistEngine::new().with_default_sort(SortKey::ByWordEnd);
    engine.load("some words here");
    engine.stoplist_mut().add("some");
    engine.set_search(Some("or"));
    engine.set_sort_key(SortKey::ByFrequency);

    engine.reset();

    assert!(!engine.is_loaded());
    assert!(engine.view().is_empty());
    assert_eq!(engine.text(), None);
    assert!(engine.stoplist().is_empty());
    assert_eq!(engine.search(), None);
    assert_eq!(engine.sort_key(), SortKey::ByWordEnd);
}

// ==================== SortKey ====================

#[test]
fn test_sort_key_names_round_trip() {
    for key in SortKey::ALL {
        assert_eq!(key.name().parse::<SortKey>().unwrap(), key);
        assert_eq!(key.to_string(), key.name());
    }
    assert_eq!("Frequency".parse::<SortKey>().unwrap(), SortKey::ByFrequency);
    assert_eq!("ending".parse::<SortKey>().unwrap(), SortKey::ByWordEnd);
    assert!(matches!(
        "size".parse::<SortKey>(),
        Err(WordlistError::UnknownSortKey(_))
    ));
}
