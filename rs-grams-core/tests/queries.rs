//! Integration tests for the public frequency index API.
//!
//! Run only these tests:  cargo test --test queries

use rs_grams_core::index::ngram_index::NGramIndex;
use rs_grams_core::tokenizer::{TokenizeOptions, tokenize};

fn default_index(text: &str, n: usize) -> NGramIndex {
    NGramIndex::from_text(text, n, &TokenizeOptions::default()).expect("order must be valid")
}

#[test]
fn test_one_index_serves_every_query() {
    let bigrams = default_index("Hello, world!  How's the weather?  Goodbye, world! Hello, world!", 2);

    // The index is built once and read many times; queries never disturb
    // each other
    let all_before = bigrams.list_all();
    assert_eq!(bigrams.most_common(), vec!["hello world"]);
    assert_eq!(bigrams.by_frequency(2), vec!["hello world"]);
    assert!(!bigrams.by_count().is_empty());
    assert_eq!(bigrams.list_all(), all_before);
}

#[test]
fn test_tokens_and_index_agree() {
    let options = TokenizeOptions::default();
    let text = "Hello world!  How are you?  Hello world!";

    let tokens = tokenize(text, &options);
    let from_tokens = NGramIndex::build(&tokens, 2).expect("order must be valid");
    let from_text = NGramIndex::from_text(text, 2, &options).expect("order must be valid");

    assert_eq!(from_tokens.list_all(), from_text.list_all());
    assert_eq!(from_tokens.by_count(), from_text.by_count());
}

#[test]
fn test_tokenization_policy_flows_through_the_index() {
    let text = "Hello, world! Hello, WORLD!";

    let folded = default_index(text, 1);
    assert_eq!(folded.most_common(), vec!["hello", "world"]);

    let options = TokenizeOptions { case_sensitive: true, include_punctuation: true };
    let exact = NGramIndex::from_text(text, 1, &options).expect("order must be valid");
    assert_eq!(exact.list_all(), vec!["Hello", ",", "world", "!", "WORLD"]);
    assert_eq!(exact.by_frequency(2), vec!["Hello", ",", "!"]);
}

#[test]
fn test_every_count_bucket_matches_its_frequency_filter() {
    let unigrams = default_index(
        "the cat saw the dog and the dog saw the cat run",
        1,
    );

    let buckets = unigrams.by_count();
    let counts: Vec<usize> = buckets.keys().copied().collect();

    // Keys come back sorted ascending
    let mut sorted = counts.clone();
    sorted.sort();
    assert_eq!(counts, sorted);

    for (count, ngrams) in &buckets {
        assert_eq!(&unigrams.by_frequency(*count), ngrams);
    }
}

#[test]
fn test_empty_corpus_is_empty_everywhere() {
    for n in 1..=4 {
        let index = default_index("", n);
        assert!(index.is_empty());
        assert_eq!(index.list_all(), Vec::<String>::new());
        assert_eq!(index.most_common(), Vec::<String>::new());
        assert_eq!(index.by_frequency(1), Vec::<String>::new());
        assert!(index.by_count().is_empty());
    }
}

#[test]
fn test_invalid_order_is_rejected_before_tokenization_matters() {
    assert!(NGramIndex::from_text("", 0, &TokenizeOptions::default()).is_err());
    assert!(NGramIndex::from_text("some text", 0, &TokenizeOptions::default()).is_err());
}
