use rs_grams_core::index::ngram_index::NGramIndex;
use rs_grams_core::io::{get_filename, list_files, normalize_folder, read_file};
use rs_grams_core::tokenizer::{TokenizeOptions, tokenize};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load all corpora from the "data" directory (.txt files)
    let folder = normalize_folder("./data");

    if folder.is_dir() {
        for file in list_files(&folder, "txt")? {
            let path = folder.join(&file);
            let name = get_filename(&path)?;
            let text = read_file(&path)?;

            // Tokenize once with the default policy
            // (lowercased words, punctuation treated as separators)
            let options = TokenizeOptions::default();
            let tokens = tokenize(&text, &options);
            println!("=== {} ({} tokens) ===", name, tokens.len());

            // Build frequency indexes of orders 1 to 3 over the same tokens;
            // queries are read-only, so one index serves them all
            for n in 1..=3 {
                let index = NGramIndex::build(&tokens, n)?;

                println!("-- order {}", n);
                println!("distinct n-grams: {}", index.list_all().len());
                println!("most common: {:?}", index.most_common());

                // Grouping by count: keys come back in ascending count order
                for (count, ngrams) in index.by_count() {
                    println!("seen {} time(s): {:?}", count, ngrams);
                }

                // Exact-frequency filtering; a count that matches nothing
                // simply yields an empty list
                println!("seen exactly twice: {:?}", index.by_frequency(2));
            }
        }
    } else {
        println!("No ./data directory, skipping corpus loading");
    }

    // Punctuation can be kept as single-character tokens, in place
    let punctuation = TokenizeOptions { include_punctuation: true, ..TokenizeOptions::default() };
    let unigrams = NGramIndex::from_text("Hello, world!", 1, &punctuation)?;
    println!("with punctuation: {:?}", unigrams.list_all());

    // Case sensitivity makes "Hello" and "hello" distinct tokens
    let case_sensitive = TokenizeOptions { case_sensitive: true, ..TokenizeOptions::default() };
    let unigrams = NGramIndex::from_text("Hello World! Hello world!", 1, &case_sensitive)?;
    println!("case sensitive: {:?}", unigrams.by_count());

    // An order larger than the token sequence yields an empty index
    let options = TokenizeOptions::default();
    let trigrams = NGramIndex::from_text("Hello, world", 3, &options)?;
    println!("order 3 over 2 tokens is empty: {}", trigrams.is_empty());

    // Order 0 is rejected
    match NGramIndex::from_text("Hello, world", 0, &options) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Order 0 is invalid, order must be >= 1"),
    }

    Ok(())
}
