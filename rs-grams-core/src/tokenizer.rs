use serde::Deserialize;

/// Tokenization policy applied when splitting raw text.
///
/// Both options default to `false`, which matches the most common usage:
/// lowercased word tokens with punctuation treated as plain separators.
///
/// Derives `Deserialize` so surrounding services can take the policy
/// straight from query parameters; missing fields fall back to the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TokenizeOptions {
	/// When false, every word token is lowercased before being recorded.
	/// When true, original case is preserved and tokens differing only
	/// in case are distinct.
	pub case_sensitive: bool,

	/// When false, punctuation characters only separate words.
	/// When true, each punctuation character is emitted as its own
	/// single-character token, positioned where it occurs.
	pub include_punctuation: bool,
}

/// Splits raw text into an ordered sequence of tokens.
///
/// A word token is a maximal run of letters and digits. Apostrophes and
/// hyphens that sit strictly between two alphanumeric characters are part
/// of the word ("top-notch" and "i'm" are single tokens, as is "1").
/// Whitespace and any other character separate words.
///
/// # Behavior
/// - With `include_punctuation`, each non-whitespace separator character
///   becomes its own token, in place. Whitespace never produces a token.
/// - Token order follows the order of appearance in `text`.
///
/// # Notes
/// - Total over all inputs: empty text gives an empty sequence,
///   no input ever fails.
/// - UTF-8 safe: iterates over characters, not bytes.
pub fn tokenize(text: &str, options: &TokenizeOptions) -> Vec<String> {
	let chars: Vec<char> = text.chars().collect();
	let mut tokens = Vec::new();

	let mut i = 0;
	while i < chars.len() {
		if chars[i].is_alphanumeric() {
			// Word token: consume the maximal run
			let start = i;
			i += 1;
			loop {
				if i < chars.len() && chars[i].is_alphanumeric() {
					i += 1;
				} else if i + 1 < chars.len()
					&& (chars[i] == '\'' || chars[i] == '-')
					&& chars[i + 1].is_alphanumeric()
				{
					// Internal apostrophe or hyphen, part of the word
					i += 2;
				} else {
					break;
				}
			}

			let word: String = chars[start..i].iter().collect();
			if options.case_sensitive {
				tokens.push(word);
			} else {
				tokens.push(word.to_lowercase());
			}
		} else {
			if options.include_punctuation && !chars[i].is_whitespace() {
				tokens.push(chars[i].to_string());
			}
			i += 1;
		}
	}

	tokens
}

#[cfg(test)]
mod tests {
	use super::*;

	fn words(text: &str) -> Vec<String> {
		tokenize(text, &TokenizeOptions::default())
	}

	#[test]
	fn test_empty_text() {
		assert_eq!(words(""), Vec::<String>::new());
		assert_eq!(words("   \t\n"), Vec::<String>::new());
	}

	#[test]
	fn test_words_are_lowercased_by_default() {
		assert_eq!(words("Hello world!"), vec!["hello", "world"]);
	}

	#[test]
	fn test_case_sensitive_preserves_case() {
		let options = TokenizeOptions { case_sensitive: true, ..TokenizeOptions::default() };
		assert_eq!(
			tokenize("Hello World! Hello world!", &options),
			vec!["Hello", "World", "Hello", "world"]
		);
	}

	#[test]
	fn test_compound_word_is_a_single_token() {
		assert_eq!(words("This is a top-notch test."), vec!["this", "is", "a", "top-notch", "test"]);
	}

	#[test]
	fn test_apostrophes_inside_words() {
		assert_eq!(words("I'm hyphenated!"), vec!["i'm", "hyphenated"]);
	}

	#[test]
	fn test_numbers_are_tokens() {
		assert_eq!(words("Here's 1 more test"), vec!["here's", "1", "more", "test"]);
	}

	#[test]
	fn test_punctuation_dropped_by_default() {
		assert_eq!(words("Hello, world!  How's the weather?"), vec!["hello", "world", "how's", "the", "weather"]);
	}

	#[test]
	fn test_punctuation_emitted_in_place() {
		let options = TokenizeOptions { include_punctuation: true, ..TokenizeOptions::default() };
		assert_eq!(
			tokenize("Hello, world.  How are you?", &options),
			vec!["hello", ",", "world", ".", "how", "are", "you", "?"]
		);
	}

	#[test]
	fn test_whitespace_never_produces_a_token() {
		let options = TokenizeOptions { include_punctuation: true, ..TokenizeOptions::default() };
		assert_eq!(tokenize(" a  b \n c ", &options), vec!["a", "b", "c"]);
	}

	#[test]
	fn test_edge_hyphens_are_separators() {
		// Hyphens are only part of a word strictly between two alphanumerics
		assert_eq!(words("-dash dash- - well-known"), vec!["dash", "dash", "well-known"]);

		let options = TokenizeOptions { include_punctuation: true, ..TokenizeOptions::default() };
		assert_eq!(
			tokenize("-dash dash-", &options),
			vec!["-", "dash", "dash", "-"]
		);
	}

	#[test]
	fn test_adjacent_apostrophes_are_separators() {
		assert_eq!(words("a''b"), vec!["a", "b"]);
	}

	#[test]
	fn test_accented_letters_are_word_characters() {
		assert_eq!(words("Un café noir"), vec!["un", "café", "noir"]);
	}
}
