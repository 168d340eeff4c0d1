use std::collections::{BTreeMap, HashMap};

use super::counts::OrderedCounts;
use super::state::State;
use crate::tokenizer::{TokenizeOptions, tokenize};

/// Represents a frequency index over the n-grams of a token sequence.
///
/// The `NGramIndex` counts every contiguous window of `n` tokens. For an
/// order of 1 it stores plain token counts; for higher orders it stores
/// states for prefixes of length `n-1` with their continuation counts.
/// Enumeration order is always first-occurrence order, never hashing order.
///
/// # Responsibilities
/// - Build the index from a token sequence or from raw text
/// - Accumulate occurrence counts for each n-gram
/// - Answer read-only queries: enumeration, frequency filtering,
///   most-common lookup, grouping by count
///
/// # Invariants
/// - `n` is always >= 1
/// - Each state in `states` corresponds to a unique prefix of length `n-1`
/// - All occurrence counts are >= 1; a key exists iff it was observed
/// - The index never mutates after construction
#[derive(Clone, Debug)]
pub struct NGramIndex {
	/// The order of the index (number of tokens in an n-gram)
	n: usize, // must be >= 1

	/// Token counts, used when `n == 1`.
	unigrams: OrderedCounts,

	/// Mapping from a prefix (length n-1, space-joined) to its state,
	/// used when `n > 1`.
	states: HashMap<String, State>,

	/// Prefixes in first-occurrence order.
	prefix_order: Vec<String>,
}

impl NGramIndex {
	/// Builds a frequency index of order `n` from a token sequence.
	///
	/// Slides a window of width `n` over the tokens, one position at a
	/// time (strictly contiguous, no gaps, no wraparound), and counts
	/// each n-gram it sees.
	///
	/// # Notes
	/// - Sequences shorter than `n` produce an empty index; this is not
	///   an error.
	/// - Tokens are counted as given; any normalization is the
	///   tokenizer's concern.
	///
	/// # Errors
	/// Returns an error if `n < 1`.
	pub fn build(tokens: &[String], n: usize) -> Result<Self, String> {
		if n < 1 {
			return Err("n must be >= 1".to_owned());
		}

		let mut index = Self {
			n,
			unigrams: OrderedCounts::new(),
			states: HashMap::new(),
			prefix_order: Vec::new(),
		};

		if tokens.len() < n {
			// Sequence too short, no n-grams to count
			return Ok(index);
		}

		// For each n-gram in the sequence
		for i in 0..=tokens.len() - n {
			if n == 1 {
				index.unigrams.increment(&tokens[i]);
			} else {
				// Get the prefix and the continuation token
				let prefix = tokens[i..i + n - 1].join(" ");
				let continuation = &tokens[i + n - 1];

				// Get or create the state for this prefix
				if !index.states.contains_key(&prefix) {
					index.prefix_order.push(prefix.clone());
				}
				let state = index.states.entry(prefix).or_insert_with_key(|key| State::new(key));
				state.record(continuation);
			}
		}

		Ok(index)
	}

	/// Builds a frequency index directly from raw text.
	///
	/// Tokenizes `text` with `options`, then counts n-grams of order `n`.
	///
	/// # Errors
	/// Returns an error if `n < 1`.
	pub fn from_text(text: &str, n: usize, options: &TokenizeOptions) -> Result<Self, String> {
		let tokens = tokenize(text, options);
		Self::build(&tokens, n)
	}

	/// The order of the index.
	pub fn order(&self) -> usize {
		self.n
	}

	/// Returns true if the index contains no n-grams.
	pub fn is_empty(&self) -> bool {
		if self.n == 1 {
			self.unigrams.is_empty()
		} else {
			self.prefix_order.is_empty()
		}
	}

	/// Every distinct n-gram with its count, in enumeration order.
	///
	/// Prefixes come in first-occurrence order; within a prefix,
	/// continuations keep their own first-occurrence order. For an order
	/// of 1 the n-gram is the bare token, otherwise it is reconstructed
	/// as `prefix + " " + continuation`.
	fn entries(&self) -> Vec<(String, usize)> {
		if self.n == 1 {
			self.unigrams
				.iter()
				.map(|(token, count)| (token.to_owned(), count))
				.collect()
		} else {
			self.prefix_order
				.iter()
				.flat_map(|prefix| self.states[prefix].ngrams())
				.collect()
		}
	}

	/// Lists every distinct n-gram exactly once, in enumeration order.
	///
	/// An empty index yields an empty list.
	pub fn list_all(&self) -> Vec<String> {
		self.entries().into_iter().map(|(ngram, _)| ngram).collect()
	}

	/// Lists every n-gram whose occurrence count equals `target`.
	///
	/// Filtering preserves the relative enumeration order; nothing is
	/// re-sorted. A target matching no n-gram is not an error: the
	/// result is simply empty.
	pub fn by_frequency(&self, target: usize) -> Vec<String> {
		self.entries()
			.into_iter()
			.filter(|(_, count)| *count == target)
			.map(|(ngram, _)| ngram)
			.collect()
	}

	/// Lists the most frequent n-gram(s), in enumeration order.
	///
	/// Ties are not broken: every n-gram whose count equals the maximum
	/// is returned. An empty index yields an empty list.
	pub fn most_common(&self) -> Vec<String> {
		let entries = self.entries();
		let max = entries.iter().map(|(_, count)| *count).max().unwrap_or(0);

		entries
			.into_iter()
			.filter(|(_, count)| *count == max)
			.map(|(ngram, _)| ngram)
			.collect()
	}

	/// Groups n-grams by occurrence count.
	///
	/// The keys are iterated in ascending count order; each bucket keeps
	/// the enumeration order of its n-grams. Only counts that actually
	/// occur appear as keys. An empty index yields an empty mapping.
	pub fn by_count(&self) -> BTreeMap<usize, Vec<String>> {
		let mut buckets: BTreeMap<usize, Vec<String>> = BTreeMap::new();

		for (ngram, count) in self.entries() {
			buckets.entry(count).or_default().push(ngram);
		}

		buckets
	}
}
