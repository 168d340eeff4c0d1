use super::counts::OrderedCounts;

/// Represents a state in an n-gram frequency index.
///
/// A `State` corresponds to a fixed prefix (the first n-1 tokens of a
/// window, joined by single spaces) and stores all continuation tokens
/// observed after this prefix, with their occurrence counts.
///
/// ## Responsibilities:
/// - Accumulate continuation occurrences during construction
/// - Reconstruct full n-grams in first-occurrence order
///
/// ## Invariants
/// - All continuations belong to the same `key`
/// - Each continuation occurrence count is strictly positive
#[derive(Clone, Debug)]
pub(crate) struct State {
	/// Identifier of the state (space-joined prefix).
	key: String,
	/// Continuation tokens observed after this prefix, with their counts,
	/// kept in first-occurrence order.
	continuations: OrderedCounts,
}

impl State {
	/// Creates a new empty state for the given prefix.
	pub(crate) fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			continuations: OrderedCounts::new(),
		}
	}

	/// Records an occurrence of `continuation` after this prefix.
	pub(crate) fn record(&mut self, continuation: &str) {
		self.continuations.increment(continuation);
	}

	/// Reconstructed full n-grams of this state with their counts,
	/// in first-occurrence order.
	///
	/// Each n-gram is `prefix + " " + continuation`.
	pub(crate) fn ngrams(&self) -> impl Iterator<Item = (String, usize)> + '_ {
		self.continuations
			.iter()
			.map(|(continuation, count)| (format!("{} {}", self.key, continuation), count))
	}
}
