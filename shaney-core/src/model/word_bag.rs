use std::collections::HashMap;

use rand::Rng;

/// Frequency-weighted set of the words observed after one window.
///
/// Conceptually a node in a Markov chain whose outgoing edges are
/// weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate word occurrences during ingestion
/// - Draw one word using weighted random sampling
///
/// ## Invariants
/// - Every occurrence count is strictly positive
/// - Non-empty once a word has been recorded; the chain only creates a
///   bag on the first record for its window
#[derive(Clone, Debug, Default)]
pub(crate) struct WordBag {
	/// Observed successors indexed by word.
	/// The value represents how many times this word was observed.
	/// Example: { "the" => 42, "sat." => 3 }
	counts: HashMap<String, usize>,
}

impl WordBag {
	/// Records an occurrence of `word`.
	///
	/// - If the word was already seen, its occurrence count is increased.
	/// - Otherwise, a new entry is created with an initial count of 1.
	pub(crate) fn record(&mut self, word: &str) {
		*self.counts.entry(word.to_owned()).or_insert(0) += 1;
	}

	/// Returns the sum of all occurrence counts.
	pub(crate) fn total_weight(&self) -> usize {
		self.counts.values().sum()
	}

	/// Draws one word using weighted random sampling.
	///
	/// The probability of selecting a word is its occurrence count over
	/// `total_weight()`.
	///
	/// This method performs:
	/// - an O(n) scan over the recorded words
	/// - a cumulative subtraction to select a bucket
	///
	/// Map iteration order does not matter: the scan partitions
	/// `[0, total_weight())` linearly, so any order yields the same
	/// distribution.
	///
	/// Returns `None` only for a bag with no recorded word, a state the
	/// chain never stores.
	pub(crate) fn draw_one(&self) -> Option<&str> {
		let total = self.total_weight();
		if total == 0 {
			return None;
		}

		let mut r = rand::rng().random_range(0..total);

		let mut fallback: Option<&str> = None;
		for (word, occurrence) in &self.counts {
			if r < *occurrence {
				return Some(word);
			}
			r -= occurrence;
			fallback = Some(word);
		}

		// Unreachable while the counts stay positive
		fallback
	}
}
