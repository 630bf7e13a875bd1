use std::collections::HashMap;

use super::prefix::Prefix;
use super::word_bag::WordBag;

/// The learned chain over word sequences.
///
/// Maps each fixed-length window of context words to the
/// frequency-weighted set of words observed to follow it.
///
/// # Responsibilities
/// - Accumulate (window, word) transitions during ingestion
/// - Answer weighted random walks during generation
///
/// # Invariants
/// - A successor set exists for a window iff at least one transition
///   from that exact window has been recorded
/// - Every stored successor set is non-empty
///
/// The chain is mutated only while the corpus is being fed. Generation
/// is a pure read plus independent thread-local random draws, so
/// documents may be generated concurrently once ingestion is done.
#[derive(Clone, Debug, Default)]
pub struct Chain {
	/// Successor sets indexed by the window they were observed after.
	bags: HashMap<Prefix, WordBag>,
}

impl Chain {
	/// Creates an empty chain.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one observed transition from `prefix` to `word`.
	///
	/// The successor set for `prefix` is created on first use.
	pub fn record(&mut self, prefix: &Prefix, word: &str) {
		self.bags.entry(prefix.clone()).or_default().record(word);
	}

	/// Draws one successor of `prefix` at random, weighted by observed
	/// frequency.
	///
	/// Returns `None` when this exact window was never seen as a
	/// transition source, which is what ends a generation walk.
	pub fn walk(&self, prefix: &Prefix) -> Option<&str> {
		self.bags.get(prefix)?.draw_one()
	}

	/// Starts a generation walk from the initial window.
	///
	/// The returned iterator lazily yields one word per weighted draw,
	/// shifting the window after each, and stops at the first window
	/// with no recorded successor. Every call starts over from
	/// `Prefix::initial()`, so distinct calls produce independent
	/// documents that diverge wherever a window has more than one
	/// recorded successor.
	///
	/// # Notes
	/// - No end-of-paragraph transition is recorded during ingestion,
	///   so termination relies on the walk reaching a window that the
	///   corpus never used as a transition source. A corpus whose every
	///   reachable window keeps a recorded successor (a fully covered
	///   cycle) yields an unbounded walk; real prose almost always
	///   contains a dead-end window near a paragraph end.
	pub fn generate(&self) -> Walk<'_> {
		Walk {
			chain: self,
			prefix: Prefix::initial(),
		}
	}

	/// Number of distinct windows with at least one recorded successor.
	pub fn prefix_count(&self) -> usize {
		self.bags.len()
	}

	/// Total number of transitions recorded from `prefix`.
	///
	/// Zero means the window was never a transition source.
	pub fn weight(&self, prefix: &Prefix) -> usize {
		self.bags.get(prefix).map_or(0, WordBag::total_weight)
	}

	/// True while no transition has been recorded.
	pub fn is_empty(&self) -> bool {
		self.bags.is_empty()
	}
}

/// Lazy generation walk over a [`Chain`].
///
/// Yields drawn words until an unseen window is reached. Obtained from
/// [`Chain::generate`].
pub struct Walk<'a> {
	chain: &'a Chain,
	prefix: Prefix,
}

impl Iterator for Walk<'_> {
	type Item = String;

	fn next(&mut self) -> Option<Self::Item> {
		let word = self.chain.walk(&self.prefix)?.to_owned();
		self.prefix.shift(&word);
		Some(word)
	}
}
