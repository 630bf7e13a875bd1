/// Number of context words in a window.
///
/// The longer the window, the more the generated output follows whole
/// phrases of the corpus. Two is the usual length.
pub const PREFIX_LEN: usize = 2;

/// Fixed-length window of the most recent words seen.
///
/// Windows are compared and hashed structurally, so they can serve as
/// chain lookup keys. Positions that have not seen a word yet hold the
/// empty placeholder string.
///
/// # Invariants
/// - Always holds exactly `PREFIX_LEN` entries; the window shifts, it
///   never grows or shrinks
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Prefix([String; PREFIX_LEN]);

impl Prefix {
	/// Returns the all-placeholder window.
	///
	/// This is the canonical start state for both ingestion (at every
	/// paragraph start) and generation (at every document start).
	pub fn initial() -> Self {
		Self(std::array::from_fn(|_| String::new()))
	}

	/// Pushes `word` onto the end of the window, dropping the oldest
	/// entry and shifting the others down one position.
	pub fn shift(&mut self, word: &str) {
		self.0.rotate_left(1);
		self.0[PREFIX_LEN - 1] = word.to_owned();
	}

	/// The window contents, oldest word first.
	pub fn words(&self) -> &[String] {
		&self.0
	}
}

impl Default for Prefix {
	fn default() -> Self {
		Self::initial()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn window(words: &[&str]) -> Prefix {
		let mut prefix = Prefix::initial();
		for word in words {
			prefix.shift(word);
		}
		prefix
	}

	#[test]
	fn initial_is_all_placeholders() {
		let prefix = Prefix::initial();
		assert_eq!(prefix.words().len(), PREFIX_LEN);
		assert!(prefix.words().iter().all(String::is_empty));
	}

	#[test]
	fn shifting_k_words_fills_the_window() {
		assert_eq!(window(&["cat", "sat"]).words(), ["cat", "sat"]);
	}

	#[test]
	fn one_more_shift_drops_the_oldest() {
		let mut prefix = window(&["cat", "sat"]);
		prefix.shift("down");
		assert_eq!(prefix.words(), ["sat", "down"]);
	}

	#[test]
	fn equality_is_structural() {
		assert_eq!(window(&["a", "b"]), window(&["x", "a", "b"]));
		assert_ne!(window(&["a", "b"]), window(&["b", "a"]));
		assert_ne!(window(&["a"]), Prefix::initial());
	}
}
