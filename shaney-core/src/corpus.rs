use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::io::read_file;
use crate::model::chain::Chain;
use crate::model::prefix::Prefix;

/// Error raised while ingesting a corpus source.
#[derive(Debug, Error)]
pub enum IngestError {
	#[error("failed to read corpus file {}: {source}", .path.display())]
	Read {
		path: PathBuf,
		source: std::io::Error,
	},
}

/// Splits raw corpus text into paragraphs.
///
/// A paragraph boundary is two consecutive newline characters; end of
/// input closes the last paragraph. Fragments without words are
/// harmless, they feed nothing.
pub fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
	text.split("\n\n")
}

/// Feeds one paragraph into `chain`.
///
/// The window is reset to `Prefix::initial()` first, then every
/// whitespace-delimited word is recorded against the window of words
/// preceding it. `split_whitespace` never yields empty words, the only
/// constraint the chain places on its input.
pub fn feed_paragraph(chain: &mut Chain, paragraph: &str) {
	let mut prefix = Prefix::initial();
	for word in paragraph.split_whitespace() {
		chain.record(&prefix, word);
		prefix.shift(word);
	}
}

/// Feeds a whole corpus text, one paragraph at a time.
///
/// Resetting the window at every paragraph start makes generated
/// documents start at more varied points of the corpus, and leaves
/// dead-end windows behind each paragraph that end generation walks.
pub fn feed_text(chain: &mut Chain, text: &str) {
	for paragraph in paragraphs(text) {
		feed_paragraph(chain, paragraph);
	}
}

/// Reads the file at `path` and feeds its content into `chain`.
///
/// # Errors
/// Returns [`IngestError::Read`] if the file cannot be opened or read;
/// the chain is left untouched in that case.
pub fn ingest_file<P: AsRef<Path>>(chain: &mut Chain, path: P) -> Result<(), IngestError> {
	let path = path.as_ref();
	let text = read_file(path).map_err(|source| IngestError::Read {
		path: path.to_path_buf(),
		source,
	})?;
	feed_text(chain, &text);
	debug!(
		"ingested {}: {} distinct windows so far",
		path.display(),
		chain.prefix_count()
	);
	Ok(())
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	fn window(words: &[&str]) -> Prefix {
		let mut prefix = Prefix::initial();
		for word in words {
			prefix.shift(word);
		}
		prefix
	}

	#[rstest]
	#[case("one\n\ntwo\n\nthree", vec!["one", "two", "three"])]
	#[case("single paragraph\n", vec!["single paragraph\n"])]
	#[case("a\n\n\n\nb", vec!["a", "", "b"])]
	#[case("", vec![""])]
	fn paragraphs_split_on_double_newline(
		#[case] text: &str,
		#[case] expected: Vec<&str>,
	) {
		assert_eq!(paragraphs(text).collect::<Vec<_>>(), expected);
	}

	#[rstest]
	#[case("the cat", 2)]
	#[case("  the \t cat \n", 2)]
	#[case("\n \t ", 0)]
	fn feed_paragraph_records_one_transition_per_word(
		#[case] paragraph: &str,
		#[case] transitions: usize,
	) {
		let mut chain = Chain::new();
		feed_paragraph(&mut chain, paragraph);
		assert_eq!(chain.prefix_count(), transitions);
	}

	#[test]
	fn feed_paragraph_records_the_expected_transitions() {
		let mut chain = Chain::new();
		feed_paragraph(&mut chain, "the cat sat. the dog sat.");

		assert_eq!(chain.weight(&Prefix::initial()), 2);
		assert_eq!(chain.weight(&window(&["the"])), 1);
		assert_eq!(chain.weight(&window(&["the", "cat"])), 1);
		assert_eq!(chain.weight(&window(&["cat", "sat."])), 1);
		assert_eq!(chain.weight(&window(&["sat.", "the"])), 1);
		assert_eq!(chain.weight(&window(&["the", "dog"])), 1);
	}

	#[test]
	fn paragraph_boundary_resets_the_window() {
		let mut chain = Chain::new();
		feed_text(&mut chain, "one two\n\nthree four");

		// No transition crosses the boundary
		assert_eq!(chain.weight(&window(&["one", "two"])), 0);
		assert_eq!(chain.weight(&window(&["two", "three"])), 0);

		// Both paragraphs were fed from the initial window
		assert_eq!(chain.weight(&Prefix::initial()), 2);
		assert_eq!(chain.weight(&window(&["one"])), 1);
		assert_eq!(chain.weight(&window(&["three"])), 1);
	}

	#[test]
	fn ingest_missing_file_reports_the_path() {
		let mut chain = Chain::new();
		let err = ingest_file(&mut chain, "no/such/corpus.txt").unwrap_err();
		assert!(err.to_string().contains("no/such/corpus.txt"));
		assert!(chain.is_empty());
	}
}
