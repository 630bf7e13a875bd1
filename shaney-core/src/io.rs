use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads a text file fully into a `String`.
///
/// Paragraph structure matters to the caller, so the content is kept
/// whole rather than split into lines.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> std::io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}
