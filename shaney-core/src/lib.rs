//! Word-chain text generation library.
//!
//! This crate learns which words statistically follow which fixed-length
//! word sequences in a prose corpus, then produces new pseudo-random
//! text by randomly walking the learned chain. It provides:
//! - A fixed-length prefix window over the most recent words
//! - Frequency-weighted successor sampling
//! - Paragraph-oriented corpus ingestion
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core chain model and generation logic.
///
/// This module exposes the chain and its prefix window while keeping
/// the internal successor storage private.
pub mod model;

/// Corpus ingestion (paragraph splitting, word feeding, file loading).
pub mod corpus;

/// I/O utilities (file loading).
///
/// Not exposed
pub(crate) mod io;
