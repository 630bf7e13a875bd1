//! Top-level module for the word-chain generation system.
//!
//! This module provides the learned chain and its building blocks:
//! - The chain itself (`Chain`), mapping prefix windows to successors
//! - The fixed-length prefix window (`Prefix`)
//! - Internal frequency-weighted successor storage (`WordBag`)

/// The learned chain: prefix window to weighted-successor storage.
///
/// Supports transition recording during ingestion and lazy weighted
/// random walks during generation.
pub mod chain;

/// Fixed-length window of trailing context words.
///
/// Used as the chain's lookup key; shifts one word at a time.
pub mod prefix;

/// Internal frequency-weighted successor set for a single window.
///
/// Tracks occurrence counts and supports weighted random sampling.
/// This module is not exposed publicly.
mod word_bag;
