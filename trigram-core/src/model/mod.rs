//! Top-level module for the trigram language model.
//!
//! This module provides the complete training and generation pipeline:
//! - Tokens and contexts (`Token`, `Context`)
//! - Text cleaning (`tokenizer`)
//! - Rare word substitution (`vocabulary`)
//! - Span framing with boundary markers (`framer`)
//! - Trigram counting (`TrigramTable`)
//! - Weighted random walk (`generator`)
//! - The model tying it all together (`TrigramModel`)

/// Vocabulary units, reserved markers and the two-token context.
pub mod token;

/// Lowercasing, whitespace-splitting cleaner.
pub mod tokenizer;

/// Two-pass frequency count and `<unk>` substitution.
pub mod vocabulary;

/// Sentence segmentation and `<start> <start> ... <end>` framing.
pub mod framer;

/// Continuations of a single context.
///
/// Tracks third-word counts and supports weighted random sampling.
/// The module stays private; its `State` type is re-exported below since
/// `TrigramTable::get` and `TrigramTable::contexts` hand it out read-only.
mod state;

/// Nested trigram counts keyed by context.
pub mod trigram_table;

/// Per-call generation parameters (word cap, start seed).
pub mod prediction_input;

/// The generation state machine.
pub mod generator;

/// High-level model: `fit` and `generate`.
pub mod trigram_model;

pub use state::State;
