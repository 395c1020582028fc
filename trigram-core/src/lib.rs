//! Word-level trigram text generation library.
//!
//! This crate learns trigram statistics from a training string and samples
//! new text from them:
//! - Lowercase whitespace tokenization
//! - Rare word replacement with an unknown marker
//! - Sentence framing with start/end markers
//! - Context-conditioned weighted sampling with a pluggable RNG
//!
//! No I/O happens here. Corpus acquisition and file handling belong to the
//! caller, which hands `fit` a single string.
//!
//! ```
//! use trigram_core::{PredictionInput, TrigramModel};
//!
//! let mut model = TrigramModel::new(0);
//! model.fit("the cat sat on the mat");
//! let text = model.generate(&PredictionInput::default());
//! assert_eq!(text, "the cat sat on the mat");
//! ```

/// Training configuration (`ModelConfig`, `Framing`).
pub mod config;

/// Crate error type.
pub mod error;

/// Core trigram model and generation logic.
pub mod model;

pub use config::{Framing, ModelConfig, ModelConfigBuilder};
pub use error::{Result, TrigramError};
pub use model::generator::{Generation, StopReason};
pub use model::prediction_input::{PredictionInput, StartSeed};
pub use model::token::{Context, Token};
pub use model::trigram_model::{TrainingSummary, TrigramModel};
pub use model::trigram_table::TrigramTable;
