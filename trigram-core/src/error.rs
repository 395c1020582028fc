//! Error type shared across the crate.

use thiserror::Error;

/// Convenient result type used throughout the crate.
pub type Result<T, E = TrigramError> = std::result::Result<T, E>;

/// The only failures the model reports: values with no sensible fallback.
///
/// Training and generation themselves are total; empty corpora, untrained
/// models and unseen contexts all degrade to empty output instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrigramError {
	/// A per-call argument was rejected (e.g. `max_length == 0`).
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
}
