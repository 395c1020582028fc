use super::token::{Context, Token};
use crate::error::{Result, TrigramError};

/// Default word cap of a single generation.
pub const DEFAULT_MAX_LENGTH: usize = 50;

/// Strategy used to select the starting context of a generation.
///
/// # Variants
/// - `Boundary`: start from `(<start>, <start>)`, i.e. a fresh sentence.
/// - `Custom(w1, w2)`: start from the given pair, used as given (not
///   cleaned, not checked against the vocabulary).
#[derive(Clone, Debug, Default, PartialEq)]
pub enum StartSeed {
	#[default]
	Boundary,
	Custom(Token, Token),
}

impl StartSeed {
	/// Builds a custom seed from two raw strings via [`Token::parse`].
	pub fn custom(w1: &str, w2: &str) -> Self {
		StartSeed::Custom(Token::parse(w1), Token::parse(w2))
	}

	/// The context the walk starts from.
	pub fn context(&self) -> Context {
		match self {
			StartSeed::Boundary => Context::boundary(),
			StartSeed::Custom(w1, w2) => Context(w1.clone(), w2.clone()),
		}
	}
}

/// Per-call generation parameters.
///
/// # Invariants
/// - `max_length` is always > 0
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionInput {
	/// Maximum number of sampled words (the end marker excluded).
	max_length: usize,

	/// Starting context.
	pub start_seed: StartSeed,
}

impl Default for PredictionInput {
	fn default() -> Self {
		Self { max_length: DEFAULT_MAX_LENGTH, start_seed: StartSeed::Boundary }
	}
}

impl PredictionInput {
	/// Creates an input with the given word cap and no seed.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `max_length` is 0.
	pub fn new(max_length: usize) -> Result<Self> {
		let mut input = Self::default();
		input.set_max_length(max_length)?;
		Ok(input)
	}

	/// Replaces the starting context with `(w1, w2)`.
	#[must_use]
	pub fn with_seed(mut self, w1: &str, w2: &str) -> Self {
		self.start_seed = StartSeed::custom(w1, w2);
		self
	}

	/// Returns the current word cap.
	pub fn max_length(&self) -> usize {
		self.max_length
	}

	/// Sets the word cap.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `max_length` is 0.
	pub fn set_max_length(&mut self, max_length: usize) -> Result<()> {
		if max_length == 0 {
			return Err(TrigramError::InvalidArgument("max_length must be greater than zero".to_owned()));
		}
		self.max_length = max_length;
		Ok(())
	}
}
