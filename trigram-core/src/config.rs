//! Model construction settings.

use serde::{Deserialize, Serialize};

/// Default value of [`ModelConfig::unk_threshold`].
pub const DEFAULT_UNK_THRESHOLD: usize = 1;

/// How the cleaned token stream is split into framed spans.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Framing {
	/// The whole training text is a single span.
	#[default]
	WholeText,
	/// A span ends after each token ending in `.`, `!` or `?`.
	Sentences,
}

/// Settings fixed at model construction.
///
/// Every value is valid: a negative threshold cannot be expressed, and any
/// non-negative one is accepted (a huge threshold simply turns every word
/// into `<unk>`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ModelConfig {
	/// Words occurring this many times or fewer become `<unk>`.
	pub unk_threshold: usize,
	/// Span segmentation applied before framing.
	pub framing: Framing,
}

impl Default for ModelConfig {
	fn default() -> Self {
		Self { unk_threshold: DEFAULT_UNK_THRESHOLD, framing: Framing::default() }
	}
}

impl ModelConfig {
	/// Returns a builder initialised with [`ModelConfig::default`].
	#[must_use]
	pub fn builder() -> ModelConfigBuilder {
		ModelConfigBuilder::default()
	}
}

/// Builder for [`ModelConfig`].
#[derive(Debug, Default, Clone)]
pub struct ModelConfigBuilder {
	cfg: ModelConfig,
}

impl ModelConfigBuilder {
	/// Sets the unknown-word threshold.
	#[must_use]
	pub fn unk_threshold(mut self, value: usize) -> Self {
		self.cfg.unk_threshold = value;
		self
	}

	/// Sets span segmentation.
	#[must_use]
	pub fn framing(mut self, value: Framing) -> Self {
		self.cfg.framing = value;
		self
	}

	#[must_use]
	pub fn build(self) -> ModelConfig {
		self.cfg
	}
}
