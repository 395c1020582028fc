use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::framer;
use super::generator::{self, Generation};
use super::prediction_input::PredictionInput;
use super::token::{Context, Token};
use super::tokenizer::tokenize;
use super::trigram_table::TrigramTable;
use super::vocabulary::{self, Vocabulary};
use crate::config::ModelConfig;

/// Figures describing the last `fit` call.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TrainingSummary {
	/// Tokens produced by cleaning.
	pub tokens: usize,
	/// Framed spans.
	pub spans: usize,
	/// Positions replaced by `<unk>`.
	pub unknown_substitutions: usize,
	/// Distinct tokens after substitution.
	pub vocabulary_size: usize,
	/// Distinct `(w1, w2)` contexts.
	pub contexts: usize,
	/// Sum of every trigram count.
	pub trigrams: usize,
}

/// A word-level trigram language model.
///
/// # Responsibilities
/// - Run the training pipeline: clean, reduce rare words, frame, count
/// - Generate text by a context-conditioned random walk
///
/// # Invariants
/// - `table` only changes inside `fit`, which rebuilds it from scratch
/// - `trained` is `false` until the first `fit`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrigramModel {
	config: ModelConfig,
	vocabulary: Vocabulary,
	table: TrigramTable,
	trained: bool,
}

impl TrigramModel {
	/// Creates an untrained model with the given unknown threshold.
	pub fn new(unk_threshold: usize) -> Self {
		Self::with_config(ModelConfig::builder().unk_threshold(unk_threshold).build())
	}

	/// Creates an untrained model from a full configuration.
	pub fn with_config(config: ModelConfig) -> Self {
		Self { config, ..Self::default() }
	}

	pub fn config(&self) -> &ModelConfig {
		&self.config
	}

	pub fn unk_threshold(&self) -> usize {
		self.config.unk_threshold
	}

	pub fn is_trained(&self) -> bool {
		self.trained
	}

	/// Post-substitution token counts of the last training text.
	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	pub fn table(&self) -> &TrigramTable {
		&self.table
	}

	/// Count of `(w1, w2, w3)` in the trained table.
	pub fn count(&self, w1: &Token, w2: &Token, w3: &Token) -> usize {
		self.table.count(w1, w2, w3)
	}

	/// Distribution of the next token after `(w1, w2)`.
	///
	/// Empty if the context was never observed.
	pub fn next_token_probabilities(&self, w1: &Token, w2: &Token) -> Vec<(Token, f64)> {
		self.table
			.get(&Context(w1.clone(), w2.clone()))
			.map(|state| state.probabilities())
			.unwrap_or_default()
	}

	/// Trains the model on `text`, replacing any previous training.
	///
	/// Pipeline: tokenize -> segment -> reduce rare words -> frame -> count.
	/// Empty text is legal and leaves a trained model with an empty table.
	pub fn fit(&mut self, text: &str) -> TrainingSummary {
		self.vocabulary = Vocabulary::default();
		self.table.clear();

		let tokens = tokenize(text);
		let token_count = tokens.len();
		debug!("cleaned {token_count} tokens");

		let spans = framer::segment(&tokens, self.config.framing);
		let reduction = vocabulary::reduce(tokens, self.config.unk_threshold);
		debug!(
			"replaced {} tokens at threshold {}",
			reduction.substituted, self.config.unk_threshold
		);

		let framed = framer::frame(reduction.tokens, &spans);
		debug!("framed {} spans", framed.len());

		self.table = TrigramTable::from_spans(&framed);
		self.vocabulary = reduction.vocabulary;
		self.trained = true;

		let summary = TrainingSummary {
			tokens: token_count,
			spans: framed.len(),
			unknown_substitutions: reduction.substituted,
			vocabulary_size: self.vocabulary.len(),
			contexts: self.table.context_count(),
			trigrams: self.table.total(),
		};
		info!(
			"trained on {} tokens: vocabulary {}, {} unknown, {} contexts, {} trigrams",
			summary.tokens,
			summary.vocabulary_size,
			summary.unknown_substitutions,
			summary.contexts,
			summary.trigrams
		);
		summary
	}

	/// Generates text using the thread RNG.
	///
	/// Returns an empty string for an untrained or empty model, or when the
	/// starting context is unseen.
	pub fn generate(&self, input: &PredictionInput) -> String {
		self.generate_with_rng(input, &mut rand::rng())
	}

	/// Generates text using a caller supplied RNG.
	pub fn generate_with_rng<R: Rng + ?Sized>(&self, input: &PredictionInput, rng: &mut R) -> String {
		self.generate_tokens(input, rng).text()
	}

	/// Runs the walk and returns every sampled token with the stop reason.
	pub fn generate_tokens<R: Rng + ?Sized>(&self, input: &PredictionInput, rng: &mut R) -> Generation {
		if !self.trained || self.table.is_empty() {
			return Generation::empty();
		}
		generator::walk(&self.table, input, rng)
	}
}
