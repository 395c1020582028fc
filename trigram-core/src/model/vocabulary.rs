use super::token::Token;
use std::collections::HashMap;

/// Occurrence counts per token.
///
/// Built once per training call. The model keeps the post-substitution
/// vocabulary for inspection; nothing else depends on it after `fit`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vocabulary {
	counts: HashMap<Token, usize>,
}

impl Vocabulary {
	/// Counts every token of `tokens`.
	pub fn from_tokens(tokens: &[Token]) -> Self {
		let mut vocabulary = Self::default();
		for token in tokens {
			*vocabulary.counts.entry(token.clone()).or_insert(0) += 1;
		}
		vocabulary
	}

	/// Number of occurrences of `token` (0 if never seen).
	pub fn count(&self, token: &Token) -> usize {
		self.counts.get(token).copied().unwrap_or(0)
	}

	/// Number of distinct tokens.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Iterates over `(token, count)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&Token, usize)> {
		self.counts.iter().map(|(t, c)| (t, *c))
	}
}

/// Output of [`reduce`].
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
	/// Input sequence with rare words replaced by `Token::Unknown`.
	pub tokens: Vec<Token>,
	/// Counts over the reduced sequence.
	pub vocabulary: Vocabulary,
	/// How many positions were replaced.
	pub substituted: usize,
}

/// Replaces every word whose count is `<= threshold` with `Token::Unknown`.
///
/// Two explicit passes: count the whole sequence first, then substitute.
/// Reserved markers are never substituted. Must run before framing so
/// boundary markers take no part in the threshold.
pub fn reduce(tokens: Vec<Token>, threshold: usize) -> Reduction {
	let raw = Vocabulary::from_tokens(&tokens);

	let mut substituted = 0;
	let tokens: Vec<Token> = tokens
		.into_iter()
		.map(|token| {
			if !token.is_reserved() && raw.count(&token) <= threshold {
				substituted += 1;
				Token::Unknown
			} else {
				token
			}
		})
		.collect();

	let vocabulary = Vocabulary::from_tokens(&tokens);
	Reduction { tokens, vocabulary, substituted }
}
