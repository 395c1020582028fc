use std::collections::BTreeMap;

use rand::Rng;

use super::token::Token;

/// All observed continuations of a single context `(w1, w2)`.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate third-word occurrences during training
/// - Pick the next token using weighted random sampling
///
/// ## Invariants
/// - Each transition count is strictly positive
/// - `total` equals the sum of all transition counts
#[derive(Clone, Debug, Default, PartialEq)]
pub struct State {
	/// Outgoing transitions indexed by the third word.
	/// Ordered so that a seeded RNG walks identically on every instance.
	/// Example: { "cat" => 42, <end> => 3 }
	transitions: BTreeMap<Token, usize>,
	total: usize,
}

impl State {
	/// Records one occurrence of `next` after this context.
	pub fn add_transition(&mut self, next: Token) {
		*self.transitions.entry(next).or_insert(0) += 1;
		self.total += 1;
	}

	/// Number of times `next` followed this context.
	pub fn count(&self, next: &Token) -> usize {
		self.transitions.get(next).copied().unwrap_or(0)
	}

	/// Number of times this context was observed.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Iterates over `(third word, count)` in token order.
	pub fn transitions(&self) -> impl Iterator<Item = (&Token, usize)> {
		self.transitions.iter().map(|(t, c)| (t, *c))
	}

	/// `count / total` for every continuation, in token order.
	pub fn probabilities(&self) -> Vec<(Token, f64)> {
		if self.total == 0 {
			return Vec::new();
		}
		let total = self.total as f64;
		self.transitions
			.iter()
			.map(|(t, c)| (t.clone(), *c as f64 / total))
			.collect()
	}

	/// Picks the next token using weighted random sampling.
	///
	/// The probability of selecting a token is proportional to its
	/// occurrence count: draw `r` in `0..total`, then subtract counts until
	/// `r` falls inside a bucket.
	///
	/// Returns `None` if the state has no transitions.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Token> {
		if self.total == 0 {
			return None;
		}

		let mut r = rng.random_range(0..self.total);
		for (next, occurrence) in &self.transitions {
			if r < *occurrence {
				return Some(next);
			}
			r -= occurrence;
		}

		// Unreachable while `total` matches the transition sum.
		self.transitions.keys().next_back()
	}
}
