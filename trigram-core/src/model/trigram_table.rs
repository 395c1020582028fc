use super::state::State;
use super::token::{Context, Token};
use std::collections::HashMap;

/// Trigram counts: `(w1, w2) -> w3 -> count`.
///
/// The first two levels of the conceptual `w1 -> w2 -> w3` mapping are
/// folded into a single [`Context`] key.
///
/// # Responsibilities
/// - Accumulate counts from framed spans
/// - Answer count and distribution queries for a context
///
/// # Invariants
/// - Every stored count is >= 1, no zero entries
/// - Every stored `State` has at least one transition
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrigramTable {
	states: HashMap<Context, State>,
}

impl TrigramTable {
	/// Builds a table from framed spans.
	pub fn from_spans(spans: &[Vec<Token>]) -> Self {
		let mut table = Self::default();
		for span in spans {
			table.add_span(span);
		}
		table
	}

	/// Counts every sliding `(w1, w2, w3)` window of `span`.
	///
	/// Spans shorter than three tokens contribute nothing.
	pub fn add_span(&mut self, span: &[Token]) {
		for window in span.windows(3) {
			let context = Context(window[0].clone(), window[1].clone());
			self.states.entry(context).or_default().add_transition(window[2].clone());
		}
	}

	/// Continuations of `context`, or `None` if it was never observed.
	pub fn get(&self, context: &Context) -> Option<&State> {
		self.states.get(context)
	}

	/// Count of `(w1, w2, w3)`, 0 if unseen.
	pub fn count(&self, w1: &Token, w2: &Token, w3: &Token) -> usize {
		self.states
			.get(&Context(w1.clone(), w2.clone()))
			.map_or(0, |state| state.count(w3))
	}

	/// Number of times `(w1, w2)` was observed as a context.
	pub fn context_total(&self, context: &Context) -> usize {
		self.states.get(context).map_or(0, State::total)
	}

	/// Iterates over every observed context with its continuations.
	pub fn contexts(&self) -> impl Iterator<Item = (&Context, &State)> {
		self.states.iter()
	}

	/// Iterates over every `(w1, w2, w3, count)` entry.
	pub fn trigrams(&self) -> impl Iterator<Item = (&Token, &Token, &Token, usize)> {
		self.states.iter().flat_map(|(Context(w1, w2), state)| {
			state.transitions().map(move |(w3, c)| (w1, w2, w3, c))
		})
	}

	/// Number of distinct contexts.
	pub fn context_count(&self) -> usize {
		self.states.len()
	}

	/// Number of distinct trigrams.
	pub fn len(&self) -> usize {
		self.states.values().map(|s| s.transitions().count()).sum()
	}

	/// Sum of all trigram counts.
	pub fn total(&self) -> usize {
		self.states.values().map(State::total).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	pub(crate) fn clear(&mut self) {
		self.states.clear();
	}
}
