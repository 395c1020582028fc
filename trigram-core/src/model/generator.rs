use super::prediction_input::PredictionInput;
use super::token::Token;
use super::trigram_table::TrigramTable;
use log::trace;
use rand::Rng;

/// Why a walk stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
	/// `<end>` was sampled.
	EndSampled,
	/// The current context was never observed in training (implicit `<end>`).
	UnseenContext,
	/// `max_length` words were sampled.
	MaxLength,
	/// The model had nothing to walk (untrained or empty).
	Untrained,
}

/// The raw outcome of a walk.
#[derive(Clone, Debug, PartialEq)]
pub struct Generation {
	/// Every sampled token, `<unk>` included, the final `<end>` excluded.
	pub tokens: Vec<Token>,
	pub stop: StopReason,
}

impl Generation {
	pub(crate) fn empty() -> Self {
		Self { tokens: Vec::new(), stop: StopReason::Untrained }
	}

	/// Space-joined visible words; markers and `<unk>` are dropped.
	pub fn text(&self) -> String {
		render(&self.tokens)
	}
}

/// Joins the word tokens of `tokens` with single spaces.
pub fn render(tokens: &[Token]) -> String {
	tokens.iter().filter_map(Token::as_word).collect::<Vec<_>>().join(" ")
}

/// Markov random walk over `table`.
///
/// # Behavior
/// - Starts from `input.start_seed`
/// - At each step, samples the next token proportionally to its count
///   for the current context
/// - Stops on `<end>`, on an unseen context, or once `max_length` tokens
///   were sampled, whichever comes first
/// - `<unk>` counts toward `max_length` and feeds the context, it is only
///   hidden at render time
///
/// Never fails and never loops past `max_length` steps.
pub fn walk<R: Rng + ?Sized>(table: &TrigramTable, input: &PredictionInput, rng: &mut R) -> Generation {
	let mut context = input.start_seed.context();
	let mut tokens = Vec::new();

	let stop = loop {
		if tokens.len() >= input.max_length() {
			break StopReason::MaxLength;
		}

		let next = match table.get(&context).and_then(|state| state.predict(rng)) {
			Some(next) => next.clone(),
			None => {
				trace!("unseen context ({}, {}), stopping", context.0, context.1);
				break StopReason::UnseenContext;
			}
		};
		trace!("({}, {}) -> {}", context.0, context.1, next);

		if next == Token::End {
			break StopReason::EndSampled;
		}

		tokens.push(next.clone());
		context = context.advance(next);
	};

	Generation { tokens, stop }
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn w(s: &str) -> Token {
		Token::word(s)
	}

	fn chain(words: &[&str]) -> TrigramTable {
		let mut span = vec![Token::Start, Token::Start];
		span.extend(words.iter().map(|s| w(s)));
		span.push(Token::End);
		TrigramTable::from_spans(&[span])
	}

	#[test]
	fn deterministic_chain_reaches_end() {
		let table = chain(&["the", "cat", "sat"]);
		let g = walk(&table, &PredictionInput::default(), &mut StdRng::seed_from_u64(0));
		assert_eq!(g.stop, StopReason::EndSampled);
		assert_eq!(g.text(), "the cat sat");
	}

	#[test]
	fn max_length_caps_output() {
		let table = chain(&["a", "b", "c", "d", "e"]);
		let input = PredictionInput::new(2).unwrap();
		let g = walk(&table, &input, &mut StdRng::seed_from_u64(0));
		assert_eq!(g.stop, StopReason::MaxLength);
		assert_eq!(g.tokens, vec![w("a"), w("b")]);
	}

	#[test]
	fn unseen_seed_stops_immediately() {
		let table = chain(&["a", "b"]);
		let input = PredictionInput::default().with_seed("x", "y");
		let g = walk(&table, &input, &mut StdRng::seed_from_u64(0));
		assert_eq!(g.stop, StopReason::UnseenContext);
		assert!(g.tokens.is_empty());
		assert_eq!(g.text(), "");
	}

	#[test]
	fn seed_continues_from_context() {
		let table = chain(&["the", "cat", "sat", "down"]);
		let input = PredictionInput::default().with_seed("the", "cat");
		let g = walk(&table, &input, &mut StdRng::seed_from_u64(3));
		assert_eq!(g.text(), "sat down");
	}

	#[test]
	fn unknown_is_walked_but_not_rendered() {
		let span = vec![Token::Start, Token::Start, w("a"), Token::Unknown, w("b"), Token::End];
		let table = TrigramTable::from_spans(&[span]);
		let g = walk(&table, &PredictionInput::default(), &mut StdRng::seed_from_u64(9));
		assert_eq!(g.tokens, vec![w("a"), Token::Unknown, w("b")]);
		assert_eq!(g.text(), "a b");
	}

	#[test]
	fn render_drops_markers() {
		let tokens = [Token::Start, w("hi"), Token::Unknown, w("there"), Token::End];
		assert_eq!(render(&tokens), "hi there");
		assert_eq!(render(&[]), "");
	}
}
