use std::fmt;

/// Textual spelling of the sentence start marker.
pub const START_TOKEN: &str = "<start>";

/// Textual spelling of the sentence end marker.
pub const END_TOKEN: &str = "<end>";

/// Textual spelling of the out-of-vocabulary marker.
pub const UNK_TOKEN: &str = "<unk>";

/// A single unit of the trigram vocabulary.
///
/// Reserved markers are distinct variants rather than magic strings, so a
/// corpus that literally contains `"<end>"` yields a `Word`, never the marker.
///
/// # Invariants
/// - The tokenizer only ever produces `Word`
/// - `Start` is only ever injected by framing, two at a time
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
	/// Sentence start marker (doubled in front of every span).
	Start,
	/// Sentence end marker (one after every span).
	End,
	/// Replacement for words at or below the unknown threshold.
	Unknown,
	/// An ordinary lowercase word, punctuation included.
	Word(String),
}

impl Token {
	/// Builds a word token.
	pub fn word(value: impl Into<String>) -> Self {
		Token::Word(value.into())
	}

	/// Interprets a raw string as a token without cleaning it.
	///
	/// The three marker spellings (`<start>`, `<end>`, `<unk>`) map to their
	/// markers, everything else becomes a `Word` verbatim.
	pub fn parse(raw: &str) -> Self {
		match raw {
			START_TOKEN => Token::Start,
			END_TOKEN => Token::End,
			UNK_TOKEN => Token::Unknown,
			other => Token::Word(other.to_owned()),
		}
	}

	/// Returns `true` for `Start`, `End` and `Unknown`.
	pub fn is_reserved(&self) -> bool {
		!matches!(self, Token::Word(_))
	}

	/// Returns the word text, or `None` for a marker.
	pub fn as_word(&self) -> Option<&str> {
		match self {
			Token::Word(w) => Some(w),
			_ => None,
		}
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Token::Start => f.write_str(START_TOKEN),
			Token::End => f.write_str(END_TOKEN),
			Token::Unknown => f.write_str(UNK_TOKEN),
			Token::Word(w) => f.write_str(w),
		}
	}
}

impl From<&str> for Token {
	fn from(raw: &str) -> Self {
		Token::parse(raw)
	}
}

/// The two most recent tokens `(w1, w2)`.
///
/// Used both as the lookup key of the trigram table and as the
/// generation state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Context(pub Token, pub Token);

impl Context {
	/// The initial state of an unseeded walk: `(<start>, <start>)`.
	pub fn boundary() -> Self {
		Context(Token::Start, Token::Start)
	}

	/// Shifts the window forward: `(w1, w2) + w3 -> (w2, w3)`.
	pub fn advance(self, next: Token) -> Self {
		Context(self.1, next)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_maps_marker_spellings() {
		assert_eq!(Token::parse("<start>"), Token::Start);
		assert_eq!(Token::parse("<end>"), Token::End);
		assert_eq!(Token::parse("<unk>"), Token::Unknown);
		assert_eq!(Token::parse("The"), Token::word("The"));
	}

	#[test]
	fn display_round_trips_markers() {
		for t in [Token::Start, Token::End, Token::Unknown, Token::word("cat.")] {
			assert_eq!(Token::parse(&t.to_string()), t);
		}
	}

	#[test]
	fn advance_shifts_window() {
		let ctx = Context::boundary().advance(Token::word("the"));
		assert_eq!(ctx, Context(Token::Start, Token::word("the")));
		let ctx = ctx.advance(Token::word("cat"));
		assert_eq!(ctx, Context(Token::word("the"), Token::word("cat")));
	}
}
