use super::token::Token;
use crate::config::Framing;

/// Characters closing a sentence under [`Framing::Sentences`].
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Computes span lengths over the cleaned (not yet reduced) tokens.
///
/// Segmentation has to look at the words before unknown substitution,
/// otherwise a rare `"end."` would lose its terminator.
///
/// - `WholeText`: one span covering everything
/// - `Sentences`: a span closes after every token ending in `.`, `!` or `?`,
///   leftover tokens form a final span
///
/// Empty input yields no spans at all.
pub fn segment(tokens: &[Token], framing: Framing) -> Vec<usize> {
	if tokens.is_empty() {
		return Vec::new();
	}

	match framing {
		Framing::WholeText => vec![tokens.len()],
		Framing::Sentences => {
			let mut spans = Vec::new();
			let mut current = 0;
			for token in tokens {
				current += 1;
				let closes = token
					.as_word()
					.is_some_and(|w| w.ends_with(SENTENCE_TERMINATORS));
				if closes {
					spans.push(current);
					current = 0;
				}
			}
			if current > 0 {
				spans.push(current);
			}
			spans
		}
	}
}

/// Wraps each span as `<start> <start> ... <end>`.
///
/// `spans` are lengths from [`segment`]; their sum must not exceed
/// `tokens.len()`. Every framed span holds at least three tokens.
pub fn frame(tokens: Vec<Token>, spans: &[usize]) -> Vec<Vec<Token>> {
	let mut framed = Vec::with_capacity(spans.len());
	let mut rest = tokens.into_iter();

	for &len in spans {
		let mut span = Vec::with_capacity(len + 3);
		span.push(Token::Start);
		span.push(Token::Start);
		span.extend(rest.by_ref().take(len));
		span.push(Token::End);
		framed.push(span);
	}

	framed
}
