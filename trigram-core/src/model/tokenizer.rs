use super::token::Token;

/// Cleans raw text and splits it into word tokens.
///
/// - Converts everything to lowercase
/// - Collapses runs of spaces, tabs and newlines
/// - Keeps punctuation attached to its word (`"cat."` stays `"cat."`)
///
/// Total function: empty or blank input yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<Token> {
	text.split_whitespace()
		.map(|word| Token::Word(word.to_lowercase()))
		.collect()
}
