/// Splits raw corpus text into word tokens.
///
/// - Splits on runs of whitespace
/// - Removes every character outside `[A-Za-z0-9]`, preserving case
/// - Keeps tokens that become empty after filtering
pub(crate) fn tokenize(text: &str) -> Vec<String> {
	text.split_whitespace()
		.map(|word| word.chars().filter(char::is_ascii_alphanumeric).collect())
		.collect()
}

/// Joins a window of tokens into a lookup key.
///
/// Tokens are joined with single spaces and the result is trimmed, so empty
/// tokens at the window edges do not leave stray whitespace. Empty tokens in
/// the middle of a window keep their separators.
pub(crate) fn join_key(tokens: &[String]) -> String {
	tokens.join(" ").trim().to_owned()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_on_whitespace_runs() {
		assert_eq!(tokenize("hi  my\tname\n is"), ["hi", "my", "name", "is"]);
	}

	#[test]
	fn strips_non_alphanumeric_characters() {
		assert_eq!(tokenize("Don't stop, Alice!"), ["Dont", "stop", "Alice"]);
	}

	#[test]
	fn keeps_tokens_that_become_empty() {
		assert_eq!(tokenize("a -- b"), ["a", "", "b"]);
	}

	#[test]
	fn joins_and_trims_window_keys() {
		let window = ["a".to_owned(), "b".to_owned()];
		assert_eq!(join_key(&window), "a b");

		let trailing_empty = ["a".to_owned(), String::new()];
		assert_eq!(join_key(&trailing_empty), "a");

		let inner_empty = ["a".to_owned(), String::new(), "b".to_owned()];
		assert_eq!(join_key(&inner_empty), "a  b");
	}
}
