/// The input tokens, with a caret pointing at the offending token.
///
/// ```text
/// --key 1 --bogus
///         ^
/// ```
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    /// The `offset` is the index of the offending token.
    pub(crate) fn new(offset: usize, tokens: &[&str]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        // Each preceding token contributes its length plus a separating space.
        let caret = self
            .tokens
            .iter()
            .take(self.offset)
            .map(|token| token.chars().count() + 1)
            .sum::<usize>();
        // Past the end (or no tokens at all) points at the final character.
        let caret = std::cmp::min(caret, projection.chars().count().saturating_sub(1));

        write!(f, "{projection}\n{:caret$}^", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![], "\n^")]
    #[case(3, vec![], "\n^")]
    #[case(0, vec!["abc"], "abc\n^")]
    #[case(1, vec!["abc"], "abc\n  ^")]
    #[case(0, vec!["--key", "1", "--bogus"], "--key 1 --bogus\n^")]
    #[case(1, vec!["--key", "1", "--bogus"], "--key 1 --bogus\n      ^")]
    #[case(2, vec!["--key", "1", "--bogus"], "--key 1 --bogus\n        ^")]
    #[case(1, vec!["ü", "x"], "ü x\n  ^")]
    fn error_context(#[case] offset: usize, #[case] tokens: Vec<&str>, #[case] expected: &str) {
        assert_eq!(ErrorContext::new(offset, &tokens).to_string(), expected);
    }
}
