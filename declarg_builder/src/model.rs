/// The arity of an option: how many value tokens it consumes.
///
/// The arity is always derived from the destination field (ex: [`Scalar`](crate::Scalar) is `Precisely(1)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nargs {
    /// `N`: Precisely `N` values (`0` for a switch).
    Precisely(usize),
    /// Any number of values, terminated by the end of input or a literal `--` token.
    Sequence,
}

impl std::fmt::Display for Nargs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The successful result of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All tokens were consumed and captured into their destinations.
    Complete,
    /// The help trigger (`-h` or `--help`) was encountered.
    /// No destinations were written.
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Nargs::Precisely(3).to_string(), "Precisely(3)");
        assert_eq!(Nargs::Sequence.to_string(), "Sequence");
    }
}
