use crate::model::Nargs;

pub(crate) type OffsetValue<'t> = (usize, &'t str);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionConfig {
    long: Option<String>,
    short: Option<char>,
    nargs: Nargs,
}

impl OptionConfig {
    pub(crate) fn new(long: Option<String>, short: Option<char>, nargs: Nargs) -> Self {
        Self {
            long,
            // The null character is the conventional 'no short name'.
            short: short.filter(|s| *s != '\0'),
            nargs,
        }
    }

    pub(crate) fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub(crate) fn short(&self) -> Option<char> {
        self.short
    }

    pub(crate) fn nargs(&self) -> Nargs {
        self.nargs
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ArgumentConfig {
    name: String,
}

impl ArgumentConfig {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

/// Where a group of tokens is destined, by registration index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    Option(usize),
    Argument(usize),
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct MatchTokens<'t> {
    pub target: Target,
    pub values: Vec<OffsetValue<'t>>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Matches<'t> {
    Complete(Vec<MatchTokens<'t>>),
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some('k'), Some('k'))]
    #[case(Some('\0'), None)]
    #[case(None, None)]
    fn option_config_short(#[case] short: Option<char>, #[case] expected: Option<char>) {
        let config = OptionConfig::new(Some("key".to_string()), short, Nargs::Precisely(1));
        assert_eq!(config.long(), Some("key"));
        assert_eq!(config.short(), expected);
        assert_eq!(config.nargs(), Nargs::Precisely(1));
    }
}
