use crate::constant::*;
use crate::matcher::model::*;
use crate::matcher::names::*;
use crate::parser::ConfigError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The ordered options and positional argument slots, as registered.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    options: Vec<OptionConfig>,
    arguments: Vec<ArgumentConfig>,
}

impl Registry {
    pub(crate) fn register_option(&mut self, config: OptionConfig) {
        self.options.push(config);
    }

    pub(crate) fn register_argument(&mut self, config: ArgumentConfig) {
        self.arguments.push(config);
    }

    pub(crate) fn options(&self) -> &[OptionConfig] {
        &self.options
    }

    pub(crate) fn arguments(&self) -> &[ArgumentConfig] {
        &self.arguments
    }

    pub(crate) fn option(&self, index: usize) -> &OptionConfig {
        self.options
            .get(index)
            .unwrap_or_else(|| unreachable!("internal error - option index out of bounds"))
    }

    /// Check the registered names, returning the first failure.
    ///
    /// Each kind of check is a pass over the whole registry, so the reported error does not depend on registration order.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Validating {} options, {} arguments.",
                self.options.len(),
                self.arguments.len()
            );
        }

        self.validate_names()?;
        self.validate_reserved()?;
        self.validate_long_duplicates()?;
        self.validate_short_duplicates()?;
        self.validate_argument_duplicates()
    }

    fn validate_names(&self) -> Result<(), ConfigError> {
        for config in &self.options {
            let valid = match (config.long(), config.short()) {
                (None, None) => false,
                (long, short) => {
                    long.map_or(true, is_valid_long_name) && short.map_or(true, is_valid_short_name)
                }
            };

            if !valid {
                return Err(ConfigError::InvalidName(display_names(
                    config.long(),
                    config.short(),
                )));
            }
        }

        for config in &self.arguments {
            if !is_valid_long_name(config.name()) {
                return Err(ConfigError::InvalidName(config.name().to_string()));
            }
        }

        Ok(())
    }

    fn validate_reserved(&self) -> Result<(), ConfigError> {
        for config in &self.options {
            if config.long() == Some(HELP_NAME) {
                return Err(ConfigError::ReservedName(format!("--{HELP_NAME}")));
            }

            if config.short() == Some(HELP_SHORT) {
                return Err(ConfigError::ReservedName(format!("-{HELP_SHORT}")));
            }
        }

        Ok(())
    }

    fn validate_long_duplicates(&self) -> Result<(), ConfigError> {
        for (i, config) in self.options.iter().enumerate() {
            if let Some(long) = config.long() {
                if self.options[i + 1..]
                    .iter()
                    .any(|other| other.long() == Some(long))
                {
                    return Err(ConfigError::DuplicateLongName(long.to_string()));
                }
            }
        }

        Ok(())
    }

    fn validate_short_duplicates(&self) -> Result<(), ConfigError> {
        for (i, config) in self.options.iter().enumerate() {
            if let Some(short) = config.short() {
                if self.options[i + 1..]
                    .iter()
                    .any(|other| other.short() == Some(short))
                {
                    return Err(ConfigError::DuplicateShortName(short));
                }
            }
        }

        Ok(())
    }

    fn validate_argument_duplicates(&self) -> Result<(), ConfigError> {
        for (i, config) in self.arguments.iter().enumerate() {
            if self.arguments[i + 1..]
                .iter()
                .any(|other| other.name() == config.name())
            {
                return Err(ConfigError::DuplicateArgumentName(
                    config.name().to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Find the first option whose long name matches the body of a long option token (without its leading `--`).
    pub(crate) fn find_long<'t>(&self, body: &'t str) -> Option<(usize, Option<&'t str>)> {
        self.options.iter().enumerate().find_map(|(index, config)| {
            config
                .long()
                .and_then(|long| match_long_name(long, body))
                .map(|inline| (index, inline))
        })
    }

    /// Find the first option with the short name.
    pub(crate) fn find_short(&self, short: char) -> Option<usize> {
        self.options
            .iter()
            .position(|config| config.short() == Some(short))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Nargs;
    use rand::seq::SliceRandom;
    use rand::thread_rng;
    use rstest::rstest;

    fn option(long: &str, short: Option<char>) -> OptionConfig {
        OptionConfig::new(Some(long.to_string()), short, Nargs::Precisely(1))
    }

    fn registry(options: Vec<OptionConfig>, arguments: Vec<&str>) -> Registry {
        let mut registry = Registry::default();
        for config in options {
            registry.register_option(config);
        }
        for name in arguments {
            registry.register_argument(ArgumentConfig::new(name));
        }
        registry
    }

    #[test]
    fn empty() {
        let registry = Registry::default();
        assert_eq!(registry.validate(), Ok(()));
        assert!(registry.options().is_empty());
        assert!(registry.arguments().is_empty());
    }

    #[test]
    fn valid() {
        // Setup
        let registry = registry(
            vec![
                option("key", Some('k')),
                option("flag", None),
                OptionConfig::new(None, Some('r'), Nargs::Sequence),
            ],
            vec!["first", "second"],
        );

        // Execute
        let result = registry.validate();

        // Verify
        assert_eq!(result, Ok(()));
        // Idempotent.
        assert_eq!(registry.validate(), Ok(()));
    }

    #[rstest]
    #[case(option("fla  g", None), "--fla  g")]
    #[case(option("", None), "--")]
    #[case(option("tab\tbed", Some('t')), "--tab\tbed/-t")]
    #[case(OptionConfig::new(None, None, Nargs::Precisely(0)), "<unnamed>")]
    #[case(OptionConfig::new(None, Some('\0'), Nargs::Precisely(0)), "<unnamed>")]
    #[case(OptionConfig::new(None, Some(' '), Nargs::Precisely(0)), "- ")]
    #[case(OptionConfig::new(None, Some('-'), Nargs::Precisely(0)), "--")]
    fn invalid_name(#[case] config: OptionConfig, #[case] expected: &str) {
        let registry = registry(vec![option("key", Some('k')), config], vec![]);
        assert_eq!(
            registry.validate(),
            Err(ConfigError::InvalidName(expected.to_string()))
        );
    }

    #[test]
    fn invalid_argument_name() {
        let registry = registry(vec![], vec!["two words"]);
        assert_eq!(
            registry.validate(),
            Err(ConfigError::InvalidName("two words".to_string()))
        );
    }

    #[rstest]
    #[case(option("help", None), "--help")]
    #[case(option("help", Some('x')), "--help")]
    #[case(option("key", Some('h')), "-h")]
    #[case(OptionConfig::new(None, Some('h'), Nargs::Precisely(0)), "-h")]
    fn reserved_name(#[case] config: OptionConfig, #[case] expected: &str) {
        let registry = registry(vec![option("other", Some('o')), config], vec![]);
        assert_eq!(
            registry.validate(),
            Err(ConfigError::ReservedName(expected.to_string()))
        );
    }

    #[test]
    fn reserved_name_allows_similar() {
        let registry = registry(vec![option("helper", Some('H')), option("h", None)], vec![]);
        assert_eq!(registry.validate(), Ok(()));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    #[case(10)]
    fn duplicate_long_name_any_order(#[case] others: usize) {
        // Setup
        let mut options: Vec<OptionConfig> = (0..others)
            .map(|i| option(format!("other{i}").as_str(), None))
            .collect();
        options.push(option("key", Some('k')));
        options.push(option("key", Some('j')));
        options.shuffle(&mut thread_rng());
        let registry = registry(options, vec![]);

        // Execute
        let result = registry.validate();

        // Verify
        assert_eq!(result, Err(ConfigError::DuplicateLongName("key".to_string())));
    }

    #[test]
    fn duplicate_short_name() {
        let registry = registry(vec![option("key", Some('k')), option("kit", Some('k'))], vec![]);
        assert_eq!(registry.validate(), Err(ConfigError::DuplicateShortName('k')));
    }

    #[test]
    fn duplicate_long_reported_before_short() {
        let registry = registry(
            vec![
                option("a", Some('x')),
                option("b", Some('x')),
                option("c", None),
                option("c", None),
            ],
            vec![],
        );
        assert_eq!(
            registry.validate(),
            Err(ConfigError::DuplicateLongName("c".to_string()))
        );
    }

    #[test]
    fn duplicate_argument_name() {
        let registry = registry(vec![], vec!["item", "other", "item"]);
        assert_eq!(
            registry.validate(),
            Err(ConfigError::DuplicateArgumentName("item".to_string()))
        );
    }

    #[test]
    fn argument_may_share_option_name() {
        let registry = registry(vec![option("item", None)], vec!["item"]);
        assert_eq!(registry.validate(), Ok(()));
    }

    #[rstest]
    #[case("key", Some((0, None)))]
    #[case("key=1", Some((0, Some("1"))))]
    #[case("keyword", Some((1, None)))]
    #[case("keyword=", Some((1, Some(""))))]
    #[case("keys", None)]
    #[case("", None)]
    fn find_long(#[case] body: &str, #[case] expected: Option<(usize, Option<&str>)>) {
        let registry = registry(vec![option("key", None), option("keyword", None)], vec![]);
        assert_eq!(registry.find_long(body), expected);
    }

    #[test]
    fn find_first_match_wins() {
        let registry = registry(
            vec![
                option("key", Some('k')),
                option("key", Some('k')),
                option("other", None),
            ],
            vec![],
        );
        assert_eq!(registry.find_long("key"), Some((0, None)));
        assert_eq!(registry.find_short('k'), Some(0));
        assert_eq!(registry.find_short('o'), None);
    }
}
