use thiserror::Error;

use crate::api::InvalidCapture;
use crate::matcher::*;
use crate::model::Outcome;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We need a (dyn .. [ignoring T] ..) here in order to put all the fields of varying types T under one collection.
pub(crate) type OptionCapture<'a, 't> = (OptionConfig, Box<dyn AnonymousCapturable<'t> + 'a>);
pub(crate) type ArgumentCapture<'a, 't> = (ArgumentConfig, Box<dyn AnonymousCapturable<'t> + 'a>);

/// An error in the configuration of the command line parser.
///
/// These are structural: they are detected when the parser is built, before any token is parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A name is empty or contains whitespace, or an option has neither a long nor short name.
    #[error("Config error: invalid name '{0}'.")]
    InvalidName(String),

    /// Two options share a long name.
    #[error("Config error: cannot duplicate the option '--{0}'.")]
    DuplicateLongName(String),

    /// Two options share a short name.
    #[error("Config error: cannot duplicate the short option '-{0}'.")]
    DuplicateShortName(char),

    /// An option claims a name of the built-in help switch.
    #[error("Config error: '{0}' is reserved for the help switch.")]
    ReservedName(String),

    /// Two positional arguments share a name.
    #[error("Config error: cannot duplicate the argument '{0}'.")]
    DuplicateArgumentName(String),
}

/// An error in the input tokens.
///
/// Every variant carries the offending raw token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The token looks like an option, but no option matches it.
    #[error("Parse error: unknown option '{token}'.")]
    UnknownOption {
        /// The offending token.
        token: String,
    },

    /// The option requires a value, but the input ended.
    #[error("Parse error: option '{token}' is missing its value.")]
    MissingValue {
        /// The offending token.
        token: String,
    },

    /// The option requires more values than the input provides.
    #[error("Parse error: option '{token}' expects {expected} values, but only {provided} were provided.")]
    InsufficientArguments {
        /// The offending token.
        token: String,
        /// The number of values the option requires.
        expected: usize,
        /// The number of values available.
        provided: usize,
    },

    /// The value could not be converted to the destination type.
    #[error("Parse error: invalid value '{token}' for type '{type_name}': {reason}.")]
    InvalidValue {
        /// The offending token.
        token: String,
        /// The destination type.
        type_name: &'static str,
        /// The reason the conversion failed.
        reason: String,
    },

    /// A value was supplied (via `=` or a glued short value) to an option that takes none.
    #[error("Parse error: option '{token}' does not take a value.")]
    UnexpectedValue {
        /// The offending token.
        token: String,
    },

    /// A positional token, beyond the declared positional arguments.
    #[error("Parse error: unexpected argument '{token}'.")]
    UnexpectedArgument {
        /// The offending token.
        token: String,
    },
}

impl ParseError {
    /// The offending raw token.
    pub fn token(&self) -> &str {
        match self {
            ParseError::UnknownOption { token }
            | ParseError::MissingValue { token }
            | ParseError::InsufficientArguments { token, .. }
            | ParseError::InvalidValue { token, .. }
            | ParseError::UnexpectedValue { token }
            | ParseError::UnexpectedArgument { token } => token,
        }
    }
}

impl From<InvalidCapture> for ParseError {
    fn from(error: InvalidCapture) -> Self {
        match error {
            InvalidCapture::InvalidConversion {
                token,
                type_name,
                reason,
            } => ParseError::InvalidValue {
                token,
                type_name,
                reason,
            },
        }
    }
}

/// Behaviour to capture an implicit generic type T from an input `&str`.
///
/// We use this at the middle/top of the parser object graph so that different types may all be 'captured' in a single parser.
pub(crate) trait AnonymousCapturable<'t> {
    /// Declare that the parameter has been matched.
    fn matched(&mut self);

    /// Capture a value anonymously for this parameter.
    fn capture(&mut self, value: &'t str) -> Result<(), InvalidCapture>;
}


pub(crate) struct Parser<'a, 't> {
    registry: Registry,
    option_captures: Vec<Box<dyn AnonymousCapturable<'t> + 'a>>,
    argument_captures: Vec<Box<dyn AnonymousCapturable<'t> + 'a>>,
}

impl<'a, 't> std::fmt::Debug for Parser<'a, 't> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<'a, 't> Parser<'a, 't> {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Registry::default(), Vec::default(), Vec::default())
            .expect("an empty registry must be valid")
    }

    /// Create a parser, validating the registry.
    ///
    /// The captures must align, by index, with the registered options and arguments.
    pub(crate) fn new(
        registry: Registry,
        option_captures: Vec<Box<dyn AnonymousCapturable<'t> + 'a>>,
        argument_captures: Vec<Box<dyn AnonymousCapturable<'t> + 'a>>,
    ) -> Result<Self, ConfigError> {
        if registry.options().len() != option_captures.len()
            || registry.arguments().len() != argument_captures.len()
        {
            unreachable!("internal error - mismatch between registry and captures");
        }

        registry.validate()?;

        Ok(Self {
            registry,
            option_captures,
            argument_captures,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_captures(
        options: Vec<OptionCapture<'a, 't>>,
        arguments: Vec<ArgumentCapture<'a, 't>>,
    ) -> Result<Self, ConfigError> {
        let mut registry = Registry::default();
        let mut option_captures = Vec::default();
        let mut argument_captures = Vec::default();

        for (config, capture) in options {
            registry.register_option(config);
            option_captures.push(capture);
        }

        for (config, capture) in arguments {
            registry.register_argument(config);
            argument_captures.push(capture);
        }

        Self::new(registry, option_captures, argument_captures)
    }

    /// Parse the tokens, writing the values into the captures.
    ///
    /// On error, returns the index of the offending token.
    pub(crate) fn consume(self, tokens: &[&'t str]) -> Result<Outcome, (usize, ParseError)> {
        let Parser {
            registry,
            mut option_captures,
            mut argument_captures,
        } = self;

        // 1. Match the tokens to their options/arguments, still as raw strings.
        let matches = match TokenMatcher::new(&registry).match_tokens(tokens)? {
            Matches::Help => return Ok(Outcome::Help),
            Matches::Complete(matches) => matches,
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Matched {} token groups.", matches.len());
        }

        for MatchTokens { target, values } in matches {
            // 2. Find the corresponding capture.
            let capture = match target {
                Target::Option(index) => option_captures.get_mut(index),
                Target::Argument(index) => argument_captures.get_mut(index),
            }
            .unwrap_or_else(|| unreachable!("internal error - mismatch between matches and captures"));

            // 3. Let the capture know it has been matched.
            // Some captures may do something based off the fact they were simply matched.
            capture.matched();

            // 4. Convert each of the raw value strings into the capture type.
            for (offset, value) in values {
                capture
                    .capture(value)
                    .map_err(|error| (offset, ParseError::from(error)))?;
            }
        }

        Ok(Outcome::Complete)
    }
}
