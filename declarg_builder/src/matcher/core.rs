use crate::constant::*;
use crate::matcher::model::*;
use crate::matcher::names::is_help;
use crate::matcher::registry::Registry;
use crate::model::Nargs;
use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A match failure, located by the index of the token at fault.
pub(crate) type MatchError = (usize, ParseError);

/// Resolves each token to an option or positional argument slot.
///
/// Matching never writes to a destination: it only groups the value tokens by their target.
#[derive(Debug)]
pub(crate) struct TokenMatcher<'r> {
    registry: &'r Registry,
}

impl<'r> TokenMatcher<'r> {
    pub(crate) fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    pub(crate) fn match_tokens<'t>(&self, tokens: &[&'t str]) -> Result<Matches<'t>, MatchError> {
        let mut matches = Vec::default();
        let mut argument_cursor = 0;
        let mut index = 0;

        while let Some(token) = tokens.get(index).copied() {
            // 1. The help trigger short circuits everything.
            // 2. Find a 'long' option, such as:
            //  --key
            //  --key ..
            //  --key=..
            // 3. Find 'short' option(s), such as (both -k and -v are example short options):
            //  -k ..
            //  -k..
            //  -k=..
            //  -vk ..
            //  -vk..
            // 4. Match against the next positional argument.
            if is_help(token) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Help triggered at token {index}.");
                }
                return Ok(Matches::Help);
            }

            index = if let Some(body) = token.strip_prefix("--") {
                self.match_long(tokens, index, body, &mut matches)?
            } else if let Some(body) = token.strip_prefix('-').filter(|b| !b.is_empty()) {
                self.match_short(tokens, index, body, &mut matches)?
            } else {
                self.match_argument(index, token, &mut argument_cursor, &mut matches)?
            };
        }

        Ok(Matches::Complete(matches))
    }

    fn match_long<'t>(
        &self,
        tokens: &[&'t str],
        index: usize,
        body: &'t str,
        matches: &mut Vec<MatchTokens<'t>>,
    ) -> Result<usize, MatchError> {
        let token = tokens[index];
        let (option, inline) = self.registry.find_long(body).ok_or_else(|| {
            (
                index,
                ParseError::UnknownOption {
                    token: token.to_string(),
                },
            )
        })?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Token '{token}' matched option {option}, inline value {inline:?}.");
        }

        self.take_values(tokens, index, option, inline, matches)
    }

    fn match_short<'t>(
        &self,
        tokens: &[&'t str],
        index: usize,
        body: &'t str,
        matches: &mut Vec<MatchTokens<'t>>,
    ) -> Result<usize, MatchError> {
        let token = tokens[index];

        for (position, short) in body.char_indices() {
            let option = self.registry.find_short(short).ok_or_else(|| {
                (
                    index,
                    ParseError::UnknownOption {
                        token: token.to_string(),
                    },
                )
            })?;
            let remainder = &body[position + short.len_utf8()..];

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '{token}' matched short option {option} via '{short}'.");
            }

            if self.registry.option(option).nargs() == Nargs::Precisely(0) {
                // A flag in the cluster; the next character must be another short option.
                if remainder.starts_with('=') {
                    return Err((
                        index,
                        ParseError::UnexpectedValue {
                            token: token.to_string(),
                        },
                    ));
                }

                matches.push(MatchTokens {
                    target: Target::Option(option),
                    values: Vec::default(),
                });
            } else {
                // The remainder of the cluster is the first value.
                let inline = if remainder.is_empty() {
                    None
                } else {
                    Some(remainder.strip_prefix('=').unwrap_or(remainder))
                };
                return self.take_values(tokens, index, option, inline, matches);
            }
        }

        Ok(index + 1)
    }

    fn match_argument<'t>(
        &self,
        index: usize,
        token: &'t str,
        argument_cursor: &mut usize,
        matches: &mut Vec<MatchTokens<'t>>,
    ) -> Result<usize, MatchError> {
        if *argument_cursor >= self.registry.arguments().len() {
            return Err((
                index,
                ParseError::UnexpectedArgument {
                    token: token.to_string(),
                },
            ));
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Token '{token}' matched argument {argument_cursor}.");
        }

        matches.push(MatchTokens {
            target: Target::Argument(*argument_cursor),
            values: vec![(index, token)],
        });
        *argument_cursor += 1;
        Ok(index + 1)
    }

    /// Take the values for the option at `tokens[index]`, returning the index of the next unconsumed token.
    fn take_values<'t>(
        &self,
        tokens: &[&'t str],
        index: usize,
        option: usize,
        inline: Option<&'t str>,
        matches: &mut Vec<MatchTokens<'t>>,
    ) -> Result<usize, MatchError> {
        let token = tokens[index];
        let mut values: Vec<OffsetValue<'t>> = inline.map(|v| (index, v)).into_iter().collect();
        let mut next = index + 1;

        match self.registry.option(option).nargs() {
            Nargs::Precisely(0) => {
                if inline.is_some() {
                    return Err((
                        index,
                        ParseError::UnexpectedValue {
                            token: token.to_string(),
                        },
                    ));
                }
            }
            Nargs::Precisely(expected) => {
                while values.len() < expected {
                    match tokens.get(next) {
                        Some(value) => {
                            values.push((next, *value));
                            next += 1;
                        }
                        None => {
                            let error = if expected == 1 {
                                ParseError::MissingValue {
                                    token: token.to_string(),
                                }
                            } else {
                                ParseError::InsufficientArguments {
                                    token: token.to_string(),
                                    expected,
                                    provided: values.len(),
                                }
                            };
                            return Err((index, error));
                        }
                    }
                }
            }
            Nargs::Sequence => {
                while let Some(value) = tokens.get(next) {
                    next += 1;

                    if *value == SEQUENCE_TERMINATOR {
                        break;
                    }

                    values.push((next - 1, *value));
                }
            }
        }

        matches.push(MatchTokens {
            target: Target::Option(option),
            values,
        });
        Ok(next)
    }
}
