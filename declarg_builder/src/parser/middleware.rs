use std::env;

use crate::model::Outcome;
use crate::parser::base::*;
use crate::parser::context::ErrorContext;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The built command line parser, ready to parse tokens.
///
/// Created via [`crate::CommandLineParser::build`] or [`crate::CommandLineParser::build_parser`].
pub struct GeneralParser<'a, 't> {
    program: String,
    parser: Parser<'a, 't>,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl<'a, 't> std::fmt::Debug for GeneralParser<'a, 't> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("program", &self.program)
            .finish_non_exhaustive()
    }
}

impl<'a, 't> GeneralParser<'a, 't> {
    pub(crate) fn new(
        program: String,
        parser: Parser<'a, 't>,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program,
            parser,
            printer,
            user_interface,
        }
    }

    /// Run the command line parser against the input tokens, without printing anything.
    ///
    /// Parsing happens in two phases:
    /// 1. Token matching aligns the tokens to options and arguments.
    /// All tokens must be matched successfully in order to proceed to the next phase.
    /// 2. Token capturing converts the tokens into their respective types `T`.
    /// This phase will actually mutate your program variables.
    ///
    /// If the help switch (`-h` or `--help`) is encountered, returns `Ok(Outcome::Help)`.
    /// This skips the phase #2 capturing.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{CommandLineParser, Outcome, Parameter, ParseError, Scalar};
    ///
    /// let mut key: u32 = 0;
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::option(Scalar::new(&mut key), "key", Some('k')))
    ///     .build_parser()
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     parser.try_parse_tokens(vec!["--bogus"].as_slice()),
    ///     Err(ParseError::UnknownOption { token: "--bogus".to_string() })
    /// );
    /// ```
    pub fn try_parse_tokens(self, tokens: &[&'t str]) -> Result<Outcome, ParseError> {
        self.parser.consume(tokens).map_err(|(_, error)| error)
    }

    /// Run the command line parser against the input tokens.
    ///
    /// The parser will process the input tokens based off the `CommandLineParser` configuration, as in [`GeneralParser::try_parse_tokens`].
    ///
    /// If at any point the parser encounters an error (ex: un-matched token, un-capturable token, etc), it will print the error and return with `Err(1)`.
    ///
    /// If the help switch (`-h` or `--help`) is encountered, the parser will display the help message and return with `Err(0)`.
    pub fn parse_tokens(self, tokens: &[&'t str]) -> Result<(), i32> {
        let GeneralParser {
            program,
            parser,
            printer,
            user_interface,
        } = self;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parsing {} tokens for '{program}'.", tokens.len());
        }

        match parser.consume(tokens) {
            Ok(Outcome::Complete) => Ok(()),
            Ok(Outcome::Help) => {
                printer.print_help(program, &*user_interface);
                Err(0)
            }
            Err((offset, error)) => {
                user_interface.print_error(error, ErrorContext::new(offset, tokens));
                Err(1)
            }
        }
    }
}

impl<'a> GeneralParser<'a, 'static> {
    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// The parser will process the input tokens based off the `CommandLineParser` configuration, as in [`GeneralParser::parse_tokens`].
    ///
    /// If at any point the parser encounters an error (ex: un-matched token, un-capturable token, etc), it will exit with error code `1` (via [`std::process::exit`]).
    ///
    /// If the help switch (`-h` or `--help`) is encountered, the parser will display the help message and exit with error code `0`.
    pub fn parse(self) {
        // The arguments live for the remainder of the process.
        let command_input: Vec<&'static str> = env::args()
            .skip(1)
            .map(|argument| -> &'static str { Box::leak(argument.into_boxed_str()) })
            .collect();

        if let Err(exit_code) = self.parse_tokens(command_input.as_slice()) {
            std::process::exit(exit_code);
        }
    }
}
