use crate::api::{Parameter, ParameterClass};
use crate::matcher::Registry;
use crate::parser::{
    AnonymousCapturable, ArgumentCapture, ArgumentParameter, ConfigError, ConsoleInterface,
    GeneralParser, OptionCapture, OptionParameter, Parser, Printer, UserInterface,
};

/// The command line parser, as it is being configured.
///
/// Options and positional arguments are registered in order via [`CommandLineParser::add`].
/// Registration never fails; the configuration is validated when the parser is built.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{CommandLineParser};
///
/// let parser = CommandLineParser::new("program")
///     // Configure with CommandLineParser::add.
///     .build();
/// parser.parse_tokens(&[]).unwrap();
/// ```
pub struct CommandLineParser<'a, 't> {
    program: String,
    about: Option<String>,
    registry: Registry,
    option_parameters: Vec<OptionParameter>,
    argument_parameters: Vec<ArgumentParameter>,
    option_captures: Vec<Box<dyn AnonymousCapturable<'t> + 'a>>,
    argument_captures: Vec<Box<dyn AnonymousCapturable<'t> + 'a>>,
}

impl<'a, 't> CommandLineParser<'a, 't> {
    /// Create a command line parser.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::CommandLineParser;
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .build();
    ///
    /// parser.parse_tokens(vec![].as_slice()).unwrap();
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            registry: Registry::default(),
            option_parameters: Vec::default(),
            argument_parameters: Vec::default(),
            option_captures: Vec::default(),
            argument_captures: Vec::default(),
        }
    }

    /// Document the about message for this command line parser.
    /// If repeated, only the final about message will apply.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::CommandLineParser;
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .about("--this will get discarded--")
    ///     .about("My program that does awesome stuff.  Check it out!")
    ///     .build();
    ///
    /// parser.parse_tokens(vec![].as_slice()).unwrap();
    /// ```
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Register an option/argument with the command line parser.
    ///
    /// The order of options is used to break ties when matching, and to display the help message.
    /// The order of argument parameters corresponds to their positional order during parsing.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{CommandLineParser, Parameter, Scalar};
    ///
    /// let mut a: u32 = 0;
    /// let mut b: u32 = 0;
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::argument(Scalar::new(&mut a), "a"))
    ///     .add(Parameter::argument(Scalar::new(&mut b), "b"))
    ///     .build();
    ///
    /// parser.parse_tokens(vec!["1", "2"].as_slice()).unwrap();
    ///
    /// assert_eq!(a, 1);
    /// assert_eq!(b, 2);
    /// ```
    pub fn add<T: 'a>(mut self, parameter: Parameter<'a, 't, T>) -> Self
    where
        't: 'a,
    {
        let inner = parameter.consume();
        match inner.class() {
            ParameterClass::Opt => {
                self.option_parameters.push(OptionParameter::from(&inner));
                let (config, capture): OptionCapture<'a, 't> = inner.into();
                self.registry.register_option(config);
                self.option_captures.push(capture);
            }
            ParameterClass::Arg => {
                self.argument_parameters
                    .push(ArgumentParameter::from(&inner));
                let (config, capture): ArgumentCapture<'a, 't> = inner.into();
                self.registry.register_argument(config);
                self.argument_captures.push(capture);
            }
        }

        self
    }

    /// Check the configuration for errors (ex: a repeated option name).
    ///
    /// This is always done when the parser is built; it is idempotent and may be repeated freely.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{CommandLineParser, ConfigError, Parameter, Switch};
    ///
    /// let mut a: bool = false;
    /// let mut b: bool = false;
    /// let clp = CommandLineParser::new("program")
    ///     .add(Parameter::option(Switch::flag(&mut a), "same", None))
    ///     .add(Parameter::option(Switch::flag(&mut b), "same", None));
    ///
    /// assert_eq!(clp.validate(), Err(ConfigError::DuplicateLongName("same".to_string())));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.registry.validate()
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build a [`CommandLineParser`] for use in testing.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{CommandLineParser, Parameter, Scalar};
    ///
    /// // Function under test.
    /// // We want to make sure the setup_fn is wired up correctly.
    /// pub fn setup_fn<'a>(value: &'a mut u32) -> impl FnOnce(CommandLineParser<'a, 'static>) -> CommandLineParser<'a, 'static> {
    ///     |clp| clp.add(Parameter::argument(Scalar::new(value), "value"))
    /// }
    ///
    /// let mut x: u32 = 1;
    /// let parser = setup_fn(&mut x)(CommandLineParser::test_dummy()).build_parser().unwrap();
    /// parser.parse_tokens(vec!["2"].as_slice()).unwrap();
    /// assert_eq!(x, 2);
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn test_dummy() -> Self {
        CommandLineParser::new("test-dummy")
    }

    fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<'a, 't>, ConfigError> {
        let parser = Parser::new(
            self.registry,
            self.option_captures,
            self.argument_captures,
        )?;
        let printer = Printer::terminal(
            self.about,
            self.option_parameters,
            self.argument_parameters,
        );
        Ok(GeneralParser::new(
            self.program,
            parser,
            printer,
            user_interface,
        ))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    pub fn build_parser(self) -> Result<GeneralParser<'a, 't>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser<'a, 't> {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn build_test(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<'a, 't>, ConfigError> {
        self.build_with_interface(user_interface)
    }
}

impl<'a, 't> std::fmt::Debug for CommandLineParser<'a, 't> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandLineParser")
            .field("program", &self.program)
            .field("registry", &self.registry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Array, Collection, Optional, Scalar, Switch};
    use crate::model::Outcome;
    use crate::parser::util::RecordingInterface;
    use crate::parser::ParseError;
    use crate::test::assert_contains;
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn empty_build() {
        // Setup
        let clp = CommandLineParser::new("program");

        // Execute
        let parser = clp.build_parser().unwrap();

        // Verify
        parser.parse_tokens(&[]).unwrap();
    }

    #[rstest]
    #[case(vec![], false, 0, [0.0; 3], vec![], None, "")]
    #[case(vec!["--verbose"], true, 0, [0.0; 3], vec![], None, "")]
    #[case(vec!["-v", "--key=42"], true, 42, [0.0; 3], vec![], None, "")]
    #[case(vec!["-k", "42"], false, 42, [0.0; 3], vec![], None, "")]
    #[case(vec!["-k42"], false, 42, [0.0; 3], vec![], None, "")]
    #[case(vec!["-vk0x2A"], true, 42, [0.0; 3], vec![], None, "")]
    #[case(vec!["--ratios", "1.0", "2.0", "3.0"], false, 0, [1.0, 2.0, 3.0], vec![], None, "")]
    #[case(vec!["--sum", "1", "2", "3", "--", "pos1"], false, 0, [0.0; 3], vec![1, 2, 3], None, "pos1")]
    #[case(vec!["pos1", "--sum", "017"], false, 0, [0.0; 3], vec![15], None, "pos1")]
    #[case(vec!["--limit", "-1", "-"], false, 0, [0.0; 3], vec![], Some(-1), "-")]
    #[case(vec!["-k", "1", "--key", "2"], false, 2, [0.0; 3], vec![], None, "")]
    fn build(
        #[case] tokens: Vec<&str>,
        #[case] expected_verbose: bool,
        #[case] expected_key: u32,
        #[case] expected_ratios: [f64; 3],
        #[case] expected_sum: Vec<i64>,
        #[case] expected_limit: Option<i32>,
        #[case] expected_path: &str,
    ) {
        // Setup
        let mut verbose: bool = false;
        let mut key: u32 = 0;
        let mut ratios: [f64; 3] = [0.0; 3];
        let mut sum: Vec<i64> = Vec::default();
        let mut limit: Option<i32> = None;
        let mut path: &str = "";
        let clp = CommandLineParser::new("program")
            .add(Parameter::option(Switch::flag(&mut verbose), "verbose", Some('v')))
            .add(Parameter::option(Scalar::new(&mut key), "key", Some('k')))
            .add(Parameter::option(Array::new(&mut ratios), "ratios", None))
            .add(Parameter::option(Collection::new(&mut sum), "sum", Some('s')))
            .add(Parameter::option(Optional::new(&mut limit), "limit", None))
            .add(Parameter::argument(Scalar::new(&mut path), "path"));

        // Execute
        let parser = clp.build_parser().unwrap();

        // Verify
        parser.parse_tokens(tokens.as_slice()).unwrap();
        assert_eq!(verbose, expected_verbose);
        assert_eq!(key, expected_key);
        assert_eq!(ratios, expected_ratios);
        assert_eq!(sum, expected_sum);
        assert_eq!(limit, expected_limit);
        assert_eq!(path, expected_path);
    }

    #[test]
    fn build_collection_set() {
        // Setup
        let mut items: HashSet<String> = HashSet::default();
        let clp = CommandLineParser::new("program")
            .add(Parameter::short_option(Collection::new(&mut items), 'i'));

        // Execute
        let parser = clp.build_parser().unwrap();

        // Verify
        parser
            .parse_tokens(&["-i", "a", "b", "a", "--", "-ic"])
            .unwrap();
        assert_eq!(
            items,
            HashSet::from(["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[rstest]
    #[case(vec!["--bogus"], ParseError::UnknownOption { token: "--bogus".to_string() })]
    #[case(vec!["-v", "--key"], ParseError::MissingValue { token: "--key".to_string() })]
    #[case(vec!["-v", "--ratios", "1.0", "2.0"], ParseError::InsufficientArguments { token: "--ratios".to_string(), expected: 3, provided: 2 })]
    fn build_no_writes(#[case] tokens: Vec<&str>, #[case] expected: ParseError) {
        // Setup
        let mut verbose: bool = false;
        let mut key: u32 = 7;
        let mut ratios: [f64; 3] = [0.0; 3];
        let clp = CommandLineParser::new("program")
            .add(Parameter::option(Switch::flag(&mut verbose), "verbose", Some('v')))
            .add(Parameter::option(Scalar::new(&mut key), "key", Some('k')))
            .add(Parameter::option(Array::new(&mut ratios), "ratios", None));

        // Execute
        let parser = clp.build_parser().unwrap();

        // Verify
        assert_eq!(parser.try_parse_tokens(tokens.as_slice()), Err(expected));
        assert!(!verbose);
        assert_eq!(key, 7);
        assert_eq!(ratios, [0.0; 3]);
    }

    #[test]
    fn build_invalid_value() {
        // Setup
        let mut key: u32 = 0;
        let clp = CommandLineParser::new("program")
            .add(Parameter::option(Scalar::new(&mut key), "key", Some('k')));

        // Execute
        let parser = clp.build_parser().unwrap();

        // Verify
        let error = parser.try_parse_tokens(&["--key", "notanumber"]).unwrap_err();
        assert_matches!(
            error,
            ParseError::InvalidValue { token, type_name: "u32", .. } if token == "notanumber"
        );
    }

    #[rstest]
    #[case("help", None, ConfigError::ReservedName("--help".to_string()))]
    #[case("key", Some('h'), ConfigError::ReservedName("-h".to_string()))]
    #[case("fla g", None, ConfigError::InvalidName("--fla g".to_string()))]
    #[case("verbose", None, ConfigError::DuplicateLongName("verbose".to_string()))]
    #[case("other", Some('v'), ConfigError::DuplicateShortName('v'))]
    fn build_invalid(
        #[case] name: &str,
        #[case] short: Option<char>,
        #[case] expected: ConfigError,
    ) {
        // Setup
        let mut verbose: bool = false;
        let mut other: bool = false;
        let clp = CommandLineParser::new("program")
            .add(Parameter::option(Switch::flag(&mut verbose), "verbose", Some('v')))
            .add(Parameter::option(Switch::flag(&mut other), name, short));

        // Execute
        let validated = clp.validate();
        let result = clp.build_parser();

        // Verify
        assert_eq!(validated, Err(expected));
        assert_matches!(result, Err(_));
    }

    #[test]
    fn build_duplicate_argument() {
        let mut a: u32 = 0;
        let mut b: u32 = 0;
        let clp = CommandLineParser::new("program")
            .add(Parameter::argument(Scalar::new(&mut a), "value"))
            .add(Parameter::argument(Scalar::new(&mut b), "value"));

        assert_eq!(
            clp.validate(),
            Err(ConfigError::DuplicateArgumentName("value".to_string()))
        );
    }

    #[test]
    fn build_help() {
        // Setup
        let mut verbose: bool = false;
        let mut key: u32 = 0;
        let mut item: String = String::default();
        let interface = RecordingInterface::default();
        let parser = CommandLineParser::new("program")
            .about("Does things.")
            .add(Parameter::option(Switch::flag(&mut verbose), "verbose", Some('v')).help("Be chatty."))
            .add(Parameter::option(Scalar::new(&mut key), "key", None))
            .add(Parameter::argument(Scalar::new(&mut item), "item").help("The item."))
            .build_test(Box::new(interface.clone()))
            .unwrap();

        // Execute
        let error_code = parser.parse_tokens(&["item", "--help"]).unwrap_err();

        // Verify
        assert_eq!(error_code, 0);
        assert_eq!(item, "");

        let message = interface.take_message();
        assert_contains!(message, "usage: program [-h] [-v] [--key KEY] ITEM\n");
        assert_contains!(message, "Does things.");
        assert_contains!(message, "positional arguments:");
        assert_contains!(message, "Be chatty.");
        assert_contains!(message, "The item.");
    }

    #[test]
    fn build_try_help() {
        let mut key: u32 = 0;
        let parser = CommandLineParser::new("program")
            .add(Parameter::option(Scalar::new(&mut key), "key", None))
            .build_parser()
            .unwrap();

        assert_eq!(parser.try_parse_tokens(&["-h", "--key", "1"]), Ok(Outcome::Help));
        assert_eq!(key, 0);
    }

    #[test]
    fn debug() {
        let clp = CommandLineParser::new("program");
        assert_contains!(format!("{clp:?}"), "program");
    }
}
