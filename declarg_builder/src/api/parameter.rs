use crate::api::{CliArgument, CliOption, GenericCapturable, InvalidCapture};
use crate::matcher::{ArgumentConfig, OptionConfig};
use crate::model::Nargs;
use crate::parser::{
    AnonymousCapturable, ArgumentCapture, ArgumentParameter, OptionCapture, OptionParameter,
};

pub(crate) struct AnonymousCapture<'a, 't, T: 'a> {
    field: Box<dyn GenericCapturable<'t, T> + 'a>,
}

impl<'a, 't, T> AnonymousCapture<'a, 't, T> {
    pub(crate) fn bind(field: impl GenericCapturable<'t, T> + 'a) -> Self {
        Self {
            field: Box::new(field),
        }
    }
}

impl<'a, 't, T> AnonymousCapturable<'t> for AnonymousCapture<'a, 't, T> {
    fn matched(&mut self) {
        self.field.matched();
    }

    fn capture(&mut self, value: &'t str) -> Result<(), InvalidCapture> {
        self.field.capture(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ParameterClass {
    Opt,
    Arg,
}

pub(super) struct ParameterInner<'a, 't, T> {
    class: ParameterClass,
    field: AnonymousCapture<'a, 't, T>,
    nargs: Nargs,
    name: Option<String>,
    short: Option<char>,
    help: Option<String>,
}

impl<'a, 't, T> ParameterInner<'a, 't, T> {
    pub(super) fn class(&self) -> ParameterClass {
        self.class
    }
}

impl<'a, 't, T> std::fmt::Debug for ParameterInner<'a, 't, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let class = match &self.class {
            ParameterClass::Opt => "Opt",
            ParameterClass::Arg => "Arg",
        };
        let name = match (&self.class, &self.name) {
            (ParameterClass::Opt, Some(n)) => format!(" --{n},"),
            (ParameterClass::Arg, Some(n)) => format!(" {n},"),
            (_, None) => "".to_string(),
        };
        let short = match &self.short {
            Some(s) => format!(" -{s},"),
            None => "".to_string(),
        };
        let help = if let Some(d) = &self.help {
            format!(" {d}")
        } else {
            "".to_string()
        };

        write!(
            f,
            "{class}[{t}, {nargs},{name}{short}{help}]",
            t = std::any::type_name::<T>(),
            nargs = self.nargs,
        )
    }
}

impl<'a, 't, T> From<&ParameterInner<'a, 't, T>> for OptionConfig {
    fn from(value: &ParameterInner<'a, 't, T>) -> Self {
        OptionConfig::new(value.name.clone(), value.short, value.nargs)
    }
}

impl<'a, 't, T: 'a> From<ParameterInner<'a, 't, T>> for OptionCapture<'a, 't>
where
    't: 'a,
{
    fn from(value: ParameterInner<'a, 't, T>) -> Self {
        let config = OptionConfig::from(&value);
        let ParameterInner { field, .. } = value;
        (config, Box::new(field))
    }
}

impl<'a, 't, T> From<&ParameterInner<'a, 't, T>> for OptionParameter {
    fn from(value: &ParameterInner<'a, 't, T>) -> Self {
        OptionParameter::new(
            value.name.clone(),
            value.short,
            value.nargs,
            value.help.clone(),
        )
    }
}

impl<'a, 't, T> From<&ParameterInner<'a, 't, T>> for ArgumentConfig {
    fn from(value: &ParameterInner<'a, 't, T>) -> Self {
        ArgumentConfig::new(
            value
                .name
                .clone()
                .unwrap_or_else(|| unreachable!("internal error - arguments are always named")),
        )
    }
}

impl<'a, 't, T: 'a> From<ParameterInner<'a, 't, T>> for ArgumentCapture<'a, 't>
where
    't: 'a,
{
    fn from(value: ParameterInner<'a, 't, T>) -> Self {
        let config = ArgumentConfig::from(&value);
        let ParameterInner { field, .. } = value;
        (config, Box::new(field))
    }
}

impl<'a, 't, T> From<&ParameterInner<'a, 't, T>> for ArgumentParameter {
    fn from(value: &ParameterInner<'a, 't, T>) -> Self {
        ArgumentParameter::new(
            value
                .name
                .clone()
                .unwrap_or_else(|| unreachable!("internal error - arguments are always named")),
            value.help.clone(),
        )
    }
}

/// An option or positional argument for the command line parser.
pub struct Parameter<'a, 't, T>(ParameterInner<'a, 't, T>);

impl<'a, 't, T> Parameter<'a, 't, T> {
    /// Create an option parameter, matched by `--long` and optionally `-s`.
    ///
    /// The arity of the option is derived from the field.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{CommandLineParser, Parameter, Scalar, Switch};
    ///
    /// let mut verbose: bool = false;
    /// let mut key: u32 = 0;
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::option(Switch::flag(&mut verbose), "verbose", Some('v')))
    ///     .add(Parameter::option(Scalar::new(&mut key), "key", None))
    ///     .build();
    ///
    /// parser.parse_tokens(vec!["-v", "--key=0x10"].as_slice()).unwrap();
    ///
    /// assert!(verbose);
    /// assert_eq!(key, 16);
    /// ```
    pub fn option(
        field: impl GenericCapturable<'t, T> + CliOption + 'a,
        long: impl Into<String>,
        short: Option<char>,
    ) -> Self {
        let nargs = field.nargs();
        Self(ParameterInner {
            class: ParameterClass::Opt,
            field: AnonymousCapture::bind(field),
            nargs,
            name: Some(long.into()),
            short,
            help: None,
        })
    }

    /// Create an option parameter which only has a short name, matched by `-s`.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{CommandLineParser, Parameter, Scalar};
    ///
    /// let mut ratio: f64 = 0.0;
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::short_option(Scalar::new(&mut ratio), 'r'))
    ///     .build();
    ///
    /// parser.parse_tokens(vec!["-r0.5"].as_slice()).unwrap();
    ///
    /// assert_eq!(ratio, 0.5);
    /// ```
    pub fn short_option(field: impl GenericCapturable<'t, T> + CliOption + 'a, short: char) -> Self {
        let nargs = field.nargs();
        Self(ParameterInner {
            class: ParameterClass::Opt,
            field: AnonymousCapture::bind(field),
            nargs,
            name: None,
            short: Some(short),
            help: None,
        })
    }

    /// Create a positional argument parameter.
    ///
    /// Positional arguments are filled in the order they are added, one token each.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{CommandLineParser, Parameter, Scalar};
    ///
    /// let mut path: &str = "";
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::argument(Scalar::new(&mut path), "path"))
    ///     .build();
    ///
    /// parser.parse_tokens(vec!["/tmp/file"].as_slice()).unwrap();
    ///
    /// assert_eq!(path, "/tmp/file");
    /// ```
    pub fn argument(
        field: impl GenericCapturable<'t, T> + CliArgument + 'a,
        name: impl Into<String>,
    ) -> Self {
        let nargs = field.nargs();
        Self(ParameterInner {
            class: ParameterClass::Arg,
            field: AnonymousCapture::bind(field),
            nargs,
            name: Some(name.into()),
            short: None,
            help: None,
        })
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final help message will apply.
    ///
    /// The help message is only ever displayed, never interpreted.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.0.help.replace(description.into());
        self
    }

    pub(super) fn consume(self) -> ParameterInner<'a, 't, T> {
        self.0
    }
}

impl<'a, 't, T> std::fmt::Debug for Parameter<'a, 't, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
