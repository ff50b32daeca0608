//! `declarg` is a declarative, table driven command line parser for Rust.
//!
//! Describe the options and positional arguments up front, each bound to a variable of your program.
//! Then hand the command line tokens to the parser, which resolves each token against the table and writes the decoded values into your variables.
//!
//! `declarg` prioritizes the following design concerns:
//! * *Type safe argument parsing*:
//! The user should not call any `&str -> T` conversion functions directly.
//! Values are decoded via [`prelude::FromToken`], including `0x`/`0` prefixed integers.
//! * *Fail fast*:
//! An invalid table is a [`ConfigError`], caught before any token is parsed (or at compile time, via the derive Api).
//! An invalid command line is a [`ParseError`] naming the offending token.
//! All tokens are matched before any variable is written, so a malformed command line (ex: an unknown option, a missing value) or the help switch leaves every variable untouched.
//! Values are then decoded in token order; a value that fails to decode ([`ParseError::InvalidValue`]) stops the parse, but the variables of earlier tokens have already been written.
//! * *Argument vs. option paradigm*:
//! Arguments are filled positionally, in the order they are added.
//! Options are specified via `--..` or `-..` syntax.
//!
//! # Usage
//! via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/summer.rs")]
//! ```
//!
//! ```console
//! $ summer -v --sum 1 0x10 017
//! Items: [1, 16, 15]
//! Sum: 32
//!
//! $ summer --sum 1 blah
//! Parse error: invalid value 'blah' for type 'i64': invalid digit found in string.
//! --sum 1 blah
//!         ^
//! ```
//!
//! # Builder Api
//! Configure `declarg` by starting with a [`CommandLineParser`] and `add`ing parameters.
//! There are two classes of parameters: [`Parameter::option`] (or [`Parameter::short_option`]) and [`Parameter::argument`].
//!
//! Each parameter takes a *field*, which determines its arity:
//! * [`Switch`]: arity 0, a flag (ex: `--verbose`).
//! * [`Scalar`]: arity 1 (ex: `--key 1`, `--key=1`, `-k1`).
//! * [`Optional`]: arity 1, into an `Option<T>`.
//! * [`Array`]: arity `N`, into a `[T; N]`.
//! * [`Collection`]: any number of values, until the end of the tokens or a `--`.
//! Applies to any [`prelude::Collectable`], such as `Vec<T>` or `HashSet<T>`.
//!
//! Arguments take a single value, so only accept [`Scalar`] and [`Optional`] fields.
//!
//! The help switch (`-h`/`--help`) is always present and cannot be registered.
//!
//! # Derive Api
//! See [`derive`].
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events while matching tokens.
//! * `unit_test`: expose [`CommandLineParser::test_dummy`] for testing your own setup functions.
pub mod derive;

pub use declarg_builder::*;
