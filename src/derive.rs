//! Derive Api for `declarg` configuration.
//!
//! Instrument a parameter struct `S` with `#[derive(Default, DeclargParser)]`.
//! This generates `S::declarg_parse() -> S`, which parses the Cli parameters into `S`, as well as `S::declarg_parser(&mut self)` for the underlying [`crate::CommandLineParser`].
//!
//! ```no_run
#![doc = include_str!("../demos/derived.rs")]
//! ```
//!
//! The parameters are inferred from the field types:
//! ```console
//! Type        | Parameter
//! -----------------------------------
//! bool        | Parameter::option(Switch::flag(..), ..)
//! Option<T>   | Parameter::option(Optional::new(..), ..)
//! [T; N]      | Parameter::option(Array::new(..), ..)
//! Vec<T>      | Parameter::option(Collection::new(..), ..)
//! HashSet<T>  | Parameter::option(Collection::new(..), ..)
//! T           | Parameter::option(Scalar::new(..), ..)
//! ```
//!
//! The long name is the field name, with `_` replaced by `-`.
//! Configure each field via `#[declarg(..)]`:
//! * `long = ".."`: use a different long name (or argument name).
//! * `short = 'c'`: add a short name.
//! * `no_long`: only match the short name.
//! * `help = ".."`: the help message.
//! * `argument`: make the field a positional argument.
//!
//! The names are validated at compile time, so a duplicate or reserved name will not compile:
//! ```compile_fail
//! use declarg::derive::*;
//!
//! #[derive(Default, DeclargParser)]
//! struct Parameters {
//!     #[declarg(short = 'h')]
//!     hidden: bool,
//! }
//! ```
pub use declarg_derive::*;
