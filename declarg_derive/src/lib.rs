//! Derive macro for `declarg`.
//!
//! Use through the facade, via `declarg::derive::*`.
extern crate proc_macro;

mod check;
mod generate;
mod load;
mod model;

use crate::check::check;
use crate::model::DeriveParser;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Derive `declarg_parser(&mut self)` and `declarg_parse()` for a struct with named fields.
///
/// The struct must implement `Default`; its values are the defaults of the command line.
/// The option names are validated at compile time.
///
/// Struct attributes: `#[declarg(program = "..", about = "..")]`.
///
/// Field attributes: `#[declarg(long = "..", short = 'c', no_long, help = "..", argument)]`.
#[proc_macro_derive(DeclargParser, attributes(declarg))]
pub fn declarg_parser(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    DeriveParser::try_from(derive_input)
        .and_then(|parser| {
            check(&parser)?;
            Ok(TokenStream2::from(parser))
        })
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
