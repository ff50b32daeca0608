use crate::model::{DeriveParameter, DeriveParser, ParameterKind};
use std::collections::HashSet;

const HELP_NAME: &str = "help";
const HELP_SHORT: char = 'h';
const WHITESPACE: [char; 5] = [' ', '\t', '\n', '\u{0c}', '\r'];

/// Validate the parameter names, the same way the builder does at runtime.
///
/// Each invariant is checked across all the parameters before moving on to the next.
pub(crate) fn check(parser: &DeriveParser) -> Result<(), syn::Error> {
    let options: Vec<(&DeriveParameter, Option<&str>, Option<char>)> = parser
        .parameters
        .iter()
        .filter_map(|parameter| match &parameter.kind {
            ParameterKind::Option { long, short } => Some((parameter, long.as_deref(), *short)),
            ParameterKind::Argument { .. } => None,
        })
        .collect();

    for parameter in &parser.parameters {
        match &parameter.kind {
            ParameterKind::Option { long, short } => {
                let valid_long = long.as_deref().map_or(true, is_valid_long_name);
                let valid_short = short.map_or(true, is_valid_short_name);

                if (long.is_none() && short.is_none()) || !valid_long || !valid_short {
                    return Err(error(parameter, "has an invalid name"));
                }
            }
            ParameterKind::Argument { name } => {
                if !is_valid_long_name(name) {
                    return Err(error(parameter, "has an invalid name"));
                }
            }
        }
    }

    for (parameter, long, short) in &options {
        if *long == Some(HELP_NAME) {
            return Err(error(parameter, "uses '--help', reserved for the help switch"));
        }

        if *short == Some(HELP_SHORT) {
            return Err(error(parameter, "uses '-h', reserved for the help switch"));
        }
    }

    let mut longs = HashSet::new();

    for (parameter, long, _) in &options {
        if let Some(long) = long {
            if !longs.insert(*long) {
                return Err(error(parameter, &format!("duplicates the option '--{long}'")));
            }
        }
    }

    let mut shorts = HashSet::new();

    for (parameter, _, short) in &options {
        if let Some(short) = short {
            if !shorts.insert(*short) {
                return Err(error(
                    parameter,
                    &format!("duplicates the short option '-{short}'"),
                ));
            }
        }
    }

    let mut names = HashSet::new();

    for parameter in &parser.parameters {
        if let ParameterKind::Argument { name } = &parameter.kind {
            if !names.insert(name.as_str()) {
                return Err(error(parameter, &format!("duplicates the argument '{name}'")));
            }
        }
    }

    Ok(())
}

fn is_valid_long_name(long: &str) -> bool {
    !long.is_empty() && !long.contains(&WHITESPACE[..])
}

fn is_valid_short_name(short: char) -> bool {
    short != '-' && !WHITESPACE.contains(&short)
}

fn error(parameter: &DeriveParameter, message: &str) -> syn::Error {
    syn::Error::new(
        parameter.field_name.span(),
        format!("Invalid - field `{}` {message}.", parameter.field_name),
    )
}
