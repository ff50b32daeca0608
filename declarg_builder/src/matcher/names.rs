use crate::constant::*;

pub(crate) fn is_help(token: &str) -> bool {
    match token.strip_prefix("--") {
        Some(name) => name == HELP_NAME,
        None => {
            let mut characters = token.chars();
            characters.next() == Some('-')
                && characters.next() == Some(HELP_SHORT)
                && characters.next().is_none()
        }
    }
}

/// Match `long` against the body of a long option token (the token without its leading `--`).
///
/// The name must be followed by either `=` or the end of the token, so that `--keyword` does not match `key`.
/// Returns the inline value, if matched: `Some(None)` for `--key`, `Some(Some("v"))` for `--key=v`.
pub(crate) fn match_long_name<'t>(long: &str, body: &'t str) -> Option<Option<&'t str>> {
    let rest = body.strip_prefix(long)?;

    if rest.is_empty() {
        Some(None)
    } else {
        rest.strip_prefix('=').map(Some)
    }
}

pub(crate) fn is_valid_long_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(&WHITESPACE[..])
}

// A '-' could never be matched: '--' always denotes a long option.
pub(crate) fn is_valid_short_name(name: char) -> bool {
    name != '-' && !WHITESPACE.contains(&name)
}

pub(crate) fn display_names(long: Option<&str>, short: Option<char>) -> String {
    match (long, short) {
        (Some(l), Some(s)) => format!("--{l}/-{s}"),
        (Some(l), None) => format!("--{l}"),
        (None, Some(s)) => format!("-{s}"),
        (None, None) => "<unnamed>".to_string(),
    }
}
