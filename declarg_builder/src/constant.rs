pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_MESSAGE: &str = "Show this help message and exit.";

// Terminates a `Nargs::Sequence` option; consumed, never captured.
pub(crate) const SEQUENCE_TERMINATOR: &str = "--";

// The characters which may not appear in an option name.
pub(crate) const WHITESPACE: [char; 5] = [' ', '\t', '\n', '\u{0c}', '\r'];
