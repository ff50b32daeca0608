use crate::parser::{ErrorContext, ParseError};

/// Where the parser sends its output.
pub(crate) trait UserInterface {
    /// One line of the help message.
    fn print(&self, line: String);

    /// A parse failure, along with the tokens it was found in.
    fn print_error(&self, error: ParseError, context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, line: String) {
        println!("{line}");
    }

    fn print_error(&self, error: ParseError, context: ErrorContext) {
        eprintln!("{error}\n{context}");
    }
}
