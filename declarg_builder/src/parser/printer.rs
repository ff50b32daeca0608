use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::model::Nargs;
use crate::parser::interface::UserInterface;

pub(crate) struct OptionParameter {
    long: Option<String>,
    short: Option<char>,
    nargs: Nargs,
    help: Option<String>,
}

impl OptionParameter {
    pub(crate) fn new(
        long: Option<String>,
        short: Option<char>,
        nargs: Nargs,
        help: Option<String>,
    ) -> Self {
        Self {
            long,
            short: short.filter(|s| *s != '\0'),
            nargs,
            help,
        }
    }

    fn grammar(&self) -> String {
        let example = match (&self.long, &self.short) {
            (Some(long), _) => long.to_ascii_uppercase().replace('-', "_"),
            (None, Some(short)) => short.to_uppercase().to_string(),
            (None, None) => "VALUE".to_string(),
        };

        match self.nargs {
            Nargs::Precisely(n) => (0..n).map(|_| format!(" {example}")).collect(),
            Nargs::Sequence => format!(" [{example} ...]"),
        }
    }
}

pub(crate) struct ArgumentParameter {
    name: String,
    help: Option<String>,
}

impl ArgumentParameter {
    pub(crate) fn new(name: String, help: Option<String>) -> Self {
        Self { name, help }
    }

    fn grammar(&self) -> String {
        self.name.to_ascii_uppercase().replace('-', "_")
    }
}

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_HELP_WIDTH: usize = 17;
const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

/// Renders the help message, in registration order.
pub(crate) struct Printer {
    about: Option<String>,
    options: Vec<OptionParameter>,
    arguments: Vec<ArgumentParameter>,
    terminal_width: Option<usize>,
}

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(None, Vec::default(), Vec::default(), None)
    }

    pub(crate) fn terminal(
        about: Option<String>,
        options: Vec<OptionParameter>,
        arguments: Vec<ArgumentParameter>,
    ) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(about, options, arguments, terminal_width)
    }

    pub(crate) fn new(
        about: Option<String>,
        options: Vec<OptionParameter>,
        arguments: Vec<ArgumentParameter>,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            about,
            options,
            arguments,
            terminal_width,
        }
    }

    pub(crate) fn print_help(
        &self,
        program: impl Into<String>,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let help_flags = format!("-{HELP_SHORT}, --{HELP_NAME}");
        let mut summary = vec![format!("[-{HELP_SHORT}]")];
        let mut option_rows = vec![(help_flags, HELP_MESSAGE.to_string())];
        let mut argument_rows = Vec::default();

        for option in &self.options {
            let grammar = option.grammar();
            let flags = match (&option.long, &option.short) {
                (Some(long), Some(short)) => {
                    summary.push(format!("[-{short}{grammar}]"));
                    format!("-{short}{grammar}, --{long}{grammar}")
                }
                (Some(long), None) => {
                    summary.push(format!("[--{long}{grammar}]"));
                    format!("--{long}{grammar}")
                }
                (None, Some(short)) => {
                    summary.push(format!("[-{short}{grammar}]"));
                    format!("-{short}{grammar}")
                }
                (None, None) => {
                    unreachable!("internal error - a validated option always has a name")
                }
            };
            option_rows.push((flags, option.help.clone().unwrap_or_default()));
        }

        for argument in &self.arguments {
            let grammar = argument.grammar();
            summary.push(grammar.clone());
            argument_rows.push((grammar, argument.help.clone().unwrap_or_default()));
        }

        let left_width = option_rows
            .iter()
            .chain(argument_rows.iter())
            .map(|(left, _)| left.chars().count())
            .max()
            .unwrap_or_default();
        let help_width = self.terminal_width.map(|tw| {
            std::cmp::max(
                tw.saturating_sub(MAIN_INDENT + left_width + PADDING_WIDTH),
                MINIMUM_HELP_WIDTH,
            )
        });

        user_interface.print(format!(
            "usage: {p} {s}",
            p = program.into(),
            s = summary.join(" ")
        ));

        if let Some(about) = &self.about {
            user_interface.print("".to_string());

            for line in chunk(about, self.terminal_width) {
                user_interface.print(line);
            }
        }

        if !argument_rows.is_empty() {
            user_interface.print("".to_string());
            user_interface.print("positional arguments:".to_string());

            for (left, help) in &argument_rows {
                for line in render(left, left_width, help, help_width) {
                    user_interface.print(line);
                }
            }
        }

        user_interface.print("".to_string());
        user_interface.print("options:".to_string());

        for (left, help) in &option_rows {
            for line in render(left, left_width, help, help_width) {
                user_interface.print(line);
            }
        }
    }
}

fn render(left: &str, left_width: usize, help: &str, help_width: Option<usize>) -> Vec<String> {
    let padding = format!("{:PADDING_WIDTH$}", "");
    let parts = chunk(help, help_width);

    if parts.is_empty() {
        return vec![format!("{:MAIN_INDENT$}{left}", "")];
    }

    parts
        .into_iter()
        .enumerate()
        .map(|(i, part)| {
            let left = if i == 0 { left } else { "" };
            format!("{:MAIN_INDENT$}{left:left_width$}{padding}{part}", "")
        })
        .collect()
}

/// Split the paragraph into lines no wider than `width` (unbounded when `None`).
/// Words wider than `width` are hyphenated.
fn chunk(paragraph: &str, width: Option<usize>) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split_whitespace() {
        let word_width = word.chars().count();

        match width {
            Some(width) if current.is_empty() => hyphenate(width, &mut lines, &mut current, word),
            Some(width) if current.chars().count() + word_width + 1 > width => {
                lines.push(std::mem::take(&mut current));
                hyphenate(width, &mut lines, &mut current, word);
            }
            _ => {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = std::cmp::max(width, 2) - 1;
    let mut left = 0;

    while characters.len() - left > width {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}
