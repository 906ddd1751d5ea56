use std::io::{BufRead, Write};

use crate::choice::Choice;
use crate::error::Result;

use super::flush::InputFlush;
use super::session::Prompter;

/// Configuration for a numbered choice prompt.
///
/// Wraps a runtime-determined list of display labels into a choice set of
/// 1-based indices plus `help`/`quit` meta-commands.
pub struct NumberedPrompt<'a> {
    labels: &'a [String],
    preamble: Option<&'a str>,
    prompt: Option<&'a str>,
    default_index: Option<usize>,
    format_line: Option<&'a dyn Fn(&str) -> String>,
}

impl<'a> NumberedPrompt<'a> {
    #[must_use]
    pub fn new(labels: &'a [String]) -> Self {
        Self {
            labels,
            preamble: None,
            prompt: None,
            default_index: None,
            format_line: None,
        }
    }

    /// Line printed above the choice list.
    #[must_use]
    pub fn preamble(mut self, preamble: &'a str) -> Self {
        self.preamble = Some(preamble);
        self
    }

    /// Caller-supplied prompt label, prefixed to the synthesized
    /// `[1..N]: ` range.
    #[must_use]
    pub fn prompt(mut self, prompt: &'a str) -> Self {
        self.prompt = Some(prompt);
        self
    }

    /// Zero-based index returned when the user enters a blank line.
    #[must_use]
    pub fn default_index(mut self, index: usize) -> Self {
        self.default_index = Some(index);
        self
    }

    /// Hook applied to each rendered choice line (identity by default).
    #[must_use]
    pub fn format_line(mut self, hook: &'a dyn Fn(&str) -> String) -> Self {
        self.format_line = Some(hook);
        self
    }

    /// Synthesizes the full prompt label.
    fn message(&self) -> String {
        let count = self.labels.len();
        let range = if count == 2 {
            "[1, 2]".to_string()
        } else {
            format!("[1..{count}]")
        };

        let mut message = match self.prompt {
            Some(prompt) => format!("{prompt} {range}: "),
            None => format!("{range}: "),
        };
        if let Some(index) = self.default_index {
            message.push_str(&format!("[{}] ", index + 1));
        }
        message
    }
}

impl<R, W, F> Prompter<R, W, F>
where
    R: BufRead,
    W: Write,
    F: InputFlush,
{
    /// Prompts the user to pick one of the numbered labels.
    ///
    /// Prints the preamble and the numbered choice list, then prompts until
    /// the user enters an index, `quit`s, or cancels with end-of-input.
    /// Entering `help` (or `h` or `?`) reprints the list; that is not
    /// counted or reported as an invalid response. Returns the zero-based
    /// index of the selected label, or `None` on quit or cancellation.
    ///
    /// An empty label list resolves to `None` and a single label resolves to
    /// index 0, both with no I/O at all.
    ///
    /// # Panics
    ///
    /// Panics if a default index is set but out of range.
    pub fn numbered(&mut self, numbered: &NumberedPrompt<'_>) -> Result<Option<usize>> {
        let count = numbered.labels.len();
        if count == 0 {
            return Ok(None);
        }
        if count == 1 {
            return Ok(Some(0));
        }
        if let Some(index) = numbered.default_index {
            assert!(
                index < count,
                "default index {index} is out of range for {count} choices"
            );
        }

        let mut choices: Vec<Choice> = (1..=count).map(|i| Choice::new(i.to_string())).collect();
        choices.push(Choice::with_aliases(["?", "h", "help"]));
        choices.push(Choice::with_aliases(["q", "quit"]));

        let default = numbered.default_index.map(|index| (index + 1).to_string());
        let message = numbered.message();
        let invalid: &dyn Fn(&str) -> String = &|raw| {
            format!(
                "\"{raw}\" is not a valid choice.\n\
                 The entered choice must be between 1 and {count}, inclusive.\n\
                 Enter \"help\" to show the choices again or \"quit\" to quit."
            )
        };

        loop {
            self.print_choice_list(numbered)?;

            let canonical = match self.choices_with_message(
                &message,
                &choices,
                default.as_deref(),
                Some(invalid),
            )? {
                Some(canonical) => canonical,
                None => return Ok(None),
            };

            match canonical.as_str() {
                "q" => return Ok(None),
                "?" => {
                    // Separate the reprinted list from the answered prompt.
                    writeln!(self.writer)?;
                }
                index => {
                    let index: usize = index.parse().expect("numbered table yields numeric keys");
                    return Ok(Some(index - 1));
                }
            }
        }
    }

    fn print_choice_list(&mut self, numbered: &NumberedPrompt<'_>) -> Result<()> {
        if let Some(preamble) = numbered.preamble {
            writeln!(self.writer, "{preamble}")?;
        }
        for (i, label) in numbered.labels.iter().enumerate() {
            let line = format!("  {}: {}", i + 1, label);
            match numbered.format_line {
                Some(hook) => writeln!(self.writer, "{}", hook(&line))?,
                None => writeln!(self.writer, "{line}")?,
            }
        }
        Ok(())
    }
}
