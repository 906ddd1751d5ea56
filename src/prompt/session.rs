use std::io::{stderr, stdin, BufRead, Stderr, StdinLock, Stdout, Write};

use crate::choice::{normalize, Choice, ChoiceTable, PrefixLookup, PrefixMatcher};
use crate::error::Result;

use super::flush::{InputFlush, TerminalFlush};

/// The default invalid-choice message.
pub(crate) fn invalid_choice_message(raw: &str) -> String {
    format!("\"{raw}\" is not a valid choice.")
}

/// An interactive prompt session over a line-buffered input stream and a
/// text output sink.
///
/// The prompt label, invalid-choice messages, and the cancellation newline
/// all go to the same sink. Input already buffered by the terminal driver is
/// discarded through the flush strategy before every read so that stale
/// keystrokes (especially a stray blank line) are never consumed as an
/// answer.
///
/// End-of-input resolves every prompt to `Ok(None)`; callers should treat
/// that as cancellation, not as an error.
pub struct Prompter<R, W, F> {
    pub(crate) reader: R,
    pub(crate) writer: W,
    pub(crate) flusher: F,
}

impl Prompter<StdinLock<'static>, Stdout, TerminalFlush> {
    /// Creates a prompter over stdin and stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(stdin().lock(), std::io::stdout(), TerminalFlush)
    }
}

impl Prompter<StdinLock<'static>, Stderr, TerminalFlush> {
    /// Creates a prompter over stdin that writes prompts and messages to
    /// stderr, leaving stdout free for program output.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(stdin().lock(), stderr(), TerminalFlush)
    }
}

impl<R, W, F> Prompter<R, W, F>
where
    R: BufRead,
    W: Write,
    F: InputFlush,
{
    pub fn new(reader: R, writer: W, flusher: F) -> Self {
        Self {
            reader,
            writer,
            flusher,
        }
    }

    /// Prompts the user to pick one of `choices`, matching responses exactly
    /// against each choice's aliases (after normalization on both sides).
    ///
    /// Returns the canonical string of the matched choice, or `None` if the
    /// user cancelled with end-of-input. An empty `choices` collection
    /// resolves to `None` immediately, with no output and no reads. A blank
    /// response resolves to `default` when one is given and retries silently
    /// otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `default` is given but does not match any choice alias.
    pub fn choices(
        &mut self,
        message: &str,
        choices: &[Choice],
        default: Option<&str>,
    ) -> Result<Option<String>> {
        self.choices_with_message(message, choices, default, None)
    }

    /// Like [`Prompter::choices`], with an overridden invalid-choice message
    /// generator. The generator receives the raw (un-normalized) response.
    pub fn choices_with_message(
        &mut self,
        message: &str,
        choices: &[Choice],
        default: Option<&str>,
        invalid_message: Option<&dyn Fn(&str) -> String>,
    ) -> Result<Option<String>> {
        if choices.is_empty() {
            return Ok(None);
        }

        let table = ChoiceTable::build(choices);
        let default_choice = default.map(|default| {
            let canonical = table.lookup(&normalize(default));
            assert!(
                canonical.is_some(),
                "default \"{default}\" is not one of the choices"
            );
            canonical.unwrap_or_default().to_string()
        });

        loop {
            let raw = match self.read_response(message)? {
                Some(raw) => raw,
                None => return Ok(None),
            };

            let key = normalize(&raw);
            if key.is_empty() {
                match &default_choice {
                    Some(canonical) => return Ok(Some(canonical.clone())),
                    None => continue,
                }
            }

            match table.lookup(&key) {
                Some(canonical) => return Ok(Some(canonical.to_string())),
                None => {
                    let rejection = match invalid_message {
                        Some(generate) => generate(&raw),
                        None => invalid_choice_message(&raw),
                    };
                    self.report_rejected(&rejection)?;
                }
            }
        }
    }

    /// Prompts the user to pick one of `choices` by unambiguous-prefix
    /// matching (the legacy free-input variant).
    ///
    /// Returns the original choice string, or `None` on end-of-input.
    ///
    /// # Panics
    ///
    /// Panics if `choices` is empty, or if `default` is given but is not
    /// (string-)equal to one of the choices.
    pub fn choices_by_prefix(
        &mut self,
        message: &str,
        choices: &[&str],
        default: Option<&str>,
    ) -> Result<Option<String>> {
        assert!(!choices.is_empty(), "choices must not be empty");
        if let Some(default) = default {
            assert!(
                choices.contains(&default),
                "default \"{default}\" is not one of the choices"
            );
        }

        let matcher = PrefixMatcher::build(choices);

        loop {
            let raw = match self.read_response(message)? {
                Some(raw) => raw,
                None => return Ok(None),
            };

            let key = normalize(&raw);
            if key.is_empty() {
                match default {
                    Some(default) => return Ok(Some(default.to_string())),
                    None => continue,
                }
            }

            match matcher.lookup(&key) {
                PrefixLookup::Match(original) => return Ok(Some(original.to_string())),
                PrefixLookup::Ambiguous => {
                    self.report_rejected(&format!("\"{raw}\" is an ambiguous choice."))?;
                }
                PrefixLookup::NotFound => {
                    self.report_rejected(&invalid_choice_message(&raw))?;
                }
            }
        }
    }

    /// Writes the prompt label and reads one response line.
    ///
    /// Returns `None` on end-of-input, after terminating the dangling prompt
    /// line with a newline.
    fn read_response(&mut self, message: &str) -> Result<Option<String>> {
        self.flusher.flush_pending();

        write!(self.writer, "{message}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Reports a rejected response, followed by a blank line.
    fn report_rejected(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{message}")?;
        writeln!(self.writer)?;
        Ok(())
    }
}
