//! Interactive choice prompting.
//!
//! This module provides the prompt loop that repeatedly reads a line from an
//! interactive terminal, matches it against a choice set, and returns the
//! selection (or `None` when the user cancels with end-of-input).
//!
//! # Key Features
//!
//! - **Exact matching**: fixed choice sets with per-choice alias lists
//! - **Prefix matching**: legacy free-input variant accepting unambiguous
//!   abbreviations
//! - **Numbered choices**: runtime-determined label lists selected by index,
//!   with `help`/`quit` meta-commands
//! - **Input flushing**: stale buffered keystrokes are discarded before
//!   every read
//! - **Pluggable streams**: prompts and messages can target stdout, stderr,
//!   or any text sink
//!
//! The free functions below prompt over stdin/stdout; construct a
//! [`Prompter`] directly to use other streams or a different flush strategy.

pub mod flush;
mod numbered;
mod session;

pub use flush::{InputFlush, NoopFlush, TerminalFlush};
pub use numbered::NumberedPrompt;
pub use session::Prompter;

use crate::choice::Choice;
use crate::error::Result;

/// Prompts on stdin/stdout for one of `choices`, matched exactly.
///
/// See [`Prompter::choices`].
pub fn choices_prompt(
    message: &str,
    choices: &[Choice],
    default: Option<&str>,
) -> Result<Option<String>> {
    Prompter::stdout().choices(message, choices, default)
}

/// Prompts on stdin/stdout for one of `choices`, matched by unambiguous
/// prefix.
///
/// See [`Prompter::choices_by_prefix`].
pub fn choices_prompt_by_prefix(
    message: &str,
    choices: &[&str],
    default: Option<&str>,
) -> Result<Option<String>> {
    Prompter::stdout().choices_by_prefix(message, choices, default)
}

/// Prompts on stdin/stdout for one of a numbered list of labels.
///
/// See [`Prompter::numbered`].
pub fn numbered_choices_prompt(numbered: &NumberedPrompt<'_>) -> Result<Option<usize>> {
    Prompter::stdout().numbered(numbered)
}
