//! CLI Choices
//!
//! This crate provides interactive command-line choice prompts: present a
//! set of textual choices, read a line of input, normalize and match it
//! against the choice set, and return the selection (or `None` when the
//! user cancels with end-of-input).
//!
//! # Key Features
//!
//! - **Exact Matching**: fixed choice sets with per-choice alias lists; the
//!   canonical alias is returned whatever the user typed
//! - **Prefix Matching**: legacy free-input prompts accepting any
//!   unambiguous abbreviation of a choice
//! - **Numbered Choices**: runtime label lists selected by 1-based index,
//!   with built-in `help`/`quit` meta-commands
//! - **Input Flushing**: stale buffered keystrokes are discarded before
//!   every read so they are never consumed as an answer
//! - **Terminal Helpers**: terminal geometry queries, display-string
//!   truncation, and paged output through the user's pager
//!
//! # Examples
//!
//! Prompting with a default choice:
//!
//! ```no_run
//! use cli_choices::{choices_prompt, Choice};
//!
//! let choices = [Choice::with_aliases(["y", "yes"]), Choice::with_aliases(["n", "no"])];
//! match choices_prompt("Overwrite? [Y/n] ", &choices, Some("y"))? {
//!     Some(answer) if answer == "y" => println!("overwriting"),
//!     Some(_) => println!("skipping"),
//!     None => println!("cancelled"),
//! }
//! # Ok::<(), cli_choices::error::Error>(())
//! ```

pub mod choice;
pub mod error;
pub mod pager;
pub mod prompt;
pub mod terminal;

pub use choice::{normalize, Choice};
pub use error::{Error, Result};
pub use pager::{paged_output, PagedOutput};
pub use prompt::{
    choices_prompt, choices_prompt_by_prefix, numbered_choices_prompt, NumberedPrompt, Prompter,
};
pub use terminal::{ellipsize, terminal_size, TerminalSize};
