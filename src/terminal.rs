//! Terminal geometry and display-string helpers.

use std::io::stdout;

use crossterm::terminal;
use crossterm::tty::IsTty;

/// Fallback dimensions when the terminal refuses to report its size
const FALLBACK_COLUMNS: u16 = 80;
const FALLBACK_ROWS: u16 = 24;

const ELLIPSIS: &str = "...";

/// Reported terminal dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalSize {
    Cells { columns: u16, rows: u16 },
    /// Output is not connected to an interactive terminal; there is no
    /// wrapping constraint.
    Unbounded,
}

impl TerminalSize {
    #[must_use]
    pub fn columns(&self) -> Option<u16> {
        match self {
            TerminalSize::Cells { columns, .. } => Some(*columns),
            TerminalSize::Unbounded => None,
        }
    }

    #[must_use]
    pub fn rows(&self) -> Option<u16> {
        match self {
            TerminalSize::Cells { rows, .. } => Some(*rows),
            TerminalSize::Unbounded => None,
        }
    }
}

/// Returns the terminal size.
///
/// Returns [`TerminalSize::Unbounded`] if stdout is not a TTY. Falls back to
/// 80x24 if the size query fails.
#[must_use]
pub fn terminal_size() -> TerminalSize {
    if !stdout().is_tty() {
        return TerminalSize::Unbounded;
    }

    let (columns, rows) = terminal::size().unwrap_or((FALLBACK_COLUMNS, FALLBACK_ROWS));
    TerminalSize::Cells { columns, rows }
}

/// Truncates a string to the specified maximum width (in code points).
///
/// The maximum width includes the added ellipsis if the string is truncated;
/// widths smaller than the ellipsis fall back to hard truncation. Whitespace
/// is left alone.
///
/// # Panics
///
/// Panics if `width` is zero.
#[must_use]
pub fn ellipsize(s: &str, width: usize) -> String {
    assert!(width > 0, "width must be positive");

    if s.chars().count() <= width {
        return s.to_string();
    }

    if width < ELLIPSIS.chars().count() {
        return s.chars().take(width).collect();
    }

    let mut truncated: String = s.chars().take(width - ELLIPSIS.chars().count()).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipsize_short_string_untouched() {
        assert_eq!(ellipsize("ab", 5), "ab");
        assert_eq!(ellipsize("abcde", 5), "abcde");
        assert_eq!(ellipsize("", 1), "");
    }

    #[test]
    fn test_ellipsize_truncates_with_ellipsis() {
        assert_eq!(ellipsize("abcdefgh", 5), "ab...");
        assert_eq!(ellipsize("abcdefgh", 7), "abcd...");
    }

    #[test]
    fn test_ellipsize_width_includes_ellipsis() {
        assert_eq!(ellipsize("abcdefgh", 5).chars().count(), 5);
        assert_eq!(ellipsize("abcd", 3), "...");
    }

    #[test]
    fn test_ellipsize_narrow_width_hard_truncates() {
        assert_eq!(ellipsize("abcdef", 2), "ab");
        assert_eq!(ellipsize("abcdef", 1), "a");
    }

    #[test]
    fn test_ellipsize_counts_code_points() {
        assert_eq!(ellipsize("äöüßäöüß", 5), "äö...");
        assert_eq!(ellipsize("äöü", 5), "äöü");
    }

    #[test]
    fn test_ellipsize_leaves_whitespace_alone() {
        assert_eq!(ellipsize("a b c d e", 6), "a b...");
    }

    #[test]
    #[should_panic(expected = "width must be positive")]
    fn test_ellipsize_zero_width_panics() {
        let _ = ellipsize("abc", 0);
    }

    #[test]
    fn test_terminal_size_reports_consistently() {
        // Whether or not the test runs attached to a TTY, the sentinel and
        // the accessors must agree.
        match terminal_size() {
            TerminalSize::Unbounded => {
                assert_eq!(terminal_size().columns(), None);
                assert_eq!(terminal_size().rows(), None);
            }
            TerminalSize::Cells { columns, rows } => {
                assert!(columns > 0);
                assert!(rows > 0);
            }
        }
    }

    #[test]
    fn test_terminal_size_accessors() {
        let size = TerminalSize::Cells {
            columns: 120,
            rows: 40,
        };
        assert_eq!(size.columns(), Some(120));
        assert_eq!(size.rows(), Some(40));
    }
}
