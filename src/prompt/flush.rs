//! Input-flush strategies.
//!
//! Stale keystrokes buffered by the terminal driver (especially a blank line)
//! would otherwise be consumed as an answer to a prompt the user never saw.
//! The prompt loop discards pending input before every read through one of
//! the strategies here.

/// Discards terminal input that has been buffered but not yet read.
///
/// Implementations are best-effort: all failures are swallowed, since a
/// failed flush only risks a stale keystroke, never a wrong answer being
/// fabricated.
pub trait InputFlush {
    fn flush_pending(&self);
}

/// Platform flush strategy for the process's controlling terminal.
///
/// Uses `tcflush` on POSIX and drains the console event queue on Windows.
/// On other platforms flushing is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalFlush;

impl InputFlush for TerminalFlush {
    #[cfg(unix)]
    fn flush_pending(&self) {
        use std::os::unix::io::AsRawFd;

        let fd = std::io::stdin().as_raw_fd();
        // Fails with ENOTTY when stdin is not a terminal; nothing to flush then.
        unsafe {
            libc::tcflush(fd, libc::TCIFLUSH);
        }
    }

    #[cfg(windows)]
    fn flush_pending(&self) {
        use std::time::Duration;

        use crossterm::event;

        while event::poll(Duration::ZERO).unwrap_or(false) {
            if event::read().is_err() {
                break;
            }
        }
    }

    #[cfg(not(any(unix, windows)))]
    fn flush_pending(&self) {}
}

/// No-op strategy for non-interactive input sources and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFlush;

impl InputFlush for NoopFlush {
    fn flush_pending(&self) {}
}
