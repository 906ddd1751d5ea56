//! Paged output through the user's pager.
//!
//! Writes to a [`PagedOutput`] handle are sent through a pager subprocess
//! (`$PAGER`, falling back to `less` and then `more`). Paging only applies
//! when stdout is an interactive terminal; otherwise writes pass straight
//! through to stdout.

use std::env;
use std::io::{self, stdout, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::tty::IsTty;
use log::{debug, warn};

/// Guards against nested pager subprocesses. Not used by the prompt loop.
static PAGER_ACTIVE: AtomicBool = AtomicBool::new(false);

/// A writable handle whose output is routed through a pager subprocess.
///
/// Dropping the handle closes the pager's stdin and waits for the pager to
/// exit (so the user can finish scrolling before the program continues).
pub struct PagedOutput {
    target: Target,
}

enum Target {
    Pager {
        child: Child,
        stdin: Option<ChildStdin>,
    },
    Passthrough(io::Stdout),
}

/// Spawns the user's pager and returns a stream that writes through it.
///
/// If no pager is explicitly specified, the pager is determined from the
/// `PAGER` environment variable, falling back to `less` and then `more` from
/// the executable search path. Writes pass through to stdout unchanged when
/// stdout is not a TTY, when no pager can be found or spawned, or when a
/// pager is already active (a nested pager is never spawned).
#[must_use]
pub fn paged_output(pager: Option<&str>) -> PagedOutput {
    if !stdout().is_tty() {
        return PagedOutput::passthrough();
    }

    if PAGER_ACTIVE
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        debug!("pager already active; not spawning another");
        return PagedOutput::passthrough();
    }

    let pager = pager
        .map(ToString::to_string)
        .or_else(|| env::var("PAGER").ok().filter(|pager| !pager.is_empty()))
        .or_else(|| find_in_path("less").map(|path| path.display().to_string()))
        .or_else(|| find_in_path("more").map(|path| path.display().to_string()));

    let Some(pager) = pager else {
        PAGER_ACTIVE.store(false, Ordering::SeqCst);
        return PagedOutput::passthrough();
    };

    debug!("spawning pager: `{pager}`");
    match Command::new(&pager).stdin(Stdio::piped()).spawn() {
        Ok(mut child) => {
            let stdin = child.stdin.take();
            PagedOutput {
                target: Target::Pager { child, stdin },
            }
        }
        Err(error) => {
            warn!("failed to spawn pager `{pager}`: {error}");
            PAGER_ACTIVE.store(false, Ordering::SeqCst);
            PagedOutput::passthrough()
        }
    }
}

impl PagedOutput {
    fn passthrough() -> Self {
        Self {
            target: Target::Passthrough(stdout()),
        }
    }

    /// Whether writes actually go through a pager subprocess.
    #[must_use]
    pub fn is_paged(&self) -> bool {
        matches!(self.target, Target::Pager { .. })
    }
}

impl Write for PagedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.target {
            Target::Pager {
                stdin: Some(stdin), ..
            } => stdin.write(buf),
            // The pipe is only taken on drop; treat a missing one as closed.
            Target::Pager { stdin: None, .. } => Err(io::ErrorKind::BrokenPipe.into()),
            Target::Passthrough(stdout) => stdout.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.target {
            Target::Pager {
                stdin: Some(stdin), ..
            } => stdin.flush(),
            Target::Pager { stdin: None, .. } => Ok(()),
            Target::Passthrough(stdout) => stdout.flush(),
        }
    }
}

impl Drop for PagedOutput {
    fn drop(&mut self) {
        if let Target::Pager { child, stdin } = &mut self.target {
            // Close the pipe so the pager sees end-of-input, then wait for
            // the user to dismiss it.
            drop(stdin.take());
            let _ = child.wait();
            PAGER_ACTIVE.store(false, Ordering::SeqCst);
        }
    }
}

/// Searches `PATH` for an executable with the given name.
fn find_in_path(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
