// SPDX-License-Identifier: MIT
//
// Capability detection: is stdout an interactive terminal?
//
// Safety: `isatty` is the standard POSIX query and has no safe libc
// wrapper. The unsafe block is a single call on a plain integer fd.
#![allow(unsafe_code)]
//
// The answer decides everything else: escape sequences go to a terminal,
// nothing goes to a file or pipe. If the platform can't tell us, we assume
// "not a terminal". Dropped formatting is harmless; escape bytes in a log
// file or another program's input are not.

#[cfg(unix)]
use std::os::unix::io::RawFd;

// ─── Terminal Queries ───────────────────────────────────────────────────────

/// Check whether the file descriptor `fd` refers to a terminal.
#[cfg(unix)]
#[must_use]
pub fn is_tty(fd: RawFd) -> bool {
    unsafe { libc::isatty(fd) != 0 }
}

/// Check whether stdout is connected to a terminal (TTY).
#[cfg(unix)]
#[must_use]
pub fn stdout_is_tty() -> bool {
    is_tty(libc::STDOUT_FILENO)
}

#[cfg(not(unix))]
#[must_use]
pub fn stdout_is_tty() -> bool {
    false
}

// ─── Capability ─────────────────────────────────────────────────────────────

/// What the output stream can do with escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Attached to a terminal: write the sequences.
    Emit,
    /// A file, pipe, or unknown: drop them.
    Discard,
}

impl Capability {
    /// Map a TTY probe result to a capability.
    #[inline]
    #[must_use]
    pub const fn from_tty(is_tty: bool) -> Self {
        if is_tty { Self::Emit } else { Self::Discard }
    }

    /// Probe stdout once and decide.
    #[must_use]
    pub fn detect() -> Self {
        let tty = stdout_is_tty();
        let capability = Self::from_tty(tty);
        tracing::debug!(stdout_is_tty = tty, ?capability, "detected output capability");
        capability
    }

    /// Whether escape sequences reach the output.
    #[inline]
    #[must_use]
    pub const fn emits(self) -> bool {
        matches!(self, Self::Emit)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
