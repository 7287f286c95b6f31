// SPDX-License-Identifier: MIT
//
// Output strategies: emit escape sequences, or silently don't.
//
// The [`Format`] trait is the whole facade: colors, cursor save/restore and
// movement, line and screen clearing. Two implementations exist and there
// will never be a third:
//
//   EscapeFormatter: renders each command through `ansi` into a small
//   scratch buffer and hands it to the writer in a single `write_all`, then
//   flushes. One call, one write: concurrent callers never split a sequence.
//
//   NullFormatter: every method is empty. Used when stdout is a file or a
//   pipe, so redirected output stays plain text.
//
// [`Formatter`] is the closed enum over both, built once from a
// [`Capability`] and then held (or shared) by whoever draws.
//
// Nothing here returns an error. Formatting is cosmetic; a failed write to a
// closed stream is logged at trace level and otherwise ignored.

use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use crate::ansi;
use crate::color::Color;
use crate::terminal::Capability;

/// Scratch capacity for one rendered sequence. The longest one,
/// `ESC[-2147483648;-2147483648H`, is 27 bytes.
const SEQ_CAPACITY: usize = 32;

// ─── Format ──────────────────────────────────────────────────────────────────

/// The terminal formatting operations.
///
/// Integer arguments are not validated; whatever is passed is what the
/// terminal receives. Rows and columns are 1-based.
pub trait Format {
    /// Restore default colors and attributes.
    fn reset_color(&self);

    /// Set the foreground color only.
    fn set_foreground(&self, c: Color);

    /// Set the background color only.
    fn set_background(&self, c: Color);

    /// Set both colors in one sequence.
    fn set_fore_and_background(&self, fore: Color, back: Color);

    /// Save the cursor position. Single slot: a second save replaces the first.
    fn cursor_save(&self);

    /// Return the cursor to the saved position.
    fn cursor_restore(&self);

    /// Erase from the cursor to the end of the line. The cursor stays put.
    fn clear_to_end_of_line(&self);

    /// Erase from the start of the line to the cursor. The cursor stays put.
    fn clear_to_begin_of_line(&self);

    /// Erase the current line. The cursor stays put.
    fn clear_line(&self);

    /// Erase the whole screen and move the cursor to row 1, column 1.
    fn clear_screen_and_move_origin(&self);

    /// Move the cursor to an absolute position.
    fn move_cursor(&self, row: i32, col: i32);

    /// Move the cursor up by `rows` lines.
    fn cursor_up(&self, rows: i32);

    /// Move the cursor down by `rows` lines.
    fn cursor_down(&self, rows: i32);
}

// ─── EscapeFormatter ─────────────────────────────────────────────────────────

/// Writes real ANSI escape sequences to `W`.
///
/// The writer sits behind a mutex so a single formatter can be shared by
/// reference across threads.
#[derive(Debug)]
pub struct EscapeFormatter<W> {
    out: Mutex<W>,
}

impl<W: Write> EscapeFormatter<W> {
    /// Wrap a writer.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Take the writer back, e.g. to inspect what was recorded.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Render one sequence and write it out in a single call.
    fn emit<F>(&self, encode: F)
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut seq = Vec::with_capacity(SEQ_CAPACITY);
        // Vec<u8> never refuses bytes.
        if encode(&mut seq).is_err() {
            return;
        }

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = out.write_all(&seq).and_then(|()| out.flush()) {
            tracing::trace!(error = %err, bytes = seq.len(), "dropped escape sequence");
        }
    }
}

impl<W: Write> Format for EscapeFormatter<W> {
    fn reset_color(&self) {
        self.emit(|w| ansi::reset(w));
    }

    fn set_foreground(&self, c: Color) {
        self.emit(|w| ansi::fg(w, c));
    }

    fn set_background(&self, c: Color) {
        self.emit(|w| ansi::bg(w, c));
    }

    fn set_fore_and_background(&self, fore: Color, back: Color) {
        self.emit(|w| ansi::fg_bg(w, fore, back));
    }

    fn cursor_save(&self) {
        self.emit(|w| ansi::cursor_save(w));
    }

    fn cursor_restore(&self) {
        self.emit(|w| ansi::cursor_restore(w));
    }

    fn clear_to_end_of_line(&self) {
        self.emit(|w| ansi::clear_to_eol(w));
    }

    fn clear_to_begin_of_line(&self) {
        self.emit(|w| ansi::clear_to_bol(w));
    }

    fn clear_line(&self) {
        self.emit(|w| ansi::clear_line(w));
    }

    fn clear_screen_and_move_origin(&self) {
        self.emit(|w| ansi::clear_screen(w));
    }

    fn move_cursor(&self, row: i32, col: i32) {
        self.emit(|w| ansi::cursor_to(w, row, col));
    }

    fn cursor_up(&self, rows: i32) {
        self.emit(|w| ansi::cursor_up(w, rows));
    }

    fn cursor_down(&self, rows: i32) {
        self.emit(|w| ansi::cursor_down(w, rows));
    }
}

// ─── NullFormatter ───────────────────────────────────────────────────────────

/// Accepts every operation and does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullFormatter;

impl Format for NullFormatter {
    fn reset_color(&self) {}
    fn set_foreground(&self, _c: Color) {}
    fn set_background(&self, _c: Color) {}
    fn set_fore_and_background(&self, _fore: Color, _back: Color) {}
    fn cursor_save(&self) {}
    fn cursor_restore(&self) {}
    fn clear_to_end_of_line(&self) {}
    fn clear_to_begin_of_line(&self) {}
    fn clear_line(&self) {}
    fn clear_screen_and_move_origin(&self) {}
    fn move_cursor(&self, _row: i32, _col: i32) {}
    fn cursor_up(&self, _rows: i32) {}
    fn cursor_down(&self, _rows: i32) {}
}

// ─── Formatter ───────────────────────────────────────────────────────────────

/// The bound output strategy: one of the two formatters, chosen once.
///
/// # Example
///
/// ```
/// use tint::{Capability, Color, Format, Formatter};
///
/// let f = Formatter::new(Capability::Emit, Vec::<u8>::new());
/// f.set_foreground(Color::RED);
/// f.reset_color();
/// assert_eq!(f.into_writer().unwrap(), b"\x1b[31m\x1b[0m");
/// ```
#[derive(Debug)]
pub enum Formatter<W = Stdout> {
    /// Stdout is a terminal.
    Escape(EscapeFormatter<W>),
    /// Stdout is anything else.
    Null(NullFormatter),
}

impl<W: Write> Formatter<W> {
    /// Build the variant matching `capability`.
    ///
    /// For [`Capability::Discard`] the writer is dropped unused.
    #[must_use]
    pub fn new(capability: Capability, out: W) -> Self {
        match capability {
            Capability::Emit => Self::Escape(EscapeFormatter::new(out)),
            Capability::Discard => Self::Null(NullFormatter),
        }
    }

    /// Which capability this formatter was built for.
    #[must_use]
    pub const fn capability(&self) -> Capability {
        match self {
            Self::Escape(_) => Capability::Emit,
            Self::Null(_) => Capability::Discard,
        }
    }

    /// Whether escape sequences are actually written.
    #[inline]
    #[must_use]
    pub const fn is_emitting(&self) -> bool {
        matches!(self, Self::Escape(_))
    }

    /// The writer, if this is the emitting variant.
    pub fn into_writer(self) -> Option<W> {
        match self {
            Self::Escape(e) => Some(e.into_inner()),
            Self::Null(_) => None,
        }
    }

    fn strategy(&self) -> &dyn Format {
        match self {
            Self::Escape(e) => e,
            Self::Null(n) => n,
        }
    }
}

impl Formatter<Stdout> {
    /// Probe stdout and bind the matching formatter to it.
    #[must_use]
    pub fn detect() -> Self {
        Self::new(Capability::detect(), io::stdout())
    }
}

impl<W: Write> Format for Formatter<W> {
    fn reset_color(&self) {
        self.strategy().reset_color();
    }

    fn set_foreground(&self, c: Color) {
        self.strategy().set_foreground(c);
    }

    fn set_background(&self, c: Color) {
        self.strategy().set_background(c);
    }

    fn set_fore_and_background(&self, fore: Color, back: Color) {
        self.strategy().set_fore_and_background(fore, back);
    }

    fn cursor_save(&self) {
        self.strategy().cursor_save();
    }

    fn cursor_restore(&self) {
        self.strategy().cursor_restore();
    }

    fn clear_to_end_of_line(&self) {
        self.strategy().clear_to_end_of_line();
    }

    fn clear_to_begin_of_line(&self) {
        self.strategy().clear_to_begin_of_line();
    }

    fn clear_line(&self) {
        self.strategy().clear_line();
    }

    fn clear_screen_and_move_origin(&self) {
        self.strategy().clear_screen_and_move_origin();
    }

    fn move_cursor(&self, row: i32, col: i32) {
        self.strategy().move_cursor(row, col);
    }

    fn cursor_up(&self, rows: i32) {
        self.strategy().cursor_up(rows);
    }

    fn cursor_down(&self, rows: i32) {
        self.strategy().cursor_down(rows);
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn record(op: impl FnOnce(&Formatter<Vec<u8>>)) -> String {
        let f = Formatter::new(Capability::Emit, Vec::new());
        op(&f);
        String::from_utf8(f.into_writer().unwrap_or_default()).unwrap()
    }

    proptest! {
        /// Property: cursor coordinates are written verbatim.
        #[test]
        fn move_cursor_passes_through(row in any::<i32>(), col in any::<i32>()) {
            prop_assert_eq!(record(|f| f.move_cursor(row, col)), format!("\x1b[{row};{col}H"));
        }

        /// Property: relative moves are written verbatim.
        #[test]
        fn relative_moves_pass_through(rows in any::<i32>()) {
            prop_assert_eq!(record(|f| f.cursor_up(rows)), format!("\x1b[{rows}A"));
            prop_assert_eq!(record(|f| f.cursor_down(rows)), format!("\x1b[{rows}B"));
        }

        /// Property: color parameters are offset, never clamped.
        #[test]
        fn colors_pass_through(fore in -1000i32..1000, back in -1000i32..1000) {
            prop_assert_eq!(
                record(|f| f.set_fore_and_background(Color(fore), Color(back))),
                format!("\x1b[{};{}m", fore + 30, back + 40)
            );
        }

        /// Property: the discarding formatter never produces a byte.
        #[test]
        fn discard_is_silent(n in any::<i32>()) {
            let f = Formatter::new(Capability::Discard, Vec::<u8>::new());
            f.reset_color();
            f.set_foreground(Color(n));
            f.set_background(Color(n));
            f.set_fore_and_background(Color(n), Color(n));
            f.move_cursor(n, n);
            f.cursor_up(n);
            f.cursor_down(n);
            prop_assert!(f.into_writer().is_none());
        }
    }
}
