// SPDX-License-Identifier: MIT
//
// Process-wide pass-through API.
//
// Callers that don't want to carry a `Formatter` around can use these free
// functions instead. They all forward to one stdout formatter, bound the
// first time it's needed (or explicitly via `init()` at program entry).
// The `OnceLock` guarantees the capability probe runs exactly once and that
// every thread sees the finished binding, never a half-initialized one.
//
// Code that wants to be testable should take a `&impl Format` instead; this
// module is a convenience layer with no logic of its own.

use std::fmt;
use std::io::{self, Stdout, Write};
use std::sync::OnceLock;

use crate::color::Color;
use crate::formatter::{Format, Formatter};

static FORMATTER: OnceLock<Formatter<Stdout>> = OnceLock::new();

/// Probe stdout and bind the process-wide formatter.
///
/// Idempotent: later calls return the existing binding.
pub fn init() -> &'static Formatter<Stdout> {
    FORMATTER.get_or_init(Formatter::<Stdout>::detect)
}

/// The process-wide formatter, binding it on first use.
#[inline]
#[must_use]
pub fn formatter() -> &'static Formatter<Stdout> {
    init()
}

/// Print formatted text to stdout, whatever the capability.
///
/// Only escape sequences are dropped for non-terminals; text always goes
/// through. Write errors are ignored like everywhere else in the facade.
pub fn print(args: fmt::Arguments<'_>) {
    let mut out = io::stdout().lock();
    if let Err(err) = out.write_fmt(args).and_then(|()| out.flush()) {
        tracing::trace!(error = %err, "dropped text output");
    }
}

/// Restore default colors and attributes.
pub fn reset_color() {
    formatter().reset_color();
}

/// Set the foreground color.
pub fn set_foreground(c: Color) {
    formatter().set_foreground(c);
}

/// Set the background color.
pub fn set_background(c: Color) {
    formatter().set_background(c);
}

/// Set foreground and background together.
pub fn set_fore_and_background(fore: Color, back: Color) {
    formatter().set_fore_and_background(fore, back);
}

/// Save the cursor position.
pub fn cursor_save() {
    formatter().cursor_save();
}

/// Move the cursor back to the saved position.
pub fn cursor_restore() {
    formatter().cursor_restore();
}

/// Erase everything right of the cursor. The cursor does not move.
pub fn clear_to_end_of_line() {
    formatter().clear_to_end_of_line();
}

/// Erase everything left of the cursor. The cursor does not move.
pub fn clear_to_begin_of_line() {
    formatter().clear_to_begin_of_line();
}

/// Erase the current line. The cursor does not move.
pub fn clear_line() {
    formatter().clear_line();
}

/// Erase the screen and move the cursor to the origin.
pub fn clear_screen_and_move_origin() {
    formatter().clear_screen_and_move_origin();
}

/// Move the cursor to `(row, col)`, 1-based.
pub fn move_cursor(row: i32, col: i32) {
    formatter().move_cursor(row, col);
}

/// Move the cursor up `rows` lines.
pub fn cursor_up(rows: i32) {
    formatter().cursor_up(rows);
}

/// Move the cursor down `rows` lines.
pub fn cursor_down(rows: i32) {
    formatter().cursor_down(rows);
}

// ─── Tests ───────────────────────────────────────────────────────────────────
