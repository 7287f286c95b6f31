// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about whether to emit; that's the formatter's job. This
// module just knows the byte-level encoding of every command the facade
// exposes.
//
// Coordinates and counts are passed through verbatim as decimal integers.
// Rows and columns are 1-based, matching the terminal's own convention.
// Nothing is range-checked: `cursor_up(w, 0)` really writes `ESC[0A`.
use std::io::{self, Write};

use crate::color::Color;

/// Control Sequence Introducer: `ESC [`.
pub const CSI: &str = "\x1b[";

// ─── Color ───────────────────────────────────────────────────────────────────

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Set the foreground color (SGR 30–37, 39).
#[inline]
pub fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    write!(w, "{CSI}{}m", color.foreground_code())
}

/// Set the background color (SGR 40–47, 49).
#[inline]
pub fn bg(w: &mut impl Write, color: Color) -> io::Result<()> {
    write!(w, "{CSI}{}m", color.background_code())
}

/// Set foreground and background in a single SGR sequence.
#[inline]
pub fn fg_bg(w: &mut impl Write, fore: Color, back: Color) -> io::Result<()> {
    write!(
        w,
        "{CSI}{};{}m",
        fore.foreground_code(),
        back.background_code()
    )
}

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Save the cursor position (SCOSC).
///
/// The terminal keeps a single slot: a second save overwrites the first.
#[inline]
pub fn cursor_save(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[s")
}

/// Restore the cursor to the last saved position (SCORC).
#[inline]
pub fn cursor_restore(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[u")
}

/// Move the cursor to `(row, col)` using CUP. Both are 1-based.
#[inline]
pub fn cursor_to(w: &mut impl Write, row: i32, col: i32) -> io::Result<()> {
    write!(w, "{CSI}{row};{col}H")
}

/// Move the cursor up `rows` lines (CUU).
#[inline]
pub fn cursor_up(w: &mut impl Write, rows: i32) -> io::Result<()> {
    write!(w, "{CSI}{rows}A")
}

/// Move the cursor down `rows` lines (CUD).
#[inline]
pub fn cursor_down(w: &mut impl Write, rows: i32) -> io::Result<()> {
    write!(w, "{CSI}{rows}B")
}

// ─── Erase ───────────────────────────────────────────────────────────────────

/// Erase from the cursor to the end of the line (EL 0).
#[inline]
pub fn clear_to_eol(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[K")
}

/// Erase from the start of the line to the cursor (EL 1).
#[inline]
pub fn clear_to_bol(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[1K")
}

/// Erase the whole line (EL 2). The cursor does not move.
#[inline]
pub fn clear_line(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2K")
}

/// Clear the entire screen (ED 2).
#[inline]
pub fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2J")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Helper: run an ANSI function and return its output as a string.
    fn emit<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn csi_is_esc_bracket() {
        assert_eq!(CSI.as_bytes(), &[0x1b, b'[']);
    }

    // ── Color ───────────────────────────────────────────────────────────

    #[test]
    fn reset_sequence() {
        assert_eq!(emit(|w| reset(w)), "\x1b[0m");
    }

    #[test]
    fn fg_every_named_color() {
        for c in Color::ALL {
            assert_eq!(emit(|w| fg(w, c)), format!("\x1b[{}m", 30 + c.0));
        }
    }

    #[test]
    fn bg_every_named_color() {
        for c in Color::ALL {
            assert_eq!(emit(|w| bg(w, c)), format!("\x1b[{}m", 40 + c.0));
        }
    }

    #[test]
    fn fg_default() {
        assert_eq!(emit(|w| fg(w, Color::DEFAULT)), "\x1b[39m");
    }

    #[test]
    fn bg_default() {
        assert_eq!(emit(|w| bg(w, Color::DEFAULT)), "\x1b[49m");
    }

    #[test]
    fn fg_bg_is_one_sequence() {
        assert_eq!(emit(|w| fg_bg(w, Color::RED, Color::BLACK)), "\x1b[31;40m");
    }

    #[test]
    fn fg_bg_defaults() {
        assert_eq!(
            emit(|w| fg_bg(w, Color::DEFAULT, Color::DEFAULT)),
            "\x1b[39;49m"
        );
    }

    #[test]
    fn fg_out_of_range_passes_through() {
        assert_eq!(emit(|w| fg(w, Color(-35))), "\x1b[-5m");
        assert_eq!(emit(|w| bg(w, Color(200))), "\x1b[240m");
    }

    // ── Cursor ──────────────────────────────────────────────────────────

    #[test]
    fn cursor_save_sequence() {
        assert_eq!(emit(|w| cursor_save(w)), "\x1b[s");
    }

    #[test]
    fn cursor_restore_sequence() {
        assert_eq!(emit(|w| cursor_restore(w)), "\x1b[u");
    }

    #[test]
    fn cursor_to_origin() {
        assert_eq!(emit(|w| cursor_to(w, 1, 1)), "\x1b[1;1H");
    }

    #[test]
    fn cursor_to_row_then_column() {
        assert_eq!(emit(|w| cursor_to(w, 24, 80)), "\x1b[24;80H");
    }

    #[test]
    fn cursor_to_zero_and_negative() {
        assert_eq!(emit(|w| cursor_to(w, 0, -3)), "\x1b[0;-3H");
    }

    #[test]
    fn cursor_up_sequence() {
        assert_eq!(emit(|w| cursor_up(w, 3)), "\x1b[3A");
        assert_eq!(emit(|w| cursor_up(w, 0)), "\x1b[0A");
    }

    #[test]
    fn cursor_down_sequence() {
        assert_eq!(emit(|w| cursor_down(w, 12)), "\x1b[12B");
        assert_eq!(emit(|w| cursor_down(w, -1)), "\x1b[-1B");
    }

    // ── Erase ───────────────────────────────────────────────────────────

    #[test]
    fn clear_to_eol_sequence() {
        assert_eq!(emit(|w| clear_to_eol(w)), "\x1b[K");
    }

    #[test]
    fn clear_to_bol_sequence() {
        assert_eq!(emit(|w| clear_to_bol(w)), "\x1b[1K");
    }

    #[test]
    fn clear_line_sequence() {
        assert_eq!(emit(|w| clear_line(w)), "\x1b[2K");
    }

    #[test]
    fn clear_screen_sequence() {
        assert_eq!(emit(|w| clear_screen(w)), "\x1b[2J");
    }

    // ── Composition ─────────────────────────────────────────────────────

    #[test]
    fn multiple_sequences_compose() {
        let mut buf = Vec::new();
        cursor_to(&mut buf, 4, 6).unwrap();
        fg(&mut buf, Color::RED).unwrap();
        bg(&mut buf, Color::BLACK).unwrap();
        reset(&mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s, "\x1b[4;6H\x1b[31m\x1b[40m\x1b[0m");
    }
}
