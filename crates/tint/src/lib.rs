// SPDX-License-Identifier: MIT
//
// tint: terminal formatting facade.
//
// Eight-color foreground/background selection, cursor save/restore and
// movement, line and screen clearing, all as plain ANSI/VT100 escape
// sequences. When stdout is not a terminal, the same calls do nothing, so
// output redirected to a file or pipe stays clean text.
//
// The capability is probed once. Hold a `Formatter` built by
// `Formatter::detect()` (or inject one over any writer in tests), or use
// the free functions in `global`, which forward to a process-wide binding.

pub mod ansi;
pub mod color;
pub mod formatter;
pub mod global;
pub mod terminal;

pub use color::Color;
pub use formatter::{EscapeFormatter, Format, Formatter, NullFormatter};
pub use global::{
    clear_line, clear_screen_and_move_origin, clear_to_begin_of_line, clear_to_end_of_line,
    cursor_down, cursor_restore, cursor_save, cursor_up, move_cursor, print, reset_color,
    set_background, set_fore_and_background, set_foreground,
};
pub use terminal::Capability;
