// SPDX-License-Identifier: MIT
//
// The eight ANSI base colors plus the "default" sentinel.
//
// A color is just its SGR offset: foreground codes are `30 + n`, background
// codes are `40 + n`. Values 0–7 name the base colors and 9 selects the
// terminal's default. We keep the raw integer rather than an enum so that
// out-of-range values survive untouched all the way to the output stream.
// Validating them is the terminal's business.

use std::fmt;

/// An ANSI base color, identified by its SGR offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Color(pub i32);

impl Color {
    pub const BLACK: Self = Self(0);
    pub const RED: Self = Self(1);
    pub const GREEN: Self = Self(2);
    pub const YELLOW: Self = Self(3);
    pub const BLUE: Self = Self(4);
    pub const MAGENTA: Self = Self(5);
    pub const CYAN: Self = Self(6);
    pub const WHITE: Self = Self(7);
    /// The terminal's own default color (SGR 39 / 49).
    pub const DEFAULT: Self = Self(9);

    /// Every named color, in SGR order.
    pub const ALL: [Self; 9] = [
        Self::BLACK,
        Self::RED,
        Self::GREEN,
        Self::YELLOW,
        Self::BLUE,
        Self::MAGENTA,
        Self::CYAN,
        Self::WHITE,
        Self::DEFAULT,
    ];

    /// The raw SGR offset.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// SGR parameter selecting this color as foreground (`30 + n`).
    ///
    /// Wraps instead of overflowing for absurd inputs.
    #[inline]
    #[must_use]
    pub const fn foreground_code(self) -> i32 {
        self.0.wrapping_add(30)
    }

    /// SGR parameter selecting this color as background (`40 + n`).
    #[inline]
    #[must_use]
    pub const fn background_code(self) -> i32 {
        self.0.wrapping_add(40)
    }

    /// Lowercase name for the nine named colors, `None` for anything else.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("black"),
            1 => Some("red"),
            2 => Some("green"),
            3 => Some("yellow"),
            4 => Some("blue"),
            5 => Some("magenta"),
            6 => Some("cyan"),
            7 => Some("white"),
            9 => Some("default"),
            _ => None,
        }
    }
}

impl From<i32> for Color {
    #[inline]
    fn from(n: i32) -> Self {
        Self(n)
    }
}

impl From<Color> for i32 {
    #[inline]
    fn from(c: Color) -> Self {
        c.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
