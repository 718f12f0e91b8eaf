//! Zero-alloc ANSI colour wrapper plus the per-style palette used by the
//! frame composer.

use std::{borrow::Cow, fmt, str};

use crate::core::error::ColorError;

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 20], len: u8 },
}

impl AnsiCode {
    pub const fn black() -> Self {
        Self::Static("\x1b[30m")
    }
    pub const fn red() -> Self {
        Self::Static("\x1b[31m")
    }
    pub const fn green() -> Self {
        Self::Static("\x1b[32m")
    }
    pub const fn yellow() -> Self {
        Self::Static("\x1b[33m")
    }
    pub const fn blue() -> Self {
        Self::Static("\x1b[34m")
    }
    pub const fn magenta() -> Self {
        Self::Static("\x1b[35m")
    }
    pub const fn cyan() -> Self {
        Self::Static("\x1b[36m")
    }
    pub const fn white() -> Self {
        Self::Static("\x1b[37m")
    }
    #[inline]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        let mut buf = [0u8; 20];
        buf[..7].copy_from_slice(b"\x1b[38;2;");
        let mut len = 7;

        for (i, v) in [r, g, b].into_iter().enumerate() {
            len += write_u8(&mut buf[len..], v);
            if i != 2 {
                buf[len] = b';';
                len += 1;
            }
        }
        buf[len] = b'm';
        len += 1;
        Self::Inline {
            buf,
            len: len as u8,
        }
    }

    /// Parse colour names or `#rrggbb`.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Self::black()),
            "red" => Ok(Self::red()),
            "green" => Ok(Self::green()),
            "yellow" => Ok(Self::yellow()),
            "blue" => Ok(Self::blue()),
            "magenta" => Ok(Self::magenta()),
            "cyan" => Ok(Self::cyan()),
            "white" => Ok(Self::white()),
            other if other.starts_with('#') => Self::from_hex(other),
            other => Err(ColorError::UnknownName(other.to_owned())),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: Option<&str>| {
            s.and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or(ColorError::InvalidHexDigit)
        };
        Ok(Self::rgb(
            byte(h.get(..2))?,
            byte(h.get(2..4))?,
            byte(h.get(4..))?,
        ))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or_default(),
        }
    }
}

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

// --- Palette ---

/// What a piece of output text is, as far as colouring goes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Style {
    /// Level glyphs inside the plot body.
    PlotFill,
    /// Corners, rules and tick marks of the box.
    BoxBorder,
    /// Title, value annotations and axis numbers.
    Label,
}

/// Style-to-colour mapping. A disabled palette passes text through untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    enabled: bool,
    fill: AnsiCode,
    border: AnsiCode,
    label: AnsiCode,
}

impl Palette {
    #[must_use]
    pub const fn new(enabled: bool, fill: AnsiCode) -> Self {
        Self {
            enabled,
            fill,
            border: AnsiCode::green(),
            label: AnsiCode::yellow(),
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self::new(false, AnsiCode::blue())
    }

    #[inline]
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub const fn code(&self, style: Style) -> &AnsiCode {
        match style {
            Style::PlotFill => &self.fill,
            Style::BoxBorder => &self.border,
            Style::Label => &self.label,
        }
    }

    /// The colour hook: `text` wrapped for `style`, or `text` itself when
    /// colour is off.
    #[must_use]
    pub fn paint<'t>(&self, style: Style, text: &'t str) -> Cow<'t, str> {
        if self.enabled && !text.is_empty() {
            Cow::Owned(colorize(self.code(style), text))
        } else {
            Cow::Borrowed(text)
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true, AnsiCode::blue())
    }
}
