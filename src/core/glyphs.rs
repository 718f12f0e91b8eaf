//! Constant glyph tables: fill levels for the plot body and the
//! box-drawing set for the frame.

/// Box outline characters.
///
/// ```text
/// ╭────╮
/// │test├
/// ╰┬──┬╯
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoxChars {
    pub nw: char,
    pub ne: char,
    pub sw: char,
    pub se: char,
    pub horizontal: char,
    pub horizontal_tick: char,
    pub vertical: char,
    pub vertical_tick: char,
}

impl BoxChars {
    /// Every character this set can emit.
    #[must_use]
    pub const fn all(&self) -> [char; 8] {
        [
            self.nw,
            self.ne,
            self.sw,
            self.se,
            self.horizontal,
            self.horizontal_tick,
            self.vertical,
            self.vertical_tick,
        ]
    }
}

/// Fill levels (lowest first) plus the matching box set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GlyphSet {
    levels: &'static [char],
    frame: BoxChars,
}

impl GlyphSet {
    /// Block elements U+2581..U+2588 with rounded box drawing.
    pub const UNICODE: Self = Self::new(
        &['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'],
        BoxChars {
            nw: '╭',
            ne: '╮',
            sw: '╰',
            se: '╯',
            horizontal: '─',
            horizontal_tick: '┬',
            vertical: '│',
            vertical_tick: '├',
        },
    );

    /// Plain ASCII for terminals without Unicode fonts.
    pub const ASCII: Self = Self::new(
        &['.', 'o', 'O'],
        BoxChars {
            nw: '+',
            ne: '+',
            sw: '+',
            se: '+',
            horizontal: '-',
            horizontal_tick: ',',
            vertical: '|',
            vertical_tick: '|',
        },
    );

    /// # Panics
    /// Panics (at compile time for constants) if `levels` is empty.
    #[must_use]
    pub const fn new(levels: &'static [char], frame: BoxChars) -> Self {
        assert!(!levels.is_empty(), "a glyph set needs at least one level");
        Self { levels, frame }
    }

    #[inline]
    #[must_use]
    pub const fn levels_per_row(&self) -> usize {
        self.levels.len()
    }

    /// Glyph for partial fill `index` (0 = lowest).
    #[inline]
    #[must_use]
    pub fn level(&self, index: usize) -> char {
        self.levels[index.min(self.levels.len() - 1)]
    }

    /// The completely filled cell.
    #[inline]
    #[must_use]
    pub fn full(&self) -> char {
        self.levels[self.levels.len() - 1]
    }

    #[inline]
    #[must_use]
    pub const fn frame(&self) -> &BoxChars {
        &self.frame
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::UNICODE
    }
}
