//! Vertical quantization of bin values into stacked glyph rows.
//!
//! A plot `rows` lines high with `k` glyphs per line can show
//! `L = rows * k - 1` distinct levels above the lowest one. Row `r`
//! (counted from the bottom) owns levels `r*k ..= r*k + k - 1`; a column
//! whose level is below that band leaves the cell blank, one above it
//! fills the cell completely.

use crate::core::glyphs::GlyphSet;

/// What one (column, row) cell shows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {
    Blank,
    /// Index into the glyph levels.
    Partial(usize),
    Full,
}

/// Linear map from `[low, high]` onto `0..=L`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantizer {
    low: f64,
    high: f64,
    rows: usize,
    levels_per_row: usize,
}

impl Quantizer {
    /// `rows` and `levels_per_row` are raised to at least one.
    #[must_use]
    pub fn new(low: f64, high: f64, rows: usize, levels_per_row: usize) -> Self {
        Self {
            low,
            high,
            rows: rows.max(1),
            levels_per_row: levels_per_row.max(1),
        }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn range(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    /// Highest level, `L`.
    #[inline]
    #[must_use]
    pub const fn top_level(&self) -> usize {
        self.rows * self.levels_per_row - 1
    }

    /// A flat range has no span to divide by.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.high <= self.low
    }

    /// Level of `v`, clamped into `0..=L`. Every value maps to the top
    /// level when the range is degenerate; NaN maps to zero.
    #[must_use]
    pub fn level(&self, v: f64) -> usize {
        let top = self.top_level();
        if self.is_degenerate() {
            return top;
        }
        let clamped = v.max(self.low).min(self.high);
        let fraction = (clamped - self.low) / (self.high - self.low);
        // float -> usize saturates, NaN becomes 0
        ((fraction * top as f64).floor() as usize).min(top)
    }

    /// Which glyph `row` shows for a column at `level`.
    #[must_use]
    pub const fn cell(&self, level: usize, row: usize) -> Cell {
        let first = row * self.levels_per_row;
        let last = first + self.levels_per_row - 1;
        if level < first {
            Cell::Blank
        } else if level > last {
            Cell::Full
        } else {
            Cell::Partial(level - first)
        }
    }

    /// The value at the vertical middle of `row`, mapped back through the
    /// inverse of [`Quantizer::level`].
    #[must_use]
    pub fn row_value(&self, row: usize) -> f64 {
        let top = self.top_level();
        if top == 0 || self.is_degenerate() {
            return self.low;
        }
        let mid = row * self.levels_per_row + self.levels_per_row / 2;
        self.low + (mid as f64 / top as f64) * (self.high - self.low)
    }

    /// One plain string per output line, top line first, each exactly
    /// `bins.len()` characters wide. NaN bins leave a blank column.
    #[must_use]
    pub fn rasterize(&self, bins: &[f64], glyphs: &GlyphSet) -> Vec<String> {
        let levels: Vec<Option<usize>> = bins
            .iter()
            .map(|&v| (!v.is_nan()).then(|| self.level(v)))
            .collect();

        (0..self.rows)
            .rev()
            .map(|row| {
                levels
                    .iter()
                    .map(|&level| match level.map(|l| self.cell(l, row)) {
                        None | Some(Cell::Blank) => ' ',
                        Some(Cell::Partial(i)) => glyphs.level(i),
                        Some(Cell::Full) => glyphs.full(),
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_span_the_range() {
        let q = Quantizer::new(0.0, 1.0, 3, 8);
        assert_eq!(q.top_level(), 23);
        assert_eq!(q.level(0.0), 0);
        assert_eq!(q.level(1.0), 23);
        assert_eq!(q.level(0.5), 11);
    }

    #[test]
    fn out_of_range_values_clamp() {
        let q = Quantizer::new(-1.0, 1.0, 2, 8);
        assert_eq!(q.level(-1e300), 0);
        assert_eq!(q.level(f64::NEG_INFINITY), 0);
        assert_eq!(q.level(42.0), q.top_level());
        assert_eq!(q.level(f64::INFINITY), q.top_level());
    }

    #[test]
    fn degenerate_range_is_top_level() {
        let q = Quantizer::new(5.0, 5.0, 4, 8);
        for v in [-3.0, 5.0, 9.0] {
            assert_eq!(q.level(v), q.top_level());
        }
        assert_eq!(q.row_value(2), 5.0);
    }

    #[test]
    fn cells_split_into_blank_partial_full() {
        let q = Quantizer::new(0.0, 1.0, 3, 8);
        // level 12 sits in row 1 (levels 8..=15)
        assert_eq!(q.cell(12, 0), Cell::Full);
        assert_eq!(q.cell(12, 1), Cell::Partial(4));
        assert_eq!(q.cell(12, 2), Cell::Blank);
    }

    #[test]
    fn rasterize_stacks_top_first() {
        let q = Quantizer::new(0.0, 1.0, 2, 8);
        let rows = q.rasterize(&[0.0, 1.0, 0.5], &GlyphSet::UNICODE);
        assert_eq!(rows, vec![" █ ".to_owned(), "▁██".to_owned()]);
    }

    #[test]
    fn nan_bins_are_gaps_in_every_row() {
        let q = Quantizer::new(0.0, 1.0, 2, 8);
        let rows = q.rasterize(&[1.0, f64::NAN, 0.0], &GlyphSet::UNICODE);
        assert_eq!(rows, vec!["█  ".to_owned(), "█ ▁".to_owned()]);
    }

    #[test]
    fn more_rows_never_lose_patterns() {
        let ramp: Vec<f64> = (0..64).map(f64::from).collect();
        let mut last = 0;
        for rows in 1..6 {
            let q = Quantizer::new(0.0, 63.0, rows, 8);
            let grid = q.rasterize(&ramp, &GlyphSet::UNICODE);
            let mut patterns: Vec<String> = (0..ramp.len())
                .map(|c| grid.iter().map(|r| r.chars().nth(c).unwrap_or(' ')).collect())
                .collect();
            patterns.sort();
            patterns.dedup();
            assert!(patterns.len() >= last, "rows {rows}");
            last = patterns.len();
        }
    }

    #[test]
    fn interior_row_values_are_midpoints() {
        let q = Quantizer::new(0.0, 23.0, 3, 8);
        assert!((q.row_value(1) - 12.0).abs() < 1e-12);
    }
}
