//! Frame composer: wraps the rasterized rows in a box with a centred
//! title, value annotations on the right border and a numbered bottom axis.
//!
//! ```text
//! ╭──────Gaussian───────╮
//! │        ▁▄▅▄▁        ├ max: 0.15
//! │      ▁▅█████▅▁      ├      0.0782609
//! │▁▁▁▂▃▆█████████▆▃▂▁▁▁├ min: 0
//! ╰┬─────┬─────┬───────┬╯
//!  0     5     10      21
//! ```
//!
//! Only glyphs and box characters go through the `PlotFill` / `BoxBorder`
//! styles; the title, annotations and axis numbers use `Label`.

use std::iter;

use crate::{
    core::{
        bounds::value_label,
        color::{Palette, Style},
        constants::VALUE_FIELD_WIDTH,
        glyphs::GlyphSet,
    },
    render::{
        axis::{place_labels, ticks},
        quantize::Quantizer,
    },
};

// --- Helpers ---

#[inline]
fn run(c: char, n: usize) -> impl Iterator<Item = char> {
    iter::repeat_n(c, n)
}

/// Everything the composer needs besides the rows themselves.
pub struct Frame<'a> {
    pub glyphs: &'a GlyphSet,
    pub palette: &'a Palette,
    pub quantizer: &'a Quantizer,
    pub columns: usize,
    pub samples: usize,
    pub title: &'a str,
}

impl Frame<'_> {
    /// Assemble the final block from plain rows (top row first). The
    /// result has one line per output row and no trailing newline.
    #[must_use]
    pub fn compose(&self, rows: &[String], boxed: bool) -> String {
        if boxed {
            self.boxed(rows)
        } else {
            self.bare(rows)
        }
    }

    fn bare(&self, rows: &[String]) -> String {
        let mut out = String::with_capacity(rows.len() * (self.columns * 3 + 1));
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            self.push_glyphs(&mut out, row);
        }
        out
    }

    fn boxed(&self, rows: &[String]) -> String {
        let b = self.glyphs.frame();
        let mut out = String::with_capacity((rows.len() + 3) * (self.columns * 3 + 32));

        self.push_top(&mut out);

        let top_row = rows.len().saturating_sub(1);
        for (k, row) in rows.iter().enumerate() {
            out.push('\n');
            out.push_str(&self.border(iter::once(b.vertical)));
            self.push_glyphs(&mut out, row);
            out.push_str(&self.border(iter::once(b.vertical_tick)));
            out.push_str(&self.palette.paint(Style::Label, &self.annotation(top_row - k)));
        }

        out.push('\n');
        self.push_bottom(&mut out);
        out.push('\n');
        self.push_axis_labels(&mut out);
        out
    }

    #[inline]
    fn border(&self, chars: impl Iterator<Item = char>) -> String {
        let s: String = chars.collect();
        self.palette.paint(Style::BoxBorder, &s).into_owned()
    }

    /// Top border, with the title centred in it when it fits; a longer
    /// title gets its own line above a plain border.
    fn push_top(&self, out: &mut String) {
        let b = self.glyphs.frame();
        let len = self.title.chars().count();

        if len == 0 || len > self.columns {
            if len > 0 {
                out.push_str(&self.palette.paint(Style::Label, self.title));
                out.push('\n');
            }
            let rule = iter::once(b.nw)
                .chain(run(b.horizontal, self.columns))
                .chain(iter::once(b.ne));
            out.push_str(&self.border(rule));
            return;
        }

        let filler = self.columns - len;
        let left = filler / 2;
        let right = filler - left;

        out.push_str(&self.border(iter::once(b.nw).chain(run(b.horizontal, left))));
        out.push_str(&self.palette.paint(Style::Label, self.title));
        out.push_str(&self.border(run(b.horizontal, right).chain(iter::once(b.ne))));
    }

    /// Plot glyphs, coloured in runs so blanks stay uncoloured.
    fn push_glyphs(&self, out: &mut String, row: &str) {
        if !self.palette.enabled() {
            out.push_str(row);
            return;
        }
        let mut rest = row;
        while !rest.is_empty() {
            let ink = rest.trim_start_matches(' ');
            out.push_str(&rest[..rest.len() - ink.len()]);
            let end = ink.find(' ').unwrap_or(ink.len());
            out.push_str(&self.palette.paint(Style::PlotFill, &ink[..end]));
            rest = &ink[end..];
        }
    }

    /// Text to the right of row `row` (0 = bottom).
    fn annotation(&self, row: usize) -> String {
        let (low, high) = self.quantizer.range();
        let top_row = self.quantizer.rows() - 1;

        if top_row == 0 {
            format!(
                " min: {:<width$}, max: {}",
                value_label(low),
                value_label(high),
                width = VALUE_FIELD_WIDTH
            )
        } else if row == top_row {
            format!(" max: {}", value_label(high))
        } else if row == 0 {
            format!(" min: {}", value_label(low))
        } else {
            format!("      {}", value_label(self.quantizer.row_value(row)))
        }
    }

    /// Bottom border with a tick mark at every labelled column.
    fn push_bottom(&self, out: &mut String) {
        let b = self.glyphs.frame();
        let marks = ticks(self.columns, self.samples);
        let mut next = marks.iter().map(|t| t.column).peekable();

        let rule: String = iter::once(b.sw)
            .chain((0..self.columns).map(|col| {
                if next.next_if_eq(&col).is_some() {
                    // pinned last tick may share column 0 on a one-column plot
                    while next.next_if_eq(&col).is_some() {}
                    b.horizontal_tick
                } else {
                    b.horizontal
                }
            }))
            .chain(iter::once(b.se))
            .collect();
        out.push_str(&self.palette.paint(Style::BoxBorder, &rule));
    }

    fn push_axis_labels(&self, out: &mut String) {
        let mut width = 0usize;
        for p in place_labels(&ticks(self.columns, self.samples)) {
            out.extend(run(' ', p.start.saturating_sub(width)));
            out.push_str(&self.palette.paint(Style::Label, &p.text));
            width = width.max(p.start) + p.text.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::AnsiCode;

    fn frame<'a>(q: &'a Quantizer, palette: &'a Palette, columns: usize, title: &'a str) -> Frame<'a> {
        Frame {
            glyphs: &GlyphSet::UNICODE,
            palette,
            quantizer: q,
            columns,
            samples: columns,
            title,
        }
    }

    #[test]
    fn bare_rows_join_without_trailing_newline() {
        let q = Quantizer::new(0.0, 1.0, 2, 8);
        let p = Palette::plain();
        let rows = vec![" █".to_owned(), "▁█".to_owned()];
        assert_eq!(frame(&q, &p, 2, "ignored").compose(&rows, false), " █\n▁█");
    }

    #[test]
    fn title_is_centred_with_extra_fill_on_the_right() {
        let q = Quantizer::new(0.0, 1.0, 1, 8);
        let p = Palette::plain();
        let out = frame(&q, &p, 7, "abcd").compose(&["▁▁▁▁▁▁▁".to_owned()], true);
        assert_eq!(out.lines().next(), Some("╭─abcd──╮"));
    }

    #[test]
    fn title_filling_the_border_has_no_rule_around_it() {
        let q = Quantizer::new(0.0, 1.0, 1, 8);
        let p = Palette::plain();
        let out = frame(&q, &p, 4, "abcd").compose(&["▁▂▃▄".to_owned()], true);
        assert_eq!(out.lines().next(), Some("╭abcd╮"));
    }

    #[test]
    fn long_title_moves_above_the_box() {
        let q = Quantizer::new(0.0, 1.0, 1, 8);
        let p = Palette::plain();
        let out = frame(&q, &p, 4, "too long").compose(&["▁▂▃▄".to_owned()], true);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "too long");
        assert_eq!(lines[1], "╭────╮");
    }

    #[test]
    fn single_row_carries_min_and_max() {
        let q = Quantizer::new(-1.0, 2.5, 1, 8);
        let p = Palette::plain();
        let out = frame(&q, &p, 4, "").compose(&["▁▂▃▄".to_owned()], true);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "╭────╮");
        assert_eq!(lines[1], "│▁▂▃▄├ min: -1          , max: 2.5");
        assert_eq!(lines[2], "╰┬──┬╯");
        assert_eq!(lines[3], " 0  4");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn rows_carry_max_midpoints_and_min() {
        let q = Quantizer::new(0.0, 23.0, 3, 8);
        let p = Palette::plain();
        let rows = vec!["    ".to_owned(); 3];
        let out = frame(&q, &p, 4, "").compose(&rows, true);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].ends_with("├ max: 23"));
        assert!(lines[2].ends_with("├      12"));
        assert!(lines[3].ends_with("├ min: 0"));
    }

    #[test]
    fn colour_wraps_glyph_runs_only() {
        let q = Quantizer::new(0.0, 1.0, 1, 8);
        let p = Palette::new(true, AnsiCode::red());
        let f = frame(&q, &p, 5, "");
        let mut out = String::new();
        f.push_glyphs(&mut out, " ▁▂ █");
        assert_eq!(out, " \x1b[31m▁▂\x1b[0m \x1b[31m█\x1b[0m");
    }

    #[test]
    fn coloured_axis_keeps_label_positions() {
        let q = Quantizer::new(0.0, 1.0, 1, 8);
        let plain = Palette::plain();
        let coloured = Palette::default();
        let mut a = String::new();
        let mut b = String::new();
        frame(&q, &plain, 21, "").push_axis_labels(&mut a);
        frame(&q, &coloured, 21, "").push_axis_labels(&mut b);
        let stripped = b.replace("\x1b[33m", "").replace("\x1b[0m", "");
        assert_eq!(a, stripped);
    }
}
