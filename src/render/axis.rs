//! Bottom axis: tick positions along the lower border and the sample-index
//! labels printed beneath them.
//!
//! ```text
//! ╰┬─────┬─────┬───────┬╯
//!  0     5     10      21
//! ```

use crate::core::{bounds::decimal_width, constants::TICK_PAD};

/// One tick: a plot column and the sample index shown under it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tick {
    pub column: usize,
    pub label: usize,
}

/// Ticks for a plot `columns` wide showing `samples` samples.
///
/// Ticks sit every `2 * TICK_PAD + width(samples)` columns starting at
/// column 0; the last tick is pinned to the last column and always reads
/// exactly `samples`. At least two ticks are produced for any non-empty plot.
#[must_use]
pub fn ticks(columns: usize, samples: usize) -> Vec<Tick> {
    if columns == 0 {
        return Vec::new();
    }
    let spacing = 2 * TICK_PAD + decimal_width(samples);
    let count = (columns / spacing + 1).max(2);

    let mut out: Vec<Tick> = (0..count - 1)
        .map(|i| Tick {
            column: i * spacing,
            label: i * samples / count,
        })
        .collect();
    out.push(Tick {
        column: columns - 1,
        label: samples,
    });
    out
}

/// A label and the character offset it starts at, measured from the left
/// edge of the box (the corner is offset 0, plot column `c` is `c + 1`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    pub start: usize,
    pub text: String,
}

/// Offset at which a label of `len` characters sits centred under the
/// tick at plot column `column`; even widths lean right.
#[inline]
fn centred(column: usize, len: usize) -> usize {
    (column + 1).saturating_sub((len - 1) / 2)
}

/// Lay the tick labels out on one line.
///
/// The first label starts under its tick, every other label is centred
/// on its tick. Consecutive labels keep at least one blank between them;
/// an interior label that would crowd its neighbours is left out, the
/// first and last never are.
#[must_use]
pub fn place_labels(ticks: &[Tick]) -> Vec<Placement> {
    let Some((last, interior)) = ticks.split_last() else {
        return Vec::new();
    };

    let last_text = last.label.to_string();
    let last_start = centred(last.column, last_text.len());

    let mut out = Vec::with_capacity(ticks.len());
    let mut cursor = 0usize; // first free offset after the previous label

    for (i, tick) in interior.iter().enumerate() {
        let text = tick.label.to_string();
        let len = text.len();
        let start = if i == 0 {
            tick.column + 1
        } else {
            centred(tick.column, len).max(cursor + 1)
        };
        if i > 0 && start + len + 1 > last_start {
            continue;
        }
        cursor = start + len;
        out.push(Placement { start, text });
    }

    let start = if out.is_empty() {
        last_start.max(cursor)
    } else {
        last_start.max(cursor + 1)
    };
    out.push(Placement {
        start,
        text: last_text,
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(placements: &[Placement]) -> String {
        let mut line = String::new();
        for p in placements {
            line.push_str(&" ".repeat(p.start - line.len()));
            line.push_str(&p.text);
        }
        line
    }

    #[test]
    fn ticks_span_the_plot() {
        let t = ticks(21, 21);
        assert_eq!(
            t,
            vec![
                Tick { column: 0, label: 0 },
                Tick { column: 6, label: 5 },
                Tick { column: 12, label: 10 },
                Tick { column: 20, label: 21 },
            ]
        );
    }

    #[test]
    fn narrow_plots_still_get_both_ends() {
        for columns in 1..8 {
            let t = ticks(columns, 5000);
            assert_eq!(t.first().map(|t| t.label), Some(0));
            assert_eq!(t.last().map(|t| t.label), Some(5000));
            assert_eq!(t.last().map(|t| t.column), Some(columns - 1));
        }
        assert!(ticks(0, 10).is_empty());
    }

    #[test]
    fn interior_ticks_stay_left_of_the_last() {
        for columns in 1..200 {
            let t = ticks(columns, 150);
            let cols: Vec<usize> = t.iter().map(|t| t.column).collect();
            let last = cols[cols.len() - 1];
            assert!(cols[..cols.len() - 1].iter().all(|&c| c < last || columns == 1));
        }
    }

    #[test]
    fn labels_line_up_under_ticks() {
        let line = render(&place_labels(&ticks(21, 21)));
        assert_eq!(line, " 0     5     10      21");
    }

    #[test]
    fn wide_labels_are_centred() {
        let t = [
            Tick { column: 0, label: 0 },
            Tick { column: 10, label: 250 },
            Tick { column: 29, label: 1000 },
        ];
        let line = render(&place_labels(&t));
        assert_eq!(line, " 0        250                1000");
        assert_eq!(line.find("250"), Some(10));
    }

    #[test]
    fn labels_never_touch() {
        for columns in 4..120 {
            for samples in [columns, columns * 3, 99_999] {
                let placed = place_labels(&ticks(columns, samples));
                assert_eq!(placed.first().map(|p| p.text.as_str()), Some("0"));
                assert_eq!(placed.last().map(|p| p.text.clone()), Some(samples.to_string()));
                for pair in placed.windows(2) {
                    assert!(pair[0].start + pair[0].text.len() < pair[1].start);
                }
            }
        }
    }
}
