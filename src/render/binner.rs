//! Mass-conserving resampling of a series onto display columns.
//!
//! Column `i` of `w` covers the real-valued slice
//! `[i * n / w, (i + 1) * n / w)` of the `n` input samples. Samples cut by
//! a slice edge contribute in proportion to their overlap, so every column
//! carries exactly `n / w` samples' worth of mass and the output is the
//! average over that slice.
//!
//! Non-finite samples carry no weight; a column made only of them comes
//! out as NaN and is drawn as a gap.
//!
//! * `w == n`  - identity, every bin equals its sample bit for bit
//! * `w <  n`  - box-filter smoothing
//! * `w >  n`  - rejected, there is no upsampling policy
//!
//! ```rust
//! use sparkline::render::resample;
//!
//! let bins = resample(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
//! assert_eq!(bins, vec![1.5, 3.5]);
//! ```

use crate::core::error::GraphError;

/// Fractional slice of the input covered by one column.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Slice {
    lower: f64,
    upper: f64,
}

impl Slice {
    /// Computed from integer products so the last column ends exactly on `n`.
    #[inline]
    fn of(column: usize, columns: usize, samples: usize) -> Self {
        let w = columns as f64;
        Self {
            lower: (column * samples) as f64 / w,
            upper: ((column + 1) * samples) as f64 / w,
        }
    }

    /// Overlap-weighted mass of the finite samples inside the slice.
    fn mass(self, data: &[f64]) -> Mass {
        let first = self.lower as usize;
        let last = self.upper as usize;
        let mut acc = Mass::default();

        let head = 1.0 - self.lower.fract();
        if head > 0.0 {
            acc.add(data[first], head);
        }
        for &v in &data[first + 1..last.min(data.len())] {
            acc.add(v, 1.0);
        }
        let tail = self.upper.fract();
        if last < data.len() && tail > 0.0 {
            acc.add(data[last], tail);
        }
        acc
    }
}

/// Running weighted sum.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Mass {
    sum: f64,
    weight: f64,
}

impl Mass {
    #[inline]
    fn add(&mut self, v: f64, weight: f64) {
        if v.is_finite() {
            self.sum += weight * v;
            self.weight += weight;
        }
    }

    /// Weighted mean, NaN when nothing finite was added.
    #[inline]
    fn mean(self) -> f64 {
        if self.weight > 0.0 {
            self.sum / self.weight
        } else {
            f64::NAN
        }
    }
}

/// Resample `data` onto `columns` bins.
///
/// `columns == 0` is a legal degenerate request and yields no bins.
pub fn resample(data: &[f64], columns: usize) -> Result<Vec<f64>, GraphError> {
    let samples = data.len();
    if samples == 0 {
        return Err(GraphError::EmptyData);
    }
    if columns > samples {
        return Err(GraphError::TooManyColumns { columns, samples });
    }

    Ok((0..columns)
        .map(|i| Slice::of(i, columns, samples).mass(data).mean())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_exact() {
        let data = [0.1, -7.25, 3.0e9, 1.0 / 3.0, 0.0];
        assert_eq!(resample(&data, data.len()).unwrap(), data.to_vec());
    }

    #[test]
    fn identity_ignores_neighbouring_infinities() {
        let data = [1.0, f64::INFINITY, 2.0];
        let bins = resample(&data, 3).unwrap();
        assert_eq!(bins[0], 1.0);
        assert!(bins[1].is_nan());
        assert_eq!(bins[2], 2.0);
    }

    #[test]
    fn nan_carries_no_weight() {
        let bins = resample(&[3.0, f64::NAN, 3.0, 0.0], 2).unwrap();
        assert_eq!(bins, vec![3.0, 1.5]);

        let bins = resample(&[1.0, f64::NAN, f64::NAN, f64::NAN, 5.0, 6.0], 3).unwrap();
        assert_eq!(bins[0], 1.0);
        assert!(bins[1].is_nan());
        assert_eq!(bins[2], 5.5);
    }

    #[test]
    fn halves_average_pairs() {
        assert_eq!(resample(&[1.0, 2.0, 3.0, 4.0], 2).unwrap(), vec![1.5, 3.5]);
    }

    #[test]
    fn fractional_edges_split_samples() {
        // three samples over two columns: [0, 1.5) and [1.5, 3)
        let bins = resample(&[3.0, 6.0, 9.0], 2).unwrap();
        assert!((bins[0] - (3.0 + 0.5 * 6.0) / 1.5).abs() < 1e-12);
        assert!((bins[1] - (0.5 * 6.0 + 9.0) / 1.5).abs() < 1e-12);
    }

    #[test]
    fn total_mass_is_conserved() {
        let data: Vec<f64> = (0..97).map(|i| f64::from(i).sin() * 10.0).collect();
        for columns in [1, 7, 13, 50, 96] {
            let bins = resample(&data, columns).unwrap();
            let per_bin = data.len() as f64 / columns as f64;
            let restored: f64 = bins.iter().map(|b| b * per_bin).sum();
            let original: f64 = data.iter().sum();
            assert!(
                (restored - original).abs() < 1e-9,
                "columns {columns}: {restored} vs {original}"
            );
        }
    }

    #[test]
    fn single_column_is_the_mean() {
        let bins = resample(&[2.0, 4.0, 9.0], 1).unwrap();
        assert_eq!(bins, vec![5.0]);
    }

    #[test]
    fn zero_columns_is_empty() {
        assert!(resample(&[1.0, 2.0], 0).unwrap().is_empty());
    }

    #[test]
    fn upsampling_fails_fast() {
        assert!(matches!(
            resample(&[1.0, 2.0], 3),
            Err(GraphError::TooManyColumns {
                columns: 3,
                samples: 2
            })
        ));
    }

    #[test]
    fn no_data_fails_fast() {
        assert!(matches!(resample(&[], 0), Err(GraphError::EmptyData)));
    }
}
