//! Run-time configuration object + fluent builder.

use crate::core::{bounds::value_range, color::AnsiCode, error::ConfigError};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Plot height in lines (at least one).
    pub rows: usize,
    /// Plot width in characters; `0` means one column per sample.
    pub columns: usize,
    pub draw_box: bool,
    pub color: bool,
    /// Colour of the plot glyphs when `color` is on.
    pub fill: AnsiCode,
    pub title: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RenderConfig {
    #[inline]
    #[must_use]
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }

    /// Reject values the renderer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if let (Some(low), Some(high)) = (self.min, self.max) {
            if low > high || low.is_nan() || high.is_nan() {
                return Err(ConfigError::InvalidRange { low, high });
            }
        }
        Ok(())
    }

    /// Effective `(low, high)` for `data`: each bound left unset falls back
    /// to the data's own extreme.
    pub fn resolve_range(&self, data: &[f64]) -> Result<(f64, f64), ConfigError> {
        let (data_low, data_high) = value_range(data);
        let low = self.min.unwrap_or(data_low);
        let high = self.max.unwrap_or(data_high);
        if low > high || low.is_nan() || high.is_nan() {
            return Err(ConfigError::InvalidRange { low, high });
        }
        Ok((low, high))
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            rows: 1,
            columns: 0,
            draw_box: false,
            color: true,
            fill: AnsiCode::blue(),
            title: String::new(),
            min: None,
            max: None,
        }
    }
}

/// Fluent builder; validation happens once in `build`.
#[derive(Debug, Default)]
pub struct RenderConfigBuilder {
    inner: RenderConfig,
}

impl RenderConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn rows(mut self, n: usize) -> Self {
        self.inner.rows = n;
        self
    }
    #[inline]
    #[must_use]
    pub fn columns(mut self, n: usize) -> Self {
        self.inner.columns = n;
        self
    }
    #[inline]
    #[must_use]
    pub fn boxed(mut self, on: bool) -> Self {
        self.inner.draw_box = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn color(mut self, on: bool) -> Self {
        self.inner.color = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn fill<C: Into<AnsiCode>>(mut self, c: C) -> Self {
        self.inner.fill = c.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.inner.title = t.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn min(mut self, v: f64) -> Self {
        self.inner.min = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn max(mut self, v: f64) -> Self {
        self.inner.max = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn min_opt(mut self, v: Option<f64>) -> Self {
        self.inner.min = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn max_opt(mut self, v: Option<f64>) -> Self {
        self.inner.max = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn range(mut self, r: std::ops::RangeInclusive<f64>) -> Self {
        self.inner.min = Some(*r.start());
        self.inner.max = Some(*r.end());
        self
    }

    pub fn build(self) -> Result<RenderConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
