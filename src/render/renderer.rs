//! Top-level orchestration: validate, size, bin, quantize, frame.

use crate::{
    core::{
        bounds::{plot_columns, terminal_width},
        color::Palette,
        config::RenderConfig,
        constants::MIN_BOXED_COLUMNS,
        error::GraphError,
        glyphs::GlyphSet,
    },
    render::{binner::resample, frame::Frame, quantize::Quantizer},
};

/// Stateless sparkline renderer bound to one glyph table.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    glyphs: &'static GlyphSet,
}

impl Renderer {
    #[inline]
    #[must_use]
    pub const fn unicode() -> Self {
        Self::with_glyphs(&GlyphSet::UNICODE)
    }
    #[inline]
    #[must_use]
    pub const fn ascii() -> Self {
        Self::with_glyphs(&GlyphSet::ASCII)
    }
    #[inline]
    #[must_use]
    pub const fn with_glyphs(glyphs: &'static GlyphSet) -> Self {
        Self { glyphs }
    }

    /// Render `data`, fitting it to the width of the current terminal.
    pub fn render(&self, data: &[f64], cfg: &RenderConfig) -> Result<String, GraphError> {
        self.render_within(data, cfg, terminal_width())
    }

    /// Render `data` for a terminal `terminal` columns wide.
    pub fn render_within(
        &self,
        data: &[f64],
        cfg: &RenderConfig,
        terminal: usize,
    ) -> Result<String, GraphError> {
        cfg.validate()?;
        if data.is_empty() {
            return Err(GraphError::EmptyData);
        }

        let skipped = data.iter().filter(|v| !v.is_finite()).count();
        if skipped > 0 {
            log::warn!(
                "ignoring {skipped} non-finite of {} samples; columns holding only those are left blank",
                data.len()
            );
        }

        let (low, high) = cfg.resolve_range(data)?;
        let columns = plot_columns(cfg.columns, data.len(), terminal, cfg.draw_box);
        let boxed = cfg.draw_box && columns >= MIN_BOXED_COLUMNS;
        if cfg.draw_box && !boxed {
            log::debug!("{columns} columns leave no room for a box, drawing without one");
        }
        log::debug!(
            "plotting {} samples on {columns}x{} cells, range [{low}, {high}]",
            data.len(),
            cfg.rows
        );

        let bins = resample(data, columns)?;
        let quantizer = Quantizer::new(low, high, cfg.rows, self.glyphs.levels_per_row());
        let rows = quantizer.rasterize(&bins, self.glyphs);

        let palette = Palette::new(cfg.color, cfg.fill);
        let frame = Frame {
            glyphs: self.glyphs,
            palette: &palette,
            quantizer: &quantizer,
            columns,
            samples: data.len(),
            title: &cfg.title,
        };
        Ok(frame.compose(&rows, boxed))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::unicode()
    }
}
