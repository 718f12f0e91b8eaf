//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;
pub mod showcase;

pub use crate::core::{
    bounds::{terminal_width, value_label, value_range},
    color::{AnsiCode, Palette, Style, colorize},
    config::{RenderConfig, RenderConfigBuilder},
    data::read_values,
    error::{ColorError, ConfigError, GraphError},
    glyphs::{BoxChars, GlyphSet},
};

pub use crate::render::{Quantizer, Renderer, Tick, resample, ticks};

/// Render `data` with Unicode glyphs, sized to the current terminal.
///
/// ```rust
/// use sparkline::{RenderConfig, sparkline};
///
/// let cfg = RenderConfig::builder().color(false).build()?;
/// assert_eq!(sparkline(&[1.0, 2.0, 3.0], &cfg)?.chars().count(), 3);
/// # Ok::<(), sparkline::GraphError>(())
/// ```
pub fn sparkline(data: &[f64], cfg: &RenderConfig) -> Result<String, GraphError> {
    Renderer::unicode().render(data, cfg)
}
