//! Aggregates the "business logic" layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod glyphs;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, Palette, Style, colorize};
pub use config::{RenderConfig, RenderConfigBuilder};
pub use constants::{ENCLOSURE_WIDTH, MIN_BOXED_COLUMNS, SIGNIFICANT_DIGITS, TICK_PAD};
pub use data::read_values;
pub use error::{ColorError, ConfigError, GraphError};
pub use glyphs::{BoxChars, GlyphSet};
