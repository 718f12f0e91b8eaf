//! A collection of constants.

/// Significant digits used for the value annotations on the right border.
///
/// 0.09973557 becomes 0.0997356
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Field width reserved for one value annotation.
///
/// │ .... ├ max: 1024.256
///               ^^^^^^^^^^^^
pub const VALUE_FIELD_WIDTH: usize = 12;

/// Characters a box adds around the plot body.
///
/// │ .... ├ max: 1024.256
/// ^      ^^^^^^^ + value field
pub const ENCLOSURE_WIDTH: usize = VALUE_FIELD_WIDTH + 8;

/// Blank columns on each side of an axis label.
pub const TICK_PAD: usize = 2;

/// Narrower plots are drawn without a box.
pub const MIN_BOXED_COLUMNS: usize = 4;

/// Used when stdout is not a terminal.
pub const FALLBACK_TERMINAL_WIDTH: usize = 80;
