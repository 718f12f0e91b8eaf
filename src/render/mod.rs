pub mod axis;
pub mod binner;
pub mod frame;
pub mod quantize;
pub mod renderer;

pub use axis::{Placement, Tick, place_labels, ticks};
pub use binner::resample;
pub use frame::Frame;
pub use quantize::{Cell, Quantizer};
pub use renderer::Renderer;
