//! Core domain types.
//!
//! - `Colour` - RGBA colour values with hex/CSS conversions
//! - `Hsv` - hue/saturation/value derived from a `Colour`

mod colour;
mod hsv;

pub use colour::Colour;
pub use hsv::Hsv;
