//! String decoders for colour values.
//!
//! - `hex` - `#RRGGBB` and `#RGB`
//! - `css` - `rgba(R, G, B, A)`
//!
//! Both decoders report malformed input as `None`; `Colour::from_str` wraps
//! them with a diagnostic error.

pub mod css;
pub mod hex;

pub use css::{format_css, parse_css};
pub use hex::{format_hex, parse_hex};
