//! mesh-colour - RGBA colour values
//!
//! A small colour value type with hex, CSS and HSV conversions, and the
//! parsers and CLI built on top of it.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;

pub use config::{Config, CONFIG_FILENAME};
pub use error::{ColourError, Result};
pub use types::{Colour, Hsv};
