//! Colour type and parsing.

use std::cell::OnceCell;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ColourError, Result};
use crate::parser::{format_css, format_hex, parse_css, parse_hex};

use super::Hsv;

/// An RGBA colour value.
///
/// Channels are 8-bit; alpha is a fraction in `0.0..=1.0` and is clamped on
/// the way in. The CSS form is computed on first use and kept until one of
/// the setters runs.
#[derive(Debug, Clone)]
pub struct Colour {
    red: u8,
    green: u8,
    blue: u8,
    alpha: f32,

    /// Cached `rgba(...)` string. Empty means stale.
    css: OnceCell<String>,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub fn new(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: clamp_alpha(alpha),
            css: OnceCell::new(),
        }
    }

    /// Create a new opaque colour from RGB components.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Opaque grey with all three channels set to `level`.
    pub fn grey(level: u8) -> Self {
        Self::grey_alpha(level, 1.0)
    }

    /// Grey with all three channels set to `level` and the given alpha.
    pub fn grey_alpha(level: u8, alpha: f32) -> Self {
        Self::new(level, level, level, alpha)
    }

    /// Black.
    pub fn black() -> Self {
        Self::grey(0)
    }

    /// White.
    pub fn white() -> Self {
        Self::grey(255)
    }

    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0.0)
    }

    /// Random colour from the thread-local generator.
    pub fn create_random(alpha: f32) -> Self {
        Self::create_random_with(&mut rand::thread_rng(), alpha)
    }

    /// Random colour with each channel drawn uniformly from `0..=255`.
    pub fn create_random_with<R: Rng + ?Sized>(rng: &mut R, alpha: f32) -> Self {
        Self::new(
            rng.gen_range(0..=255),
            rng.gen_range(0..=255),
            rng.gen_range(0..=255),
            alpha,
        )
    }

    /// Parse a hex colour string.
    ///
    /// Supports `#RGB` (expanded to 6 digits) and `#RRGGBB`, with or without
    /// the `#`. Alpha is always 1.0.
    pub fn from_hex(value: &str) -> Option<Self> {
        let [r, g, b] = parse_hex(value)?;
        Some(Self::rgb(r, g, b))
    }

    /// Parse a CSS `rgba(R, G, B, A)` string. A `%` after a channel is
    /// ignored, not scaled.
    pub fn from_css(css: &str) -> Option<Self> {
        let ([r, g, b], a) = parse_css(css)?;
        Some(Self::new(r, g, b, a))
    }

    /// Build a colour from HSV, rounding each channel.
    pub fn from_hsv(hsv: Hsv, alpha: f32) -> Self {
        let [r, g, b] = hsv.to_rgb();
        Self::new(r, g, b, alpha)
    }

    /// Red channel.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Set the red channel.
    pub fn set_red(&mut self, red: u8) {
        self.red = red;
        self.invalidate();
    }

    /// Green channel.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Set the green channel.
    pub fn set_green(&mut self, green: u8) {
        self.green = green;
        self.invalidate();
    }

    /// Blue channel.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Set the blue channel.
    pub fn set_blue(&mut self, blue: u8) {
        self.blue = blue;
        self.invalidate();
    }

    /// Alpha, between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Set alpha, clamped to `0.0..=1.0` (NaN becomes 0.0).
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = clamp_alpha(alpha);
        self.invalidate();
    }

    /// Set all three channels to `level`, leaving alpha alone.
    pub fn set_to_grey(&mut self, level: u8) {
        self.red = level;
        self.green = level;
        self.blue = level;
        self.invalidate();
    }

    /// The `rgba(R, G, B, A)` form.
    pub fn to_css(&self) -> &str {
        self.css.get_or_init(|| {
            log::trace!("formatting css for {}", self.to_hex());
            format_css(self.red, self.green, self.blue, self.alpha)
        })
    }

    /// The `#rrggbb` form. Alpha is dropped.
    pub fn to_hex(&self) -> String {
        format_hex(self.red, self.green, self.blue)
    }

    /// Hue, saturation and value, each in 0.0-1.0.
    pub fn to_hsv(&self) -> Hsv {
        Hsv::from_rgb(self.red, self.green, self.blue)
    }

    /// Channels plus alpha scaled to 0-255.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            self.red,
            self.green,
            self.blue,
            (self.alpha * 255.0).round() as u8,
        ]
    }

    /// Whether both colours have the same channels, and the same alpha when
    /// `compare_alpha` is set. Alpha is compared exactly.
    pub fn is_equal_to(&self, other: &Colour, compare_alpha: bool) -> bool {
        let same_rgb =
            self.red == other.red && self.green == other.green && self.blue == other.blue;

        if compare_alpha {
            same_rgb && self.alpha == other.alpha
        } else {
            same_rgb
        }
    }

    /// An independent colour with the same values and no cached state.
    pub fn copy(&self) -> Self {
        Self::new(self.red, self.green, self.blue, self.alpha)
    }

    fn invalidate(&mut self) {
        self.css.take();
    }
}

fn clamp_alpha(alpha: f32) -> f32 {
    if alpha.is_nan() {
        0.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::black()
    }
}

impl PartialEq for Colour {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_to(other, true)
    }
}

impl FromStr for Colour {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::from_hex(trimmed)
            .or_else(|| Self::from_css(trimmed))
            .ok_or_else(|| ColourError::Parse {
                message: format!("Invalid colour: {}", trimmed),
                help: Some("Use #RGB, #RRGGBB or rgba(R, G, B, A)".to_string()),
            })
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_css())
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_css())
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
