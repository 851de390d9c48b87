//! Hue/saturation/value representation.

use palette::{IntoColor, Srgb};
use serde::Serialize;

/// A colour in HSV space. Every field is normalised to 0.0-1.0; hue is a
/// fraction of a full turn, not degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Hsv {
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Convert 8-bit channels to HSV.
    pub(crate) fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let rgb: Srgb<f32> = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
        let hsv: palette::Hsv = rgb.into_color();

        Self {
            hue: hsv.hue.into_positive_degrees() / 360.0,
            saturation: hsv.saturation,
            value: hsv.value,
        }
    }

    /// Convert back to 8-bit channels, rounding each.
    pub(crate) fn to_rgb(self) -> [u8; 3] {
        let hsv: palette::Hsv = palette::Hsv::new(
            self.hue.rem_euclid(1.0) * 360.0,
            self.saturation.clamp(0.0, 1.0),
            self.value.clamp(0.0, 1.0),
        );
        let rgb: Srgb<f32> = hsv.into_color();

        [
            (rgb.red * 255.0).round() as u8,
            (rgb.green * 255.0).round() as u8,
            (rgb.blue * 255.0).round() as u8,
        ]
    }
}
