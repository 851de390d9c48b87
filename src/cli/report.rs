//! Per-colour output rows shared by the subcommands.

use serde::Serialize;

use crate::error::{ColourError, Result};
use crate::types::{Colour, Hsv};

/// Every form of one colour, as printed on stdout.
#[derive(Debug, Clone, Serialize)]
pub struct ColourReport {
    pub hex: String,
    pub css: String,
    pub rgba: [u8; 4],
    pub hsv: Hsv,
}

impl ColourReport {
    pub fn new(colour: &Colour) -> Self {
        Self {
            hex: colour.to_hex(),
            css: colour.to_css().to_string(),
            rgba: colour.to_rgba8(),
            hsv: colour.to_hsv(),
        }
    }

    /// One text line: hex, CSS, then HSV to three places.
    pub fn line(&self) -> String {
        format!(
            "{}  {}  hsv({:.3}, {:.3}, {:.3})",
            self.hex, self.css, self.hsv.hue, self.hsv.saturation, self.hsv.value
        )
    }
}

/// Render reports as text lines or a pretty JSON array.
pub fn render(reports: &[ColourReport], json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(reports).map_err(|e| ColourError::Output {
            message: format!("Failed to encode JSON: {}", e),
        })
    } else {
        Ok(reports
            .iter()
            .map(ColourReport::line)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Print rendered reports to stdout.
pub fn emit(reports: &[ColourReport], json: bool) -> Result<()> {
    println!("{}", render(reports, json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_text() {
        let reports = vec![
            ColourReport::new(&Colour::rgb(255, 0, 0)),
            ColourReport::new(&Colour::new(0, 0, 255, 0.5)),
        ];

        insta::assert_snapshot!(render(&reports, false).unwrap(), @r"
        #ff0000  rgba(255, 0, 0, 1)  hsv(0.000, 1.000, 1.000)
        #0000ff  rgba(0, 0, 255, 0.5)  hsv(0.667, 1.000, 1.000)
        ");
    }

    #[test]
    fn test_render_json() {
        let reports = vec![ColourReport::new(&Colour::new(255, 0, 0, 0.5))];
        let rendered = render(&reports, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value[0]["hex"], "#ff0000");
        assert_eq!(value[0]["css"], "rgba(255, 0, 0, 0.5)");
        assert_eq!(value[0]["rgba"], serde_json::json!([255, 0, 0, 128]));
        assert_eq!(value[0]["hsv"]["saturation"], 1.0);
        assert_eq!(value[0]["hsv"]["value"], 1.0);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], false).unwrap(), "");
        assert_eq!(render(&[], true).unwrap(), "[]");
    }
}
