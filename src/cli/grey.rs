//! Grey command implementation.

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::output::Printer;
use crate::types::Colour;

use super::report::{emit, ColourReport};

/// Build a grey colour from a level
#[derive(Args, Debug)]
pub struct GreyArgs {
    /// Grey level applied to red, green and blue (0 - 255)
    pub level: u8,

    /// Alpha (0.0 - 1.0), opaque when omitted
    #[arg(long)]
    pub alpha: Option<f32>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn build(args: &GreyArgs) -> Colour {
    match args.alpha {
        Some(alpha) => Colour::grey_alpha(args.level, alpha),
        None => Colour::grey(args.level),
    }
}

pub fn run(args: GreyArgs, config: &Config, printer: &Printer) -> Result<()> {
    let colour = build(&args);
    printer.status("Built", &printer.swatch(&colour));
    emit(&[ColourReport::new(&colour)], args.json || config.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_opaque() {
        let args = GreyArgs {
            level: 128,
            alpha: None,
            json: false,
        };
        assert_eq!(build(&args), Colour::rgb(128, 128, 128));
    }

    #[test]
    fn test_build_with_alpha() {
        let args = GreyArgs {
            level: 10,
            alpha: Some(0.25),
            json: false,
        };
        assert_eq!(build(&args).to_css(), "rgba(10, 10, 10, 0.25)");
    }
}
