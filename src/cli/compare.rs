//! Compare command implementation.
//!
//! Exits with a diagnostic when the colours differ, so it can gate scripts.

use clap::Args;

use crate::config::Config;
use crate::error::{ColourError, Result};
use crate::output::Printer;

/// Check whether two colours are equal
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First colour
    pub left: String,

    /// Second colour
    pub right: String,

    /// Require alpha to match as well
    #[arg(long)]
    pub alpha: bool,
}

pub fn run(args: CompareArgs, config: &Config, printer: &Printer) -> Result<()> {
    let left = config.resolve(&args.left)?;
    let right = config.resolve(&args.right)?;
    let pair = format!("{} and {}", printer.swatch(&left), printer.swatch(&right));

    if left.is_equal_to(&right, args.alpha) {
        printer.status("Matched", &pair);
        Ok(())
    } else {
        printer.error("Differs", &pair);
        Err(ColourError::Mismatch {
            message: format!("{} and {} differ", left, right),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(left: &str, right: &str, alpha: bool) -> CompareArgs {
        CompareArgs {
            left: left.to_string(),
            right: right.to_string(),
            alpha,
        }
    }

    #[test]
    fn test_equal_ignoring_alpha() {
        let result = run(
            args("#000", "rgba(0, 0, 0, 0)", false),
            &Config::default(),
            &Printer::plain(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_alpha_mismatch() {
        let result = run(
            args("#000", "rgba(0, 0, 0, 0)", true),
            &Config::default(),
            &Printer::plain(),
        );
        assert!(matches!(result, Err(ColourError::Mismatch { .. })));
    }

    #[test]
    fn test_channel_mismatch() {
        let result = run(
            args("#000", "#fff", false),
            &Config::default(),
            &Printer::plain(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_input_is_parse_error() {
        let result = run(args("#000", "nope", false), &Config::default(), &Printer::plain());
        assert!(matches!(result, Err(ColourError::Parse { .. })));
    }
}
