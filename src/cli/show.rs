//! Show command implementation.
//!
//! Resolves each argument (hex, CSS or `$name`) and prints every form.

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::output::{plural, Printer};

use super::report::{emit, ColourReport};

/// Show hex, CSS and HSV forms of colours
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Colours as #RGB, #RRGGBB, rgba(R, G, B, A) or $name
    #[arg(required = true)]
    pub colours: Vec<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Resolve every argument, stopping at the first bad one.
pub fn collect(args: &ShowArgs, config: &Config) -> Result<Vec<ColourReport>> {
    args.colours
        .iter()
        .map(|input| config.resolve(input).map(|c| ColourReport::new(&c)))
        .collect()
}

pub fn run(args: ShowArgs, config: &Config, printer: &Printer) -> Result<()> {
    let reports = collect(&args, config)?;
    printer.status("Parsed", &plural(reports.len(), "colour", "colours"));
    emit(&reports, args.json || config.json)
}
