//! Random command implementation.

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::Colour;

use super::report::{emit, ColourReport};

/// Generate random colours
#[derive(Args, Debug)]
pub struct RandomArgs {
    /// How many colours to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Alpha for every generated colour (0.0 - 1.0)
    #[arg(long, default_value_t = 1.0)]
    pub alpha: f32,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Generate the colours. A seed makes the sequence reproducible; without
/// one the thread-local generator is used.
pub fn generate(args: &RandomArgs) -> Vec<Colour> {
    match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..args.count)
                .map(|_| Colour::create_random_with(&mut rng, args.alpha))
                .collect()
        }
        None => (0..args.count)
            .map(|_| Colour::create_random(args.alpha))
            .collect(),
    }
}

pub fn run(args: RandomArgs, config: &Config, printer: &Printer) -> Result<()> {
    if !(0.0..=1.0).contains(&args.alpha) {
        log::warn!("alpha {} is outside 0.0 - 1.0, clamping", args.alpha);
    }

    let colours = generate(&args);
    let reports: Vec<ColourReport> = colours.iter().map(ColourReport::new).collect();

    printer.status("Generated", &plural(reports.len(), "colour", "colours"));
    emit(&reports, args.json || config.json)
}
