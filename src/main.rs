use clap::Parser;
use mesh_colour::cli::{load_config, Cli, Commands};
use mesh_colour::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    mesh_colour::cli::init_logging(cli.verbose);

    let printer = Printer::new();
    let config = || load_config(cli.config.as_deref());

    match cli.command {
        Commands::Show(args) => mesh_colour::cli::show::run(args, &config()?, &printer)?,
        Commands::Random(args) => mesh_colour::cli::random::run(args, &config()?, &printer)?,
        Commands::Grey(args) => mesh_colour::cli::grey::run(args, &config()?, &printer)?,
        Commands::Compare(args) => mesh_colour::cli::compare::run(args, &config()?, &printer)?,
        Commands::Completions(args) => mesh_colour::cli::completions::run(args)?,
    }

    Ok(())
}
