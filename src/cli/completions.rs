//! Shell completions generation.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::error::{ColourError, Result};

/// Generate shell completions
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Write the completion script for `shell` into `out`.
pub fn write_to(shell: Shell, out: &mut dyn Write) {
    let mut cmd = super::Cli::command();
    clap_complete::generate(shell, &mut cmd, "mesh-colour", out);
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    match args.output {
        Some(path) => {
            let mut file = File::create(&path).map_err(|e| ColourError::Io {
                path: path.clone(),
                message: format!("Failed to create completions file: {}", e),
            })?;
            write_to(args.shell, &mut file);
        }
        None => write_to(args.shell, &mut io::stdout()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_bash_script_mentions_subcommands() {
        let mut buf = Vec::new();
        write_to(Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("mesh-colour"));
        assert!(script.contains("random"));
    }

    #[test]
    fn test_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mesh-colour.fish");

        run(CompletionsArgs {
            shell: Shell::Fish,
            output: Some(path.clone()),
        })
        .unwrap();

        assert!(std::fs::read_to_string(path).unwrap().contains("compare"));
    }
}
