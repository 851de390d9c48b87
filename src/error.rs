use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mesh-colour operations
#[derive(Error, Diagnostic, Debug)]
pub enum ColourError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(mesh_colour::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(mesh_colour::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(mesh_colour::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Output error: {message}")]
    #[diagnostic(code(mesh_colour::output))]
    Output { message: String },

    #[error("{message}")]
    #[diagnostic(code(mesh_colour::mismatch))]
    Mismatch { message: String },
}

pub type Result<T> = std::result::Result<T, ColourError>;
