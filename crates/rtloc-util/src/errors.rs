use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for the outer rtloc surfaces (config, processes, CLI).
#[derive(Debug, Error, Diagnostic)]
pub enum RtlocError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be read or parsed.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.rtloc/config.toml (or $RTLOC_CONFIG) for syntax errors"))]
    Config { message: String },

    /// An external command could not be spawned or exited unsuccessfully.
    #[error("Process error: {message}")]
    Process { message: String },

    /// Output could not be rendered (e.g. JSON serialization).
    #[error("Output error: {message}")]
    Output { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type RtlocResult<T> = miette::Result<T>;
