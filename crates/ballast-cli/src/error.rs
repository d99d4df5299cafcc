//! CLI error types.

use std::path::PathBuf;

use ballast_core::RebalanceError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The portfolio file does not exist.
    #[error(
        "Portfolio file '{}' not found\n\nTo get started:\n  1. Create a 'portfolio.json' file in the current directory, or\n  2. Point --file at an existing portfolio JSON file\n\nA portfolio file looks like:\n  {{\"assets\": [{{\"name\": \"Bonds\", \"target_allocation\": 0.4, \"current_balance\": 1000.0}}]}}",
        path.display()
    )]
    PortfolioNotFound {
        /// The path that was tried.
        path: PathBuf,
    },

    /// The portfolio file exists but could not be read.
    #[error("Could not read portfolio file '{}'", path.display())]
    Io {
        /// The path that was tried.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The portfolio file is not valid JSON.
    #[error("Portfolio file '{}' is not valid JSON", path.display())]
    MalformedPortfolio {
        /// The path that was read.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// An error raised by the rebalancing core.
    #[error(transparent)]
    Core(#[from] RebalanceError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
