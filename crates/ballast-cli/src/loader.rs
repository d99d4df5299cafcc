//! Portfolio file loading.

use std::fs;
use std::io;
use std::path::Path;

use ballast_core::Portfolio;
use serde_json::Value;

use crate::error::{CliError, CliResult};

/// Default portfolio file, used when --file is not given.
pub const DEFAULT_PORTFOLIO_PATH: &str = "portfolio.json";

/// Loads a portfolio from a JSON file.
///
/// Failure modes stay distinguishable: a missing file (reported with a
/// getting-started hint), an unreadable file, a file that is not valid
/// JSON, and a JSON document that is not shaped like a portfolio. The
/// last comes from the core's own construction errors, which carry the
/// offending field and entry index.
pub fn load_portfolio(path: &Path) -> CliResult<Portfolio> {
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CliError::PortfolioNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CliError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let document: Value =
        serde_json::from_str(&contents).map_err(|source| CliError::MalformedPortfolio {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(Portfolio::from_value(&document)?)
}
