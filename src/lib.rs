// src/lib.rs

pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod rewriter;
pub mod scanner;

use config::Config;
use error::StampError;

/// Printed when the scanner finds nothing to refresh.
pub const NO_FILES_MESSAGE: &str = "No files require ID header.";

/// Runs the full stamping pipeline against a validated config and returns
/// the summary lines for the caller to print: one line per matched file's
/// path, or the sentinel message when nothing needed updating.
pub fn run(config: &Config) -> Result<Vec<String>, StampError> {
    let repo = index::open_repository(&config.repo)?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| StampError::InvalidRepository(config.repo.clone()))?
        .to_path_buf();

    let versions = index::build_version_index(&repo, &config.branch)?;

    let matches = scanner::scan(&versions, &workdir, &config.extensions, config.max_lines)?;

    if config.modify {
        rewriter::rewrite_all(&matches)?;
    }

    if matches.is_empty() {
        Ok(vec![NO_FILES_MESSAGE.to_string()])
    } else {
        Ok(matches.iter().map(|m| m.path.display().to_string()).collect())
    }
}
