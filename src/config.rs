// src/config.rs

use crate::cli::Args;
use crate::error::StampError;
use std::env;
use std::path::PathBuf;

/// Validated settings for a single stamping run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute path to the repository working tree
    pub repo: PathBuf,
    /// Branch whose commit history seeds the version index
    pub branch: String,
    /// Summary destination; `None` means stdout
    pub output: Option<PathBuf>,
    /// Whether matched files are rewritten in place
    pub modify: bool,
    /// Leading-line scan window; 0 means unbounded
    pub max_lines: usize,
    /// File suffixes the scanner considers managed
    pub extensions: Vec<String>,
}

impl Config {
    /// Builds a config from CLI arguments, resolving the repository path to
    /// an absolute directory before the pipeline runs.
    pub fn from_args(args: &Args) -> Result<Self, StampError> {
        let repo = match &args.repo {
            Some(path) => path.clone(),
            None => env::current_dir()
                .map_err(|_| StampError::NotADirectory(PathBuf::from(".")))?,
        };

        let repo = repo
            .canonicalize()
            .map_err(|_| StampError::NotADirectory(repo.clone()))?;
        if !repo.is_dir() {
            return Err(StampError::NotADirectory(repo));
        }

        Ok(Config {
            repo,
            branch: args.branch.clone(),
            output: args.output.clone(),
            modify: args.modify,
            max_lines: args.num_lines,
            extensions: vec![".py".to_string()],
        })
    }
}
