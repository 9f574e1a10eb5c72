// src/error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a stamping run
#[derive(Debug, Error)]
pub enum StampError {
    #[error("'{}' is not a directory!", .0.display())]
    NotADirectory(PathBuf),

    #[error("'{}' is not a Git repository!", .0.display())]
    InvalidRepository(PathBuf),

    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    #[error("could not read head of {}: {source}", .path.display())]
    ScanIo { path: PathBuf, source: io::Error },

    #[error("could not rewrite {}: {source}", .path.display())]
    RewriteIo { path: PathBuf, source: io::Error },
}
