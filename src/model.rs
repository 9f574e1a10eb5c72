// src/model.rs

use std::collections::HashMap;
use std::path::PathBuf;

/// Identity of the commit recorded for a file path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitStamp {
    /// First 7 characters of the full hex commit id
    pub short_hash: String,
    pub author_email: String,
}

/// Maps an absolute working-tree path to the commit recorded for it while
/// walking the branch history. At most one entry per path; later visits
/// overwrite earlier ones.
pub type VersionIndex = HashMap<PathBuf, CommitStamp>;

/// A file that already carries an ID header, paired with the freshly
/// formatted line that should replace it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub path: PathBuf,
    pub replacement: String,
}
