// src/rewriter.rs

use crate::error::StampError;
use crate::model::HeaderMatch;
use crate::scanner::ID_PATTERN;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Rewrites every matched file in order. Partial progress is not rolled
/// back if a later file fails.
pub fn rewrite_all(matches: &[HeaderMatch]) -> Result<(), StampError> {
    for m in matches {
        rewrite_inplace(&m.path, &m.replacement)?;
    }
    Ok(())
}

/// Replaces the first line matching the ID pattern anywhere in the file
/// with `replacement`; every other line is carried over byte for byte,
/// and later matching lines are left alone. The rescan here is unbounded,
/// independent of the scanner's window.
///
/// The new content lands via a sibling temp file and an atomic rename, so
/// a failed write never leaves a half-rewritten file behind.
pub fn rewrite_inplace(path: &Path, replacement: &str) -> Result<(), StampError> {
    let io_err = |e: std::io::Error| StampError::RewriteIo {
        path: path.to_path_buf(),
        source: e,
    };

    let content = fs::read_to_string(path).map_err(io_err)?;
    let permissions = fs::metadata(path).map_err(io_err)?.permissions();

    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(parent).map_err(io_err)?;

    let mut replaced = false;
    for line in content.split_inclusive('\n') {
        if !replaced && ID_PATTERN.is_match(line) {
            replaced = true;
            tmp.write_all(replacement.as_bytes()).map_err(io_err)?;
            tmp.write_all(b"\n").map_err(io_err)?;
        } else {
            tmp.write_all(line.as_bytes()).map_err(io_err)?;
        }
    }

    tmp.as_file().set_permissions(permissions).map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
