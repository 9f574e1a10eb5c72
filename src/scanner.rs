// src/scanner.rs

use crate::error::StampError;
use crate::model::{CommitStamp, HeaderMatch, VersionIndex};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use walkdir::WalkDir;

/// Recognizes an existing ID header line. The keyword is case-insensitive,
/// interior whitespace is flexible, and the bracketed hash field accepts
/// any content at all.
pub static ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^#\s*ID:\s+([\w.\-]+)\s+\[(?s:.)*\]\s+([\w@.+\-]*)\s+\$\s*$")
        .expect("ID header pattern must compile")
});

/// Formats the replacement header line for `path` from its recorded commit.
pub fn format_header(path: &Path, stamp: &CommitStamp) -> String {
    let basename = path.file_name().and_then(OsStr::to_str).unwrap_or("");
    format!(
        "# ID: {} [{}] {} $",
        basename, stamp.short_hash, stamp.author_email
    )
}

/// Walks the working tree under `root`, pruning hidden directories, and
/// returns a match for every indexed file with a managed extension whose
/// leading lines already carry an ID header. Files without a header in the
/// window are silently skipped.
pub fn scan(
    index: &VersionIndex,
    root: &Path,
    extensions: &[String],
    max_lines: usize,
) -> Result<Vec<HeaderMatch>, StampError> {
    let mut matches = Vec::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !(e.depth() > 0 && e.file_type().is_dir() && is_hidden(e.file_name())));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            StampError::ScanIo {
                path,
                source: e.into(),
            }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(stamp) = index.get(path) else {
            continue;
        };

        let name = entry.file_name().to_string_lossy();
        if !extensions.iter().any(|ext| name.ends_with(ext.as_str())) {
            continue;
        }

        if let Some(found) = scan_head(path, stamp, max_lines)? {
            matches.push(found);
        }
    }

    Ok(matches)
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// Reads up to `max_lines` leading lines of `path` looking for an ID
/// header (0 scans to end-of-file). Stops at the first hit and pairs the
/// path with its freshly formatted replacement line.
fn scan_head(
    path: &Path,
    stamp: &CommitStamp,
    max_lines: usize,
) -> Result<Option<HeaderMatch>, StampError> {
    let file = File::open(path).map_err(|e| StampError::ScanIo {
        path: path.to_path_buf(),
        source: e,
    })?;

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        if max_lines != 0 && idx >= max_lines {
            break;
        }
        let line = line.map_err(|e| StampError::ScanIo {
            path: path.to_path_buf(),
            source: e,
        })?;
        if ID_PATTERN.is_match(&line) {
            return Ok(Some(HeaderMatch {
                path: path.to_path_buf(),
                replacement: format_header(path, stamp),
            }));
        }
    }

    Ok(None)
}
