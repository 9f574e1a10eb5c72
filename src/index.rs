// src/index.rs

use crate::error::StampError;
use crate::model::{CommitStamp, VersionIndex};
use git2::{BranchType, ObjectType, Repository, TreeWalkMode, TreeWalkResult};
use indicatif::ProgressBar;
use std::path::Path;

/// Opens the repository whose working tree sits at `root`. Fails
/// distinguishably when the path holds no git metadata.
pub fn open_repository(root: &Path) -> Result<Repository, StampError> {
    Repository::open(root).map_err(|_| StampError::InvalidRepository(root.to_path_buf()))
}

/// Walks the commits reachable from `branch` and records, for every blob in
/// every commit's tree, `absolute path -> commit identity`, later visits
/// overwriting earlier ones.
///
/// The walk runs in git's native log order (newest commit first), so the
/// surviving entry for a path is whichever touching commit is visited last.
/// This overwrite-in-loop behavior is kept as-is rather than resolved to
/// most-recent-commit-wins.
pub fn build_version_index(repo: &Repository, branch: &str) -> Result<VersionIndex, StampError> {
    let workdir = repo
        .workdir()
        .ok_or_else(|| StampError::InvalidRepository(repo.path().to_path_buf()))?
        .to_path_buf();

    // 1. Collect the commits reachable from the branch head
    let branch_ref = repo.find_branch(branch, BranchType::Local)?;
    let head = branch_ref.get().peel_to_commit()?;

    let mut revwalk = repo.revwalk()?;
    revwalk.push(head.id())?;

    let mut commits = Vec::new();
    for oid in revwalk {
        commits.push(oid?);
    }

    let bar = ProgressBar::new(commits.len() as u64);
    bar.set_message("Indexing commits");

    // 2. Traverse each commit's full tree and stamp every blob path
    let mut index = VersionIndex::new();
    for oid in &commits {
        let commit = repo.find_commit(*oid)?;
        let stamp = CommitStamp {
            short_hash: oid.to_string()[..7].to_string(),
            author_email: commit.author().email().unwrap_or("").to_string(),
        };

        let tree = commit.tree()?;
        tree.walk(TreeWalkMode::PreOrder, |dir, entry| {
            if entry.kind() == Some(ObjectType::Blob) {
                if let Some(name) = entry.name() {
                    index.insert(workdir.join(dir).join(name), stamp.clone());
                }
            }
            TreeWalkResult::Ok
        })?;

        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(index)
}
