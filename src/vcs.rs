//! Commit-and-tag step run after a successful bump.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::TagPattern;
use crate::error::{JsrKitError, Result};
use crate::git::Repository;
use crate::warning::BumpWarning;

/// Name of the git metadata directory probed next to the manifest.
pub const GIT_DIR: &str = ".git";

/// What happened to version control after the manifest was written.
#[derive(Debug, Clone, PartialEq)]
pub enum VcsOutcome {
    /// `--no-git` or `git = false`
    Disabled,
    /// No `.git` directory next to the manifest
    NoRepository,
    Tagged { commit: String, tag: String },
    /// Commit or tag failed; the manifest change stands
    Warned(BumpWarning),
}

/// Checks whether `workdir` holds a git metadata directory.
///
/// A missing directory is not an error. Any other failure to stat it is.
pub fn git_dir_present(workdir: &Path) -> Result<bool> {
    let git_dir = workdir.join(GIT_DIR);
    match fs::metadata(&git_dir) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(JsrKitError::io(git_dir, e)),
    }
}

/// Commits all tracked changes with `version` as the message and tags it.
///
/// Failures become a [`VcsOutcome::Warned`]; nothing is rolled back.
pub fn commit_and_tag<R: Repository>(repo: &R, version: &str, pattern: &TagPattern) -> VcsOutcome {
    let oid = match repo.commit_all(version) {
        Ok(oid) => oid,
        Err(e) => {
            tracing::warn!(error = %e, "commit failed");
            return VcsOutcome::Warned(BumpWarning::CommitFailed {
                version: version.to_string(),
                reason: reason(&e),
            });
        }
    };

    let tag = pattern.format(version);
    match repo.create_tag(&tag, oid) {
        Ok(()) => VcsOutcome::Tagged {
            commit: oid.to_string(),
            tag,
        },
        Err(e) => {
            tracing::warn!(error = %e, tag = %tag, "tagging failed");
            VcsOutcome::Warned(BumpWarning::TagFailed {
                tag,
                commit: oid.to_string(),
                reason: reason(&e),
            })
        }
    }
}

fn reason(err: &JsrKitError) -> String {
    match err {
        JsrKitError::Git(e) => e.message().to_string(),
        other => other.to_string(),
    }
}
