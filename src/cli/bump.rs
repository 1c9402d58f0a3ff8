//! The version bump workflow
//!
//! read manifest -> parse version -> bump -> patch text -> write -> commit/tag

use std::path::{Path, PathBuf};

use semver::Version;

use crate::domain::{bump_version, TagPattern, VersionBump};
use crate::error::Result;
use crate::git::{Git2Repository, Repository};
use crate::manifest::Manifest;
use crate::vcs::{self, VcsOutcome};
use crate::warning::BumpWarning;

/// Arguments for the bump workflow
///
/// Mirrors the CLI arguments after config defaults have been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    pub bump: VersionBump,

    /// Manifest file to rewrite
    pub manifest: PathBuf,

    /// Commit and tag when a `.git` directory is present
    pub git: bool,

    /// Compute the new version without writing anything
    pub dry_run: bool,

    pub tag_pattern: TagPattern,
}

/// Result of a successful bump
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    /// The manifest's `version` string before the bump, if it had one
    pub previous: Option<String>,

    pub version: Version,

    /// `None` for dry runs
    pub vcs: Option<VcsOutcome>,
}

/// Runs the bump against the real git repository next to the manifest.
pub fn run_bump_workflow(args: &BumpWorkflowArgs) -> Result<BumpOutcome> {
    run_bump_workflow_with(args, |workdir| Git2Repository::open(workdir))
}

/// Runs the bump, opening the repository through `open_repo`.
///
/// Errors while reading, parsing or writing the manifest are fatal. Errors
/// while committing or tagging are returned inside the outcome.
pub fn run_bump_workflow_with<R, F>(args: &BumpWorkflowArgs, open_repo: F) -> Result<BumpOutcome>
where
    R: Repository,
    F: FnOnce(&Path) -> Result<R>,
{
    let manifest = Manifest::read(&args.manifest)?;
    let previous = manifest.version_field().as_str().map(str::to_string);
    let version = bump_version(&manifest.current_version(), args.bump)?;
    tracing::info!(
        previous = previous.as_deref().unwrap_or("(none)"),
        next = %version,
        bump = %args.bump,
        "computed version"
    );

    if args.dry_run {
        return Ok(BumpOutcome {
            previous,
            version,
            vcs: None,
        });
    }

    manifest.write(&manifest.with_version(&version)?)?;

    let vcs = if !args.git {
        VcsOutcome::Disabled
    } else {
        let workdir = manifest_dir(&args.manifest);
        if vcs::git_dir_present(workdir)? {
            match open_repo(workdir) {
                Ok(repo) => vcs::commit_and_tag(&repo, &version.to_string(), &args.tag_pattern),
                Err(e) => VcsOutcome::Warned(BumpWarning::CommitFailed {
                    version: version.to_string(),
                    reason: e.to_string(),
                }),
            }
        } else {
            tracing::debug!(dir = %workdir.display(), "no git directory, skipping commit");
            VcsOutcome::NoRepository
        }
    };

    Ok(BumpOutcome {
        previous,
        version,
        vcs: Some(vcs),
    })
}

fn manifest_dir(manifest: &Path) -> &Path {
    match manifest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
