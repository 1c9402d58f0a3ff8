//! The scaffold workflow: templates -> concurrent write -> summary.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::scaffold::{build_file_manifest, next_steps, write_project, ScaffoldOptions};

/// Result of a successful scaffold
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldOutcome {
    /// The project directory, `<parent>/<scope>:<package>`
    pub root: PathBuf,

    pub files: Vec<PathBuf>,

    /// Next-steps text for the user
    pub summary: String,
}

/// Creates the project for `options` inside `parent`.
pub fn run_scaffold_workflow(parent: &Path, options: &ScaffoldOptions) -> Result<ScaffoldOutcome> {
    let folder = options.name.folder_name();
    let root = parent.join(&folder);

    let manifest = build_file_manifest(options)?;
    let files = write_project(&root, &manifest)?;
    tracing::info!(root = %root.display(), count = files.len(), "project created");

    Ok(ScaffoldOutcome {
        root,
        files,
        summary: next_steps(&options.name, &options.description, &folder),
    })
}
