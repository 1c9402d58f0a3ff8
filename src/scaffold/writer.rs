use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use crate::error::{JsrKitError, Result};
use crate::scaffold::FileManifest;

/// Writes every manifest entry under `root`, one thread per file.
///
/// `root` and any nested parent directories are created recursively. All
/// writes are joined before returning; the first failure is reported.
/// Returns the paths written, in manifest order.
pub fn write_project(root: &Path, files: &FileManifest) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(root).map_err(|e| JsrKitError::io(root, e))?;
    tracing::info!(root = %root.display(), files = files.len(), "writing project");

    let results: Vec<Result<PathBuf>> = thread::scope(|scope| {
        let handles: Vec<_> = files
            .iter()
            .map(|(relative, content)| scope.spawn(move || write_entry(root, relative, content)))
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    });

    results.into_iter().collect()
}

fn write_entry(root: &Path, relative: &str, content: &str) -> Result<PathBuf> {
    let path = relative
        .split('/')
        .fold(root.to_path_buf(), |path, segment| path.join(segment));

    if relative.contains('/') {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| JsrKitError::io(parent, e))?;
        }
    }

    fs::write(&path, content).map_err(|e| JsrKitError::io(&path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manifest(entries: &[(&str, &str)]) -> FileManifest {
        entries
            .iter()
            .map(|(p, c)| (p.to_string(), c.to_string()))
            .collect()
    }

    #[test]
    fn test_writes_nested_files() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("@a:b");
        let files = manifest(&[
            ("top.txt", "top"),
            ("x/one.txt", "1"),
            ("x/two.txt", "2"),
            ("x/y/z/deep.txt", "deep"),
        ]);

        let written = write_project(&root, &files).unwrap();

        assert_eq!(written.len(), 4);
        assert_eq!(written[3], root.join("x").join("y").join("z").join("deep.txt"));
        assert_eq!(fs::read_to_string(root.join("top.txt")).unwrap(), "top");
        assert_eq!(fs::read_to_string(root.join("x/two.txt")).unwrap(), "2");
        assert_eq!(fs::read_to_string(root.join("x/y/z/deep.txt")).unwrap(), "deep");
    }

    #[test]
    fn test_rerun_overwrites() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("project");

        write_project(&root, &manifest(&[("a/file.txt", "old")])).unwrap();
        write_project(&root, &manifest(&[("a/file.txt", "new")])).unwrap();

        assert_eq!(fs::read_to_string(root.join("a/file.txt")).unwrap(), "new");
    }

    #[test]
    fn test_failure_aborts() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("project");
        fs::create_dir_all(&root).unwrap();
        // A regular file where a directory is needed
        fs::write(root.join("blocked"), "").unwrap();

        let err = write_project(&root, &manifest(&[("ok.txt", "fine"), ("blocked/x.txt", "x")]))
            .unwrap_err();
        assert!(matches!(err, JsrKitError::Io { .. }));
    }
}
