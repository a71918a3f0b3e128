//! Depth-first path enumeration.

use std::fs;
use std::path::{Path, PathBuf};

/// Lazy depth-first, pre-order walk over one root path.
///
/// A non-directory root yields exactly itself. A directory root yields
/// itself, then (only when `recursive` is set) each child entry in the
/// order the directory listing returns them, recursively. The walk uses an
/// explicit work stack, so depth is bounded by memory rather than the call
/// stack.
///
/// Whether a path counts as a directory is decided from metadata obtained
/// by following symlinks, the same resolution the extractor uses; a symlink
/// to a directory is therefore traversed as a directory.
pub struct Walk {
    stack: Vec<PathBuf>,
    recursive: bool,
}

impl Walk {
    /// Start a walk at `root`.
    pub fn new(root: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            stack: vec![root.into()],
            recursive,
        }
    }
}

impl Iterator for Walk {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let path = self.stack.pop()?;
        if self.recursive && is_dir_following(&path) {
            self.push_children(&path);
        }
        Some(path)
    }
}

impl Walk {
    /// Queue the children of `dir` so the first listed entry pops next.
    ///
    /// A listing failure is non-fatal: the subtree is skipped and the walk
    /// continues with whatever is already queued.
    fn push_children(&mut self, dir: &Path) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(path = %dir.display(), error = %err, "cannot list directory");
                return;
            }
        };

        let mut children = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => children.push(entry.path()),
                Err(err) => {
                    tracing::warn!(path = %dir.display(), error = %err, "cannot read directory entry");
                }
            }
        }
        children.reverse();
        self.stack.extend(children);
    }
}

/// Directory check that follows symlinks, false on lookup failure.
fn is_dir_following(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::write(root.join("a.txt"), "hello").unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub/b.txt"), "world").unwrap();

        temp
    }

    #[test]
    fn test_file_root_yields_itself() {
        let temp = create_test_tree();
        let file = temp.path().join("a.txt");

        let paths: Vec<_> = Walk::new(&file, true).collect();
        assert_eq!(paths, vec![file]);
    }

    #[test]
    fn test_directory_without_recursion_yields_one_path() {
        let temp = create_test_tree();

        let paths: Vec<_> = Walk::new(temp.path(), false).collect();
        assert_eq!(paths, vec![temp.path().to_path_buf()]);
    }

    #[test]
    fn test_recursive_walk_is_preorder() {
        let temp = create_test_tree();

        let paths: Vec<_> = Walk::new(temp.path(), true).collect();
        // root, a.txt, sub, sub/b.txt in some listing order, root first.
        assert_eq!(paths.len(), 4);
        assert_eq!(paths[0], temp.path());

        let sub = temp.path().join("sub");
        let sub_pos = paths.iter().position(|p| *p == sub).unwrap();
        let b_pos = paths
            .iter()
            .position(|p| *p == sub.join("b.txt"))
            .unwrap();
        // A directory comes immediately before its descendants.
        assert_eq!(b_pos, sub_pos + 1);
    }

    #[test]
    fn test_missing_root_still_yields_path() {
        // The walker does not stat-check the root; the extractor reports it.
        let temp = TempDir::new().unwrap();
        let ghost = temp.path().join("ghost");

        let paths: Vec<_> = Walk::new(&ghost, true).collect();
        assert_eq!(paths, vec![ghost]);
    }

    #[test]
    fn test_symlinked_directory_is_traversed() {
        #[cfg(unix)]
        {
            let temp = create_test_tree();
            let link = temp.path().join("link");
            std::os::unix::fs::symlink(temp.path().join("sub"), &link).unwrap();

            let paths: Vec<_> = Walk::new(&link, true).collect();
            assert_eq!(paths[0], link);
            assert_eq!(paths.len(), 2);
            assert!(paths[1].ends_with("b.txt"));
        }
    }
}
