//! Scoped temporary-artifact provider.
//!
//! Every intermediate audio file of a job lives inside a [`Workspace`].
//! The backing directory is removed when the workspace is dropped, on
//! success and failure alike, so no stage needs its own cleanup logic.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tempfile::TempDir;

/// A per-job scratch directory with unique file allocation.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
    counter: AtomicU64,
}

impl Workspace {
    /// Create a workspace under `temp_root` (created if missing).
    pub fn new(temp_root: &Path) -> io::Result<Self> {
        std::fs::create_dir_all(temp_root)?;
        let dir = tempfile::Builder::new()
            .prefix("vvt-job-")
            .tempdir_in(temp_root)?;

        tracing::debug!("Created workspace {}", dir.path().display());

        Ok(Self {
            dir,
            counter: AtomicU64::new(0),
        })
    }

    /// Root directory of this workspace.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Allocate a unique file path inside the workspace.
    ///
    /// Only the name is reserved; the file itself is created by whoever
    /// writes to it.
    pub fn alloc(&self, stem: &str, ext: &str) -> PathBuf {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        self.dir
            .path()
            .join(format!("{:04}_{}.{}", n, stem, ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_returns_unique_paths() {
        let root = tempfile::tempdir().unwrap();
        let ws = Workspace::new(root.path()).unwrap();

        let a = ws.alloc("speech", "wav");
        let b = ws.alloc("speech", "wav");
        assert_ne!(a, b);
        assert!(a.starts_with(ws.path()));
    }

    #[test]
    fn dropping_removes_artifacts() {
        let root = tempfile::tempdir().unwrap();
        let ws = Workspace::new(root.path()).unwrap();
        let file = ws.alloc("speech", "wav");
        std::fs::write(&file, b"data").unwrap();
        let ws_path = ws.path().to_path_buf();

        drop(ws);

        assert!(!file.exists());
        assert!(!ws_path.exists());
    }
}
