//! Directory Stack
//!
//! Working directory of the deploy run as an explicit value. Entering a stage
//! directory pushes onto the stack and hands back a guard; dropping the guard
//! pops it again, on success and on every early return alike. The process
//! working directory is never touched; child processes get `current()` as
//! their cwd instead.

use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use crate::error::{ShipError, ShipResult};

/// Stack of working directories with a fixed root at the bottom
#[derive(Debug, Clone)]
pub struct DirStack {
    entries: Vec<PathBuf>,
}

impl DirStack {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            entries: vec![root.into()],
        }
    }

    /// Directory at the top of the stack
    pub fn current(&self) -> &Path {
        // `entries` always holds the root; guards never pop below it
        self.entries
            .last()
            .map(PathBuf::as_path)
            .unwrap_or_else(|| Path::new("."))
    }

    pub fn root(&self) -> &Path {
        self.entries
            .first()
            .map(PathBuf::as_path)
            .unwrap_or_else(|| Path::new("."))
    }

    /// Number of entered directories above the root
    pub fn depth(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    /// Enter `dir` (resolved against the current directory).
    ///
    /// Fails with `DirectoryNotFound` without changing the stack when the
    /// directory does not exist.
    pub fn push(&mut self, dir: impl AsRef<Path>) -> ShipResult<DirGuard<'_>> {
        let path = self.current().join(dir.as_ref());
        if !path.is_dir() {
            return Err(ShipError::DirectoryNotFound { path });
        }
        tracing::trace!(dir = %path.display(), depth = self.entries.len(), "enter directory");
        self.entries.push(path);
        Ok(DirGuard { stack: self })
    }

    fn pop(&mut self) {
        if self.entries.len() > 1 {
            if let Some(left) = self.entries.pop() {
                tracing::trace!(dir = %left.display(), depth = self.depth(), "leave directory");
            }
        }
    }
}

/// Scope of one `DirStack::push`; pops the entry when dropped
#[derive(Debug)]
pub struct DirGuard<'a> {
    stack: &'a mut DirStack,
}

impl Deref for DirGuard<'_> {
    type Target = DirStack;

    fn deref(&self) -> &DirStack {
        self.stack
    }
}

impl DerefMut for DirGuard<'_> {
    fn deref_mut(&mut self) -> &mut DirStack {
        self.stack
    }
}

impl Drop for DirGuard<'_> {
    fn drop(&mut self) {
        self.stack.pop();
    }
}
