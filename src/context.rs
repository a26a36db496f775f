use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// The directory every file operation is scoped to.
#[derive(Debug, Clone)]
pub struct DirectoryContext {
    root: PathBuf,
    default_root: PathBuf,
}

impl DirectoryContext {
    /// Context rooted at the process working directory, which also becomes
    /// the target of [`reset_to_default`](Self::reset_to_default).
    pub fn from_cwd() -> AppResult<Self> {
        let cwd = std::env::current_dir()?;
        Self::new(&cwd)
    }

    pub fn new(default_root: &Path) -> AppResult<Self> {
        let root = canonical_dir(default_root)?;
        Ok(Self { default_root: root.clone(), root })
    }

    pub fn current(&self) -> &Path { &self.root }

    pub fn set_root(&mut self, path: &Path) -> AppResult<()> {
        self.root = canonical_dir(path)?;
        tracing::info!(root = %self.root.display(), "root changed");
        Ok(())
    }

    pub fn reset_to_default(&mut self) {
        self.root = self.default_root.clone();
    }

    /// The root can be removed behind our back between operations.
    pub fn ensure_valid(&self) -> AppResult<()> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(AppError::NotADirectory(self.root.clone()))
        }
    }
}

fn canonical_dir(path: &Path) -> AppResult<PathBuf> {
    if !path.is_dir() {
        return Err(AppError::NotADirectory(path.to_path_buf()));
    }
    Ok(dunce::canonicalize(path)?)
}
