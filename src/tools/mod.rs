pub mod fs_create;
pub mod fs_delete;
pub mod fs_list;
pub mod fs_search;

use crate::{config::Config, context::DirectoryContext, errors::AppResult, security::ensure_within_root};
use std::path::{Path, PathBuf};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// A user-supplied name resolved against the current root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    pub resolved_path: PathBuf,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(PathBuf),
    NotFound,
}

/// Directory-scoped file operations. Holds no directory state of its own;
/// every call takes the [`DirectoryContext`] it works in.
#[derive(Debug, Clone)]
pub struct FileOps {
    app_name: String,
}

impl FileOps {
    pub fn new(cfg: &Config) -> Self {
        Self { app_name: cfg.app.name.clone() }
    }

    pub fn resolve_target(&self, ctx: &DirectoryContext, name: &str) -> AppResult<FileTarget> {
        ctx.ensure_valid()?;
        let resolved_path = ensure_within_root(ctx.current(), name)?;
        Ok(FileTarget { display_name: display_name(name), resolved_path })
    }
}

/// Base name of `name`, or `name` itself when it has none.
pub fn display_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string())
}
