use crate::{
    context::DirectoryContext,
    errors::{AppError, AppResult},
    tools::{DeleteOutcome, FileOps},
};
use std::fs;

impl FileOps {
    /// Escapes and failed removals both report `NotFound`: nothing outside
    /// the root is acknowledged to exist.
    pub fn delete_file(&self, ctx: &DirectoryContext, name: &str) -> AppResult<DeleteOutcome> {
        let target = match self.resolve_target(ctx, name) {
            Ok(t) => t,
            Err(AppError::PathEscape) => {
                tracing::warn!(op = "delete", name, root = %ctx.current().display(), "path escapes root");
                return Ok(DeleteOutcome::NotFound);
            }
            Err(e) => return Err(e),
        };
        match fs::remove_file(&target.resolved_path) {
            Ok(()) => {
                tracing::info!(op = "delete", name = %target.display_name, path = %target.resolved_path.display(), outcome = "deleted", "file deleted");
                Ok(DeleteOutcome::Deleted(target.resolved_path))
            }
            Err(e) => {
                tracing::warn!(op = "delete", path = %target.resolved_path.display(), error = %e, "remove failed");
                Ok(DeleteOutcome::NotFound)
            }
        }
    }
}
