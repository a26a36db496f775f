use crate::{
    context::DirectoryContext,
    errors::{AppError, AppResult},
    tools::FileOps,
};

impl FileOps {
    pub fn search_file(&self, ctx: &DirectoryContext, name: &str) -> AppResult<bool> {
        let found = match self.resolve_target(ctx, name) {
            Ok(t) => t.resolved_path.exists(),
            Err(AppError::PathEscape) => false,
            Err(e) => return Err(e),
        };
        tracing::info!(op = "search", name, found, "searched");
        Ok(found)
    }
}
