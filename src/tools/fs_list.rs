use crate::{context::DirectoryContext, errors::AppResult, tools::FileOps};
use std::fs;

impl FileOps {
    /// Direct children of the root, case-insensitive ascending.
    pub fn list_entries(&self, ctx: &DirectoryContext) -> AppResult<Vec<String>> {
        ctx.ensure_valid()?;
        let mut names = Vec::new();
        for entry in fs::read_dir(ctx.current())? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
        tracing::info!(op = "list", root = %ctx.current().display(), entries = names.len(), "listed");
        Ok(names)
    }
}
