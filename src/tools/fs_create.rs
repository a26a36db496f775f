use crate::{
    context::DirectoryContext,
    errors::{AppError, AppResult},
    security::validate_extension,
    tools::{display_name, CreateOutcome, FileOps, TIMESTAMP_FORMAT},
};
use std::{fs::OpenOptions, io::Write};

impl FileOps {
    pub fn create_file(&self, ctx: &DirectoryContext, name: &str) -> AppResult<CreateOutcome> {
        let base = display_name(name);
        if !validate_extension(&base) {
            return Err(AppError::InvalidExtension(base));
        }
        let target = self.resolve_target(ctx, name).inspect_err(|e| {
            tracing::warn!(op = "create", name, code = e.code(), "create rejected");
        })?;
        let path = target.resolved_path;

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                tracing::info!(op = "create", path = %path.display(), outcome = "already_exists", "create skipped");
                return Ok(CreateOutcome::AlreadyExists(path));
            }
            Err(e) => return Err(e.into()),
        };
        writeln!(file, "{}", self.stamp_line())?;

        tracing::info!(op = "create", path = %path.display(), outcome = "created", "file created");
        Ok(CreateOutcome::Created(path))
    }

    fn stamp_line(&self) -> String {
        let now = chrono::Local::now().format(TIMESTAMP_FORMAT);
        format!("File created by {} application on {now}", self.app_name)
    }
}
