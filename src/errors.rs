use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("path outside root")]
    PathEscape,
    #[error("unsupported extension: {0}")]
    InvalidExtension(String),
    #[error("{0}")]
    IoFailure(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotADirectory(_) => "NotADirectory",
            AppError::PathEscape => "PathEscape",
            AppError::InvalidExtension(_) => "InvalidExtension",
            AppError::IoFailure(_) => "IoFailure",
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::IoFailure(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
