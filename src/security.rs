use crate::errors::AppError;
use regex::Regex;
use std::ffi::OsString;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

pub const ALLOWED_EXTENSIONS: [&str; 4] = ["txt", "xml", "php", "java"];

static EXTENSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"^[^\s]+\.(?i:{})$", ALLOWED_EXTENSIONS.join("|"));
    Regex::new(&pattern).expect("extension pattern is valid")
});

/// True when `name` has no whitespace and ends in one of
/// [`ALLOWED_EXTENSIONS`], compared case-insensitively.
pub fn validate_extension(name: &str) -> bool {
    EXTENSION_PATTERN.is_match(name)
}

/// Joins `name` onto `root` and requires the canonical result to be exactly
/// that join, compared as raw strings. Absolute names, `..` traversal, `.`
/// segments, trailing separators and symlinks pointing elsewhere all fail
/// with [`AppError::PathEscape`].
pub fn ensure_within_root(root: &Path, name: &str) -> Result<PathBuf, AppError> {
    let input = Path::new(name);
    if input.is_absolute() || input.has_root() {
        return Err(AppError::PathEscape);
    }
    let joined = root.join(input);
    let canon = canonicalize_lenient(&joined)?;
    if canon == root || canon.as_os_str() != joined.as_os_str() {
        tracing::debug!(root = %root.display(), name, resolved = %canon.display(), "path escapes root");
        return Err(AppError::PathEscape);
    }
    Ok(canon)
}

enum Step {
    Up,
    Down(OsString),
}

/// Canonicalizes a path whose tail may not exist yet: the deepest existing
/// ancestor goes through the filesystem, the rest is applied lexically.
pub fn canonicalize_lenient(path: &Path) -> io::Result<PathBuf> {
    let mut base = path.to_path_buf();
    let mut tail = Vec::new();
    let mut resolved = loop {
        match dunce::canonicalize(&base) {
            Ok(c) => break c,
            // A regular file in the middle of the path reports NotADirectory.
            Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
                let mut comps = base.components();
                match comps.next_back() {
                    Some(Component::ParentDir) => tail.push(Step::Up),
                    Some(Component::Normal(seg)) => tail.push(Step::Down(seg.to_os_string())),
                    Some(Component::CurDir) => {}
                    _ => return Err(e),
                }
                base = comps.as_path().to_path_buf();
                if base.as_os_str().is_empty() {
                    return Err(e);
                }
            }
            Err(e) => return Err(e),
        }
    };
    for step in tail.into_iter().rev() {
        match step {
            Step::Up => {
                resolved.pop();
            }
            Step::Down(seg) => resolved.push(seg),
        }
    }
    Ok(resolved)
}
