use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glob::Pattern;

/// Whole file as UTF-8. Unlike a lossy read, invalid bytes are an error.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Cannot read {}", path.display()))?;
    String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", path.display()))
}

/// `<root>/<dir_glob><file_glob>` with the root taken literally.
pub fn glob_pattern(root: &Path, dir_glob: &str, file_glob: &str) -> String {
    let root = root.to_string_lossy().replace('\\', "/");
    let root = Pattern::escape(root.trim_end_matches('/'));
    format!("{root}/{dir_glob}{file_glob}")
}
