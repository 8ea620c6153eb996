use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::MatchOptions;
use tracing::{debug, warn};

use crate::config::Config;
use crate::utils::glob_pattern;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

fn glob_files(pattern: &str) -> Result<BTreeSet<PathBuf>> {
    let mut files = BTreeSet::new();
    let paths = glob::glob_with(pattern, MATCH_OPTIONS)
        .with_context(|| format!("Invalid glob pattern: {pattern}"))?;
    for entry in paths {
        match entry {
            // Anything that is not a directory goes on to be read, so a
            // dangling link fails there instead of vanishing here.
            Ok(path) => {
                if !path.is_dir() {
                    files.insert(path);
                }
            }
            Err(e) => warn!("skipping {}: {}", e.path().display(), e.error()),
        }
    }
    Ok(files)
}

/// Source files under `source_glob` minus those under `test_glob`.
pub fn collect_files(root: &Path, config: &Config) -> Result<BTreeSet<PathBuf>> {
    let mut sources = BTreeSet::new();
    let mut tests = BTreeSet::new();

    for ext in &config.extensions {
        sources.extend(glob_files(&glob_pattern(root, &config.source_glob, ext))?);
        tests.extend(glob_files(&glob_pattern(root, &config.test_glob, ext))?);
    }

    debug!(
        sources = sources.len(),
        tests = tests.len(),
        "collected candidate files"
    );
    Ok(sources.difference(&tests).cloned().collect())
}
