use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};

/// Top-level directory of the git checkout containing the current directory.
pub fn toplevel() -> Result<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .context("Failed to run git")?;
    if !output.status.success() {
        anyhow::bail!(
            "git rev-parse --show-toplevel failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    let stdout = String::from_utf8(output.stdout).context("git printed a non UTF-8 path")?;
    Ok(PathBuf::from(stdout.trim()))
}
