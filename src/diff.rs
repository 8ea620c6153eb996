use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::config::Config;
use crate::patterns::Patterns;
use crate::scanner::collect_files;
use crate::utils::read_text;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub used: BTreeSet<String>,
    pub documented: BTreeSet<String>,
    /// Read somewhere but never registered with help text.
    pub undocumented: BTreeSet<String>,
    /// Registered with help text but never read.
    pub unknown: BTreeSet<String>,
}

impl Report {
    /// Merges the allow-lists into the scanned sets, then takes both differences.
    pub fn from_sets(
        mut used: BTreeSet<String>,
        mut documented: BTreeSet<String>,
        config: &Config,
    ) -> Self {
        used.extend(config.false_positive_unknowns.iter().cloned());
        documented.extend(config.false_positive_undocumented.iter().cloned());

        let undocumented = used.difference(&documented).cloned().collect();
        let unknown = documented.difference(&used).cloned().collect();

        Report {
            used,
            documented,
            undocumented,
            unknown,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.undocumented.is_empty() && self.unknown.is_empty()
    }
}

pub fn run_check(root: &Path, config: &Config) -> Result<Report> {
    let patterns = Patterns::new(config)?;
    let files = collect_files(root, config)?;
    debug!(root = %root.display(), files = files.len(), "scanning");

    let mut used = BTreeSet::new();
    let mut documented = BTreeSet::new();
    for file in &files {
        let text = read_text(file)?;
        let (u, d) = (used.len(), documented.len());
        patterns.scan(&text, &mut used, &mut documented);
        if used.len() > u || documented.len() > d {
            debug!(
                file = %file.display(),
                new_used = used.len() - u,
                new_documented = documented.len() - d,
                "captured options"
            );
        }
    }

    Ok(Report::from_sets(used, documented, config))
}
