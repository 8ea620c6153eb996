use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_CONFIG: &str = include_str!("../check-doc.toml");

/// Globs, call-site patterns and allow-lists driving a check.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub extensions: Vec<String>,
    pub source_glob: String,
    pub test_glob: String,
    pub usage_regex: String,
    pub doc_regex: String,
    /// Merged into the used set.
    pub false_positive_unknowns: BTreeSet<String>,
    /// Merged into the documented set.
    pub false_positive_undocumented: BTreeSet<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct Overrides {
    extensions: Option<Vec<String>>,
    source_glob: Option<String>,
    test_glob: Option<String>,
    usage_regex: Option<String>,
    doc_regex: Option<String>,
    false_positive_unknowns: Option<BTreeSet<String>>,
    false_positive_undocumented: Option<BTreeSet<String>>,
}

impl Config {
    pub fn builtin() -> Result<Self> {
        toml::from_str(DEFAULT_CONFIG).context("Invalid built-in check-doc.toml")
    }

    /// Built-in defaults, with any keys present in `path` taking precedence.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::builtin()?;
        if let Some(path) = path {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Cannot read config {}", path.display()))?;
            let overrides: Overrides = toml::from_str(&content)
                .with_context(|| format!("Invalid config {}", path.display()))?;
            config.apply(overrides);
        }
        Ok(config)
    }

    fn apply(&mut self, o: Overrides) {
        if let Some(v) = o.extensions {
            self.extensions = v;
        }
        if let Some(v) = o.source_glob {
            self.source_glob = v;
        }
        if let Some(v) = o.test_glob {
            self.test_glob = v;
        }
        if let Some(v) = o.usage_regex {
            self.usage_regex = v;
        }
        if let Some(v) = o.doc_regex {
            self.doc_regex = v;
        }
        if let Some(v) = o.false_positive_unknowns {
            self.false_positive_unknowns = v;
        }
        if let Some(v) = o.false_positive_undocumented {
            self.false_positive_undocumented = v;
        }
    }
}
