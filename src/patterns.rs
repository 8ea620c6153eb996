use std::collections::BTreeSet;

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::Config;

/// The two call-site shapes an option name is captured from.
#[derive(Debug, Clone)]
pub struct Patterns {
    usage: Regex,
    doc: Regex,
}

fn compile(kind: &str, src: &str) -> Result<Regex> {
    let re = Regex::new(src).with_context(|| format!("Invalid {kind} regex: {src}"))?;
    if re.captures_len() < 2 {
        anyhow::bail!("{kind} regex has no capture group: {src}");
    }
    Ok(re)
}

fn captures<'t>(re: &Regex, text: &'t str) -> Vec<&'t str> {
    re.captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect()
}

impl Patterns {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            usage: compile("usage", &config.usage_regex)?,
            doc: compile("doc", &config.doc_regex)?,
        })
    }

    /// Option names read at runtime, e.g. `GetBoolArg("-listen", ...)`.
    pub fn usages<'t>(&self, text: &'t str) -> Vec<&'t str> {
        captures(&self.usage, text)
    }

    /// Option names registered with help text, e.g. `AddArg("-port=<port>", ...)`.
    pub fn docs<'t>(&self, text: &'t str) -> Vec<&'t str> {
        captures(&self.doc, text)
    }

    pub fn scan(
        &self,
        text: &str,
        used: &mut BTreeSet<String>,
        documented: &mut BTreeSet<String>,
    ) {
        used.extend(self.usages(text).into_iter().map(str::to_owned));
        documented.extend(self.docs(text).into_iter().map(str::to_owned));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn patterns() -> Patterns {
        Patterns::new(&Config::builtin().unwrap()).unwrap()
    }

    #[test]
    fn usage_spellings() {
        let text = r#"
            gArgs.GetArg("-datadir", "");
            args.GetBoolArg("-listen", DEFAULT_LISTEN);
            args.GetIntArg("-port", 8333);
            gArgs.GetArgs("-connect");
            args.IsArgSet("-proxy");
            args.SoftSetBoolArg("-discover", false);
            args.ForceSetArg("-bind", "127.0.0.1");
            args.GetArg( "-spaced", "");
        "#;
        let got = patterns().usages(text);
        assert_eq!(
            got,
            vec![
                "-datadir", "-listen", "-port", "-connect", "-proxy", "-discover", "-bind",
                "-spaced",
            ]
        );
    }

    #[test]
    fn usage_ignores_non_option_literals() {
        let text = r#"GetArg("datadir", ""); GetArg(strName, ""); SetArg("-x", 1);"#;
        assert!(patterns().usages(text).is_empty());
    }

    #[test]
    fn doc_stops_at_equals() {
        let text = r#"
            argsman.AddArg("-bar=<n>", "help text", ArgsManager::ALLOW_ANY, OptionsCategory::OPTIONS);
            argsman.AddArg("-daemon", "Run in the background", ArgsManager::ALLOW_ANY, OptionsCategory::OPTIONS);
            argsman.AddArg(
                "-maxconnections=<n>", "Maintain at most <n> connections", 0, 0);
        "#;
        let got = patterns().docs(text);
        assert_eq!(got, vec!["-bar", "-daemon", "-maxconnections"]);
    }

    #[test]
    fn scan_unions_into_sets() {
        let mut used = BTreeSet::new();
        let mut documented = BTreeSet::new();
        let p = patterns();
        p.scan(r#"IsArgSet("-baz"); GetArg("-baz", "");"#, &mut used, &mut documented);
        p.scan(r#"AddArg("-baz", "...");"#, &mut used, &mut documented);
        assert_eq!(used, BTreeSet::from(["-baz".to_string()]));
        assert_eq!(documented, BTreeSet::from(["-baz".to_string()]));
    }

    #[test]
    fn regex_without_group_is_rejected() {
        let mut config = Config::builtin().unwrap();
        config.doc_regex = r#"AddArg\(\s*"-"#.into();
        let err = Patterns::new(&config).unwrap_err();
        assert!(err.to_string().contains("no capture group"));
    }

    #[test]
    fn invalid_regex_is_rejected() {
        let mut config = Config::builtin().unwrap();
        config.usage_regex = "(unclosed".into();
        assert!(Patterns::new(&config).is_err());
    }
}
