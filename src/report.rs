use std::collections::BTreeSet;
use std::fmt::Write;

use crate::diff::Report;

const WIDTH: usize = 80;

fn quote(item: &str) -> String {
    let delim = if item.contains('\'') && !item.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(item.len() + 2);
    out.push(delim);
    for c in item.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

/// Sorted set literal: `set()`, `{'-a', '-b'}`, or one item per line once it
/// no longer fits in 80 columns.
pub fn pformat_set(items: &BTreeSet<String>) -> String {
    if items.is_empty() {
        return "set()".to_string();
    }
    let quoted: Vec<String> = items.iter().map(|s| quote(s)).collect();
    let flat = format!("{{{}}}", quoted.join(", "));
    if flat.chars().count() <= WIDTH {
        return flat;
    }
    format!("{{{}}}", quoted.join(",\n "))
}

pub fn render(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Args used        : {}", report.used.len());
    let _ = writeln!(out, "Args documented  : {}", report.documented.len());
    let _ = writeln!(out, "Args undocumented: {}", report.undocumented.len());
    let _ = writeln!(out, "{}", pformat_set(&report.undocumented));
    let _ = writeln!(out, "Args unknown     : {}", report.unknown.len());
    let _ = writeln!(out, "{}", pformat_set(&report.unknown));
    out
}
