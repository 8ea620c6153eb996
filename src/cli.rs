use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::Config;
use crate::repo;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Check that every command-line option read in src/ is documented",
    long_about = None
)]
pub struct Args {
    /// Repository root (defaults to `git rev-parse --show-toplevel`)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// TOML file overriding the built-in globs, patterns and allow-lists
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit with status 1 when undocumented or unknown options are found
    #[arg(long)]
    pub strict: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug)]
pub struct Options {
    pub root: PathBuf,
    pub config: Config,
    pub strict: bool,
}

pub fn build_options(args: &Args) -> Result<Options> {
    let root = match &args.root {
        Some(root) => root.clone(),
        None => repo::toplevel()?,
    };
    let config = Config::load(args.config.as_deref())?;

    Ok(Options {
        root,
        config,
        strict: args.strict,
    })
}
