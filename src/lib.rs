//
// lib.rs
// check-doc
//
// Library entry that re-exports the modules behind the binary: repository lookup, file collection, option extraction, set differencing and the printed report.
//
pub mod cli;
pub mod config;
pub mod diff;
pub mod patterns;
pub mod repo;
pub mod report;
pub mod scanner;
pub mod utils;

pub use cli::{build_options, Args, Options};
pub use config::Config;
pub use diff::{run_check, Report};
pub use scanner::collect_files;
