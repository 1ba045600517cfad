use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use folio_core::Page;
use log::LevelFilter;

use super::logging::LogDestination;

/// Terminal showcase of a GitHub account's public repositories.
#[derive(Debug, Parser)]
#[command(name = "folio", version)]
pub struct Cli {
    /// Which page to run.
    #[arg(value_enum, default_value_t = PageArg::Landing)]
    pub page: PageArg,

    /// RON configuration file (defaults to ./folio.ron when present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Account whose repositories are listed; overrides the config file.
    #[arg(long)]
    pub account: Option<String>,

    /// Write info-level logs to ./folio.log.
    #[arg(long)]
    pub log_file: bool,

    /// Log at info level on stderr (warnings only by default).
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageArg {
    Landing,
    Browser,
}

impl From<PageArg> for Page {
    fn from(value: PageArg) -> Self {
        match value {
            PageArg::Landing => Page::Landing,
            PageArg::Browser => Page::Browser,
        }
    }
}

impl Cli {
    pub fn log_setup(&self) -> (LogDestination, LevelFilter) {
        match (self.log_file, self.verbose) {
            (true, true) => (LogDestination::Both, LevelFilter::Info),
            (true, false) => (LogDestination::File, LevelFilter::Info),
            (false, true) => (LogDestination::Terminal, LevelFilter::Info),
            (false, false) => (LogDestination::Terminal, LevelFilter::Warn),
        }
    }
}
