//! Command-line front end: one-shot search or an interactive prompt.

mod command;
mod render;
mod repl;

pub use command::{Command, CommandError};
pub use render::{render_history, render_screen};
pub use repl::{execute, run_repl, Outcome};

use std::path::PathBuf;

use clap::Parser;

use crate::sort::SortKey;

#[derive(Debug, Parser)]
#[command(name = "hnstories", version, about = "Search Hacker News stories from the terminal")]
pub struct Args {
    /// Term to search for. Defaults to the last term you searched.
    pub term: Option<String>,

    /// Number of pages to load.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Display ordering.
    #[arg(long, value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,

    /// Reverse the display ordering.
    #[arg(long, requires = "sort")]
    pub reverse: bool,

    /// Config file (default: platform config dir/hnstories/config.toml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not read or write the remembered search term.
    #[arg(long)]
    pub no_persist: bool,

    /// Keep a prompt open after the first search.
    #[arg(short, long)]
    pub interactive: bool,
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    s.parse().map_err(|e: crate::sort::UnknownSortKey| e.to_string())
}
