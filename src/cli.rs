// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Writes commit ID to headers of files in a local git repository.", long_about = None)]
pub struct Args {
    /// Path to write the run summary to (stdout by default)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// The branch to list commits from
    #[arg(short, long, default_value = "master")]
    pub branch: String,

    /// Modify files in place to reset their versions
    #[arg(short, long, default_value_t = true)]
    pub modify: bool,

    /// Maximum number of header lines to search through (0 = unbounded)
    #[arg(short = 'n', value_name = "NUM", default_value_t = 10)]
    pub num_lines: usize,

    /// Path to the repository to stamp (current directory by default)
    pub repo: Option<PathBuf>,
}
