// src/main.rs

use clap::Parser;
use idstamp::cli::Args;
use idstamp::config::Config;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    let result = Config::from_args(&args).and_then(|config| idstamp::run(&config));

    match result {
        Ok(lines) => {
            if let Err(e) = write_summary(args.output.as_deref(), &lines) {
                eprintln!("Error writing summary: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn write_summary(output: Option<&Path>, lines: &[String]) -> io::Result<()> {
    let body = format!("{}\n", lines.join("\n"));
    match output {
        Some(path) => fs::write(path, body),
        None => io::stdout().write_all(body.as_bytes()),
    }
}
