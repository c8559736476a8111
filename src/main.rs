use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use quickcap::cli::args::Cli;
use quickcap::cli::commands;
use quickcap::error::QuickcapError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), QuickcapError> {
    let cli = Cli::parse();
    let text = cli.text.join(" ");
    let output = commands::capture(&text, cli.draft_only, cli.output)?;
    println!("{output}");
    Ok(())
}
