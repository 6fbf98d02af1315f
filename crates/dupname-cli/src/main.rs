//! dupname CLI - report files sharing a name across two directories
//!
//! `dupname [-r] [-i] [-e] <dir1> <dir2>`

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use dupname_scanner::output::{to_json, to_text};
use dupname_scanner::{DirectoryMatcher, MatchOptions};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::Level;

/// Printed on standard output when the arguments cannot be parsed
const USAGE: &str = "使用方法: dupname [-r] [-i] [-e] <目录1> <目录2>";

#[derive(Parser, Debug)]
#[command(name = "dupname")]
#[command(about = "dupname - find files with the same name in two directories")]
#[command(version)]
struct Cli {
    /// Recurse into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Compare file names case-insensitively
    #[arg(short, long)]
    ignore_case: bool,

    /// Ignore file extensions when comparing
    #[arg(short = 'e', long = "ignore-ext")]
    ignore_extension: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// First directory
    #[arg(value_name = "DIR1")]
    dir1: PathBuf,

    /// Second directory
    #[arg(value_name = "DIR2")]
    dir2: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    fn options(&self) -> MatchOptions {
        MatchOptions::new()
            .with_recursive(self.recursive)
            .with_ignore_case(self.ignore_case)
            .with_ignore_extension(self.ignore_extension)
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("{USAGE}");
                std::process::exit(1);
            }
        },
    };

    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        println!("{e}");
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.options();
    tracing::debug!(?options, "starting comparison");

    let report = DirectoryMatcher::new(options).compare(&cli.dir1, &cli.dir2)?;

    let rendered = match cli.format {
        OutputFormat::Text => to_text(&report),
        OutputFormat::Json => {
            let mut json = to_json(&report)?;
            json.push('\n');
            json
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
