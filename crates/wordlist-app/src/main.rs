use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use wordlist_config::Config;
use wordlist_core::{Wordlist, convert, write_csv};

mod logging;
mod profile;

#[derive(Parser)]
#[command(name = "wordlist")]
#[command(about = "Convert a numbered vocabulary list into a CSV file", long_about = None)]
struct Cli {
    /// Vocabulary list to read (defaults to words.txt)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// CSV file to write (defaults to words.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON profile replacing the environment-derived config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the CSV to stdout instead of writing the output file
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Flags win over whatever the profile or environment set
    fn apply(self, mut config: Config) -> (Config, bool) {
        if let Some(input) = self.input {
            config.input_path = input;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        (config, self.dry_run)
    }
}

/// The `.env` error worth reporting; a missing file is the normal case
fn dotenv_problem(result: &Result<PathBuf, dotenvy::Error>) -> Option<&dotenvy::Error> {
    match result {
        Err(e) if !e.not_found() => Some(e),
        _ => None,
    }
}

/// Convert, or with `dry_run` print the CSV to `stdout` without touching the output file
fn run(config: &Config, dry_run: bool, mut stdout: impl Write) -> anyhow::Result<()> {
    if dry_run {
        let wordlist = Wordlist::load_from_file(&config.input_path)?;
        write_csv(&mut stdout, &wordlist.entries)?;
        let summary = wordlist.summary();
        tracing::info!(?summary, "dry run finished");
        return Ok(());
    }

    let summary = convert(&config.input_path, &config.output_path)?;
    if summary.incomplete > 0 {
        tracing::warn!(
            "{} of {} entries lack a word or translation",
            summary.incomplete,
            summary.entries
        );
    }

    writeln!(
        stdout,
        "Conversion complete! CSV file saved to: {}",
        config.output_path.display()
    )?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    let profile_path = cli.config.clone();
    let config = match &profile_path {
        Some(path) => profile::load_profile(path)?,
        None => Config::new(),
    };
    let (config, dry_run) = cli.apply(config);

    logging::init(&config.log)?;

    if let Some(e) = dotenv_problem(&dotenv) {
        tracing::warn!("ignoring malformed .env file: {e}");
    }
    if let Some(path) = &profile_path {
        tracing::info!("Loaded config profile {}", path.display());
    }

    run(&config, dry_run, io::stdout().lock())
}
