use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use minutes::cli::Cli;
use minutes::{Config, Minutes};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn read_transcript(cli: &Cli) -> Result<String> {
    match cli.input_path() {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript {}", path.display())),
        None => {
            let mut transcript = String::new();
            io::stdin()
                .read_to_string(&mut transcript)
                .context("Failed to read transcript from stdin")?;
            Ok(transcript)
        }
    }
}

fn write_output(cli: &Cli, output: &str) -> Result<()> {
    match &cli.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    if cli.show_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let transcript = read_transcript(&cli)?;
    let minutes = Minutes::new(config.header);

    let output = if cli.headers {
        let headers = minutes.headers(&transcript);
        format!("{}\n", serde_json::to_string_pretty(&headers)?)
    } else {
        minutes.to_markdown(&cli.source_reference(), &transcript)
    };

    write_output(&cli, &output)?;
    tracing::info!(bytes = output.len(), "wrote minutes");
    Ok(())
}
