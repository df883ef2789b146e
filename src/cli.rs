//! Command-line interface definition.
//!
//! Lives in the library so that `xtask` can generate the man page from it.

use std::path::PathBuf;

use clap::Parser;

/// Turn an IRC meeting transcript into markdown minutes
#[derive(Debug, Parser)]
#[command(name = "minutes")]
#[command(version)]
#[command(about = "Turn an IRC meeting transcript into markdown minutes")]
#[command(
    long_about = "Turn an IRC meeting transcript into markdown minutes.\n\n\
    Reads a transcript in the `<timestamp> <nick> content` format written by\n\
    logging bots, picks up meeting metadata (Present+, Chair:, scribenick:, ...),\n\
    applies s/old/new/ corrections and renders minutes with a table of contents\n\
    and a resolutions index."
)]
pub struct Cli {
    /// Transcript file to read (`-` or omitted for stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Link to the raw IRC log shown in the header (defaults to FILE)
    #[arg(short, long, value_name = "URL")]
    pub log_url: Option<String>,

    /// Write the minutes to PATH instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the extracted meeting metadata as JSON instead of minutes
    #[arg(long)]
    pub headers: bool,

    /// Use this config file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub show_config: bool,

    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Transcript path, or `None` when reading stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Reference embedded as the IRC log link.
    pub fn source_reference(&self) -> String {
        match (&self.log_url, self.input_path()) {
            (Some(url), _) => url.clone(),
            (None, Some(path)) => path.display().to_string(),
            (None, None) => String::new(),
        }
    }
}
