//! CLI command definitions and handlers

mod profile;
mod sources;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Linguaprint - passive language and locale fingerprinting
///
/// 100% LOCAL - reads only this machine. No data leaves your machine.
#[derive(Parser, Debug)]
#[command(name = "linguaprint")]
#[command(
    version,
    about = "Infer the languages a machine's user reads and types from OS, browser, Steam, and music-library evidence",
    long_about = "Linguaprint collects weak language signals already sitting on this machine - \
the OS locale, installed keyboard layouts, browser accept-language settings and history, \
the Steam client language, and non-Latin scripts in music file names - and aggregates \
them into a ranked language profile.\n\n\
100% LOCAL - reads only this machine. No data leaves your machine.\n\n\
Run without a subcommand to build a profile:\n  \
linguaprint",
    after_help = "\
Examples:
  linguaprint                              Profile this machine (text output)
  linguaprint profile --format json        JSON output for scripting
  linguaprint profile -o report.md -f md   Write a Markdown report
  linguaprint profile --skip-history       Leave browser history untouched
  linguaprint sources                      Show which evidence sources are present"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the language profile for this machine (the default command)
    #[command(after_help = "\
Examples:
  linguaprint profile                      Text output with colors
  linguaprint profile --format json        JSON output for scripting
  linguaprint profile --format md -o a.md  Markdown report written to a file
  linguaprint profile --music-dir ~/mp3    Scan a non-default music folder
  linguaprint profile --skip-history       Skip browser history databases
  linguaprint profile --skip-music         Skip the music-folder scan")]
    Profile {
        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Music folder to scan (default: the platform music directory)
        #[arg(long)]
        music_dir: Option<PathBuf>,

        /// Skip browser history collection
        #[arg(long)]
        skip_history: bool,

        /// Skip the music-folder scan
        #[arg(long)]
        skip_music: bool,

        /// Disable ANSI colors in text output (cleaner for logs)
        #[arg(long)]
        no_color: bool,
    },

    /// Check which evidence sources exist on this machine
    Sources,

    /// Show version information
    Version,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Profile {
            format,
            output,
            music_dir,
            skip_history,
            skip_music,
            no_color,
        }) => profile::run(
            &format,
            output.as_deref(),
            music_dir,
            skip_history,
            skip_music,
            no_color,
        ),

        Some(Commands::Sources) => sources::run(),

        Some(Commands::Version) => {
            println!("linguaprint {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }

        // Default: full profile as colored text on stdout
        None => profile::run("text", None, None, false, false, false),
    }
}
