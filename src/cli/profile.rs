//! Profile command - build and render the language profile

use crate::profile::ProfileOptions;
use crate::reporters::{self, OutputFormat};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub fn run(
    format: &str,
    output: Option<&Path>,
    music_dir: Option<PathBuf>,
    skip_history: bool,
    skip_music: bool,
    no_color: bool,
) -> Result<()> {
    let format = OutputFormat::from_str(format)?;

    let options = ProfileOptions {
        music_dir,
        skip_history,
        skip_music,
    };
    let profile = crate::profile::build(&options).context("collecting evidence")?;

    tracing::info!(
        languages = profile.languages.len(),
        visits = profile.total_history_visits(),
        "profile assembled"
    );

    // colors only for terminal output, never for files
    let color = !no_color && output.is_none();
    let rendered = reporters::render(&profile, format, color)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("writing report to {}", path.display()))?;
            eprintln!("Report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
