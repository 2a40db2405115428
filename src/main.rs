mod cli;
mod domain;
mod infra;
mod media;
mod workflows;

use anyhow::{bail, Result};
use clap::Parser;
use log::info;
use tempfile::TempDir;

use cli::Cli;
use workflows::linker::Linker;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let (subtitle_zip_files_dir, target_dir) = match (cli.subtitle_zip_files_dir, cli.target_dir) {
        (Some(archives), Some(targets)) => (archives, targets),
        _ => bail!("Must specify both --subtitle_zip_files_dir and --target_dir"),
    };

    // The guard keeps an auto-created staging directory alive for the run.
    let (_temp_guard, temp_storage_dir) = match cli.temp_storage_dir {
        Some(path) => (None, path),
        None => {
            let dir = TempDir::new()?;
            let path = dir.path().to_path_buf();
            (Some(dir), path)
        }
    };

    let linker = Linker::new(subtitle_zip_files_dir, target_dir, temp_storage_dir);
    let report = linker.link_subtitles()?;

    info!(
        "{} linked, {} without a match, {} failed to link",
        report.linked(),
        report.not_found(),
        report.move_failed()
    );

    Ok(())
}
