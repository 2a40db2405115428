use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::PathBuf;

use crate::domain::index::build_index;
use crate::domain::plan::{plan_links, LinkAction};
use crate::infra::archive;
use crate::infra::fs::{move_file, remove_staged_files};
use crate::media::scan;

/// What happened to one target summary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Linked,
    NotFound,
    MoveFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub summary: String,
    pub outcome: LinkOutcome,
}

/// Per-target outcomes of one linking run. Misses and failed moves are
/// recorded here, not raised; only hard I/O trouble aborts a run.
#[derive(Debug, Default)]
pub struct LinkReport {
    pub entries: Vec<ReportEntry>,
}

impl LinkReport {
    pub fn linked(&self) -> usize {
        self.count(|outcome| matches!(outcome, LinkOutcome::Linked))
    }

    pub fn not_found(&self) -> usize {
        self.count(|outcome| matches!(outcome, LinkOutcome::NotFound))
    }

    pub fn move_failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, LinkOutcome::MoveFailed(_)))
    }

    fn count(&self, pred: impl Fn(&LinkOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}

/// Drives a whole batch: extract every archive, index both sides, join on
/// the summary key, move matched subtitles next to their targets, clean up
/// the staging directory. The staging directory belongs to this run alone.
pub struct Linker {
    subtitle_zip_files_dir: PathBuf,
    target_dir: PathBuf,
    temp_storage_dir: PathBuf,
}

impl Linker {
    pub fn new(
        subtitle_zip_files_dir: PathBuf,
        target_dir: PathBuf,
        temp_storage_dir: PathBuf,
    ) -> Self {
        Linker {
            subtitle_zip_files_dir,
            target_dir,
            temp_storage_dir,
        }
    }

    pub fn link_subtitles(&self) -> Result<LinkReport> {
        let targets = scan::scan_targets(&self.target_dir)?;
        println!(
            "Found {} target file(s) in {}",
            targets.len(),
            self.target_dir.display()
        );

        fs::create_dir_all(&self.temp_storage_dir).with_context(|| {
            format!(
                "Failed to create temp storage directory {}",
                self.temp_storage_dir.display()
            )
        })?;

        let archives = archive::collect_archives(&self.subtitle_zip_files_dir)?;
        let mut extracted = Vec::new();
        for archive_path in &archives {
            extracted.extend(archive::extract_subtitles(
                archive_path,
                &self.temp_storage_dir,
            )?);
        }
        println!(
            "Extracted {} subtitle file(s) from {} archive(s)",
            extracted.len(),
            archives.len()
        );

        let subtitle_index = build_index(&extracted);
        let target_index = build_index(&targets);
        debug!(
            "Indexed {} subtitle key(s) against {} target key(s)",
            subtitle_index.len(),
            target_index.len()
        );

        let mut report = LinkReport::default();
        for action in plan_links(&target_index, &subtitle_index) {
            report.entries.push(self.apply(action));
        }

        remove_staged_files(&self.temp_storage_dir, &extracted);

        Ok(report)
    }

    fn apply(&self, action: LinkAction) -> ReportEntry {
        match action {
            LinkAction::Move {
                summary,
                source,
                dest,
            } => {
                let source_path = self.temp_storage_dir.join(&source);
                let dest_path = self.target_dir.join(&dest);
                match move_file(&source_path, &dest_path) {
                    Ok(()) => {
                        println!("Subtitle for '{summary}' successfully linked.");
                        ReportEntry {
                            summary,
                            outcome: LinkOutcome::Linked,
                        }
                    }
                    Err(e) => {
                        warn!("Failed to link subtitle for '{summary}': {e:#}");
                        ReportEntry {
                            summary,
                            outcome: LinkOutcome::MoveFailed(format!("{e:#}")),
                        }
                    }
                }
            }
            LinkAction::Miss { summary } => {
                warn!("Subtitle for '{summary}' not found!");
                ReportEntry {
                    summary,
                    outcome: LinkOutcome::NotFound,
                }
            }
        }
    }
}
