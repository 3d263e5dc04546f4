//! PDF split commands
//!
//! `split-pdf` cuts a document at its top-level bookmarks; `split-chapters`
//! cuts it at chapter or section bookmarks recognised from their titles.

use std::path::{Path, PathBuf};
use clap::ArgMatches;
use log::{info, warn};

use crate::commands::command_traits::Command;
use crate::errors::{ToolkitError, ToolkitResult};
use crate::pdf::{split_by_bookmarks, split_by_chapters, LevelRules, SplitLevel, SplitReport};
use crate::utils::logger::Logger;
use crate::utils::path_utils::{clean_path_arg, has_extension};

/// Resolve and validate the PDF argument
fn pdf_input(args: &ArgMatches) -> ToolkitResult<PathBuf> {
    let path = args.get_one::<String>("input")
        .map(|p| clean_path_arg(p))
        .ok_or_else(|| ToolkitError::InvalidInput("Missing input PDF".to_string()))?;

    if !path.is_file() {
        return Err(ToolkitError::InvalidInput(format!("File not found: {}", path.display())));
    }
    if !has_extension(&path, "pdf") {
        return Err(ToolkitError::InvalidInput(format!("Not a PDF file: {}", path.display())));
    }
    Ok(path)
}

fn log_report(logger: &Logger, input: &Path, report: &SplitReport) -> ToolkitResult<()> {
    info!("Split finished, {} files saved in {}", report.files.len(), report.output_dir.display());
    if report.failed > 0 {
        warn!("{} parts could not be written", report.failed);
    }
    logger.log(&format!(
        "Split {} into {} files in {} ({} failed, {} skipped)",
        input.display(), report.files.len(), report.output_dir.display(), report.failed, report.skipped
    ))?;
    Ok(())
}

/// Command for splitting a PDF at its top-level bookmarks
pub struct SplitCommand<'a> {
    input: PathBuf,
    prefix: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> SplitCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ToolkitResult<Self> {
        let input = pdf_input(args)?;
        let prefix = args.get_one::<String>("prefix").cloned().unwrap_or_default();
        Ok(SplitCommand { input, prefix, logger })
    }
}

impl<'a> Command for SplitCommand<'a> {
    fn execute(&self) -> ToolkitResult<()> {
        let report = split_by_bookmarks(&self.input, &self.prefix)?;
        log_report(self.logger, &self.input, &report)
    }
}

/// Command for splitting a PDF by chapters or sections
pub struct ChaptersCommand<'a> {
    input: PathBuf,
    level: SplitLevel,
    rules: LevelRules,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ChaptersCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ToolkitResult<Self> {
        let input = pdf_input(args)?;
        let level = match args.get_one::<String>("level") {
            Some(level) => SplitLevel::from_name(level)?,
            None => SplitLevel::Chapter,
        };
        let rules = match args.get_one::<String>("levels") {
            Some(file) => {
                let path = clean_path_arg(file);
                info!("Loading bookmark level keywords from {}", path.display());
                LevelRules::from_file(&path)?
            },
            None => LevelRules::default(),
        };

        Ok(ChaptersCommand { input, level, rules, logger })
    }
}

impl<'a> Command for ChaptersCommand<'a> {
    fn execute(&self) -> ToolkitResult<()> {
        info!("Splitting by {:?}", self.level);
        let report = split_by_chapters(&self.input, self.level, &self.rules)?;
        log_report(self.logger, &self.input, &report)
    }
}
