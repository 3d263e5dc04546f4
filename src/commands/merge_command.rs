//! Markdown merge command

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::errors::{ToolkitError, ToolkitResult};
use crate::markdown::{merge_markdown_files, normalize_output_name, MergeOptions};
use crate::utils::logger::Logger;
use crate::utils::path_utils::clean_path_arg;

/// Command for merging the Markdown files of a directory
pub struct MergeCommand<'a> {
    options: MergeOptions,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> MergeCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ToolkitResult<Self> {
        let input_dir: PathBuf = args.get_one::<String>("dir")
            .map(|d| clean_path_arg(d))
            .ok_or_else(|| ToolkitError::InvalidInput("Missing input directory".to_string()))?;

        let mut options = MergeOptions::new(input_dir);
        if let Some(output) = args.get_one::<String>("output") {
            options.output_file = normalize_output_name(output);
        }
        options.recursive = args.get_flag("recursive");
        options.add_filename_header = !args.get_flag("no-header");
        options.add_separator = !args.get_flag("no-separator");

        Ok(MergeCommand { options, logger })
    }
}

impl<'a> Command for MergeCommand<'a> {
    fn execute(&self) -> ToolkitResult<()> {
        let report = merge_markdown_files(&self.options)?;

        info!("Merged {} files into {}", report.merged, report.output_path.display());
        if report.skipped > 0 {
            info!("Skipped {} empty or unreadable files", report.skipped);
        }
        self.logger.log(&format!(
            "Merged {} Markdown files from {} into {} ({} skipped)",
            report.merged, self.options.input_dir.display(), report.output_path.display(), report.skipped
        ))?;

        Ok(())
    }
}
