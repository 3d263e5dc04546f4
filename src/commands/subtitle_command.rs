//! Subtitle to Markdown command

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::errors::{ToolkitError, ToolkitResult};
use crate::subtitle::{convert_chapters, SubtitleFormat};
use crate::utils::logger::Logger;
use crate::utils::path_utils::clean_path_arg;

/// Command for converting chapter directories of subtitles to Markdown
pub struct SubtitleCommand<'a> {
    root: PathBuf,
    format: SubtitleFormat,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> SubtitleCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ToolkitResult<Self> {
        let root = args.get_one::<String>("root")
            .map(|r| clean_path_arg(r))
            .ok_or_else(|| ToolkitError::InvalidInput("Missing root directory".to_string()))?;
        let format = match args.get_one::<String>("format") {
            Some(name) => SubtitleFormat::from_name(name)?,
            None => SubtitleFormat::Srt,
        };

        Ok(SubtitleCommand { root, format, logger })
    }
}

impl<'a> Command for SubtitleCommand<'a> {
    fn execute(&self) -> ToolkitResult<()> {
        let reports = convert_chapters(&self.root, self.format)?;

        let written = reports.iter().filter(|r| r.markdown_path.is_some()).count();
        let files: usize = reports.iter().map(|r| r.files).sum();
        info!("Converted {} .{} files into {} chapter documents", files, self.format.extension(), written);
        self.logger.log(&format!(
            "Converted {} subtitle files in {} into {} Markdown files",
            files, self.root.display(), written
        ))?;

        Ok(())
    }
}
