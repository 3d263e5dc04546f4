//! CLI command implementations
//!
//! Each subcommand of the CLI is implemented as a `Command`; the factory
//! picks the right one from the parsed arguments.

pub mod command_traits;
pub mod coord_command;
pub mod merge_command;
pub mod split_command;
pub mod subtitle_command;

pub use command_traits::{Command, CommandFactory};
pub use coord_command::CoordCommand;
pub use merge_command::MergeCommand;
pub use split_command::{ChaptersCommand, SplitCommand};
pub use subtitle_command::SubtitleCommand;

use clap::ArgMatches;
use crate::errors::{ToolkitError, ToolkitResult};
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct OfflinekitCommandFactory;

impl OfflinekitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        OfflinekitCommandFactory
    }
}

impl Default for OfflinekitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for OfflinekitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> ToolkitResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("coord", sub)) => Ok(Box::new(CoordCommand::new(sub, logger)?)),
            Some(("merge-md", sub)) => Ok(Box::new(MergeCommand::new(sub, logger)?)),
            Some(("split-pdf", sub)) => Ok(Box::new(SplitCommand::new(sub, logger)?)),
            Some(("split-chapters", sub)) => Ok(Box::new(ChaptersCommand::new(sub, logger)?)),
            Some(("subtitles", sub)) => Ok(Box::new(SubtitleCommand::new(sub, logger)?)),
            Some((other, _)) => Err(ToolkitError::InvalidInput(format!("Unknown command: {}", other))),
            None => Err(ToolkitError::InvalidInput("No command given, see --help".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use crate::cli::build_cli;

    fn run(argv: &[&str]) -> ToolkitResult<()> {
        let matches = build_cli().try_get_matches_from(argv)
            .map_err(|e| ToolkitError::InvalidInput(e.to_string()))?;
        let logger = Logger::disabled();
        let command = OfflinekitCommandFactory::new().create_command(&matches, &logger)?;
        command.execute()
    }

    #[test]
    fn test_coord_file_conversion() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("points.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "# points\n117.074,30.544\nnot a point\n").unwrap();

        run(&[
            "offlinekit", "coord", "--from", "gcj02", "--to", "wgs84",
            "--input", input.to_str().unwrap(), "--output", output.to_str().unwrap(),
        ]).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines, vec!["# points", "117.06852155294133,30.54626801862928", "not a point"]);
    }

    #[test]
    fn test_coord_summary_names_systems() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("offlinekit.log");
        let matches = build_cli()
            .try_get_matches_from(["offlinekit", "coord", "116.397,39.908", "--from", "wgs84", "--to", "bd09"])
            .unwrap();
        {
            let logger = Logger::new(&log_path).unwrap();
            let command = OfflinekitCommandFactory::new().create_command(&matches, &logger).unwrap();
            command.execute().unwrap();
        }

        let log = fs::read_to_string(&log_path).unwrap();
        assert!(log.contains("(WGS 84 (GPS))"));
        assert!(log.contains("(BD-09 (Baidu Maps))"));
    }

    #[test]
    fn test_coord_rejects_bad_input() {
        assert!(matches!(
            run(&["offlinekit", "coord", "abc", "--from", "wgs84", "--to", "gcj02"]),
            Err(ToolkitError::InvalidInput(_))
        ));
        assert!(matches!(
            run(&["offlinekit", "coord", "1,2", "--from", "utm", "--to", "gcj02"]),
            Err(ToolkitError::InvalidInput(_))
        ));
        assert!(run(&["offlinekit", "coord", "--from", "wgs84", "--to", "gcj02"]).is_err());
    }

    #[test]
    fn test_merge_command_with_quoted_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "alpha").unwrap();
        fs::write(dir.path().join("b.md"), "beta").unwrap();
        let quoted = format!("\"{}\"", dir.path().display());

        run(&["offlinekit", "merge-md", &quoted, "--output", "all", "--no-separator"]).unwrap();
        let merged = fs::read_to_string(dir.path().join("all.md")).unwrap();
        assert!(merged.contains("alpha") && merged.contains("beta"));
        assert!(!merged.contains("---"));
    }

    #[test]
    fn test_split_requires_pdf_extension() {
        let dir = tempfile::tempdir().unwrap();
        let not_pdf = dir.path().join("book.txt");
        fs::write(&not_pdf, "text").unwrap();

        assert!(matches!(
            run(&["offlinekit", "split-pdf", not_pdf.to_str().unwrap()]),
            Err(ToolkitError::InvalidInput(_))
        ));
        assert!(matches!(
            run(&["offlinekit", "split-chapters", "/does/not/exist.pdf"]),
            Err(ToolkitError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_subtitles_command() {
        let dir = tempfile::tempdir().unwrap();
        let chapter = dir.path().join("01 intro");
        fs::create_dir(&chapter).unwrap();
        fs::write(chapter.join("1.vtt"), "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nhello\n").unwrap();

        run(&["offlinekit", "subtitles", dir.path().to_str().unwrap(), "--format", "vtt"]).unwrap();
        let markdown = fs::read_to_string(dir.path().join("01 intro.md")).unwrap();
        assert_eq!(markdown, "# 01 intro\n\n## 1\n\nhello\n\n");
    }
}
