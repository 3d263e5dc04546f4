//! Coordinate conversion command
//!
//! Converts a single `lon,lat` pair given on the command line, or a file
//! with one coordinate per line.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::coordinate::{convert, convert_lines, Coordinate, CoordinateSystem};
use crate::errors::{ToolkitError, ToolkitResult};
use crate::utils::logger::Logger;
use crate::utils::path_utils::clean_path_arg;

/// What to convert
enum CoordInput {
    /// A single coordinate from the command line
    Point(Coordinate),
    /// A file of coordinates, written to `output` or stdout
    File { input: PathBuf, output: Option<PathBuf> },
}

/// Command for converting coordinates between datums
pub struct CoordCommand<'a> {
    input: CoordInput,
    from: CoordinateSystem,
    to: CoordinateSystem,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CoordCommand<'a> {
    /// Create a new coordinate command
    ///
    /// # Arguments
    /// * `args` - Matches of the `coord` subcommand
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ToolkitResult<Self> {
        let from = CoordinateSystem::from_name(required(args, "from")?)?;
        let to = CoordinateSystem::from_name(required(args, "to")?)?;

        let input = match (args.get_one::<String>("point"), args.get_one::<String>("input")) {
            (Some(point), None) => CoordInput::Point(Coordinate::from_string(point)?),
            (None, Some(input)) => CoordInput::File {
                input: clean_path_arg(input),
                output: args.get_one::<String>("output").map(|o| clean_path_arg(o)),
            },
            (Some(_), Some(_)) => return Err(ToolkitError::InvalidInput(
                "Give either a coordinate or --input, not both".to_string()
            )),
            (None, None) => return Err(ToolkitError::InvalidInput(
                "Missing coordinate ('lon,lat') or --input file".to_string()
            )),
        };

        Ok(CoordCommand { input, from, to, logger })
    }
}

fn required<'m>(args: &'m ArgMatches, name: &str) -> ToolkitResult<&'m String> {
    args.get_one::<String>(name)
        .ok_or_else(|| ToolkitError::InvalidInput(format!("Missing --{}", name)))
}

impl<'a> Command for CoordCommand<'a> {
    fn execute(&self) -> ToolkitResult<()> {
        match &self.input {
            CoordInput::Point(point) => {
                let converted = convert(*point, self.from, self.to);
                info!("{} {} -> {} {}", self.from, point, self.to, converted);
                println!("{}", converted);
                self.logger.log(&format!(
                    "Converted {} ({}) to {} ({})",
                    point, self.from.description(), converted, self.to.description()
                ))?;
            },
            CoordInput::File { input, output } => {
                let reader = BufReader::new(File::open(input)?);
                let report = match output {
                    Some(path) => {
                        let mut writer = BufWriter::new(File::create(path)?);
                        let report = convert_lines(reader, &mut writer, self.from, self.to)?;
                        writer.flush()?;
                        info!("Wrote {}", path.display());
                        report
                    },
                    None => {
                        let stdout = io::stdout();
                        let mut writer = stdout.lock();
                        convert_lines(reader, &mut writer, self.from, self.to)?
                    },
                };

                info!("Converted {} coordinates, skipped {} lines", report.converted, report.skipped);
                self.logger.log(&format!(
                    "Converted {} coordinates from {} ({} -> {}), skipped {}",
                    report.converted, input.display(), self.from.description(), self.to.description(), report.skipped
                ))?;
            },
        }

        Ok(())
    }
}
