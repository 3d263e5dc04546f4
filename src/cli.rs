//! Command-line definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Default file the command summary log is written to
pub const DEFAULT_LOG_FILE: &str = "offlinekit.log";

fn system_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_name("SYSTEM")
        .required(true)
}

/// Build the clap command tree
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("offlinekit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Offline helpers for coordinates, Markdown, subtitles and PDF books")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("File receiving the command log")
                .value_name("FILE")
                .default_value(DEFAULT_LOG_FILE)
                .global(true),
        )
        .subcommand(
            ClapCommand::new("coord")
                .about("Convert coordinates between WGS84, GCJ02 and BD09")
                .arg(
                    Arg::new("point")
                        .help("Coordinate as 'lon,lat'")
                        .value_name("LON,LAT")
                        .allow_hyphen_values(true)
                        .index(1),
                )
                .arg(system_arg("from", "Source system (wgs84, gcj02, bd09)"))
                .arg(system_arg("to", "Target system (wgs84, gcj02, bd09)"))
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("File with one 'lon,lat' per line")
                        .value_name("FILE")
                        .conflicts_with("point"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output file for --input (default: stdout)")
                        .value_name("FILE")
                        .requires("input"),
                ),
        )
        .subcommand(
            ClapCommand::new("merge-md")
                .about("Merge the Markdown files of a directory into one document")
                .arg(
                    Arg::new("dir")
                        .help("Directory holding the Markdown files")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output file name inside the directory")
                        .value_name("NAME")
                        .default_value(crate::markdown::DEFAULT_OUTPUT),
                )
                .arg(
                    Arg::new("recursive")
                        .short('r')
                        .long("recursive")
                        .help("Include subdirectories")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-header")
                        .long("no-header")
                        .help("Do not add a '# file name' header per file")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-separator")
                        .long("no-separator")
                        .help("Do not put '---' between files")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            ClapCommand::new("split-pdf")
                .about("Split a PDF at its top-level bookmarks")
                .arg(
                    Arg::new("input")
                        .help("Input PDF file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("prefix")
                        .short('p')
                        .long("prefix")
                        .help("Prefix for the output file names")
                        .value_name("PREFIX"),
                ),
        )
        .subcommand(
            ClapCommand::new("split-chapters")
                .about("Split a PDF by chapter or section bookmarks")
                .arg(
                    Arg::new("input")
                        .help("Input PDF file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("level")
                        .short('l')
                        .long("level")
                        .help("Split level (chapter or section, also 1 or 2)")
                        .value_name("LEVEL")
                        .default_value("chapter"),
                )
                .arg(
                    Arg::new("levels")
                        .long("levels")
                        .help("TOML file with chapter and section keywords")
                        .value_name("FILE"),
                ),
        )
        .subcommand(
            ClapCommand::new("subtitles")
                .about("Convert chapter directories of subtitles to Markdown")
                .arg(
                    Arg::new("root")
                        .help("Directory with one subdirectory per chapter")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help("Subtitle format (srt or vtt)")
                        .value_name("FORMAT")
                        .default_value("srt"),
                ),
        )
}
