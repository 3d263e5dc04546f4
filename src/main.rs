use std::path::Path;
use std::process;
use log::{error, Level};

use offlinekit::cli::{build_cli, DEFAULT_LOG_FILE};
use offlinekit::commands::{CommandFactory, OfflinekitCommandFactory};
use offlinekit::utils::logger::Logger;

/// `offlinekit.log` -> `offlinekit-global.log`, next to the command log
fn global_log_path(log_file: &str) -> String {
    let path = Path::new(log_file);
    let stem = path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "offlinekit".to_string());
    path.with_file_name(format!("{}-global.log", stem))
        .to_string_lossy()
        .into_owned()
}

fn main() {
    let matches = build_cli().get_matches();

    let log_file = matches.get_one::<String>("log-file")
        .map(String::as_str)
        .unwrap_or(DEFAULT_LOG_FILE);
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let console_level = if matches.get_flag("verbose") { Level::Debug } else { Level::Info };
    if let Err(e) = Logger::init_global_logger(global_log_path(log_file), console_level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = OfflinekitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
