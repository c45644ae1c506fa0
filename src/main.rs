use std::process;
use env_logger::Env;
use log::error;

use lineazi::cli::build_cli;
use lineazi::commands::{CommandFactory, LineAziCommandFactory};
use lineazi::config::Settings;
use lineazi::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    // Settings load before logging is up, so a failure here only reaches stderr
    let settings = match matches.get_one::<String>("config") {
        Some(path) => match Settings::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: failed to load settings from {}: {}", path, e);
                process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let verbose = matches.get_flag("verbose") || settings.verbose;
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let log_file = matches.get_one::<String>("log-file")
        .map(String::as_str)
        .or(settings.log_file.as_deref());
    let logger = match Logger::from_option(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let factory = LineAziCommandFactory::new();

    let command_result = factory.create_command(&matches, &settings, &logger);
    match command_result {
        Ok(command) => match command.execute() {
            Ok(output) => println!("{}", output),
            Err(e) => {
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
