//! Command-line argument definitions

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the clap command for the `lineazi` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("lineazi")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Azimuth of a line toward the side it leans, from endpoint coordinates and heights")
        .arg(
            Arg::new("start")
                .short('s')
                .long("start")
                .help("Start point as 'x,y,height' (x east, y north)")
                .value_name("X,Y,H")
                .allow_hyphen_values(true)
                .required(true),
        )
        .arg(
            Arg::new("end")
                .short('e')
                .long("end")
                .help("End point as 'x,y,height' (x east, y north)")
                .value_name("X,Y,H")
                .allow_hyphen_values(true)
                .required(true),
        )
        .arg(
            Arg::new("round")
                .short('r')
                .long("round")
                .help("Decimal places of the result (defaults to the config value, 0)")
                .value_name("DIGITS")
                .required(false),
        )
        .arg(
            Arg::new("compare-reversed")
                .long("compare-reversed")
                .help("Also compute the azimuth with start and end swapped and report how they relate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print raw bearing and compass sector, enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Append every computed measurement to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML settings file")
                .value_name("FILE")
                .required(false),
        )
}
