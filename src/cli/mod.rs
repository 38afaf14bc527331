pub mod actions;

use clap::{Arg, ArgMatches, Command};

/// Parse command line arguments and return ArgMatches.
pub fn parse_args() -> ArgMatches {
    Command::new("siesta")
        .about("Sort non-negative integers by scheduling timer delays proportional to each value (sleep sort)")
        .arg(
            Arg::new("values")
                .long("values")
                .short('v')
                .help("Comma-separated list of non-negative integers to sort")
                .value_name("LIST")
                .required(true),
        )
        .arg(
            Arg::new("delay-unit-ms")
                .long("delay-unit-ms")
                .short('u')
                .help("Milliseconds of delay per input unit (default: 100)")
                .value_name("MS"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .short('j')
                .help("Output one-shot results in JSON format")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches()
}
