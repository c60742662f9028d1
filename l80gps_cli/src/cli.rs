use std::time::Duration;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use l80gps::{constants::DEFAULT_BAUD_RATE, AckPolicy, GpsConfig, LogRange};

pub fn command() -> Command {
    Command::new("l80gps")
        .version(clap::crate_version!())
        .about("Talks to a Quectel L80 GPS receiver over a serial port")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("port")
                .value_name("port")
                .short('p')
                .long("port")
                .required(true)
                .help("Serial port to open, e.g. /dev/ttyAMA0"),
        )
        .arg(
            Arg::new("baud")
                .value_name("baud")
                .short('s')
                .long("baud")
                .default_value("9600")
                .value_parser(value_parser!(u32))
                .help("Baud rate of the port to open"),
        )
        .arg(
            Arg::new("timeout-ms")
                .value_name("ms")
                .long("timeout-ms")
                .default_value("500")
                .value_parser(value_parser!(u64))
                .help("How long to wait for each line before giving up"),
        )
        .arg(
            Arg::new("attempts")
                .value_name("n")
                .long("attempts")
                .default_value("5")
                .value_parser(value_parser!(usize))
                .help("LOCUS transfer attempts before failing"),
        )
        .arg(
            Arg::new("ack-locus")
                .long("ack-locus")
                .action(ArgAction::SetTrue)
                .help("Wait for the receiver to acknowledge LOCUS start/stop/erase"),
        )
        .subcommand(
            Command::new("watch")
                .about("Print latitude and longitude from GPGLL on every poll")
                .arg(
                    Arg::new("interval-ms")
                        .value_name("ms")
                        .long("interval-ms")
                        .default_value("1000")
                        .value_parser(value_parser!(u64))
                        .help("Pause between polls"),
                ),
        )
        .subcommand(
            Command::new("sentence")
                .about("Print the next sentence with the given message id as JSON")
                .arg(
                    Arg::new("id")
                        .value_name("ID")
                        .required(true)
                        .value_parser(l80gps::nmea::supported_message_ids().collect::<Vec<_>>())
                        .help("Message id, e.g. GPRMC"),
                ),
        )
        .subcommand(Command::new("standby").about("Enter standby until the next UART byte"))
        .subcommand(Command::new("sleep").about("Enter periodic backup mode"))
        .subcommand(Command::new("always-locate").about("Enter AlwaysLocate mode"))
        .subcommand(Command::new("normal").about("Leave periodic and AlwaysLocate modes"))
        .subcommand(
            Command::new("locus")
                .about("LOCUS flash logger")
                .subcommand_required(true)
                .subcommand(Command::new("status").about("Print the logger status as JSON"))
                .subcommand(Command::new("start").about("Start logging"))
                .subcommand(Command::new("stop").about("Stop logging"))
                .subcommand(Command::new("erase").about("Erase the flash log"))
                .subcommand(
                    Command::new("dump")
                        .about("Dump the log, one JSON record per line")
                        .arg(
                            Arg::new("raw")
                                .long("raw")
                                .action(ArgAction::SetTrue)
                                .help("Write the undecoded log bytes to stdout"),
                        )
                        .arg(
                            Arg::new("full")
                                .long("full")
                                .action(ArgAction::SetTrue)
                                .help("Read the whole flash, not only the sectors in use"),
                        ),
                ),
        )
}

/// Serial port settings from the global options
pub struct PortOptions {
    pub port: String,
    pub baud: u32,
}

impl PortOptions {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let port = matches
            .get_one::<String>("port")
            .cloned()
            .context("missing required '--port'")?;
        let baud = matches
            .get_one::<u32>("baud")
            .copied()
            .unwrap_or(DEFAULT_BAUD_RATE);
        Ok(Self { port, baud })
    }
}

pub fn gps_config(matches: &ArgMatches) -> GpsConfig {
    let mut config = GpsConfig::default();
    if let Some(ms) = matches.get_one::<u64>("timeout-ms") {
        config = config.with_read_timeout(Duration::from_millis(*ms));
    }
    if let Some(attempts) = matches.get_one::<usize>("attempts") {
        config = config.with_locus_attempts(*attempts);
    }
    if matches.get_flag("ack-locus") {
        config = config.with_locus_ack(AckPolicy::Await);
    }
    config
}

pub fn log_range(matches: &ArgMatches) -> LogRange {
    if matches.get_flag("full") {
        LogRange::Full
    } else {
        LogRange::Partial
    }
}
