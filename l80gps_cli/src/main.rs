use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use anyhow::{anyhow, Context, Result};
use chrono::{NaiveTime, Utc};
use clap::ArgMatches;
use l80gps::{Error, Gps, SerialTransport, Transport};
use log::{info, warn};

mod cli;

const LOG_ENV: &str = "L80GPS_LOG";

const DEFAULT_FILTER: &str = "info";

/// `RUST_LOG` wins over `L80GPS_LOG`; blank values count as unset
fn log_filter(rust_log: Option<String>, fallback: Option<String>) -> String {
    rust_log
        .into_iter()
        .chain(fallback)
        .find(|filter| !filter.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

fn init_logging() {
    let filter = log_filter(std::env::var("RUST_LOG").ok(), std::env::var(LOG_ENV).ok());
    env_logger::Builder::new().parse_filters(&filter).init();
}

fn main() -> Result<()> {
    init_logging();
    let matches = cli::command().get_matches();

    let port = cli::PortOptions::from_matches(&matches)?;
    let transport = SerialTransport::open(&port.port, port.baud)
        .with_context(|| format!("Failed to open \"{}\"", port.port))?;
    info!("Opened {} at {} baud", port.port, port.baud);
    let mut gps = Gps::with_config(transport, cli::gps_config(&matches));

    match matches.subcommand() {
        Some(("watch", sub)) => {
            let interval = sub.get_one::<u64>("interval-ms").copied().unwrap_or(1000);
            watch(&mut gps, Duration::from_millis(interval))
        },
        Some(("sentence", sub)) => {
            let id = sub
                .get_one::<String>("id")
                .context("missing message id")?;
            let record = gps
                .get_sentence(id)
                .with_context(|| format!("Could not read {id}"))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        },
        Some(("standby", _)) => gps.standby().context("Could not enter standby"),
        Some(("sleep", _)) => gps.sleep().context("Could not enter periodic sleep"),
        Some(("always-locate", _)) => gps
            .always_locate()
            .context("Could not enter AlwaysLocate mode"),
        Some(("normal", _)) => gps
            .set_periodic_normal()
            .context("Could not return to normal mode"),
        Some(("locus", sub)) => locus(&mut gps, sub),
        Some((other, _)) => Err(anyhow!("unknown subcommand '{other}'")),
        None => Err(anyhow!("no subcommand given")),
    }
}

fn watch<T: Transport>(gps: &mut Gps<T>, interval: Duration) -> Result<()> {
    loop {
        match gps.get_gpgll() {
            Ok(gll) => {
                let time = gll
                    .time()
                    .map_or_else(|| "-".to_string(), |t: NaiveTime| t.to_string());
                println!("time:      {time}");
                println!("latitude:  {}", gll.latitude);
                println!("longitude: {}", gll.longitude);
                println!();
            },
            Err(Error::DataInvalid { .. }) => println!("no fix ({})", Utc::now().format("%T")),
            Err(e @ (Error::PacketNotFound { .. } | Error::Malformed(_))) => warn!("{e}"),
            Err(e) => return Err(e).context("Reading GPGLL failed"),
        }
        thread::sleep(interval);
    }
}

fn locus<T: Transport>(gps: &mut Gps<T>, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("status", _)) => {
            let status = gps.locus_query().context("Could not query LOCUS status")?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        },
        Some(("start", _)) => gps.locus_start().context("Could not start the logger")?,
        Some(("stop", _)) => gps.locus_stop().context("Could not stop the logger")?,
        Some(("erase", _)) => gps.locus_erase().context("Could not erase the log")?,
        Some(("dump", sub)) => {
            let range = cli::log_range(sub);
            if sub.get_flag("raw") {
                let data = gps
                    .locus_query_data(range)
                    .context("Could not read the LOCUS log")?;
                info!("{} bytes", data.len());
                let mut stdout = io::stdout().lock();
                stdout.write_all(&data)?;
                stdout.flush()?;
            } else {
                let records = gps
                    .locus_records(range)
                    .context("Could not read the LOCUS log")?;
                info!("{} records", records.len());
                for record in &records {
                    println!("{}", serde_json::to_string(record)?);
                }
            }
        },
        Some((other, _)) => return Err(anyhow!("unknown locus subcommand '{other}'")),
        None => return Err(anyhow!("no locus subcommand given")),
    }
    Ok(())
}
