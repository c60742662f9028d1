//! # l80gps
//!
//! Pure-rust driver for the Quectel L80 GPS receiver (MediaTek MT3339): the
//! NMEA-0183 sentences it streams, the PMTK command/acknowledgement protocol
//! and the LOCUS flash logger.
//!
//! The driver is synchronous and talks through anything implementing
//! [`Transport`]. With the `serial` feature, [`SerialTransport`] opens a
//! serial port at 9600 8N1. An example command line tool is in the
//! `l80gps_cli` crate of this workspace.
//!
//! Reading sentences
//! =================
//!
//! The receiver streams a batch of sentences every second. The accessors on
//! [`Gps`] scan the stream for the next valid sentence of the requested kind
//! and decode it:
//! ```no_run
//! # #[cfg(feature = "serial")]
//! # fn main() -> l80gps::Result<()> {
//! use l80gps::{Gps, SerialTransport};
//!
//! let mut gps = Gps::new(SerialTransport::open("/dev/ttyAMA0", 9600)?);
//! let gll = gps.get_gpgll()?;
//! println!("{} {}", gll.latitude, gll.longitude);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "serial"))]
//! # fn main() {}
//! ```
//! Position accessors fail with [`Error::DataInvalid`] while the receiver
//! has no fix.
//!
//! Decoding without a device
//! =========================
//!
//! Sentences can be validated and decoded on their own:
//! ```
//! use l80gps::{nmea, Sentence, SentenceRecord};
//!
//! let sentence: Sentence = "$GPTXT,01,01,02,ANTSTATUS=OPEN*2B".parse().unwrap();
//! match nmea::decode(&sentence).unwrap() {
//!     SentenceRecord::Gptxt(txt) => assert_eq!("ANTSTATUS=OPEN", txt.text),
//!     other => panic!("{:?}", other),
//! }
//! ```
//!
//! LOCUS
//! =====
//!
//! [`Gps::locus_records`] dumps the flash log and decodes it into
//! [`LocusRecord`]s. Transfers over a busy line drop packets now and then; a
//! failed transfer is restarted up to [`GpsConfig::locus_attempts`] times.
//! Raw dumps can be decoded later with [`locus::decode_log`].

pub mod checksum;
mod config;
pub mod constants;
mod coords;
mod device;
mod error;
pub mod locus;
pub mod nmea;
pub mod pmtk;
mod reader;
mod sentence;
mod transport;

#[cfg(feature = "serial")]
pub use crate::transport::SerialTransport;
pub use crate::{
    checksum::{compute_checksum, is_valid, with_checksum, NmeaChecksumCalc},
    config::GpsConfig,
    coords::dm2d,
    device::Gps,
    error::{AckError, Error, ParserError, RecordError, Result},
    locus::{decode_log, decode_record, LocusRecord, LogRange},
    nmea::{NmeaSentence, SentenceRecord},
    pmtk::{AckPolicy, PmtkCommand, PmtkMessage},
    reader::read_matching,
    sentence::Sentence,
    transport::Transport,
};
