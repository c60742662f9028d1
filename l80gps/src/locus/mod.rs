//! LOCUS flash log: transfer session, retries and record decoding.
//!
//! A transfer is started with a query-log command; the receiver answers
//! with a start marker, numbered data packets carrying the log as hex words
//! and an end marker:
//!
//! ```text
//! $PMTKLOX,0,3*5A
//! $PMTKLOX,1,0,0100010B,1F000000,...*2E
//! $PMTKLOX,1,1,...
//! $PMTKLOX,2*47
//! ```
//!
//! Packets go missing on a busy line, so a session that times out or sees a
//! packet out of order is thrown away and the whole query sent again.

mod float;
mod packet;
mod record;

use std::time::Duration;

use log::{debug, trace, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use self::{
    float::decode_float,
    packet::LoxPacket,
    record::{decode_log, decode_record, LocusRecord},
};
use crate::{
    constants::{LOCUS_START_PATTERN, LOCUS_TRANSFER_PATTERN},
    error::{Error, Result},
    pmtk::{send_command, PmtkCommand},
    reader::read_matching,
    transport::Transport,
};

/// How much of the flash a query asks for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LogRange {
    /// Only the sectors in use
    #[default]
    Partial,
    /// The whole flash, erased sectors included
    Full,
}

impl LogRange {
    pub const fn command(self) -> PmtkCommand {
        match self {
            LogRange::Partial => PmtkCommand::LocusQueryPartialLog,
            LogRange::Full => PmtkCommand::LocusQueryFullLog,
        }
    }
}

/// Runs one transfer session and returns the raw log bytes.
///
/// Fails with [`Error::PacketNotFound`] when any marker or packet does not
/// arrive in time and with [`Error::LocusOrder`] when a data packet index is
/// not the next one expected.
pub fn query_log_once<T: Transport + ?Sized>(
    transport: &mut T,
    range: LogRange,
    timeout: Duration,
) -> Result<Vec<u8>> {
    send_command(transport, range.command())?;

    let start = read_matching(transport, LOCUS_START_PATTERN, timeout)?;
    match LoxPacket::parse(&start)? {
        LoxPacket::Start { declared } => debug!("receiver announces {declared} LOCUS packets"),
        other => trace!("unexpected {other:?} for start marker"),
    }

    let mut data = Vec::new();
    let mut expected = 0;
    loop {
        let sentence = read_matching(transport, LOCUS_TRANSFER_PATTERN, timeout)?;
        match LoxPacket::parse(&sentence)? {
            LoxPacket::Data { index, bytes } => {
                if index != expected {
                    return Err(Error::LocusOrder {
                        expected,
                        got: index,
                    });
                }
                trace!("LOCUS packet {index}, {} bytes", bytes.len());
                data.extend_from_slice(&bytes);
                expected += 1;
            },
            LoxPacket::End => {
                debug!("LOCUS transfer done, {expected} packets, {} bytes", data.len());
                return Ok(data);
            },
            LoxPacket::Start { declared } => trace!("ignore repeated start marker ({declared})"),
        }
    }
}

/// Retrieves the raw log, running up to `max_attempts` sessions.
///
/// Only timeouts and out-of-order packets are retried. Anything else, an
/// I/O error or a malformed packet, is returned as is. Running out of
/// attempts gives [`Error::LocusQuery`].
pub fn fetch_log<T: Transport + ?Sized>(
    transport: &mut T,
    range: LogRange,
    timeout: Duration,
    max_attempts: usize,
) -> Result<Vec<u8>> {
    for attempt in 1..=max_attempts {
        match query_log_once(transport, range, timeout) {
            Ok(data) => return Ok(data),
            Err(e @ (Error::PacketNotFound { .. } | Error::LocusOrder { .. })) => {
                warn!("LOCUS query attempt {attempt}/{max_attempts} failed: {e}");
            },
            Err(e) => return Err(e),
        }
    }
    Err(Error::LocusQuery {
        attempts: max_attempts,
    })
}
