//! PMTK commands and their PMTK001 acknowledgements.

use std::time::Duration;

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::PMTK_ACK_ID,
    error::{ParserError, Result},
    nmea::{NmeaSentence, PmtkAck},
    reader::read_matching,
    transport::Transport,
};

/// The PMTK commands this driver sends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PmtkCommand {
    /// Enter standby until the next byte arrives on the UART
    Standby,
    /// Leave any periodic or AlwaysLocate mode
    PeriodicNormal,
    AlwaysLocate,
    /// Periodic backup mode: 3 s run, 12 s sleep, 18 s second run, 72 s
    /// second sleep
    PeriodicSleep,
    LocusQueryStatus,
    LocusErase,
    LocusStop,
    LocusStart,
    LocusQueryFullLog,
    LocusQueryPartialLog,
}

impl PmtkCommand {
    pub const ALL: [PmtkCommand; 10] = [
        PmtkCommand::Standby,
        PmtkCommand::PeriodicNormal,
        PmtkCommand::AlwaysLocate,
        PmtkCommand::PeriodicSleep,
        PmtkCommand::LocusQueryStatus,
        PmtkCommand::LocusErase,
        PmtkCommand::LocusStop,
        PmtkCommand::LocusStart,
        PmtkCommand::LocusQueryFullLog,
        PmtkCommand::LocusQueryPartialLog,
    ];

    /// The bytes written to the receiver, `\r\n` included
    pub const fn as_str(self) -> &'static str {
        match self {
            PmtkCommand::Standby => "$PMTK161,0*28\r\n",
            PmtkCommand::PeriodicNormal => "$PMTK225,0*2B\r\n",
            PmtkCommand::AlwaysLocate => "$PMTK225,8*23\r\n",
            PmtkCommand::PeriodicSleep => "$PMTK225,2,3000,12000,18000,72000*15\r\n",
            PmtkCommand::LocusQueryStatus => "$PMTK183*38\r\n",
            PmtkCommand::LocusErase => "$PMTK184,1*22\r\n",
            PmtkCommand::LocusStop => "$PMTK185,1*23\r\n",
            PmtkCommand::LocusStart => "$PMTK185,0*22\r\n",
            PmtkCommand::LocusQueryFullLog => "$PMTK622,0*28\r\n",
            PmtkCommand::LocusQueryPartialLog => "$PMTK622,1*29\r\n",
        }
    }

    /// The sentence without its line ending, e.g. `$PMTK161,0*28`
    pub fn sentence(self) -> &'static str {
        self.as_str().trim_end()
    }

    /// Command number echoed back in the PMTK001 acknowledgement
    pub const fn command_id(self) -> u16 {
        match self {
            PmtkCommand::Standby => 161,
            PmtkCommand::PeriodicNormal
            | PmtkCommand::AlwaysLocate
            | PmtkCommand::PeriodicSleep => 225,
            PmtkCommand::LocusQueryStatus => 183,
            PmtkCommand::LocusErase => 184,
            PmtkCommand::LocusStop | PmtkCommand::LocusStart => 185,
            PmtkCommand::LocusQueryFullLog | PmtkCommand::LocusQueryPartialLog => 622,
        }
    }
}

/// Whether LOCUS start/stop/erase wait for their acknowledgement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AckPolicy {
    /// Write the command and return
    #[default]
    FireAndForget,
    /// Write the command and require a successful PMTK001
    Await,
}

/// Anything that can be written to the receiver as a PMTK command.
///
/// Implemented for [`PmtkCommand`] and for framed command text, such as
/// the output of [`with_checksum`](crate::with_checksum):
///
/// ```
/// use l80gps::{with_checksum, PmtkMessage};
///
/// let cmd = with_checksum("PMTK220,1000");
/// assert_eq!("$PMTK220,1000*1F\r\n", cmd.wire());
/// assert_eq!(Some(220), cmd.ack_id());
/// ```
pub trait PmtkMessage {
    /// Complete sentence as written, `$` to checksum, line ending optional
    fn wire(&self) -> &str;

    /// Command number the receiver echoes in PMTK001, `None` if the text
    /// does not start with `$PMTK<digits>`
    fn ack_id(&self) -> Option<u16> {
        parse_command_id(self.wire())
    }
}

impl PmtkMessage for PmtkCommand {
    fn wire(&self) -> &str {
        self.as_str()
    }

    fn ack_id(&self) -> Option<u16> {
        Some(self.command_id())
    }
}

impl PmtkMessage for str {
    fn wire(&self) -> &str {
        self
    }
}

impl PmtkMessage for String {
    fn wire(&self) -> &str {
        self
    }
}

impl<C: PmtkMessage + ?Sized> PmtkMessage for &C {
    fn wire(&self) -> &str {
        (**self).wire()
    }

    fn ack_id(&self) -> Option<u16> {
        (**self).ack_id()
    }
}

fn parse_command_id(text: &str) -> Option<u16> {
    let digits = text.strip_prefix("$PMTK")?;
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    match digits.as_bytes().get(end) {
        Some(b',' | b'*') => digits[..end].parse().ok(),
        _ => None,
    }
}

/// Writes `command` to the receiver. No response is read.
///
/// Text without a line ending gets `\r\n` appended.
pub fn send_command<T, C>(transport: &mut T, command: C) -> Result<()>
where
    T: Transport + ?Sized,
    C: PmtkMessage,
{
    let wire = command.wire();
    debug!("send {}", wire.trim_end());
    transport.write_all(wire.as_bytes())?;
    if !wire.ends_with('\n') {
        transport.write_all(b"\r\n")?;
    }
    Ok(())
}

/// Writes `command` and waits for its PMTK001.
///
/// Acknowledgements for other command ids are skipped, the receiver may still
/// be answering something sent earlier. A flag other than success becomes
/// [`Error::Ack`](crate::Error::Ack). Text with no command id is rejected
/// before anything is written.
pub fn send_and_ack<T, C>(transport: &mut T, command: C, timeout: Duration) -> Result<()>
where
    T: Transport + ?Sized,
    C: PmtkMessage,
{
    let command_id = command.ack_id().ok_or(ParserError::InvalidField {
        message_id: "PMTK",
        field: "command id",
    })?;
    send_command(transport, &command)?;
    loop {
        let sentence = read_matching(transport, PMTK_ACK_ID, timeout)?;
        let ack = PmtkAck::decode(&sentence)?;
        if ack.command != command_id {
            warn!(
                "skip ack for PMTK{} while waiting for PMTK{}",
                ack.command, command_id
            );
            continue;
        }
        debug!("PMTK{} acknowledged: {:?}", command_id, ack.flag);
        return Ok(ack.flag.into_result()?);
    }
}
