use std::io;

use thiserror::Error;

/// Error that possible during sentence parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    #[error("sentence does not start with '$'")]
    MissingSyncChar,
    #[error("sentence must contain exactly one '*', found {found}")]
    InvalidDelimiters { found: usize },
    #[error("checksum suffix {0:?} is not two hex digits")]
    InvalidChecksumDigits(String),
    #[error("not valid sentence checksum, expect {expect:02X}, got {got:02X}")]
    InvalidChecksum { expect: u8, got: u8 },
    #[error("sentence body is not valid UTF-8")]
    InvalidUtf8,
    #[error("invalid field count for {message_id}, expect {expect}, got {got}")]
    InvalidFieldCount {
        message_id: &'static str,
        expect: &'static str,
        got: usize,
    },
    #[error("invalid field {field} of {message_id}")]
    InvalidField {
        message_id: &'static str,
        field: &'static str,
    },
    #[error("no decoder for message id {0:?}")]
    UnknownMessage(String),
}

/// Failure reported by a PMTK001 acknowledgement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AckError {
    #[error("invalid packet")]
    InvalidPacket,
    #[error("unsupported packet type")]
    Unsupported,
    #[error("valid packet but action failed")]
    ActionFailed,
    #[error("unknown flag {0} in ack")]
    UnknownFlag(u8),
}

/// Why a single LOCUS record was left out of a decoded log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record checksum failed, expect {expect:02X}, got {got:02X}")]
    ChecksumFailed { expect: u8, got: u8 },
    #[error("empty flash slot")]
    EmptySlot,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed sentence: {0}")]
    Malformed(#[from] ParserError),

    #[error("timed out before valid '{pattern}'")]
    PacketNotFound { pattern: String },

    #[error("{message_id} reports no valid fix")]
    DataInvalid { message_id: &'static str },

    #[error("PMTK command rejected: {0}")]
    Ack(#[from] AckError),

    #[error("LOCUS packet out of order, expect index {expected}, got {got}")]
    LocusOrder { expected: usize, got: usize },

    #[error("LOCUS query failed, max number of attempts ({attempts}) reached")]
    LocusQuery { attempts: usize },

    #[error("IO: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
