use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::Serialize;

use super::{fields::Fields, NmeaSentence};
use crate::error::ParserError;

bitflags! {
    /// LOCUS logging mode, sent as hex digits
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(Serialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct LocusMode: u8 {
        const ALWAYS_LOCATE = 1 << 0;
        const FIX_ONLY = 1 << 1;
        const NORMAL = 1 << 2;
        const INTERVAL = 1 << 3;
        const DISTANCE = 1 << 4;
        const SPEED = 1 << 5;
    }
}

/// What the logger does once flash is full
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum LogType {
    Overlap,
    FullStop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum LoggerStatus {
    Logging,
    Stopped,
}

/// LOCUS logger status, answer to the query-status command
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PmtkLog {
    pub serial: u32,
    pub log_type: LogType,
    pub mode: LocusMode,
    pub content: u32,
    /// Seconds
    pub interval: u32,
    /// Meters
    pub distance: u32,
    /// km/h
    pub speed: u32,
    pub status: LoggerStatus,
    /// Records in flash
    pub number: u32,
    /// Flash usage, 0..=100
    pub percent: u8,
}

impl NmeaSentence for PmtkLog {
    const MESSAGE_ID: &'static str = "PMTKLOG";

    fn decode_fields(raw: &[&str]) -> Result<Self, ParserError> {
        let f = Fields::exact(Self::MESSAGE_ID, raw, 11, "11")?;
        let log_type = match f.number::<u8>(2, "type")? {
            0 => LogType::Overlap,
            1 => LogType::FullStop,
            _ => return Err(f.invalid("type")),
        };
        let status = match f.number::<u8>(8, "status")? {
            0 => LoggerStatus::Logging,
            1 => LoggerStatus::Stopped,
            _ => return Err(f.invalid("status")),
        };
        Ok(Self {
            serial: f.number(1, "serial")?,
            log_type,
            mode: LocusMode::from_bits_retain(f.hex_u8(3, "mode")?),
            content: f.number(4, "content")?,
            interval: f.number(5, "interval")?,
            distance: f.number(6, "distance")?,
            speed: f.number(7, "speed")?,
            status,
            number: f.number(9, "number")?,
            percent: f.number(10, "percent")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sentence;

    #[test]
    fn test_decode_status() {
        let sentence: Sentence = "$PMTKLOG,456,0,11,31,2,0,0,0,3769,46*48".parse().unwrap();
        let log = PmtkLog::decode(&sentence).unwrap();
        assert_eq!(456, log.serial);
        assert_eq!(LogType::Overlap, log.log_type);
        // "11" is hex
        assert_eq!(0x11, log.mode.bits());
        assert_eq!(LocusMode::ALWAYS_LOCATE | LocusMode::DISTANCE, log.mode);
        assert_eq!(31, log.content);
        assert_eq!(2, log.interval);
        assert_eq!(0, log.distance);
        assert_eq!(0, log.speed);
        assert_eq!(LoggerStatus::Logging, log.status);
        assert_eq!(3769, log.number);
        assert_eq!(46, log.percent);
    }

    #[test]
    fn test_decode_stopped_full_stop() {
        let log = PmtkLog::decode_fields(&[
            "PMTKLOG", "1", "1", "4", "31", "15", "0", "0", "1", "0", "0",
        ])
        .unwrap();
        assert_eq!(LogType::FullStop, log.log_type);
        assert_eq!(LoggerStatus::Stopped, log.status);
        assert_eq!(LocusMode::NORMAL, log.mode);
    }

    #[test]
    fn test_decode_bad_mode_digits() {
        assert_eq!(
            Err(ParserError::InvalidField {
                message_id: "PMTKLOG",
                field: "mode"
            }),
            PmtkLog::decode_fields(&[
                "PMTKLOG", "1", "0", "XY", "31", "15", "0", "0", "0", "0", "0",
            ])
        );
    }
}
