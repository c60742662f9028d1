use chrono::NaiveTime;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{
    fields::{utc_to_time, Fields},
    types::{PositionMode, Status},
    FixSentence, NmeaSentence,
};
use crate::error::ParserError;

/// Geographic position, latitude and longitude
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Gpgll {
    pub latitude: f64,
    pub longitude: f64,
    /// `hhmmss.sss`
    pub utc: f64,
    pub status: Status,
    pub mode: PositionMode,
}

impl Gpgll {
    pub fn time(&self) -> Option<NaiveTime> {
        utc_to_time(self.utc)
    }
}

impl NmeaSentence for Gpgll {
    const MESSAGE_ID: &'static str = "GPGLL";

    fn decode_fields(raw: &[&str]) -> Result<Self, ParserError> {
        let f = Fields::exact(Self::MESSAGE_ID, raw, 8, "8")?;
        Ok(Self {
            latitude: f.coordinate(1, "latitude")?,
            longitude: f.coordinate(3, "longitude")?,
            utc: f.number(5, "utc")?,
            status: Status::from_field(f.text(6)),
            mode: PositionMode::from_char(f.char(7)),
        })
    }
}

impl FixSentence for Gpgll {
    fn has_fix(&self) -> bool {
        self.status == Status::Valid
    }
}
