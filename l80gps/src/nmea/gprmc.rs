use chrono::{NaiveDate, NaiveTime};

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{
    fields::{utc_to_time, Fields},
    types::{PositionMode, Status},
    FixSentence, NmeaSentence,
};
use crate::error::ParserError;

/// Recommended minimum specific GNSS data
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Gprmc {
    /// `hhmmss.sss`
    pub utc: f64,
    pub status: Status,
    /// Decimal degrees, south negative
    pub latitude: f64,
    /// Decimal degrees, west negative
    pub longitude: f64,
    /// Speed over ground in knots
    pub speed: f64,
    /// Course over ground in degrees
    pub course: f64,
    pub date: Option<NaiveDate>,
    /// Degrees, west negative
    pub magnetic_variation: f64,
    pub mode: PositionMode,
}

impl Gprmc {
    pub fn time(&self) -> Option<NaiveTime> {
        utc_to_time(self.utc)
    }
}

impl NmeaSentence for Gprmc {
    const MESSAGE_ID: &'static str = "GPRMC";

    fn decode_fields(raw: &[&str]) -> Result<Self, ParserError> {
        let f = Fields::exact(Self::MESSAGE_ID, raw, 13, "13")?;
        let variation: f64 = f.number(10, "mag_var")?;
        Ok(Self {
            utc: f.number(1, "utc")?,
            status: Status::from_field(f.text(2)),
            latitude: f.coordinate(3, "latitude")?,
            longitude: f.coordinate(5, "longitude")?,
            speed: f.number(7, "speed")?,
            course: f.number(8, "cog")?,
            date: f.date(9, "date")?,
            magnetic_variation: if f.text(11).eq_ignore_ascii_case("w") {
                -variation
            } else {
                variation
            },
            mode: PositionMode::from_char(f.char(12)),
        })
    }
}

impl FixSentence for Gprmc {
    fn has_fix(&self) -> bool {
        self.status == Status::Valid
    }
}
