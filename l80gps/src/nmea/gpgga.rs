use chrono::NaiveTime;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{
    fields::{utc_to_time, Fields},
    FixSentence, NmeaSentence,
};
use crate::error::ParserError;

/// Global positioning system fix data
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Gpgga {
    /// `hhmmss.sss`
    pub utc: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// 0 invalid, 1 GPS fix, 2 DGPS fix, 6 estimated
    pub fix_quality: u8,
    pub satellites_used: u8,
    pub hdop: f64,
    /// Altitude above mean sea level, metres
    pub altitude: f64,
    /// Geoid height above the WGS84 ellipsoid, metres
    pub geoid_separation: f64,
    /// Seconds since the last DGPS update
    pub dgps_age: Option<f64>,
    pub dgps_station_id: Option<u16>,
}

impl Gpgga {
    pub fn time(&self) -> Option<NaiveTime> {
        utc_to_time(self.utc)
    }
}

impl NmeaSentence for Gpgga {
    const MESSAGE_ID: &'static str = "GPGGA";

    fn decode_fields(raw: &[&str]) -> Result<Self, ParserError> {
        let f = Fields::exact(Self::MESSAGE_ID, raw, 15, "15")?;
        Ok(Self {
            utc: f.number(1, "utc")?,
            latitude: f.coordinate(2, "latitude")?,
            longitude: f.coordinate(4, "longitude")?,
            fix_quality: f.number(6, "fix")?,
            satellites_used: f.number(7, "number_of_sv")?,
            hdop: f.number(8, "hdop")?,
            altitude: f.number(9, "altitude")?,
            geoid_separation: f.number(11, "geoid_separation")?,
            dgps_age: f.optional(13, "dgps_age")?,
            dgps_station_id: f.optional(14, "dgps_station_id")?,
        })
    }
}

impl FixSentence for Gpgga {
    fn has_fix(&self) -> bool {
        self.fix_quality != 0
    }
}
