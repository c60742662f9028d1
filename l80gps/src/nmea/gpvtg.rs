#[cfg(feature = "serde")]
use serde::Serialize;

use super::{fields::Fields, types::PositionMode, NmeaSentence};
use crate::error::ParserError;

/// Course over ground and ground speed
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Gpvtg {
    /// Course relative to true north, degrees
    pub course_true: f64,
    /// Course relative to magnetic north, degrees
    pub course_magnetic: f64,
    pub speed_knots: f64,
    pub speed_kmh: f64,
    pub mode: PositionMode,
}

impl NmeaSentence for Gpvtg {
    const MESSAGE_ID: &'static str = "GPVTG";

    fn decode_fields(raw: &[&str]) -> Result<Self, ParserError> {
        let f = Fields::exact(Self::MESSAGE_ID, raw, 10, "10")?;
        Ok(Self {
            course_true: f.number(1, "cogt")?,
            course_magnetic: f.number(3, "cogm")?,
            speed_knots: f.number(5, "speedn")?,
            speed_kmh: f.number(7, "speedk")?,
            mode: PositionMode::from_char(f.char(9)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sentence;

    #[test]
    fn test_decode() {
        let sentence: Sentence = "$GPVTG,0.0,T,,M,0.0,N,0.1,K,A*0C".parse().unwrap();
        let vtg = Gpvtg::decode(&sentence).unwrap();
        assert_eq!(
            Gpvtg {
                course_true: 0.0,
                course_magnetic: 0.0,
                speed_knots: 0.0,
                speed_kmh: 0.1,
                mode: PositionMode::Autonomous,
            },
            vtg
        );
    }

    #[test]
    fn test_decode_bad_speed() {
        assert_eq!(
            Err(ParserError::InvalidField {
                message_id: "GPVTG",
                field: "speedk"
            }),
            Gpvtg::decode_fields(&["GPVTG", "0.0", "T", "", "M", "0.0", "N", "fast", "K", "A"])
        );
    }
}
