use core::{fmt, str::FromStr};

use crate::{
    checksum::{split_frame, trim_line_end, NmeaChecksumCalc},
    constants::NMEA_FIELD_SEPARATOR,
    error::ParserError,
};

/// A line that passed framing and checksum validation.
///
/// Holds the line as received (minus its `\r\n`), e.g.
/// `$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*59`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    raw: String,
    body_end: usize,
    checksum: u8,
}

impl Sentence {
    /// Validates `line` and wraps it.
    pub fn parse(line: &[u8]) -> Result<Self, ParserError> {
        let (body, checksum) = split_frame(line)?;
        let mut calc = NmeaChecksumCalc::new();
        calc.update(body);
        calc.validate_result(checksum)?;
        let raw =
            core::str::from_utf8(trim_line_end(line)).map_err(|_| ParserError::InvalidUtf8)?;
        Ok(Self {
            raw: raw.to_owned(),
            body_end: 1 + body.len(),
            checksum,
        })
    }

    /// The whole sentence, `$` and checksum included
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Everything between `$` and `*`
    pub fn body(&self) -> &str {
        &self.raw[1..self.body_end]
    }

    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// Talker + message id, e.g. `GPRMC` or `PMTK001`
    pub fn message_id(&self) -> &str {
        self.fields_iter().next().unwrap_or_default()
    }

    /// Comma separated fields of the body, message id first. Blank fields
    /// are kept as empty strings so positions are preserved.
    pub fn fields(&self) -> Vec<&str> {
        self.fields_iter().collect()
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.raw.contains(pattern)
    }

    fn fields_iter(&self) -> core::str::Split<'_, char> {
        self.body().split(NMEA_FIELD_SEPARATOR)
    }
}

impl FromStr for Sentence {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.as_bytes())
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
