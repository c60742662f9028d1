use core::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use num_traits::Zero;

use crate::{coords::dm2d, error::ParserError};

/// Positional access to the fields of one sentence, message id at index 0.
///
/// Every accessor reports failures against the message id and a field
/// name, so a malformed sentence says which field was wrong.
pub(crate) struct Fields<'a, 'f> {
    message_id: &'static str,
    fields: &'f [&'a str],
}

impl<'a, 'f> Fields<'a, 'f> {
    /// Checks the message id and that exactly `expect` fields are present.
    pub(crate) fn exact(
        message_id: &'static str,
        fields: &'f [&'a str],
        expect: usize,
        expect_str: &'static str,
    ) -> Result<Self, ParserError> {
        Self::within(message_id, fields, expect..=expect, expect_str)
    }

    /// Checks the message id and that the field count lies in `range`.
    pub(crate) fn within(
        message_id: &'static str,
        fields: &'f [&'a str],
        range: core::ops::RangeInclusive<usize>,
        expect_str: &'static str,
    ) -> Result<Self, ParserError> {
        match fields.first() {
            Some(id) if *id == message_id => {},
            Some(id) => return Err(ParserError::UnknownMessage((*id).to_owned())),
            None => return Err(ParserError::UnknownMessage(String::new())),
        }
        if !range.contains(&fields.len()) {
            return Err(ParserError::InvalidFieldCount {
                message_id,
                expect: expect_str,
                got: fields.len(),
            });
        }
        Ok(Self { message_id, fields })
    }

    pub(crate) fn len(&self) -> usize {
        self.fields.len()
    }

    /// Raw text of field `idx`, blank when the sentence is shorter
    pub(crate) fn text(&self, idx: usize) -> &'a str {
        self.fields.get(idx).copied().unwrap_or_default()
    }

    /// A number that may be blank before the first fix; blank reads as zero.
    pub(crate) fn number<T: FromStr + Zero>(
        &self,
        idx: usize,
        field: &'static str,
    ) -> Result<T, ParserError> {
        Ok(self.optional(idx, field)?.unwrap_or_else(T::zero))
    }

    /// A number where blank means "not reported".
    pub(crate) fn optional<T: FromStr>(
        &self,
        idx: usize,
        field: &'static str,
    ) -> Result<Option<T>, ParserError> {
        let text = self.text(idx).trim();
        if text.is_empty() {
            return Ok(None);
        }
        text.parse().map(Some).map_err(|_| self.invalid(field))
    }

    /// A `dddmm.mmmm` value at `idx` with its hemisphere letter at `idx + 1`,
    /// converted to signed decimal degrees.
    pub(crate) fn coordinate(&self, idx: usize, field: &'static str) -> Result<f64, ParserError> {
        let value: f64 = self.number(idx, field)?;
        Ok(dm2d(value, self.text(idx + 1)))
    }

    /// A byte written as hex digits, e.g. `1F`
    pub(crate) fn hex_u8(&self, idx: usize, field: &'static str) -> Result<u8, ParserError> {
        let text = self.text(idx).trim();
        if text.is_empty() {
            return Ok(0);
        }
        u8::from_str_radix(text, 16).map_err(|_| self.invalid(field))
    }

    pub(crate) fn char(&self, idx: usize) -> Option<char> {
        self.text(idx).chars().next()
    }

    /// A `ddmmyy` date; blank reads as `None`.
    pub(crate) fn date(
        &self,
        idx: usize,
        field: &'static str,
    ) -> Result<Option<NaiveDate>, ParserError> {
        let text = self.text(idx).trim();
        if text.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(text, "%d%m%y")
            .map(Some)
            .map_err(|_| self.invalid(field))
    }

    pub(crate) fn invalid(&self, field: &'static str) -> ParserError {
        ParserError::InvalidField {
            message_id: self.message_id,
            field,
        }
    }
}

/// Converts an NMEA `hhmmss.sss` time of day as carried in the `utc` fields
/// into a [`NaiveTime`]. `None` for values that are not a valid time.
pub fn utc_to_time(utc: f64) -> Option<NaiveTime> {
    if !utc.is_finite() || utc < 0.0 {
        return None;
    }
    let whole = utc.trunc() as u32;
    let millis = ((utc - utc.trunc()) * 1000.0).round() as u32;
    let (hour, min, sec) = (whole / 10_000, (whole / 100) % 100, whole % 100);
    NaiveTime::from_hms_milli_opt(hour, min, sec, millis.min(999))
}
