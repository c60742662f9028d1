#[cfg(feature = "serde")]
use serde::Serialize;

use super::{
    fields::Fields,
    types::{FixType, SelectionMode},
    NmeaSentence,
};
use crate::error::ParserError;

pub const GSA_CHANNELS: usize = 12;
// message id + mode + fix type, then the channels, then PDOP/HDOP/VDOP
const GSA_HEAD: usize = 3;
const GSA_TAIL: usize = 3;

/// DOP and active satellites
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Gpgsa {
    pub mode: SelectionMode,
    pub fix_type: FixType,
    /// Satellite id used on each channel, 0 for an idle channel
    pub satellites_on_channel: [u8; GSA_CHANNELS],
    pub pdop: f64,
    pub hdop: f64,
    pub vdop: f64,
}

impl Gpgsa {
    /// Ids of the satellites used in the solution
    pub fn active_satellites(&self) -> impl Iterator<Item = u8> + '_ {
        self.satellites_on_channel.iter().copied().filter(|id| *id != 0)
    }
}

impl NmeaSentence for Gpgsa {
    const MESSAGE_ID: &'static str = "GPGSA";

    fn decode_fields(raw: &[&str]) -> Result<Self, ParserError> {
        let f = Fields::within(
            Self::MESSAGE_ID,
            raw,
            GSA_HEAD + GSA_TAIL..=GSA_HEAD + GSA_CHANNELS + GSA_TAIL,
            "6..=18",
        )?;
        let mode = match f.char(1) {
            Some('M') => SelectionMode::Manual,
            Some('A') => SelectionMode::Automatic,
            _ => return Err(f.invalid("mode")),
        };
        let fix_type = match f.number::<u8>(2, "fix")? {
            0 | 1 => FixType::NoFix,
            2 => FixType::Fix2D,
            3 => FixType::Fix3D,
            _ => return Err(f.invalid("fix")),
        };
        let tail = f.len() - GSA_TAIL;
        let mut satellites_on_channel = [0; GSA_CHANNELS];
        for (slot, idx) in satellites_on_channel.iter_mut().zip(GSA_HEAD..tail) {
            *slot = f.number(idx, "satellites_on_channel")?;
        }
        Ok(Self {
            mode,
            fix_type,
            satellites_on_channel,
            pdop: f.number(tail, "pdop")?,
            hdop: f.number(tail + 1, "hdop")?,
            vdop: f.number(tail + 2, "vdop")?,
        })
    }
}
