#[cfg(feature = "serde")]
use serde::Serialize;

use super::{fields::Fields, NmeaSentence};
use crate::error::ParserError;

pub const GSV_SLOTS: usize = 4;
const GSV_HEAD: usize = 4;
const GSV_SLOT_LEN: usize = 4;

/// One satellite slot of a GSV sentence. Blank wire fields are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SatelliteInView {
    pub id: Option<u8>,
    /// Degrees, 0..=90
    pub elevation: Option<u8>,
    /// Degrees, 0..=359
    pub azimuth: Option<u16>,
    /// dB-Hz, `None` when the satellite is not tracked
    pub snr: Option<u8>,
}

impl SatelliteInView {
    pub fn is_absent(&self) -> bool {
        self.id.is_none()
    }
}

/// Satellites in view.
///
/// A full view spans `num_messages` sentences; each one is decoded on its
/// own, always into four slots. Collecting a group is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Gpgsv {
    pub num_messages: u8,
    pub sequence_num: u8,
    pub satellites_in_view: u8,
    pub satellites: [SatelliteInView; GSV_SLOTS],
}

impl NmeaSentence for Gpgsv {
    const MESSAGE_ID: &'static str = "GPGSV";

    fn decode_fields(raw: &[&str]) -> Result<Self, ParserError> {
        let f = Fields::within(
            Self::MESSAGE_ID,
            raw,
            GSV_HEAD..=GSV_HEAD + GSV_SLOTS * GSV_SLOT_LEN,
            "4, 8, 12, 16 or 20",
        )?;
        if (f.len() - GSV_HEAD) % GSV_SLOT_LEN != 0 {
            return Err(ParserError::InvalidFieldCount {
                message_id: Self::MESSAGE_ID,
                expect: "4, 8, 12, 16 or 20",
                got: f.len(),
            });
        }
        let mut satellites = [SatelliteInView::default(); GSV_SLOTS];
        for (n, slot) in satellites.iter_mut().enumerate() {
            let base = GSV_HEAD + n * GSV_SLOT_LEN;
            if base >= f.len() {
                break;
            }
            *slot = SatelliteInView {
                id: f.optional(base, "id")?,
                elevation: f.optional(base + 1, "elevation")?,
                azimuth: f.optional(base + 2, "azimuth")?,
                snr: f.optional(base + 3, "snr")?,
            };
        }
        Ok(Self {
            num_messages: f.number(1, "num_messages")?,
            sequence_num: f.number(2, "sequence_num")?,
            satellites_in_view: f.number(3, "satellites_in_view")?,
            satellites,
        })
    }
}
