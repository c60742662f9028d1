//! Decoders for the sentences the L80 emits.
//!
//! Each message id has its own record type implementing [`NmeaSentence`].
//! [`decode`] selects the decoder for an arbitrary validated [`Sentence`]
//! through a static table keyed by message id.

mod fields;
mod gpgga;
mod gpgll;
mod gpgsa;
mod gpgsv;
mod gprmc;
mod gptxt;
mod gpvtg;
mod pmtk_ack;
mod pmtk_log;
mod types;

#[cfg(feature = "serde")]
use serde::Serialize;

pub use self::{
    fields::utc_to_time,
    gpgga::Gpgga,
    gpgll::Gpgll,
    gpgsa::{Gpgsa, GSA_CHANNELS},
    gpgsv::{Gpgsv, SatelliteInView, GSV_SLOTS},
    gprmc::Gprmc,
    gptxt::Gptxt,
    gpvtg::Gpvtg,
    pmtk_ack::{AckFlag, PmtkAck},
    pmtk_log::{LocusMode, LogType, LoggerStatus, PmtkLog},
    types::{FixType, PositionMode, SelectionMode, Status, TextSeverity},
};
use crate::{error::ParserError, sentence::Sentence};

/// A sentence type with a fixed message id and field layout
pub trait NmeaSentence: Sized {
    /// Talker + message id, first field of the body
    const MESSAGE_ID: &'static str;

    /// Decodes from the comma separated fields, message id included.
    fn decode_fields(raw: &[&str]) -> Result<Self, ParserError>;

    fn decode(sentence: &Sentence) -> Result<Self, ParserError> {
        Self::decode_fields(&sentence.fields())
    }
}

/// Sentences that say whether the receiver has a usable fix
pub trait FixSentence: NmeaSentence {
    fn has_fix(&self) -> bool;
}

/// Any decoded sentence
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "message_id"))]
pub enum SentenceRecord {
    #[cfg_attr(feature = "serde", serde(rename = "GPRMC"))]
    Gprmc(Gprmc),
    #[cfg_attr(feature = "serde", serde(rename = "GPVTG"))]
    Gpvtg(Gpvtg),
    #[cfg_attr(feature = "serde", serde(rename = "GPGGA"))]
    Gpgga(Gpgga),
    #[cfg_attr(feature = "serde", serde(rename = "GPGSA"))]
    Gpgsa(Gpgsa),
    #[cfg_attr(feature = "serde", serde(rename = "GPGSV"))]
    Gpgsv(Gpgsv),
    #[cfg_attr(feature = "serde", serde(rename = "GPGLL"))]
    Gpgll(Gpgll),
    #[cfg_attr(feature = "serde", serde(rename = "GPTXT"))]
    Gptxt(Gptxt),
    #[cfg_attr(feature = "serde", serde(rename = "PMTKLOG"))]
    PmtkLog(PmtkLog),
    #[cfg_attr(feature = "serde", serde(rename = "PMTK001"))]
    PmtkAck(PmtkAck),
}

impl SentenceRecord {
    pub fn message_id(&self) -> &'static str {
        match self {
            SentenceRecord::Gprmc(_) => Gprmc::MESSAGE_ID,
            SentenceRecord::Gpvtg(_) => Gpvtg::MESSAGE_ID,
            SentenceRecord::Gpgga(_) => Gpgga::MESSAGE_ID,
            SentenceRecord::Gpgsa(_) => Gpgsa::MESSAGE_ID,
            SentenceRecord::Gpgsv(_) => Gpgsv::MESSAGE_ID,
            SentenceRecord::Gpgll(_) => Gpgll::MESSAGE_ID,
            SentenceRecord::Gptxt(_) => Gptxt::MESSAGE_ID,
            SentenceRecord::PmtkLog(_) => PmtkLog::MESSAGE_ID,
            SentenceRecord::PmtkAck(_) => PmtkAck::MESSAGE_ID,
        }
    }
}

macro_rules! impl_from_record {
    ($($ty:ident),+) => {
        $(
            impl From<$ty> for SentenceRecord {
                fn from(record: $ty) -> Self {
                    SentenceRecord::$ty(record)
                }
            }
        )+
    };
}

impl_from_record!(Gprmc, Gpvtg, Gpgga, Gpgsa, Gpgsv, Gpgll, Gptxt, PmtkLog, PmtkAck);

type DecodeFn = fn(&[&str]) -> Result<SentenceRecord, ParserError>;

fn decode_into<S: NmeaSentence + Into<SentenceRecord>>(
    raw: &[&str],
) -> Result<SentenceRecord, ParserError> {
    S::decode_fields(raw).map(Into::into)
}

static DECODERS: [(&str, DecodeFn); 9] = [
    (Gprmc::MESSAGE_ID, decode_into::<Gprmc>),
    (Gpvtg::MESSAGE_ID, decode_into::<Gpvtg>),
    (Gpgga::MESSAGE_ID, decode_into::<Gpgga>),
    (Gpgsa::MESSAGE_ID, decode_into::<Gpgsa>),
    (Gpgsv::MESSAGE_ID, decode_into::<Gpgsv>),
    (Gpgll::MESSAGE_ID, decode_into::<Gpgll>),
    (Gptxt::MESSAGE_ID, decode_into::<Gptxt>),
    (PmtkLog::MESSAGE_ID, decode_into::<PmtkLog>),
    (PmtkAck::MESSAGE_ID, decode_into::<PmtkAck>),
];

/// Message ids [`decode`] understands
pub fn supported_message_ids() -> impl Iterator<Item = &'static str> {
    DECODERS.iter().map(|(id, _)| *id)
}

/// Decodes `sentence` with the decoder registered for its message id.
pub fn decode(sentence: &Sentence) -> Result<SentenceRecord, ParserError> {
    let fields = sentence.fields();
    let message_id = fields.first().copied().unwrap_or_default();
    let (_, decoder) = DECODERS
        .iter()
        .find(|(id, _)| *id == message_id)
        .ok_or_else(|| ParserError::UnknownMessage(message_id.to_owned()))?;
    decoder(&fields)
}
