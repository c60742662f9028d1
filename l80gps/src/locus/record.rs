use chrono::{DateTime, Utc};
use log::debug;
#[cfg(feature = "serde")]
use serde::Serialize;

use super::float::decode_float;
use crate::{
    checksum::compute_checksum,
    constants::{
        LOCUS_ALT_OFFSET, LOCUS_CHECKSUM_OFFSET, LOCUS_EMPTY_UTC, LOCUS_FIX_OFFSET,
        LOCUS_LAT_OFFSET, LOCUS_LON_OFFSET, LOCUS_RECORD_LEN, LOCUS_UTC_OFFSET,
    },
    error::RecordError,
};

/// One fix from the LOCUS flash log, basic format
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LocusRecord {
    pub utc: DateTime<Utc>,
    pub fix: u8,
    /// Decimal degrees
    pub latitude: f64,
    /// Decimal degrees
    pub longitude: f64,
    /// Meters
    pub altitude: u16,
}

fn word<const N: usize>(record: &[u8; LOCUS_RECORD_LEN], offset: usize) -> [u8; N] {
    let mut out = [0; N];
    out.copy_from_slice(&record[offset..offset + N]);
    out
}

/// Decodes one 16-byte record.
///
/// The checksum is checked first, then the UTC field: an erased slot reads
/// back as all ones and carries a valid checksum.
pub fn decode_record(record: &[u8; LOCUS_RECORD_LEN]) -> Result<LocusRecord, RecordError> {
    let computed = compute_checksum(&record[..LOCUS_CHECKSUM_OFFSET]);
    let stored = record[LOCUS_CHECKSUM_OFFSET];
    if computed != stored {
        return Err(RecordError::ChecksumFailed {
            expect: stored,
            got: computed,
        });
    }
    let utc = u32::from_le_bytes(word(record, LOCUS_UTC_OFFSET));
    if utc == LOCUS_EMPTY_UTC {
        return Err(RecordError::EmptySlot);
    }
    Ok(LocusRecord {
        // every u32 is within chrono's range
        utc: DateTime::from_timestamp(i64::from(utc), 0).unwrap_or_default(),
        fix: record[LOCUS_FIX_OFFSET],
        latitude: decode_float(word(record, LOCUS_LAT_OFFSET)),
        longitude: decode_float(word(record, LOCUS_LON_OFFSET)),
        altitude: u16::from_le_bytes(word(record, LOCUS_ALT_OFFSET)),
    })
}

/// Decodes a raw log into records.
///
/// Records failing [`decode_record`] are left out and decoding carries on
/// with the next one. A trailing partial record is ignored.
pub fn decode_log(data: &[u8]) -> Vec<LocusRecord> {
    let chunks = data.chunks_exact(LOCUS_RECORD_LEN);
    if !chunks.remainder().is_empty() {
        debug!("ignore {} trailing bytes", chunks.remainder().len());
    }
    chunks
        .enumerate()
        .filter_map(|(idx, chunk)| {
            let record: &[u8; LOCUS_RECORD_LEN] = chunk.try_into().ok()?;
            decode_record(record)
                .inspect_err(|e| debug!("skip record {idx}: {e}"))
                .ok()
        })
        .collect()
}
