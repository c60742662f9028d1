pub const NMEA_SYNC_CHAR: u8 = 0x24; // '$'
pub const NMEA_CHECKSUM_CHAR: u8 = 0x2a; // '*'
pub const NMEA_END_CHAR_1: u8 = 0x0d; // '\r' (<CR>)
pub const NMEA_END_CHAR_2: u8 = 0x0a; // '\n' (<LF>)
pub const NMEA_FIELD_SEPARATOR: char = ',';
pub(crate) const NMEA_CHECKSUM_LEN: usize = 2; // two hex digits after '*'

/// Message id of the PMTK acknowledgement sentence
pub const PMTK_ACK_ID: &str = "PMTK001";
/// Message id of the LOCUS status reply
pub const PMTK_LOG_ID: &str = "PMTKLOG";

pub const LOCUS_START_PATTERN: &str = "PMTKLOX,0";
/// Common prefix of the three LOCUS transfer sentences
pub(crate) const LOCUS_TRANSFER_PATTERN: &str = "PMTKLOX";

// utc (4) + fix (1) + latitude (4) + longitude (4) + altitude (2) + checksum (1)
pub const LOCUS_RECORD_LEN: usize = 16;
pub(crate) const LOCUS_UTC_OFFSET: usize = 0;
pub(crate) const LOCUS_FIX_OFFSET: usize = 4;
pub(crate) const LOCUS_LAT_OFFSET: usize = 5;
pub(crate) const LOCUS_LON_OFFSET: usize = 9;
pub(crate) const LOCUS_ALT_OFFSET: usize = 13;
pub(crate) const LOCUS_CHECKSUM_OFFSET: usize = 15;
/// UTC value of an erased flash slot
pub const LOCUS_EMPTY_UTC: u32 = 0xffff_ffff;

pub const DEFAULT_READ_TIMEOUT_MS: u64 = 500;
pub const DEFAULT_LOCUS_ATTEMPTS: usize = 5;
pub const DEFAULT_BAUD_RATE: u32 = 9600;
