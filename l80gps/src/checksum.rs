use crate::{
    constants::{
        NMEA_CHECKSUM_CHAR, NMEA_CHECKSUM_LEN, NMEA_END_CHAR_1, NMEA_END_CHAR_2, NMEA_SYNC_CHAR,
    },
    error::ParserError,
};

/// XOR checksum calculator used by NMEA/PMTK sentences and LOCUS records,
/// supporting both streaming and single-shot validation
#[derive(Default, Clone, Copy)]
pub struct NmeaChecksumCalc {
    ck: u8,
}

impl NmeaChecksumCalc {
    pub const fn new() -> Self {
        Self { ck: 0 }
    }

    /// Update checksum with new bytes
    pub const fn update(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            self.update_byte(bytes[i]);
            i += 1;
        }
    }

    /// Update checksum with a single byte
    pub const fn update_byte(&mut self, byte: u8) {
        self.ck ^= byte;
    }

    /// Get the current checksum result
    pub const fn result(self) -> u8 {
        self.ck
    }

    /// Validate checksum and return result
    pub const fn validate_result(self, received: u8) -> Result<(), ParserError> {
        if self.ck == received {
            Ok(())
        } else {
            Err(ParserError::InvalidChecksum {
                expect: received,
                got: self.ck,
            })
        }
    }
}

/// XOR of every byte in `bytes`
pub const fn compute_checksum(bytes: &[u8]) -> u8 {
    let mut calc = NmeaChecksumCalc::new();
    calc.update(bytes);
    calc.result()
}

/// Splits a raw line into its body (between `$` and `*`) and the checksum
/// carried after the `*`. Trailing `\r\n` is ignored.
pub fn split_frame(line: &[u8]) -> Result<(&[u8], u8), ParserError> {
    let line = trim_line_end(line);
    if line.first() != Some(&NMEA_SYNC_CHAR) {
        return Err(ParserError::MissingSyncChar);
    }
    let rest = &line[1..];
    let found = rest.iter().filter(|b| **b == NMEA_CHECKSUM_CHAR).count();
    if found != 1 {
        return Err(ParserError::InvalidDelimiters { found });
    }
    let star = rest
        .iter()
        .position(|b| *b == NMEA_CHECKSUM_CHAR)
        .ok_or(ParserError::InvalidDelimiters { found })?;
    let (body, suffix) = (&rest[..star], &rest[star + 1..]);
    let checksum = parse_checksum_digits(suffix)?;
    Ok((body, checksum))
}

/// Returns `true` if `line` is a well-formed sentence whose checksum matches
/// its body. Never fails: anything unparseable is simply invalid.
pub fn is_valid(line: &[u8]) -> bool {
    match split_frame(line) {
        Ok((body, checksum)) => compute_checksum(body) == checksum,
        Err(_) => false,
    }
}

/// Frames `body` into a complete sentence: `$<body>*<CC>\r\n`
pub fn with_checksum(body: &str) -> String {
    format!("${}*{:02X}\r\n", body, compute_checksum(body.as_bytes()))
}

pub(crate) fn trim_line_end(mut line: &[u8]) -> &[u8] {
    while let [rest @ .., last] = line {
        if *last == NMEA_END_CHAR_1 || *last == NMEA_END_CHAR_2 {
            line = rest;
        } else {
            break;
        }
    }
    line
}

fn parse_checksum_digits(suffix: &[u8]) -> Result<u8, ParserError> {
    let invalid =
        || ParserError::InvalidChecksumDigits(String::from_utf8_lossy(suffix).into_owned());
    if suffix.len() != NMEA_CHECKSUM_LEN || !suffix.iter().all(u8::is_ascii_hexdigit) {
        return Err(invalid());
    }
    let digits = core::str::from_utf8(suffix).map_err(|_| invalid())?;
    u8::from_str_radix(digits, 16).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GPGLL_BODY: &str = "GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A";
    const VALID_GPGLL: &[u8] = b"$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*59";

    #[test]
    fn test_compute_checksum_gpgll() {
        assert_eq!(0x59, compute_checksum(GPGLL_BODY.as_bytes()));
    }

    #[test]
    fn test_compute_checksum_empty() {
        assert_eq!(0, compute_checksum(&[]));
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(VALID_GPGLL));
        assert!(is_valid(b"$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*59\r\n"));
        assert!(!is_valid(b"$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*58"));
    }

    #[test]
    fn test_is_valid_lowercase_hex() {
        assert!(is_valid(b"$GPVTG,0.0,T,,M,0.0,N,0.1,K,A*0c"));
    }

    #[test]
    fn test_is_valid_fails_closed() {
        assert!(!is_valid(b""));
        assert!(!is_valid(b"\r\n"));
        assert!(!is_valid(b"GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*59"));
        assert!(!is_valid(b"$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A"));
        assert!(!is_valid(b"$GPGLL,3110.2908*N,12123.2348,E,041139.000,A,A*59"));
        assert!(!is_valid(b"$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*ZZ"));
        assert!(!is_valid(b"$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*5"));
        assert!(!is_valid(b"$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*+9"));
        assert!(!is_valid(&[0x24, 0xff, 0xfe, 0x2a, 0xff, 0xff]));
    }

    #[test]
    fn test_split_frame_errors() {
        assert_eq!(Err(ParserError::MissingSyncChar), split_frame(b"PMTK001,161,3*36"));
        assert_eq!(
            Err(ParserError::InvalidDelimiters { found: 0 }),
            split_frame(b"$PMTK001,161,3")
        );
        assert_eq!(
            Err(ParserError::InvalidDelimiters { found: 2 }),
            split_frame(b"$PMTK001*161,3*36")
        );
        assert_eq!(
            Err(ParserError::InvalidChecksumDigits("3G".to_string())),
            split_frame(b"$PMTK001,161,3*3G")
        );
    }

    #[test]
    fn test_split_frame_body() {
        let (body, ck) = split_frame(b"$PMTK001,161,3*36\r\n").unwrap();
        assert_eq!(b"PMTK001,161,3", body);
        assert_eq!(0x36, ck);
    }

    #[test]
    fn test_streaming_checksum_chunks() {
        let mut calc = NmeaChecksumCalc::new();
        let (head, tail) = GPGLL_BODY.as_bytes().split_at(10);
        calc.update(head);
        calc.update(tail);
        assert_eq!(calc.validate_result(0x59), Ok(()));
        assert_eq!(
            calc.validate_result(0x58),
            Err(ParserError::InvalidChecksum {
                expect: 0x58,
                got: 0x59
            })
        );
    }

    #[test]
    fn test_with_checksum_matches_command_literals() {
        assert_eq!("$PMTK161,0*28\r\n", with_checksum("PMTK161,0"));
        assert_eq!("$PMTK622,1*29\r\n", with_checksum("PMTK622,1"));
        assert_eq!(
            "$PMTK225,2,3000,12000,18000,72000*15\r\n",
            with_checksum("PMTK225,2,3000,12000,18000,72000")
        );
    }

    #[test]
    fn test_trim_line_end() {
        assert_eq!(b"$A*41", trim_line_end(b"$A*41\r\n"));
        assert_eq!(b"$A*41", trim_line_end(b"$A*41\n"));
        assert_eq!(b"", trim_line_end(b"\r\n"));
    }

    // Compute checksum at compile time
    #[test]
    fn test_const_checksum_computation() {
        const _: () = assert!(compute_checksum(b"PMTK183") == 0x38);
    }
}
