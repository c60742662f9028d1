//! Scans the transport for the next valid sentence matching a pattern.
//!
//! The receiver streams several sentence kinds at a fixed rate, interleaved,
//! so everything that is not the requested sentence is noise here: lines
//! with a bad checksum and valid lines not containing the pattern are
//! dropped and reading continues. The scan ends at the first empty read.

use std::time::Duration;

use log::{debug, trace};

use crate::{
    checksum::is_valid,
    error::{Error, Result},
    sentence::Sentence,
    transport::Transport,
};

/// Returns the next valid sentence containing `pattern`.
///
/// Nothing is kept between calls: a second call starts from the current
/// stream position and never sees a line an earlier call consumed.
pub fn read_matching<T: Transport + ?Sized>(
    transport: &mut T,
    pattern: &str,
    timeout: Duration,
) -> Result<Sentence> {
    loop {
        let line = transport.read_line(timeout)?;
        if line.is_empty() {
            debug!("timed out waiting for '{pattern}'");
            return Err(Error::PacketNotFound {
                pattern: pattern.to_owned(),
            });
        }
        if !is_valid(&line) {
            trace!("drop invalid line {:?}", String::from_utf8_lossy(&line));
            continue;
        }
        if !contains(&line, pattern.as_bytes()) {
            trace!("skip {:?}", String::from_utf8_lossy(&line));
            continue;
        }
        match Sentence::parse(&line) {
            Ok(sentence) => {
                debug!("matched '{pattern}': {sentence}");
                return Ok(sentence);
            },
            Err(e) => trace!("drop line matching '{pattern}': {e}"),
        }
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, io};

    use super::*;

    struct Lines(VecDeque<Vec<u8>>);

    impl Lines {
        fn new(lines: &[&str]) -> Self {
            Self(lines.iter().map(|l| l.as_bytes().to_vec()).collect())
        }
    }

    impl Transport for Lines {
        fn read_line(&mut self, _timeout: Duration) -> io::Result<Vec<u8>> {
            Ok(self.0.pop_front().unwrap_or_default())
        }

        fn write_all(&mut self, _data: &[u8]) -> io::Result<()> {
            Ok(())
        }
    }

    const TIMEOUT: Duration = Duration::from_millis(500);

    #[test]
    fn test_skips_noise_and_invalid_lines() {
        let mut lines = Lines::new(&[
            "$GPVTG,0.0,T,,M,0.0,N,0.1,K,A*0C\r\n",
            "$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*58\r\n",
            "garbage\r\n",
            "$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*59\r\n",
        ]);
        let sentence = read_matching(&mut lines, "GPGLL", TIMEOUT).unwrap();
        assert_eq!("$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*59", sentence.as_str());
        assert!(lines.0.is_empty());
    }

    #[test]
    fn test_first_match_wins() {
        let mut lines = Lines::new(&[
            "$PMTK001,161,3*36\r\n",
            "$PMTK001,161,0*35\r\n",
        ]);
        let sentence = read_matching(&mut lines, "PMTK001", TIMEOUT).unwrap();
        assert_eq!("$PMTK001,161,3*36", sentence.as_str());
        assert_eq!(1, lines.0.len());
    }

    #[test]
    fn test_empty_read_ends_scan() {
        let mut lines = Lines::new(&[
            "$GPVTG,0.0,T,,M,0.0,N,0.1,K,A*0C\r\n",
            "",
            "$PMTK001,161,3*36\r\n",
        ]);
        match read_matching(&mut lines, "PMTK001", TIMEOUT) {
            Err(Error::PacketNotFound { pattern }) => assert_eq!("PMTK001", pattern),
            other => panic!("unexpected {other:?}"),
        }
        // the line after the empty read is still in the stream
        assert_eq!(1, lines.0.len());
    }

    #[test]
    fn test_contains() {
        assert!(contains(b"$PMTKLOX,1,0*00", b"PMTKLOX,1"));
        assert!(!contains(b"$PMTKLOX,2*47", b"PMTKLOX,1"));
        assert!(contains(b"$PMTKLOX,2*47", b""));
        assert!(!contains(b"$P", b"PMTK"));
    }
}
