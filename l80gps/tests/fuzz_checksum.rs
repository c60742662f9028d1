//! Property tests for sentence framing and checksum validation.

use l80gps::{compute_checksum, is_valid, with_checksum, Sentence};
use proptest::prelude::*;

/// Sentence bodies as the receiver could send them, including stray `$`
/// and `*` bytes a line glitch may leave behind
fn body_strategy() -> impl Strategy<Value = String> {
    "[A-Z0-9,.$*]{0,80}"
}

proptest! {
    #[test]
    fn test_valid_iff_checksum_matches(body in body_strategy(), claimed in any::<u8>()) {
        let line = format!("${body}*{claimed:02X}\r\n");
        let expect = !body.contains('*') && compute_checksum(body.as_bytes()) == claimed;
        prop_assert_eq!(expect, is_valid(line.as_bytes()));
    }

    #[test]
    fn test_framed_body_is_valid(body in "[A-Z0-9,.]{0,80}") {
        let line = with_checksum(&body);
        prop_assert!(is_valid(line.as_bytes()));
        let sentence = Sentence::parse(line.as_bytes()).unwrap();
        prop_assert_eq!(body.as_str(), sentence.body());
    }

    #[test]
    fn test_lowercase_checksum_digits(body in "[A-Z0-9,.]{0,80}") {
        let line = format!("${}*{:02x}", body, compute_checksum(body.as_bytes()));
        prop_assert!(is_valid(line.as_bytes()));
    }

    #[test]
    fn test_arbitrary_bytes_never_panic(line in prop::collection::vec(any::<u8>(), 0..128)) {
        if Sentence::parse(&line).is_ok() {
            prop_assert!(is_valid(&line));
        }
    }
}
