#[cfg(feature = "serde")]
use serde::Serialize;

use super::{fields::Fields, types::TextSeverity, NmeaSentence};
use crate::error::ParserError;

/// Free text from the receiver, e.g. antenna status
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Gptxt {
    pub total: u8,
    pub number: u8,
    pub severity: TextSeverity,
    pub text: String,
}

impl NmeaSentence for Gptxt {
    const MESSAGE_ID: &'static str = "GPTXT";

    fn decode_fields(raw: &[&str]) -> Result<Self, ParserError> {
        let f = Fields::exact(Self::MESSAGE_ID, raw, 5, "5")?;
        Ok(Self {
            total: f.number(1, "total")?,
            number: f.number(2, "number")?,
            severity: f.number::<u8>(3, "severity")?.into(),
            text: f.text(4).to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sentence;

    #[test]
    fn test_decode() {
        let sentence: Sentence = "$GPTXT,01,01,02,ANTSTATUS=OPEN*2B".parse().unwrap();
        assert_eq!(
            Gptxt {
                total: 1,
                number: 1,
                severity: TextSeverity::Notice,
                text: "ANTSTATUS=OPEN".to_string(),
            },
            Gptxt::decode(&sentence).unwrap()
        );
    }

    #[test]
    fn test_severity_codes() {
        for (code, severity) in [
            ("00", TextSeverity::Error),
            ("01", TextSeverity::Warning),
            ("02", TextSeverity::Notice),
            ("07", TextSeverity::User),
            ("05", TextSeverity::Other(5)),
        ] {
            let txt = Gptxt::decode_fields(&["GPTXT", "01", "01", code, "x"]).unwrap();
            assert_eq!(severity, txt.severity);
        }
    }
}
