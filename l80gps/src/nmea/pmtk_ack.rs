#[cfg(feature = "serde")]
use serde::Serialize;

use super::{fields::Fields, NmeaSentence};
use crate::error::{AckError, ParserError};

/// Result flag of a PMTK001 acknowledgement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum AckFlag {
    InvalidPacket,
    Unsupported,
    ActionFailed,
    Success,
    Unknown(u8),
}

impl From<u8> for AckFlag {
    fn from(value: u8) -> Self {
        match value {
            0 => AckFlag::InvalidPacket,
            1 => AckFlag::Unsupported,
            2 => AckFlag::ActionFailed,
            3 => AckFlag::Success,
            other => AckFlag::Unknown(other),
        }
    }
}

impl AckFlag {
    pub fn into_result(self) -> Result<(), AckError> {
        match self {
            AckFlag::Success => Ok(()),
            AckFlag::InvalidPacket => Err(AckError::InvalidPacket),
            AckFlag::Unsupported => Err(AckError::Unsupported),
            AckFlag::ActionFailed => Err(AckError::ActionFailed),
            AckFlag::Unknown(flag) => Err(AckError::UnknownFlag(flag)),
        }
    }
}

/// `PMTK001,<command>,<flag>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PmtkAck {
    /// Id of the acknowledged command, e.g. 161 for `PMTK161`
    pub command: u16,
    pub flag: AckFlag,
}

impl NmeaSentence for PmtkAck {
    const MESSAGE_ID: &'static str = "PMTK001";

    fn decode_fields(raw: &[&str]) -> Result<Self, ParserError> {
        let f = Fields::exact(Self::MESSAGE_ID, raw, 3, "3")?;
        // both are required, blank does not read as 0 here
        let command = f.optional(1, "command")?.ok_or_else(|| f.invalid("command"))?;
        let flag = f.optional::<u8>(2, "flag")?.ok_or_else(|| f.invalid("flag"))?;
        Ok(Self {
            command,
            flag: flag.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sentence;

    fn ack(line: &str) -> PmtkAck {
        PmtkAck::decode(&line.parse::<Sentence>().unwrap()).unwrap()
    }

    #[test]
    fn test_decode_flags() {
        assert_eq!(
            PmtkAck {
                command: 161,
                flag: AckFlag::Success
            },
            ack("$PMTK001,161,3*36")
        );
        assert_eq!(AckFlag::InvalidPacket, ack("$PMTK001,161,0*35").flag);
        assert_eq!(AckFlag::Unsupported, ack("$PMTK001,161,1*34").flag);
        assert_eq!(AckFlag::ActionFailed, ack("$PMTK001,161,2*37").flag);
        assert_eq!(AckFlag::Unknown(7), ack("$PMTK001,161,7*32").flag);
        assert_eq!(225, ack("$PMTK001,225,3*35").command);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Ok(()), AckFlag::Success.into_result());
        assert_eq!(Err(AckError::InvalidPacket), AckFlag::from(0).into_result());
        assert_eq!(Err(AckError::Unsupported), AckFlag::from(1).into_result());
        assert_eq!(Err(AckError::ActionFailed), AckFlag::from(2).into_result());
        assert_eq!(Err(AckError::UnknownFlag(9)), AckFlag::from(9).into_result());
    }

    #[test]
    fn test_decode_blank_flag() {
        assert!(PmtkAck::decode_fields(&["PMTK001", "161", ""]).is_err());
        assert!(PmtkAck::decode_fields(&["PMTK001", "161"]).is_err());
    }
}
