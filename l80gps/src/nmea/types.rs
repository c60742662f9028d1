#[cfg(feature = "serde")]
use serde::Serialize;

/// `A`/`V` data status of RMC and GLL sentences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Status {
    /// `A`, data valid
    Valid,
    /// `V`, or anything else: the receiver has no usable fix
    Invalid,
}

impl Status {
    pub(crate) fn from_field(field: &str) -> Self {
        if field == "A" {
            Status::Valid
        } else {
            Status::Invalid
        }
    }
}

/// NMEA 2.3 positioning mode indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum PositionMode {
    Autonomous,
    Differential,
    Estimated,
    Manual,
    Simulator,
    /// `N` or blank
    NotValid,
    Unknown(char),
}

impl PositionMode {
    pub(crate) fn from_char(c: Option<char>) -> Self {
        match c {
            Some('A') => PositionMode::Autonomous,
            Some('D') => PositionMode::Differential,
            Some('E') => PositionMode::Estimated,
            Some('M') => PositionMode::Manual,
            Some('S') => PositionMode::Simulator,
            Some('N') | None => PositionMode::NotValid,
            Some(other) => PositionMode::Unknown(other),
        }
    }
}

/// GSA satellite selection mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SelectionMode {
    Manual,
    Automatic,
}

/// GSA fix type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum FixType {
    NoFix,
    Fix2D,
    Fix3D,
}

/// GPTXT message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum TextSeverity {
    Error,
    Warning,
    Notice,
    User,
    Other(u8),
}

impl From<u8> for TextSeverity {
    fn from(value: u8) -> Self {
        match value {
            0 => TextSeverity::Error,
            1 => TextSeverity::Warning,
            2 => TextSeverity::Notice,
            7 => TextSeverity::User,
            other => TextSeverity::Other(other),
        }
    }
}
