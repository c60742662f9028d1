use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{DEFAULT_LOCUS_ATTEMPTS, DEFAULT_READ_TIMEOUT_MS},
    pmtk::AckPolicy,
};

/// Driver settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GpsConfig {
    /// How long to wait for each line before a scan gives up
    pub read_timeout: Duration,
    /// LOCUS transfer sessions to try before failing
    pub locus_attempts: usize,
    /// Whether LOCUS start/stop/erase wait for their acknowledgement
    pub locus_ack: AckPolicy,
}

impl Default for GpsConfig {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
            locus_attempts: DEFAULT_LOCUS_ATTEMPTS,
            locus_ack: AckPolicy::default(),
        }
    }
}

impl GpsConfig {
    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    pub fn with_locus_attempts(mut self, locus_attempts: usize) -> Self {
        self.locus_attempts = locus_attempts;
        self
    }

    pub fn with_locus_ack(mut self, locus_ack: AckPolicy) -> Self {
        self.locus_ack = locus_ack;
        self
    }
}
