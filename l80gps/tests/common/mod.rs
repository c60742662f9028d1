#![allow(dead_code)]

use std::{collections::VecDeque, io, time::Duration};

use l80gps::Transport;

/// In-memory receiver: serves scripted lines, one per read, and records
/// everything written to it. An exhausted script reads as a timeout.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    lines: VecDeque<Vec<u8>>,
    written: Vec<u8>,
    reads: usize,
}

impl ScriptedTransport {
    pub fn new<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            lines: lines
                .into_iter()
                .map(|l| format!("{l}\r\n").into_bytes())
                .collect(),
            ..Default::default()
        }
    }

    /// Appends a line, sent as is without adding `\r\n`.
    pub fn push_raw(&mut self, line: &[u8]) {
        self.lines.push_back(line.to_vec());
    }

    /// Queues a read that returns nothing, like a timeout.
    pub fn push_timeout(&mut self) {
        self.lines.push_back(Vec::new());
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn written(&self) -> &[u8] {
        &self.written
    }

    /// Written commands, one entry per `\r\n` terminated sentence
    pub fn written_sentences(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.written)
            .split_terminator("\r\n")
            .map(str::to_owned)
            .collect()
    }
}

impl Transport for ScriptedTransport {
    fn read_line(&mut self, _timeout: Duration) -> io::Result<Vec<u8>> {
        self.reads += 1;
        Ok(self.lines.pop_front().unwrap_or_default())
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.written.extend_from_slice(data);
        Ok(())
    }
}

/// Transport whose reads fail with an I/O error
pub struct BrokenTransport;

impl Transport for BrokenTransport {
    fn read_line(&mut self, _timeout: Duration) -> io::Result<Vec<u8>> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "port closed"))
    }

    fn write_all(&mut self, _data: &[u8]) -> io::Result<()> {
        Ok(())
    }
}

pub const GPGLL_FIX: &str = "$GPGLL,3110.2908,N,12123.2348,E,041139.000,A,A*59";
pub const GPGLL_NO_FIX: &str = "$GPGLL,,,,,041139.000,V,N*74";
pub const GPRMC_FIX: &str =
    "$GPRMC,013732.000,A,3150.7238,N,11711.7278,E,0.00,0.00,220413,,,A*68";
pub const GPRMC_NO_FIX: &str = "$GPRMC,013732.000,V,,,,,0.00,0.00,220413,,,N*4F";
pub const GPVTG: &str = "$GPVTG,0.0,T,,M,0.0,N,0.1,K,A*0C";
pub const GPGGA_FIX: &str =
    "$GPGGA,015540.000,3150.68378,N,11711.93139,E,1,17,0.6,0051.6,M,0.0,M,,*58";
pub const GPGGA_NO_FIX: &str = "$GPGGA,015540.000,,,,,0,0,,,M,,M,,*4D";
pub const GPGSA: &str = "$GPGSA,A,3,14,06,16,31,23,,,,,,,,1.66,1.42,0.84*0F";
pub const GPGSV: &str = "$GPGSV,3,1,12,01,05,060,18,02,17,259,43,04,56,287,28,09,08,277,28*77";
pub const GPTXT: &str = "$GPTXT,01,01,02,ANTSTATUS=OPEN*2B";
pub const PMTKLOG: &str = "$PMTKLOG,456,0,11,31,2,0,0,0,3769,46*48";

/// One real partial-log data packet: a header record, three unusable
/// records and two fixes
pub const LOX_DATA_0: &str = "$PMTKLOX,1,0,0100010B,1F000000,0F000000,0000100B,00000000,\
00000000,00000003,FFFFFFFF,FFFFFFFF,FFFFFFFF,FFFFFFFF,FFFFFFFF,FFFFFFFF,FFFFFFFF,FFFFFFFF,\
00FC8C1C,0DE9E753,02A54356,42777508,C0A300C9,1CE9E753,02A14356,42397508,C0A30092*2E";
pub const LOX_DATA_1: &str = "$PMTKLOX,1,1,0DE9E753,02A54356,42777508,C0A300C9*20";
pub const LOX_START: &str = "$PMTKLOX,0,3*5A";
pub const LOX_END: &str = "$PMTKLOX,2*47";
