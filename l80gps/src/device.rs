use log::debug;

use crate::{
    config::GpsConfig,
    constants::PMTK_LOG_ID,
    error::{Error, Result},
    locus::{decode_log, fetch_log, LocusRecord, LogRange},
    nmea::{
        decode, FixSentence, Gpgga, Gpgll, Gpgsa, Gpgsv, Gprmc, Gptxt, Gpvtg, NmeaSentence,
        PmtkLog, SentenceRecord,
    },
    pmtk::{self, AckPolicy, PmtkCommand, PmtkMessage},
    reader,
    sentence::Sentence,
    transport::Transport,
};

/// Quectel L80 driver.
///
/// Owns the transport; every call reads the stream from where it currently
/// is and nothing is cached between calls.
pub struct Gps<T: Transport> {
    transport: T,
    config: GpsConfig,
}

impl<T: Transport> Gps<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, GpsConfig::default())
    }

    pub fn with_config(transport: T, config: GpsConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &GpsConfig {
        &self.config
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Next valid sentence containing `pattern`
    pub fn read_matching(&mut self, pattern: &str) -> Result<Sentence> {
        reader::read_matching(&mut self.transport, pattern, self.config.read_timeout)
    }

    /// Writes a [`PmtkCommand`] or framed command text, see [`PmtkMessage`]
    pub fn send_command<C: PmtkMessage>(&mut self, command: C) -> Result<()> {
        pmtk::send_command(&mut self.transport, command)
    }

    pub fn send_and_ack<C: PmtkMessage>(&mut self, command: C) -> Result<()> {
        pmtk::send_and_ack(&mut self.transport, command, self.config.read_timeout)
    }

    fn read_decoded<S: NmeaSentence>(&mut self) -> Result<S> {
        let sentence = self.read_matching(S::MESSAGE_ID)?;
        Ok(S::decode(&sentence)?)
    }

    fn read_fix<S: FixSentence>(&mut self) -> Result<S> {
        let record = self.read_decoded::<S>()?;
        if !record.has_fix() {
            return Err(Error::DataInvalid {
                message_id: S::MESSAGE_ID,
            });
        }
        Ok(record)
    }

    /// Next GPRMC; fails with [`Error::DataInvalid`] when its status is `V`.
    pub fn get_gprmc(&mut self) -> Result<Gprmc> {
        self.read_fix()
    }

    pub fn get_gpvtg(&mut self) -> Result<Gpvtg> {
        self.read_decoded()
    }

    /// Next GPGGA; fails with [`Error::DataInvalid`] when fix quality is 0.
    pub fn get_gpgga(&mut self) -> Result<Gpgga> {
        self.read_fix()
    }

    pub fn get_gpgsa(&mut self) -> Result<Gpgsa> {
        self.read_decoded()
    }

    /// Next GPGSV, one sentence of a possibly multi-sentence group
    pub fn get_gpgsv(&mut self) -> Result<Gpgsv> {
        self.read_decoded()
    }

    /// Next GPGLL; fails with [`Error::DataInvalid`] when its status is `V`.
    pub fn get_gpgll(&mut self) -> Result<Gpgll> {
        self.read_fix()
    }

    pub fn get_gptxt(&mut self) -> Result<Gptxt> {
        self.read_decoded()
    }

    /// Next sentence with message id `message_id`, decoded into whichever
    /// record type it has. No fix validity check.
    pub fn get_sentence(&mut self, message_id: &str) -> Result<SentenceRecord> {
        let sentence = self.read_matching(message_id)?;
        Ok(decode(&sentence)?)
    }

    pub fn standby(&mut self) -> Result<()> {
        self.send_and_ack(PmtkCommand::Standby)
    }

    pub fn sleep(&mut self) -> Result<()> {
        self.send_and_ack(PmtkCommand::PeriodicSleep)
    }

    pub fn always_locate(&mut self) -> Result<()> {
        self.send_and_ack(PmtkCommand::AlwaysLocate)
    }

    pub fn set_periodic_normal(&mut self) -> Result<()> {
        self.send_and_ack(PmtkCommand::PeriodicNormal)
    }

    /// LOCUS logger status
    pub fn locus_query(&mut self) -> Result<PmtkLog> {
        self.send_command(PmtkCommand::LocusQueryStatus)?;
        let sentence = self.read_matching(PMTK_LOG_ID)?;
        Ok(PmtkLog::decode(&sentence)?)
    }

    fn locus_command(&mut self, command: PmtkCommand) -> Result<()> {
        match self.config.locus_ack {
            AckPolicy::FireAndForget => self.send_command(command),
            AckPolicy::Await => self.send_and_ack(command),
        }
    }

    pub fn locus_start(&mut self) -> Result<()> {
        self.locus_command(PmtkCommand::LocusStart)
    }

    pub fn locus_stop(&mut self) -> Result<()> {
        self.locus_command(PmtkCommand::LocusStop)
    }

    /// Erases the LOCUS flash
    pub fn locus_erase(&mut self) -> Result<()> {
        self.locus_command(PmtkCommand::LocusErase)
    }

    /// Raw log bytes, retried up to the configured number of attempts
    pub fn locus_query_data(&mut self, range: LogRange) -> Result<Vec<u8>> {
        fetch_log(
            &mut self.transport,
            range,
            self.config.read_timeout,
            self.config.locus_attempts,
        )
    }

    /// Decoded log records; records that fail their checksum or are empty
    /// are left out.
    pub fn locus_records(&mut self, range: LogRange) -> Result<Vec<LocusRecord>> {
        let data = self.locus_query_data(range)?;
        let records = decode_log(&data);
        debug!("{} records from {} bytes", records.len(), data.len());
        Ok(records)
    }
}
