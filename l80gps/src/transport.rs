//! Byte transport the driver talks through.

use std::{io, time::Duration};

/// Duplex, line oriented byte stream to the receiver.
///
/// An empty line returned by [`Transport::read_line`] means nothing arrived
/// before the timeout (or the stream ended); the reader treats it as the end
/// of its scan.
pub trait Transport {
    /// Reads bytes up to and including the next `\n`, waiting at most
    /// `timeout`. Returns whatever arrived, possibly a partial line or
    /// nothing at all.
    fn read_line(&mut self, timeout: Duration) -> io::Result<Vec<u8>>;

    /// Writes `data` to the receiver.
    fn write_all(&mut self, data: &[u8]) -> io::Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn read_line(&mut self, timeout: Duration) -> io::Result<Vec<u8>> {
        (**self).read_line(timeout)
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        (**self).write_all(data)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn read_line(&mut self, timeout: Duration) -> io::Result<Vec<u8>> {
        (**self).read_line(timeout)
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        (**self).write_all(data)
    }
}

#[cfg(feature = "serial")]
pub use self::serial::SerialTransport;

#[cfg(feature = "serial")]
mod serial {
    use std::{
        io::{self, Read},
        time::{Duration, Instant},
    };

    use log::debug;
    use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

    use super::Transport;
    use crate::constants::{DEFAULT_READ_TIMEOUT_MS, NMEA_END_CHAR_2};

    /// [`Transport`] over a serial port
    pub struct SerialTransport {
        port: Box<dyn SerialPort>,
    }

    impl SerialTransport {
        pub fn new(port: Box<dyn SerialPort>) -> Self {
            Self { port }
        }

        /// Opens `device` with 8 data bits, no parity, one stop bit and no
        /// flow control, the only framing the L80 speaks.
        pub fn open(device: &str, baud_rate: u32) -> io::Result<Self> {
            let builder = serialport::new(device, baud_rate)
                .data_bits(DataBits::Eight)
                .parity(Parity::None)
                .stop_bits(StopBits::One)
                .flow_control(FlowControl::None)
                .timeout(Duration::from_millis(DEFAULT_READ_TIMEOUT_MS));
            debug!("{:?}", &builder);
            Ok(Self::new(builder.open()?))
        }

        pub fn into_inner(self) -> Box<dyn SerialPort> {
            self.port
        }
    }

    impl Transport for SerialTransport {
        fn read_line(&mut self, timeout: Duration) -> io::Result<Vec<u8>> {
            let deadline = Instant::now() + timeout;
            let mut line = Vec::new();
            // Byte at a time so nothing past the '\n' is pulled out of the port
            loop {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining.is_zero() {
                    break;
                }
                self.port.set_timeout(remaining)?;
                let mut local_buf = [0; 1];
                match self.port.read(&mut local_buf) {
                    Ok(0) => break,
                    Ok(_) => {
                        line.push(local_buf[0]);
                        if local_buf[0] == NMEA_END_CHAR_2 {
                            break;
                        }
                    },
                    Err(e) if e.kind() == io::ErrorKind::TimedOut => break,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                }
            }
            Ok(line)
        }

        fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
            io::Write::write_all(&mut self.port, data)?;
            io::Write::flush(&mut self.port)
        }
    }
}
