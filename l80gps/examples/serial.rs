use l80gps::{Error, Gps, SerialTransport};

fn main() -> l80gps::Result<()> {
    let port = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyAMA0".to_string());
    let mut gps = Gps::new(SerialTransport::open(&port, 9600)?);

    println!("Waiting for a fix on {port}...");
    loop {
        match gps.get_gpgga() {
            Ok(gga) => {
                let gsa = gps.get_gpgsa()?;
                println!(
                    "{:.6} {:.6} alt {:.1}m, {} satellites {:?}, hdop {}",
                    gga.latitude,
                    gga.longitude,
                    gga.altitude,
                    gga.satellites_used,
                    gsa.active_satellites().collect::<Vec<_>>(),
                    gsa.hdop
                );
            },
            Err(Error::DataInvalid { .. }) => println!("no fix yet"),
            Err(e @ Error::PacketNotFound { .. }) => println!("{e}"),
            Err(e) => return Err(e),
        }
    }
}
