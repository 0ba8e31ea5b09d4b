use std::io::{Read, Write};
use std::time::Duration;

use clap::Parser;
use onewire_uart::{BaudRate, LlTransport, OneWireUartBus};

/// Scan a 1-Wire bus tunneled over a host serial port and print every ROM
/// found.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Serial device the bus is tunneled over, e.g. /dev/ttyUSB0
    #[arg(short, long)]
    path: String,
}

/// [`LlTransport`] over a host serial port, switching its baud rate between
/// the reset pulse and ordinary bit/byte exchanges.
struct SerialTransport {
    port: Box<dyn serialport::SerialPort>,
}

impl SerialTransport {
    fn open(path: &str) -> Result<Self, serialport::Error> {
        let port = serialport::new(path, BaudRate::Data.bps())
            .timeout(Duration::from_millis(100))
            .open()?;
        Ok(Self { port })
    }
}

impl LlTransport for SerialTransport {
    type Error = std::io::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn deinit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_baudrate(&mut self, baud: BaudRate) -> Result<(), Self::Error> {
        self.port
            .set_baud_rate(baud.bps())
            .map_err(std::io::Error::other)
    }

    fn tx_rx(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<(), Self::Error> {
        self.port.write_all(tx)?;
        self.port.read_exact(rx)
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut transport = SerialTransport::open(&args.path).expect("failed to open serial port");
    let mut bus = OneWireUartBus::init(&mut transport).expect("failed to bring up 1-Wire bus");

    let mut found = 0usize;
    let outcome = bus.enumerate_with(|rom, index| {
        match rom {
            Some(rom) => {
                log::info!("device {index}: {rom}");
                found += 1;
            }
            None => log::debug!("enumeration finished after {index} device(s)"),
        }
        true
    });

    match outcome {
        Ok(outcome) => log::info!("scan complete: {} device(s) found", outcome.count),
        Err(e) if found > 0 => log::warn!("scan stopped early after {found} device(s): {e}"),
        Err(e) => log::error!("bus scan failed: {e}"),
    }
}
