//! Bulk enumeration helpers built on top of [`crate::search`]: fill a
//! fixed-size array, or drive a callback once per device found.

use crate::bus::OneWireUartBus;
use crate::error::Error;
use crate::rom::RomId;
use crate::transport::LlTransport;
use crate::OneWireResult;

/// Outcome of [`OneWireUartBus::enumerate_into`]: how many of the provided
/// slots were filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct EnumerateOutcome {
    /// Number of devices found and written into the output slice, starting
    /// at index 0.
    pub count: usize,
}

impl<T: LlTransport> OneWireUartBus<'_, T> {
    /// Enumerate every device on the bus into `out`, starting a fresh
    /// search first.
    ///
    /// Stops when `out` is full or the bus is exhausted. Running out of
    /// devices before `out` fills is not an error as long as at least one
    /// device was found; finding none at all is [`Error::NoDevice`].
    pub fn enumerate_into(&mut self, out: &mut [RomId]) -> OneWireResult<EnumerateOutcome, T::Error> {
        self.search_reset();
        let mut count = 0;

        while count < out.len() {
            match self.search() {
                Ok(rom) => {
                    out[count] = rom;
                    count += 1;
                }
                Err(Error::NoDevice) => break,
                Err(e) => return Err(e),
            }
        }

        if count == 0 {
            Err(Error::NoDevice)
        } else {
            Ok(EnumerateOutcome { count })
        }
    }

    /// Enumerate every device on the bus, invoking `f(Some(rom), index)`
    /// for each one found, starting a fresh search first.
    ///
    /// Stops at the first device a callback call rejects. Once the search
    /// itself is exhausted or the callback aborts it, `f(None, count)` is
    /// called exactly once to signal end of enumeration, its return value
    /// ignored. A transport failure propagates immediately instead, without
    /// that final call — the scan didn't end, it broke.
    pub fn enumerate_with<F>(&mut self, mut f: F) -> OneWireResult<EnumerateOutcome, T::Error>
    where
        F: FnMut(Option<RomId>, usize) -> bool,
    {
        self.search_reset();
        let mut count = 0;

        loop {
            match self.search() {
                Ok(rom) => {
                    let keep_going = f(Some(rom), count);
                    count += 1;
                    if !keep_going {
                        // Deliberate early stop: report what was found so
                        // far, even if that's zero.
                        break;
                    }
                }
                Err(Error::NoDevice) => break,
                Err(e) => return Err(e),
            }
        }

        f(None, count);

        if count == 0 {
            Err(Error::NoDevice)
        } else {
            Ok(EnumerateOutcome { count })
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::bus::test_support::{rom, ScriptedTransport, SimulatedBus};

    #[test]
    fn enumerate_into_fills_exact_count() {
        let a = rom([0x01, 0, 0, 0, 0, 0]);
        let b = rom([0x02, 0, 0, 0, 0, 0]);
        let mut t = SimulatedBus::new(std::vec![a, b]);
        let mut bus = OneWireUartBus::init(&mut t).unwrap();

        let mut out = [RomId::from_bytes([0; 8]); 8];
        let outcome = bus.enumerate_into(&mut out).unwrap();
        assert_eq!(outcome.count, 2);
        for rom in &out[..outcome.count] {
            assert!(rom.is_crc_valid());
        }
    }

    #[test]
    fn enumerate_into_stops_when_array_full() {
        let a = rom([0x01, 0, 0, 0, 0, 0]);
        let b = rom([0x02, 0, 0, 0, 0, 0]);
        let mut t = SimulatedBus::new(std::vec![a, b]);
        let mut bus = OneWireUartBus::init(&mut t).unwrap();

        let mut out = [RomId::from_bytes([0; 8]); 1];
        let outcome = bus.enumerate_into(&mut out).unwrap();
        assert_eq!(outcome.count, 1);
    }

    #[test]
    fn enumerate_into_empty_bus_is_no_device() {
        let mut t = SimulatedBus::new(std::vec![]);
        let mut bus = OneWireUartBus::init(&mut t).unwrap();
        let mut out = [RomId::from_bytes([0; 8]); 4];
        assert_eq!(bus.enumerate_into(&mut out), Err(Error::NoDevice));
    }

    #[test]
    fn enumerate_with_invokes_callback_per_device_then_a_final_null_call() {
        let a = rom([0x01, 0, 0, 0, 0, 0]);
        let b = rom([0x02, 0, 0, 0, 0, 0]);
        let mut t = SimulatedBus::new(std::vec![a, b]);
        let mut bus = OneWireUartBus::init(&mut t).unwrap();

        let mut seen = std::vec::Vec::new();
        let outcome = bus
            .enumerate_with(|rom, index| {
                seen.push((rom.map(|r| r.bytes()), index));
                true
            })
            .unwrap();

        assert_eq!(outcome.count, 2);
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], (Some(a), 0));
        assert_eq!(seen[1], (Some(b), 1));
        assert_eq!(seen[2], (None, 2));
    }

    #[test]
    fn enumerate_with_stops_early_when_callback_rejects() {
        let a = rom([0x01, 0, 0, 0, 0, 0]);
        let b = rom([0x02, 0, 0, 0, 0, 0]);
        let mut t = SimulatedBus::new(std::vec![a, b]);
        let mut bus = OneWireUartBus::init(&mut t).unwrap();

        let mut final_call_index = None;
        let outcome = bus
            .enumerate_with(|rom, index| {
                if rom.is_none() {
                    final_call_index = Some(index);
                }
                false
            })
            .unwrap();
        assert_eq!(outcome.count, 1);
        assert_eq!(final_call_index, Some(1));
    }

    #[test]
    fn mid_enumeration_transport_failure_propagates() {
        let mut t = ScriptedTransport::new([]);
        let mut bus = OneWireUartBus::init(&mut t).unwrap();
        bus.transport.fail_tx_rx = true;
        let mut out = [RomId::from_bytes([0; 8]); 4];
        assert!(matches!(bus.enumerate_into(&mut out), Err(Error::TxRx(_))));
    }
}
