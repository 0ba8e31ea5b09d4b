use core::fmt;

/// Error type for 1-Wire-over-UART operations.
///
/// `E` is the transport's own error type, carried verbatim when a
/// `tx_rx` or `set_baudrate` call reports failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<E> {
    /// Generic failure: `init` failed, a mutex could not be acquired, or a
    /// higher-level protocol step was rejected.
    Generic,
    /// The transport's `tx_rx` returned failure.
    TxRx(E),
    /// The transport's `set_baudrate` returned failure.
    Baud(E),
    /// Reset completed but no slave asserted a presence pulse (or the bus
    /// is shorted).
    Presence,
    /// The search is exhausted, or was started with no devices on the bus.
    NoDevice,
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => write!(f, "1-wire operation failed"),
            Self::TxRx(e) => write!(f, "uart tx/rx exchange failed: {e:?}"),
            Self::Baud(e) => write!(f, "uart baud rate change failed: {e:?}"),
            Self::Presence => write!(f, "no presence pulse after reset"),
            Self::NoDevice => write!(f, "search exhausted, no device"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
