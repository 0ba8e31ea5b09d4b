/// Baud rates the 1-Wire-over-UART protocol switches between.
///
/// 9,600 baud stretches one UART byte to match the ~480 µs 1-Wire reset
/// pulse; 115,200 baud fits one UART byte into a single 1-Wire time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum BaudRate {
    /// 9,600 baud — used for the reset/presence pulse only.
    Reset,
    /// 115,200 baud — used for every data bit.
    Data,
}

impl BaudRate {
    /// The numeric baud rate, e.g. for a transport that configures a UART
    /// peripheral or host serial port directly.
    pub const fn bps(self) -> u32 {
        match self {
            BaudRate::Reset => 9_600,
            BaudRate::Data => 115_200,
        }
    }
}

/// The low-level full-duplex UART transport this crate tunnels 1-Wire
/// over.
///
/// Implementations live outside this crate: they drive a microcontroller's
/// UART peripheral or a host serial port. `init`/`deinit`/`set_baudrate`
/// may block; `tx_rx` must drive `tx` out while simultaneously sampling
/// `rx` in, with TX and RX electrically tied together at the 1-Wire pin's
/// open-drain transistor. `tx` and `rx` may be the same buffer.
///
/// Bytes within one `tx_rx` call are strictly ordered, and the UART must
/// have truly flushed by the time the call returns — 1-Wire bit timing
/// depends on that synchrony.
pub trait LlTransport {
    /// The transport's own error type.
    type Error;

    /// Bring the transport up. Must succeed before any other operation is
    /// attempted.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Tear the transport down. The transport must not be used again
    /// afterwards.
    fn deinit(&mut self) -> Result<(), Self::Error>;

    /// Switch the UART to the given baud rate.
    fn set_baudrate(&mut self, baud: BaudRate) -> Result<(), Self::Error>;

    /// Exchange `tx.len()` bytes full-duplex: drive `tx` out while
    /// sampling the same number of bytes into `rx`.
    ///
    /// # Panics
    /// Implementations may panic if `tx.len() != rx.len()`.
    fn tx_rx(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<(), Self::Error>;
}
