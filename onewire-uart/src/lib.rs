#![no_std]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A 1-Wire bus master that tunnels the line-level protocol over a
//! full-duplex UART instead of bit-banging a GPIO pin.
//!
//! Each 1-Wire bit becomes one UART byte at 115,200 baud: the master
//! transmits `0xFF` or `0x00` and reads back whatever the open-drain bus
//! echoes. The 1-Wire reset pulse becomes one UART byte at 9,600 baud. This
//! lets a microcontroller use its UART peripheral as a hardware timer
//! instead of bit-banging reset/slot timing by hand.
//!
//! The UART itself is an external collaborator: implement [`LlTransport`]
//! for whatever peripheral or host serial port is available and hand it to
//! [`OneWireUartBus::init`].

pub mod consts;
mod bus;
mod codec;
mod crc;
mod enumerate;
mod error;
mod rom;
mod search;
#[cfg(feature = "sync")]
mod sync;
mod transport;

pub use bus::OneWireUartBus;
pub use crc::{crc8, Crc8};
pub use enumerate::EnumerateOutcome;
pub use error::Error;
pub use rom::RomId;
pub use search::{FIRST_DEV, LAST_DEV};
#[cfg(feature = "sync")]
pub use sync::SyncOneWireUartBus;
pub use transport::{BaudRate, LlTransport};

/// Result type for 1-Wire operations, parameterized over the transport's
/// own error type.
pub type OneWireResult<T, E> = Result<T, Error<E>>;
