//! A mutex-guarded bus handle, for call sites that share one physical bus
//! across more than one owner.
//!
//! The raw [`crate::bus::OneWireUartBus`] already gets exclusivity from the
//! borrow checker for a single owner; this wrapper adds runtime
//! arbitration on top via [`spin::Mutex`], for the case where several
//! owners each hold their own handle to the same transport. Locking the
//! returned guard for a whole multi-call sequence (e.g. `match_rom` then
//! several `read_byte`s) is how a caller gets the "hold the lock across an
//! operation" behavior without a separate transaction type: the guard
//! itself is that scope.

use spin::{Mutex, MutexGuard};

use crate::bus::OneWireUartBus;
use crate::error::Error;
use crate::transport::LlTransport;
use crate::OneWireResult;

/// A [`OneWireUartBus`] behind a [`spin::Mutex`], for sharing one bus
/// across more than one owner.
pub struct SyncOneWireUartBus<'a, T: LlTransport> {
    inner: Mutex<OneWireUartBus<'a, T>>,
}

impl<'a, T: LlTransport> SyncOneWireUartBus<'a, T> {
    /// Bring the transport up and wrap it in a mutex-guarded handle.
    pub fn init(transport: &'a mut T) -> OneWireResult<Self, T::Error> {
        Ok(Self {
            inner: Mutex::new(OneWireUartBus::init(transport)?),
        })
    }

    /// Acquire the lock, giving exclusive access to the raw bus handle for
    /// as long as the guard is held. Spins if another owner already holds
    /// it.
    pub fn lock(&self) -> MutexGuard<'_, OneWireUartBus<'a, T>> {
        self.inner.lock()
    }

    /// Try to acquire the lock without spinning.
    pub fn try_lock(&self) -> Option<MutexGuard<'_, OneWireUartBus<'a, T>>> {
        self.inner.try_lock()
    }

    /// Release the transport. Fails with [`Error::Generic`] if another
    /// owner currently holds the lock.
    pub fn deinit(self) -> OneWireResult<(), T::Error> {
        match self.inner.try_lock() {
            Some(_) => self.inner.into_inner().deinit(),
            None => Err(Error::Generic),
        }
    }
}
