//! Outbound message transport
//!
//! The companion device link is owned by the host platform. The face only
//! hands it an encoded dictionary and never waits for the answer: delivery
//! results come back later as separate events.

/// Reasons an outbound message could not be handed to the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendError {
    /// Another message is still in flight
    Busy,
    /// The companion device is not connected
    NotConnected,
    /// Message larger than the outbox buffer
    Overflow,
    /// Transport-specific failure
    Transport,
}

/// Outbound message transport
pub trait Outbox {
    /// Queue an encoded dictionary for delivery
    ///
    /// Returning `Ok` only means the transport accepted the bytes.
    fn send(&mut self, payload: &[u8]) -> Result<(), SendError>;

    /// Size of the outbox buffer in bytes
    fn capacity(&self) -> usize;
}

impl<T: Outbox + ?Sized> Outbox for &mut T {
    fn send(&mut self, payload: &[u8]) -> Result<(), SendError> {
        (**self).send(payload)
    }

    fn capacity(&self) -> usize {
        (**self).capacity()
    }
}
