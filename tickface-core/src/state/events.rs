//! Events delivered to the face by the platform

use tickface_hal::{ChargeState, HealthEventKind, LocalTime};
use tickface_protocol::{InboundMessage, MessageResult};

/// Asynchronous inputs, one handler invocation each
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // Timer
    /// Minute tick with the new local time
    Tick(LocalTime),

    // Sensor subscriptions
    /// Battery state changed
    Battery(ChargeState),
    /// Companion link went up or down
    Connection(bool),
    /// Health service notification with the cumulative steps for today
    Health {
        kind: HealthEventKind,
        steps_today: u32,
    },

    // Messaging
    /// Message received from the companion
    Inbound(InboundMessage),
    /// Incoming message was dropped by the transport
    InboxDropped(MessageResult),
    /// Outgoing message was delivered
    OutboxSent,
    /// Outgoing message failed
    OutboxFailed(MessageResult),
}

impl Event {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Event::Tick(_) => "tick",
            Event::Battery(_) => "battery",
            Event::Connection(_) => "connection",
            Event::Health { .. } => "health",
            Event::Inbound(_) => "inbound",
            Event::InboxDropped(_) => "inbox dropped",
            Event::OutboxSent => "outbox sent",
            Event::OutboxFailed(_) => "outbox failed",
        }
    }
}
