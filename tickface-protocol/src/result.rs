//! Message delivery result codes reported by the transport

/// Outcome of an inbound drop or outbound send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageResult {
    /// Delivered
    Ok,
    /// The other side did not acknowledge in time
    SendTimeout,
    /// The other side rejected the message
    SendRejected,
    /// No link to the phone
    NotConnected,
    /// Companion app is not running
    AppNotRunning,
    /// Invalid arguments to the transport
    InvalidArgs,
    /// A message is already in flight
    Busy,
    /// Message larger than the buffer
    BufferOverflow,
    /// Transport could not allocate
    OutOfMemory,
    /// Transport is closed
    Closed,
    /// Transport internal error
    InternalError,
}

// Wire format values
const RESULT_OK: u32 = 0;
const RESULT_SEND_TIMEOUT: u32 = 1 << 1;
const RESULT_SEND_REJECTED: u32 = 1 << 2;
const RESULT_NOT_CONNECTED: u32 = 1 << 3;
const RESULT_APP_NOT_RUNNING: u32 = 1 << 4;
const RESULT_INVALID_ARGS: u32 = 1 << 5;
const RESULT_BUSY: u32 = 1 << 6;
const RESULT_BUFFER_OVERFLOW: u32 = 1 << 7;
const RESULT_OUT_OF_MEMORY: u32 = 1 << 12;
const RESULT_CLOSED: u32 = 1 << 13;
const RESULT_INTERNAL_ERROR: u32 = 1 << 14;

impl MessageResult {
    /// Parse a result from its wire code
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            RESULT_OK => Some(MessageResult::Ok),
            RESULT_SEND_TIMEOUT => Some(MessageResult::SendTimeout),
            RESULT_SEND_REJECTED => Some(MessageResult::SendRejected),
            RESULT_NOT_CONNECTED => Some(MessageResult::NotConnected),
            RESULT_APP_NOT_RUNNING => Some(MessageResult::AppNotRunning),
            RESULT_INVALID_ARGS => Some(MessageResult::InvalidArgs),
            RESULT_BUSY => Some(MessageResult::Busy),
            RESULT_BUFFER_OVERFLOW => Some(MessageResult::BufferOverflow),
            RESULT_OUT_OF_MEMORY => Some(MessageResult::OutOfMemory),
            RESULT_CLOSED => Some(MessageResult::Closed),
            RESULT_INTERNAL_ERROR => Some(MessageResult::InternalError),
            _ => None,
        }
    }

    /// Convert to wire code
    pub fn to_code(self) -> u32 {
        match self {
            MessageResult::Ok => RESULT_OK,
            MessageResult::SendTimeout => RESULT_SEND_TIMEOUT,
            MessageResult::SendRejected => RESULT_SEND_REJECTED,
            MessageResult::NotConnected => RESULT_NOT_CONNECTED,
            MessageResult::AppNotRunning => RESULT_APP_NOT_RUNNING,
            MessageResult::InvalidArgs => RESULT_INVALID_ARGS,
            MessageResult::Busy => RESULT_BUSY,
            MessageResult::BufferOverflow => RESULT_BUFFER_OVERFLOW,
            MessageResult::OutOfMemory => RESULT_OUT_OF_MEMORY,
            MessageResult::Closed => RESULT_CLOSED,
            MessageResult::InternalError => RESULT_INTERNAL_ERROR,
        }
    }

    /// Returns true if the message was delivered
    pub fn is_ok(&self) -> bool {
        matches!(self, MessageResult::Ok)
    }

    /// Returns true if the failure is about the link rather than the message
    pub fn is_link_failure(&self) -> bool {
        matches!(
            self,
            MessageResult::NotConnected | MessageResult::AppNotRunning | MessageResult::Closed
        )
    }

    /// Short human-readable reason
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageResult::Ok => "ok",
            MessageResult::SendTimeout => "send timeout",
            MessageResult::SendRejected => "send rejected",
            MessageResult::NotConnected => "not connected",
            MessageResult::AppNotRunning => "app not running",
            MessageResult::InvalidArgs => "invalid args",
            MessageResult::Busy => "busy",
            MessageResult::BufferOverflow => "buffer overflow",
            MessageResult::OutOfMemory => "out of memory",
            MessageResult::Closed => "closed",
            MessageResult::InternalError => "internal error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_roundtrip() {
        let results = [
            MessageResult::Ok,
            MessageResult::SendTimeout,
            MessageResult::SendRejected,
            MessageResult::NotConnected,
            MessageResult::AppNotRunning,
            MessageResult::InvalidArgs,
            MessageResult::Busy,
            MessageResult::BufferOverflow,
            MessageResult::OutOfMemory,
            MessageResult::Closed,
            MessageResult::InternalError,
        ];

        for result in results {
            let code = result.to_code();
            assert_eq!(MessageResult::from_code(code), Some(result));
        }
    }

    #[test]
    fn test_is_ok() {
        assert!(MessageResult::Ok.is_ok());
        assert!(!MessageResult::Busy.is_ok());
    }

    #[test]
    fn test_is_link_failure() {
        assert!(MessageResult::NotConnected.is_link_failure());
        assert!(!MessageResult::BufferOverflow.is_link_failure());
    }

    #[test]
    fn test_unknown_code() {
        assert!(MessageResult::from_code(3).is_none());
        assert!(MessageResult::from_code(u32::MAX).is_none());
    }
}
