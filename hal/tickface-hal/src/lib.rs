//! Tickface Platform Abstraction Layer
//!
//! This crate defines the narrow interfaces the watch face consumes from
//! its host platform. The host owns the event loop, the framebuffer and
//! the radio; the face only talks to it through these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Watch face (tickface-app)              │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tickface-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ device port   │       │  host fakes   │
//! │ (platform)    │       │  (testing)    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`storage::PersistentStorage`] - Key/value persisted blobs
//! - [`outbox::Outbox`] - Outbound messages to the companion device
//! - [`haptics::Haptics`] - Vibration motor
//! - [`resources::ResourceLoader`] - Bitmap resources
//! - [`sensors::Sensors`] - Clock, battery, connection and health peeks
//!
//! # Logging
//!
//! `trace!`, `debug!`, `info!`, `warn!` and `error!` are exported from the
//! crate root for the rest of the workspace. They forward to `log` with the
//! `log` feature, to `defmt` with the `defmt` feature. Otherwise they only
//! type-check their arguments and print nothing.

#![no_std]
#![deny(unsafe_code)]

pub mod haptics;
pub mod outbox;
pub mod resources;
pub mod sensors;
pub mod storage;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

cfg_if::cfg_if! {
    if #[cfg(feature = "log")] {
        pub use log::{trace, debug, info, warn, error};
    }
    else if #[cfg(feature = "defmt")] {
        pub use defmt::{trace, debug, info, warn, error};
    }
    else {
        #[macro_export]
        macro_rules! trace {
            ($($arg:tt)*) => {{
                let _ = ::core::format_args!($($arg)*);
            }};
        }
        #[macro_export]
        macro_rules! debug {
            ($($arg:tt)*) => {{
                let _ = ::core::format_args!($($arg)*);
            }};
        }
        #[macro_export]
        macro_rules! info {
            ($($arg:tt)*) => {{
                let _ = ::core::format_args!($($arg)*);
            }};
        }
        #[macro_export]
        macro_rules! warn {
            ($($arg:tt)*) => {{
                let _ = ::core::format_args!($($arg)*);
            }};
        }
        #[macro_export]
        macro_rules! error {
            ($($arg:tt)*) => {{
                let _ = ::core::format_args!($($arg)*);
            }};
        }
    }
}

// Re-export key traits at crate root for convenience
pub use haptics::{Haptics, VibePattern};
pub use outbox::{Outbox, SendError};
pub use resources::{BitmapHandle, ResourceError, ResourceId, ResourceLoader};
pub use sensors::{ChargeState, HealthEventKind, LocalTime, Sensors};
pub use storage::{PersistentStorage, StorageError, StorageKey};
