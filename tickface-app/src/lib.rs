//! Tickface watch face runtime
//!
//! This crate ties the pieces together:
//! - [`WatchFace`] owns the controller and the platform services
//! - [`IconSlots`] owns the bitmaps bound to the face
//!
//! # Event flow
//!
//! ```text
//! platform event ──► WatchFace::dispatch ──► Controller::handle
//!                                                   │
//!                     haptics / outbox / storage ◄──┤ Reaction
//!                     icon slots, dirty layers   ◄──┘
//!
//! redraw cycle ──► WatchFace::redraw ──► render_face(canvas)
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod error;
pub mod icons;
pub mod runtime;

pub use error::FaceError;
pub use icons::{IconSlots, Slot};
pub use runtime::WatchFace;
