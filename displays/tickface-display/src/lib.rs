//! Canvas abstraction and face renderers for Tickface
//!
//! This crate provides:
//! - [`Canvas`] trait for the drawing primitives the face needs
//! - Renderers for each part of the face (dial, gauges, hands)
//! - [`render_face`] to draw all of them in z-order
//! - [`RecordingCanvas`] for host tests
//!
//! # Architecture
//!
//! Renderers are pure functions of the layout table and the face state.
//! They keep nothing between frames and can be called any number of
//! times.
//!
//! ## Backends
//!
//! - **Platform canvas**: the device port implements [`Canvas`] on top of
//!   the platform graphics context.
//!
//! - **embedded-graphics** (feature `embedded-graphics`): `GraphicsCanvas`
//!   draws on any `DrawTarget` whose color implements `FaceColor`.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod dial;
pub mod face;
pub mod gauges;
#[cfg(feature = "embedded-graphics")]
pub mod graphics;
pub mod hands;
pub mod recording;

// Re-export key types
pub use backend::{Canvas, CanvasError, Font};
pub use face::{render_face, FaceBitmaps};
#[cfg(feature = "embedded-graphics")]
pub use graphics::{FaceColor, GraphicsCanvas};
pub use recording::{DrawCommand, RecordingCanvas};
