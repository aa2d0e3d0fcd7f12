//! Platform-agnostic core logic for the watch face
//!
//! This crate contains everything that does not depend on a particular
//! platform or display:
//!
//! - Settings and their persisted form
//! - Weather icon resolution
//! - Per-shape layout tables and polar geometry
//! - Text formatting for the day, date, steps and temperature
//! - Face state, events and the controller that applies them

#![no_std]
#![deny(unsafe_code)]

pub mod format;
pub mod geometry;
pub mod layout;
pub mod settings;
pub mod state;
pub mod weather;

pub use geometry::{Arc, Point, Rect};
pub use layout::{DeviceShape, Layout};
pub use settings::{Color, ColorScheme, Settings, SettingsError, SettingsStore};
pub use state::{Controller, DirtyLayers, Event, Layer, Reaction, WatchFaceState};
pub use weather::{IconAsset, IconVariant, WeatherCondition, WeatherState};
