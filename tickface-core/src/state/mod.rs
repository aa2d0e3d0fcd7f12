//! Face state and event handling
//!
//! External events are applied by the [`Controller`], which mutates the
//! [`WatchFaceState`] and reports which layers need redrawing.

pub mod controller;
pub mod dirty;
pub mod events;
pub mod machine;

pub use controller::{Controller, InitialReadings, Reaction, WEATHER_REFRESH_MINUTES};
pub use dirty::{DirtyLayers, Layer};
pub use events::Event;
pub use machine::{BatteryState, HealthState, Phase, PhaseEvent, WatchFaceState, STEP_GOAL};
