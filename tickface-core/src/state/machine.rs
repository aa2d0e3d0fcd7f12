//! Face state
//!
//! Everything the renderers read lives in [`WatchFaceState`]. It is owned
//! by the controller and only mutated by event handlers.

use tickface_hal::LocalTime;

use crate::format::Label;
use crate::geometry::{battery_arc, health_arc, Arc};
use crate::settings::{apply_color_scheme, ColorScheme, Settings};
use crate::weather::{IconAsset, WeatherState};

/// Daily step goal the health gauge fills toward
pub const STEP_GOAL: u32 = 10_000;

/// Lifecycle phases of the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Constructed, settings loaded, not yet showing
    Created,
    /// Window loaded, subscriptions active
    Running,
    /// Resources released; no further events are accepted
    Stopped,
}

/// Lifecycle transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseEvent {
    Start,
    Teardown,
}

impl Phase {
    /// Check if event handlers should run
    pub fn accepts_events(&self) -> bool {
        matches!(self, Phase::Running)
    }

    /// Process a lifecycle event and return the next phase
    pub fn transition(self, event: PhaseEvent) -> Self {
        use Phase::*;
        use PhaseEvent::*;

        match (self, event) {
            (Created, Start) => Running,
            (Created, Teardown) => Stopped,
            (Running, Teardown) => Stopped,

            // Default: stay in current phase
            _ => self,
        }
    }
}

/// Battery reading as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryState {
    /// Charge level, clamped to 0-100
    pub percent: u8,
    /// Charging or plugged in
    pub charging: bool,
}

/// Step count as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HealthState {
    pub steps: u32,
    pub goal: u32,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            steps: 0,
            goal: STEP_GOAL,
        }
    }
}

/// All mutable face state
#[derive(Debug, Clone, PartialEq)]
pub struct WatchFaceState {
    pub phase: Phase,
    pub settings: Settings,
    pub clock: LocalTime,
    pub battery: BatteryState,
    /// `None` until the first connection reading
    pub connected: Option<bool>,
    pub health: HealthState,
    pub weather: WeatherState,
    pub day_text: Label,
    pub date_text: Label,
    pub steps_text: Label,
    pub temperature_text: Label,
}

impl WatchFaceState {
    pub fn new(settings: Settings) -> Self {
        Self {
            phase: Phase::Created,
            settings,
            clock: LocalTime::default(),
            battery: BatteryState::default(),
            connected: None,
            health: HealthState::default(),
            weather: WeatherState::default(),
            day_text: Label::new(),
            date_text: Label::new(),
            steps_text: Label::new(),
            temperature_text: Label::new(),
        }
    }

    /// Colors to draw with
    pub fn colors(&self) -> ColorScheme {
        apply_color_scheme(&self.settings)
    }

    pub fn inverted(&self) -> bool {
        self.settings.invert_colors
    }

    /// The disconnected glyph shows only once the link is known to be down
    pub fn bluetooth_glyph_visible(&self) -> bool {
        self.connected == Some(false)
    }

    pub fn charging_glyph_visible(&self) -> bool {
        self.battery.charging
    }

    pub fn battery_arc(&self) -> Arc {
        battery_arc(self.battery.percent)
    }

    pub fn health_arc(&self) -> Arc {
        health_arc(self.health.steps, self.health.goal)
    }

    /// Weather icon for the last report, if its code is known
    pub fn weather_icon(&self) -> Option<IconAsset> {
        self.weather.icon(self.inverted())
    }

    pub fn shoe_icon(&self) -> IconAsset {
        IconAsset::shoe(self.inverted())
    }
}
