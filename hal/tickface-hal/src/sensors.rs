//! Sensor and service data delivered by the platform
//!
//! The platform pushes these values through its subscriptions; the
//! [`Sensors`] trait covers the synchronous "peek" used at startup.

/// Wall-clock reading in local time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocalTime {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Day of week, 0 = Sunday
    pub weekday: u8,
    /// Day of month (1-31)
    pub day: u8,
}

impl LocalTime {
    /// Create a local time reading
    pub const fn new(hour: u8, minute: u8, weekday: u8, day: u8) -> Self {
        Self {
            hour,
            minute,
            weekday,
            day,
        }
    }
}

/// Battery charge state as reported by the battery service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChargeState {
    /// Charge level in percent; may exceed 100 on some gauges
    pub percent: u8,
    /// Battery is currently charging
    pub is_charging: bool,
    /// Charger cable is connected
    pub is_plugged: bool,
}

/// Kinds of health service notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HealthEventKind {
    /// Significant change in all metrics (e.g. day rollover)
    SignificantUpdate,
    /// Step count or activity changed
    MovementUpdate,
    /// Sleep data changed
    SleepUpdate,
    /// A metric crossed a registered threshold
    MetricAlert,
    /// New heart rate sample
    HeartRateUpdate,
}

/// Synchronous sensor reads
pub trait Sensors {
    /// Current local time
    fn now(&self) -> LocalTime;

    /// Current battery state
    fn battery(&self) -> ChargeState;

    /// Whether the companion app link is up
    fn app_connected(&self) -> bool;

    /// Cumulative step count since midnight
    fn steps_today(&self) -> u32;
}
