//! Event handling
//!
//! The controller owns the face state. Each handler mutates it and returns
//! a [`Reaction`] describing what the runtime must do next: which layers
//! to redraw and which platform services to call. The controller itself
//! never touches a platform service.

use tickface_hal::{debug, info, trace, warn};
use tickface_hal::{ChargeState, HealthEventKind, LocalTime};
use tickface_protocol::{InboundMessage, MessageResult};

use super::dirty::{DirtyLayers, Layer};
use super::events::Event;
use super::machine::{Phase, PhaseEvent, WatchFaceState};
use crate::format::{date_text, steps_text, temperature_text, weekday_name};
use crate::settings::Settings;

/// Minutes between weather refresh requests
pub const WEATHER_REFRESH_MINUTES: u8 = 30;

/// Side effects requested by a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reaction {
    /// Layers to redraw
    pub dirty: DirtyLayers,
    /// Play the disconnect vibration
    pub alert: bool,
    /// Send one weather refresh request
    pub request_weather: bool,
    /// Write the settings to storage
    pub persist_settings: bool,
    /// Re-resolve and re-bind the weather and shoe icons
    pub rebind_icons: bool,
}

impl Reaction {
    /// Reaction that only redraws
    pub fn redraw(dirty: DirtyLayers) -> Self {
        Self {
            dirty,
            ..Self::default()
        }
    }

    /// Check if nothing needs doing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Combine with another reaction
    pub fn merge(&mut self, other: Reaction) {
        self.dirty.merge(other.dirty);
        self.alert |= other.alert;
        self.request_weather |= other.request_weather;
        self.persist_settings |= other.persist_settings;
        self.rebind_icons |= other.rebind_icons;
    }
}

/// Sensor readings taken once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitialReadings {
    pub time: LocalTime,
    pub charge: ChargeState,
    pub connected: bool,
    pub steps_today: u32,
}

/// Face controller
pub struct Controller {
    state: WatchFaceState,
    /// Time of the last weather refresh slot, so duplicate ticks request once
    last_refresh: Option<LocalTime>,
}

impl Controller {
    /// Create a controller with loaded settings
    pub fn new(settings: Settings) -> Self {
        Self {
            state: WatchFaceState::new(settings),
            last_refresh: None,
        }
    }

    /// Get current state
    pub fn state(&self) -> &WatchFaceState {
        &self.state
    }

    /// Get current settings
    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    /// Get current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Bring the face up with a forced refresh of every reading
    ///
    /// Nothing vibrates and no weather request goes out. Settings are
    /// persisted once so a fresh install has a stored blob.
    pub fn start(&mut self, readings: InitialReadings) -> Reaction {
        if self.state.phase != Phase::Created {
            warn!("Start ignored in phase {:?}", self.state.phase);
            return Reaction::default();
        }
        self.state.phase = self.state.phase.transition(PhaseEvent::Start);
        info!("Watch face starting");

        self.apply_time(readings.time);
        self.apply_health(readings.steps_today);
        self.apply_battery(readings.charge);
        self.state.connected = Some(readings.connected);

        Reaction {
            dirty: DirtyLayers::all(),
            alert: false,
            request_weather: false,
            persist_settings: true,
            rebind_icons: true,
        }
    }

    /// Stop accepting events
    pub fn stop(&mut self) {
        self.state.phase = self.state.phase.transition(PhaseEvent::Teardown);
        info!("Watch face stopped");
    }

    /// Process one event
    pub fn handle(&mut self, event: Event) -> Reaction {
        if !self.state.phase.accepts_events() {
            debug!("Dropping {} event in phase {:?}", event.name(), self.state.phase);
            return Reaction::default();
        }
        trace!("Handling {} event", event.name());

        match event {
            Event::Tick(time) => self.handle_tick(time),
            Event::Battery(charge) => self.handle_battery(charge),
            Event::Connection(connected) => self.handle_connection(connected),
            Event::Health { kind, steps_today } => self.handle_health(kind, steps_today),
            Event::Inbound(message) => self.handle_inbound(&message),
            Event::InboxDropped(reason) => {
                warn!("Inbox message dropped: {}", reason.as_str());
                Reaction::default()
            }
            Event::OutboxSent => {
                info!("Outbox sent");
                Reaction::default()
            }
            Event::OutboxFailed(reason) => self.handle_outbox_failed(reason),
        }
    }

    /// Handle minute tick
    fn handle_tick(&mut self, time: LocalTime) -> Reaction {
        self.apply_time(time);

        let mut reaction = Reaction::redraw(DirtyLayers::NONE.with(Layer::Hands).with(Layer::Text));
        if time.minute % WEATHER_REFRESH_MINUTES == 0 && self.last_refresh != Some(time) {
            self.last_refresh = Some(time);
            reaction.request_weather = true;
        }
        reaction
    }

    /// Handle battery state change
    fn handle_battery(&mut self, charge: ChargeState) -> Reaction {
        self.apply_battery(charge);
        Reaction::redraw(DirtyLayers::NONE.with(Layer::Battery).with(Layer::Glyphs))
    }

    /// Handle companion link change
    fn handle_connection(&mut self, connected: bool) -> Reaction {
        let previous = self.state.connected.replace(connected);
        let mut reaction = Reaction::redraw(DirtyLayers::NONE.with(Layer::Glyphs));

        if previous == Some(true) && !connected {
            info!("Companion disconnected");
            reaction.alert = true;
        } else if previous == Some(false) && connected {
            info!("Companion reconnected");
        }
        reaction
    }

    /// Handle health notification
    fn handle_health(&mut self, kind: HealthEventKind, steps_today: u32) -> Reaction {
        if kind != HealthEventKind::MovementUpdate {
            trace!("Ignoring health event {:?}", kind);
            return Reaction::default();
        }
        self.apply_health(steps_today);
        Reaction::redraw(DirtyLayers::NONE.with(Layer::Health).with(Layer::Text))
    }

    /// Handle message from the companion
    fn handle_inbound(&mut self, message: &InboundMessage) -> Reaction {
        match message.weather() {
            Some((temperature, icon)) => {
                debug!("Weather update: {} {}", temperature, icon);
                self.state.weather.update(temperature, icon);
                self.state.temperature_text = temperature_text(temperature);
            }
            None => debug!("Inbound message without a complete weather report"),
        }

        let mut reaction = Reaction {
            dirty: DirtyLayers::all(),
            rebind_icons: true,
            ..Reaction::default()
        };

        if let Some(invert) = message.invert_colors {
            info!("Color inversion set to {}", invert);
            self.state.settings.set_inverted(invert);
            reaction.persist_settings = true;
        }
        reaction
    }

    /// Handle failed outbound message
    fn handle_outbox_failed(&mut self, reason: MessageResult) -> Reaction {
        if reason.is_link_failure() {
            warn!("Outbox send failed, link down: {}", reason.as_str());
        } else {
            warn!("Outbox send failed: {}", reason.as_str());
        }
        Reaction::default()
    }

    fn apply_time(&mut self, time: LocalTime) {
        self.state.clock = time;
        self.state.day_text.clear();
        let _ = self.state.day_text.push_str(weekday_name(time.weekday));
        self.state.date_text = date_text(time.day);
    }

    fn apply_battery(&mut self, charge: ChargeState) {
        self.state.battery.percent = charge.percent.min(100);
        self.state.battery.charging = charge.is_charging || charge.is_plugged;
    }

    fn apply_health(&mut self, steps_today: u32) {
        self.state.health.steps = steps_today;
        self.state.steps_text = steps_text(steps_today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tickface_protocol::IconCode;

    use crate::settings::Color;
    use crate::weather::{IconAsset, IconVariant, WeatherCondition};

    fn readings() -> InitialReadings {
        InitialReadings {
            time: LocalTime::new(10, 8, 2, 5),
            charge: ChargeState {
                percent: 80,
                is_charging: false,
                is_plugged: false,
            },
            connected: true,
            steps_today: 0,
        }
    }

    fn started() -> Controller {
        let mut controller = Controller::new(Settings::default());
        controller.start(readings());
        controller
    }

    fn inbound(temp: Option<i32>, icon: Option<&str>, invert: Option<bool>) -> Event {
        Event::Inbound(InboundMessage {
            temperature: temp,
            icon: icon.map(|s| {
                let mut code = IconCode::new();
                code.push_str(s).unwrap();
                code
            }),
            invert_colors: invert,
        })
    }

    #[test]
    fn test_start_refreshes_everything() {
        let mut controller = Controller::new(Settings::default());
        let reaction = controller.start(readings());

        assert_eq!(reaction.dirty, DirtyLayers::all());
        assert!(reaction.persist_settings);
        assert!(reaction.rebind_icons);
        assert!(!reaction.alert);
        assert!(!reaction.request_weather);

        let state = controller.state();
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.day_text.as_str(), "TUE");
        assert_eq!(state.date_text.as_str(), "5");
        assert_eq!(state.steps_text.as_str(), "0");
        assert_eq!(state.battery.percent, 80);
        assert_eq!(state.connected, Some(true));
    }

    #[test]
    fn test_start_disconnected_shows_glyph_without_alert() {
        let mut controller = Controller::new(Settings::default());
        let reaction = controller.start(InitialReadings {
            connected: false,
            ..readings()
        });
        assert!(!reaction.alert);
        assert!(controller.state().bluetooth_glyph_visible());
    }

    #[test]
    fn test_start_twice_ignored() {
        let mut controller = started();
        assert!(controller.start(readings()).is_empty());
    }

    #[test]
    fn test_events_ignored_before_start_and_after_stop() {
        let mut controller = Controller::new(Settings::default());
        assert!(controller.handle(Event::Connection(false)).is_empty());

        controller.start(readings());
        controller.stop();
        assert!(controller.handle(Event::Tick(LocalTime::new(0, 30, 0, 1))).is_empty());
        assert_eq!(controller.phase(), Phase::Stopped);
    }

    #[test]
    fn test_tick_updates_text_and_hands() {
        let mut controller = started();
        let reaction = controller.handle(Event::Tick(LocalTime::new(23, 59, 6, 17)));

        assert!(reaction.dirty.contains(Layer::Hands));
        assert!(reaction.dirty.contains(Layer::Text));
        assert!(!reaction.request_weather);
        assert_eq!(controller.state().day_text.as_str(), "SAT");
        assert_eq!(controller.state().date_text.as_str(), "17");
    }

    #[test]
    fn test_tick_bad_weekday_gives_empty_text() {
        let mut controller = started();
        controller.handle(Event::Tick(LocalTime::new(1, 1, 9, 1)));
        assert_eq!(controller.state().day_text.as_str(), "");
    }

    #[test]
    fn test_refresh_on_half_hour_only() {
        let mut controller = started();
        let at_30 = controller.handle(Event::Tick(LocalTime::new(10, 30, 2, 5)));
        let at_31 = controller.handle(Event::Tick(LocalTime::new(10, 31, 2, 5)));
        let at_00 = controller.handle(Event::Tick(LocalTime::new(11, 0, 2, 5)));

        assert!(at_30.request_weather);
        assert!(!at_31.request_weather);
        assert!(at_00.request_weather);
    }

    #[test]
    fn test_duplicate_tick_requests_once() {
        let mut controller = started();
        let time = LocalTime::new(10, 30, 2, 5);
        assert!(controller.handle(Event::Tick(time)).request_weather);
        assert!(!controller.handle(Event::Tick(time)).request_weather);
    }

    #[test]
    fn test_battery_clamped_and_plugged_counts_as_charging() {
        let mut controller = started();
        let reaction = controller.handle(Event::Battery(ChargeState {
            percent: 120,
            is_charging: false,
            is_plugged: true,
        }));

        assert!(reaction.dirty.contains(Layer::Battery));
        assert_eq!(controller.state().battery.percent, 100);
        assert!(controller.state().charging_glyph_visible());
    }

    #[test]
    fn test_disconnect_alerts_once() {
        let mut controller = started();

        let first = controller.handle(Event::Connection(false));
        assert!(first.alert);
        assert!(controller.state().bluetooth_glyph_visible());

        let second = controller.handle(Event::Connection(false));
        assert!(!second.alert);
        assert!(controller.state().bluetooth_glyph_visible());

        let reconnect = controller.handle(Event::Connection(true));
        assert!(!reconnect.alert);
        assert!(!controller.state().bluetooth_glyph_visible());
    }

    #[test]
    fn test_health_movement_only() {
        let mut controller = started();

        let ignored = controller.handle(Event::Health {
            kind: HealthEventKind::SleepUpdate,
            steps_today: 5000,
        });
        assert!(ignored.is_empty());
        assert_eq!(controller.state().health.steps, 0);

        let reaction = controller.handle(Event::Health {
            kind: HealthEventKind::MovementUpdate,
            steps_today: 12345,
        });
        assert!(reaction.dirty.contains(Layer::Health));
        assert_eq!(controller.state().steps_text.as_str(), "12k");
    }

    #[test]
    fn test_inbound_weather() {
        let mut controller = started();
        let reaction = controller.handle(inbound(Some(72), Some("01d"), None));

        assert!(reaction.rebind_icons);
        assert!(!reaction.persist_settings);
        assert_eq!(controller.state().temperature_text.as_str(), "72°");
        assert_eq!(
            controller.state().weather_icon(),
            Some(IconAsset::Weather(WeatherCondition::ClearDay, IconVariant::White))
        );
        assert!(!controller.settings().invert_colors);
    }

    #[test]
    fn test_inbound_partial_weather_untouched() {
        let mut controller = started();
        controller.handle(inbound(Some(72), Some("01d"), None));
        let reaction = controller.handle(inbound(Some(10), None, None));

        assert!(reaction.rebind_icons);
        assert_eq!(controller.state().weather.temperature, Some(72));
        assert_eq!(controller.state().temperature_text.as_str(), "72°");
    }

    #[test]
    fn test_inbound_invert_persists() {
        let mut controller = started();
        let reaction = controller.handle(inbound(None, None, Some(true)));

        assert!(reaction.persist_settings);
        assert_eq!(reaction.dirty, DirtyLayers::all());
        assert_eq!(controller.settings().background, Color::WHITE);
        assert_eq!(controller.settings().foreground, Color::BLACK);
        assert_eq!(controller.state().shoe_icon(), IconAsset::Shoe(IconVariant::Black));
    }

    #[test]
    fn test_transport_failures_do_not_mutate() {
        let mut controller = started();
        let before = controller.state().clone();

        assert!(controller
            .handle(Event::InboxDropped(MessageResult::BufferOverflow))
            .is_empty());
        assert!(controller
            .handle(Event::OutboxFailed(MessageResult::NotConnected))
            .is_empty());
        assert!(controller.handle(Event::OutboxSent).is_empty());
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn test_reaction_merge() {
        let mut a = Reaction::redraw(DirtyLayers::NONE.with(Layer::Hands));
        let b = Reaction {
            alert: true,
            ..Reaction::redraw(DirtyLayers::NONE.with(Layer::Glyphs))
        };
        a.merge(b);
        assert!(a.alert);
        assert!(a.dirty.contains(Layer::Hands));
        assert!(a.dirty.contains(Layer::Glyphs));
    }

    proptest! {
        #[test]
        fn prop_alerts_equal_disconnect_transitions(events in proptest::collection::vec(any::<bool>(), 0..32)) {
            let mut controller = started();
            let mut previous = true;
            let mut expected = 0;
            let mut alerts = 0;
            for connected in events {
                if previous && !connected {
                    expected += 1;
                }
                previous = connected;
                if controller.handle(Event::Connection(connected)).alert {
                    alerts += 1;
                }
            }
            prop_assert_eq!(alerts, expected);
        }

        #[test]
        fn prop_invert_toggles_keep_colors_complementary(flags in proptest::collection::vec(any::<bool>(), 1..16)) {
            let mut controller = started();
            for invert in flags {
                controller.handle(inbound(None, None, Some(invert)));
                let colors = controller.state().colors();
                prop_assert_ne!(colors.background, colors.foreground);
                prop_assert_eq!(colors.background, controller.settings().background);
            }
        }

        #[test]
        fn prop_only_half_hours_request(minute in 0u8..60) {
            let mut controller = started();
            let reaction = controller.handle(Event::Tick(LocalTime::new(12, minute, 3, 14)));
            prop_assert_eq!(reaction.request_weather, minute % 30 == 0);
        }
    }
}
