//! Watch face runtime
//!
//! Glues the controller to the platform services. The host calls
//! [`WatchFace::start`] once its window is up, forwards every platform
//! event to [`WatchFace::dispatch`], calls [`WatchFace::redraw`] from its
//! redraw cycle, and [`WatchFace::teardown`] when the window goes away.

use tickface_core::state::{InitialReadings, Phase};
use tickface_core::{
    Controller, DeviceShape, DirtyLayers, Event, Layout, Reaction, Settings, SettingsStore,
    WatchFaceState,
};
use tickface_display::{render_face, Canvas, FaceBitmaps};
use tickface_hal::{debug, info, trace, warn};
use tickface_hal::{Haptics, Outbox, PersistentStorage, ResourceLoader, Sensors};
use tickface_protocol::{InboundMessage, WeatherRequest};

use crate::error::FaceError;
use crate::icons::IconSlots;

/// The running face and the services it drives
pub struct WatchFace<S, O, H, R> {
    controller: Controller,
    store: SettingsStore<S>,
    outbox: O,
    haptics: H,
    icons: IconSlots<R>,
    layout: &'static Layout,
    dirty: DirtyLayers,
}

impl<S, O, H, R> WatchFace<S, O, H, R>
where
    S: PersistentStorage,
    O: Outbox,
    H: Haptics,
    R: ResourceLoader,
{
    /// Create the face and load persisted settings
    ///
    /// Missing or unreadable settings fall back to the defaults.
    pub fn new(shape: DeviceShape, storage: S, outbox: O, haptics: H, resources: R) -> Self {
        let mut store = SettingsStore::new(storage);
        let settings = store.load_or_default();
        Self {
            controller: Controller::new(settings),
            store,
            outbox,
            haptics,
            icons: IconSlots::new(resources),
            layout: Layout::for_shape(shape),
            dirty: DirtyLayers::NONE,
        }
    }

    /// Show the face, reading every sensor once
    pub fn start<Z: Sensors>(&mut self, sensors: &Z) -> Result<(), FaceError> {
        if self.controller.phase() != Phase::Created {
            return Err(FaceError::NotCreated);
        }

        self.icons.load_glyphs();
        let readings = InitialReadings {
            time: sensors.now(),
            charge: sensors.battery(),
            connected: sensors.app_connected(),
            steps_today: sensors.steps_today(),
        };
        let reaction = self.controller.start(readings);
        self.apply(reaction);
        info!("Watch face started");
        Ok(())
    }

    /// Handle one platform event and carry out its side effects
    pub fn dispatch(&mut self, event: Event) -> Reaction {
        let reaction = self.controller.handle(event);
        self.apply(reaction);
        reaction
    }

    /// Decode and handle a raw inbound dictionary
    ///
    /// Malformed payloads are logged and dropped.
    pub fn receive(&mut self, payload: &[u8]) -> Reaction {
        match InboundMessage::decode(payload) {
            Ok(message) => self.dispatch(Event::Inbound(message)),
            Err(e) => {
                warn!("Dropping malformed inbound message: {:?}", e);
                Reaction::default()
            }
        }
    }

    /// Draw the face if anything changed
    ///
    /// Returns `Ok(true)` when a frame was drawn. A failed frame stays
    /// dirty and is drawn again on the next call.
    pub fn redraw<C: Canvas>(&mut self, canvas: &mut C) -> Result<bool, FaceError> {
        if self.dirty.is_empty() {
            return Ok(false);
        }
        trace!("Redrawing face");
        render_face(canvas, self.layout, self.controller.state(), &self.icons.bitmaps())?;
        self.dirty.clear();
        Ok(true)
    }

    /// Stop handling events and release every bitmap
    pub fn teardown(&mut self) {
        self.controller.stop();
        self.haptics.cancel();
        self.icons.release_all();
        self.dirty.clear();
        info!("Watch face torn down");
    }

    fn apply(&mut self, reaction: Reaction) {
        if reaction.alert {
            debug!("Disconnect alert");
            self.haptics.double_pulse();
        }
        if reaction.request_weather {
            self.request_weather();
        }
        if reaction.persist_settings {
            self.store.save(self.controller.settings());
        }
        if reaction.rebind_icons {
            self.icons.rebind(self.controller.state());
        }
        self.dirty.merge(reaction.dirty);
    }

    fn request_weather(&mut self) {
        let payload = match WeatherRequest.encode() {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to encode weather request: {:?}", e);
                return;
            }
        };
        match self.outbox.send(&payload) {
            Ok(()) => debug!("Weather refresh requested"),
            Err(e) => warn!("Failed to send weather request: {:?}", e),
        }
    }

    pub fn state(&self) -> &WatchFaceState {
        self.controller.state()
    }

    pub fn settings(&self) -> &Settings {
        self.controller.settings()
    }

    pub fn layout(&self) -> &'static Layout {
        self.layout
    }

    /// Layers waiting for the next redraw
    pub fn dirty(&self) -> DirtyLayers {
        self.dirty
    }

    pub fn needs_redraw(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn bitmaps(&self) -> FaceBitmaps {
        self.icons.bitmaps()
    }

    pub fn icons(&self) -> &IconSlots<R> {
        &self.icons
    }

    pub fn storage(&self) -> &S {
        self.store.storage()
    }

    pub fn outbox(&self) -> &O {
        &self.outbox
    }

    pub fn haptics(&self) -> &H {
        &self.haptics
    }
}
