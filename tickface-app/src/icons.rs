//! Bitmap slots
//!
//! Each slot owns at most one platform bitmap. Rebinding loads the new
//! bitmap first and releases the old one only once the replacement is in
//! place, so a failed load leaves the previous icon showing.

use tickface_core::{IconAsset, WatchFaceState};
use tickface_display::FaceBitmaps;
use tickface_hal::{debug, warn};
use tickface_hal::{BitmapHandle, ResourceError, ResourceLoader};

/// Icon positions on the face, in creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot {
    Charging,
    Bluetooth,
    Shoe,
    Weather,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Charging, Slot::Bluetooth, Slot::Shoe, Slot::Weather];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bound {
    asset: IconAsset,
    handle: BitmapHandle,
}

/// Loaded bitmaps for every slot
pub struct IconSlots<R> {
    loader: R,
    bound: [Option<Bound>; 4],
}

impl<R: ResourceLoader> IconSlots<R> {
    pub fn new(loader: R) -> Self {
        Self {
            loader,
            bound: [None; 4],
        }
    }

    pub fn loader(&self) -> &R {
        &self.loader
    }

    /// Asset currently bound to `slot`
    pub fn asset(&self, slot: Slot) -> Option<IconAsset> {
        self.bound[slot as usize].map(|b| b.asset)
    }

    pub fn handle(&self, slot: Slot) -> Option<BitmapHandle> {
        self.bound[slot as usize].map(|b| b.handle)
    }

    /// Bind `asset` to `slot`
    ///
    /// Returns `Ok(false)` if the asset was already bound. On error the
    /// slot keeps its previous bitmap.
    pub fn bind(&mut self, slot: Slot, asset: IconAsset) -> Result<bool, ResourceError> {
        if self.asset(slot) == Some(asset) {
            return Ok(false);
        }

        let handle = self.loader.load_bitmap(asset.resource_id())?;
        let previous = self.bound[slot as usize].replace(Bound { asset, handle });
        if let Some(old) = previous {
            self.loader.release_bitmap(old.handle);
        }
        debug!("Bound {:?} to {:?}", asset, slot);
        Ok(true)
    }

    /// Load the status glyphs, which never change
    pub fn load_glyphs(&mut self) {
        if let Err(e) = self.bind(Slot::Charging, IconAsset::Charging) {
            warn!("Failed to load charging glyph: {:?}", e);
        }
        if let Err(e) = self.bind(Slot::Bluetooth, IconAsset::BluetoothDisconnected) {
            warn!("Failed to load bluetooth glyph: {:?}", e);
        }
    }

    /// Re-resolve the shoe and weather icons from the current state
    pub fn rebind(&mut self, state: &WatchFaceState) {
        if let Err(e) = self.bind(Slot::Shoe, state.shoe_icon()) {
            warn!("Failed to load shoe icon: {:?}", e);
        }

        match state.weather_icon() {
            Some(asset) => {
                if let Err(e) = self.bind(Slot::Weather, asset) {
                    warn!("Failed to load weather icon: {:?}", e);
                }
            }
            None if state.weather.has_report() => {
                warn!(
                    "Unknown weather icon code {}, keeping previous icon",
                    state.weather.icon_code.as_str()
                );
            }
            None => {}
        }
    }

    /// Handles for the renderer
    pub fn bitmaps(&self) -> FaceBitmaps {
        FaceBitmaps {
            weather: self.handle(Slot::Weather),
            shoe: self.handle(Slot::Shoe),
            bluetooth: self.handle(Slot::Bluetooth),
            charging: self.handle(Slot::Charging),
        }
    }

    /// Release every bitmap, newest slot first
    pub fn release_all(&mut self) {
        for slot in Slot::ALL.iter().rev() {
            if let Some(bound) = self.bound[*slot as usize].take() {
                self.loader.release_bitmap(bound.handle);
            }
        }
    }
}
