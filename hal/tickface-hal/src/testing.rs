//! In-memory service fakes
//!
//! Used by host tests across the workspace. Every fake records what the
//! face asked of it so tests can assert on side effects.

use heapless::Vec;

use crate::haptics::{Haptics, VibePattern};
use crate::outbox::{Outbox, SendError};
use crate::resources::{BitmapHandle, ResourceError, ResourceId, ResourceLoader};
use crate::sensors::{ChargeState, LocalTime, Sensors};
use crate::storage::{PersistentStorage, StorageError, StorageKey};

/// Maximum size of one stored value
pub const MAX_VALUE_SIZE: usize = 64;

/// Maximum number of stored keys
const MAX_KEYS: usize = 4;

/// RAM-backed [`PersistentStorage`]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Vec<(StorageKey, Vec<u8, MAX_VALUE_SIZE>), MAX_KEYS>,
    /// Number of successful writes
    pub writes: usize,
    /// Make every read fail with [`StorageError::Io`]
    pub fail_reads: bool,
    /// Make every write fail with [`StorageError::Io`]
    pub fail_writes: bool,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding one raw value
    pub fn with_value(key: StorageKey, data: &[u8]) -> Self {
        let mut storage = Self::new();
        let _ = storage.write(key, data);
        storage.writes = 0;
        storage
    }

    /// Raw stored bytes for a key
    pub fn value(&self, key: StorageKey) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_slice())
    }
}

impl PersistentStorage for MemoryStorage {
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Io);
        }
        let value = self.value(key).ok_or(StorageError::NotFound)?;
        if buffer.len() < value.len() {
            return Err(StorageError::BufferTooSmall);
        }
        buffer[..value.len()].copy_from_slice(value);
        Ok(value.len())
    }

    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Io);
        }
        let mut value = Vec::new();
        value
            .extend_from_slice(data)
            .map_err(|_| StorageError::TooLarge)?;

        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries
                .push((key, value))
                .map_err(|_| StorageError::TooLarge)?;
        }
        self.writes += 1;
        Ok(())
    }

    fn exists(&mut self, key: StorageKey) -> bool {
        self.value(key).is_some()
    }

    fn delete(&mut self, key: StorageKey) -> Result<(), StorageError> {
        let index = self
            .entries
            .iter()
            .position(|(k, _)| *k == key)
            .ok_or(StorageError::NotFound)?;
        self.entries.swap_remove(index);
        Ok(())
    }
}

/// Maximum recorded outbound payload size
pub const MAX_RECORDED_PAYLOAD: usize = 32;

/// [`Outbox`] that records every accepted payload
#[derive(Debug, Default)]
pub struct RecordingOutbox {
    /// Accepted payloads, oldest first
    pub sent: Vec<Vec<u8, MAX_RECORDED_PAYLOAD>, 16>,
    /// Error to return instead of accepting
    pub fail_with: Option<SendError>,
}

impl RecordingOutbox {
    /// Create an outbox that accepts everything
    pub fn new() -> Self {
        Self::default()
    }
}

impl Outbox for RecordingOutbox {
    fn send(&mut self, payload: &[u8]) -> Result<(), SendError> {
        if let Some(err) = self.fail_with {
            return Err(err);
        }
        let mut bytes = Vec::new();
        bytes
            .extend_from_slice(payload)
            .map_err(|_| SendError::Overflow)?;
        self.sent.push(bytes).map_err(|_| SendError::Busy)
    }

    fn capacity(&self) -> usize {
        MAX_RECORDED_PAYLOAD
    }
}

/// [`Haptics`] that counts played patterns
#[derive(Debug, Default)]
pub struct CountingHaptics {
    /// Patterns played, oldest first
    pub played: Vec<VibePattern, 16>,
    /// Number of cancel calls
    pub cancels: usize,
}

impl CountingHaptics {
    /// Create a silent motor
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times a pattern was played
    pub fn count(&self, pattern: VibePattern) -> usize {
        self.played.iter().filter(|p| **p == pattern).count()
    }
}

impl Haptics for CountingHaptics {
    fn vibrate(&mut self, pattern: VibePattern) {
        let _ = self.played.push(pattern);
    }

    fn cancel(&mut self) {
        self.cancels += 1;
    }
}

/// Maximum number of tracked bitmaps
const MAX_BITMAPS: usize = 64;

/// [`ResourceLoader`] that tracks live handles
#[derive(Debug, Default)]
pub struct FakeResources {
    next_handle: u32,
    /// Handles loaded and not yet released, with their resource id
    pub live: Vec<(BitmapHandle, ResourceId), MAX_BITMAPS>,
    /// Handles in the order they were released
    pub released: Vec<BitmapHandle, MAX_BITMAPS>,
    /// Resource ids that fail to load
    pub missing: Vec<ResourceId, 8>,
}

impl FakeResources {
    /// Create a loader where every resource exists
    pub fn new() -> Self {
        Self::default()
    }

    /// Resource id behind a live handle
    pub fn resource_of(&self, handle: BitmapHandle) -> Option<ResourceId> {
        self.live
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, id)| *id)
    }
}

impl ResourceLoader for FakeResources {
    fn load_bitmap(&mut self, id: ResourceId) -> Result<BitmapHandle, ResourceError> {
        if self.missing.contains(&id) {
            return Err(ResourceError::NotFound);
        }
        self.next_handle += 1;
        let handle = BitmapHandle(self.next_handle);
        self.live
            .push((handle, id))
            .map_err(|_| ResourceError::OutOfMemory)?;
        Ok(handle)
    }

    fn release_bitmap(&mut self, handle: BitmapHandle) {
        if let Some(index) = self.live.iter().position(|(h, _)| *h == handle) {
            self.live.swap_remove(index);
        }
        let _ = self.released.push(handle);
    }
}

/// [`Sensors`] with directly settable readings
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeSensors {
    pub time: LocalTime,
    pub charge: ChargeState,
    pub connected: bool,
    pub steps: u32,
}

impl Sensors for FakeSensors {
    fn now(&self) -> LocalTime {
        self.time
    }

    fn battery(&self) -> ChargeState {
        self.charge
    }

    fn app_connected(&self) -> bool {
        self.connected
    }

    fn steps_today(&self) -> u32 {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        storage.write(StorageKey::Settings, &[1, 2, 3]).unwrap();

        let mut buf = [0u8; 8];
        let len = storage.read(StorageKey::Settings, &mut buf).unwrap();
        assert_eq!(&buf[..len], &[1, 2, 3]);
        assert_eq!(storage.writes, 1);
    }

    #[test]
    fn test_memory_storage_overwrite() {
        let mut storage = MemoryStorage::with_value(StorageKey::Settings, &[9, 9, 9, 9]);
        storage.write(StorageKey::Settings, &[1]).unwrap();
        assert_eq!(storage.value(StorageKey::Settings), Some(&[1u8][..]));
    }

    #[test]
    fn test_memory_storage_missing_key() {
        let mut storage = MemoryStorage::new();
        let mut buf = [0u8; 8];
        assert_eq!(
            storage.read(StorageKey::Settings, &mut buf),
            Err(StorageError::NotFound)
        );
        assert!(!storage.exists(StorageKey::Settings));
    }

    #[test]
    fn test_memory_storage_small_buffer() {
        let mut storage = MemoryStorage::with_value(StorageKey::Settings, &[1, 2, 3]);
        let mut buf = [0u8; 2];
        assert_eq!(
            storage.read(StorageKey::Settings, &mut buf),
            Err(StorageError::BufferTooSmall)
        );
    }

    #[test]
    fn test_fake_resources_tracks_live_handles() {
        let mut res = FakeResources::new();
        let a = res.load_bitmap(ResourceId(1)).unwrap();
        let b = res.load_bitmap(ResourceId(2)).unwrap();
        assert_ne!(a, b);
        assert_eq!(res.live.len(), 2);

        res.release_bitmap(a);
        assert_eq!(res.live.len(), 1);
        assert_eq!(res.resource_of(b), Some(ResourceId(2)));
        assert_eq!(res.released.as_slice(), &[a]);
    }

    #[test]
    fn test_recording_outbox_failure() {
        let mut outbox = RecordingOutbox::new();
        outbox.fail_with = Some(SendError::NotConnected);
        assert_eq!(outbox.send(&[0]), Err(SendError::NotConnected));
        assert!(outbox.sent.is_empty());
    }
}
