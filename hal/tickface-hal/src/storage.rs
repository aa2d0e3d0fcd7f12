//! Persistent storage abstractions
//!
//! Provides the key/value blob store the watch face uses for its settings.
//! The host platform decides where blobs live; writes are synchronous.

/// Storage keys for persisted data
///
/// Keys are stable across firmware versions. The settings blob has no
/// version field, so changing its layout means a new key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum StorageKey {
    /// Color scheme and inversion flag
    Settings = 1,
}

impl StorageKey {
    /// Get the key as the platform's numeric key
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Create a key from a numeric value
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            1 => Some(StorageKey::Settings),
            _ => None,
        }
    }
}

/// Errors from persistent storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Key not found
    NotFound,
    /// Buffer too small for the stored data
    BufferTooSmall,
    /// Value exceeds the platform's per-key limit
    TooLarge,
    /// Underlying write or read failed
    Io,
}

/// Persistent key/value storage
///
/// Implementations map onto whatever the platform offers (flash pages,
/// a persist API, a file on a simulator host).
pub trait PersistentStorage {
    /// Read a value by key into the provided buffer
    ///
    /// # Returns
    /// The number of bytes read, or an error.
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError>;

    /// Write a value by key, replacing any previous value
    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError>;

    /// Check if a key exists in storage
    fn exists(&mut self, key: StorageKey) -> bool;

    /// Delete a key
    fn delete(&mut self, key: StorageKey) -> Result<(), StorageError>;
}

impl<T: PersistentStorage + ?Sized> PersistentStorage for &mut T {
    fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        (**self).read(key, buffer)
    }

    fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        (**self).write(key, data)
    }

    fn exists(&mut self, key: StorageKey) -> bool {
        (**self).exists(key)
    }

    fn delete(&mut self, key: StorageKey) -> Result<(), StorageError> {
        (**self).delete(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        let key = StorageKey::Settings;
        assert_eq!(StorageKey::from_u32(key.as_u32()), Some(key));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(StorageKey::from_u32(0), None);
        assert_eq!(StorageKey::from_u32(99), None);
    }
}
