//! User settings and their persistence
//!
//! The face has exactly one piece of runtime configuration: the color
//! scheme. It is stored as a fixed 3-byte postcard blob. A blob of any
//! other length, or one that fails to decode, means "use defaults".

use serde::{Deserialize, Serialize};
use tickface_hal::storage::{PersistentStorage, StorageError, StorageKey};
use tickface_hal::{debug, info, warn};

/// Exact size of the persisted settings blob
pub const SETTINGS_BLOB_LEN: usize = 3;

/// 8-bit ARGB2222 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u8);

impl Color {
    pub const CLEAR: Color = Color(0x00);
    pub const BLACK: Color = Color(0xC0);
    pub const WHITE: Color = Color(0xFF);

    /// Alpha channel (0-3)
    pub const fn alpha(self) -> u8 {
        self.0 >> 6
    }

    /// Red, green and blue channels (0-3 each)
    pub const fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 4) & 0x3, (self.0 >> 2) & 0x3, self.0 & 0x3)
    }

    /// Returns true if the color fully covers what is beneath it
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0x3
    }
}

/// Background/foreground pair applied to every drawn element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorScheme {
    pub background: Color,
    pub foreground: Color,
}

impl ColorScheme {
    /// White on black
    pub const NORMAL: ColorScheme = ColorScheme {
        background: Color::BLACK,
        foreground: Color::WHITE,
    };

    /// Black on white
    pub const INVERTED: ColorScheme = ColorScheme {
        background: Color::WHITE,
        foreground: Color::BLACK,
    };

    /// Scheme for an inversion flag
    pub const fn for_inverted(inverted: bool) -> Self {
        if inverted {
            Self::INVERTED
        } else {
            Self::NORMAL
        }
    }
}

/// Persisted user settings
///
/// Foreground and background are always complementary. Use
/// [`Settings::set_inverted`] to change them together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    pub background: Color,
    pub foreground: Color,
    pub invert_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_inverted(false)
    }
}

impl Settings {
    /// Settings with colors derived from an inversion flag
    pub const fn with_inverted(inverted: bool) -> Self {
        let scheme = ColorScheme::for_inverted(inverted);
        Self {
            background: scheme.background,
            foreground: scheme.foreground,
            invert_colors: inverted,
        }
    }

    /// Set the inversion flag and flip both colors to match
    pub fn set_inverted(&mut self, inverted: bool) {
        *self = Self::with_inverted(inverted);
    }

    /// Returns true if the colors agree with the inversion flag
    pub fn is_consistent(&self) -> bool {
        *self == Self::with_inverted(self.invert_colors)
    }

    /// Serialize into the persisted blob
    pub fn to_bytes(&self) -> Result<[u8; SETTINGS_BLOB_LEN], SettingsError> {
        let mut buf = [0u8; SETTINGS_BLOB_LEN];
        let used = postcard::to_slice(self, &mut buf)
            .map_err(|_| SettingsError::Encode)?
            .len();
        if used != SETTINGS_BLOB_LEN {
            return Err(SettingsError::LengthMismatch(used));
        }
        Ok(buf)
    }

    /// Deserialize from a persisted blob
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SettingsError> {
        if bytes.len() != SETTINGS_BLOB_LEN {
            return Err(SettingsError::LengthMismatch(bytes.len()));
        }
        postcard::from_bytes(bytes).map_err(|_| SettingsError::Decode)
    }
}

/// Derive the colors to draw with
pub fn apply_color_scheme(settings: &Settings) -> ColorScheme {
    ColorScheme::for_inverted(settings.invert_colors)
}

/// Settings persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Storage operation failed
    Storage(StorageError),
    /// Serialization failed
    Encode,
    /// Deserialization failed
    Decode,
    /// Stored blob has the wrong size
    LengthMismatch(usize),
}

impl From<StorageError> for SettingsError {
    fn from(e: StorageError) -> Self {
        SettingsError::Storage(e)
    }
}

/// Settings persistence manager
pub struct SettingsStore<S> {
    storage: S,
}

impl<S: PersistentStorage> SettingsStore<S> {
    /// Create a new settings store
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Borrow the underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store and return the underlying storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Load settings, or an error if none are stored or they are invalid
    pub fn load(&mut self) -> Result<Settings, SettingsError> {
        // One spare byte so an oversized blob is caught as a length mismatch
        let mut buffer = [0u8; SETTINGS_BLOB_LEN + 1];
        let len = match self.storage.read(StorageKey::Settings, &mut buffer) {
            Ok(len) => len,
            Err(StorageError::BufferTooSmall) => {
                return Err(SettingsError::LengthMismatch(buffer.len()));
            }
            Err(e) => return Err(e.into()),
        };

        let settings = Settings::from_bytes(&buffer[..len])?;
        if !settings.is_consistent() {
            warn!("Stored colors disagree with inversion flag, re-deriving");
            return Ok(Settings::with_inverted(settings.invert_colors));
        }
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(&mut self) -> Settings {
        match self.load() {
            Ok(settings) => {
                info!("Loaded settings (inverted: {})", settings.invert_colors);
                settings
            }
            Err(SettingsError::Storage(StorageError::NotFound)) => {
                debug!("No stored settings, using defaults");
                Settings::default()
            }
            Err(e) => {
                warn!("Failed to load settings: {:?}, using defaults", e);
                Settings::default()
            }
        }
    }

    /// Persist settings
    pub fn try_save(&mut self, settings: &Settings) -> Result<(), SettingsError> {
        let bytes = settings.to_bytes()?;
        self.storage.write(StorageKey::Settings, &bytes)?;
        Ok(())
    }

    /// Persist settings, logging any failure
    pub fn save(&mut self, settings: &Settings) {
        match self.try_save(settings) {
            Ok(()) => debug!("Saved settings"),
            Err(e) => warn!("Failed to save settings: {:?}", e),
        }
    }
}
