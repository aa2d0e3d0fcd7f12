//! Message types for the companion protocol
//!
//! Messages are divided into two directions:
//! - Companion → Watch: weather data and user configuration
//! - Watch → Companion: weather refresh request

use crate::dict::{DictError, Dictionary, Value, MAX_DICT_SIZE};
use heapless::{String, Vec};

// Keys: Companion → Watch
pub const KEY_TEMP: u32 = 10000;
pub const KEY_ICON: u32 = 10001;
pub const KEY_INVERT_COLORS: u32 = 10002;

// Keys: Watch → Companion
pub const KEY_WEATHER_REQUEST: u32 = 0;

/// Maximum stored icon code length
pub const MAX_ICON_CODE_LEN: usize = 32;

/// Weather icon code as sent by the companion (e.g. "clear-day", "01d")
pub type IconCode = String<MAX_ICON_CODE_LEN>;

/// Fields carried by one inbound message
///
/// Every field is optional; absent or mistyped tuples decode as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundMessage {
    /// Current temperature in the companion's configured unit
    pub temperature: Option<i32>,
    /// Weather icon code
    pub icon: Option<IconCode>,
    /// Color inversion flag; only the value 1 means inverted
    pub invert_colors: Option<bool>,
}

impl InboundMessage {
    /// Extract known fields from a dictionary; unknown keys are ignored
    pub fn from_dictionary(dict: &Dictionary) -> Self {
        Self {
            temperature: dict.find(KEY_TEMP).and_then(Value::as_i32),
            icon: dict.find(KEY_ICON).and_then(Value::as_str).map(icon_code),
            invert_colors: dict
                .find(KEY_INVERT_COLORS)
                .and_then(Value::as_i32)
                .map(|v| v == 1),
        }
    }

    /// Decode a message from its wire bytes
    pub fn decode(bytes: &[u8]) -> Result<Self, DictError> {
        Dictionary::decode(bytes).map(|dict| Self::from_dictionary(&dict))
    }

    /// Temperature and icon, only when both are present
    pub fn weather(&self) -> Option<(i32, &str)> {
        match (self.temperature, &self.icon) {
            (Some(temp), Some(icon)) => Some((temp, icon.as_str())),
            _ => None,
        }
    }

    /// Build the dictionary for this message (for testing or simulation)
    pub fn to_dictionary(&self) -> Result<Dictionary, DictError> {
        let mut dict = Dictionary::new();
        if let Some(temp) = self.temperature {
            dict.insert(KEY_TEMP, Value::Int32(temp))?;
        }
        if let Some(icon) = &self.icon {
            dict.insert(KEY_ICON, Value::cstring(icon)?)?;
        }
        if let Some(invert) = self.invert_colors {
            dict.insert(KEY_INVERT_COLORS, Value::Uint8(invert as u8))?;
        }
        Ok(dict)
    }
}

/// Copy an icon code, truncating at a char boundary if it does not fit
fn icon_code(text: &str) -> IconCode {
    let mut code = IconCode::new();
    for c in text.chars() {
        if code.push(c).is_err() {
            break;
        }
    }
    code
}

/// Request for a fresh weather reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherRequest;

impl WeatherRequest {
    /// Build the request dictionary: one uint8 tuple, key 0, value 0
    pub fn to_dictionary(&self) -> Result<Dictionary, DictError> {
        let mut dict = Dictionary::new();
        dict.insert(KEY_WEATHER_REQUEST, Value::Uint8(0))?;
        Ok(dict)
    }

    /// Encode the request into wire bytes
    pub fn encode(&self) -> Result<Vec<u8, MAX_DICT_SIZE>, DictError> {
        self.to_dictionary()?.encode_to_vec()
    }
}
