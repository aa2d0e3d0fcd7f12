//! Weather conditions and icon assets
//!
//! The companion sends an icon code from one of two vocabularies:
//! descriptive names ("partly-cloudy-day") or short day/night codes
//! ("02d"). Both map onto twelve conditions, and each condition has a
//! white and a black rendition chosen by the inversion flag.

use tickface_hal::ResourceId;
use tickface_protocol::IconCode;

/// Canonical weather conditions with a dedicated icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WeatherCondition {
    ClearDay,
    ClearNight,
    Rain,
    MistDay,
    MistNight,
    Snow,
    Sleet,
    Wind,
    Fog,
    Cloudy,
    PartlyCloudyDay,
    PartlyCloudyNight,
}

/// Every icon code the companion may send, in both vocabularies
const ICON_CODES: &[(&str, WeatherCondition)] = &[
    ("clear-day", WeatherCondition::ClearDay),
    ("01d", WeatherCondition::ClearDay),
    ("clear-night", WeatherCondition::ClearNight),
    ("01n", WeatherCondition::ClearNight),
    ("rain", WeatherCondition::Rain),
    ("09d", WeatherCondition::Rain),
    ("09n", WeatherCondition::Rain),
    ("10d", WeatherCondition::Rain),
    ("10n", WeatherCondition::Rain),
    ("11d", WeatherCondition::Rain),
    ("11n", WeatherCondition::Rain),
    ("50d", WeatherCondition::MistDay),
    ("50n", WeatherCondition::MistNight),
    ("snow", WeatherCondition::Snow),
    ("13d", WeatherCondition::Snow),
    ("13n", WeatherCondition::Snow),
    ("sleet", WeatherCondition::Sleet),
    ("wind", WeatherCondition::Wind),
    ("fog", WeatherCondition::Fog),
    ("cloudy", WeatherCondition::Cloudy),
    ("partly-cloudy-day", WeatherCondition::PartlyCloudyDay),
    ("02d", WeatherCondition::PartlyCloudyDay),
    ("03d", WeatherCondition::PartlyCloudyDay),
    ("04d", WeatherCondition::PartlyCloudyDay),
    ("partly-cloudy-night", WeatherCondition::PartlyCloudyNight),
    ("02n", WeatherCondition::PartlyCloudyNight),
    ("03n", WeatherCondition::PartlyCloudyNight),
    ("04n", WeatherCondition::PartlyCloudyNight),
];

impl WeatherCondition {
    /// All conditions, in resource order
    pub const ALL: [WeatherCondition; 12] = [
        WeatherCondition::ClearDay,
        WeatherCondition::ClearNight,
        WeatherCondition::Rain,
        WeatherCondition::MistDay,
        WeatherCondition::MistNight,
        WeatherCondition::Snow,
        WeatherCondition::Sleet,
        WeatherCondition::Wind,
        WeatherCondition::Fog,
        WeatherCondition::Cloudy,
        WeatherCondition::PartlyCloudyDay,
        WeatherCondition::PartlyCloudyNight,
    ];

    /// Look up an icon code
    ///
    /// Surrounding whitespace is ignored and letters match in any case.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        ICON_CODES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(code))
            .map(|&(_, condition)| condition)
    }

    /// Position in [`Self::ALL`]
    pub fn index(self) -> u16 {
        self as u16
    }
}

/// Artwork color of an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IconVariant {
    /// White artwork, drawn on the normal black background
    White,
    /// Black artwork, drawn on the inverted white background
    Black,
}

impl IconVariant {
    pub fn for_inverted(inverted: bool) -> Self {
        if inverted {
            IconVariant::Black
        } else {
            IconVariant::White
        }
    }
}

/// Packaged bitmap assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IconAsset {
    Weather(WeatherCondition, IconVariant),
    Shoe(IconVariant),
    /// Shown while the phone is disconnected; always white
    BluetoothDisconnected,
    /// Shown while charging; always white
    Charging,
}

// Resource ids: weather icons first, two per condition (white, black)
const RESOURCE_WEATHER_BASE: u16 = 1;
const RESOURCE_SHOE_WHITE: u16 = 25;
const RESOURCE_SHOE_BLACK: u16 = 26;
const RESOURCE_BLUETOOTH_DISCONNECTED: u16 = 27;
const RESOURCE_CHARGING: u16 = 28;

impl IconAsset {
    /// Packaged resource holding this asset
    pub fn resource_id(self) -> ResourceId {
        let id = match self {
            IconAsset::Weather(condition, variant) => {
                let offset = match variant {
                    IconVariant::White => 0,
                    IconVariant::Black => 1,
                };
                RESOURCE_WEATHER_BASE + condition.index() * 2 + offset
            }
            IconAsset::Shoe(IconVariant::White) => RESOURCE_SHOE_WHITE,
            IconAsset::Shoe(IconVariant::Black) => RESOURCE_SHOE_BLACK,
            IconAsset::BluetoothDisconnected => RESOURCE_BLUETOOTH_DISCONNECTED,
            IconAsset::Charging => RESOURCE_CHARGING,
        };
        ResourceId(id)
    }

    /// Shoe icon matching the color scheme
    pub fn shoe(inverted: bool) -> Self {
        IconAsset::Shoe(IconVariant::for_inverted(inverted))
    }
}

/// Map an icon code and inversion flag to an asset
///
/// Returns `None` for unknown codes; callers keep whatever icon is shown.
pub fn resolve_icon(code: &str, inverted: bool) -> Option<IconAsset> {
    WeatherCondition::from_code(code)
        .map(|condition| IconAsset::Weather(condition, IconVariant::for_inverted(inverted)))
}

/// Last weather report received from the companion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherState {
    /// `None` until the first report arrives
    pub temperature: Option<i32>,
    pub icon_code: IconCode,
}

impl WeatherState {
    /// Replace the report
    pub fn update(&mut self, temperature: i32, icon_code: &str) {
        self.temperature = Some(temperature);
        self.icon_code.clear();
        for c in icon_code.chars() {
            if self.icon_code.push(c).is_err() {
                break;
            }
        }
    }

    /// Returns true once a report has been received
    pub fn has_report(&self) -> bool {
        self.temperature.is_some()
    }

    /// Icon for the current report, if the code is known
    pub fn icon(&self, inverted: bool) -> Option<IconAsset> {
        resolve_icon(&self.icon_code, inverted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_code_resolves() {
        let expected: &[(&str, WeatherCondition)] = &[
            ("clear-day", WeatherCondition::ClearDay),
            ("01d", WeatherCondition::ClearDay),
            ("clear-night", WeatherCondition::ClearNight),
            ("01n", WeatherCondition::ClearNight),
            ("rain", WeatherCondition::Rain),
            ("09d", WeatherCondition::Rain),
            ("09n", WeatherCondition::Rain),
            ("10d", WeatherCondition::Rain),
            ("10n", WeatherCondition::Rain),
            ("11d", WeatherCondition::Rain),
            ("11n", WeatherCondition::Rain),
            ("50d", WeatherCondition::MistDay),
            ("50n", WeatherCondition::MistNight),
            ("snow", WeatherCondition::Snow),
            ("13d", WeatherCondition::Snow),
            ("13n", WeatherCondition::Snow),
            ("sleet", WeatherCondition::Sleet),
            ("wind", WeatherCondition::Wind),
            ("fog", WeatherCondition::Fog),
            ("cloudy", WeatherCondition::Cloudy),
            ("partly-cloudy-day", WeatherCondition::PartlyCloudyDay),
            ("02d", WeatherCondition::PartlyCloudyDay),
            ("03d", WeatherCondition::PartlyCloudyDay),
            ("04d", WeatherCondition::PartlyCloudyDay),
            ("partly-cloudy-night", WeatherCondition::PartlyCloudyNight),
            ("02n", WeatherCondition::PartlyCloudyNight),
            ("03n", WeatherCondition::PartlyCloudyNight),
            ("04n", WeatherCondition::PartlyCloudyNight),
        ];

        for &(code, condition) in expected {
            assert_eq!(
                resolve_icon(code, false),
                Some(IconAsset::Weather(condition, IconVariant::White)),
                "code {}",
                code
            );
            assert_eq!(
                resolve_icon(code, true),
                Some(IconAsset::Weather(condition, IconVariant::Black)),
                "code {}",
                code
            );
        }
        assert_eq!(expected.len(), ICON_CODES.len());
    }

    #[test]
    fn test_every_condition_reachable() {
        for condition in WeatherCondition::ALL {
            assert!(ICON_CODES.iter().any(|(_, c)| *c == condition));
        }
    }

    #[test]
    fn test_unknown_codes() {
        for code in ["", "tornado", "50x", "01", "clear day", "hail"] {
            assert_eq!(resolve_icon(code, false), None, "code {:?}", code);
        }
    }

    #[test]
    fn test_codes_are_normalized() {
        assert_eq!(
            WeatherCondition::from_code("  Clear-Day\n"),
            Some(WeatherCondition::ClearDay)
        );
        assert_eq!(WeatherCondition::from_code("10N"), Some(WeatherCondition::Rain));
    }

    #[test]
    fn test_resource_ids_unique() {
        let mut ids: heapless::Vec<u16, 32> = heapless::Vec::new();
        for condition in WeatherCondition::ALL {
            for variant in [IconVariant::White, IconVariant::Black] {
                ids.push(IconAsset::Weather(condition, variant).resource_id().0)
                    .unwrap();
            }
        }
        ids.push(IconAsset::shoe(false).resource_id().0).unwrap();
        ids.push(IconAsset::shoe(true).resource_id().0).unwrap();
        ids.push(IconAsset::BluetoothDisconnected.resource_id().0).unwrap();
        ids.push(IconAsset::Charging.resource_id().0).unwrap();

        ids.sort_unstable();
        for pair in ids.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&28));
    }

    #[test]
    fn test_weather_state_update() {
        let mut state = WeatherState::default();
        assert!(!state.has_report());
        assert_eq!(state.icon(false), None);

        state.update(72, "01d");
        assert_eq!(state.temperature, Some(72));
        assert_eq!(
            state.icon(false),
            Some(IconAsset::Weather(WeatherCondition::ClearDay, IconVariant::White))
        );
    }
}
