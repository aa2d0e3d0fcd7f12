//! Companion Device Message Protocol
//!
//! This crate defines the key/value messages exchanged between the watch
//! face and its companion app. The companion fetches weather and relays
//! user configuration; the face asks it for a refresh every half hour.
//!
//! # Wire Format
//!
//! Every message is a dictionary of tuples:
//! ```text
//! ┌───────┬──────────┬──────┬──────────┬─────────────┐
//! │ COUNT │ KEY      │ TYPE │ LENGTH   │ VALUE       │ ... repeated COUNT times
//! │ 1B    │ 4B (LE)  │ 1B   │ 2B (LE)  │ LENGTH B    │
//! └───────┴──────────┴──────┴──────────┴─────────────┘
//! ```
//!
//! The transport (bluetooth, retries, acknowledgements) belongs to the host
//! platform; this crate only encodes and decodes the payload.

#![no_std]
#![deny(unsafe_code)]

pub mod dict;
pub mod messages;
pub mod result;

pub use dict::{DictError, Dictionary, Tuple, TupleType, Value, MAX_DICT_SIZE};
pub use messages::{
    IconCode, InboundMessage, WeatherRequest, KEY_ICON, KEY_INVERT_COLORS, KEY_TEMP,
    KEY_WEATHER_REQUEST,
};
pub use result::MessageResult;
