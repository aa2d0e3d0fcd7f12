//! Text shown on the face

use core::fmt::Write;

use heapless::String;

/// Day-of-week abbreviations, Sunday first
const WEEKDAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Short text buffer used for every label
pub type Label = String<16>;

/// Abbreviated weekday name; empty for indices outside 0-6
pub fn weekday_name(weekday: u8) -> &'static str {
    WEEKDAY_NAMES.get(weekday as usize).copied().unwrap_or("")
}

/// Drop one leading zero from a two-digit number ("05" → "5")
pub fn strip_leading_zero(text: &str) -> &str {
    match text.strip_prefix('0') {
        Some(rest) if !rest.is_empty() => rest,
        _ => text,
    }
}

/// Day of month without padding
pub fn date_text(day: u8) -> Label {
    let mut padded = Label::new();
    let _ = write!(padded, "{:02}", day);
    let mut text = Label::new();
    let _ = text.push_str(strip_leading_zero(&padded));
    text
}

/// Step count, abbreviated to whole thousands from 1000 up
pub fn steps_text(steps: u32) -> Label {
    let mut text = Label::new();
    if steps >= 1000 {
        let _ = write!(text, "{}k", steps / 1000);
    } else {
        let _ = write!(text, "{}", steps);
    }
    text
}

/// Temperature with a degree sign
pub fn temperature_text(temperature: i32) -> Label {
    let mut text = Label::new();
    let _ = write!(text, "{}°", temperature);
    text
}
