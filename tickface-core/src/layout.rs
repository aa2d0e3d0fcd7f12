//! Per-shape pixel layout
//!
//! Every drawn element has a fixed position on each supported display.
//! The shape is picked once at startup and the table never changes.

use crate::geometry::{Point, Rect};

/// Supported display shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceShape {
    /// 144×168 rectangular display
    #[default]
    Rectangular,
    /// 180×180 round display
    Round,
}

/// Number of tick marks around the dial
pub const TICK_COUNT: u32 = 60;

/// Every n-th tick mark is a major one
pub const MAJOR_TICK_EVERY: u32 = 5;

/// Major tick mark length and stroke width
pub const MAJOR_TICK_LENGTH: i32 = 9;
pub const MAJOR_TICK_WIDTH: u8 = 4;

/// Minor tick mark length and stroke width
pub const MINOR_TICK_LENGTH: i32 = 4;
pub const MINOR_TICK_WIDTH: u8 = 1;

/// Corner radius of the day/date box
pub const INFO_BOX_CORNER_RADIUS: u8 = 3;

/// Radius and stroke of the ring around the temperature
pub const TEMPERATURE_RING_RADIUS: i32 = 20;
pub const TEMPERATURE_RING_WIDTH: u8 = 1;

/// Ring thickness of the radial gauges
pub const GAUGE_THICKNESS: i32 = 2;

/// Battery glyph outline corner radius
pub const BATTERY_OUTLINE_CORNER_RADIUS: u8 = 1;

/// Battery bar width; its height is one pixel per 10 %
pub const BATTERY_BAR_WIDTH: i32 = 3;

/// Distance from the hand tip to where the hand's wide part starts
pub const HAND_WIDE_LENGTH: i32 = 60;

/// How much shorter the hour hand is than the minute hand
pub const HOUR_HAND_SHORTENING: i32 = 25;

/// Radial span of the notch cut into the hour hand
pub const HOUR_NOTCH_START: i32 = 25;
pub const HOUR_NOTCH_END: i32 = 40;

/// Hand stroke widths
pub const HAND_SHADOW_WIDTH: u8 = 8;
pub const HAND_CENTER_LINE_WIDTH: u8 = 1;
pub const HAND_WIDE_WIDTH: u8 = 6;
pub const HOUR_NOTCH_WIDTH: u8 = 2;

/// Hub radii
pub const HUB_RADIUS: i32 = 3;
pub const HUB_DOT_RADIUS: i32 = 1;

/// Pixel positions for one display shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    pub shape: DeviceShape,
    /// Full screen
    pub bounds: Rect,
    /// Dial disk; tick marks end on its edge
    pub dial_radius: i32,
    /// Day/date box outline
    pub info_box: Rect,
    /// Divider between day and date
    pub divider: (Point, Point),
    pub temperature_center: Point,
    pub temperature_text: Rect,
    pub weather_icon: Rect,
    pub battery_gauge: Rect,
    pub battery_outline: Rect,
    /// Battery bar column; the bar grows upward from `bottom`
    pub battery_bar_x: i32,
    pub battery_bar_bottom: i32,
    pub battery_nub: Rect,
    pub charging_icon: Rect,
    pub bluetooth_icon: Rect,
    pub health_gauge: Rect,
    pub health_text: Rect,
    pub shoe_icon: Rect,
    pub day_text: Rect,
    pub date_text: Rect,
    /// Distance from the center to the minute hand tip
    pub hand_length: i32,
}

/// 144×168 rectangular display
pub const RECT_LAYOUT: Layout = Layout {
    shape: DeviceShape::Rectangular,
    bounds: Rect::new(0, 0, 144, 168),
    dial_radius: (144 + 24) / 2,
    info_box: Rect::new(89, 76, 53, 16),
    divider: (Point::new(123, 77), Point::new(123, 91)),
    temperature_center: Point::new(72, 36),
    temperature_text: Rect::new(60, 19, 24, 16),
    weather_icon: Rect::new(60, 35, 24, 16),
    battery_gauge: Rect::new(4, 64, 40, 40),
    battery_outline: Rect::new(21, 77, 7, 14),
    battery_bar_x: 23,
    battery_bar_bottom: 89,
    battery_nub: Rect::new(23, 76, 3, 1),
    charging_icon: Rect::new(26, 76, 14, 14),
    bluetooth_icon: Rect::new(8, 76, 14, 14),
    health_gauge: Rect::new(52, 110, 40, 40),
    health_text: Rect::new(54, 115, 36, 16),
    shoe_icon: Rect::new(60, 131, 24, 16),
    day_text: Rect::new(90, 75, 34, 14),
    date_text: Rect::new(124, 75, 17, 14),
    hand_length: 168 / 2 - 10,
};

/// 180×180 round display
pub const ROUND_LAYOUT: Layout = Layout {
    shape: DeviceShape::Round,
    bounds: Rect::new(0, 0, 180, 180),
    dial_radius: 180 / 2,
    info_box: Rect::new(113, 82, 53, 16),
    divider: (Point::new(147, 83), Point::new(147, 97)),
    temperature_center: Point::new(90, 36),
    temperature_text: Rect::new(78, 19, 24, 16),
    weather_icon: Rect::new(78, 35, 24, 16),
    battery_gauge: Rect::new(16, 70, 40, 40),
    battery_outline: Rect::new(33, 83, 7, 14),
    battery_bar_x: 35,
    battery_bar_bottom: 95,
    battery_nub: Rect::new(35, 82, 3, 1),
    charging_icon: Rect::new(38, 82, 14, 14),
    bluetooth_icon: Rect::new(20, 82, 14, 14),
    health_gauge: Rect::new(70, 122, 40, 40),
    health_text: Rect::new(72, 127, 36, 16),
    shoe_icon: Rect::new(78, 143, 24, 16),
    day_text: Rect::new(114, 81, 34, 14),
    date_text: Rect::new(148, 81, 17, 14),
    hand_length: 180 / 2 - 10,
};

impl Layout {
    /// Layout table for a display shape
    pub const fn for_shape(shape: DeviceShape) -> &'static Layout {
        match shape {
            DeviceShape::Rectangular => &RECT_LAYOUT,
            DeviceShape::Round => &ROUND_LAYOUT,
        }
    }

    /// Center of the dial and of the hands
    pub const fn center(&self) -> Point {
        self.bounds.center()
    }

    /// Distance from the center to the hour hand tip
    pub const fn hour_hand_length(&self) -> i32 {
        self.hand_length - HOUR_HAND_SHORTENING
    }

    /// Distance from the center to where the wide part of a hand begins
    pub const fn hand_wide_start(&self) -> i32 {
        self.hand_length - HAND_WIDE_LENGTH
    }

    /// Battery bar for a charge level: one pixel per full 10 %
    pub fn battery_bar(&self, percent: u8) -> Rect {
        let filled = (percent.min(100) / 10) as i32;
        Rect::new(
            self.battery_bar_x,
            self.battery_bar_bottom - filled,
            BATTERY_BAR_WIDTH,
            filled,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_dimensions() {
        let layout = Layout::for_shape(DeviceShape::Rectangular);
        assert_eq!(layout.center(), Point::new(72, 84));
        assert_eq!(layout.dial_radius, 84);
        assert_eq!(layout.hand_length, 74);
        assert_eq!(layout.hour_hand_length(), 49);
        assert_eq!(layout.hand_wide_start(), 14);
    }

    #[test]
    fn test_round_dimensions() {
        let layout = Layout::for_shape(DeviceShape::Round);
        assert_eq!(layout.center(), Point::new(90, 90));
        assert_eq!(layout.dial_radius, 90);
        assert_eq!(layout.hand_length, 80);
        assert_eq!(layout.hand_wide_start(), 20);
    }

    #[test]
    fn test_temperature_ring_centered_on_screen() {
        for shape in [DeviceShape::Rectangular, DeviceShape::Round] {
            let layout = Layout::for_shape(shape);
            assert_eq!(layout.temperature_center.x, layout.center().x);
        }
    }

    #[test]
    fn test_divider_inside_info_box() {
        for shape in [DeviceShape::Rectangular, DeviceShape::Round] {
            let layout = Layout::for_shape(shape);
            let (top, bottom) = layout.divider;
            assert!(top.x > layout.info_box.x && top.x < layout.info_box.right());
            assert!(top.y >= layout.info_box.y && bottom.y <= layout.info_box.bottom());
        }
    }

    #[test]
    fn test_battery_bar() {
        let layout = Layout::for_shape(DeviceShape::Rectangular);
        assert_eq!(layout.battery_bar(0), Rect::new(23, 89, 3, 0));
        assert_eq!(layout.battery_bar(59), Rect::new(23, 84, 3, 5));
        assert_eq!(layout.battery_bar(100), Rect::new(23, 79, 3, 10));
        assert_eq!(layout.battery_bar(255), Rect::new(23, 79, 3, 10));
    }
}
