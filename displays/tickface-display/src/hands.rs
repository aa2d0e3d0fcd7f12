//! Hour and minute hands
//!
//! Each hand is a thin line from the hub to where its wide part starts,
//! then a wide stroke out to the tip over a slightly wider shadow in the
//! background color. The hour hand moves in 72 steps per half day, one
//! step every ten minutes.

use tickface_core::geometry::{polar_point, step_angle};
use tickface_core::layout::{
    Layout, HAND_CENTER_LINE_WIDTH, HAND_SHADOW_WIDTH, HAND_WIDE_WIDTH, HOUR_NOTCH_END,
    HOUR_NOTCH_START, HOUR_NOTCH_WIDTH, HUB_DOT_RADIUS, HUB_RADIUS,
};
use tickface_core::{ColorScheme, Point};
use tickface_hal::LocalTime;

use crate::backend::{Canvas, CanvasError};

/// Hour hand steps per twelve hours
const HOUR_STEPS: u32 = 12 * 6;

/// Minute hand angle in degrees
pub fn minute_angle(time: LocalTime) -> f32 {
    step_angle(u32::from(time.minute % 60), 60)
}

/// Hour hand angle in degrees, stepped every ten minutes
pub fn hour_angle(time: LocalTime) -> f32 {
    let step = u32::from(time.hour % 12) * 6 + u32::from(time.minute % 60) / 10;
    step_angle(step, HOUR_STEPS)
}

/// End points of one hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandGeometry {
    /// Where the wide part starts
    pub start: Point,
    pub tip: Point,
}

impl HandGeometry {
    fn new(center: Point, start_radius: i32, tip_radius: i32, angle: f32) -> Self {
        Self {
            start: polar_point(center, start_radius, angle),
            tip: polar_point(center, tip_radius, angle),
        }
    }
}

pub fn minute_hand(layout: &Layout, time: LocalTime) -> HandGeometry {
    HandGeometry::new(
        layout.center(),
        layout.hand_wide_start(),
        layout.hand_length,
        minute_angle(time),
    )
}

pub fn hour_hand(layout: &Layout, time: LocalTime) -> HandGeometry {
    HandGeometry::new(
        layout.center(),
        layout.hand_wide_start(),
        layout.hour_hand_length(),
        hour_angle(time),
    )
}

/// Notch cut along the hour hand's wide part
pub fn hour_notch(layout: &Layout, time: LocalTime) -> (Point, Point) {
    let angle = hour_angle(time);
    let center = layout.center();
    (
        polar_point(center, HOUR_NOTCH_START, angle),
        polar_point(center, HOUR_NOTCH_END, angle),
    )
}

fn stroke_hand<C: Canvas>(
    canvas: &mut C,
    center: Point,
    hand: HandGeometry,
    colors: ColorScheme,
) -> Result<(), CanvasError> {
    canvas.draw_line(hand.start, hand.tip, colors.background, HAND_SHADOW_WIDTH)?;
    canvas.draw_line(center, hand.start, colors.foreground, HAND_CENTER_LINE_WIDTH)?;
    canvas.draw_line(hand.start, hand.tip, colors.foreground, HAND_WIDE_WIDTH)
}

/// Draw both hands and the hub for `time`
pub fn render_hands<C: Canvas>(
    canvas: &mut C,
    layout: &Layout,
    time: LocalTime,
    colors: ColorScheme,
) -> Result<(), CanvasError> {
    let center = layout.center();

    stroke_hand(canvas, center, minute_hand(layout, time), colors)?;
    stroke_hand(canvas, center, hour_hand(layout, time), colors)?;

    let (notch_start, notch_end) = hour_notch(layout, time);
    canvas.draw_line(notch_start, notch_end, colors.background, HOUR_NOTCH_WIDTH)?;

    canvas.fill_circle(center, HUB_RADIUS, colors.foreground)?;
    canvas.fill_circle(center, HUB_DOT_RADIUS, colors.background)
}
