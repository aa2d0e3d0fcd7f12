//! Background and dial

use tickface_core::geometry::{polar_point, step_angle};
use tickface_core::layout::{
    Layout, INFO_BOX_CORNER_RADIUS, MAJOR_TICK_EVERY, MAJOR_TICK_LENGTH, MAJOR_TICK_WIDTH,
    MINOR_TICK_LENGTH, MINOR_TICK_WIDTH, TICK_COUNT,
};
use tickface_core::{ColorScheme, Point};

use crate::backend::{Canvas, CanvasError};

/// One tick mark, drawn from the dial edge inward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickMark {
    pub outer: Point,
    pub inner: Point,
    pub width: u8,
}

/// Tick mark `index` (0-59) on `layout`'s dial
pub fn tick_mark(layout: &Layout, index: u32) -> TickMark {
    let (length, width) = if index % MAJOR_TICK_EVERY == 0 {
        (MAJOR_TICK_LENGTH, MAJOR_TICK_WIDTH)
    } else {
        (MINOR_TICK_LENGTH, MINOR_TICK_WIDTH)
    };
    let angle = step_angle(index, TICK_COUNT);
    let center = layout.center();
    TickMark {
        outer: polar_point(center, layout.dial_radius, angle),
        inner: polar_point(center, layout.dial_radius - length, angle),
        width,
    }
}

/// Clear the whole screen to the background color
pub fn render_background<C: Canvas>(
    canvas: &mut C,
    layout: &Layout,
    colors: ColorScheme,
) -> Result<(), CanvasError> {
    canvas.fill_rect(layout.bounds, colors.background)
}

/// Dial disk, tick marks, and the day/date box
pub fn render_dial<C: Canvas>(
    canvas: &mut C,
    layout: &Layout,
    colors: ColorScheme,
) -> Result<(), CanvasError> {
    canvas.fill_circle(layout.center(), layout.dial_radius, colors.background)?;

    for index in 0..TICK_COUNT {
        let tick = tick_mark(layout, index);
        canvas.draw_line(tick.outer, tick.inner, colors.foreground, tick.width)?;
    }

    canvas.draw_round_rect(layout.info_box, INFO_BOX_CORNER_RADIUS, colors.foreground, 1)?;
    let (top, bottom) = layout.divider;
    canvas.draw_line(top, bottom, colors.foreground, 1)
}
