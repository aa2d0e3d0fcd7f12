//! Temperature ring, battery gauge, step gauge and text labels
//!
//! Gauges fill with the foreground color only; no track is drawn under
//! the arc.

use tickface_core::layout::{
    Layout, BATTERY_OUTLINE_CORNER_RADIUS, GAUGE_THICKNESS, TEMPERATURE_RING_RADIUS,
    TEMPERATURE_RING_WIDTH,
};
use tickface_core::WatchFaceState;

use crate::backend::{Canvas, CanvasError, Font};

/// Ring around the temperature and the temperature text
pub fn render_temperature<C: Canvas>(
    canvas: &mut C,
    layout: &Layout,
    state: &WatchFaceState,
) -> Result<(), CanvasError> {
    let fg = state.colors().foreground;
    canvas.draw_circle(
        layout.temperature_center,
        TEMPERATURE_RING_RADIUS,
        fg,
        TEMPERATURE_RING_WIDTH,
    )?;
    if !state.temperature_text.is_empty() {
        canvas.draw_text(&state.temperature_text, layout.temperature_text, Font::Number, fg)?;
    }
    Ok(())
}

/// Battery radial gauge and the vertical battery glyph
pub fn render_battery<C: Canvas>(
    canvas: &mut C,
    layout: &Layout,
    state: &WatchFaceState,
) -> Result<(), CanvasError> {
    let fg = state.colors().foreground;

    let arc = state.battery_arc();
    if !arc.is_empty() {
        canvas.fill_radial(layout.battery_gauge, GAUGE_THICKNESS, arc, fg)?;
    }

    canvas.draw_round_rect(layout.battery_outline, BATTERY_OUTLINE_CORNER_RADIUS, fg, 1)?;
    let bar = layout.battery_bar(state.battery.percent);
    if bar.height > 0 {
        canvas.fill_rect(bar, fg)?;
    }
    canvas.fill_rect(layout.battery_nub, fg)
}

/// Step count text and step radial gauge
pub fn render_health<C: Canvas>(
    canvas: &mut C,
    layout: &Layout,
    state: &WatchFaceState,
) -> Result<(), CanvasError> {
    let fg = state.colors().foreground;
    if !state.steps_text.is_empty() {
        canvas.draw_text(&state.steps_text, layout.health_text, Font::Number, fg)?;
    }

    let arc = state.health_arc();
    if !arc.is_empty() {
        canvas.fill_radial(layout.health_gauge, GAUGE_THICKNESS, arc, fg)?;
    }
    Ok(())
}

/// Day name and date in the info box
pub fn render_day_date<C: Canvas>(
    canvas: &mut C,
    layout: &Layout,
    state: &WatchFaceState,
) -> Result<(), CanvasError> {
    let fg = state.colors().foreground;
    canvas.draw_text(&state.day_text, layout.day_text, Font::Word, fg)?;
    canvas.draw_text(&state.date_text, layout.date_text, Font::Number, fg)
}
