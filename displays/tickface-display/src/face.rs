//! Full-face composition
//!
//! Draws every layer bottom to top. Bitmaps are owned by the caller; a
//! missing handle just leaves its slot empty.

use tickface_core::{Layout, WatchFaceState};
use tickface_hal::BitmapHandle;

use crate::backend::{Canvas, CanvasError};
use crate::dial::{render_background, render_dial};
use crate::gauges::{render_battery, render_day_date, render_health, render_temperature};
use crate::hands::render_hands;

/// Bitmaps currently bound to the face's icon slots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceBitmaps {
    pub weather: Option<BitmapHandle>,
    pub shoe: Option<BitmapHandle>,
    pub bluetooth: Option<BitmapHandle>,
    pub charging: Option<BitmapHandle>,
}

/// Draw the whole face for the current state
pub fn render_face<C: Canvas>(
    canvas: &mut C,
    layout: &Layout,
    state: &WatchFaceState,
    bitmaps: &FaceBitmaps,
) -> Result<(), CanvasError> {
    let colors = state.colors();

    render_background(canvas, layout, colors)?;
    render_dial(canvas, layout, colors)?;
    render_temperature(canvas, layout, state)?;
    render_battery(canvas, layout, state)?;

    if state.charging_glyph_visible() {
        if let Some(bitmap) = bitmaps.charging {
            canvas.draw_bitmap(bitmap, layout.charging_icon)?;
        }
    }
    if state.bluetooth_glyph_visible() {
        if let Some(bitmap) = bitmaps.bluetooth {
            canvas.draw_bitmap(bitmap, layout.bluetooth_icon)?;
        }
    }

    render_health(canvas, layout, state)?;
    render_day_date(canvas, layout, state)?;

    if let Some(bitmap) = bitmaps.weather {
        canvas.draw_bitmap(bitmap, layout.weather_icon)?;
    }
    if let Some(bitmap) = bitmaps.shoe {
        canvas.draw_bitmap(bitmap, layout.shoe_icon)?;
    }

    render_hands(canvas, layout, state.clock, colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingCanvas};
    use tickface_core::{Color, DeviceShape, Settings};
    use tickface_hal::LocalTime;

    const WEATHER: BitmapHandle = BitmapHandle(1);
    const SHOE: BitmapHandle = BitmapHandle(2);
    const BLUETOOTH: BitmapHandle = BitmapHandle(3);
    const CHARGING: BitmapHandle = BitmapHandle(4);

    fn bitmaps() -> FaceBitmaps {
        FaceBitmaps {
            weather: Some(WEATHER),
            shoe: Some(SHOE),
            bluetooth: Some(BLUETOOTH),
            charging: Some(CHARGING),
        }
    }

    fn state() -> WatchFaceState {
        let mut state = WatchFaceState::new(Settings::default());
        state.clock = LocalTime::new(10, 8, 1, 5);
        state.day_text.push_str("MON").unwrap();
        state.date_text.push_str("5").unwrap();
        state.steps_text.push_str("4k").unwrap();
        state.temperature_text.push_str("21°").unwrap();
        state.battery.percent = 80;
        state.health.steps = 4_200;
        state
    }

    #[test]
    fn test_z_order() {
        let layout = Layout::for_shape(DeviceShape::Rectangular);
        let mut state = state();
        state.battery.charging = true;
        state.connected = Some(false);

        let mut canvas = RecordingCanvas::new();
        render_face(&mut canvas, layout, &state, &bitmaps()).unwrap();
        let commands = canvas.commands();

        assert_eq!(
            commands[0],
            DrawCommand::FillRect {
                rect: layout.bounds,
                color: Color::BLACK
            }
        );
        assert_eq!(
            canvas.bitmaps().collect::<heapless::Vec<_, 4>>().as_slice(),
            &[CHARGING, BLUETOOTH, WEATHER, SHOE]
        );
        assert_eq!(
            canvas.texts().collect::<heapless::Vec<_, 4>>().as_slice(),
            &["21°", "4k", "MON", "5"]
        );

        // hub dot is the very last primitive
        assert!(matches!(
            commands.last(),
            Some(DrawCommand::FillCircle { radius: 1, .. })
        ));

        let shoe_at = commands
            .iter()
            .position(|c| *c == DrawCommand::Bitmap { bitmap: SHOE, bounds: layout.shoe_icon })
            .unwrap();
        let first_hand_stroke = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Line { width: 8, .. }))
            .unwrap();
        assert!(shoe_at < first_hand_stroke);
    }

    #[test]
    fn test_glyphs_hidden_when_connected_and_discharging() {
        let layout = Layout::for_shape(DeviceShape::Round);
        let mut state = state();
        state.connected = Some(true);

        let mut canvas = RecordingCanvas::new();
        render_face(&mut canvas, layout, &state, &bitmaps()).unwrap();
        assert_eq!(
            canvas.bitmaps().collect::<heapless::Vec<_, 4>>().as_slice(),
            &[WEATHER, SHOE]
        );
    }

    #[test]
    fn test_unknown_connection_hides_bluetooth_glyph() {
        let layout = Layout::for_shape(DeviceShape::Round);
        let mut canvas = RecordingCanvas::new();
        render_face(&mut canvas, layout, &state(), &bitmaps()).unwrap();
        assert!(!canvas.bitmaps().any(|b| b == BLUETOOTH));
    }

    #[test]
    fn test_renders_with_default_state_and_no_bitmaps() {
        let layout = Layout::for_shape(DeviceShape::Rectangular);
        let state = WatchFaceState::new(Settings::default());
        let mut canvas = RecordingCanvas::new();
        render_face(&mut canvas, layout, &state, &FaceBitmaps::default()).unwrap();
        assert_eq!(canvas.bitmaps().count(), 0);
        assert!(!canvas.commands().is_empty());
    }

    #[test]
    fn test_render_is_repeatable() {
        let layout = Layout::for_shape(DeviceShape::Rectangular);
        let state = state();
        let mut first = RecordingCanvas::new();
        let mut second = RecordingCanvas::new();
        render_face(&mut first, layout, &state, &bitmaps()).unwrap();
        render_face(&mut second, layout, &state, &bitmaps()).unwrap();
        assert_eq!(first.commands(), second.commands());
    }

    #[test]
    fn test_canvas_failure_aborts_frame() {
        let layout = Layout::for_shape(DeviceShape::Rectangular);
        let mut canvas = RecordingCanvas::new();
        canvas.fail_after = Some(10);
        assert_eq!(
            render_face(&mut canvas, layout, &state(), &bitmaps()),
            Err(CanvasError::Backend)
        );
        assert_eq!(canvas.commands().len(), 10);
    }
}
