//! Canvas trait
//!
//! Defines the drawing primitives the renderers need. Every call carries
//! its own color and stroke width; a canvas keeps no drawing state between
//! calls.

use tickface_core::{Arc, Color, Point, Rect};
use tickface_hal::BitmapHandle;

/// Canvas errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CanvasError {
    /// The underlying draw target failed
    Backend,
    /// Recording buffer is full
    BufferOverflow,
    /// Primitive not supported by this canvas
    Unsupported,
}

/// Text faces used on the dial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Day name
    Word,
    /// Digits: date, steps, temperature
    Number,
}

/// Drawing surface
///
/// Angles follow the face convention: degrees clockwise from 12 o'clock.
pub trait Canvas {
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), CanvasError>;

    /// Fill a disk
    fn fill_circle(&mut self, center: Point, radius: i32, color: Color)
        -> Result<(), CanvasError>;

    /// Stroke a circle outline
    fn draw_circle(
        &mut self,
        center: Point,
        radius: i32,
        color: Color,
        width: u8,
    ) -> Result<(), CanvasError>;

    /// Stroke a straight line
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: u8)
        -> Result<(), CanvasError>;

    /// Stroke a rectangle outline with rounded corners
    fn draw_round_rect(
        &mut self,
        rect: Rect,
        corner_radius: u8,
        color: Color,
        width: u8,
    ) -> Result<(), CanvasError>;

    /// Fill a ring segment of `thickness` pixels inside the circle fitted to `bounds`
    fn fill_radial(
        &mut self,
        bounds: Rect,
        thickness: i32,
        arc: Arc,
        color: Color,
    ) -> Result<(), CanvasError>;

    /// Draw text centered horizontally in `bounds`
    fn draw_text(
        &mut self,
        text: &str,
        bounds: Rect,
        font: Font,
        color: Color,
    ) -> Result<(), CanvasError>;

    /// Composite a platform bitmap into `bounds`
    fn draw_bitmap(&mut self, bitmap: BitmapHandle, bounds: Rect) -> Result<(), CanvasError>;
}

impl<T: Canvas + ?Sized> Canvas for &mut T {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), CanvasError> {
        (**self).fill_rect(rect, color)
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: i32,
        color: Color,
    ) -> Result<(), CanvasError> {
        (**self).fill_circle(center, radius, color)
    }

    fn draw_circle(
        &mut self,
        center: Point,
        radius: i32,
        color: Color,
        width: u8,
    ) -> Result<(), CanvasError> {
        (**self).draw_circle(center, radius, color, width)
    }

    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        width: u8,
    ) -> Result<(), CanvasError> {
        (**self).draw_line(from, to, color, width)
    }

    fn draw_round_rect(
        &mut self,
        rect: Rect,
        corner_radius: u8,
        color: Color,
        width: u8,
    ) -> Result<(), CanvasError> {
        (**self).draw_round_rect(rect, corner_radius, color, width)
    }

    fn fill_radial(
        &mut self,
        bounds: Rect,
        thickness: i32,
        arc: Arc,
        color: Color,
    ) -> Result<(), CanvasError> {
        (**self).fill_radial(bounds, thickness, arc, color)
    }

    fn draw_text(
        &mut self,
        text: &str,
        bounds: Rect,
        font: Font,
        color: Color,
    ) -> Result<(), CanvasError> {
        (**self).draw_text(text, bounds, font, color)
    }

    fn draw_bitmap(&mut self, bitmap: BitmapHandle, bounds: Rect) -> Result<(), CanvasError> {
        (**self).draw_bitmap(bitmap, bounds)
    }
}
