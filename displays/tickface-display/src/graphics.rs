//! embedded-graphics canvas
//!
//! Maps the face primitives onto any [`DrawTarget`]. Bitmaps are composited
//! by the host, so [`Canvas::draw_bitmap`] draws nothing here.

use embedded_graphics::{
    geometry::{Angle, Point as EgPoint, Size},
    mono_font::{
        iso_8859_1::{FONT_6X13, FONT_7X13_BOLD},
        MonoTextStyle,
    },
    pixelcolor::{BinaryColor, PixelColor, Rgb565},
    prelude::*,
    primitives::{
        Arc as EgArc, Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle,
        RoundedRectangle, StrokeAlignment,
    },
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use tickface_core::{Arc, Color, Point, Rect};
use tickface_hal::BitmapHandle;

use crate::backend::{Canvas, CanvasError, Font};

/// Pixel colors the face palette can be drawn in
pub trait FaceColor: PixelColor {
    fn from_face(color: Color) -> Self;
}

impl FaceColor for BinaryColor {
    fn from_face(color: Color) -> Self {
        let (r, g, b) = color.rgb();
        if r + g + b >= 5 {
            BinaryColor::On
        } else {
            BinaryColor::Off
        }
    }
}

impl FaceColor for Rgb565 {
    fn from_face(color: Color) -> Self {
        let (r, g, b) = color.rgb();
        Rgb565::new(r * 31 / 3, g * 63 / 3, b * 31 / 3)
    }
}

fn point(p: Point) -> EgPoint {
    EgPoint::new(p.x, p.y)
}

fn rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(
        EgPoint::new(rect.x, rect.y),
        Size::new(rect.width.max(0) as u32, rect.height.max(0) as u32),
    )
}

fn diameter(radius: i32) -> u32 {
    (radius.max(0) as u32) * 2 + 1
}

/// [`Canvas`] over an embedded-graphics draw target
pub struct GraphicsCanvas<'a, D> {
    target: &'a mut D,
}

impl<'a, D> GraphicsCanvas<'a, D>
where
    D: DrawTarget,
    D::Color: FaceColor,
{
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }

    fn color(color: Color) -> D::Color {
        D::Color::from_face(color)
    }

    fn draw<T>(&mut self, drawable: T) -> Result<(), CanvasError>
    where
        T: Drawable<Color = D::Color>,
    {
        drawable
            .draw(&mut *self.target)
            .map(|_| ())
            .map_err(|_| CanvasError::Backend)
    }
}

impl<'a, D> Canvas for GraphicsCanvas<'a, D>
where
    D: DrawTarget,
    D::Color: FaceColor,
{
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), CanvasError> {
        let style = PrimitiveStyle::with_fill(Self::color(color));
        self.draw(rectangle(rect).into_styled(style))
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), CanvasError> {
        let style = PrimitiveStyle::with_fill(Self::color(color));
        self.draw(Circle::with_center(point(center), diameter(radius)).into_styled(style))
    }

    fn draw_circle(
        &mut self,
        center: Point,
        radius: i32,
        color: Color,
        width: u8,
    ) -> Result<(), CanvasError> {
        let style = PrimitiveStyle::with_stroke(Self::color(color), u32::from(width));
        self.draw(Circle::with_center(point(center), diameter(radius)).into_styled(style))
    }

    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        width: u8,
    ) -> Result<(), CanvasError> {
        let style = PrimitiveStyle::with_stroke(Self::color(color), u32::from(width));
        self.draw(Line::new(point(from), point(to)).into_styled(style))
    }

    fn draw_round_rect(
        &mut self,
        rect: Rect,
        corner_radius: u8,
        color: Color,
        width: u8,
    ) -> Result<(), CanvasError> {
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(Self::color(color))
            .stroke_width(u32::from(width))
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        let corner = Size::new(u32::from(corner_radius), u32::from(corner_radius));
        self.draw(RoundedRectangle::with_equal_corners(rectangle(rect), corner).into_styled(style))
    }

    fn fill_radial(
        &mut self,
        bounds: Rect,
        thickness: i32,
        arc: Arc,
        color: Color,
    ) -> Result<(), CanvasError> {
        if arc.is_empty() || thickness <= 0 {
            return Ok(());
        }
        let size = bounds.width.min(bounds.height).max(0) as u32;
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(Self::color(color))
            .stroke_width(thickness as u32)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        // 0° is 3 o'clock here, 12 o'clock on the face
        let start = Angle::from_degrees(arc.start_deg - 90.0);
        let sweep = Angle::from_degrees(arc.sweep());
        self.draw(EgArc::with_center(point(bounds.center()), size, start, sweep).into_styled(style))
    }

    fn draw_text(
        &mut self,
        text: &str,
        bounds: Rect,
        font: Font,
        color: Color,
    ) -> Result<(), CanvasError> {
        let font = match font {
            Font::Word => &FONT_7X13_BOLD,
            Font::Number => &FONT_6X13,
        };
        let character_style = MonoTextStyle::new(font, Self::color(color));
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Top)
            .build();
        let anchor = EgPoint::new(bounds.x + bounds.width / 2, bounds.y);
        self.draw(Text::with_text_style(text, anchor, character_style, text_style))
    }

    fn draw_bitmap(&mut self, _bitmap: BitmapHandle, _bounds: Rect) -> Result<(), CanvasError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn display() -> MockDisplay<BinaryColor> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    #[test]
    fn test_palette_mapping() {
        assert_eq!(BinaryColor::from_face(Color::WHITE), BinaryColor::On);
        assert_eq!(BinaryColor::from_face(Color::BLACK), BinaryColor::Off);
        assert_eq!(Rgb565::from_face(Color::WHITE), Rgb565::WHITE);
        assert_eq!(Rgb565::from_face(Color::BLACK), Rgb565::BLACK);
    }

    #[test]
    fn test_fill_rect() {
        let mut display = display();
        GraphicsCanvas::new(&mut display)
            .fill_rect(Rect::new(2, 2, 4, 4), Color::WHITE)
            .unwrap();
        assert_eq!(display.get_pixel(EgPoint::new(3, 3)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(EgPoint::new(7, 7)), None);
    }

    #[test]
    fn test_line() {
        let mut display = display();
        GraphicsCanvas::new(&mut display)
            .draw_line(Point::new(0, 5), Point::new(10, 5), Color::WHITE, 1)
            .unwrap();
        assert_eq!(display.get_pixel(EgPoint::new(5, 5)), Some(BinaryColor::On));
    }

    #[test]
    fn test_empty_radial_draws_nothing() {
        let mut display = display();
        GraphicsCanvas::new(&mut display)
            .fill_radial(Rect::new(0, 0, 40, 40), 2, Arc::new(360.0, 360.0), Color::WHITE)
            .unwrap();
        assert_eq!(display.affected_area().size, Size::zero());
    }

    #[test]
    fn test_full_radial_touches_top() {
        let mut display = display();
        GraphicsCanvas::new(&mut display)
            .fill_radial(Rect::new(0, 0, 41, 41), 2, Arc::new(0.0, 360.0), Color::WHITE)
            .unwrap();
        assert_eq!(display.get_pixel(EgPoint::new(20, 0)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(EgPoint::new(20, 20)), None);
    }

    #[test]
    fn test_bitmap_is_noop() {
        let mut display = display();
        GraphicsCanvas::new(&mut display)
            .draw_bitmap(BitmapHandle(1), Rect::new(0, 0, 10, 10))
            .unwrap();
        assert_eq!(display.affected_area().size, Size::zero());
    }
}
