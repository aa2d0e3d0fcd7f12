//! Canvas that records draw calls
//!
//! Used to test renderers without a framebuffer: every primitive is kept
//! as a [`DrawCommand`] in call order.

use heapless::{String, Vec};
use tickface_core::{Arc, Color, Point, Rect};
use tickface_hal::BitmapHandle;

use crate::backend::{Canvas, CanvasError, Font};

/// Maximum number of recorded commands
pub const MAX_COMMANDS: usize = 128;

/// Maximum recorded text length
pub const MAX_TEXT_LEN: usize = 16;

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: i32,
        color: Color,
    },
    DrawCircle {
        center: Point,
        radius: i32,
        color: Color,
        width: u8,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: u8,
    },
    RoundRect {
        rect: Rect,
        corner_radius: u8,
        color: Color,
        width: u8,
    },
    FillRadial {
        bounds: Rect,
        thickness: i32,
        arc: Arc,
        color: Color,
    },
    Text {
        text: String<MAX_TEXT_LEN>,
        bounds: Rect,
        font: Font,
        color: Color,
    },
    Bitmap {
        bitmap: BitmapHandle,
        bounds: Rect,
    },
}

impl DrawCommand {
    /// Color the command draws with, if any
    pub fn color(&self) -> Option<Color> {
        match self {
            DrawCommand::FillRect { color, .. }
            | DrawCommand::FillCircle { color, .. }
            | DrawCommand::DrawCircle { color, .. }
            | DrawCommand::Line { color, .. }
            | DrawCommand::RoundRect { color, .. }
            | DrawCommand::FillRadial { color, .. }
            | DrawCommand::Text { color, .. } => Some(*color),
            DrawCommand::Bitmap { .. } => None,
        }
    }

    /// Text contents, if this is a text command
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

/// [`Canvas`] that stores every call
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand, MAX_COMMANDS>,
    /// Fail every call once this many commands are recorded
    pub fail_after: Option<usize>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, oldest first
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded lines
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    /// Recorded texts, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(DrawCommand::text)
    }

    /// Recorded bitmaps, in draw order
    pub fn bitmaps(&self) -> impl Iterator<Item = BitmapHandle> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Bitmap { bitmap, .. } => Some(*bitmap),
            _ => None,
        })
    }

    fn record(&mut self, command: DrawCommand) -> Result<(), CanvasError> {
        if let Some(limit) = self.fail_after {
            if self.commands.len() >= limit {
                return Err(CanvasError::Backend);
            }
        }
        self.commands
            .push(command)
            .map_err(|_| CanvasError::BufferOverflow)
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), CanvasError> {
        self.record(DrawCommand::FillRect { rect, color })
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: i32,
        color: Color,
    ) -> Result<(), CanvasError> {
        self.record(DrawCommand::FillCircle {
            center,
            radius,
            color,
        })
    }

    fn draw_circle(
        &mut self,
        center: Point,
        radius: i32,
        color: Color,
        width: u8,
    ) -> Result<(), CanvasError> {
        self.record(DrawCommand::DrawCircle {
            center,
            radius,
            color,
            width,
        })
    }

    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        width: u8,
    ) -> Result<(), CanvasError> {
        self.record(DrawCommand::Line {
            from,
            to,
            color,
            width,
        })
    }

    fn draw_round_rect(
        &mut self,
        rect: Rect,
        corner_radius: u8,
        color: Color,
        width: u8,
    ) -> Result<(), CanvasError> {
        self.record(DrawCommand::RoundRect {
            rect,
            corner_radius,
            color,
            width,
        })
    }

    fn fill_radial(
        &mut self,
        bounds: Rect,
        thickness: i32,
        arc: Arc,
        color: Color,
    ) -> Result<(), CanvasError> {
        self.record(DrawCommand::FillRadial {
            bounds,
            thickness,
            arc,
            color,
        })
    }

    fn draw_text(
        &mut self,
        text: &str,
        bounds: Rect,
        font: Font,
        color: Color,
    ) -> Result<(), CanvasError> {
        let mut recorded = String::new();
        for c in text.chars() {
            if recorded.push(c).is_err() {
                break;
            }
        }
        self.record(DrawCommand::Text {
            text: recorded,
            bounds,
            font,
            color,
        })
    }

    fn draw_bitmap(&mut self, bitmap: BitmapHandle, bounds: Rect) -> Result<(), CanvasError> {
        self.record(DrawCommand::Bitmap { bitmap, bounds })
    }
}
