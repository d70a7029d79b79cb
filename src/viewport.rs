//! Mapping between screen pixels and canvas units.
//!
//! The canvas shows a viewbox scaled uniformly to fit the available screen
//! rect and centred in it, so the whole viewbox is always visible.

use crate::constants::DEFAULT_VIEWBOX;
use crate::error::{DesignerError, DesignerResult};
use crate::types::Rectangle;
use eframe::egui;
use serde::{Deserialize, Serialize};

/// Visible region of the canvas in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewbox {
    /// Left side
    pub x: f32,
    /// Top side
    pub y: f32,
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl Default for Viewbox {
    fn default() -> Self {
        let (x, y, width, height) = DEFAULT_VIEWBOX;
        Self { x, y, width, height }
    }
}

impl Viewbox {
    /// Creates a viewbox, rejecting empty or non-finite sizes.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> DesignerResult<Self> {
        let viewbox = Self { x, y, width, height };
        viewbox.validate()?;
        Ok(viewbox)
    }

    /// Checks that both dimensions are positive and finite.
    pub fn validate(&self) -> DesignerResult<()> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(DesignerError::InvalidViewbox {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// A viewbox fitted into a screen rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    viewbox: Viewbox,
    screen: egui::Rect,
    scale: f32,
    offset: egui::Vec2,
}

impl Viewport {
    /// Fits `viewbox` into `screen`.
    pub fn new(viewbox: Viewbox, screen: egui::Rect) -> Self {
        let scale = (screen.width() / viewbox.width)
            .min(screen.height() / viewbox.height)
            .max(f32::EPSILON);
        let used = egui::vec2(viewbox.width, viewbox.height) * scale;
        let offset = (screen.size() - used) / 2.0;
        Self {
            viewbox,
            screen,
            scale,
            offset,
        }
    }

    /// Screen pixels per canvas unit.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Screen rect the viewport was fitted into.
    pub fn screen(&self) -> egui::Rect {
        self.screen
    }

    /// The viewbox being shown.
    pub fn viewbox(&self) -> Viewbox {
        self.viewbox
    }

    /// Converts a screen position to canvas units.
    pub fn screen_to_canvas(&self, pos: egui::Pos2) -> egui::Pos2 {
        let local = pos - self.screen.min - self.offset;
        egui::pos2(
            self.viewbox.x + local.x / self.scale,
            self.viewbox.y + local.y / self.scale,
        )
    }

    /// Converts a canvas position to screen pixels.
    pub fn canvas_to_screen(&self, pos: egui::Pos2) -> egui::Pos2 {
        self.screen.min
            + self.offset
            + egui::vec2(
                (pos.x - self.viewbox.x) * self.scale,
                (pos.y - self.viewbox.y) * self.scale,
            )
    }

    /// Converts a canvas rect to screen pixels.
    pub fn canvas_rect_to_screen(&self, rect: egui::Rect) -> egui::Rect {
        egui::Rect::from_min_max(self.canvas_to_screen(rect.min), self.canvas_to_screen(rect.max))
    }

    /// Screen rect of a canvas rectangle.
    pub fn rectangle_to_screen(&self, rect: &Rectangle) -> egui::Rect {
        self.canvas_rect_to_screen(rect.to_egui())
    }
}
