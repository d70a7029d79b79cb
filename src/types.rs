//! Core data types shared by the canvas and the selection overlay.
//!
//! This module defines the rectangle every piece of geometry is derived from,
//! identifiers for placed elements, and the placed image element itself.

use eframe::egui;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;
use uuid::Uuid;

/// Unique identifier for elements placed on the canvas.
pub type ElementId = Uuid;

/// Axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Left side
    pub x: f32,
    /// Top side
    pub y: f32,
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl Rectangle {
    /// Creates a rectangle from its origin and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from possibly missing fields.
    ///
    /// Missing values count as zero, so a partially initialised target degrades
    /// to a zero-sized box instead of failing.
    pub fn from_partial(
        x: Option<f32>,
        y: Option<f32>,
        width: Option<f32>,
        height: Option<f32>,
    ) -> Self {
        if x.is_none() || y.is_none() || width.is_none() || height.is_none() {
            log::debug!(
                "rectangle has missing fields (x={x:?}, y={y:?}, width={width:?}, height={height:?}); treating them as zero"
            );
        }
        Self::new(
            x.unwrap_or(0.0),
            y.unwrap_or(0.0),
            width.unwrap_or(0.0),
            height.unwrap_or(0.0),
        )
    }

    /// Every field truncated toward zero, the way an element coerces its own
    /// geometry before publishing it.
    pub fn truncated(self) -> Self {
        Self::new(
            self.x.trunc(),
            self.y.trunc(),
            self.width.trunc(),
            self.height.trunc(),
        )
    }

    /// Top-left corner.
    pub fn origin(&self) -> egui::Pos2 {
        egui::pos2(self.x, self.y)
    }

    /// Right side.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom side.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Converts to an egui rect for hit testing and painting.
    pub fn to_egui(self) -> egui::Rect {
        egui::Rect::from_min_size(self.origin(), egui::vec2(self.width, self.height))
    }

    /// Whether the point lies inside (inclusive of the edges).
    pub fn contains(&self, pos: egui::Pos2) -> bool {
        pos.x >= self.x && pos.x <= self.right() && pos.y >= self.y && pos.y <= self.bottom()
    }
}

/// Whether the selection overlay is drawn and interactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Overlay is drawn around the target rectangle
    Shown,
    /// Overlay is not drawn and ignores the pointer
    #[default]
    Hidden,
}

/// An image placed on the canvas.
///
/// The geometry lives in a shared cell so the setter an element registers with
/// the selection context can write updates back while the element stays in the
/// display list.
#[derive(Debug, Clone)]
pub struct PlacedElement {
    /// Unique identifier
    pub id: ElementId,
    /// Auto-incremented instance key assigned by the canvas on drop
    pub key: u64,
    /// Image source the element renders
    pub href: String,
    /// Display title of the asset the element came from
    pub title: String,
    geometry: Rc<Cell<Rectangle>>,
}

impl PlacedElement {
    /// Creates a new element with the given instance key and starting geometry.
    pub fn new(key: u64, href: impl Into<String>, title: impl Into<String>, geometry: Rectangle) -> Self {
        Self {
            id: Uuid::new_v4(),
            key,
            href: href.into(),
            title: title.into(),
            geometry: Rc::new(Cell::new(geometry)),
        }
    }

    /// DOM-style identifier used by native drag transfers (`image-shape-<key>`).
    pub fn dom_id(&self) -> String {
        format!("image-shape-{}", self.key)
    }

    /// Current geometry.
    pub fn geometry(&self) -> Rectangle {
        self.geometry.get()
    }

    /// Replaces the geometry.
    pub fn set_geometry(&self, rect: Rectangle) {
        self.geometry.set(rect);
    }

    /// Shared handle to the geometry cell, used to build the selection setter.
    pub fn geometry_handle(&self) -> Rc<Cell<Rectangle>> {
        Rc::clone(&self.geometry)
    }

    /// Fills in dimensions still at zero once the image has loaded.
    pub fn resolve_size(&self, natural: egui::Vec2) {
        let mut rect = self.geometry.get();
        if rect.width == 0.0 {
            rect.width = natural.x.round();
        }
        if rect.height == 0.0 {
            rect.height = natural.y.round();
        }
        self.geometry.set(rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_rectangle_degrades_to_zero() {
        let rect = Rectangle::from_partial(Some(12.0), None, Some(40.0), None);
        assert_eq!(rect, Rectangle::new(12.0, 0.0, 40.0, 0.0));
    }

    #[test]
    fn truncation_matches_integer_coercion() {
        let rect = Rectangle::new(10.9, -3.7, 499.99, 750.2).truncated();
        assert_eq!(rect, Rectangle::new(10.0, -3.0, 499.0, 750.0));
    }

    #[test]
    fn resolve_size_only_fills_missing_dimensions() {
        let element = PlacedElement::new(
            1,
            "/frame-one.png",
            "frame-one",
            Rectangle::from_partial(Some(0.0), Some(0.0), None, Some(480.0)),
        );
        element.resolve_size(egui::vec2(500.0, 999.0));
        assert_eq!(element.geometry(), Rectangle::new(0.0, 0.0, 500.0, 480.0));
        assert_eq!(element.dom_id(), "image-shape-1");
    }
}
