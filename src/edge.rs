//! Edge overlays of the selection box.
//!
//! Each side of the box is a thin visual line plus a wider invisible hot zone
//! that receives the pointer. North and south are horizontal lines that move
//! along y; west and east are vertical lines that move along x. While an
//! edge's drag is engaged its hot zone grows to near-viewport thickness so a
//! pointer racing past the line keeps feeding the drag.

use crate::constants::{EDGE_INSET, HOT_ZONE_ENGAGED_EXTENT, HOT_ZONE_REST_EXTENT};
use crate::tracker::DragTracker;
use crate::types::Rectangle;
use eframe::egui;

/// One side of the selection box. West is the left side, east the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Top line
    North,
    /// Bottom line
    South,
    /// Right line
    East,
    /// Left line
    West,
}

impl Edge {
    /// All four edges in paint order.
    pub const ALL: [Edge; 4] = [Edge::North, Edge::West, Edge::South, Edge::East];

    /// North and south lines are horizontal.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::North | Edge::South)
    }

    /// The edge across the box.
    pub fn opposite(self) -> Edge {
        match self {
            Edge::North => Edge::South,
            Edge::South => Edge::North,
            Edge::East => Edge::West,
            Edge::West => Edge::East,
        }
    }
}

/// Line geometry of one edge, derived from the target rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLine {
    /// Start x
    pub x: f32,
    /// Start y
    pub y: f32,
    /// End x
    pub x2: f32,
    /// End y
    pub y2: f32,
    /// Length of the hot zone along the line (the element's width or height).
    pub span: f32,
}

impl EdgeLine {
    /// Derives where `edge` sits for a box around `rect`.
    pub fn derive(edge: Edge, rect: &Rectangle) -> Self {
        let left = rect.x - EDGE_INSET;
        let top = rect.y - EDGE_INSET;
        let right = rect.right() + EDGE_INSET;
        let bottom = rect.bottom() + EDGE_INSET;

        match edge {
            Edge::North => Self { x: left, y: top, x2: right, y2: top, span: rect.width },
            Edge::South => Self { x: left, y: bottom, x2: right, y2: bottom, span: rect.width },
            Edge::West => Self { x: left, y: top, x2: left, y2: bottom, span: rect.height },
            Edge::East => Self { x: right, y: top, x2: right, y2: bottom, span: rect.height },
        }
    }
}

/// A draggable edge: its line, hot zone and drag tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeOverlay {
    edge: Edge,
    /// Start x
    pub x: f32,
    /// Start y
    pub y: f32,
    /// End x
    pub x2: f32,
    /// End y
    pub y2: f32,
    /// Hot zone length along the line
    pub span: f32,
    /// Hot zone thickness perpendicular to the line
    pub hot_zone_extent: f32,
    /// Hot zone offset from the line start along x
    pub hot_zone_offset_x: f32,
    /// Hot zone offset from the line start along y
    pub hot_zone_offset_y: f32,
    tracker: DragTracker,
}

impl EdgeOverlay {
    /// Creates a collapsed, zero-length edge.
    pub fn new(edge: Edge) -> Self {
        let mut overlay = Self {
            edge,
            x: 0.0,
            y: 0.0,
            x2: 0.0,
            y2: 0.0,
            span: 0.0,
            hot_zone_extent: HOT_ZONE_REST_EXTENT,
            hot_zone_offset_x: 0.0,
            hot_zone_offset_y: 0.0,
            tracker: DragTracker::default(),
        };
        overlay.set_hot_zone(HOT_ZONE_REST_EXTENT);
        overlay
    }

    /// Which side this is.
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Moves the line to freshly derived geometry. The hot zone keeps its thickness.
    pub fn apply(&mut self, line: EdgeLine) {
        self.x = line.x;
        self.y = line.y;
        self.x2 = line.x2;
        self.y2 = line.y2;
        self.span = line.span;
    }

    /// The line's perpendicular coordinate: y for north/south, x for west/east.
    pub fn coordinate(&self) -> f32 {
        if self.edge.is_horizontal() {
            self.y
        } else {
            self.x
        }
    }

    /// Endpoints of the visual line.
    pub fn segment(&self) -> [egui::Pos2; 2] {
        [egui::pos2(self.x, self.y), egui::pos2(self.x2, self.y2)]
    }

    /// Region that receives the pointer for this edge.
    pub fn hot_zone(&self) -> egui::Rect {
        if self.edge.is_horizontal() {
            egui::Rect::from_min_size(
                egui::pos2(self.x + self.hot_zone_offset_x, self.y - self.hot_zone_offset_y),
                egui::vec2(self.span, self.hot_zone_extent),
            )
        } else {
            egui::Rect::from_min_size(
                egui::pos2(self.x - self.hot_zone_offset_x, self.y + self.hot_zone_offset_y),
                egui::vec2(self.hot_zone_extent, self.span),
            )
        }
    }

    /// Whether a drag on this edge is in progress.
    pub fn is_engaged(&self) -> bool {
        self.tracker.is_engaged()
    }

    /// Starts dragging from `pointer` and widens the hot zone.
    pub fn engage(&mut self, pointer: egui::Pos2) {
        self.tracker.set_position(egui::pos2(self.x, self.y));
        self.tracker.begin(pointer);
        self.set_hot_zone(HOT_ZONE_ENGAGED_EXTENT);
    }

    /// Feeds a pointer move; returns the line's new perpendicular coordinate.
    pub fn drag(&mut self, pointer: egui::Pos2) -> Option<f32> {
        if self.edge.is_horizontal() {
            self.tracker.move_y(pointer).map(|next| next.y)
        } else {
            self.tracker.move_x(pointer).map(|next| next.x)
        }
    }

    /// Ends a drag on release. Returns false when no drag was in progress.
    pub fn release(&mut self) -> bool {
        if self.tracker.end().is_none() {
            return false;
        }
        self.set_hot_zone(HOT_ZONE_REST_EXTENT);
        true
    }

    /// Pointer left the hot zone: always disarms and collapses.
    pub fn leave(&mut self) {
        self.tracker.cancel();
        self.set_hot_zone(HOT_ZONE_REST_EXTENT);
    }

    fn set_hot_zone(&mut self, extent: f32) {
        self.hot_zone_extent = extent;
        let across = extent / 2.0;
        if self.edge.is_horizontal() {
            self.hot_zone_offset_x = EDGE_INSET;
            self.hot_zone_offset_y = across;
        } else {
            self.hot_zone_offset_x = across;
            self.hot_zone_offset_y = EDGE_INSET;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn rect() -> Rectangle {
        Rectangle::new(200.0, 50.0, 500.0, 750.0)
    }

    #[test]
    fn derived_lines_wrap_the_rectangle() {
        let r = rect();
        let north = EdgeLine::derive(Edge::North, &r);
        assert_eq!((north.x, north.y, north.x2), (190.0, 40.0, 710.0));
        let south = EdgeLine::derive(Edge::South, &r);
        assert_eq!((south.x, south.y, south.x2), (190.0, 810.0, 710.0));
        let west = EdgeLine::derive(Edge::West, &r);
        assert_eq!((west.x, west.y, west.y2), (190.0, 40.0, 810.0));
        let east = EdgeLine::derive(Edge::East, &r);
        assert_eq!((east.x, east.y, east.y2), (710.0, 40.0, 810.0));
    }

    #[test]
    fn resting_hot_zone_straddles_the_line() {
        let mut north = EdgeOverlay::new(Edge::North);
        north.apply(EdgeLine::derive(Edge::North, &rect()));
        let zone = north.hot_zone();
        assert_eq!(zone.min, pos2(200.0, 30.0));
        assert_eq!(zone.size(), egui::vec2(500.0, HOT_ZONE_REST_EXTENT));

        let mut east = EdgeOverlay::new(Edge::East);
        east.apply(EdgeLine::derive(Edge::East, &rect()));
        let zone = east.hot_zone();
        assert_eq!(zone.min, pos2(700.0, 50.0));
        assert_eq!(zone.size(), egui::vec2(HOT_ZONE_REST_EXTENT, 750.0));
    }

    #[test]
    fn hot_zone_grows_while_engaged_and_collapses_on_release() {
        let mut north = EdgeOverlay::new(Edge::North);
        north.apply(EdgeLine::derive(Edge::North, &rect()));
        north.engage(pos2(300.0, 40.0));
        assert_eq!(north.hot_zone_extent, HOT_ZONE_ENGAGED_EXTENT);
        assert!(north.hot_zone().contains(pos2(300.0, 900.0)));

        assert!(north.release());
        assert_eq!(north.hot_zone_extent, HOT_ZONE_REST_EXTENT);
        assert_eq!(north.hot_zone_offset_y, HOT_ZONE_REST_EXTENT / 2.0);
        assert!(!north.release());
    }

    #[test]
    fn drags_follow_only_the_perpendicular_axis() {
        let mut west = EdgeOverlay::new(Edge::West);
        west.apply(EdgeLine::derive(Edge::West, &rect()));
        assert_eq!(west.drag(pos2(0.0, 0.0)), None);

        west.engage(pos2(190.0, 400.0));
        assert_eq!(west.drag(pos2(180.0, 999.0)), Some(180.0));
        assert_eq!(west.drag(pos2(170.0, -5.0)), Some(170.0));

        west.leave();
        assert!(!west.is_engaged());
        assert_eq!(west.hot_zone_extent, HOT_ZONE_REST_EXTENT);
    }
}
