//! Selection box controller.
//!
//! The box owns the authoritative rectangle of the selected element and the
//! four edge overlays derived from it. Every drag step turns one handle's
//! movement into a new rectangle and then re-derives all four edges from that
//! rectangle in one go, so the overlay never lags behind the element.
//!
//! ## Handle states
//!
//! ```text
//! Idle -> DraggingCenter     (press on the center body)
//! Idle -> Dragging(edge)     (press on an edge hot zone)
//! Any  -> Idle               (release, or the pointer leaving the engaged handle)
//! ```
//!
//! Only one handle is engaged at a time; pressing another handle releases the
//! one in progress first.
//!
//! ## Resizing
//!
//! The edge opposite the dragged one is the fixed reference:
//!
//! - north: `height = south.y - north.y - margin`
//! - south: `height = south.y - north.y - margin`
//! - west:  `width = east.x - west.x - margin`
//! - east:  `width = east.x - west.x - margin`
//!
//! The margin is the overlay padding on both sides of the element. Sizes are
//! clamped to [`MIN_SIZE`] with the opposite edge held in place. The dragged
//! line snaps to whole canvas units before the size is derived from it; the
//! fixed line is never rounded, so it stays put across repeated drags.

use crate::constants::{CENTER_MASK_EXPANSION, EDGE_INSET, MIN_SIZE, OVERLAY_MARGIN};
use crate::context::{ActiveElementRegistry, SelectionContext};
use crate::edge::{Edge, EdgeLine, EdgeOverlay};
use crate::tracker::DragTracker;
use crate::types::Rectangle;
use eframe::egui;

/// A part of the selection box that reacts to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    /// The body of the box; dragging it moves the element
    Center,
    /// One of the four sides; dragging it resizes the element
    Edge(Edge),
}

/// What the box is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxState {
    /// No handle engaged
    Idle,
    /// Moving the whole element
    DraggingCenter,
    /// Resizing through one side
    Dragging(Edge),
}

/// Derives all four edge lines for a box around `rect`.
pub fn derive_edges(rect: &Rectangle) -> [(Edge, EdgeLine); 4] {
    Edge::ALL.map(|edge| (edge, EdgeLine::derive(edge, rect)))
}

/// Selection overlay controller for one canvas session.
#[derive(Debug)]
pub struct SelectionBox {
    rect: Rectangle,
    north: EdgeOverlay,
    south: EdgeOverlay,
    east: EdgeOverlay,
    west: EdgeOverlay,
    center: DragTracker,
    mask_expanded: bool,
    selection: SelectionContext,
    active: ActiveElementRegistry,
}

impl SelectionBox {
    /// Creates an idle box bound to the session's shared handles.
    pub fn new(selection: SelectionContext, active: ActiveElementRegistry) -> Self {
        let mut selection_box = Self {
            rect: Rectangle::default(),
            north: EdgeOverlay::new(Edge::North),
            south: EdgeOverlay::new(Edge::South),
            east: EdgeOverlay::new(Edge::East),
            west: EdgeOverlay::new(Edge::West),
            center: DragTracker::default(),
            mask_expanded: false,
            selection,
            active,
        };
        selection_box.sync_edges();
        selection_box
    }

    /// The rectangle the box currently wraps.
    pub fn rectangle(&self) -> Rectangle {
        self.rect
    }

    /// Whether the overlay is shown.
    pub fn is_visible(&self) -> bool {
        self.selection.is_visible()
    }

    /// One edge overlay.
    pub fn edge(&self, edge: Edge) -> &EdgeOverlay {
        match edge {
            Edge::North => &self.north,
            Edge::South => &self.south,
            Edge::East => &self.east,
            Edge::West => &self.west,
        }
    }

    fn edge_mut(&mut self, edge: Edge) -> &mut EdgeOverlay {
        match edge {
            Edge::North => &mut self.north,
            Edge::South => &mut self.south,
            Edge::East => &mut self.east,
            Edge::West => &mut self.west,
        }
    }

    /// Current handle state.
    pub fn state(&self) -> BoxState {
        if self.center.is_engaged() {
            return BoxState::DraggingCenter;
        }
        Edge::ALL
            .into_iter()
            .find(|edge| self.edge(*edge).is_engaged())
            .map_or(BoxState::Idle, BoxState::Dragging)
    }

    /// The engaged handle, if any.
    pub fn engaged_handle(&self) -> Option<Handle> {
        match self.state() {
            BoxState::Idle => None,
            BoxState::DraggingCenter => Some(Handle::Center),
            BoxState::Dragging(edge) => Some(Handle::Edge(edge)),
        }
    }

    /// Whether the center drag mask is expanded over the viewport.
    pub fn is_mask_expanded(&self) -> bool {
        self.mask_expanded
    }

    /// Region that receives the pointer for the center body.
    pub fn center_zone(&self) -> egui::Rect {
        let body = self.rect.to_egui();
        if self.mask_expanded {
            body.expand(CENTER_MASK_EXPANSION)
        } else {
            body
        }
    }

    /// Region that receives the pointer for `handle`.
    pub fn zone(&self, handle: Handle) -> egui::Rect {
        match handle {
            Handle::Center => self.center_zone(),
            Handle::Edge(edge) => self.edge(edge).hot_zone(),
        }
    }

    /// Whether `handle` currently takes part in hit testing. Edges go inert
    /// while the center mask is expanded.
    pub fn is_interactive(&self, handle: Handle) -> bool {
        self.is_visible() && (handle == Handle::Center || !self.mask_expanded)
    }

    /// Every interactive handle under `pos`, topmost first.
    pub fn handles_at(&self, pos: egui::Pos2) -> Vec<Handle> {
        Edge::ALL
            .iter()
            .rev()
            .map(|edge| Handle::Edge(*edge))
            .chain(std::iter::once(Handle::Center))
            .filter(|handle| self.is_interactive(*handle) && self.zone(*handle).contains(pos))
            .collect()
    }

    /// Topmost interactive handle under `pos`.
    pub fn hit_test(&self, pos: egui::Pos2) -> Option<Handle> {
        self.handles_at(pos).into_iter().next()
    }

    /// Wraps a newly selected element.
    ///
    /// Every edge, the center mask and all trackers are reset from `rect`, so
    /// nothing from a previous selection survives.
    pub fn activate(&mut self, rect: Rectangle) {
        log::debug!("selection box activated around {rect:?}");
        self.rect = rect;
        self.center = DragTracker::new(rect.origin());
        self.mask_expanded = false;
        for edge in Edge::ALL {
            self.edge_mut(edge).leave();
        }
        self.sync_edges();
    }

    /// Pointer pressed on `handle`.
    pub fn press(&mut self, handle: Handle, pointer: egui::Pos2) {
        if !self.is_interactive(handle) {
            return;
        }
        if let Some(engaged) = self.engaged_handle() {
            if engaged != handle {
                self.release(engaged);
            }
        }

        match handle {
            Handle::Center => {
                self.center.set_position(self.rect.origin());
                self.center.begin(pointer);
                self.mask_expanded = true;
            }
            Handle::Edge(edge) => self.edge_mut(edge).engage(pointer),
        }
        log::debug!("drag started on {handle:?} at {pointer:?}");
    }

    /// Pointer moved over `handle`. Returns the new rectangle when the move
    /// changed the element.
    pub fn drag(&mut self, handle: Handle, pointer: egui::Pos2) -> Option<Rectangle> {
        let next = match handle {
            Handle::Center => {
                let origin = self.center.move_free(pointer)?;
                Rectangle::new(
                    origin.x.round(),
                    origin.y.round(),
                    self.rect.width,
                    self.rect.height,
                )
            }
            Handle::Edge(edge) => {
                let coordinate = self.edge_mut(edge).drag(pointer)?;
                self.resize(edge, coordinate.round())
            }
        };
        self.apply(next);
        Some(next)
    }

    /// Pointer released over `handle`. Returns false when it was not engaged.
    pub fn release(&mut self, handle: Handle) -> bool {
        let released = match handle {
            Handle::Center => {
                let released = self.center.end().is_some();
                if released {
                    self.mask_expanded = false;
                    self.active.clear();
                }
                released
            }
            Handle::Edge(edge) => self.edge_mut(edge).release(),
        };
        if released {
            log::debug!("drag on {handle:?} released with {:?}", self.rect);
        }
        released
    }

    /// Pointer left `handle`'s zone: disarms it whatever its state.
    ///
    /// Leaving the center also collapses the drag mask and clears the active
    /// element so a later background click may deselect.
    pub fn leave(&mut self, handle: Handle) {
        match handle {
            Handle::Center => {
                self.center.cancel();
                self.mask_expanded = false;
                self.active.clear();
            }
            Handle::Edge(edge) => self.edge_mut(edge).leave(),
        }
    }

    /// Rectangle after moving `edge`'s line to `coordinate`, with the opposite
    /// edge held fixed. Only the moving side is derived; the fixed side is
    /// copied unchanged so it cannot drift.
    fn resize(&self, edge: Edge, coordinate: f32) -> Rectangle {
        let north = self.north.y;
        let south = self.south.y;
        let west = self.west.x;
        let east = self.east.x;
        let width = self.rect.width;
        let height = self.rect.height;

        match edge {
            Edge::North => {
                let height = (south - coordinate - OVERLAY_MARGIN).max(MIN_SIZE);
                let top = south - OVERLAY_MARGIN - height;
                Rectangle::new(west + EDGE_INSET, top + EDGE_INSET, width, height)
            }
            Edge::South => {
                let height = (coordinate - north - OVERLAY_MARGIN).max(MIN_SIZE);
                Rectangle::new(west + EDGE_INSET, north + EDGE_INSET, width, height)
            }
            Edge::West => {
                let width = (east - coordinate - OVERLAY_MARGIN).max(MIN_SIZE);
                let left = east - OVERLAY_MARGIN - width;
                Rectangle::new(left + EDGE_INSET, north + EDGE_INSET, width, height)
            }
            Edge::East => {
                let width = (coordinate - west - OVERLAY_MARGIN).max(MIN_SIZE);
                Rectangle::new(west + EDGE_INSET, north + EDGE_INSET, width, height)
            }
        }
    }

    fn apply(&mut self, rect: Rectangle) {
        self.rect = rect;
        self.sync_edges();
        self.selection.set_target_rectangle(rect);
    }

    fn sync_edges(&mut self) {
        for (edge, line) in derive_edges(&self.rect) {
            self.edge_mut(edge).apply(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HOT_ZONE_ENGAGED_EXTENT, HOT_ZONE_REST_EXTENT};
    use egui::pos2;
    use std::cell::Cell;
    use std::rc::Rc;
    use uuid::Uuid;

    fn shown_box(rect: Rectangle) -> (SelectionBox, Rc<Cell<Rectangle>>) {
        let selection = SelectionContext::new();
        let element = Rc::new(Cell::new(rect));
        let sink = Rc::clone(&element);
        selection.select(Uuid::new_v4(), rect, Box::new(move |r| sink.set(r)));

        let mut selection_box = SelectionBox::new(selection, ActiveElementRegistry::new());
        selection_box.activate(rect);
        (selection_box, element)
    }

    fn frame() -> Rectangle {
        Rectangle::new(200.0, 50.0, 500.0, 750.0)
    }

    #[test]
    fn south_drag_stretches_height_and_side_spans() {
        let (mut sb, element) = shown_box(frame());
        let grab = pos2(450.0, 810.0);
        assert_eq!(sb.hit_test(grab), Some(Handle::Edge(Edge::South)));

        sb.press(Handle::Edge(Edge::South), grab);
        let rect = sb.drag(Handle::Edge(Edge::South), pos2(450.0, 840.0));

        let expected = Rectangle::new(200.0, 50.0, 500.0, 780.0);
        assert_eq!(rect, Some(expected));
        assert_eq!(element.get(), expected);
        assert_eq!(sb.edge(Edge::South).y, 840.0);
        assert_eq!(sb.edge(Edge::West).y2, 840.0);
        assert_eq!(sb.edge(Edge::East).y2, 840.0);
        assert_eq!(sb.edge(Edge::North).y, 40.0);
    }

    #[test]
    fn north_drag_moves_origin_and_keeps_south_fixed() {
        let (mut sb, _) = shown_box(frame());
        sb.press(Handle::Edge(Edge::North), pos2(300.0, 40.0));
        sb.drag(Handle::Edge(Edge::North), pos2(300.0, 60.0));
        let rect = sb.drag(Handle::Edge(Edge::North), pos2(300.0, 90.0));

        assert_eq!(rect, Some(Rectangle::new(200.0, 100.0, 500.0, 700.0)));
        assert_eq!(sb.edge(Edge::North).y, 90.0);
        assert_eq!(sb.edge(Edge::South).y, 810.0);
        assert_eq!(sb.edge(Edge::West).y, 90.0);
        assert_eq!(sb.edge(Edge::East).y, 90.0);
    }

    #[test]
    fn west_and_east_drags_resize_width() {
        let (mut sb, _) = shown_box(frame());
        sb.press(Handle::Edge(Edge::West), pos2(190.0, 300.0));
        let rect = sb.drag(Handle::Edge(Edge::West), pos2(150.0, 320.0));
        assert_eq!(rect, Some(Rectangle::new(160.0, 50.0, 540.0, 750.0)));
        assert!(sb.release(Handle::Edge(Edge::West)));
        assert_eq!(sb.edge(Edge::North).x, 150.0);
        assert_eq!(sb.edge(Edge::South).x, 150.0);

        sb.press(Handle::Edge(Edge::East), pos2(710.0, 300.0));
        let rect = sb.drag(Handle::Edge(Edge::East), pos2(660.0, 300.0));
        assert_eq!(rect, Some(Rectangle::new(160.0, 50.0, 490.0, 750.0)));
        assert_eq!(sb.edge(Edge::North).x2, 660.0);
        assert_eq!(sb.edge(Edge::West).x, 150.0);
    }

    #[test]
    fn center_drag_translates_without_resizing() {
        let (mut sb, element) = shown_box(frame());
        assert_eq!(sb.hit_test(pos2(400.0, 400.0)), Some(Handle::Center));

        sb.press(Handle::Center, pos2(400.0, 400.0));
        assert!(sb.is_mask_expanded());
        assert_eq!(sb.hit_test(pos2(450.0, 810.0)), Some(Handle::Center));

        sb.drag(Handle::Center, pos2(410.0, 395.0));
        let rect = sb.drag(Handle::Center, pos2(425.0, 390.0));
        let expected = Rectangle::new(225.0, 40.0, 500.0, 750.0);
        assert_eq!(rect, Some(expected));
        assert_eq!(element.get(), expected);
        for (edge, line) in derive_edges(&expected) {
            assert_eq!(sb.edge(edge).segment(), [pos2(line.x, line.y), pos2(line.x2, line.y2)]);
        }

        assert!(sb.release(Handle::Center));
        assert!(!sb.is_mask_expanded());
        assert_eq!(sb.state(), BoxState::Idle);
    }

    #[test]
    fn leaving_the_center_disarms_and_clears_the_active_element() {
        let selection = SelectionContext::new();
        let active = ActiveElementRegistry::new();
        selection.select(Uuid::new_v4(), frame(), Box::new(|_| {}));
        let mut sb = SelectionBox::new(selection, active.clone());
        sb.activate(frame());

        active.set(Some(Uuid::new_v4()));
        sb.press(Handle::Center, pos2(400.0, 400.0));
        sb.leave(Handle::Center);

        assert_eq!(sb.state(), BoxState::Idle);
        assert!(!sb.is_mask_expanded());
        assert!(!active.is_active());
        assert_eq!(sb.drag(Handle::Center, pos2(500.0, 500.0)), None);
    }

    #[test]
    fn drag_past_the_opposite_edge_clamps_to_minimum() {
        let (mut sb, _) = shown_box(frame());
        sb.press(Handle::Edge(Edge::South), pos2(450.0, 810.0));
        let rect = sb.drag(Handle::Edge(Edge::South), pos2(450.0, -200.0));
        assert_eq!(rect, Some(Rectangle::new(200.0, 50.0, 500.0, MIN_SIZE)));
        assert_eq!(sb.edge(Edge::North).y, 40.0);

        sb.release(Handle::Edge(Edge::South));
        sb.press(Handle::Edge(Edge::West), pos2(190.0, 55.0));
        let rect = sb.drag(Handle::Edge(Edge::West), pos2(2000.0, 55.0));
        assert_eq!(rect, Some(Rectangle::new(699.0, 50.0, MIN_SIZE, MIN_SIZE)));
        assert_eq!(sb.edge(Edge::East).x, 710.0);
    }

    #[test]
    fn activation_leaves_no_trace_of_the_previous_selection() {
        let (mut sb, _) = shown_box(frame());
        sb.press(Handle::Edge(Edge::North), pos2(300.0, 40.0));
        sb.drag(Handle::Edge(Edge::North), pos2(300.0, 10.0));

        let second = Rectangle::new(10.0, 20.0, 30.0, 40.0);
        sb.activate(second);

        assert_eq!(sb.rectangle(), second);
        assert_eq!(sb.state(), BoxState::Idle);
        for (edge, line) in derive_edges(&second) {
            let overlay = sb.edge(edge);
            assert_eq!(overlay.segment(), [pos2(line.x, line.y), pos2(line.x2, line.y2)]);
            assert_eq!(overlay.span, line.span);
            assert_eq!(overlay.hot_zone_extent, HOT_ZONE_REST_EXTENT);
        }
    }

    #[test]
    fn hot_zone_collapses_after_release() {
        let (mut sb, _) = shown_box(frame());
        sb.press(Handle::Edge(Edge::North), pos2(300.0, 40.0));
        assert_eq!(sb.edge(Edge::North).hot_zone_extent, HOT_ZONE_ENGAGED_EXTENT);
        sb.release(Handle::Edge(Edge::North));
        assert_eq!(sb.edge(Edge::North).hot_zone_extent, HOT_ZONE_REST_EXTENT);
    }

    #[test]
    fn pressing_a_second_handle_releases_the_first() {
        let (mut sb, _) = shown_box(frame());
        sb.press(Handle::Edge(Edge::North), pos2(300.0, 40.0));
        sb.press(Handle::Edge(Edge::East), pos2(710.0, 300.0));
        assert_eq!(sb.state(), BoxState::Dragging(Edge::East));
        assert!(!sb.edge(Edge::North).is_engaged());
    }

    #[test]
    fn hidden_box_ignores_the_pointer() {
        let selection = SelectionContext::new();
        let mut sb = SelectionBox::new(selection, ActiveElementRegistry::new());
        sb.activate(frame());
        assert_eq!(sb.hit_test(pos2(400.0, 400.0)), None);
        sb.press(Handle::Center, pos2(400.0, 400.0));
        assert_eq!(sb.state(), BoxState::Idle);
    }

    fn point_on(edge: Edge, coordinate: f32) -> egui::Pos2 {
        if edge.is_horizontal() {
            pos2(300.0, coordinate)
        } else {
            pos2(coordinate, 300.0)
        }
    }

    #[test]
    fn half_unit_drags_keep_the_opposite_edge_fixed() {
        let (mut sb, _) = shown_box(frame());
        sb.press(Handle::Edge(Edge::North), pos2(300.0, 40.0));
        let rect = sb.drag(Handle::Edge(Edge::North), pos2(300.0, 90.5));
        assert_eq!(rect, Some(Rectangle::new(200.0, 101.0, 500.0, 699.0)));
        assert_eq!(sb.edge(Edge::South).y, 810.0);
        sb.release(Handle::Edge(Edge::North));

        sb.press(Handle::Edge(Edge::West), pos2(190.0, 300.0));
        let rect = sb.drag(Handle::Edge(Edge::West), pos2(150.5, 300.0));
        assert_eq!(rect, Some(Rectangle::new(161.0, 101.0, 539.0, 699.0)));
        assert_eq!(sb.edge(Edge::East).x, 710.0);
    }

    #[test]
    fn fractional_drags_never_move_the_opposite_edge() {
        let offsets = [30.5, -12.25, 7.5, -20.5, 0.37];
        for edge in Edge::ALL {
            let (mut sb, _) = shown_box(frame());
            let fixed = sb.edge(edge.opposite()).coordinate();
            let start = sb.edge(edge).coordinate();
            sb.press(Handle::Edge(edge), point_on(edge, start));

            for offset in offsets {
                let rect = sb
                    .drag(Handle::Edge(edge), point_on(edge, start + offset))
                    .unwrap();
                assert_eq!(sb.edge(edge.opposite()).coordinate(), fixed, "{edge:?} {offset}");
                assert_eq!(sb.edge(edge).coordinate(), (start + offset).round(), "{edge:?} {offset}");
                for value in [rect.x, rect.y, rect.width, rect.height] {
                    assert_eq!(value.fract(), 0.0, "{edge:?} {offset} {rect:?}");
                }
            }
            sb.release(Handle::Edge(edge));
            assert_eq!(sb.edge(edge.opposite()).coordinate(), fixed);
        }
    }

    #[test]
    fn east_and_north_drags_clamp_with_the_opposite_edge_fixed() {
        let (mut sb, _) = shown_box(frame());
        sb.press(Handle::Edge(Edge::East), pos2(710.0, 300.0));
        let rect = sb.drag(Handle::Edge(Edge::East), pos2(-500.0, 300.0));
        assert_eq!(rect, Some(Rectangle::new(200.0, 50.0, MIN_SIZE, 750.0)));
        assert_eq!(sb.edge(Edge::West).x, 190.0);
        assert_eq!(sb.edge(Edge::East).x, 211.0);
        sb.release(Handle::Edge(Edge::East));

        sb.press(Handle::Edge(Edge::North), pos2(205.0, 40.0));
        let rect = sb.drag(Handle::Edge(Edge::North), pos2(205.0, 2000.0));
        assert_eq!(rect, Some(Rectangle::new(200.0, 799.0, MIN_SIZE, MIN_SIZE)));
        assert_eq!(sb.edge(Edge::South).y, 810.0);
    }

    #[test]
    fn releasing_the_center_clears_the_active_element() {
        let selection = SelectionContext::new();
        let active = ActiveElementRegistry::new();
        selection.select(Uuid::new_v4(), frame(), Box::new(|_| {}));
        let mut sb = SelectionBox::new(selection, active.clone());
        sb.activate(frame());

        active.set(Some(Uuid::new_v4()));
        sb.press(Handle::Center, pos2(400.0, 400.0));
        sb.drag(Handle::Center, pos2(410.5, 400.25));
        assert!(sb.release(Handle::Center));

        assert_eq!(sb.rectangle(), Rectangle::new(211.0, 50.0, 500.0, 750.0));
        assert!(!active.is_active());
        assert!(!sb.is_mask_expanded());
    }
}
