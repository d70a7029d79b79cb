//! Canvas interaction.
//!
//! Turns egui's per-frame pointer state into the press, move, release and
//! leave events the selection overlay and placed elements react to, and
//! completes asset drags dropped over the canvas.

use super::state::DesignerApp;
use crate::selection_box::Handle;
use crate::viewport::Viewport;
use eframe::egui;

/// Pointer input relevant to the canvas for one frame.
#[derive(Debug, Clone, Copy)]
struct PointerFrame {
    pos: Option<egui::Pos2>,
    pressed: bool,
    released: bool,
}

impl PointerFrame {
    fn read(ui: &egui::Ui) -> Self {
        ui.input(|i| Self {
            pos: i.pointer.latest_pos(),
            pressed: i.pointer.primary_pressed(),
            released: i.pointer.primary_released(),
        })
    }
}

impl DesignerApp {
    /// Renders the canvas and handles all interaction on it.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let viewport = Viewport::new(self.settings.viewbox, response.rect);
        self.last_viewport = Some(viewport);

        let frame = PointerFrame::read(ui);
        if self.payloads.is_set() {
            self.handle_asset_drop(&response, &viewport, frame);
        } else {
            self.handle_overlay_pointer(ui, &response, &viewport, frame);
        }
        self.pointer.last_pos = frame.pos;

        self.render_canvas(&painter, &viewport);
    }

    /// Tracks an asset drag over the canvas and places it on release.
    ///
    /// A release outside the canvas discards the payload.
    fn handle_asset_drop(&mut self, response: &egui::Response, viewport: &Viewport, frame: PointerFrame) {
        let over_canvas = frame.pos.filter(|pos| response.rect.contains(*pos));
        if let Some(pos) = over_canvas {
            self.canvas.drag_over(pos);
        }

        if !frame.released {
            return;
        }
        let Some(payload) = self.payloads.take() else {
            return;
        };
        if over_canvas.is_some() {
            self.canvas.drop(payload, viewport);
        } else {
            log::debug!("drag released outside the canvas, discarding {payload:?}");
        }
    }

    /// Routes pointer input to the overlay handles and placed elements.
    ///
    /// Events for one frame are delivered in order: leave, press, move, release.
    fn handle_overlay_pointer(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport: &Viewport,
        frame: PointerFrame,
    ) {
        let canvas_pos = frame.pos.map(|pos| viewport.screen_to_canvas(pos));
        let overlay = self.canvas.overlay();
        let current = canvas_pos
            .map(|pos| overlay.handles_at(pos))
            .unwrap_or_default();

        let previous = std::mem::take(&mut self.pointer.hovered_handles);
        for handle in previous.iter().filter(|h| !current.contains(*h)) {
            self.canvas.overlay_mut().leave(*handle);
        }

        let Some(pos) = canvas_pos else {
            self.pointer.hovered_element = None;
            return;
        };

        let inside = frame.pos.is_some_and(|p| response.rect.contains(p));
        let hovered_element = if inside && current.is_empty() {
            self.canvas.element_at(pos)
        } else {
            None
        };
        if let Some(id) = hovered_element {
            if self.pointer.hovered_element != Some(id) {
                self.canvas.hover_element(id);
            }
        }
        self.pointer.hovered_element = hovered_element;

        if frame.pressed && inside {
            if let Some(handle) = current.first() {
                self.canvas.overlay_mut().press(*handle, pos);
            } else if let Some(id) = hovered_element {
                self.canvas.press_element(id);
            }
        }

        let moved = self.pointer.last_pos.is_some_and(|last| Some(last) != frame.pos);
        if moved {
            if let Some(handle) = self.canvas.overlay().engaged_handle() {
                if current.contains(&handle) {
                    self.canvas.overlay_mut().drag(handle, pos);
                }
            }
        }

        if frame.released {
            if let Some(handle) = self.canvas.overlay().engaged_handle() {
                self.canvas.overlay_mut().release(handle);
            }
        }

        if response.clicked() && current.is_empty() && hovered_element.is_none() {
            self.canvas.click_background();
        }

        // Re-test after the events: a press or drag may have grown a zone.
        let hovered = self.canvas.overlay().hit_test(pos);
        if let Some(handle) = hovered {
            ui.ctx().set_cursor_icon(cursor_for(handle));
        }
        self.pointer.hovered_handles = self.canvas.overlay().handles_at(pos);
    }
}

/// Cursor shown over a handle.
pub(super) fn cursor_for(handle: Handle) -> egui::CursorIcon {
    match handle {
        Handle::Center => egui::CursorIcon::Move,
        Handle::Edge(edge) if edge.is_horizontal() => egui::CursorIcon::ResizeVertical,
        Handle::Edge(_) => egui::CursorIcon::ResizeHorizontal,
    }
}
