//! Canvas rendering: design area, placed images and the selection overlay.

use super::state::DesignerApp;
use crate::constants::{DESIGN_AREA, HIT_ZONE_OPACITY, STROKE_COLOR, STROKE_WIDTH};
use crate::edge::Edge;
use crate::selection_box::Handle;
use crate::types::{PlacedElement, Rectangle};
use crate::viewport::Viewport;
use eframe::egui;
use eframe::epaint::StrokeKind;

/// Canvas rectangle of the white design area.
pub(super) fn design_area() -> Rectangle {
    let (x, y, width, height) = DESIGN_AREA;
    Rectangle::new(x, y, width, height)
}

impl DesignerApp {
    /// Paints everything on the canvas, back to front.
    ///
    /// # Arguments
    ///
    /// * `painter` - Painter for the canvas area
    /// * `viewport` - Mapping from canvas units to the painter's screen rect
    pub fn render_canvas(&self, painter: &egui::Painter, viewport: &Viewport) {
        let background = if self.settings.dark_mode {
            egui::Color32::from_gray(90)
        } else {
            egui::Color32::from_gray(160)
        };
        painter.rect_filled(viewport.screen(), 0.0, background);

        let area = viewport.rectangle_to_screen(&design_area());
        painter.rect_filled(area, 0.0, egui::Color32::WHITE);

        // Placed images are clipped to the design area; the overlay is not.
        let clipped = painter.with_clip_rect(area.intersect(painter.clip_rect()));
        for element in self.canvas.elements() {
            self.draw_element(&clipped, viewport, element);
        }

        if self.canvas.overlay().is_visible() {
            self.draw_overlay(painter, viewport);
        }
    }

    fn draw_element(&self, painter: &egui::Painter, viewport: &Viewport, element: &PlacedElement) {
        let rect = viewport.rectangle_to_screen(&element.geometry());
        let active = self.canvas.selection().is_visible()
            && self.canvas.selection().owner() == Some(element.id);

        painter.rect_filled(rect, 2.0, egui::Color32::from_rgb(0xe8, 0xe4, 0xda));
        painter.rect_stroke(
            rect,
            2.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(if active { 90 } else { 170 })),
            StrokeKind::Inside,
        );

        let font_size = (14.0 * viewport.scale()).clamp(8.0, 18.0);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            &element.title,
            egui::FontId::proportional(font_size),
            egui::Color32::from_gray(60),
        );
    }

    /// Four edge lines plus, when enabled, the hot zones that drive them.
    fn draw_overlay(&self, painter: &egui::Painter, viewport: &Viewport) {
        let overlay = self.canvas.overlay();
        let [r, g, b] = STROKE_COLOR;
        let stroke = egui::Stroke::new(STROKE_WIDTH, egui::Color32::from_rgb(r, g, b));

        if self.settings.show_hit_zones {
            let fill = egui::Color32::BLACK.gamma_multiply(HIT_ZONE_OPACITY);
            let handles = Edge::ALL
                .iter()
                .map(|edge| Handle::Edge(*edge))
                .chain(std::iter::once(Handle::Center));
            for handle in handles.filter(|h| overlay.is_interactive(*h)) {
                let zone = viewport.canvas_rect_to_screen(overlay.zone(handle));
                painter.rect_filled(zone, 0.0, fill);
            }
        }

        for edge in Edge::ALL {
            let [start, end] = overlay.edge(edge).segment();
            painter.line_segment(
                [viewport.canvas_to_screen(start), viewport.canvas_to_screen(end)],
                stroke,
            );
        }
    }
}
