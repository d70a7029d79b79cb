//! Asset panel: catalog sections of draggable thumbnails.

use super::state::DesignerApp;
use crate::catalog::{create_image_shape, AssetItem};
use crate::constants::{THUMBNAIL_COLUMNS, THUMBNAIL_SIZE};
use crate::payload::PlaceablePayload;
use eframe::egui;
use eframe::epaint::StrokeKind;

const TALLEST_ASSET: f32 = 880.0;

impl DesignerApp {
    /// Draws every catalog section.
    pub fn draw_asset_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Assets");
        ui.separator();

        let mut started = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            for section in &self.catalog {
                egui::CollapsingHeader::new(section.title)
                    .default_open(true)
                    .show(ui, |ui| {
                        egui::Grid::new(section.title)
                            .spacing(egui::vec2(6.0, 6.0))
                            .show(ui, |ui| {
                                for (index, item) in section.items.iter().enumerate() {
                                    if draw_thumbnail(ui, item) {
                                        started = Some(item.clone());
                                    }
                                    if (index + 1) % THUMBNAIL_COLUMNS == 0 {
                                        ui.end_row();
                                    }
                                }
                            });
                    });
            }
        });

        if let Some(item) = started {
            log::debug!("started dragging {}", item.title);
            self.payloads
                .set(PlaceablePayload::Factory(create_image_shape(&item)));
            self.dragged_asset = Some(item.title);
        }

        if !self.payloads.is_set() {
            self.dragged_asset = None;
        }
        if let Some(title) = &self.dragged_asset {
            draw_drag_ghost(ui.ctx(), title);
        }
    }
}

/// Label following the pointer while an asset is dragged.
fn draw_drag_ghost(ctx: &egui::Context, title: &str) {
    let Some(pos) = ctx.pointer_latest_pos() else {
        return;
    };
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("asset_drag_ghost"),
    ));
    let galley = painter.layout_no_wrap(
        title.to_owned(),
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
    let rect = egui::Rect::from_min_size(pos + egui::vec2(12.0, 12.0), galley.size());
    painter.rect_filled(rect.expand(4.0), 3.0, egui::Color32::from_black_alpha(180));
    painter.galley(rect.min, galley, egui::Color32::WHITE);
}

/// One thumbnail tile. Returns true when a drag starts on it.
fn draw_thumbnail(ui: &mut egui::Ui, item: &AssetItem) -> bool {
    let size = egui::vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::drag());

    let visuals = ui.style().interact(&response);
    ui.painter().rect_filled(rect, 4.0, visuals.bg_fill);
    ui.painter()
        .rect_stroke(rect, 4.0, visuals.bg_stroke, StrokeKind::Inside);

    // Height relative to the tallest asset in the catalog.
    let ratio = item.height.map_or(1.0, |h| (h / TALLEST_ASSET).clamp(0.15, 1.0));
    let inner = egui::Rect::from_center_size(
        rect.center(),
        egui::vec2(THUMBNAIL_SIZE * 0.6, THUMBNAIL_SIZE * 0.8 * ratio),
    );
    ui.painter()
        .rect_filled(inner, 2.0, egui::Color32::from_rgb(0xe8, 0xe4, 0xda));

    let response = response.on_hover_text(&item.title);
    if response.dragged() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    }
    response.drag_started()
}
