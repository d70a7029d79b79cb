//! User interface for the frame designer.
//!
//! # Module Organization
//!
//! - `state` - Settings and the main DesignerApp
//! - `panel` - Asset catalog panel and drag sources
//! - `canvas` - Pointer routing for the canvas, overlay and drops
//! - `rendering` - Drawing the design area, placed images and overlay

mod canvas;
mod panel;
mod rendering;
mod state;

pub use state::{DesignerApp, DesignerSettings};

use crate::constants::SETTINGS_KEY;
use eframe::egui;

impl eframe::App for DesignerApp {
    /// Persist UI settings between restarts. The design itself is not saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.settings.to_json() {
            Ok(json) => storage.set_string(SETTINGS_KEY, json),
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }

    /// Lays out the toolbar, the asset panel and the canvas for one frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let visuals = if self.settings.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        let viewport_width = ctx.input(|i| i.screen_rect().width());
        let max_width = (viewport_width * 0.5).max(160.0);
        egui::SidePanel::left("asset_panel")
            .resizable(true)
            .default_width(self.settings.asset_panel_width.clamp(160.0, max_width))
            .show(ctx, |ui| {
                self.settings.asset_panel_width = ui.available_width().clamp(160.0, max_width);
                self.draw_asset_panel(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });
    }
}

impl DesignerApp {
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let theme_label = if self.settings.dark_mode { "Light mode" } else { "Dark mode" };
            if ui.button(theme_label).clicked() {
                self.settings.dark_mode = !self.settings.dark_mode;
            }
            ui.checkbox(&mut self.settings.show_hit_zones, "Show hit zones");
            ui.separator();

            let selection = self.canvas.selection();
            if selection.is_visible() {
                let r = selection.target();
                ui.label(format!(
                    "x {} y {}  {} x {}",
                    r.x, r.y, r.width, r.height
                ));
            } else {
                ui.label(format!("{} placed", self.canvas.elements().len()));
            }
        });
    }
}
