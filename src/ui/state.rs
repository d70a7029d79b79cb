//! Application state structures.
//!
//! Settings are the only part of the app that survives a restart; the design
//! session (placed elements, selection, drag payloads) starts empty each time.

use crate::canvas::Canvas;
use crate::catalog::{self, CatalogSection};
use crate::constants::{ASSET_PANEL_WIDTH, SETTINGS_KEY};
use crate::error::DesignerResult;
use crate::payload::DragPayloadContext;
use crate::selection_box::Handle;
use crate::types::ElementId;
use crate::viewport::{Viewbox, Viewport};
use eframe::egui;
use serde::{Deserialize, Serialize};

/// User-facing settings persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerSettings {
    /// Whether the dark theme is active
    pub dark_mode: bool,
    /// Remembered width of the asset panel
    pub asset_panel_width: f32,
    /// Paint the normally invisible hot zones (debug aid)
    pub show_hit_zones: bool,
    /// Region of the design shown in the canvas
    pub viewbox: Viewbox,
}

impl Default for DesignerSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            asset_panel_width: ASSET_PANEL_WIDTH,
            show_hit_zones: false,
            viewbox: Viewbox::default(),
        }
    }
}

impl DesignerSettings {
    /// Serializes the settings to JSON.
    pub fn to_json(&self) -> DesignerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes settings from JSON.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON produced by [`DesignerSettings::to_json`]; missing fields take their defaults
    ///
    /// # Returns
    ///
    /// The settings, or an error if the JSON is malformed or the viewbox is degenerate.
    pub fn from_json(json: &str) -> DesignerResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.viewbox.validate()?;
        Ok(settings)
    }
}

/// Pointer bookkeeping carried between frames.
///
/// egui reports pointer state per frame, so the handles hovered last frame are
/// kept to detect when the pointer leaves one.
#[derive(Debug, Default)]
pub struct PointerState {
    /// Overlay handles under the pointer last frame, topmost first
    pub hovered_handles: Vec<Handle>,
    /// Element under the pointer last frame
    pub hovered_element: Option<ElementId>,
    /// Last pointer position in screen pixels
    pub last_pos: Option<egui::Pos2>,
}

/// The main application.
pub struct DesignerApp {
    /// Persisted UI settings
    pub settings: DesignerSettings,
    /// Design session: display list plus selection overlay
    pub canvas: Canvas,
    /// Payload of the asset drag in progress
    pub payloads: DragPayloadContext,
    /// Sections shown in the asset panel
    pub catalog: Vec<CatalogSection>,
    /// Pointer state from the previous frame
    pub pointer: PointerState,
    /// Title of the asset being dragged out of the panel
    pub dragged_asset: Option<String>,
    /// Viewport the canvas was last drawn with
    pub last_viewport: Option<Viewport>,
}

impl Default for DesignerApp {
    fn default() -> Self {
        Self::with_settings(DesignerSettings::default())
    }
}

impl DesignerApp {
    /// Creates the app, restoring settings from eframe storage when present.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| storage.get_string(SETTINGS_KEY))
            .map(|json| {
                DesignerSettings::from_json(&json).unwrap_or_else(|err| {
                    log::warn!("discarding unreadable settings: {err}");
                    DesignerSettings::default()
                })
            })
            .unwrap_or_default();
        Self::with_settings(settings)
    }

    /// Creates the app with the given settings and an empty design.
    pub fn with_settings(settings: DesignerSettings) -> Self {
        Self {
            settings,
            canvas: Canvas::new(),
            payloads: DragPayloadContext::new(),
            catalog: catalog::sections(),
            pointer: PointerState::default(),
            dragged_asset: None,
            last_viewport: None,
        }
    }
}
