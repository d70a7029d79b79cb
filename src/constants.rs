//! Shared application-wide constants.
//! Centralizes tweakable values used by the selection overlay, the canvas and rendering.

// Selection overlay geometry
/// Distance (in canvas units) between an edge line and the element side it follows.
pub const EDGE_INSET: f32 = 10.0;
/// Visual padding the overlay adds around the element on each axis (both sides combined).
pub const OVERLAY_MARGIN: f32 = EDGE_INSET * 2.0;
/// Thickness of an edge's invisible hit region while it is not being dragged.
pub const HOT_ZONE_REST_EXTENT: f32 = 20.0;
/// Thickness of an edge's hit region while its drag is engaged.
pub const HOT_ZONE_ENGAGED_EXTENT: f32 = 4000.0;
/// How far the center drag mask grows past the element on every side while engaged.
pub const CENTER_MASK_EXPANSION: f32 = 4000.0;
/// Smallest width or height an edge drag may produce.
pub const MIN_SIZE: f32 = 1.0;

// Overlay rendering
/// Edge line colour (`#b5b7bc`).
pub const STROKE_COLOR: [u8; 3] = [0xb5, 0xb7, 0xbc];
/// Edge line width in screen pixels.
pub const STROKE_WIDTH: f32 = 2.0;
/// Opacity of hot zones when hit-zone debugging is switched on.
pub const HIT_ZONE_OPACITY: f32 = 0.3;

// Design surface
/// Default viewbox the canvas displays: (x, y, width, height).
pub const DEFAULT_VIEWBOX: (f32, f32, f32, f32) = (-200.0, -50.0, 1080.0, 1080.0);
/// White design area placed images are clipped to: (x, y, width, height).
pub const DESIGN_AREA: (f32, f32, f32, f32) = (200.0, 50.0, 500.0, 750.0);

// Asset panel
/// Default width of the asset panel in screen pixels.
pub const ASSET_PANEL_WIDTH: f32 = 260.0;
/// Number of thumbnail columns per catalog section.
pub const THUMBNAIL_COLUMNS: usize = 3;
/// Edge length of a thumbnail tile in screen pixels.
pub const THUMBNAIL_SIZE: f32 = 56.0;

/// Storage key used for persisted UI settings.
pub const SETTINGS_KEY: &str = "designer_settings";
