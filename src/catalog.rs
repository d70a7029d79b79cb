//! Asset catalog shown in the side panel.
//!
//! Items only know their natural height; the width is resolved when the
//! placed image loads.

use crate::payload::ElementFactory;
use crate::types::{PlacedElement, Rectangle};
use std::rc::Rc;

/// One draggable asset.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetItem {
    /// Display title, also the image stem
    pub title: String,
    /// Image source
    pub href: String,
    /// Natural width, if known
    pub width: Option<f32>,
    /// Natural height, if known
    pub height: Option<f32>,
}

impl AssetItem {
    /// An asset served from `/<title>.png` with a known height.
    pub fn with_height(title: &str, height: f32) -> Self {
        Self {
            title: title.to_owned(),
            href: format!("/{title}.png"),
            width: None,
            height: Some(height),
        }
    }
}

/// A titled group of assets.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSection {
    /// Heading shown above the thumbnails
    pub title: &'static str,
    /// Items in display order
    pub items: Vec<AssetItem>,
}

const ORNAMENT_HEIGHTS: [(&str, f32); 9] = [
    ("ornament-one", 419.0),
    ("ornament-two", 149.0),
    ("ornament-three", 720.0),
    ("ornament-four", 120.0),
    ("ornament-five", 280.0),
    ("ornament-six", 150.0),
    ("ornament-seven", 500.0),
    ("ornament-eight", 180.0),
    ("ornament-nine", 520.0),
];

const FRAME_HEIGHTS: [(&str, f32); 9] = [
    ("frame-one", 480.0),
    ("frame-two", 750.0),
    ("frame-three", 750.0),
    ("frame-four", 880.0),
    ("frame-five", 680.0),
    ("frame-six", 710.0),
    ("frame-seven", 710.0),
    ("frame-eight", 750.0),
    ("frame-nine", 680.0),
];

fn section(title: &'static str, items: &[(&str, f32)]) -> CatalogSection {
    CatalogSection {
        title,
        items: items
            .iter()
            .map(|(name, height)| AssetItem::with_height(name, *height))
            .collect(),
    }
}

/// Decorative ornaments.
pub fn ornaments() -> CatalogSection {
    section("Ornaments", &ORNAMENT_HEIGHTS)
}

/// Picture frames.
pub fn frames() -> CatalogSection {
    section("Frames", &FRAME_HEIGHTS)
}

/// Every section in panel order.
pub fn sections() -> Vec<CatalogSection> {
    vec![ornaments(), frames()]
}

/// Factory placing `item` with its top-left corner at the drop point.
pub fn create_image_shape(item: &AssetItem) -> ElementFactory {
    let item = item.clone();
    Rc::new(move |key: u64, x: f32, y: f32| {
        let geometry = Rectangle::from_partial(Some(x), Some(y), item.width, item.height);
        Some(PlacedElement::new(key, item.href.clone(), item.title.clone(), geometry))
    })
}
