//! # Frame Designer
//!
//! A canvas for composing picture frames and ornaments. Assets are dragged
//! from a catalog onto a fixed design area; a placed image is selected by
//! pressing it, which wraps it in a selection box:
//! - **Center**: drag to move the image
//! - **North / South edges**: drag to resize vertically
//! - **West / East edges**: drag to resize horizontally
//!
//! The headless core (trackers, edges, the selection box controller, the
//! canvas display list) works in canvas units and has no painting code; the
//! `ui` module maps egui pointer input onto it.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod canvas;
pub mod catalog;
pub mod constants;
pub mod context;
pub mod edge;
pub mod error;
pub mod payload;
pub mod selection_box;
pub mod tracker;
pub mod types;
pub mod viewport;
mod ui;

pub use error::{DesignerError, DesignerResult};
pub use selection_box::{BoxState, Handle, SelectionBox};
pub use types::*;
pub use ui::{DesignerApp, DesignerSettings};

/// Runs the designer in a native window.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use frame_designer::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
#[cfg(not(target_arch = "wasm32"))]
pub fn run_app() -> Result<(), eframe::Error> {
    log::info!("starting frame designer");
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Frame Designer",
        options,
        Box::new(|cc| Ok(Box::new(DesignerApp::new(cc)))),
    )
}

/// Id of the `<canvas>` element the web build renders into.
#[cfg(target_arch = "wasm32")]
const WEB_CANVAS_ID: &str = "designer_canvas";

#[cfg(target_arch = "wasm32")]
fn find_web_canvas() -> DesignerResult<web_sys::HtmlCanvasElement> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| DesignerError::WebStartup("no document".into()))?;
    document
        .get_element_by_id(WEB_CANVAS_ID)
        .ok_or_else(|| DesignerError::WebStartup(format!("missing #{WEB_CANVAS_ID}")))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| DesignerError::WebStartup(format!("#{WEB_CANVAS_ID} is not a canvas")))
}

/// Browser entry point.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start_web() -> Result<(), wasm_bindgen::JsValue> {
    // A second init (e.g. hot reload) keeps the first logger.
    let _ = eframe::WebLogger::init(log::LevelFilter::Debug);

    let canvas = find_web_canvas().map_err(|err| wasm_bindgen::JsValue::from_str(&err.to_string()))?;
    log::info!("starting frame designer");
    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(DesignerApp::new(cc)))),
            )
            .await;
        if let Err(err) = started {
            log::error!("failed to start frame designer: {err:?}");
        }
    });
    Ok(())
}
