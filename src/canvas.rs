//! The drop-target canvas.
//!
//! Owns the display list of placed elements, hands out instance keys, and
//! routes element presses into the selection overlay. Painting lives in the UI
//! layer; everything here works in canvas units.

use crate::constants::DESIGN_AREA;
use crate::context::{ActiveElementRegistry, SelectionContext};
use crate::payload::PlaceablePayload;
use crate::selection_box::SelectionBox;
use crate::types::{ElementId, PlacedElement};
use crate::viewport::Viewport;
use eframe::egui;

/// Display list plus the selection state of one design session.
#[derive(Debug)]
pub struct Canvas {
    elements: Vec<PlacedElement>,
    counter: u64,
    last_pointer: Option<egui::Pos2>,
    selection: SelectionContext,
    active: ActiveElementRegistry,
    overlay: SelectionBox,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Creates an empty canvas with a hidden overlay.
    pub fn new() -> Self {
        let selection = SelectionContext::new();
        let active = ActiveElementRegistry::new();
        let overlay = SelectionBox::new(selection.clone(), active.clone());
        Self {
            elements: Vec::new(),
            counter: 0,
            last_pointer: None,
            selection,
            active,
            overlay,
        }
    }

    /// Placed elements, bottom to top.
    pub fn elements(&self) -> &[PlacedElement] {
        &self.elements
    }

    /// Looks up an element by id.
    pub fn element(&self, id: ElementId) -> Option<&PlacedElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Shared selection context.
    pub fn selection(&self) -> &SelectionContext {
        &self.selection
    }

    /// Shared active-element registry.
    pub fn active(&self) -> &ActiveElementRegistry {
        &self.active
    }

    /// The selection overlay.
    pub fn overlay(&self) -> &SelectionBox {
        &self.overlay
    }

    /// Mutable access for pointer routing.
    pub fn overlay_mut(&mut self) -> &mut SelectionBox {
        &mut self.overlay
    }

    /// Last key handed to a dropped element.
    pub fn last_key(&self) -> u64 {
        self.counter
    }

    /// Records where a drag is hovering, in screen pixels.
    pub fn drag_over(&mut self, pointer: egui::Pos2) {
        self.last_pointer = Some(pointer);
    }

    /// Drops `payload` at the last hover position.
    ///
    /// Returns the id of the element that was placed or moved to the top, or
    /// `None` when nothing changed.
    pub fn drop(&mut self, payload: PlaceablePayload, viewport: &Viewport) -> Option<ElementId> {
        let pointer = self.last_pointer.unwrap_or(viewport.screen().min);
        let local = viewport.screen_to_canvas(pointer);

        match payload {
            PlaceablePayload::Factory(factory) => {
                let key = self.counter + 1;
                let Some(element) = factory(key, local.x, local.y) else {
                    log::debug!("factory declined to place an element at {local:?}");
                    return None;
                };
                self.counter = key;

                let fallback = DESIGN_AREA.2;
                element.resolve_size(egui::vec2(fallback, fallback));
                log::debug!(
                    "dropped {} as {} at {:?}",
                    element.title,
                    element.dom_id(),
                    element.geometry()
                );
                let id = element.id;
                self.elements.push(element);
                Some(id)
            }
            PlaceablePayload::NativeTransfer { format, data } => {
                let Some(index) = self.elements.iter().position(|e| e.dom_id() == data) else {
                    log::warn!("ignoring {format} drop for unknown element {data:?}");
                    return None;
                };
                let element = self.elements.remove(index);
                let id = element.id;
                self.elements.push(element);
                log::debug!("raised {data} to the top");
                Some(id)
            }
        }
    }

    /// Topmost element under a canvas position.
    pub fn element_at(&self, pos: egui::Pos2) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.geometry().contains(pos))
            .map(|e| e.id)
    }

    /// Pointer hovering an element makes it the active one.
    pub fn hover_element(&self, id: ElementId) {
        self.active.set(Some(id));
    }

    /// Selects an element: publishes its rectangle, shows the overlay around
    /// it, and registers a setter that writes overlay edits back.
    pub fn press_element(&mut self, id: ElementId) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        let rect = element.geometry().truncated();
        let geometry = element.geometry_handle();

        self.active.set(Some(id));
        self.selection
            .select(id, rect, Box::new(move |next| geometry.set(next)));
        self.overlay.activate(rect);
        true
    }

    /// A press on empty canvas hides the overlay unless an element still
    /// holds pointer focus. Returns whether the overlay was hidden.
    pub fn click_background(&mut self) -> bool {
        if self.active.is_active() {
            return false;
        }
        self.selection.hide();
        true
    }
}
