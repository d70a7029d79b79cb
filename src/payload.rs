//! Drag payloads.
//!
//! A drag that starts in the asset panel publishes what it carries here; the
//! canvas takes it back out when the drag is dropped over it.

use crate::types::PlacedElement;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Builds a placed element from `(key, x, y)` in canvas coordinates.
///
/// Returning `None` means nothing should be placed.
pub type ElementFactory = Rc<dyn Fn(u64, f32, f32) -> Option<PlacedElement>>;

/// What a drag carries.
#[derive(Clone)]
pub enum PlaceablePayload {
    /// An existing element identified by its DOM-style id
    NativeTransfer {
        /// Transfer format, e.g. `text/plain`
        format: String,
        /// The element id (`image-shape-<key>`)
        data: String,
    },
    /// A factory producing a fresh element
    Factory(ElementFactory),
}

impl fmt::Debug for PlaceablePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NativeTransfer { format, data } => f
                .debug_struct("NativeTransfer")
                .field("format", format)
                .field("data", data)
                .finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

impl PlaceablePayload {
    /// Payload for re-placing an element already on the canvas.
    pub fn native(format: impl Into<String>, data: impl Into<String>) -> Self {
        Self::NativeTransfer {
            format: format.into(),
            data: data.into(),
        }
    }
}

/// Holds the payload of the drag in progress, if any.
#[derive(Clone, Default)]
pub struct DragPayloadContext {
    current: Rc<RefCell<Option<PlaceablePayload>>>,
}

impl fmt::Debug for DragPayloadContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DragPayloadContext")
            .field(&*self.current.borrow())
            .finish()
    }
}

impl DragPayloadContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes the payload for a drag that just started.
    pub fn set(&self, payload: PlaceablePayload) {
        *self.current.borrow_mut() = Some(payload);
    }

    /// Whether a drag is carrying something.
    pub fn is_set(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// A copy of the current payload.
    pub fn current(&self) -> Option<PlaceablePayload> {
        self.current.borrow().clone()
    }

    /// Removes and returns the payload, typically on drop.
    pub fn take(&self) -> Option<PlaceablePayload> {
        self.current.borrow_mut().take()
    }

    /// Drops the payload, e.g. when a drag ends outside the canvas.
    pub fn clear(&self) {
        self.current.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_empties_the_context() {
        let payloads = DragPayloadContext::new();
        let other = payloads.clone();
        other.set(PlaceablePayload::native("text/plain", "image-shape-3"));
        assert!(payloads.is_set());

        match payloads.take() {
            Some(PlaceablePayload::NativeTransfer { data, .. }) => assert_eq!(data, "image-shape-3"),
            other => panic!("unexpected payload {other:?}"),
        }
        assert!(!other.is_set());
        assert!(payloads.take().is_none());
    }
}
