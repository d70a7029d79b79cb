//! Shared state for one canvas session.
//!
//! Both handles are cheap to clone and are handed to each component at
//! construction. Writes go through a single path per handle: the selection box
//! writes the target rectangle, element press/hover handlers write the active
//! element. Everything runs on the UI thread, so `Rc` + interior mutability is
//! all the sharing needed.

use crate::types::{ElementId, Rectangle, Visibility};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Callback a selected element registers to receive geometry updates.
///
/// It runs outside the context's borrow, so it may read or update the
/// [`SelectionContext`] it is registered with.
pub type RectangleSetter = Box<dyn FnMut(Rectangle)>;

#[derive(Default)]
struct SelectionState {
    visibility: Visibility,
    target: Rectangle,
    owner: Option<ElementId>,
    setter: Option<RectangleSetter>,
}

/// Which rectangle the overlay targets, whether it is shown, and where
/// updates to it are delivered.
#[derive(Clone, Default)]
pub struct SelectionContext {
    inner: Rc<RefCell<SelectionState>>,
}

impl fmt::Debug for SelectionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("SelectionContext")
            .field("visibility", &state.visibility)
            .field("target", &state.target)
            .field("owner", &state.owner)
            .field("has_setter", &state.setter.is_some())
            .finish()
    }
}

impl SelectionContext {
    /// Creates a hidden context with a zero target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current visibility.
    pub fn visibility(&self) -> Visibility {
        self.inner.borrow().visibility
    }

    /// Shorthand for `visibility() == Visibility::Shown`.
    pub fn is_visible(&self) -> bool {
        self.visibility() == Visibility::Shown
    }

    /// Rectangle the overlay currently targets.
    pub fn target(&self) -> Rectangle {
        self.inner.borrow().target
    }

    /// Element that published the current target, if any.
    pub fn owner(&self) -> Option<ElementId> {
        self.inner.borrow().owner
    }

    /// Shows the overlay around `target`, replacing the previous owner and setter.
    pub fn select(&self, owner: ElementId, target: Rectangle, setter: RectangleSetter) {
        let mut state = self.inner.borrow_mut();
        state.visibility = Visibility::Shown;
        state.target = target;
        state.owner = Some(owner);
        state.setter = Some(setter);
    }

    /// Records a new target and forwards it to the owning element.
    pub fn set_target_rectangle(&self, target: Rectangle) {
        let setter = {
            let mut state = self.inner.borrow_mut();
            state.target = target;
            state.setter.take()
        };
        let Some(mut setter) = setter else {
            return;
        };
        setter(target);

        // The setter may have selected another element meanwhile.
        let mut state = self.inner.borrow_mut();
        if state.setter.is_none() {
            state.setter = Some(setter);
        }
    }

    /// Hides the overlay. The last target is kept.
    pub fn hide(&self) {
        self.inner.borrow_mut().visibility = Visibility::Hidden;
    }
}

/// The placed element currently holding pointer focus.
#[derive(Debug, Clone, Default)]
pub struct ActiveElementRegistry {
    id: Rc<Cell<Option<ElementId>>>,
}

impl ActiveElementRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current active element.
    pub fn get(&self) -> Option<ElementId> {
        self.id.get()
    }

    /// Whether any element holds focus.
    pub fn is_active(&self) -> bool {
        self.id.get().is_some()
    }

    /// Sets or clears the active element.
    pub fn set(&self, id: Option<ElementId>) {
        self.id.set(id);
    }

    /// Clears the active element.
    pub fn clear(&self) {
        self.id.set(None);
    }
}
