//! Editing-mode state machine shared between elements and the toolbar.

use crate::element::ElementId;
use crate::selection::SelectionSet;
use serde::{Deserialize, Serialize};

/// Derived interaction state of an element.
///
/// Precedence when several apply: Editing > Selected > Hovered > Idle.
/// A hovered element that is also selected reports `Selected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ElementState {
    /// Read-only, not selected, not hovered.
    #[default]
    Idle,
    /// Transient pointer highlight only; no data-model mutation.
    Hovered,
    /// In the selection set; shows handles when it is the sole selection.
    Selected,
    /// Content is live-editable and the shared toolbar is visible.
    Editing,
}

impl ElementState {
    /// Selected or editing (editing implies selected).
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected | Self::Editing)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing)
    }
}

/// Where keyboard focus lands when an edited element blurs. Focus moving into
/// the toolbar (or within the element itself) keeps the editing session
/// alive; everything else ends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurTarget {
    /// The shared formatting toolbar; same logical editing session.
    Toolbar,
    /// A descendant of the element's own view.
    WithinElement,
    /// Anywhere else.
    Outside,
}

/// Tracks the single editable element and the transient hover highlight.
///
/// At most one element is editable at any time; the shared toolbar
/// visibility flag is derived from that, never stored per element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditingState {
    editing: Option<ElementId>,
    hovered: Option<ElementId>,
}

impl EditingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The element currently in editing mode, if any.
    pub fn editing(&self) -> Option<&ElementId> {
        self.editing.as_ref()
    }

    pub fn hovered(&self) -> Option<&ElementId> {
        self.hovered.as_ref()
    }

    /// The process-wide toolbar visibility flag: raised exactly while one
    /// element is editable.
    pub fn toolbar_visible(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_editing(&self, id: &ElementId) -> bool {
        self.editing.as_ref() == Some(id)
    }

    /// Elements are read-only unless they are the one editing element.
    pub fn is_read_only(&self, id: &ElementId) -> bool {
        !self.is_editing(id)
    }

    /// Enter editing mode for `id`, forcing any other editing element back to
    /// read-only first. Returns the displaced element, if there was one.
    pub fn enter(&mut self, id: ElementId) -> Option<ElementId> {
        if self.editing.as_ref() == Some(&id) {
            return None;
        }
        self.editing.replace(id)
    }

    /// End the editing session. Returns the element that was editing.
    pub fn exit(&mut self) -> Option<ElementId> {
        self.editing.take()
    }

    pub fn begin_hover(&mut self, id: ElementId) {
        self.hovered = Some(id);
    }

    pub fn end_hover(&mut self, id: &ElementId) {
        if self.hovered.as_ref() == Some(id) {
            self.hovered = None;
        }
    }

    /// Drop any references to a deleted element.
    pub fn forget(&mut self, id: &ElementId) {
        if self.editing.as_ref() == Some(id) {
            self.editing = None;
        }
        if self.hovered.as_ref() == Some(id) {
            self.hovered = None;
        }
    }

    /// Derive the element's interaction state from editing, selection and
    /// hover, applying the documented precedence.
    pub fn state_of(&self, id: &ElementId, selection: &SelectionSet) -> ElementState {
        if self.is_editing(id) {
            ElementState::Editing
        } else if selection.contains(id) {
            ElementState::Selected
        } else if self.hovered.as_ref() == Some(id) {
            ElementState::Hovered
        } else {
            ElementState::Idle
        }
    }
}
