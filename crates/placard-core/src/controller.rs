//! Root coordinator owning the store, the selection and the editing state.
//!
//! Element views call into this action surface; state flows back down to
//! them through the query methods. All mutations happen synchronously on the
//! thread handling the current event.

use crate::editing::{BlurTarget, EditingState, ElementState};
use crate::element::{Dimension, ElementId, ElementKind, ElementPatch};
use crate::geometry::{
    self, DragSession, GeometryUpdate, ResizeConstraints, ResizeDirection, ResizeProposal,
};
use crate::input::{Dispatch, EventQueue, InputEvent, PointerTarget};
use crate::selection::SelectionSet;
use crate::store::ElementStore;
use crate::upload::{DecodedImage, UploadError};
use kurbo::{Point, Vec2};

/// Owns all canvas state and wires global input into it.
#[derive(Debug, Clone, Default)]
pub struct CanvasController {
    store: ElementStore,
    selection: SelectionSet,
    editing: EditingState,
    /// Armed by an explicit select-all; the next generic pointer-down clears
    /// the selection exactly once.
    select_all_armed: bool,
    /// Live drag gesture, if any. Gesture state only, never persisted.
    drag: Option<DragSession>,
}

impl CanvasController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-populated store (e.g. a template).
    pub fn with_store(store: ElementStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    // ---- element actions -------------------------------------------------

    /// Create a new element of `kind` with defaults and replace the selection
    /// with exactly the new element (select-what-you-just-created).
    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        let id = self.store.add(kind);
        self.selection = SelectionSet::of([id.clone()]);
        log::debug!("added {} element {id}", kind.name());
        id
    }

    /// Shallow-merge a partial record onto its element. An unknown id is a
    /// no-op: async callbacks (image decode) can race with deletion.
    pub fn update_element(&mut self, patch: ElementPatch) {
        if let Err(err) = self.store.apply(&patch) {
            log::debug!("dropping element update: {err}");
        }
    }

    // ---- selection -------------------------------------------------------

    /// Add `id` to the selection. Additive; repeated clicks build a
    /// multi-selection.
    pub fn select(&mut self, id: ElementId) {
        if !self.store.contains(&id) {
            return;
        }
        self.selection = self.selection.added(id);
    }

    /// Remove `id` from the selection, ending its editing session if it had
    /// one (deselecting the edited element also lowers the toolbar).
    pub fn deselect(&mut self, id: &ElementId) {
        if self.editing.is_editing(id) {
            self.editing.exit();
        }
        self.selection = self.selection.removed(id);
    }

    /// Select every element in the store and arm the one-shot outside-click
    /// clear.
    pub fn select_all(&mut self) {
        self.selection = SelectionSet::of(self.store.ids().cloned());
        self.select_all_armed = true;
    }

    pub fn clear_selection(&mut self) {
        self.selection = self.selection.cleared();
        self.select_all_armed = false;
    }

    /// Remove every selected element from the store and empty the selection
    /// as one logical operation; the selection never observably references a
    /// deleted id.
    pub fn delete_selected(&mut self) {
        let ids = self.selection.to_id_set();
        if ids.is_empty() {
            return;
        }
        let removed = self.store.remove_many(&ids);
        for id in &ids {
            self.editing.forget(id);
        }
        if self
            .drag
            .as_ref()
            .is_some_and(|session| ids.contains(session.id()))
        {
            self.drag = None;
        }
        self.selection = SelectionSet::new();
        log::debug!("deleted {removed} selected element(s)");
    }

    // ---- hover -----------------------------------------------------------

    pub fn begin_hover(&mut self, id: ElementId) {
        self.editing.begin_hover(id);
    }

    pub fn end_hover(&mut self, id: &ElementId) {
        self.editing.end_hover(id);
    }

    // ---- editing ---------------------------------------------------------

    /// The distinguished activation gesture (double-activation): take `id`
    /// from Selected into Editing. Any other editing element is forced back
    /// to read-only first, so at most one element is ever editable.
    pub fn activate(&mut self, id: &ElementId) {
        if !self.store.contains(id) {
            return;
        }
        if let Some(displaced) = self.editing.enter(id.clone()) {
            log::debug!("editing moved from {displaced} to {id}");
        }
        self.selection = self.selection.added(id.clone());
    }

    /// Focus left the element. Focus moving into the toolbar (or staying
    /// within the element) keeps the editing session; anything else ends it
    /// and deselects the element.
    pub fn handle_blur(&mut self, id: &ElementId, target: BlurTarget) {
        match target {
            BlurTarget::Toolbar | BlurTarget::WithinElement => {}
            BlurTarget::Outside => {
                if self.editing.is_editing(id) {
                    self.editing.exit();
                }
                self.selection = self.selection.removed(id);
            }
        }
    }

    // ---- drag ------------------------------------------------------------

    /// Begin a drag gesture. Refused while the element is being edited: an
    /// element cannot be text-edited and repositioned at the same time.
    pub fn begin_drag(&mut self, id: &ElementId) -> bool {
        if self.editing.is_editing(id) {
            return false;
        }
        let Some(element) = self.store.get(id) else {
            return false;
        };
        self.drag = Some(DragSession::new(id.clone(), element.position));
        true
    }

    /// Accumulate pointer movement on the live drag. Visual only; the store
    /// is not touched.
    pub fn drag_by(&mut self, delta: Vec2) {
        if let Some(session) = &mut self.drag {
            session.translate(delta);
        }
    }

    /// Where the dragged element is drawn this frame, if `id` is mid-drag.
    pub fn drag_preview(&self, id: &ElementId) -> Option<crate::element::Position> {
        self.drag
            .as_ref()
            .filter(|session| session.id() == id)
            .map(|session| session.preview())
    }

    pub fn is_dragging(&self, id: &ElementId) -> bool {
        self.drag
            .as_ref()
            .is_some_and(|session| session.id() == id)
    }

    /// End the drag at the widget-reported stop point and commit the single
    /// position update.
    pub fn finish_drag(&mut self, stop: Point) {
        if let Some(session) = self.drag.take() {
            self.update_element(session.finish(stop));
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    // ---- resize ----------------------------------------------------------

    /// The resize affordances for `id`, by kind.
    pub fn resize_constraints(&self, id: &ElementId) -> Option<ResizeConstraints> {
        self.store
            .get(id)
            .map(|element| ResizeConstraints::for_kind(element.kind))
    }

    /// Commit one resize step: clamp the widget's proposal and write the
    /// dimension + position pair to the store.
    pub fn resize_step(
        &mut self,
        id: &ElementId,
        direction: ResizeDirection,
        proposal: ResizeProposal,
    ) {
        let Some(element) = self.store.get(id) else {
            log::debug!("resize step for unknown element {id} dropped");
            return;
        };
        let constraints = ResizeConstraints::for_kind(element.kind);
        if !constraints.allows(direction) {
            log::debug!("resize from {direction:?} not allowed for {id}");
            return;
        }
        let GeometryUpdate {
            dimension,
            position,
        } = geometry::clamp_resize(direction, proposal, &constraints);
        self.update_element(
            ElementPatch::new(id.clone())
                .with_dimension(dimension)
                .with_position(position),
        );
    }

    // ---- image upload ----------------------------------------------------

    /// A finished upload landed: auto-fit the display size to the pinned
    /// width and store the data URI. If the element was deleted while the
    /// decode ran, the result is dropped silently.
    pub fn apply_upload(&mut self, id: &ElementId, image: DecodedImage) {
        if !self.store.contains(id) {
            log::debug!("upload finished for deleted element {id}, dropping");
            return;
        }
        let size = geometry::fit_to_width(
            image.natural_width,
            image.natural_height,
            geometry::AUTO_FIT_WIDTH,
        );
        self.update_element(
            ElementPatch::new(id.clone())
                .with_content(image.data_uri)
                .with_dimension(Dimension::from_px(size.width, size.height)),
        );
    }

    /// A read or decode failed. Nothing is stored; the element keeps its
    /// upload-pending visual.
    pub fn upload_failed(&self, id: &ElementId, error: &UploadError) {
        log::warn!("image upload for {id} failed: {error}");
    }

    // ---- global input ----------------------------------------------------

    /// Handle one global input event. Returns [`Dispatch::Handled`] when the
    /// host must suppress the native behavior (browser select-all).
    pub fn dispatch(&mut self, event: InputEvent) -> Dispatch {
        match event {
            InputEvent::KeyDown { key, modifiers } => {
                if self.editing.toolbar_visible() {
                    // The live editor captures keystrokes.
                    return Dispatch::Ignored;
                }
                match key.as_str() {
                    "Delete" => {
                        self.delete_selected();
                        Dispatch::Handled
                    }
                    "a" | "A" if modifiers.ctrl => {
                        self.select_all();
                        Dispatch::Handled
                    }
                    _ => Dispatch::Ignored,
                }
            }
            InputEvent::PointerDown { target, .. } => {
                if !self.select_all_armed {
                    return Dispatch::Ignored;
                }
                self.select_all_armed = false;
                match target {
                    PointerTarget::Canvas | PointerTarget::Outside => {
                        self.selection = self.selection.cleared();
                        Dispatch::Handled
                    }
                    PointerTarget::Element(_) => Dispatch::Ignored,
                }
            }
        }
    }

    /// Drain a queue, handling each event to completion before the next.
    pub fn drain(&mut self, queue: &mut EventQueue) {
        while let Some(event) = queue.pop() {
            let _ = self.dispatch(event);
        }
    }

    // ---- queries ---------------------------------------------------------

    pub fn store(&self) -> &ElementStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The shared toolbar visibility flag.
    pub fn toolbar_visible(&self) -> bool {
        self.editing.toolbar_visible()
    }

    pub fn element_state(&self, id: &ElementId) -> ElementState {
        self.editing.state_of(id, &self.selection)
    }

    pub fn is_read_only(&self, id: &ElementId) -> bool {
        self.editing.is_read_only(id)
    }

    /// Resize handles are shown only for the sole selected element.
    pub fn show_handles(&self, id: &ElementId) -> bool {
        self.selection.is_sole(id)
    }
}
