//! Placard core library.
//!
//! Headless state and interaction model for a free-form document canvas:
//! absolutely positioned text/image elements with selection, drag/resize
//! geometry updates and a single-editor editing mode. Rendering and real
//! widget toolkits are external collaborators consumed through the narrow
//! interfaces in `placard-view`.

pub mod controller;
pub mod editing;
pub mod element;
pub mod geometry;
pub mod input;
pub mod selection;
pub mod store;
pub mod upload;

pub use controller::CanvasController;
pub use editing::{BlurTarget, EditingState, ElementState};
pub use element::{Dimension, Element, ElementId, ElementKind, ElementPatch, Position, parse_px};
pub use geometry::{
    AUTO_FIT_WIDTH, DragSession, GeometryUpdate, MIN_HEIGHT, MIN_WIDTH, ResizeConstraints,
    ResizeDirection, ResizeProposal, clamp_resize, fit_to_width,
};
pub use input::{Dispatch, EventQueue, InputEvent, Modifiers, PointerTarget};
pub use selection::SelectionSet;
pub use store::{ElementStore, StoreError, StoreResult};
pub use upload::{DecodedImage, ImageFormat, UploadError};
