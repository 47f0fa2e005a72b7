//! Placard view layer.
//!
//! Thin wrappers that sit between the canvas core and the external widget
//! collaborators: the drag/resize interaction widget, the rich-text editor,
//! the file picker and the read-only HTML renderer. State flows down into
//! widget props; widget callbacks flow up into controller actions.

pub mod image;
pub mod item;
pub mod template;
pub mod text;
pub mod toolbar;

pub use image::{ACCEPTED_EXTENSIONS, ImagePicker, ImageView};
pub use item::{
    ElementView, InteractionEvent, InteractionProps, element_view, handle_interaction,
    interaction_props,
};
pub use template::sample_invoice;
pub use text::{HtmlRenderer, RichTextWidget, TextView};
pub use toolbar::{FONT_LIST, FormatControl, SIZE_LIST, ToolbarAction, ToolbarProps};
