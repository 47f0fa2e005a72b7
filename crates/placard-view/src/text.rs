//! Text element view over the rich-text collaborators.

use placard_core::{CanvasController, ElementId, ElementPatch};

/// External rich-text editor collaborator. The core treats its output as an
/// opaque HTML string.
pub trait RichTextWidget {
    /// Present the editor seeded with `value`. Returns the changed HTML when
    /// the user edited the content during this pass, `None` otherwise.
    fn edit(&mut self, value: &str) -> Option<String>;
}

/// External read-only HTML renderer collaborator. Stored content is passed
/// through unchanged; no sanitization happens on this side (known gap).
pub trait HtmlRenderer {
    fn render(&mut self, html: &str);
}

/// Text element view: read-only renders via [`HtmlRenderer`], editable routes
/// through [`RichTextWidget`] and commits changes as content updates.
#[derive(Debug, Clone, Copy)]
pub struct TextView<'a> {
    pub content: &'a str,
    pub read_only: bool,
}

impl TextView<'_> {
    pub fn show(
        &self,
        controller: &mut CanvasController,
        id: &ElementId,
        widget: &mut dyn RichTextWidget,
        renderer: &mut dyn HtmlRenderer,
    ) {
        if self.read_only {
            renderer.render(self.content);
        } else if let Some(changed) = widget.edit(self.content) {
            controller.update_element(ElementPatch::new(id.clone()).with_content(changed));
        }
    }
}
