//! Shared toolbar model: add-element buttons plus the formatting control
//! surface that appears while an element is being edited.

use placard_core::{CanvasController, ElementId, ElementKind};

/// Font sizes offered by the formatting toolbar.
pub const SIZE_LIST: [&str; 10] = [
    "8px", "9px", "10px", "11px", "12px", "14px", "16px", "18px", "20px", "72px",
];

/// Font families offered by the formatting toolbar.
pub const FONT_LIST: [&str; 19] = [
    "Arial",
    "Arial Black",
    "Arial Unicode MS",
    "Calibri",
    "Cambria",
    "Cambria Math",
    "Candara",
    "Segoe UI, wf_segoe-ui_normal, helvetica, arial, sans-serif",
    "Comic Sans MS",
    "Consolas",
    "Constantia",
    "Corbel",
    "Courier New",
    "Georgia",
    "Lucida Sans Unicode",
    "Tahoma",
    "Times New Roman",
    "Trebuchet MS",
    "Verdana",
];

/// Formatting controls the toolbar exposes to the rich-text editor. They act
/// on the editor collaborator directly; the core only sees the resulting
/// HTML through content updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatControl {
    Font,
    Size,
    Bold,
    Italic,
    Underline,
    Align,
    Color,
    Background,
}

impl FormatControl {
    /// All controls, in display order.
    pub fn all() -> &'static [FormatControl] {
        &[
            FormatControl::Font,
            FormatControl::Size,
            FormatControl::Bold,
            FormatControl::Italic,
            FormatControl::Underline,
            FormatControl::Align,
            FormatControl::Color,
            FormatControl::Background,
        ]
    }
}

/// Actions the persistent toolbar buttons trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    AddText,
    AddImage,
}

/// Render-time snapshot of the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarProps {
    /// The formatting section is shown only while an element is editable.
    pub edit_enabled: bool,
}

/// Build the toolbar props from canvas state.
pub fn toolbar_props(controller: &CanvasController) -> ToolbarProps {
    ToolbarProps {
        edit_enabled: controller.toolbar_visible(),
    }
}

/// Apply a toolbar button action. Returns the id of the created element.
pub fn apply(controller: &mut CanvasController, action: ToolbarAction) -> ElementId {
    match action {
        ToolbarAction::AddText => controller.add_element(ElementKind::Text),
        ToolbarAction::AddImage => controller.add_element(ElementKind::Image),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting_section_follows_editing() {
        let mut controller = CanvasController::new();
        assert!(!toolbar_props(&controller).edit_enabled);

        let id = apply(&mut controller, ToolbarAction::AddText);
        controller.activate(&id);
        assert!(toolbar_props(&controller).edit_enabled);

        controller.deselect(&id);
        assert!(!toolbar_props(&controller).edit_enabled);
    }

    #[test]
    fn test_add_buttons_create_and_select() {
        let mut controller = CanvasController::new();
        let text = apply(&mut controller, ToolbarAction::AddText);
        let image = apply(&mut controller, ToolbarAction::AddImage);

        assert_eq!(controller.store().len(), 2);
        assert_eq!(text.kind_prefix(), Some("TEXT"));
        assert_eq!(image.kind_prefix(), Some("IMAGE"));
        assert!(controller.selection().is_sole(&image));
    }

    #[test]
    fn test_control_surface_is_complete() {
        assert_eq!(FormatControl::all().len(), 8);
        assert_eq!(SIZE_LIST.len(), 10);
        assert_eq!(FONT_LIST.len(), 19);
    }
}
