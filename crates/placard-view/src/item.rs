//! Per-element interaction adapter over the external drag/resize widget.
//!
//! The widget gets a props snapshot built from canvas state and emits
//! geometry/focus callbacks; this module funnels those into the controller's
//! action surface.

use kurbo::{Point, Size};
use placard_core::{
    BlurTarget, CanvasController, Element, ElementId, ElementKind, ElementState, ResizeDirection,
    ResizeProposal,
};

use crate::image::ImageView;
use crate::text::TextView;

/// Props handed to the drag/resize widget for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionProps {
    /// Draw position; mid-drag this is the gesture preview, not the store.
    pub position: Point,
    /// Display size parsed from either dimension form.
    pub size: Size,
    pub min_width: f64,
    pub min_height: f64,
    /// Handles the widget may expose for this element kind.
    pub enabled_directions: Vec<ResizeDirection>,
    pub lock_aspect: bool,
    /// Dragging is off while the element is being edited.
    pub disable_dragging: bool,
    /// Handles are visible only for the sole selected element.
    pub show_handles: bool,
    /// Highlight border for selected, hovered or dragged elements.
    pub outlined: bool,
}

/// Build the widget props for `id` from the current canvas state.
pub fn interaction_props(
    controller: &CanvasController,
    id: &ElementId,
) -> Option<InteractionProps> {
    let element = controller.store().get(id)?;
    let constraints = controller.resize_constraints(id)?;
    let state = controller.element_state(id);
    let position = controller.drag_preview(id).unwrap_or(element.position);
    Some(InteractionProps {
        position: position.to_point(),
        size: element.dimension.to_size(),
        min_width: constraints.min_width,
        min_height: constraints.min_height,
        enabled_directions: constraints.enabled,
        lock_aspect: constraints.lock_aspect,
        disable_dragging: !controller.is_read_only(id),
        show_handles: controller.show_handles(id),
        outlined: state.is_selected()
            || state == ElementState::Hovered
            || controller.is_dragging(id),
    })
}

/// Callbacks the drag/resize widget emits for an element.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionEvent {
    PointerEnter,
    PointerLeave,
    /// The element's view received focus.
    Focus,
    /// Focus left the element's view towards `target`.
    Blur(BlurTarget),
    /// The distinguished activate gesture.
    DoubleClick,
    DragStart,
    /// Final coordinates at drag end.
    DragStop { x: f64, y: f64 },
    /// One resize step with the widget's proposed geometry.
    Resize {
        direction: ResizeDirection,
        width: f64,
        height: f64,
        x: f64,
        y: f64,
    },
}

/// Route a widget callback into the controller.
pub fn handle_interaction(
    controller: &mut CanvasController,
    id: &ElementId,
    event: InteractionEvent,
) {
    match event {
        InteractionEvent::PointerEnter => controller.begin_hover(id.clone()),
        InteractionEvent::PointerLeave => controller.end_hover(id),
        InteractionEvent::Focus => controller.select(id.clone()),
        InteractionEvent::Blur(target) => controller.handle_blur(id, target),
        InteractionEvent::DoubleClick => controller.activate(id),
        InteractionEvent::DragStart => {
            if !controller.begin_drag(id) {
                log::debug!("drag start on {id} ignored");
            }
        }
        InteractionEvent::DragStop { x, y } => controller.finish_drag(Point::new(x, y)),
        InteractionEvent::Resize {
            direction,
            width,
            height,
            x,
            y,
        } => controller.resize_step(
            id,
            direction,
            ResizeProposal {
                width,
                height,
                left: x,
                top: y,
            },
        ),
    }
}

/// The specialized content view for an element.
#[derive(Debug)]
pub enum ElementView<'a> {
    Text(TextView<'a>),
    Image(ImageView<'a>),
}

/// Pick the content view for an element. The dispatch over the kind tag is
/// exhaustive; adding a kind fails compilation here rather than at runtime.
pub fn element_view(element: &Element, read_only: bool) -> ElementView<'_> {
    match element.kind {
        ElementKind::Text => ElementView::Text(TextView {
            content: &element.content,
            read_only,
        }),
        ElementKind::Image => ElementView::Image(ImageView {
            content: &element.content,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placard_core::ElementPatch;

    #[test]
    fn test_props_reflect_kind_constraints() {
        let mut controller = CanvasController::new();
        let image = controller.add_element(ElementKind::Image);
        let props = interaction_props(&controller, &image).unwrap();
        assert!(props.lock_aspect);
        assert_eq!(props.enabled_directions.len(), 8);
        assert!((props.min_width - 100.0).abs() < f64::EPSILON);
        assert!(props.show_handles);

        let text = controller.add_element(ElementKind::Text);
        let props = interaction_props(&controller, &text).unwrap();
        assert!(!props.lock_aspect);
        assert!(!props.enabled_directions.contains(&ResizeDirection::Top));
    }

    #[test]
    fn test_props_parse_px_suffixed_dimensions() {
        let mut controller = CanvasController::new();
        let id = controller.add_element(ElementKind::Text);
        controller.update_element(
            ElementPatch::new(id.clone())
                .with_dimension(placard_core::Dimension::new("114px", "40")),
        );
        let props = interaction_props(&controller, &id).unwrap();
        assert!((props.size.width - 114.0).abs() < f64::EPSILON);
        assert!((props.size.height - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dragging_disabled_while_editing() {
        let mut controller = CanvasController::new();
        let id = controller.add_element(ElementKind::Text);
        assert!(!interaction_props(&controller, &id).unwrap().disable_dragging);

        controller.activate(&id);
        assert!(interaction_props(&controller, &id).unwrap().disable_dragging);
    }

    #[test]
    fn test_focus_then_blur_round_trip() {
        let mut controller = CanvasController::new();
        let id = controller.add_element(ElementKind::Text);
        controller.clear_selection();

        handle_interaction(&mut controller, &id, InteractionEvent::Focus);
        assert!(controller.selection().contains(&id));

        handle_interaction(
            &mut controller,
            &id,
            InteractionEvent::Blur(BlurTarget::Outside),
        );
        assert!(!controller.selection().contains(&id));
    }

    #[test]
    fn test_double_click_enters_editing() {
        let mut controller = CanvasController::new();
        let id = controller.add_element(ElementKind::Text);
        handle_interaction(&mut controller, &id, InteractionEvent::DoubleClick);
        assert!(!controller.is_read_only(&id));
        assert!(controller.toolbar_visible());
    }

    #[test]
    fn test_drag_stop_commits_position() {
        let mut controller = CanvasController::new();
        let id = controller.add_element(ElementKind::Text);
        handle_interaction(&mut controller, &id, InteractionEvent::DragStart);
        handle_interaction(
            &mut controller,
            &id,
            InteractionEvent::DragStop { x: 12.0, y: 34.0 },
        );
        let element = controller.store().get(&id).unwrap();
        assert!((element.position.left - 12.0).abs() < f64::EPSILON);
        assert!((element.position.top - 34.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_event_funnels_into_update() {
        let mut controller = CanvasController::new();
        let id = controller.add_element(ElementKind::Text);
        handle_interaction(
            &mut controller,
            &id,
            InteractionEvent::Resize {
                direction: ResizeDirection::BottomRight,
                width: 220.0,
                height: 90.0,
                x: 100.0,
                y: 100.0,
            },
        );
        let element = controller.store().get(&id).unwrap();
        assert_eq!(element.dimension.width, "220px");
        assert_eq!(element.dimension.height, "90px");
    }

    #[test]
    fn test_element_view_dispatch() {
        let mut controller = CanvasController::new();
        let text = controller.add_element(ElementKind::Text);
        let image = controller.add_element(ElementKind::Image);

        let element = controller.store().get(&text).unwrap();
        assert!(matches!(element_view(element, true), ElementView::Text(_)));

        let element = controller.store().get(&image).unwrap();
        assert!(matches!(element_view(element, true), ElementView::Image(_)));
    }
}
