//! Geometry update protocol for drag and resize gestures.
//!
//! Drag is commit-on-stop: the element translates visually while the pointer
//! moves and a single position patch lands when the gesture ends. Resize is
//! commit-per-step: every step the interaction widget reports becomes a
//! dimension + position patch, clamped here to the minimum floors and the
//! per-kind aspect rules.

use crate::element::{Dimension, ElementId, ElementKind, ElementPatch, Position};
use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Minimum element width, enforced by the interaction layer.
pub const MIN_WIDTH: f64 = 100.0;
/// Minimum element height, enforced by the interaction layer.
pub const MIN_HEIGHT: f64 = 50.0;
/// Display width images are pinned to when an upload lands.
pub const AUTO_FIT_WIDTH: f64 = 150.0;

/// Resize handle directions: four edges and four corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeDirection {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::Top,
        ResizeDirection::Bottom,
        ResizeDirection::Left,
        ResizeDirection::Right,
        ResizeDirection::TopLeft,
        ResizeDirection::TopRight,
        ResizeDirection::BottomLeft,
        ResizeDirection::BottomRight,
    ];

    /// Handles that shift the element's left edge while resizing.
    pub fn moves_left_edge(self) -> bool {
        matches!(
            self,
            ResizeDirection::Left | ResizeDirection::TopLeft | ResizeDirection::BottomLeft
        )
    }

    /// Handles that shift the element's top edge while resizing.
    pub fn moves_top_edge(self) -> bool {
        matches!(
            self,
            ResizeDirection::Top | ResizeDirection::TopLeft | ResizeDirection::TopRight
        )
    }
}

/// Per-kind resize affordances and size floors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeConstraints {
    /// Directions the element may be resized from.
    pub enabled: Vec<ResizeDirection>,
    /// Whether the aspect ratio is held during resize.
    pub lock_aspect: bool,
    pub min_width: f64,
    pub min_height: f64,
}

impl ResizeConstraints {
    /// Affordances for an element kind. Images resize from all eight handles
    /// with the aspect locked; text height follows content, so the pure
    /// top/bottom edges are disabled and the aspect is free.
    pub fn for_kind(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Image => Self {
                enabled: ResizeDirection::ALL.to_vec(),
                lock_aspect: true,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            },
            ElementKind::Text => Self {
                enabled: ResizeDirection::ALL
                    .into_iter()
                    .filter(|d| !matches!(d, ResizeDirection::Top | ResizeDirection::Bottom))
                    .collect(),
                lock_aspect: false,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            },
        }
    }

    pub fn allows(&self, direction: ResizeDirection) -> bool {
        self.enabled.contains(&direction)
    }
}

/// The geometry the interaction widget proposes for one resize step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeProposal {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
}

/// A committed geometry step: the dimension/position pair written to the
/// store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryUpdate {
    pub dimension: Dimension,
    pub position: Position,
}

/// Clamp a proposed resize step to the constraints.
///
/// The floor clamp keeps the aspect ratio intact when it is locked, and the
/// origin is re-anchored when a top or left handle drove the step (the far
/// edge stays put). The emitted dimension uses the px-suffixed form, as the
/// interaction widget reports it.
pub fn clamp_resize(
    direction: ResizeDirection,
    proposal: ResizeProposal,
    constraints: &ResizeConstraints,
) -> GeometryUpdate {
    let (width, height) = if constraints.lock_aspect && proposal.width > 0.0 && proposal.height > 0.0
    {
        let scale = (constraints.min_width / proposal.width)
            .max(constraints.min_height / proposal.height)
            .max(1.0);
        (proposal.width * scale, proposal.height * scale)
    } else {
        (
            proposal.width.max(constraints.min_width),
            proposal.height.max(constraints.min_height),
        )
    };

    let left = if direction.moves_left_edge() {
        proposal.left - (width - proposal.width)
    } else {
        proposal.left
    };
    let top = if direction.moves_top_edge() {
        proposal.top - (height - proposal.height)
    } else {
        proposal.top
    };

    GeometryUpdate {
        dimension: Dimension::suffixed(width, height),
        position: Position::new(top, left),
    }
}

/// Transient state for one drag gesture, scoped to the gesture itself and
/// never stored in the element model. While the drag is live the store is
/// untouched; the single commit happens on [`DragSession::finish`].
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    id: ElementId,
    origin: Position,
    translation: Vec2,
}

impl DragSession {
    pub fn new(id: ElementId, origin: Position) -> Self {
        Self {
            id,
            origin,
            translation: Vec2::ZERO,
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    /// Accumulate pointer movement. Visual only.
    pub fn translate(&mut self, delta: Vec2) {
        self.translation += delta;
    }

    /// Where the element is drawn while the gesture is live.
    pub fn preview(&self) -> Position {
        Position::new(
            self.origin.top + self.translation.y,
            self.origin.left + self.translation.x,
        )
    }

    /// End the gesture at the widget-reported stop point, yielding the single
    /// position patch to commit.
    pub fn finish(self, stop: Point) -> ElementPatch {
        ElementPatch::new(self.id).with_position(Position::from_point(stop))
    }
}

/// One-time auto-fit applied when an image upload lands: the display width is
/// pinned to `target_width` and the height follows the natural aspect ratio,
/// rounded to the nearest pixel.
pub fn fit_to_width(natural_width: u32, natural_height: u32, target_width: f64) -> Size {
    if natural_width == 0 || natural_height == 0 {
        return Size::new(target_width, target_width);
    }
    let ratio = natural_width as f64 / natural_height as f64;
    Size::new(target_width, (target_width / ratio).round())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> ElementId {
        ElementId::from(raw)
    }

    #[test]
    fn test_text_disallows_vertical_edges() {
        let constraints = ResizeConstraints::for_kind(ElementKind::Text);
        assert!(!constraints.allows(ResizeDirection::Top));
        assert!(!constraints.allows(ResizeDirection::Bottom));
        assert!(constraints.allows(ResizeDirection::TopLeft));
        assert!(constraints.allows(ResizeDirection::Right));
        assert!(!constraints.lock_aspect);
    }

    #[test]
    fn test_image_allows_all_directions_with_locked_aspect() {
        let constraints = ResizeConstraints::for_kind(ElementKind::Image);
        for direction in ResizeDirection::ALL {
            assert!(constraints.allows(direction));
        }
        assert!(constraints.lock_aspect);
    }

    #[test]
    fn test_clamp_enforces_floor() {
        let constraints = ResizeConstraints::for_kind(ElementKind::Text);
        let update = clamp_resize(
            ResizeDirection::Right,
            ResizeProposal {
                width: 40.0,
                height: 20.0,
                left: 10.0,
                top: 10.0,
            },
            &constraints,
        );
        assert_eq!(update.dimension.width, "100px");
        assert_eq!(update.dimension.height, "50px");
        assert!((update.position.left - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_reanchors_top_left_handles() {
        let constraints = ResizeConstraints::for_kind(ElementKind::Text);
        // Shrinking from the top-left below the floor: the bottom-right
        // corner (90 + 90, 110 + 40) must stay put.
        let update = clamp_resize(
            ResizeDirection::TopLeft,
            ResizeProposal {
                width: 90.0,
                height: 40.0,
                left: 90.0,
                top: 110.0,
            },
            &constraints,
        );
        assert_eq!(update.dimension.width, "100px");
        assert!((update.position.left - 80.0).abs() < f64::EPSILON);
        assert!((update.position.top - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_preserves_locked_aspect() {
        let constraints = ResizeConstraints::for_kind(ElementKind::Image);
        // A 2:1 proposal below the height floor scales up uniformly.
        let update = clamp_resize(
            ResizeDirection::BottomRight,
            ResizeProposal {
                width: 80.0,
                height: 40.0,
                left: 0.0,
                top: 0.0,
            },
            &constraints,
        );
        let width = crate::element::parse_px(&update.dimension.width);
        let height = crate::element::parse_px(&update.dimension.height);
        assert!((width / height - 2.0).abs() < 1e-9);
        assert!(width >= MIN_WIDTH);
        assert!(height >= MIN_HEIGHT);
    }

    #[test]
    fn test_passthrough_when_within_bounds() {
        let constraints = ResizeConstraints::for_kind(ElementKind::Text);
        let update = clamp_resize(
            ResizeDirection::BottomRight,
            ResizeProposal {
                width: 200.0,
                height: 120.0,
                left: 5.0,
                top: 7.0,
            },
            &constraints,
        );
        assert_eq!(update.dimension.width, "200px");
        assert_eq!(update.dimension.height, "120px");
        assert!((update.position.top - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drag_commits_once_on_finish() {
        let mut session = DragSession::new(id("TEXT__1__0"), Position::new(100.0, 100.0));
        session.translate(Vec2::new(30.0, -10.0));
        let preview = session.preview();
        assert!((preview.left - 130.0).abs() < f64::EPSILON);
        assert!((preview.top - 90.0).abs() < f64::EPSILON);

        let patch = session.finish(Point::new(126.0, 16.0));
        let position = patch.position.unwrap();
        assert!((position.left - 126.0).abs() < f64::EPSILON);
        assert!((position.top - 16.0).abs() < f64::EPSILON);
        assert!(patch.dimension.is_none());
        assert!(patch.content.is_none());
    }

    #[test]
    fn test_fit_to_width_preserves_ratio() {
        let size = fit_to_width(800, 400, AUTO_FIT_WIDTH);
        assert!((size.width - 150.0).abs() < f64::EPSILON);
        assert!((size.height - 75.0).abs() < f64::EPSILON);

        let tall = fit_to_width(400, 800, AUTO_FIT_WIDTH);
        assert!((tall.height - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fit_to_width_rounds() {
        let size = fit_to_width(97, 31, AUTO_FIT_WIDTH);
        assert!((size.height - (150.0_f64 * 31.0 / 97.0).round()).abs() < f64::EPSILON);
    }
}
