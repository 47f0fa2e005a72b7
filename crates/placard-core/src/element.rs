//! Element definitions for the canvas.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a placed element. Immutable after creation; determines the
/// specialized view and the resize constraints that apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// Rich-text block storing HTML markup.
    Text,
    /// Raster image storing a base64 data URI.
    Image,
}

impl ElementKind {
    /// The id prefix for this kind (`TEXT` / `IMAGE`).
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Text => "TEXT",
            ElementKind::Image => "IMAGE",
        }
    }

    /// Default dimension for a freshly created element of this kind.
    pub fn default_dimension(&self) -> Dimension {
        match self {
            ElementKind::Text => Dimension::new("150", "50"),
            ElementKind::Image => Dimension::new("150", "150"),
        }
    }

    /// Default content for a freshly created element of this kind.
    /// Images start empty and show the upload placeholder.
    pub fn default_content(&self) -> &'static str {
        match self {
            ElementKind::Text => "Sample Text",
            ElementKind::Image => "",
        }
    }
}

/// Unique identifier for elements, in the `{KIND}__{millis}__{sequence}`
/// shape. Generated once at creation and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Wrap a raw id string (templates, tests).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Compose an id from its three fields.
    pub(crate) fn compose(kind: ElementKind, millis: u128, sequence: u64) -> Self {
        Self(format!("{}__{}__{}", kind.name(), millis, sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The kind prefix of the id (`TEXT` / `IMAGE`), if well-formed.
    pub fn kind_prefix(&self) -> Option<&str> {
        self.0.split("__").next().filter(|p| !p.is_empty())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Offsets in pixels from the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

impl Position {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// As a kurbo point (`x` = left, `y` = top).
    pub fn to_point(self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn from_point(point: Point) -> Self {
        Self {
            top: point.y,
            left: point.x,
        }
    }
}

/// Parse a dimension value that is either a bare number (`"150"`) or a
/// px-suffixed number (`"150px"`). Unparseable input yields `0.0`; a trailing
/// non-numeric suffix is stripped rather than rejected.
pub fn parse_px(value: &str) -> f64 {
    let trimmed = value.trim();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && c == '-')))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().unwrap_or(0.0)
}

/// Stored width/height of an element.
///
/// Values are strings carrying either bare or px-suffixed numbers; both forms
/// stay legal and are never normalized. Resize commits write the suffixed
/// form, programmatic construction writes the bare form, as in the editor UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: String,
    pub height: String,
}

impl Dimension {
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Bare-number form (`"150"`).
    pub fn from_px(width: f64, height: f64) -> Self {
        Self::new(format!("{width}"), format!("{height}"))
    }

    /// Px-suffixed form (`"150px"`), as reported by the resize widget.
    pub fn suffixed(width: f64, height: f64) -> Self {
        Self::new(format!("{width}px"), format!("{height}px"))
    }

    pub fn width_px(&self) -> f64 {
        parse_px(&self.width)
    }

    pub fn height_px(&self) -> f64 {
        parse_px(&self.height)
    }

    pub fn to_size(&self) -> Size {
        Size::new(self.width_px(), self.height_px())
    }
}

/// One placed object on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique, immutable id.
    pub id: ElementId,
    /// Immutable kind tag.
    pub kind: ElementKind,
    /// Top-left offset from the canvas origin.
    pub position: Position,
    /// Stored width/height (string-carried, see [`Dimension`]).
    pub dimension: Dimension,
    /// HTML markup for text, base64 data URI for images.
    pub content: String,
}

impl Element {
    /// Where freshly created elements land on the canvas.
    pub const DEFAULT_ORIGIN: Position = Position {
        top: 100.0,
        left: 100.0,
    };

    /// Create an element with the per-kind defaults.
    pub fn new(id: ElementId, kind: ElementKind) -> Self {
        Self {
            id,
            kind,
            position: Self::DEFAULT_ORIGIN,
            dimension: kind.default_dimension(),
            content: kind.default_content().to_string(),
        }
    }

    /// Bounding box in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        let origin = self.position.to_point();
        let size = self.dimension.to_size();
        Rect::from_origin_size(origin, size)
    }

    /// Whether the element carries content yet. Images without content show
    /// the upload placeholder.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}

/// Partial update record for [`Element`]. Each present field replaces the
/// stored field wholesale; there is no field-by-field deep merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementPatch {
    pub id: ElementId,
    pub position: Option<Position>,
    pub dimension: Option<Dimension>,
    pub content: Option<String>,
}

impl ElementPatch {
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            position: None,
            dimension: None,
            content: None,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = Some(dimension);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Shallow-merge this patch onto an element.
    pub(crate) fn apply_to(&self, element: &mut Element) {
        if let Some(position) = self.position {
            element.position = position;
        }
        if let Some(dimension) = &self.dimension {
            element.dimension = dimension.clone();
        }
        if let Some(content) = &self.content {
            element.content = content.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px_forms() {
        assert!((parse_px("150") - 150.0).abs() < f64::EPSILON);
        assert!((parse_px("150px") - 150.0).abs() < f64::EPSILON);
        assert!((parse_px("12.5px") - 12.5).abs() < f64::EPSILON);
        assert!((parse_px(" 114px ") - 114.0).abs() < f64::EPSILON);
        assert!((parse_px("-21.9") - -21.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_px_garbage_defaults_to_zero() {
        assert!(parse_px("px").abs() < f64::EPSILON);
        assert!(parse_px("").abs() < f64::EPSILON);
        assert!(parse_px("auto").abs() < f64::EPSILON);
    }

    #[test]
    fn test_kind_defaults() {
        let text = Element::new(ElementId::from("TEXT__1__0"), ElementKind::Text);
        assert_eq!(text.content, "Sample Text");
        assert!((text.dimension.width_px() - 150.0).abs() < f64::EPSILON);
        assert!((text.dimension.height_px() - 50.0).abs() < f64::EPSILON);
        assert!((text.position.top - 100.0).abs() < f64::EPSILON);

        let image = Element::new(ElementId::from("IMAGE__1__1"), ElementKind::Image);
        assert_eq!(image.content, "");
        assert!(!image.has_content());
        assert!((image.dimension.height_px() - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_id_kind_prefix() {
        let id = ElementId::compose(ElementKind::Image, 1616154982257, 0);
        assert_eq!(id.as_str(), "IMAGE__1616154982257__0");
        assert_eq!(id.kind_prefix(), Some("IMAGE"));
    }

    #[test]
    fn test_patch_replaces_dimension_wholesale() {
        let mut element = Element::new(ElementId::from("TEXT__1__0"), ElementKind::Text);
        element.dimension = Dimension::new("300px", "80px");

        let patch = ElementPatch::new(element.id.clone())
            .with_dimension(Dimension::new("200", "50"));
        patch.apply_to(&mut element);

        assert_eq!(element.dimension.width, "200");
        // The old "80px" height must not leak through a deep merge.
        assert_eq!(element.dimension.height, "50");
        assert_eq!(element.content, "Sample Text");
        assert!((element.position.left - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_from_mixed_forms() {
        let mut element = Element::new(ElementId::from("TEXT__1__0"), ElementKind::Text);
        element.position = Position::new(10.0, 20.0);
        element.dimension = Dimension::new("114px", "40");
        let bounds = element.bounds();
        assert!((bounds.x0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.width() - 114.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 40.0).abs() < f64::EPSILON);
    }
}
