//! Graphical elements: Segment (straight lines and curves) and Figure.

use serde::Deserialize;

use crate::utils::{HasBBox, Point, Rect, get_bound};

use super::component::Component;

/// Kind of path primitive a segment was drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// A single straight line.
    Line,
    /// A generic Bezier curve or polyline.
    Curve,
}

/// A stroked path primitive. Horizontal ones are table borders and
/// footnote dividers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Segment {
    #[serde(rename = "bbox")]
    component: Component,
    pub kind: SegmentKind,
}

impl Segment {
    pub fn new(kind: SegmentKind, bbox: Rect) -> Self {
        Self {
            component: Component::new(bbox),
            kind,
        }
    }

    /// A straight line between two points.
    pub fn line(p0: Point, p1: Point) -> Self {
        Self::new(SegmentKind::Line, get_bound([p0, p1]))
    }

    /// A curve through the given points.
    pub fn curve(pts: &[Point]) -> Self {
        Self::new(SegmentKind::Curve, get_bound(pts.iter().copied()))
    }

    pub const fn is_line(&self) -> bool {
        matches!(self.kind, SegmentKind::Line)
    }

    /// True when both ends lie within `tolerance` of the same height.
    pub fn is_horizontal_rule(&self, tolerance: f64) -> bool {
        (self.y1() - self.y0()).abs() < tolerance
    }
}

impl_has_bbox_delegate!(Segment, component);

/// An embedded figure or image region.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Figure {
    #[serde(rename = "bbox")]
    component: Component,
    #[serde(default)]
    pub name: String,
}

impl Figure {
    pub fn new(name: &str, bbox: Rect) -> Self {
        Self {
            component: Component::new(bbox),
            name: name.to_string(),
        }
    }
}

impl_has_bbox_delegate!(Figure, component);
