//! Base component with bounding box.

use serde::Deserialize;

use crate::utils::{HasBBox, Rect};

/// Base component with a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "Rect")]
pub struct Component {
    pub(crate) x0: f64,
    pub(crate) y0: f64,
    pub(crate) x1: f64,
    pub(crate) y1: f64,
}

impl From<Rect> for Component {
    fn from(bbox: Rect) -> Self {
        Self::new(bbox)
    }
}

impl Component {
    pub const fn new(bbox: Rect) -> Self {
        let (x0, y0, x1, y1) = bbox;
        Self { x0, y0, x1, y1 }
    }

    pub const fn bbox(&self) -> Rect {
        (self.x0, self.y0, self.x1, self.y1)
    }
}

impl HasBBox for Component {
    fn x0(&self) -> f64 {
        self.x0
    }
    fn y0(&self) -> f64 {
        self.y0
    }
    fn x1(&self) -> f64 {
        self.x1
    }
    fn y1(&self) -> f64 {
        self.y1
    }
}
