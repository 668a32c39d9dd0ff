//! Layout reconstruction parameters.
//!
//! Contains PolicyParams, the noise-filtering thresholds every layout policy
//! carries. They were tuned against real publisher templates; a policy that
//! needs different values overrides them instead of touching shared logic.

/// Thresholds used by the extraction driver and the policies.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyParams {
    /// Sections whose own paragraphs total fewer characters than this are
    /// emptied after extraction. Spurious headings detected mid-body only
    /// collect a short orphan fragment before the real next heading.
    pub min_section_chars: usize,

    /// Two lines whose bottoms differ by less than this are on the same
    /// physical row and ordered left to right.
    pub same_line_epsilon: f64,

    /// Width of the buckets `x0`/`x1` are rounded to when detecting the
    /// column's text margins.
    pub margin_bucket: f64,

    /// A line ending within this distance of the detected right margin is
    /// considered to run to the margin, so it may continue on the next line.
    pub margin_proximity: f64,

    /// A previous line below this `y0` sat at the bottom of a column, so the
    /// next column or page may continue it.
    pub page_bottom_continuation: f64,

    /// Lowest `y0` body text may have when no footnote divider is found.
    pub footnote_floor: f64,

    /// How far above a table's top rule a caption may sit and still extend
    /// the table's exclusion span.
    pub caption_reach: f64,
}

impl Default for PolicyParams {
    fn default() -> Self {
        Self {
            min_section_chars: 50,
            same_line_epsilon: 2.0,
            margin_bucket: 10.0,
            margin_proximity: 50.0,
            page_bottom_continuation: 100.0,
            footnote_floor: 60.0,
            caption_reach: 50.0,
        }
    }
}

impl PolicyParams {
    /// Returns a copy with a different section length threshold.
    pub const fn with_min_section_chars(mut self, min_section_chars: usize) -> Self {
        self.min_section_chars = min_section_chars;
        self
    }
}
