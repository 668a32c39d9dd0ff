//! Table and footnote exclusion from horizontal rules.
//!
//! Publishers draw table borders and footnote dividers as thin horizontal
//! rules. Rules sharing the same x-extent belong to one table: everything
//! between the highest and lowest of them is table content. A wide rule with
//! no partner is a footnote divider, and everything below it is dropped.

use std::collections::VecDeque;

use indexmap::IndexMap;
use itertools::Itertools;
use tracing::trace;

use crate::layout::{Page, Segment, TextLine};
use crate::utils::{HasBBox, tenths};

use super::LayoutPolicy;

/// Vertical range whose overlapping lines are excluded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub bottom: f64,
    pub top: f64,
}

impl Span {
    /// Builds a span from two heights in either order.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            bottom: a.min(b),
            top: a.max(b),
        }
    }

    /// True when the line reaches into the span.
    pub fn touches(&self, line: &dyn HasBBox) -> bool {
        !(line.y1() < self.bottom || line.y0() > self.top)
    }
}

/// Rule geometry of one column, ready for filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Exclusions {
    /// Lowest `y0` body text may have.
    pub floor: f64,
    pub spans: Vec<Span>,
}

impl Exclusions {
    pub fn apply<'a>(&self, lines: Vec<&'a TextLine>) -> Vec<&'a TextLine> {
        let before = lines.len();
        let kept: Vec<_> = lines
            .into_iter()
            .filter(|line| line.y0() >= self.floor)
            .filter(|line| !self.spans.iter().any(|span| span.touches(*line)))
            .collect();
        trace!(
            floor = self.floor,
            spans = self.spans.len(),
            dropped = before - kept.len(),
            "applied rule exclusions"
        );
        kept
    }
}

/// Horizontal rules of the page that belong to the column.
fn column_rules<'p, P>(
    policy: &P,
    page: &'p Page,
    column: usize,
    accept: impl Fn(&Segment) -> bool,
) -> Vec<&'p Segment>
where
    P: LayoutPolicy + ?Sized,
{
    page.segments
        .iter()
        .filter(|seg| accept(seg) && policy.rule_in_column(*seg, page.index, column))
        .collect()
}

/// Groups straight, exactly horizontal rules by x-extent.
///
/// A lone rule wider than `footnote_min_width` marks the footnote area; every
/// group with two or more rules spans a table from its lowest to its highest
/// rule.
pub fn rule_groups<P>(policy: &P, page: &Page, column: usize, footnote_min_width: f64) -> Exclusions
where
    P: LayoutPolicy + ?Sized,
{
    let rules = column_rules(policy, page, column, |seg| {
        seg.is_line() && tenths(seg.y0()) == tenths(seg.y1())
    });

    let mut groups: IndexMap<(i64, i64), Vec<&Segment>> = IndexMap::new();
    for rule in rules {
        groups
            .entry((tenths(rule.x0()), tenths(rule.x1())))
            .or_default()
            .push(rule);
    }

    let footnote = groups
        .values()
        .filter(|group| group.len() == 1 && group[0].width() > footnote_min_width)
        .map(|group| group[0].y0())
        .min_by(f64::total_cmp);

    let spans = groups
        .values()
        .filter(|group| group.len() > 1)
        .filter_map(|group| {
            let (low, high) = group.iter().map(|r| r.y0()).minmax().into_option()?;
            Some(Span::new(low, high))
        })
        .collect();

    Exclusions {
        floor: footnote.unwrap_or(policy.params().footnote_floor),
        spans,
    }
}

/// Caption-aware variant for templates that interrupt table borders with a
/// caption row.
///
/// Any thin horizontal line or curve counts as a rule. Rules at the same
/// height are merged to their full x-extent first, then grouped by extent.
/// Lone rules wider than `footnote_min_width` and lower than `footnote_max_y`
/// are footnote dividers. Each table group is then resolved against the
/// captions with [`grow_table_spans`].
pub fn captioned_rule_groups<P>(
    policy: &P,
    page: &Page,
    column: usize,
    captions: &[&TextLine],
    footnote_min_width: f64,
    footnote_max_y: f64,
) -> Exclusions
where
    P: LayoutPolicy + ?Sized,
{
    let rules = column_rules(policy, page, column, |seg| seg.is_horizontal_rule(1.0));

    let mut rows: IndexMap<i64, (i64, i64)> = IndexMap::new();
    for rule in rules {
        let (x0, x1) = (tenths(rule.x0()), tenths(rule.x1()));
        rows.entry(tenths(rule.y0()))
            .and_modify(|extent| *extent = (extent.0.min(x0), extent.1.max(x1)))
            .or_insert((x0, x1));
    }

    let mut groups: IndexMap<(i64, i64), Vec<f64>> = IndexMap::new();
    for (y, extent) in rows {
        groups.entry(extent).or_default().push(y as f64 / 10.0);
    }

    let footnote = groups
        .iter()
        .filter(|((x0, x1), ys)| {
            ys.len() == 1 && (x1 - x0) as f64 / 10.0 > footnote_min_width && ys[0] < footnote_max_y
        })
        .map(|(_, ys)| ys[0])
        .min_by(f64::total_cmp);

    let tables: Vec<Vec<f64>> = groups
        .into_values()
        .filter(|ys| ys.len() > 1)
        .map(|ys| ys.into_iter().sorted_by(|a, b| b.total_cmp(a)).collect())
        .collect();

    Exclusions {
        floor: footnote.unwrap_or(policy.params().footnote_floor),
        spans: grow_table_spans(tables, captions, policy.params().caption_reach),
    }
}

/// Resolves rule groups (each sorted top to bottom) into exclusion spans.
///
/// A caption strictly inside a group splits it: the rules above the caption
/// and those below are queued again as separate tables. A caption sitting
/// within `reach` above a group's top rule belongs to that table, so the
/// span grows up to the caption's top. Otherwise the span runs from the
/// lowest to the highest rule.
pub fn grow_table_spans(tables: Vec<Vec<f64>>, captions: &[&TextLine], reach: f64) -> Vec<Span> {
    let mut queue: VecDeque<Vec<f64>> = tables.into_iter().filter(|t| !t.is_empty()).collect();
    let mut spans = Vec::new();

    while let Some(ys) = queue.pop_front() {
        let top = ys[0];
        let bottom = ys[ys.len() - 1];
        let mut above: Option<&TextLine> = None;
        let mut split = false;

        for caption in captions {
            let cy = caption.y0();
            if bottom < cy && cy < top {
                // ys[0] > cy > ys[last], so the split point is in 1..len
                if let Some(i) = ys.iter().position(|&y| y < cy) {
                    queue.push_back(ys[..i].to_vec());
                    queue.push_back(ys[i..].to_vec());
                }
                split = true;
                break;
            } else if top < cy && cy < top + reach {
                above = Some(*caption);
            }
        }

        if !split {
            spans.push(match above {
                Some(caption) => Span::new(bottom, caption.y1()),
                None => Span::new(bottom, top),
            });
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caption(y0: f64) -> TextLine {
        TextLine::from_text((50.0, y0, 200.0, y0 + 8.0), "Table 2", "times-bold", 8.0)
    }

    #[test]
    fn span_touch_is_inclusive() {
        let span = Span::new(200.0, 100.0);
        assert_eq!(span.bottom, 100.0);
        assert!(span.touches(&(0.0, 150.0, 10.0, 160.0)));
        assert!(span.touches(&(0.0, 90.0, 10.0, 100.0)));
        assert!(!span.touches(&(0.0, 201.0, 10.0, 210.0)));
        assert!(!span.touches(&(0.0, 80.0, 10.0, 99.0)));
    }

    #[test]
    fn plain_table_spans_its_rules() {
        let spans = grow_table_spans(vec![vec![300.0, 280.0, 200.0]], &[], 50.0);
        assert_eq!(spans, vec![Span::new(200.0, 300.0)]);
    }

    #[test]
    fn caption_above_extends_span() {
        let cap = caption(320.0);
        let spans = grow_table_spans(vec![vec![300.0, 200.0]], &[&cap], 50.0);
        assert_eq!(spans, vec![Span::new(200.0, 328.0)]);
    }

    #[test]
    fn caption_inside_splits_group() {
        // Two tables with identical width; the second one's caption sits
        // between them.
        let cap = caption(420.0);
        let rules = vec![600.0, 580.0, 500.0, 400.0, 380.0, 300.0];
        let spans = grow_table_spans(vec![rules], &[&cap], 50.0);
        assert_eq!(spans, vec![Span::new(500.0, 600.0), Span::new(300.0, 428.0)]);
    }
}
