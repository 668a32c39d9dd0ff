//! Reading order and column margin detection.
//!
//! Lines arrive as an unordered geometric soup. Reading order inside a column
//! is top-to-bottom, and left-to-right among lines sharing a physical row.

use std::cmp::Ordering;

use indexmap::IndexMap;

use crate::utils::{HasBBox, bucket};

/// Compares two lines for reading order.
///
/// Lines whose `y0` differ by less than `epsilon` are on the same row and
/// ordered by ascending `x0`; otherwise the higher line comes first.
pub fn reading_cmp<T: HasBBox>(a: &T, b: &T, epsilon: f64) -> Ordering {
    if (a.y0() - b.y0()).abs() < epsilon {
        a.x0().total_cmp(&b.x0())
    } else {
        b.y0().total_cmp(&a.y0())
    }
}

/// Sorts lines into reading order.
///
/// The pairwise rule in [`reading_cmp`] is not transitive (rows can chain
/// through lines a little under `epsilon` apart), so lines are first sorted
/// top-to-bottom and then cut into rows anchored at each row's topmost line.
/// Each row is ordered left-to-right. The result is a total order that agrees
/// with `reading_cmp` for every pair inside one row and across rows.
pub fn sort_reading_order<T: HasBBox>(lines: &mut Vec<T>, epsilon: f64) {
    lines.sort_by(|a, b| b.y0().total_cmp(&a.y0()));

    let mut ordered = Vec::with_capacity(lines.len());
    let mut row: Vec<T> = Vec::new();
    let mut anchor = f64::NAN;
    for line in lines.drain(..) {
        if row.is_empty() || (anchor - line.y0()).abs() >= epsilon {
            flush_row(&mut row, &mut ordered);
            anchor = line.y0();
        }
        row.push(line);
    }
    flush_row(&mut row, &mut ordered);
    *lines = ordered;
}

fn flush_row<T: HasBBox>(row: &mut Vec<T>, out: &mut Vec<T>) {
    row.sort_by(|a, b| a.x0().total_cmp(&b.x0()));
    out.append(row);
}

/// Left and right text margins of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
}

/// Detects the column's text margins.
///
/// Every line's `x0` and `x1` is rounded to a bucket of width `bucket_width`;
/// the most frequent bucket on each side wins (ties go to the bucket seen
/// first). Returns None for an empty column.
pub fn detect_margins<T: HasBBox>(lines: &[T], bucket_width: f64) -> Option<Margins> {
    let left = most_common(lines.iter().map(|l| bucket(l.x0(), bucket_width)))?;
    let right = most_common(lines.iter().map(|l| bucket(l.x1(), bucket_width)))?;
    Some(Margins {
        left: left as f64 * bucket_width,
        right: right as f64 * bucket_width,
    })
}

fn most_common<I: Iterator<Item = i64>>(values: I) -> Option<i64> {
    let mut counts: IndexMap<i64, usize> = IndexMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let mut best: Option<(i64, usize)> = None;
    for (v, n) in counts {
        if best.is_none_or(|(_, m)| n > m) {
            best = Some((v, n));
        }
    }
    best.map(|(v, _)| v)
}
