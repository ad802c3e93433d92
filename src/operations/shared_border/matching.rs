use std::collections::HashMap;

use crate::geometry::{LatLng, Segment};

use super::{MatchRule, MatchStrategy};

/// Selects the segments of `a` that run coincident with some segment of `b`.
///
/// The result keeps `a`'s segment order and orientation. Both strategies
/// return exactly the same list; `Grid` only avoids the full pairwise scan.
/// A tolerance the grid cannot be sized from (NaN, infinite, negative, or
/// zero over a degenerate `b`) falls back to the full scan.
#[must_use]
pub fn match_segments(
    a: &[Segment],
    b: &[Segment],
    tol: f64,
    rule: MatchRule,
    strategy: MatchStrategy,
) -> Vec<Segment> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let grid = match strategy {
        MatchStrategy::BruteForce => None,
        MatchStrategy::Grid => SegmentGrid::build(b, tol),
    };
    let Some(grid) = grid else {
        return brute_force(a, b, tol, rule);
    };
    a.iter()
        .filter(|seg| {
            rule.accepts(seg, |p| grid.candidates(p).any(|i| rule.near(p, &b[i], tol)))
        })
        .copied()
        .collect()
}

fn brute_force(a: &[Segment], b: &[Segment], tol: f64, rule: MatchRule) -> Vec<Segment> {
    a.iter()
        .filter(|seg| match rule {
            MatchRule::AnyEndpoint => b.iter().any(|other| seg.touches(other, tol)),
            MatchRule::BothEndpoints => rule.accepts(seg, |p| b.iter().any(|s| rule.near(p, s, tol))),
        })
        .copied()
        .collect()
}

impl MatchRule {
    fn accepts(self, seg: &Segment, near: impl Fn(LatLng) -> bool) -> bool {
        match self {
            MatchRule::AnyEndpoint => near(seg.start) || near(seg.end),
            MatchRule::BothEndpoints => near(seg.start) && near(seg.end),
        }
    }

    /// Whether `p` counts as lying on `other` under this rule.
    fn near(self, p: LatLng, other: &Segment, tol: f64) -> bool {
        match self {
            MatchRule::AnyEndpoint => p.approx_eq(other.start, tol) || p.approx_eq(other.end, tol),
            MatchRule::BothEndpoints => other.distance_to(p) <= tol,
        }
    }
}

type Cell = (i64, i64);

/// Uniform grid over one segment set, each segment bucketed by its start.
///
/// The cell size is at least the tolerance and at least the largest
/// per-axis extent of any segment, so every point within `tol` of a segment
/// lies at most two cells from the segment's start cell.
struct SegmentGrid {
    cell: f64,
    buckets: HashMap<Cell, Vec<usize>>,
}

impl SegmentGrid {
    fn build(segments: &[Segment], tol: f64) -> Option<Self> {
        if !(tol.is_finite() && tol >= 0.0) {
            return None;
        }
        let extent = segments
            .iter()
            .map(|s| (s.end.lat - s.start.lat).abs().max((s.end.lng - s.start.lng).abs()))
            .fold(0.0, f64::max);
        let cell = tol.max(extent);
        if !(cell.is_finite() && cell > 0.0) {
            return None;
        }

        let mut buckets: HashMap<Cell, Vec<usize>> = HashMap::new();
        for (i, seg) in segments.iter().enumerate() {
            buckets.entry(cell_of(seg.start, cell)).or_default().push(i);
        }
        Some(Self { cell, buckets })
    }

    /// Indices of the segments that may lie within tolerance of `p`.
    fn candidates(&self, p: LatLng) -> impl Iterator<Item = usize> + '_ {
        let (ci, cj) = cell_of(p, self.cell);
        (-2..=2)
            .flat_map(move |di| (-2..=2).map(move |dj| (ci.saturating_add(di), cj.saturating_add(dj))))
            .filter_map(move |c| self.buckets.get(&c))
            .flatten()
            .copied()
    }
}

/// Cell index of `p`. Quotients beyond `i64` saturate at the bounds.
#[allow(clippy::cast_possible_truncation)]
fn cell_of(p: LatLng, cell: f64) -> Cell {
    ((p.lat / cell).floor() as i64, (p.lng / cell).floor() as i64)
}
