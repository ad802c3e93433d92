mod chain;
mod decompose;
mod matching;

pub use chain::connect;
pub use decompose::decompose;
pub use matching::match_segments;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::geometry::{Borderline, Region};
use crate::math::{JOIN_TOLERANCE, MATCH_TOLERANCE};

/// How candidate segment pairs are found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStrategy {
    /// Every segment of one region against every segment of the other.
    BruteForce,
    /// Segments of the second region bucketed in a uniform grid.
    #[default]
    Grid,
}

/// Which endpoint-proximity test makes a segment "coincident".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchRule {
    /// One endpoint near any endpoint of the other region is enough. Also
    /// keeps the edges that leave the border at each end of a run.
    AnyEndpoint,
    /// Both endpoints must lie within tolerance of the other region's
    /// boundary (any of its segments, not only its vertices), so a border
    /// digitized with more vertices on one side still matches.
    #[default]
    BothEndpoints,
}

/// How an ambiguous chain extension (e.g. at a tripoint) is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChainTieBreak {
    /// First candidate in segment order wins.
    #[default]
    FirstFound,
    /// Candidate with the smallest joint gap wins.
    Nearest,
}

/// Parameters for shared-border extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtractParams {
    /// Endpoint matching distance between the two regions, in degrees.
    pub tolerance: f64,
    /// Endpoint joining distance when merging matched segments into chains.
    pub join_tolerance: f64,
    pub strategy: MatchStrategy,
    pub rule: MatchRule,
    pub tie_break: ChainTieBreak,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            tolerance: MATCH_TOLERANCE,
            join_tolerance: JOIN_TOLERANCE,
            strategy: MatchStrategy::default(),
            rule: MatchRule::default(),
            tie_break: ChainTieBreak::default(),
        }
    }
}

impl ExtractParams {
    /// Creates validated parameters with default strategy, rule and tie-break.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonPositive` if either tolerance is not a
    /// finite positive number.
    pub fn new(tolerance: f64, join_tolerance: f64) -> Result<Self> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(GeometryError::NonPositive("tolerance").into());
        }
        if !(join_tolerance.is_finite() && join_tolerance > 0.0) {
            return Err(GeometryError::NonPositive("join_tolerance").into());
        }
        Ok(Self {
            tolerance,
            join_tolerance,
            ..Self::default()
        })
    }

    /// Returns a copy using the given matching strategy.
    #[must_use]
    pub fn with_strategy(self, strategy: MatchStrategy) -> Self {
        Self { strategy, ..self }
    }

    /// Returns a copy using the given match rule.
    #[must_use]
    pub fn with_rule(self, rule: MatchRule) -> Self {
        Self { rule, ..self }
    }

    /// Returns a copy using the given chain tie-break.
    #[must_use]
    pub fn with_tie_break(self, tie_break: ChainTieBreak) -> Self {
        Self { tie_break, ..self }
    }
}

/// Finds the borderlines along which two regions run coincident.
///
/// Runs three independent phases:
/// 1. decompose both regions into ring segments,
/// 2. match region A's segments against region B's by endpoint proximity,
/// 3. connect the matched segments into maximal ordered chains.
///
/// Points come out in (lat, lng) order, following region A's vertices. An
/// empty result means the regions share no border; it is not an error.
#[derive(Debug)]
pub struct SharedBorders<'a> {
    region_a: &'a Region,
    region_b: &'a Region,
    params: ExtractParams,
}

impl<'a> SharedBorders<'a> {
    /// Creates a new shared-border extraction.
    #[must_use]
    pub fn new(region_a: &'a Region, region_b: &'a Region, params: ExtractParams) -> Self {
        Self {
            region_a,
            region_b,
            params,
        }
    }

    /// Executes the extraction.
    #[must_use]
    pub fn execute(&self) -> Vec<Borderline> {
        if self.region_a.is_empty() || self.region_b.is_empty() {
            return Vec::new();
        }

        let segments_a = decompose(self.region_a);
        let segments_b = decompose(self.region_b);

        let matched = match_segments(
            &segments_a,
            &segments_b,
            self.params.tolerance,
            self.params.rule,
            self.params.strategy,
        );
        trace!(
            segments_a = segments_a.len(),
            segments_b = segments_b.len(),
            matched = matched.len(),
            "matched region segments"
        );

        let borderlines = connect(&matched, self.params.join_tolerance, self.params.tie_break);
        debug!(
            matched = matched.len(),
            borderlines = borderlines.len(),
            "extracted shared borders"
        );
        borderlines
    }
}

/// Extracts shared borderlines with the given matching tolerance and default
/// values for every other parameter.
#[must_use]
pub fn extract_shared_borders(region_a: &Region, region_b: &Region, tolerance: f64) -> Vec<Borderline> {
    let params = ExtractParams {
        tolerance,
        ..ExtractParams::default()
    };
    SharedBorders::new(region_a, region_b, params).execute()
}

/// Extracts shared borderlines for many region pairs in parallel.
///
/// Output order follows input order.
#[must_use]
pub fn extract_many(pairs: &[(&Region, &Region)], params: &ExtractParams) -> Vec<Vec<Borderline>> {
    pairs
        .par_iter()
        .map(|&(a, b)| SharedBorders::new(a, b, *params).execute())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{LatLng, Ring};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn square(lon0: f64, lat0: f64, size: f64) -> Region {
        Region::from_lon_lat_polygon(&[vec![
            [lon0, lat0],
            [lon0, lat0 + size],
            [lon0 + size, lat0 + size],
            [lon0 + size, lat0],
        ]])
    }

    #[test]
    fn abutting_squares_share_one_edge() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 0.0, 1.0);
        let lines = extract_shared_borders(&a, &b, 1e-3);
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert_eq!(line.len(), 2);
        // Shared edge (1,0)-(1,1) in lon/lat is (0,1)-(1,1) in lat/lng.
        for p in &line.points {
            assert_abs_diff_eq!(p.lng, 1.0, epsilon = 1e-12);
        }
        let mut lats: Vec<f64> = line.points.iter().map(|p| p.lat).collect();
        lats.sort_by(f64::total_cmp);
        assert_eq!(lats, vec![0.0, 1.0]);
    }

    #[test]
    fn separated_squares_share_nothing() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(3.0, 3.0, 1.0);
        assert!(extract_shared_borders(&a, &b, 1e-3).is_empty());
    }

    #[test]
    fn empty_region_shares_nothing() {
        let a = square(0.0, 0.0, 1.0);
        assert!(extract_shared_borders(&a, &Region::default(), 1e-3).is_empty());
        assert!(extract_shared_borders(&Region::default(), &a, 1e-3).is_empty());
    }

    #[test]
    fn densified_border_forms_one_chain() {
        // A has three vertices along its east edge, B the same vertices in
        // reverse ring order with slight jitter.
        let a = Region::polygon(vec![Ring::from_lon_lat(&[
            [0.0, 0.0],
            [0.0, 3.0],
            [1.0, 3.0],
            [1.0, 2.0],
            [1.0, 1.0],
            [1.0, 0.0],
        ])]);
        let b = Region::polygon(vec![Ring::from_lon_lat(&[
            [1.0002, 0.0],
            [1.0, 1.0001],
            [0.9999, 2.0],
            [1.0, 3.0],
            [2.0, 3.0],
            [2.0, 0.0],
        ])]);
        let lines = extract_shared_borders(&a, &b, 1e-3);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 4);
        assert_abs_diff_eq!(lines[0].length(), 3.0, epsilon = 1e-9);
    }

    #[test]
    fn mismatched_vertex_density_keeps_the_border() {
        // A has a midpoint on its east edge that B lacks.
        let a = Region::from_lon_lat_polygon(&[vec![
            [0.0, 0.0],
            [0.0, 1.0],
            [1.0, 1.0],
            [1.0, 0.5],
            [1.0, 0.0],
        ]]);
        let b = square(1.0, 0.0, 1.0);
        let lines = extract_shared_borders(&a, &b, 1e-3);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 3);
        assert_abs_diff_eq!(lines[0].length(), 1.0, epsilon = 1e-12);

        // B densified four times along the same edge, A plain.
        let b = Region::from_lon_lat_polygon(&[vec![
            [1.0, 0.0],
            [1.0, 0.25],
            [1.0, 0.5],
            [1.0, 0.75],
            [1.0, 1.0],
            [2.0, 1.0],
            [2.0, 0.0],
        ]]);
        let lines = extract_shared_borders(&square(0.0, 0.0, 1.0), &b, 1e-3);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 2);
    }

    #[test]
    fn tiny_tolerance_still_extracts_exact_edge() {
        let params = ExtractParams::new(1e-20, 1e-20).unwrap();
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 0.0, 1.0);
        let grid = SharedBorders::new(&a, &b, params).execute();
        let brute = SharedBorders::new(&a, &b, params.with_strategy(MatchStrategy::BruteForce)).execute();
        assert_eq!(grid, brute);
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn tie_break_decides_junction_of_three_parts() {
        // B's south-west corner sits at lon 1, lat 0. Region A has three
        // parts around it: one south, one south-west touching the corner
        // exactly, and one west whose corner was digitized 8e-5 off. With
        // the any-endpoint rule all of them meet at the corner.
        let b = square(1.0, 0.0, 1.0);
        let a = Region::from_lon_lat_multi_polygon(&[
            vec![vec![[1.0, -1.0], [1.0, 0.0], [2.0, 0.0], [2.0, -1.0]]],
            vec![vec![[0.0, 0.00008], [0.0, 1.0], [1.0, 1.0], [1.0, 0.00008]]],
            vec![vec![[0.0, -1.0], [0.0, 0.0], [1.0, 0.0], [1.0, -1.0]]],
        ]);
        let params = ExtractParams::default().with_rule(MatchRule::AnyEndpoint);

        let first = SharedBorders::new(&a, &b, params).execute();
        let nearest = SharedBorders::new(&a, &b, params.with_tie_break(ChainTieBreak::Nearest)).execute();

        // Both consume the same eight matched segments.
        for lines in [&first, &nearest] {
            let segments: usize = lines.iter().map(|l| l.len() - 1).sum();
            assert_eq!(segments, 8);
        }
        // Taking the first candidate jumps to the offset corner and strands
        // the exact one; taking the nearest walks every part in one chain.
        assert_eq!(first.len(), 2);
        assert_eq!(nearest.len(), 1);
        assert_eq!(nearest[0].len(), 9);
        assert_ne!(first, nearest);
    }

    #[test]
    fn island_parts_give_disjoint_borderlines() {
        // B touches A's mainland and one of A's islands.
        let a = Region::from_lon_lat_multi_polygon(&[
            vec![vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]],
            vec![vec![[0.0, 5.0], [0.0, 6.0], [1.0, 6.0], [1.0, 5.0]]],
        ]);
        let b = Region::from_lon_lat_multi_polygon(&[
            vec![vec![[1.0, 0.0], [1.0, 1.0], [2.0, 1.0], [2.0, 0.0]]],
            vec![vec![[1.0, 5.0], [1.0, 6.0], [2.0, 6.0], [2.0, 5.0]]],
        ]);
        let lines = extract_shared_borders(&a, &b, 1e-3);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn any_endpoint_rule_extends_past_shared_edge() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 0.0, 1.0);
        let params = ExtractParams::new(1e-3, 1e-4)
            .unwrap()
            .with_rule(MatchRule::AnyEndpoint);
        let lines = SharedBorders::new(&a, &b, params).execute();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 4);
    }

    #[test]
    fn params_validation() {
        assert!(ExtractParams::new(0.0, 1e-4).is_err());
        assert!(ExtractParams::new(1e-3, -1.0).is_err());
        assert!(ExtractParams::new(f64::NAN, 1e-4).is_err());
        let p = ExtractParams::new(1e-3, 1e-4).unwrap();
        assert_eq!(p.strategy, MatchStrategy::Grid);
        assert_eq!(p.tie_break, ChainTieBreak::FirstFound);
    }

    #[test]
    fn batch_extraction_keeps_order() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 0.0, 1.0);
        let far = square(10.0, 10.0, 1.0);
        let results = extract_many(&[(&a, &b), (&a, &far), (&b, &a)], &ExtractParams::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].len(), 1);
        assert!(results[1].is_empty());
        assert_eq!(results[2].len(), 1);
    }

    fn jittered_strip(n: usize, jitter: &[f64]) -> (Region, Region) {
        // Two regions sharing an n-vertex border along lon = 1.
        #[allow(clippy::cast_precision_loss)]
        let border: Vec<[f64; 2]> = (0..n)
            .map(|i| [1.0, i as f64 * 0.1])
            .collect();
        let top = border.last().copied().unwrap();
        let mut ring_a = vec![[0.0, 0.0]];
        ring_a.extend(border.iter().copied());
        ring_a.push([0.0, top[1]]);

        let mut ring_b: Vec<[f64; 2]> = border
            .iter()
            .rev()
            .enumerate()
            .map(|(i, c)| [c[0] + jitter[i % jitter.len()], c[1]])
            .collect();
        ring_b.push([2.0, 0.0]);
        ring_b.push([2.0, top[1]]);
        (
            Region::from_lon_lat_polygon(&[ring_a]),
            Region::from_lon_lat_polygon(&[ring_b]),
        )
    }

    proptest! {
        #[test]
        fn extraction_is_deterministic_and_continuous(
            n in 2usize..30,
            jitter in prop::collection::vec(-3e-4f64..3e-4, 1..8),
        ) {
            let (a, b) = jittered_strip(n, &jitter);
            let params = ExtractParams::default();
            let first = SharedBorders::new(&a, &b, params).execute();
            let second = SharedBorders::new(&a, &b, params).execute();
            prop_assert_eq!(&first, &second);

            // Every step inside a chain walks one matched edge of region A.
            let edges = decompose(&a);
            for line in &first {
                for w in line.points.windows(2) {
                    let step = crate::geometry::Segment::new(w[0], w[1]);
                    prop_assert!(edges.iter().any(|e| e.same_edge(&step, 1e-12)));
                }
            }
        }

        #[test]
        fn strategies_agree(
            n in 2usize..30,
            jitter in prop::collection::vec(-8e-4f64..8e-4, 1..8),
        ) {
            let (a, b) = jittered_strip(n, &jitter);
            let brute = ExtractParams::default().with_strategy(MatchStrategy::BruteForce);
            let grid = ExtractParams::default().with_strategy(MatchStrategy::Grid);
            prop_assert_eq!(
                SharedBorders::new(&a, &b, brute).execute(),
                SharedBorders::new(&a, &b, grid).execute()
            );
        }
    }

    #[test]
    fn output_is_lat_lng_of_region_a() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 0.0, 1.0);
        let line = &extract_shared_borders(&a, &b, 1e-3)[0];
        assert!(line.points.contains(&LatLng::new(1.0, 1.0)));
        assert!(line.points.contains(&LatLng::new(0.0, 1.0)));
    }
}
