use std::collections::VecDeque;

use crate::geometry::{Borderline, LatLng, Segment};

use super::ChainTieBreak;

/// Which end of the growing chain a candidate attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    Back,
    Front,
}

/// A candidate extension: segment index, chain end, and the point to add.
#[derive(Debug, Clone, Copy)]
struct Extension {
    index: usize,
    end: End,
    point: LatLng,
    gap: f64,
}

/// Reassembles matched segments into maximal ordered chains.
///
/// Each chain is seeded by the first unused segment and grown at either end
/// by any unused segment whose endpoint lies within `join_tol` of the chain's
/// first or last point, in either orientation. Joint points are not
/// duplicated: a chain of `k` segments has `k + 1` points. Every segment is
/// consumed by at most one chain.
///
/// With [`ChainTieBreak::FirstFound`], the lowest-index candidate wins (the
/// back end is tried before the front for the same segment). With
/// [`ChainTieBreak::Nearest`], the candidate with the smallest joint gap wins.
#[must_use]
pub fn connect(segments: &[Segment], join_tol: f64, tie_break: ChainTieBreak) -> Vec<Borderline> {
    let n = segments.len();
    let mut used = vec![false; n];
    let mut chains = Vec::new();

    for seed in 0..n {
        if used[seed] {
            continue;
        }
        used[seed] = true;

        let mut chain: VecDeque<LatLng> = VecDeque::from([segments[seed].start, segments[seed].end]);

        while let Some(ext) = find_extension(segments, &used, &chain, join_tol, tie_break) {
            used[ext.index] = true;
            match ext.end {
                End::Back => chain.push_back(ext.point),
                End::Front => chain.push_front(ext.point),
            }
        }

        chains.push(Borderline::new(chain.into()));
    }

    chains
}

fn find_extension(
    segments: &[Segment],
    used: &[bool],
    chain: &VecDeque<LatLng>,
    join_tol: f64,
    tie_break: ChainTieBreak,
) -> Option<Extension> {
    let (Some(&front), Some(&back)) = (chain.front(), chain.back()) else {
        return None;
    };

    let mut best: Option<Extension> = None;

    for (index, seg) in segments.iter().enumerate() {
        if used[index] {
            continue;
        }
        let candidates = [
            (End::Back, back, seg.start, seg.end),
            (End::Back, back, seg.end, seg.start),
            (End::Front, front, seg.end, seg.start),
            (End::Front, front, seg.start, seg.end),
        ];
        for (end, anchor, joint, far) in candidates {
            if !anchor.approx_eq(joint, join_tol) {
                continue;
            }
            let ext = Extension {
                index,
                end,
                point: far,
                gap: anchor.distance(joint),
            };
            match tie_break {
                ChainTieBreak::FirstFound => return Some(ext),
                ChainTieBreak::Nearest => {
                    if best.is_none_or(|b| ext.gap < b.gap) {
                        best = Some(ext);
                    }
                }
            }
        }
    }

    best
}
