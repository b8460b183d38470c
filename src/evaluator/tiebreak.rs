//! Per-category tie-break algorithms.
//!
//! Each function receives candidates that all share one category, in group
//! order, and returns the survivors in the same relative order. None of them
//! can return an empty list for a non-empty input.

use super::counts::HandCounts;
use super::PlayerHandResult;
use crate::cards::Rank;

/// Walk positions left to right, keeping only the candidates holding the
/// highest rank at each position among those still in the running. Stops once
/// a single candidate is left or the shortest sequence runs out; whatever
/// remains at that point is a draw.
pub(crate) fn eliminate_by_position<'a, S>(
    mut candidates: Vec<(&'a PlayerHandResult, S)>,
) -> Vec<&'a PlayerHandResult>
where
    S: AsRef<[Rank]>,
{
    let width = candidates.iter().map(|(_, seq)| seq.as_ref().len()).min().unwrap_or(0);
    for pos in 0..width {
        if candidates.len() <= 1 {
            break;
        }
        let Some(best) = candidates.iter().map(|(_, seq)| seq.as_ref()[pos]).max() else {
            break;
        };
        candidates.retain(|(_, seq)| seq.as_ref()[pos] == best);
        log::trace!("position {pos}: best {best}, {} candidate(s) left", candidates.len());
    }
    candidates.into_iter().map(|(result, _)| result).collect()
}

pub(crate) fn flush<'a>(candidates: Vec<&'a PlayerHandResult>) -> Vec<&'a PlayerHandResult> {
    high_card(candidates)
}

/// Only the rank of the triple counts; the other two cards are never compared.
pub(crate) fn three_of_a_kind<'a>(
    candidates: Vec<&'a PlayerHandResult>,
) -> Vec<&'a PlayerHandResult> {
    keep_highest_group(candidates, 3)
}

pub(crate) fn one_pair<'a>(candidates: Vec<&'a PlayerHandResult>) -> Vec<&'a PlayerHandResult> {
    let survivors = keep_highest_group(candidates, 2);
    if survivors.len() <= 1 {
        return survivors;
    }
    let Some(pair) = group_rank(survivors[0], 2) else {
        return survivors;
    };
    // kickers are derived per call and dropped with it
    let with_kickers: Vec<_> =
        survivors.into_iter().map(|r| (r, r.hand().ranks_without(pair))).collect();
    eliminate_by_position(with_kickers)
}

/// Fallback for groups no rule claims: plain positional comparison.
pub(crate) fn high_card<'a>(candidates: Vec<&'a PlayerHandResult>) -> Vec<&'a PlayerHandResult> {
    let with_ranks: Vec<_> = candidates.into_iter().map(|r| (r, r.hand().ranks())).collect();
    eliminate_by_position(with_ranks)
}

fn group_rank(result: &PlayerHandResult, size: u8) -> Option<Rank> {
    HandCounts::of(result.hand()).highest_rank_exactly(size)
}

/// Keep the candidates whose highest exactly-`size` rank group is the best in
/// the field.
fn keep_highest_group(
    candidates: Vec<&PlayerHandResult>,
    size: u8,
) -> Vec<&PlayerHandResult> {
    let Some(best) = candidates.iter().filter_map(|r| group_rank(r, size)).max() else {
        return candidates;
    };
    candidates.into_iter().filter(|r| group_rank(r, size) == Some(best)).collect()
}
