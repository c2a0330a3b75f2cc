use super::{check_pile, BestChains, Offer};
use crate::chain::{Chain, Color};
use crate::error::PennantResult;
use crate::pile::Pile;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
struct SearchStats {
    nodes: usize,
    pruned: usize,
    leaves: usize,
}

pub fn run_branch_and_bound(pile: &Pile) -> PennantResult<Vec<Chain>> {
    check_pile(pile)?;
    let capacity = pile.total();
    let mut best = BestChains::new(Chain::dummy(capacity));
    let mut stats = SearchStats::default();

    explore(Chain::new(capacity), pile.clone(), &mut best, &mut stats)?;

    debug!(
        "branch and bound: {} nodes, {} pruned, {} leaves, {} best at {:?}",
        stats.nodes,
        stats.pruned,
        stats.leaves,
        best.len(),
        best.benchmark().quality()
    );
    Ok(best.into_chains())
}

/// Whether a partial chain can be dropped against the current best.
///
/// Appending never raises the minimal distance, and at a fixed minimal
/// distance it never lowers the frequency, so a partial chain that is
/// already worse only has worse completions.
pub fn can_prune(partial: &Chain, best: &Chain) -> bool {
    partial.is_worse_than(best)
}

fn explore(
    chain: Chain,
    pile: Pile,
    best: &mut BestChains,
    stats: &mut SearchStats,
) -> PennantResult<()> {
    stats.nodes += 1;

    if can_prune(&chain, best.benchmark()) {
        stats.pruned += 1;
        return Ok(());
    }

    if pile.is_empty() {
        stats.leaves += 1;
        if best.offer(chain) == Offer::Replaced {
            debug!("new best {:?}", best.benchmark().quality());
        }
        return Ok(());
    }

    let mut children: Vec<(Color, Chain)> = pile
        .colors()
        .map(|color| Ok((color.clone(), chain.appended(color.clone())?)))
        .collect::<PennantResult<_>>()?;

    // Best child first so strong bounds are found early.
    children.sort_by(|a, b| b.1.compare(&a.1));

    for (color, child) in children {
        let mut rest = pile.clone();
        rest.take_one(&color)?;
        explore(child, rest, best, stats)?;
    }
    Ok(())
}
