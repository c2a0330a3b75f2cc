use super::{check_pile, check_stagnation_limit};
use super::mutation::generate_random_chain;
use crate::chain::Chain;
use crate::error::PennantResult;
use crate::pile::Pile;
use fastrand::Rng;
use tracing::debug;

pub fn run_adaptive_walk(
    pile: &Pile,
    stagnation_limit: usize,
    rng: &mut Rng,
) -> PennantResult<Chain> {
    check_pile(pile)?;
    check_stagnation_limit(stagnation_limit)?;

    let mut best = generate_random_chain(pile, rng)?;
    let mut stagnation = 0;
    let mut samples = 1;

    while stagnation < stagnation_limit {
        let candidate = generate_random_chain(pile, rng)?;
        samples += 1;

        if candidate.is_better_than(&best) {
            debug!("adaptive walk: {:?} after {} samples", candidate.quality(), samples);
            best = candidate;
            stagnation = 0;
        } else {
            stagnation += 1;
        }
    }

    debug!(
        "adaptive walk finished after {} samples at {:?}",
        samples,
        best.quality()
    );
    Ok(best)
}
