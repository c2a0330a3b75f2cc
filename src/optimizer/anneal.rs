use super::{check_pile, check_stagnation_limit};
use super::mutation::generate_random_chain;
use crate::chain::Chain;
use crate::error::{PennantError, PennantResult};
use crate::pile::Pile;
use fastrand::Rng;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnealingSchedule {
    pub stagnation_limit: usize,
    pub temperature: f64,
    pub cooling_step: f64,
}

impl AnnealingSchedule {
    pub fn validate(&self) -> PennantResult<()> {
        check_stagnation_limit(self.stagnation_limit)?;
        if !(self.cooling_step > 0.0) {
            return Err(PennantError::InvalidArgument(format!(
                "Inadequate cooling step {}",
                self.cooling_step
            )));
        }
        Ok(())
    }
}

/// Metropolis value for moving from a chain with quality index `current` to
/// one with index `candidate`: `exp(-(candidate - current) / temperature)`.
pub fn acceptance_probability(current: usize, candidate: usize, temperature: f64) -> f64 {
    let delta = candidate as f64 - current as f64;
    (-delta / temperature).exp()
}

/// Returns the chain the search ends on, not the best one it visited.
pub fn run_simulated_annealing(
    pile: &Pile,
    schedule: AnnealingSchedule,
    rng: &mut Rng,
) -> PennantResult<Chain> {
    check_pile(pile)?;
    schedule.validate()?;

    let total = pile.total();
    let mut current = generate_random_chain(pile, rng)?;
    let mut best_seen = current.quality();
    let mut temperature = schedule.temperature;
    let mut stagnation = 0;
    let mut steps = 0usize;

    debug!("annealing from {} at T={}", current, temperature);

    while stagnation < schedule.stagnation_limit {
        let mut candidate = current.clone();
        let i = rng.usize(0..total);
        let j = rng.usize(0..total);
        candidate.swap(i, j)?;

        let current_index = current.quality_index();
        let candidate_index = candidate.quality_index();
        let acceptance = acceptance_probability(current_index, candidate_index, temperature);
        trace!(
            "step {}: index {} -> {} at T={:.3}, acceptance {:.4}",
            steps,
            current_index,
            candidate_index,
            temperature,
            acceptance
        );

        if candidate.is_better_than(&current) || rng.f64() <= acceptance {
            current = candidate;
            best_seen = best_seen.max(current.quality());
            stagnation = 0;
        } else {
            stagnation += 1;
        }

        steps += 1;
        temperature -= schedule.cooling_step;
        if temperature < 0.0 {
            break;
        }
    }

    debug!(
        "annealing stopped after {} steps at T={:.3}: {:?} (best seen {:?})",
        steps,
        temperature,
        current.quality(),
        best_seen
    );
    Ok(current)
}
