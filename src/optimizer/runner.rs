use super::{
    check_pile, run_adaptive_walk, run_branch_and_bound, run_simulated_annealing,
    AnnealingSchedule, Strategy, StrategyKind,
};
use crate::chain::Chain;
use crate::error::PennantResult;
use crate::pile::Pile;
use fastrand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub strategy: StrategyKind,
    pub chains: Vec<Chain>,
    pub elapsed: Duration,
}

impl OptimizationResult {
    pub fn best(&self) -> Option<&Chain> {
        self.chains.iter().max_by(|a, b| a.compare(b))
    }
}

pub struct Optimizer {
    pile: Pile,
    rng: Rng,
}

impl Optimizer {
    pub fn new(pile: Pile, seed: Option<u64>) -> PennantResult<Self> {
        check_pile(&pile)?;
        let rng = match seed {
            Some(s) => Rng::with_seed(s),
            None => Rng::new(),
        };
        Ok(Self { pile, rng })
    }

    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    pub fn run(&mut self, strategy: Strategy) -> PennantResult<OptimizationResult> {
        strategy.validate()?;

        let kind = strategy.kind();
        let pile = self.pile.clone();
        info!("Running {} on {} pennants", kind, pile.total());
        let start = Instant::now();

        let chains = if pile.total() == 1 {
            // A lone pennant has no pair to space out.
            let mut chain = Chain::new(1);
            if let Some(color) = pile.colors().next() {
                chain.push(color.clone())?;
            }
            vec![chain]
        } else {
            match strategy {
                Strategy::BranchAndBound => run_branch_and_bound(&pile)?,
                Strategy::AdaptiveWalk { stagnation_limit } => {
                    vec![run_adaptive_walk(&pile, stagnation_limit, &mut self.rng)?]
                }
                Strategy::SimulatedAnnealing {
                    stagnation_limit,
                    temperature,
                    cooling_step,
                } => {
                    let schedule = AnnealingSchedule {
                        stagnation_limit,
                        temperature,
                        cooling_step,
                    };
                    vec![run_simulated_annealing(&pile, schedule, &mut self.rng)?]
                }
            }
        };

        let elapsed = start.elapsed();
        debug!("{} returned {} chain(s) in {:?}", kind, chains.len(), elapsed);

        Ok(OptimizationResult {
            strategy: kind,
            chains,
            elapsed,
        })
    }

    // Each run works on its own copy of the pile.
    pub fn run_all(&mut self, strategies: &[Strategy]) -> PennantResult<Vec<OptimizationResult>> {
        strategies.iter().map(|s| self.run(*s)).collect()
    }
}
