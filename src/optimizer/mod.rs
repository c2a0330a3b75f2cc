pub mod adaptive_walk;
pub mod anneal;
pub mod branch_bound;
pub mod mutation;
pub mod runner;

pub use self::adaptive_walk::run_adaptive_walk;
pub use self::anneal::{run_simulated_annealing, AnnealingSchedule};
pub use self::branch_bound::run_branch_and_bound;
pub use self::runner::{OptimizationResult, Optimizer};

use crate::chain::Chain;
use crate::error::{PennantError, PennantResult};
use crate::pile::Pile;
use std::cmp::Ordering;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum StrategyKind {
    BranchAndBound,
    AdaptiveWalk,
    SimulatedAnnealing,
}

impl StrategyKind {
    pub fn parse(tag: &str) -> PennantResult<Self> {
        Self::from_str(tag.trim()).map_err(|_| {
            PennantError::InvalidArgument(format!(
                "Unknown strategy '{}' (expected one of: {})",
                tag,
                Self::all().map(|k| k.to_string()).collect::<Vec<_>>().join(", ")
            ))
        })
    }

    pub fn all() -> impl Iterator<Item = StrategyKind> {
        Self::iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    BranchAndBound,
    AdaptiveWalk {
        stagnation_limit: usize,
    },
    SimulatedAnnealing {
        stagnation_limit: usize,
        temperature: f64,
        cooling_step: f64,
    },
}

impl Strategy {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::BranchAndBound => StrategyKind::BranchAndBound,
            Self::AdaptiveWalk { .. } => StrategyKind::AdaptiveWalk,
            Self::SimulatedAnnealing { .. } => StrategyKind::SimulatedAnnealing,
        }
    }

    pub fn validate(&self) -> PennantResult<()> {
        match *self {
            Self::BranchAndBound => Ok(()),
            Self::AdaptiveWalk { stagnation_limit } => check_stagnation_limit(stagnation_limit),
            Self::SimulatedAnnealing {
                stagnation_limit,
                temperature,
                cooling_step,
            } => AnnealingSchedule {
                stagnation_limit,
                temperature,
                cooling_step,
            }
            .validate(),
        }
    }
}

pub(crate) fn check_pile(pile: &Pile) -> PennantResult<()> {
    if pile.is_empty() {
        return Err(PennantError::InvalidArgument(
            "Pile holds no pennants".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn check_stagnation_limit(limit: usize) -> PennantResult<()> {
    if limit == 0 {
        return Err(PennantError::InvalidArgument(
            "Only positive limits for non-improving iterations".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    Replaced,
    Tied,
    Discarded,
}

/// The best chains found so far. Every held chain has the same quality.
#[derive(Debug, Clone)]
pub struct BestChains {
    chains: Vec<Chain>,
}

impl BestChains {
    pub fn new(first: Chain) -> Self {
        Self {
            chains: vec![first],
        }
    }

    pub fn benchmark(&self) -> &Chain {
        &self.chains[0]
    }

    pub fn offer(&mut self, chain: Chain) -> Offer {
        match chain.compare(self.benchmark()) {
            Ordering::Greater => {
                self.chains.clear();
                self.chains.push(chain);
                Offer::Replaced
            }
            Ordering::Equal => {
                self.chains.push(chain);
                Offer::Tied
            }
            Ordering::Less => Offer::Discarded,
        }
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn into_chains(self) -> Vec<Chain> {
        self.chains
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_kind_tags() {
        assert_eq!(
            StrategyKind::parse("branch-and-bound").unwrap(),
            StrategyKind::BranchAndBound
        );
        assert_eq!(
            StrategyKind::parse(" Simulated-Annealing ").unwrap(),
            StrategyKind::SimulatedAnnealing
        );
        assert_eq!(StrategyKind::AdaptiveWalk.to_string(), "adaptive-walk");
        assert!(StrategyKind::parse("genetic").is_err());
    }

    #[test]
    fn test_strategy_validation() {
        assert!(Strategy::BranchAndBound.validate().is_ok());
        assert!(Strategy::AdaptiveWalk {
            stagnation_limit: 0
        }
        .validate()
        .is_err());
        assert!(Strategy::SimulatedAnnealing {
            stagnation_limit: 10,
            temperature: 1.0,
            cooling_step: 0.0,
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_best_chains_offer() {
        let mut best = BestChains::new(Chain::dummy(4));
        let spaced = Chain::from_colors(["r", "b", "r", "b"]).unwrap();
        let mirrored = Chain::from_colors(["b", "r", "b", "r"]).unwrap();
        let crowded = Chain::from_colors(["r", "r", "b", "b"]).unwrap();

        assert_eq!(best.offer(crowded), Offer::Replaced);
        assert_eq!(best.offer(spaced), Offer::Replaced);
        assert_eq!(best.offer(mirrored), Offer::Tied);
        assert_eq!(
            best.offer(Chain::from_colors(["r", "b", "b", "r"]).unwrap()),
            Offer::Discarded
        );
        assert_eq!(best.len(), 2);
        assert!(best.chains().iter().all(|c| c.minimal_distance() == 1));
    }
}
