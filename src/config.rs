use crate::error::{PennantError, PennantResult};
use crate::optimizer::{Strategy, StrategyKind};
use crate::pile::Pile;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Inclusive bounds for a single colour's count when entered by hand.
pub const MIN_QUANTITY: i64 = 1;
pub const MAX_QUANTITY: i64 = 50;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub pile: PileArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Non-improving iterations before a randomized search stops.
    #[arg(long, default_value_t = 100)]
    pub stagnation_limit: usize,
    #[arg(long, default_value_t = 100.0)]
    pub temperature: f64,
    #[arg(long, default_value_t = 0.001)]
    pub cooling_step: f64,
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            stagnation_limit: 100,
            temperature: 100.0,
            cooling_step: 0.001,
            seed: None,
        }
    }
}

impl SearchParams {
    pub fn strategy(&self, kind: StrategyKind) -> Strategy {
        match kind {
            StrategyKind::BranchAndBound => Strategy::BranchAndBound,
            StrategyKind::AdaptiveWalk => Strategy::AdaptiveWalk {
                stagnation_limit: self.stagnation_limit,
            },
            StrategyKind::SimulatedAnnealing => Strategy::SimulatedAnnealing {
                stagnation_limit: self.stagnation_limit,
                temperature: self.temperature,
                cooling_step: self.cooling_step,
            },
        }
    }

    /// Builds strategies from selector tags; an empty list selects all of
    /// them in the default order.
    pub fn strategies(&self, tags: &[String]) -> PennantResult<Vec<Strategy>> {
        if tags.is_empty() {
            return Ok(StrategyKind::all().map(|k| self.strategy(k)).collect());
        }
        tags.iter()
            .map(|tag| StrategyKind::parse(tag).map(|k| self.strategy(k)))
            .collect()
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct PileArgs {
    /// Pennants as `colour=count` pairs, e.g. `rot=4,grün=3`.
    #[arg(short, long, conflicts_with = "pile_file")]
    pub pile: Option<String>,

    /// JSON object mapping colour to count.
    #[arg(long)]
    pub pile_file: Option<PathBuf>,

    /// Use the built-in demo pile.
    #[arg(long, default_value_t = false, conflicts_with_all = ["pile", "pile_file"])]
    pub demo: bool,
}

impl PileArgs {
    pub fn resolve(&self) -> PennantResult<Pile> {
        let pile = if let Some(spec) = &self.pile {
            spec.parse::<Pile>()?
        } else if let Some(path) = &self.pile_file {
            info!("📂 Loading pile: {}", path.display());
            Pile::load_from_file(path)?
        } else {
            if !self.demo {
                info!("No pile given. Using the demo pile.");
            }
            Pile::demo()
        };

        if pile.is_empty() {
            return Err(PennantError::InvalidArgument(
                "Pile holds no pennants".to_string(),
            ));
        }
        Ok(pile)
    }
}
