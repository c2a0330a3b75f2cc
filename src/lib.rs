pub mod chain;
pub mod config;
pub mod error;
pub mod optimizer;
pub mod pile;

pub use chain::{Chain, Color, Quality};
pub use error::{PennantError, PennantResult};
pub use optimizer::{OptimizationResult, Optimizer, Strategy, StrategyKind};
pub use pile::Pile;
