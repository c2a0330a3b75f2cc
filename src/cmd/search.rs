use crate::reports;
use clap::Args;
use pennant::config::Config;
use pennant::error::PennantResult;
use pennant::optimizer::Optimizer;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: Config,

    /// Strategies to run, comma separated. Runs all of them when omitted.
    #[arg(short, long, value_delimiter = ',')]
    pub strategy: Vec<String>,

    /// Print the results as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: SearchArgs) -> PennantResult<()> {
    let pile = args.config.pile.resolve()?;
    let strategies = args.config.search.strategies(&args.strategy)?;

    info!(
        "🚀 {} pennants in {} colours, {} strategies",
        pile.total(),
        pile.colors().count(),
        strategies.len()
    );

    let mut optimizer = Optimizer::new(pile, args.config.search.seed)?;
    let results = optimizer.run_all(&strategies)?;

    if args.json {
        println!("{}", reports::results_to_json(&results)?);
        return Ok(());
    }

    reports::print_pile(optimizer.pile());
    for result in &results {
        reports::print_result(result);
    }
    reports::print_summary(&results);
    Ok(())
}
