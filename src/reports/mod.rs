use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use pennant::chain::ChainReport;
use pennant::error::PennantResult;
use pennant::optimizer::OptimizationResult;
use pennant::pile::Pile;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ResultReport {
    strategy: String,
    elapsed_ms: u128,
    chains: Vec<ChainReport>,
}

pub fn print_pile(pile: &Pile) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Colour").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
    ]);

    for (color, count) in pile.iter() {
        table.add_row(vec![
            Cell::new(color),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("total").fg(Color::Cyan),
        Cell::new(pile.total())
            .fg(Color::Cyan)
            .set_alignment(CellAlignment::Right),
    ]);
    println!("\n{}", table);
}

pub fn print_result(result: &OptimizationResult) {
    println!("\n=== {} ===", result.strategy.to_string().to_uppercase());
    for chain in &result.chains {
        println!("{}", chain.describe());
    }
}

pub fn print_summary(results: &[OptimizationResult]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Strategy").add_attribute(Attribute::Bold),
        Cell::new("Distance").fg(Color::Green),
        Cell::new("Frequency").fg(Color::Red),
        Cell::new("Chains"),
        Cell::new("Best"),
        Cell::new("Time"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for r in results {
        let (distance, frequency, rendering) = match r.best() {
            Some(c) => (
                c.minimal_distance().to_string(),
                c.frequency().to_string(),
                c.to_string(),
            ),
            None => ("-".to_string(), "-".to_string(), "-".to_string()),
        };
        table.add_row(vec![
            Cell::new(r.strategy).add_attribute(Attribute::Bold),
            Cell::new(distance).fg(Color::Green),
            Cell::new(frequency).fg(Color::Red),
            Cell::new(r.chains.len()),
            Cell::new(rendering),
            Cell::new(format!("{:.2?}", r.elapsed)),
        ]);
    }
    println!("\n{}", table);
}

pub fn results_to_json(results: &[OptimizationResult]) -> PennantResult<String> {
    let reports: Vec<ResultReport> = results
        .iter()
        .map(|r| ResultReport {
            strategy: r.strategy.to_string(),
            elapsed_ms: r.elapsed.as_millis(),
            chains: r.chains.iter().map(|c| c.report()).collect(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&reports)?)
}
