//! What-if sweep over inflation rates for one scenario
//!
//! Recomputes the scenario preview across a range of inflation assumptions in
//! parallel and prints the cumulative and final-year net for each rate.
//! Usage: inflation_sweep <store.json> [scenario_id]

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::env;
use std::time::Instant;

use cashflow_planner::export::cents_to_decimal;
use cashflow_planner::scenario::build_scenario_preview;
use cashflow_planner::store::ScenarioStore;
use cashflow_planner::ScenarioPreview;

/// Inflation rates to sweep, in basis points (0% to 6% in 50bp steps)
const SWEEP_BPS: std::ops::RangeInclusive<u32> = 0..=12;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let store_path = args.next().unwrap_or_else(|| "scenarios.json".to_string());
    let scenario_id: Option<u32> = args.next().map(|s| s.parse()).transpose()?;

    let mut store = ScenarioStore::open(&store_path)
        .with_context(|| format!("unable to open store {}", store_path))?;
    let id = match scenario_id {
        Some(id) => id,
        None => store.ensure_default_scenario()?,
    };
    let scenario = store.scenario(id)?;

    println!(
        "Sweeping inflation for scenario {} ({}, {} rows, {} years)",
        scenario.id,
        scenario.name,
        scenario.cash_flows.len(),
        scenario.years
    );

    let start = Instant::now();
    let results: Vec<(f64, ScenarioPreview)> = SWEEP_BPS
        .map(|step| step as f64 * 0.005)
        .collect::<Vec<_>>()
        .par_iter()
        .map(|&rate| {
            let mut variant = scenario.clone();
            variant.inflation_annual = rate;
            build_scenario_preview(&variant).map(|preview| (rate, preview))
        })
        .collect::<Result<_, _>>()?;
    println!("Computed {} variants in {:?}\n", results.len(), start.elapsed());

    println!(
        "{:>10} {:>16} {:>16}",
        "Inflation", "Cumulative Net", "Final-Year Net"
    );
    println!("{}", "-".repeat(44));
    for (rate, preview) in &results {
        let cumulative: i64 = preview.net.iter().sum();
        let final_year = preview.net.last().copied().unwrap_or(0);
        println!(
            "{:>9.1}% {:>16} {:>16}",
            rate * 100.0,
            cents_to_decimal(cumulative),
            cents_to_decimal(final_year),
        );
    }

    Ok(())
}
