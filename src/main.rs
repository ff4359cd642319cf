//! Cashflow Planner CLI
//!
//! Command-line interface for managing planning scenarios: create a
//! scenario, add or remove yearly cashflow rows, and preview or export the
//! projected income/expense/net table.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::path::PathBuf;

use cashflow_planner::export::{cents_to_decimal, write_preview_csv};
use cashflow_planner::scenario::build_scenario_preview;
use cashflow_planner::series::{parse_dollars_to_cents, Indexing};
use cashflow_planner::store::{CashFlowDraft, ScenarioDraft, ScenarioStore};
use cashflow_planner::FlowKind;

#[derive(Parser)]
#[command(name = "cashflow_planner", version, about = "Financial planning scenario projections")]
struct Cli {
    /// Path to the scenario store file
    #[arg(long, global = true, default_value = "scenarios.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a scenario (or update one with --scenario)
    Init(InitArgs),
    /// Add a cashflow row (or update one with --flow)
    AddFlow(AddFlowArgs),
    /// Remove a cashflow row
    RemoveFlow {
        #[arg(long)]
        scenario: u32,
        #[arg(long)]
        flow: u32,
    },
    /// Print the per-year income/expense/net preview
    Preview {
        /// Scenario id; defaults to the earliest-created scenario
        #[arg(long)]
        scenario: Option<u32>,
        /// Number of years to show
        #[arg(long, default_value_t = 10)]
        window: usize,
    },
    /// Write the full preview table to a CSV file
    Export {
        #[arg(long)]
        scenario: u32,
        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(Args)]
struct InitArgs {
    /// Update this scenario instead of creating a new one
    #[arg(long)]
    scenario: Option<u32>,
    #[arg(long)]
    name: String,
    #[arg(long)]
    start_year: i32,
    #[arg(long, default_value_t = 40)]
    years: usize,
    /// Annual inflation rate as a decimal, e.g. 0.02
    #[arg(long, default_value_t = 0.02)]
    inflation: f64,
    #[arg(long, value_enum, default_value_t = IndexingArg::Nominal)]
    indexing: IndexingArg,
}

#[derive(Args)]
struct AddFlowArgs {
    #[arg(long)]
    scenario: u32,
    /// Update this row instead of creating a new one
    #[arg(long)]
    flow: Option<u32>,
    #[arg(long)]
    label: String,
    #[arg(long)]
    category: Option<String>,
    #[arg(long, value_enum)]
    kind: KindArg,
    #[arg(long, value_enum, default_value_t = IndexingArg::Nominal)]
    indexing: IndexingArg,
    /// Calendar year of the first amount
    #[arg(long)]
    start_year: i32,
    /// Yearly dollar amounts, e.g. "1000 1000.35, $1200"
    #[arg(long)]
    amounts: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Income,
    Expense,
}

#[derive(Clone, Copy, ValueEnum)]
enum IndexingArg {
    Nominal,
    Real,
}

impl From<KindArg> for FlowKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Income => FlowKind::Income,
            KindArg::Expense => FlowKind::Expense,
        }
    }
}

impl From<IndexingArg> for Indexing {
    fn from(arg: IndexingArg) -> Self {
        match arg {
            IndexingArg::Nominal => Indexing::Nominal,
            IndexingArg::Real => Indexing::Real,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut store = ScenarioStore::open(&cli.store)
        .with_context(|| format!("unable to open store {}", cli.store.display()))?;

    match cli.command {
        Command::Init(args) => {
            let id = store.upsert_scenario(
                args.scenario,
                ScenarioDraft {
                    name: args.name,
                    start_year: args.start_year,
                    years: args.years,
                    inflation_annual: args.inflation,
                    series_indexing: args.indexing.into(),
                },
            )?;
            println!("Saved scenario {}", id);
        }
        Command::AddFlow(args) => {
            let amount_cents = parse_dollars_to_cents(&args.amounts)?;
            if amount_cents.is_empty() {
                bail!("enter at least one yearly amount");
            }
            let id = store.upsert_cash_flow(
                args.scenario,
                args.flow,
                CashFlowDraft {
                    label: args.label,
                    category: args.category,
                    kind: args.kind.into(),
                    indexing: args.indexing.into(),
                    start_year: args.start_year,
                    amount_cents,
                },
            )?;
            println!("Saved cashflow {} in scenario {}", id, args.scenario);
        }
        Command::RemoveFlow { scenario, flow } => {
            store.delete_cash_flow(scenario, flow)?;
            println!("Deleted cashflow {} from scenario {}", flow, scenario);
        }
        Command::Preview { scenario, window } => {
            let id = match scenario {
                Some(id) => id,
                None => store.ensure_default_scenario()?,
            };
            let scenario = store.scenario(id)?;
            let preview = build_scenario_preview(scenario)?;

            println!(
                "Scenario {}: {} ({} years from {}, inflation {:.1}%)",
                scenario.id,
                scenario.name,
                scenario.years,
                scenario.start_year,
                scenario.inflation_annual * 100.0
            );
            println!("All amounts in constant {} dollars\n", scenario.start_year);
            println!("{:>6} {:>14} {:>14} {:>14}", "Year", "Income", "Expense", "Net");
            println!("{}", "-".repeat(52));
            for offset in 0..scenario.years.min(window) {
                println!(
                    "{:>6} {:>14} {:>14} {:>14}",
                    scenario.start_year + offset as i32,
                    cents_to_decimal(preview.incomes[offset]),
                    cents_to_decimal(preview.expenses[offset]),
                    cents_to_decimal(preview.net[offset]),
                );
            }
            if scenario.years > window {
                println!("... {} more years", scenario.years - window);
            }
        }
        Command::Export { scenario, output } => {
            let scenario = store.scenario(scenario)?;
            let preview = build_scenario_preview(scenario)?;
            let file = File::create(&output)
                .with_context(|| format!("unable to create {}", output.display()))?;
            write_preview_csv(file, scenario, &preview)?;
            println!("Wrote {} rows to {}", scenario.years, output.display());
        }
    }

    Ok(())
}
