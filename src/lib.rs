//! Cashflow Planner - yearly cashflow projection for financial planning scenarios
//!
//! This library provides:
//! - Parsing of user-entered dollar amounts into integer cents
//! - Alignment of per-row yearly series onto a scenario horizon
//! - Nominal/real indexing conversion at a constant inflation rate
//! - Income/expense/net aggregation and scenario previews
//! - A JSON-file scenario store with a cached net summary

pub mod series;
pub mod scenario;
pub mod store;
pub mod export;

// Re-export commonly used types
pub use series::{FlowSeries, Indexing, SeriesError};
pub use scenario::{build_scenario_preview, CashFlow, FlowKind, Scenario, ScenarioPreview};
pub use store::{CashFlowDraft, ScenarioDraft, ScenarioStore};
