//! Scenario records and the derived cashflow preview

mod data;
mod preview;

pub use data::{CashFlow, FlowKind, Scenario, ScenarioError};
pub use preview::{build_scenario_preview, ScenarioPreview, PREVIEW_INDEXING};
