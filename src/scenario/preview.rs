//! Derived net-cashflow preview for a scenario

use serde::{Deserialize, Serialize};

use crate::series::{resolve_net_cents, resolve_side_totals, FlowSeries, Indexing, SeriesError};

use super::data::{CashFlow, FlowKind, Scenario};

/// Previews are always rendered in constant scenario-start dollars
pub const PREVIEW_INDEXING: Indexing = Indexing::Real;

/// Per-year totals for one scenario, each vector `scenario.years` long
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioPreview {
    pub incomes: Vec<i64>,
    pub expenses: Vec<i64>,
    pub net: Vec<i64>,
}

fn to_flow_series(flow: &CashFlow) -> FlowSeries {
    FlowSeries {
        amount_cents: flow.amount_cents.clone(),
        start_year: flow.start_year,
        indexing: flow.indexing,
    }
}

/// Build the income/expense/net preview for a scenario's rows.
///
/// Rows are partitioned by kind, then each side is aligned, coerced to
/// [`PREVIEW_INDEXING`] and summed by the engine.
pub fn build_scenario_preview(scenario: &Scenario) -> Result<ScenarioPreview, SeriesError> {
    let incomes: Vec<FlowSeries> = scenario
        .cash_flows
        .iter()
        .filter(|flow| flow.kind == FlowKind::Income)
        .map(to_flow_series)
        .collect();
    let expenses: Vec<FlowSeries> = scenario
        .cash_flows
        .iter()
        .filter(|flow| flow.kind == FlowKind::Expense)
        .map(to_flow_series)
        .collect();

    let income_totals = resolve_side_totals(
        &incomes,
        scenario.start_year,
        scenario.years,
        scenario.inflation_annual,
        PREVIEW_INDEXING,
    )?;
    let expense_totals = resolve_side_totals(
        &expenses,
        scenario.start_year,
        scenario.years,
        scenario.inflation_annual,
        PREVIEW_INDEXING,
    )?;
    let net = resolve_net_cents(
        &incomes,
        &expenses,
        scenario.start_year,
        scenario.years,
        scenario.inflation_annual,
        PREVIEW_INDEXING,
    )?;

    Ok(ScenarioPreview {
        incomes: income_totals,
        expenses: expense_totals,
        net,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::data::CashFlow;

    fn test_scenario() -> Scenario {
        let mut scenario = Scenario::new(1, "Mixed indexing", 2025, 4, 0.03);
        scenario.cash_flows = vec![
            CashFlow {
                id: 1,
                label: "Salary".to_string(),
                category: None,
                kind: FlowKind::Income,
                indexing: Indexing::Nominal,
                start_year: 2025,
                amount_cents: vec![100_000, 102_000, 104_040],
                order: 0,
            },
            CashFlow {
                id: 2,
                label: "Groceries".to_string(),
                category: Some("Living".to_string()),
                kind: FlowKind::Expense,
                indexing: Indexing::Nominal,
                start_year: 2025,
                amount_cents: vec![30_000, 30_900, 31_827],
                order: 1,
            },
            CashFlow {
                id: 3,
                label: "Rent".to_string(),
                category: Some("Living".to_string()),
                kind: FlowKind::Expense,
                indexing: Indexing::Real,
                start_year: 2026,
                amount_cents: vec![40_000, 40_000, 40_000],
                order: 2,
            },
        ];
        scenario
    }

    #[test]
    fn test_preview_partitions_by_kind_and_sums_in_real_terms() {
        let preview = build_scenario_preview(&test_scenario()).unwrap();
        assert_eq!(preview.incomes, vec![100_000, 99_029, 98_068, 0]);
        assert_eq!(preview.expenses, vec![30_000, 70_000, 70_000, 40_000]);
        assert_eq!(preview.net, vec![70_000, 29_029, 28_068, -40_000]);
    }

    #[test]
    fn test_preview_of_empty_scenario_is_all_zero() {
        let scenario = Scenario::new(2, "Empty", 2025, 3, 0.02);
        let preview = build_scenario_preview(&scenario).unwrap();
        assert_eq!(preview.incomes, vec![0, 0, 0]);
        assert_eq!(preview.expenses, vec![0, 0, 0]);
        assert_eq!(preview.net, vec![0, 0, 0]);
    }

    #[test]
    fn test_preview_vectors_span_the_horizon() {
        let mut scenario = test_scenario();
        scenario.years = 10;
        let preview = build_scenario_preview(&scenario).unwrap();
        assert_eq!(preview.net.len(), 10);
        assert_eq!(&preview.net[4..], &[0; 6]);
    }
}
