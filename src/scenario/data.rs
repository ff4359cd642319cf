//! Scenario and cashflow records as stored and edited

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::series::Indexing;

/// Whether a cashflow row adds to or subtracts from the net
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowKind {
    Income,
    Expense,
}

/// Validation failures raised when saving scenario or cashflow records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("scenario name is required")]
    NameRequired,
    #[error("start year must be a positive integer")]
    InvalidScenarioStartYear,
    #[error("years must be a positive integer")]
    InvalidHorizon,
    #[error("inflation must be zero or a positive number")]
    InvalidInflation,
    #[error("label is required")]
    LabelRequired,
    #[error("enter at least one yearly amount")]
    EmptyAmountSeries,
    #[error("cashflow start year cannot be before the scenario start year")]
    FlowStartsBeforeScenario,
}

/// A yearly cashflow row belonging to a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    pub id: u32,
    pub label: String,
    #[serde(default)]
    pub category: Option<String>,
    pub kind: FlowKind,
    pub indexing: Indexing,
    /// Calendar year of the first element of `amount_cents`
    pub start_year: i32,
    /// One amount per year, in cents, in `indexing` terms
    pub amount_cents: Vec<i64>,
    /// Stable display position within the scenario
    pub order: u32,
}

/// A planning scenario: the projection horizon plus its cashflow rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: u32,
    pub name: String,
    /// First calendar year of the horizon
    pub start_year: i32,
    /// Horizon length in yearly buckets
    pub years: usize,
    /// Constant annual inflation rate used for indexing conversion
    pub inflation_annual: f64,
    /// Indexing mode used when rendering previews
    pub series_indexing: Indexing,
    /// Cached per-year net, refreshed whenever the scenario changes
    #[serde(default)]
    pub net_cashflow_cents: Vec<i64>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub cash_flows: Vec<CashFlow>,
}

impl Scenario {
    /// Create an empty scenario with the given horizon
    pub fn new(id: u32, name: &str, start_year: i32, years: usize, inflation_annual: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            start_year,
            years,
            inflation_annual,
            series_indexing: Indexing::Nominal,
            net_cashflow_cents: Vec::new(),
            created_at: Utc::now(),
            cash_flows: Vec::new(),
        }
    }

    /// Check the metadata invariants enforced when the scenario is saved
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.name.trim().is_empty() {
            return Err(ScenarioError::NameRequired);
        }
        if self.start_year < 0 {
            return Err(ScenarioError::InvalidScenarioStartYear);
        }
        if self.years == 0 {
            return Err(ScenarioError::InvalidHorizon);
        }
        if !self.inflation_annual.is_finite() || self.inflation_annual < 0.0 {
            return Err(ScenarioError::InvalidInflation);
        }
        Ok(())
    }

    /// Check a cashflow row against this scenario before it is saved
    pub fn validate_cash_flow(&self, flow: &CashFlow) -> Result<(), ScenarioError> {
        if flow.label.trim().is_empty() {
            return Err(ScenarioError::LabelRequired);
        }
        if flow.amount_cents.is_empty() {
            return Err(ScenarioError::EmptyAmountSeries);
        }
        if flow.start_year < self.start_year {
            return Err(ScenarioError::FlowStartsBeforeScenario);
        }
        Ok(())
    }

    /// Next display position for a newly added row
    pub fn next_order(&self) -> u32 {
        self.cash_flows
            .iter()
            .map(|flow| flow.order + 1)
            .max()
            .unwrap_or(0)
    }
}
