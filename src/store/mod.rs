//! JSON-file scenario store
//!
//! Persists all scenarios as one serde_json document and keeps each
//! scenario's cached `net_cashflow_cents` in step with its rows: every write
//! revalidates, recomputes the net through the projection engine, and saves.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scenario::{build_scenario_preview, CashFlow, FlowKind, Scenario, ScenarioError};
use crate::series::{Indexing, SeriesError};

/// Failures raised by store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read or write the scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("scenario file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ScenarioError),
    #[error(transparent)]
    Series(#[from] SeriesError),
    #[error("scenario {0} not found")]
    ScenarioNotFound(u32),
    #[error("cashflow {0} not found")]
    CashFlowNotFound(u32),
}

/// Scenario metadata as submitted by the caller
#[derive(Debug, Clone)]
pub struct ScenarioDraft {
    pub name: String,
    pub start_year: i32,
    pub years: usize,
    pub inflation_annual: f64,
    pub series_indexing: Indexing,
}

/// Cashflow row fields as submitted by the caller; the store assigns the id
/// and display order
#[derive(Debug, Clone)]
pub struct CashFlowDraft {
    pub label: String,
    pub category: Option<String>,
    pub kind: FlowKind,
    pub indexing: Indexing,
    pub start_year: i32,
    pub amount_cents: Vec<i64>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    scenarios: Vec<Scenario>,
}

/// File-backed collection of scenarios
#[derive(Debug)]
pub struct ScenarioStore {
    path: PathBuf,
    document: StoreDocument,
}

impl ScenarioStore {
    /// Open the store at `path`, starting empty if the file does not exist
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let document = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            StoreDocument::default()
        };
        debug!(
            "opened scenario store at {} ({} scenarios)",
            path.display(),
            document.scenarios.len()
        );
        Ok(Self { path, document })
    }

    /// Write the current document back to disk
    pub fn save(&self) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(&self.document)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.document.scenarios
    }

    pub fn scenario(&self, id: u32) -> Result<&Scenario, StoreError> {
        self.document
            .scenarios
            .iter()
            .find(|scenario| scenario.id == id)
            .ok_or(StoreError::ScenarioNotFound(id))
    }

    fn scenario_mut(&mut self, id: u32) -> Result<&mut Scenario, StoreError> {
        self.document
            .scenarios
            .iter_mut()
            .find(|scenario| scenario.id == id)
            .ok_or(StoreError::ScenarioNotFound(id))
    }

    /// Earliest-created scenario, creating "Default Scenario" (current year,
    /// 40-year horizon, 2% inflation) when the store is empty
    pub fn ensure_default_scenario(&mut self) -> Result<u32, StoreError> {
        if let Some(existing) = self
            .document
            .scenarios
            .iter()
            .min_by_key(|scenario| scenario.created_at)
        {
            return Ok(existing.id);
        }

        let draft = ScenarioDraft {
            name: "Default Scenario".to_string(),
            start_year: Utc::now().year(),
            years: 40,
            inflation_annual: 0.02,
            series_indexing: Indexing::Nominal,
        };
        let id = self.upsert_scenario(None, draft)?;
        info!("created default scenario {}", id);
        Ok(id)
    }

    /// Create or update a scenario, refresh its cached net, and persist
    pub fn upsert_scenario(
        &mut self,
        id: Option<u32>,
        draft: ScenarioDraft,
    ) -> Result<u32, StoreError> {
        // Validate before touching stored state
        let mut candidate = Scenario::new(
            0,
            &draft.name,
            draft.start_year,
            draft.years,
            draft.inflation_annual,
        );
        candidate.series_indexing = draft.series_indexing;
        candidate.validate()?;

        let id = match id {
            Some(id) => {
                let scenario = self.scenario_mut(id)?;
                scenario.name = candidate.name;
                scenario.start_year = candidate.start_year;
                scenario.years = candidate.years;
                scenario.inflation_annual = candidate.inflation_annual;
                scenario.series_indexing = candidate.series_indexing;
                id
            }
            None => {
                let id = self.next_scenario_id();
                candidate.id = id;
                self.document.scenarios.push(candidate);
                id
            }
        };

        self.recompute_net(id)?;
        self.save()?;
        info!("saved scenario {}", id);
        Ok(id)
    }

    /// Create or update a row in a scenario, refresh the net, and persist.
    /// Updates keep the row's display order; inserts append after the
    /// current maximum.
    pub fn upsert_cash_flow(
        &mut self,
        scenario_id: u32,
        cash_flow_id: Option<u32>,
        draft: CashFlowDraft,
    ) -> Result<u32, StoreError> {
        let next_id = self.next_cash_flow_id();
        let scenario = self.scenario_mut(scenario_id)?;

        let (id, order) = match cash_flow_id {
            Some(id) => {
                let existing = scenario
                    .cash_flows
                    .iter()
                    .find(|flow| flow.id == id)
                    .ok_or(StoreError::CashFlowNotFound(id))?;
                (id, existing.order)
            }
            None => (next_id, scenario.next_order()),
        };

        let flow = CashFlow {
            id,
            label: draft.label,
            category: draft.category,
            kind: draft.kind,
            indexing: draft.indexing,
            start_year: draft.start_year,
            amount_cents: draft.amount_cents,
            order,
        };
        scenario.validate_cash_flow(&flow)?;

        match scenario.cash_flows.iter_mut().find(|f| f.id == id) {
            Some(existing) => *existing = flow,
            None => scenario.cash_flows.push(flow),
        }

        self.recompute_net(scenario_id)?;
        self.save()?;
        info!("saved cashflow {} in scenario {}", id, scenario_id);
        Ok(id)
    }

    /// Remove a row, refresh the net, and persist
    pub fn delete_cash_flow(
        &mut self,
        scenario_id: u32,
        cash_flow_id: u32,
    ) -> Result<(), StoreError> {
        let scenario = self.scenario_mut(scenario_id)?;
        let before = scenario.cash_flows.len();
        scenario.cash_flows.retain(|flow| flow.id != cash_flow_id);
        if scenario.cash_flows.len() == before {
            return Err(StoreError::CashFlowNotFound(cash_flow_id));
        }

        self.recompute_net(scenario_id)?;
        self.save()?;
        info!(
            "deleted cashflow {} from scenario {}",
            cash_flow_id, scenario_id
        );
        Ok(())
    }

    fn recompute_net(&mut self, scenario_id: u32) -> Result<(), StoreError> {
        let scenario = self.scenario_mut(scenario_id)?;
        let preview = build_scenario_preview(scenario)?;
        scenario.net_cashflow_cents = preview.net;
        Ok(())
    }

    fn next_scenario_id(&self) -> u32 {
        self.document
            .scenarios
            .iter()
            .map(|scenario| scenario.id + 1)
            .max()
            .unwrap_or(1)
    }

    fn next_cash_flow_id(&self) -> u32 {
        self.document
            .scenarios
            .iter()
            .flat_map(|scenario| scenario.cash_flows.iter())
            .map(|flow| flow.id + 1)
            .max()
            .unwrap_or(1)
    }
}
