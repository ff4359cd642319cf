//! Cashflow projection engine for yearly amount series stored in cents
//!
//! Pure, stateless math over explicit inputs: parsing user-entered dollar
//! amounts, aligning per-row series onto a scenario's yearly grid, converting
//! between nominal and real terms, and summing sides into per-year totals.

mod parse;
mod place;
mod indexing;
mod aggregate;

pub use parse::parse_dollars_to_cents;
pub use place::place_series_by_start_year;
pub use indexing::{cents_nominal_to_real, cents_real_to_nominal};
pub use aggregate::{resolve_net_cents, resolve_side_totals, FlowSeries};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Terms in which an amount series is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Indexing {
    /// Then-current dollars
    Nominal,
    /// Constant dollars, deflated to the scenario start year
    Real,
}

/// Validation failures raised by the engine
///
/// Both kinds are routine bad-input failures; callers surface them to the
/// user. The engine raises on the first invalid input and computes nothing
/// partial.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// A token in the amount text is not a finite decimal number
    #[error("invalid cashflow value: {token}")]
    InvalidAmount { token: String },

    /// A row's start year precedes the scenario start year
    #[error("start year {start_year} cannot be before the scenario start year {scenario_start_year}")]
    InvalidStartYear {
        start_year: i32,
        scenario_start_year: i32,
    },
}
