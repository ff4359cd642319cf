//! Side totals and net across a scenario's cashflow rows

use super::indexing::{cents_nominal_to_real, cents_real_to_nominal};
use super::place::place_series_by_start_year;
use super::{Indexing, SeriesError};

/// A cashflow row reduced to what the engine needs: the yearly amounts, the
/// calendar year the series starts in, and the terms the amounts are
/// expressed in. Partitioning rows into income and expense sides is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSeries {
    pub amount_cents: Vec<i64>,
    pub start_year: i32,
    pub indexing: Indexing,
}

/// Sum one side's rows into per-year totals in `target_indexing` terms.
///
/// Each row is placed onto the scenario grid, coerced to the target indexing
/// when its native indexing differs, and accumulated element-wise. Row order
/// does not affect the result.
pub fn resolve_side_totals(
    flows: &[FlowSeries],
    scenario_start_year: i32,
    horizon_years: usize,
    inflation: f64,
    target_indexing: Indexing,
) -> Result<Vec<i64>, SeriesError> {
    let mut totals = vec![0i64; horizon_years];
    for flow in flows {
        let placed = place_series_by_start_year(
            &flow.amount_cents,
            scenario_start_year,
            horizon_years,
            flow.start_year,
        )?;
        let coerced = if flow.indexing == target_indexing {
            placed
        } else {
            match target_indexing {
                Indexing::Real => cents_nominal_to_real(&placed, inflation),
                Indexing::Nominal => cents_real_to_nominal(&placed, inflation),
            }
        };
        for (total, amount) in totals.iter_mut().zip(&coerced) {
            *total += amount;
        }
    }
    Ok(totals)
}

/// Per-year net: income totals minus expense totals, both in
/// `target_indexing` terms. Net years may be negative.
pub fn resolve_net_cents(
    incomes: &[FlowSeries],
    expenses: &[FlowSeries],
    scenario_start_year: i32,
    horizon_years: usize,
    inflation: f64,
    target_indexing: Indexing,
) -> Result<Vec<i64>, SeriesError> {
    let income_totals = resolve_side_totals(
        incomes,
        scenario_start_year,
        horizon_years,
        inflation,
        target_indexing,
    )?;
    let expense_totals = resolve_side_totals(
        expenses,
        scenario_start_year,
        horizon_years,
        inflation,
        target_indexing,
    )?;

    Ok(income_totals
        .iter()
        .zip(&expense_totals)
        .map(|(income, expense)| income - expense)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_START_YEAR: i32 = 2025;
    const HORIZON_YEARS: usize = 4;
    const INFLATION: f64 = 0.03;

    fn salaries() -> FlowSeries {
        FlowSeries {
            amount_cents: vec![100_000, 102_000, 104_040],
            start_year: 2025,
            indexing: Indexing::Nominal,
        }
    }

    fn groceries() -> FlowSeries {
        FlowSeries {
            amount_cents: vec![30_000, 30_900, 31_827],
            start_year: 2025,
            indexing: Indexing::Nominal,
        }
    }

    fn rent() -> FlowSeries {
        FlowSeries {
            amount_cents: vec![40_000, 40_000, 40_000],
            start_year: 2026,
            indexing: Indexing::Real,
        }
    }

    #[test]
    fn test_coerces_and_aligns_mixed_rows_before_summing() {
        let income_totals = resolve_side_totals(
            &[salaries()],
            SCENARIO_START_YEAR,
            HORIZON_YEARS,
            INFLATION,
            Indexing::Real,
        )
        .unwrap();
        let expense_totals = resolve_side_totals(
            &[groceries(), rent()],
            SCENARIO_START_YEAR,
            HORIZON_YEARS,
            INFLATION,
            Indexing::Real,
        )
        .unwrap();
        let net = resolve_net_cents(
            &[salaries()],
            &[groceries(), rent()],
            SCENARIO_START_YEAR,
            HORIZON_YEARS,
            INFLATION,
            Indexing::Real,
        )
        .unwrap();

        assert_eq!(income_totals, vec![100_000, 99_029, 98_068, 0]);
        assert_eq!(expense_totals, vec![30_000, 70_000, 70_000, 40_000]);
        assert_eq!(net, vec![70_000, 29_029, 28_068, -40_000]);
    }

    #[test]
    fn test_row_order_does_not_change_totals() {
        let forward = resolve_side_totals(
            &[groceries(), rent()],
            SCENARIO_START_YEAR,
            HORIZON_YEARS,
            INFLATION,
            Indexing::Real,
        )
        .unwrap();
        let reversed = resolve_side_totals(
            &[rent(), groceries()],
            SCENARIO_START_YEAR,
            HORIZON_YEARS,
            INFLATION,
            Indexing::Real,
        )
        .unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_matching_indexing_passes_through_unconverted() {
        let totals = resolve_side_totals(
            &[salaries()],
            SCENARIO_START_YEAR,
            HORIZON_YEARS,
            INFLATION,
            Indexing::Nominal,
        )
        .unwrap();
        assert_eq!(totals, vec![100_000, 102_000, 104_040, 0]);
    }

    #[test]
    fn test_empty_sides_yield_zero_totals() {
        let net = resolve_net_cents(
            &[],
            &[],
            SCENARIO_START_YEAR,
            HORIZON_YEARS,
            INFLATION,
            Indexing::Real,
        )
        .unwrap();
        assert_eq!(net, vec![0; HORIZON_YEARS]);
    }

    #[test]
    fn test_bad_row_start_year_propagates() {
        let early = FlowSeries {
            amount_cents: vec![1],
            start_year: 2024,
            indexing: Indexing::Nominal,
        };
        let err = resolve_side_totals(
            &[early],
            SCENARIO_START_YEAR,
            HORIZON_YEARS,
            INFLATION,
            Indexing::Real,
        )
        .unwrap_err();
        assert!(matches!(err, SeriesError::InvalidStartYear { .. }));
    }
}
