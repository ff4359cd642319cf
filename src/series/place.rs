//! Temporal placement of a row's series onto the scenario grid

use super::SeriesError;

/// Align `series` onto a zero-filled grid of `horizon_years` buckets.
///
/// Element `i` of `series` belongs to calendar year `start_year + i`; it is
/// written at offset `start_year + i - scenario_start_year`. Values falling
/// beyond the horizon are truncated, never wrapped or clamped. A start year
/// before the scenario start year is an error.
pub fn place_series_by_start_year(
    series: &[i64],
    scenario_start_year: i32,
    horizon_years: usize,
    start_year: i32,
) -> Result<Vec<i64>, SeriesError> {
    if start_year < scenario_start_year {
        return Err(SeriesError::InvalidStartYear {
            start_year,
            scenario_start_year,
        });
    }

    let mut result = vec![0i64; horizon_years];
    let base = (start_year - scenario_start_year) as usize;
    for (index, &amount) in series.iter().enumerate() {
        let offset = base + index;
        if offset >= horizon_years {
            break;
        }
        result[offset] = amount;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_START_YEAR: i32 = 2025;
    const HORIZON_YEARS: usize = 5;

    #[test]
    fn test_places_series_within_horizon() {
        let result =
            place_series_by_start_year(&[1, 2, 3], SCENARIO_START_YEAR, HORIZON_YEARS, 2027)
                .unwrap();
        assert_eq!(result, vec![0, 0, 1, 2, 3]);
    }

    #[test]
    fn test_identity_when_row_starts_with_scenario() {
        let result =
            place_series_by_start_year(&[7, 8, 9], SCENARIO_START_YEAR, HORIZON_YEARS, 2025)
                .unwrap();
        assert_eq!(result, vec![7, 8, 9, 0, 0]);
    }

    #[test]
    fn test_truncates_values_beyond_horizon() {
        let result =
            place_series_by_start_year(&[1, 2, 3], SCENARIO_START_YEAR, HORIZON_YEARS, 2028)
                .unwrap();
        assert_eq!(result, vec![0, 0, 0, 1, 2]);
    }

    #[test]
    fn test_row_entirely_past_horizon_is_all_zero() {
        let result =
            place_series_by_start_year(&[1, 2], SCENARIO_START_YEAR, HORIZON_YEARS, 2031).unwrap();
        assert_eq!(result, vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_rejects_start_year_before_scenario() {
        let err = place_series_by_start_year(&[1, 2], SCENARIO_START_YEAR, HORIZON_YEARS, 2024)
            .unwrap_err();
        assert_eq!(
            err,
            SeriesError::InvalidStartYear {
                start_year: 2024,
                scenario_start_year: SCENARIO_START_YEAR,
            }
        );
    }

    #[test]
    fn test_empty_series_yields_zero_grid() {
        let result =
            place_series_by_start_year(&[], SCENARIO_START_YEAR, HORIZON_YEARS, 2026).unwrap();
        assert_eq!(result, vec![0; HORIZON_YEARS]);
    }
}
