//! Nominal/real conversion of aligned cent series at constant inflation
//!
//! Index `i` of an aligned series is `i` years past the scenario start, so
//! the conversion factor for that bucket is `(1 + inflation)^i`. The two
//! directions are approximate inverses: integer rounding at each step means
//! round trips are not bit-for-bit, but the drift stays under a cent per step
//! for planning-typical rates and magnitudes.

/// Deflate a nominal series into constant scenario-start dollars.
///
/// A zero inflation factor (inflation below -100%, outside the valid domain)
/// passes the amount through unchanged rather than dividing by zero.
pub fn cents_nominal_to_real(arr_cents: &[i64], inflation: f64) -> Vec<i64> {
    arr_cents
        .iter()
        .enumerate()
        .map(|(year_index, &amount)| {
            let inflation_factor = (1.0 + inflation).powi(year_index as i32);
            if inflation_factor == 0.0 {
                amount
            } else {
                (amount as f64 / inflation_factor).round() as i64
            }
        })
        .collect()
}

/// Inflate a real series into then-current dollars.
pub fn cents_real_to_nominal(arr_cents: &[i64], inflation: f64) -> Vec<i64> {
    arr_cents
        .iter()
        .enumerate()
        .map(|(year_index, &amount)| {
            let inflation_factor = (1.0 + inflation).powi(year_index as i32);
            (amount as f64 * inflation_factor).round() as i64
        })
        .collect()
}
