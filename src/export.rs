//! CSV export of a scenario preview table

use std::io::Write;

use crate::scenario::{Scenario, ScenarioPreview};

/// Write one row per horizon year: calendar year and income, expense and net
/// totals in dollars with two decimals.
pub fn write_preview_csv<W: Write>(
    writer: W,
    scenario: &Scenario,
    preview: &ScenarioPreview,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["year", "income", "expense", "net"])?;

    for offset in 0..scenario.years {
        let year = scenario.start_year + offset as i32;
        csv_writer.write_record([
            year.to_string(),
            cents_to_decimal(preview.incomes[offset]),
            cents_to_decimal(preview.expenses[offset]),
            cents_to_decimal(preview.net[offset]),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render cents as a plain decimal dollar string, e.g. `-40000` → `"-400.00"`
pub fn cents_to_decimal(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}
