//! CSV export of cumulative correction tables

use crate::error::{ForecastError, Result};
use correction_math::CumulativeIndexTable;

/// Column headers for the months, January first
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Render a table as CSV with one row per year and one column per month.
///
/// Months the table does not cover are left blank.
pub fn correction_table_csv(table: &CumulativeIndexTable) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["Ano"];
    header.extend(MONTH_NAMES);
    writer.write_record(&header)?;

    for (year, cells) in table.yearly_rows() {
        let mut record = Vec::with_capacity(13);
        record.push(year.to_string());
        record.extend(
            cells
                .iter()
                .map(|cell| cell.map(|v| v.to_string()).unwrap_or_default()),
        );
        writer.write_record(&record)?;
    }

    writer
        .into_inner()
        .map_err(|e| ForecastError::CsvError(e.to_string()))
}
