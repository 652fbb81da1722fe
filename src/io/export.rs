//! CSV export of one estimate.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::model::Estimate;
use crate::report::format::group_thousands;

/// Default report file name.
pub const FILE_NAME: &str = "informe.csv";
/// MIME type of the report.
pub const MIME_TYPE: &str = "text/csv";
/// Report column header.
const HEADER: [&str; 2] = ["kpi", "valor"];

/// Exports an estimate to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(estimate: &Estimate, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(estimate, buf)
}

/// Writes the KPI report as CSV to any writer.
///
/// Emits the `kpi,valor` header followed by six rows. Energy, money and
/// emissions are rounded integers with thousands grouping (and therefore
/// quoted); capacity and payback carry two decimals, and an absent payback
/// is written as an empty field.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(estimate: &Estimate, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER)?;
    for (kpi, value) in rows(estimate) {
        wtr.write_record([kpi, value.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Renders the report into an in-memory string.
///
/// # Errors
///
/// Returns an `io::Error` if serialization fails.
pub fn to_csv_string(estimate: &Estimate) -> io::Result<String> {
    let mut buf = Vec::new();
    write_csv(estimate, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn rows(e: &Estimate) -> [(&'static str, String); 6] {
    [
        ("Consumo anual", group_thousands(e.annual_consumption_kwh)),
        ("Ahorro kWh", group_thousands(e.potential_savings_kwh)),
        ("FV kWp", format!("{:.2}", e.installed_kwp)),
        ("Inversión €", group_thousands(e.investment_eur)),
        (
            "Payback años",
            e.payback_years.map(|y| format!("{y:.2}")).unwrap_or_default(),
        ),
        ("CO2 kg/a", group_thousands(e.co2_avoided_kg)),
    ]
}
