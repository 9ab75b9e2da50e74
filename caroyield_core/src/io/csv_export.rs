//! CSV export of yield tables
//!
//! Column headers are `g_glucose`, `g_oleic_acid`, `g_beta_carotene`,
//! `g_co2`, one row per sweep point in sweep order.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use log::info;

use crate::io::IoError;
use crate::sweep::YieldTable;

/// Write the table as CSV to any writer
pub fn write_yield_table<W: Write>(table: &YieldTable, writer: W) -> Result<(), IoError> {
    let mut csv_writer = WriterBuilder::new().has_headers(true).from_writer(writer);
    for point in table.points() {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the table as a CSV file at `path`
pub fn save_yield_table<P: AsRef<Path>>(table: &YieldTable, path: P) -> Result<(), IoError> {
    let file = File::create(path.as_ref())?;
    write_yield_table(table, file)?;
    info!(
        "wrote {} sweep points to {}",
        table.len(),
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::SweepPoint;

    #[test]
    fn header_and_rows() {
        let table = YieldTable::new(vec![
            SweepPoint {
                glucose_grams: 0.,
                oleic_acid_grams: 1.,
                beta_carotene_grams: 0.1,
                co2_grams: 0.05,
            },
            SweepPoint {
                glucose_grams: 0.025,
                oleic_acid_grams: 0.975,
                beta_carotene_grams: 0.12,
                co2_grams: 0.06,
            },
        ]);
        let mut buf = Vec::new();
        write_yield_table(&table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("g_glucose,g_oleic_acid,g_beta_carotene,g_co2")
        );
        assert_eq!(lines.next(), Some("0.0,1.0,0.1,0.05"));
        assert_eq!(lines.next(), Some("0.025,0.975,0.12,0.06"));
        assert_eq!(lines.next(), None);
    }

    // The header row is only emitted together with the first record
    #[test]
    fn empty_table_writes_nothing() {
        let table = YieldTable::new(Vec::new());
        let mut buf = Vec::new();
        write_yield_table(&table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 0);
    }
}
