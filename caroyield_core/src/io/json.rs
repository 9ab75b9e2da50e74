//! JSON save and load of yield tables
//!
//! The table serializes as a plain array of row records, so the files are
//! readable by any downstream tooling.
use std::fs;
use std::path::Path;

use crate::io::IoError;
use crate::sweep::YieldTable;

/// Serialize the table to pretty-printed JSON at `path`
pub fn save_yield_table<P: AsRef<Path>>(table: &YieldTable, path: P) -> Result<(), IoError> {
    let json = serde_json::to_string_pretty(table)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a table back from a JSON file at `path`
pub fn load_yield_table<P: AsRef<Path>>(path: P) -> Result<YieldTable, IoError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::SweepPoint;

    #[test]
    fn round_trip_through_file() {
        let table = YieldTable::new(vec![
            SweepPoint {
                glucose_grams: 0.,
                oleic_acid_grams: 1.,
                beta_carotene_grams: 0.1,
                co2_grams: 0.05,
            },
            SweepPoint {
                glucose_grams: 1.,
                oleic_acid_grams: 0.,
                beta_carotene_grams: 0.9,
                co2_grams: 0.4,
            },
        ]);
        let path = std::env::temp_dir().join("caroyield_json_round_trip.json");
        save_yield_table(&table, &path).unwrap();
        let reloaded = load_yield_table(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(reloaded, table);
    }

    #[test]
    fn table_serializes_as_record_array() {
        let table = YieldTable::new(vec![SweepPoint {
            glucose_grams: 0.5,
            oleic_acid_grams: 0.5,
            beta_carotene_grams: 0.2,
            co2_grams: 0.1,
        }]);
        let json = serde_json::to_value(&table).unwrap();
        assert!(json.is_array());
        assert!((json[0]["g_glucose"].as_f64().unwrap() - 0.5).abs() < 1e-12);
        assert!((json[0]["g_co2"].as_f64().unwrap() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn load_missing_file_fails() {
        let path = std::env::temp_dir().join("caroyield_does_not_exist.json");
        assert!(matches!(
            load_yield_table(&path),
            Err(IoError::File(_))
        ));
    }
}
