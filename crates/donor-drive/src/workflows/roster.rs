//! CSV roster import for the demonstration driver.
//!
//! Parses a `id,name,age,blood_type,contact` export into [`Donor`] values.
//! This is input convenience for the driver, not a storage layer: nothing
//! about the event itself is persisted.

use crate::workflows::donation::domain::Donor;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid roster row {line}: {reason}")]
    Row { line: u64, reason: String },
}

#[derive(Debug, Deserialize)]
struct RosterRecord {
    id: String,
    name: String,
    age: u32,
    blood_type: String,
    contact: String,
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Donor>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Donor>, RosterImportError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut donors = Vec::new();

        for (index, result) in csv_reader.deserialize().enumerate() {
            // Row 1 is the header, so data rows start at line 2.
            let line = index as u64 + 2;
            let record: RosterRecord = result?;

            if record.id.trim().is_empty() {
                return Err(RosterImportError::Row {
                    line,
                    reason: "donor id must not be empty".to_string(),
                });
            }
            if record.name.trim().is_empty() {
                return Err(RosterImportError::Row {
                    line,
                    reason: "donor name must not be empty".to_string(),
                });
            }

            donors.push(Donor::new(
                record.id,
                record.name,
                record.age,
                record.blood_type,
                record.contact,
            ));
        }

        Ok(donors)
    }
}
