use super::{ExportError, COLUMNS};
use crate::model::{PeriodRecord, Timetable};
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Export JSON : emploi du temps horodaté.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableExport {
    pub generated_at: DateTime<Utc>,
    pub records: Vec<PeriodRecord>,
}

/// Export CSV, mêmes colonnes que la feuille xlsx.
pub fn export_timetable_csv<P: AsRef<Path>>(path: P, timetable: &Timetable) -> Result<(), ExportError> {
    let mut w = WriterBuilder::new().has_headers(false).from_path(path)?;
    w.write_record(COLUMNS)?;
    for rec in timetable {
        let period = rec.period.to_string();
        w.write_record([
            rec.day.name(),
            period.as_str(),
            rec.teacher.as_str(),
            rec.subject.as_str(),
            rec.room.as_str(),
            rec.kind.label(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

pub fn export_timetable_json<P: AsRef<Path>>(
    path: P,
    timetable: &Timetable,
    generated_at: DateTime<Utc>,
) -> Result<(), ExportError> {
    let export = TimetableExport {
        generated_at,
        records: timetable.records.clone(),
    };
    let s = serde_json::to_string_pretty(&export)?;
    fs::write(path, s)?;
    Ok(())
}

pub fn import_timetable_json<P: AsRef<Path>>(path: P) -> Result<TimetableExport, ExportError> {
    let data = fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}
