mod records;
pub mod style;
mod xlsx;

pub use records::{export_timetable_csv, export_timetable_json, import_timetable_json, TimetableExport};
pub use style::{row_style, RowStyle, HEADER_STYLE};
pub use xlsx::{render_xlsx, Artifact, FILE_NAME, SHEET_NAME, XLSX_MIME};

use thiserror::Error;

/// Colonnes exportées, dans l'ordre.
pub const COLUMNS: [&str; 6] = ["Day", "Period", "Teacher", "Subject", "Room", "Type"];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("spreadsheet rendering failed: {0}")]
    Xlsx(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("atomic rename failed: {0}")]
    Persist(#[from] tempfile::PersistError),
}
