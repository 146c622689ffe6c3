use super::style::{row_style, RowStyle, HEADER_STYLE};
use super::{ExportError, COLUMNS};
use crate::model::Timetable;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use umya_spreadsheet::{Border, Style};

pub const SHEET_NAME: &str = "Timetable";
pub const FILE_NAME: &str = "teacher_timetable.xlsx";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Fichier prêt à être téléchargé ou écrit sur disque.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Écrit le fichier de manière atomique. Si `target` est un répertoire
    /// (existant, ou terminé par un séparateur), le fichier y est créé sous
    /// son nom par défaut.
    pub fn save<P: AsRef<Path>>(&self, target: P) -> Result<PathBuf, ExportError> {
        let target = target.as_ref();
        let names_dir = target
            .as_os_str()
            .to_string_lossy()
            .ends_with(std::path::is_separator);
        let path = if names_dir || target.is_dir() {
            target.join(self.file_name)
        } else {
            target.to_path_buf()
        };
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let mut tmp = NamedTempFile::new_in(&parent)?;
        tmp.write_all(&self.bytes)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path)?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "artifact written");
        Ok(path)
    }
}

/// Rend l'emploi du temps en classeur xlsx : une feuille, un en-tête,
/// une ligne colorée par période.
pub fn render_xlsx(timetable: &Timetable) -> Result<Artifact, ExportError> {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    let sheet = book
        .new_sheet(SHEET_NAME)
        .map_err(|e| ExportError::Xlsx(e.to_string()))?;

    for (col, title) in (1u32..).zip(COLUMNS) {
        sheet.get_cell_mut((col, 1u32)).set_value(title);
        apply(sheet.get_style_mut((col, 1u32)), HEADER_STYLE);
    }

    for (row, rec) in (2u32..).zip(timetable.iter()) {
        sheet.get_cell_mut((1u32, row)).set_value(rec.day.name());
        sheet.get_cell_mut((2u32, row)).set_value_number(rec.period);
        sheet.get_cell_mut((3u32, row)).set_value(rec.teacher.as_str());
        sheet.get_cell_mut((4u32, row)).set_value(rec.subject.as_str());
        sheet.get_cell_mut((5u32, row)).set_value(rec.room.as_str());
        sheet.get_cell_mut((6u32, row)).set_value(rec.kind.label());

        let style = row_style(rec.kind);
        for col in 1..=COLUMNS.len() as u32 {
            apply(sheet.get_style_mut((col, row)), style);
        }
    }

    let mut buf = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(&book, &mut buf)
        .map_err(|e| ExportError::Xlsx(format!("{e:?}")))?;

    Ok(Artifact {
        file_name: FILE_NAME,
        mime_type: XLSX_MIME,
        bytes: buf.into_inner(),
    })
}

fn apply(style: &mut Style, row: RowStyle) {
    style.set_background_color(row.fill_argb);
    if row.bold {
        style.get_font_mut().set_bold(true);
    }
    if row.border {
        let borders = style.get_borders_mut();
        borders.get_top_mut().set_border_style(Border::BORDER_THIN);
        borders.get_bottom_mut().set_border_style(Border::BORDER_THIN);
        borders.get_left_mut().set_border_style(Border::BORDER_THIN);
        borders.get_right_mut().set_border_style(Border::BORDER_THIN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Day, PeriodRecord};

    #[test]
    fn artifact_metadata() {
        let tt = Timetable {
            records: vec![PeriodRecord::leisure(Day::Monday, 1, "Asha")],
        };
        let artifact = render_xlsx(&tt).unwrap();
        assert_eq!(artifact.file_name, "teacher_timetable.xlsx");
        assert_eq!(artifact.mime_type, XLSX_MIME);
        // archive zip
        assert_eq!(&artifact.bytes[..2], b"PK");
    }

    #[test]
    fn save_into_directory_uses_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = render_xlsx(&Timetable::default()).unwrap();
        let path = artifact.save(dir.path()).unwrap();
        assert_eq!(path, dir.path().join(FILE_NAME));
        assert_eq!(fs::read(&path).unwrap(), artifact.bytes);
    }

    #[test]
    fn save_creates_missing_directory_with_trailing_separator() {
        let dir = tempfile::tempdir().unwrap();
        let target = format!("{}/exports/", dir.path().display());
        let artifact = render_xlsx(&Timetable::default()).unwrap();
        let path = artifact.save(&target).unwrap();
        assert_eq!(path, dir.path().join("exports").join(FILE_NAME));
        assert!(path.is_file());
    }
}
