use crate::model::TeacherAssignment;
use anyhow::Context;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Découpe une saisie libre "a, b,,c" en `["a", "b", "c"]`.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Saisie brute d'une matière : enseignants puis salles par enseignant, en texte libre.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEntry {
    pub subject: String,
    #[serde(default)]
    pub teachers: String,
    /// enseignant -> "salle1, salle2"
    #[serde(default)]
    pub rooms: BTreeMap<String, String>,
}

/// Normalise les saisies en affectations, dans l'ordre matière puis enseignant.
///
/// Les noms vides sont ignorés ; un enseignant sans salles reçoit une liste vide.
pub fn collect_assignments(entries: &[FormEntry]) -> Vec<TeacherAssignment> {
    let mut out = Vec::new();
    for entry in entries {
        let subject = entry.subject.trim();
        if subject.is_empty() {
            continue;
        }
        for teacher in split_list(&entry.teachers) {
            let rooms = entry
                .rooms
                .iter()
                .find(|(name, _)| name.trim() == teacher)
                .map(|(_, raw)| split_list(raw))
                .unwrap_or_default();
            out.push(TeacherAssignment::new(teacher, subject, rooms));
        }
    }
    out
}

/// Import CSV: header `subject,teacher[,rooms]`, `rooms` en liste libre "R1, R2".
///
/// Les lignes sans matière ou sans enseignant sont ignorées.
pub fn import_assignments_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<TeacherAssignment>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {} of {}", line + 1, path.display()))?;
        let subject = rec.get(0).unwrap_or("").trim();
        let teacher = rec.get(1).unwrap_or("").trim();
        if subject.is_empty() || teacher.is_empty() {
            tracing::debug!(row = line + 1, "skipping row without subject or teacher");
            continue;
        }
        let rooms = rec.get(2).map(split_list).unwrap_or_default();
        out.push(TeacherAssignment::new(teacher, subject, rooms));
    }
    Ok(out)
}

/// Import JSON d'un tableau de [`FormEntry`].
pub fn import_form_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<TeacherAssignment>> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let entries: Vec<FormEntry> = serde_json::from_slice(&data)
        .with_context(|| format!("parsing form entries {}", path.display()))?;
    Ok(collect_assignments(&entries))
}

/// Choisit l'import selon l'extension (`.json`, sinon CSV).
pub fn import_assignments<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<TeacherAssignment>> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => import_form_json(path),
        _ => import_assignments_csv(path),
    }
}
