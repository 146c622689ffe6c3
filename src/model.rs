use serde::{Deserialize, Serialize};
use std::fmt;

/// Matière affichée pour une période libre.
pub const LEISURE_SUBJECT: &str = "Leisure";
/// Salle affichée pour une période libre.
pub const LEISURE_ROOM: &str = "-";
/// Salle utilisée quand l'enseignant n'a déclaré aucune salle.
pub const NO_ROOM: &str = "No Room";

/// Jour ouvré de la semaine scolaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// Les cinq jours, dans l'ordre de la semaine.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Nature d'une période (colonne `Type` de l'export).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodKind {
    ClassTeacher,
    Normal,
    Leisure,
}

impl PeriodKind {
    pub fn label(self) -> &'static str {
        match self {
            PeriodKind::ClassTeacher => "Class Teacher",
            PeriodKind::Normal => "Normal",
            PeriodKind::Leisure => "Leisure",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Un enseignant, la matière qu'il enseigne et les salles qu'il fréquente.
///
/// L'ordre des salles compte : la première sert de salle de classe
/// (période de professeur principal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherAssignment {
    pub teacher: String,
    pub subject: String,
    #[serde(default)]
    pub rooms: Vec<String>,
}

impl TeacherAssignment {
    pub fn new<T: Into<String>, S: Into<String>>(teacher: T, subject: S, rooms: Vec<String>) -> Self {
        Self {
            teacher: teacher.into(),
            subject: subject.into(),
            rooms,
        }
    }

    pub fn home_room(&self) -> Option<&str> {
        self.rooms.first().map(String::as_str)
    }
}

/// Une ligne de l'emploi du temps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRecord {
    pub day: Day,
    pub period: u8,
    pub teacher: String,
    pub subject: String,
    pub room: String,
    pub kind: PeriodKind,
}

impl PeriodRecord {
    pub fn leisure(day: Day, period: u8, teacher: &str) -> Self {
        Self {
            day,
            period,
            teacher: teacher.to_owned(),
            subject: LEISURE_SUBJECT.to_owned(),
            room: LEISURE_ROOM.to_owned(),
            kind: PeriodKind::Leisure,
        }
    }
}

/// Emploi du temps complet, stocké à plat.
///
/// Les lignes d'un même (enseignant, jour) sont contiguës et triées par période.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    pub records: Vec<PeriodRecord>,
}

impl Timetable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PeriodRecord> {
        self.records.iter()
    }

    pub fn extend_day(&mut self, slice: Vec<PeriodRecord>) {
        self.records.extend(slice);
    }

    /// Journées générées, une par affectation : blocs contigus de même
    /// (enseignant, jour), coupés quand la numérotation repart en arrière ou
    /// quand une autre matière enseignée apparaît.
    pub fn day_slices(&self) -> DaySlices<'_> {
        DaySlices {
            rest: &self.records,
        }
    }

    /// Enseignants dans l'ordre de première apparition.
    pub fn teachers(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for rec in &self.records {
            if !seen.contains(&rec.teacher.as_str()) {
                seen.push(&rec.teacher);
            }
        }
        seen
    }

    pub fn count_kind(&self, kind: PeriodKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }
}

/// Itérateur renvoyé par [`Timetable::day_slices`].
#[derive(Debug, Clone)]
pub struct DaySlices<'a> {
    rest: &'a [PeriodRecord],
}

impl<'a> Iterator for DaySlices<'a> {
    type Item = &'a [PeriodRecord];

    fn next(&mut self) -> Option<Self::Item> {
        let records = self.rest;
        let first = records.first()?;
        let mut taught = (first.kind != PeriodKind::Leisure).then_some(first.subject.as_str());

        let mut end = 1;
        while let Some(rec) = records.get(end) {
            let prev = &records[end - 1];
            if rec.teacher != first.teacher || rec.day != first.day || rec.period < prev.period {
                break;
            }
            if rec.kind != PeriodKind::Leisure {
                match taught {
                    Some(subject) if subject != rec.subject => break,
                    _ => taught = Some(rec.subject.as_str()),
                }
            }
            end += 1;
        }

        let (slice, rest) = records.split_at(end);
        self.rest = rest;
        Some(slice)
    }
}

impl<'a> IntoIterator for &'a Timetable {
    type Item = &'a PeriodRecord;
    type IntoIter = std::slice::Iter<'a, PeriodRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
