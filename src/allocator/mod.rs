mod coverage;
mod day;
mod types;

pub use types::{CoverageIssue, IssueKind};

use crate::model::{Day, PeriodRecord, TeacherAssignment, Timetable};
use crate::rules::Rules;
use rand::Rng;

/// Allocateur : répartit les périodes de chaque enseignant, jour par jour.
///
/// Le générateur aléatoire est fourni par l'appelant ; une graine fixe donne
/// un résultat reproductible.
#[derive(Debug, Clone, Default)]
pub struct Allocator {
    rules: Rules,
}

impl Allocator {
    pub fn new(rules: Rules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Une journée complète (périodes 1..=N), triée par période.
    pub fn allocate_day<R: Rng + ?Sized>(
        &self,
        assignment: &TeacherAssignment,
        day: Day,
        rng: &mut R,
    ) -> Vec<PeriodRecord> {
        day::allocate_day(&self.rules, assignment, day, rng)
    }

    /// Les cinq journées d'une affectation, dans l'ordre de la semaine.
    pub fn allocate_week<R: Rng + ?Sized>(
        &self,
        assignment: &TeacherAssignment,
        rng: &mut R,
    ) -> Vec<PeriodRecord> {
        Day::ALL
            .into_iter()
            .flat_map(|day| self.allocate_day(assignment, day, rng))
            .collect()
    }

    /// Emploi du temps complet : matières dans l'ordre de première apparition,
    /// puis enseignants dans l'ordre de saisie.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        assignments: &[TeacherAssignment],
        rng: &mut R,
    ) -> Timetable {
        let mut subjects: Vec<&str> = Vec::new();
        for a in assignments {
            if !subjects.contains(&a.subject.as_str()) {
                subjects.push(&a.subject);
            }
        }

        let mut timetable = Timetable::default();
        for subject in subjects {
            for assignment in assignments.iter().filter(|a| a.subject == subject) {
                for day in Day::ALL {
                    let slice = self.allocate_day(assignment, day, rng);
                    tracing::debug!(
                        teacher = %assignment.teacher,
                        subject,
                        %day,
                        records = slice.len(),
                        "day allocated"
                    );
                    timetable.extend_day(slice);
                }
            }
        }
        tracing::info!(
            assignments = assignments.len(),
            records = timetable.len(),
            "timetable generated"
        );
        timetable
    }

    /// Vérifie la couverture de chaque journée générée.
    pub fn verify(&self, timetable: &Timetable) -> Vec<CoverageIssue> {
        coverage::verify(&self.rules, timetable)
    }
}
