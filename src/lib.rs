#![forbid(unsafe_code)]
//! Timetable — génération d'emplois du temps hebdomadaires d'enseignants.
//!
//! - Saisie libre normalisée (CSV/JSON).
//! - Allocation aléatoire par (enseignant, jour), générateur injecté.
//! - Export xlsx coloré, CSV et JSON.

pub mod allocator;
pub mod export;
pub mod input;
pub mod model;
pub mod rules;

pub use allocator::{Allocator, CoverageIssue, IssueKind};
pub use export::{render_xlsx, Artifact, ExportError};
pub use input::{collect_assignments, split_list, FormEntry};
pub use model::{Day, PeriodKind, PeriodRecord, TeacherAssignment, Timetable};
pub use rules::{Rules, SUBJECTS};
