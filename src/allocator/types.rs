use crate::model::Day;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Missing,
    Duplicate,
    OutOfRange,
}

/// Écart à la règle "chaque période 1..=N exactement une fois par (enseignant, jour)".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageIssue {
    pub teacher: String,
    pub day: Day,
    pub period: u8,
    pub kind: IssueKind,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::Missing => "missing",
            IssueKind::Duplicate => "duplicate",
            IssueKind::OutOfRange => "out_of_range",
        }
    }
}
