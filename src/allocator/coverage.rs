use super::{CoverageIssue, IssueKind};
use crate::model::{PeriodRecord, Timetable};
use crate::rules::Rules;

pub(super) fn verify(rules: &Rules, timetable: &Timetable) -> Vec<CoverageIssue> {
    let mut out = Vec::new();
    let n = usize::from(rules.periods_per_day);

    for slice in timetable.day_slices() {
        let first = &slice[0];
        let mut counts = vec![0usize; n + 1];

        for rec in slice {
            let idx = usize::from(rec.period);
            if idx == 0 || idx > n {
                out.push(issue(first, rec.period, IssueKind::OutOfRange));
                continue;
            }
            counts[idx] += 1;
        }

        for period in rules.periods() {
            let kind = match counts[usize::from(period)] {
                0 => IssueKind::Missing,
                1 => continue,
                _ => IssueKind::Duplicate,
            };
            out.push(issue(first, period, kind));
        }
    }

    out
}

fn issue(rec: &PeriodRecord, period: u8, kind: IssueKind) -> CoverageIssue {
    CoverageIssue {
        teacher: rec.teacher.clone(),
        day: rec.day,
        period,
        kind,
    }
}
