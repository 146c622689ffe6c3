use crate::model::{Day, PeriodKind, PeriodRecord, TeacherAssignment, NO_ROOM};
use crate::rules::Rules;
use rand::prelude::IndexedRandom;
use rand::Rng;

pub(super) fn allocate_day<R: Rng + ?Sized>(
    rules: &Rules,
    assignment: &TeacherAssignment,
    day: Day,
    rng: &mut R,
) -> Vec<PeriodRecord> {
    let subject = assignment.subject.as_str();
    let mut available: Vec<u8> = rules.periods().collect();
    let mut slice = Vec::with_capacity(available.len());

    if rules.is_class_teacher_eligible(subject) {
        if let Some(room) = assignment.home_room() {
            slice.push(record(assignment, day, 1, room, PeriodKind::ClassTeacher));
            available.retain(|p| *p != 1);
        }
    }

    let needed = rules.teaching_quota(subject).min(available.len());
    let candidates: Vec<u8> = available.choose_multiple(rng, needed).copied().collect();

    for period in candidates {
        // période interdite : abandonnée, pas de nouveau tirage
        if rules.is_blocked(subject, period) {
            continue;
        }
        let room = assignment
            .rooms
            .choose(rng)
            .map_or(NO_ROOM, String::as_str);
        slice.push(record(assignment, day, period, room, PeriodKind::Normal));
    }

    let taken: Vec<u8> = slice.iter().map(|r| r.period).collect();
    for period in rules.periods().filter(|p| !taken.contains(p)) {
        slice.push(PeriodRecord::leisure(day, period, &assignment.teacher));
    }

    slice.sort_by_key(|r| r.period);
    slice
}

fn record(
    assignment: &TeacherAssignment,
    day: Day,
    period: u8,
    room: &str,
    kind: PeriodKind,
) -> PeriodRecord {
    PeriodRecord {
        day,
        period,
        teacher: assignment.teacher.clone(),
        subject: assignment.subject.clone(),
        room: room.to_owned(),
        kind,
    }
}
