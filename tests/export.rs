#![forbid(unsafe_code)]
use std::fs;
use tempfile::tempdir;
use timetable::export::{self, SHEET_NAME};
use timetable::{Day, PeriodKind, PeriodRecord, Timetable};

fn sample() -> Timetable {
    let rec = |period: u8, subject: &str, room: &str, kind: PeriodKind| PeriodRecord {
        day: Day::Monday,
        period,
        teacher: "Asha".into(),
        subject: subject.into(),
        room: room.into(),
        kind,
    };
    Timetable {
        records: vec![
            rec(1, "Maths", "R1", PeriodKind::ClassTeacher),
            rec(2, "Maths", "R2", PeriodKind::Normal),
            PeriodRecord::leisure(Day::Monday, 3, "Asha"),
        ],
    }
}

#[test]
fn csv_export_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("timetable.csv");
    export::export_timetable_csv(&path, &sample()).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    insta::assert_snapshot!(text, @r"
    Day,Period,Teacher,Subject,Room,Type
    Monday,1,Asha,Maths,R1,Class Teacher
    Monday,2,Asha,Maths,R2,Normal
    Monday,3,Asha,Leisure,-,Leisure
    ");
}

#[test]
fn json_export_reloads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("timetable.json");
    let now = chrono::Utc::now();
    export::export_timetable_json(&path, &sample(), now).unwrap();

    let saved = export::import_timetable_json(&path).unwrap();
    assert_eq!(saved.generated_at, now);
    assert_eq!(saved.records, sample().records);
}

#[test]
fn xlsx_single_sheet_with_header() {
    let dir = tempdir().unwrap();
    let artifact = export::render_xlsx(&sample()).unwrap();
    let path = artifact.save(dir.path().join("out.xlsx")).unwrap();

    let book = umya_spreadsheet::reader::xlsx::read(&path).unwrap();
    assert_eq!(book.get_sheet_count(), 1);
    let sheet = book.get_sheet_by_name(SHEET_NAME).unwrap();
    let header: Vec<String> = (1..=6u32).map(|c| sheet.get_value((c, 1u32))).collect();
    assert_eq!(header, ["Day", "Period", "Teacher", "Subject", "Room", "Type"]);
    assert_eq!(sheet.get_value((6u32, 2u32)), "Class Teacher");
    assert_eq!(sheet.get_value((4u32, 4u32)), "Leisure");
    assert_eq!(sheet.get_highest_row(), 4);
}

#[test]
fn xlsx_header_and_rows_are_styled() {
    let dir = tempdir().unwrap();
    let artifact = export::render_xlsx(&sample()).unwrap();
    let path = artifact.save(dir.path().join("styled.xlsx")).unwrap();

    let book = umya_spreadsheet::reader::xlsx::read(&path).unwrap();
    let sheet = book.get_sheet_by_name(SHEET_NAME).unwrap();

    let fill = |col: u32, row: u32| {
        sheet
            .get_style((col, row))
            .get_background_color()
            .map(|c| c.get_argb().to_string())
    };
    let bold = |col: u32, row: u32| {
        sheet
            .get_style((col, row))
            .get_font()
            .is_some_and(|f| *f.get_bold())
    };

    for col in 1..=6u32 {
        assert_eq!(fill(col, 1).as_deref(), Some("FFDDEBF7"));
        assert!(bold(col, 1));
        let borders = sheet.get_style((col, 1u32)).get_borders().unwrap();
        assert_eq!(borders.get_bottom().get_border_style(), "thin");
    }

    // lignes 2..=4 : Class Teacher, Normal, Leisure
    for col in 1..=6u32 {
        assert_eq!(fill(col, 2).as_deref(), Some("FFC9DAF8"));
        assert_eq!(fill(col, 3).as_deref(), Some("FFFFFFFF"));
        assert_eq!(fill(col, 4).as_deref(), Some("FFF2F2F2"));
        assert!(!bold(col, 2));
    }
}
