// tests/export_csv.rs
//
// One CSV file per year, written to a scratch directory.
//
use std::fs;

use dcs_minors::config::consts::CSV_HEADERS;
use dcs_minors::config::layout::TableLayout;
use dcs_minors::export::write_year_files;
use dcs_minors::specs::minors::parse_document;

const CURRENT_PAGE: &str = include_str!("fixtures/minors_current.html");

fn read_records(path: &std::path::Path) -> Vec<csv::StringRecord> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    assert_eq!(rdr.headers().unwrap(), &csv::StringRecord::from(CSV_HEADERS.to_vec()));
    rdr.records().map(Result::unwrap).collect()
}

#[test]
fn one_file_per_year_and_every_student_written() {
    let rosters = parse_document(CURRENT_PAGE, &TableLayout::CURRENT).rosters;
    let dir = tempfile::tempdir().unwrap();

    let written = write_year_files(&rosters, dir.path()).unwrap();
    let names: Vec<String> =
        written.iter().map(|p| p.file_name().unwrap().to_string_lossy().into_owned()).collect();
    assert_eq!(names, ["dcs_minors_2025.csv", "dcs_minors_2026.csv", "dcs_minors_N_A.csv"]);

    let total: usize = written.iter().map(|p| read_records(p).len()).sum();
    assert_eq!(total, rosters.student_count());
}

#[test]
fn rows_sorted_by_last_name_with_lists_in_one_field() {
    let rosters = parse_document(CURRENT_PAGE, &TableLayout::CURRENT).rosters;
    let dir = tempfile::tempdir().unwrap();
    write_year_files(&rosters, dir.path()).unwrap();

    let recs = read_records(&dir.path().join("dcs_minors_2025.csv"));
    let lasts: Vec<&str> = recs.iter().map(|r| &r[0]).collect();
    let mut sorted = lasts.clone();
    sorted.sort();
    assert_eq!(lasts, sorted);

    let jane = &recs[0];
    assert_eq!(&jane[0], "Doe");
    assert_eq!(&jane[1], "Jane");
    assert_eq!(&jane[2], "jdoe@college.edu");
    assert_eq!(&jane[3], "2025");
    assert_eq!(&jane[4], "Computer Science");
    assert_eq!(&jane[5], "");
    assert_eq!(&jane[6], "LAB, QR");
    assert_eq!(&jane[7], "Smith, Bob");
}

#[test]
fn output_dir_is_created() {
    let rosters = parse_document(CURRENT_PAGE, &TableLayout::CURRENT).rosters;
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("exports").join("minors");

    let written = write_year_files(&rosters, &nested).unwrap();
    assert!(nested.is_dir());
    assert!(written.iter().all(|p| p.starts_with(&nested)));
}

#[test]
fn export_does_not_touch_rosters() {
    let rosters = parse_document(CURRENT_PAGE, &TableLayout::CURRENT).rosters;
    let before = rosters.clone();
    let dir = tempfile::tempdir().unwrap();
    write_year_files(&rosters, dir.path()).unwrap();
    assert_eq!(rosters, before);
}

#[test]
fn file_in_the_way_of_out_dir_is_an_error() {
    let rosters = parse_document(CURRENT_PAGE, &TableLayout::CURRENT).rosters;
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("out");
    fs::write(&blocker, "not a dir").unwrap();

    let err = write_year_files(&rosters, &blocker).unwrap_err();
    assert!(matches!(err, dcs_minors::Error::NotADirectory(_)));
}
