// src/export.rs
// CSV projection of the year grouping: one file per year, 8 fixed columns.
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::config::consts::*;
use crate::core::sanitize::sanitize_file_stem;
use crate::error::Result;
use crate::file::ensure_directory;
use crate::model::{Student, YearKey};
use crate::roster::Rosters;

pub type CsvRow = [String; 8];

/// Students sorted by last name (stable: ties keep table order).
pub fn sorted_by_last_name(students: &[Student]) -> Vec<&Student> {
    let mut out: Vec<&Student> = students.iter().collect();
    out.sort_by(|a, b| a.last_name().cmp(b.last_name()));
    out
}

pub fn csv_row(st: &Student) -> CsvRow {
    [
        st.last_name().to_string(),
        st.first_name().to_string(),
        st.email().to_string(),
        st.year().to_string(),
        st.majors().join(LIST_JOIN),
        st.minors().join(LIST_JOIN),
        st.gecs().join(LIST_JOIN),
        st.advisor().to_string(),
    ]
}

/// Data rows for one year's file, in output order.
pub fn year_rows(students: &[Student]) -> Vec<CsvRow> {
    sorted_by_last_name(students).into_iter().map(csv_row).collect()
}

/// Header plus `rows`, written to any writer.
pub fn write_rows<W: Write>(w: W, rows: &[CsvRow]) -> Result<()> {
    let mut wtr = ::csv::Writer::from_writer(w);
    wtr.write_record(CSV_HEADERS)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(students: &[Student]) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_rows(&mut buf, &year_rows(students))?;
    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/// `dcs_minors_<year>`, without extension.
pub fn year_file_stem(year: &YearKey) -> String {
    let stem = sanitize_file_stem(&year.to_string());
    let stem = if stem.is_empty() { CSV_UNKNOWN_YEAR_STEM.to_string() } else { stem };
    format!("{CSV_FILE_PREFIX}{stem}")
}

/// Two labels can sanitize to the same stem ("N/A", "N A"); later ones get " (N)".
fn resolve_year_filename(dir: &Path, stem: &str, seen: &mut HashMap<String, usize>) -> PathBuf {
    let count = seen.entry(stem.to_string()).or_insert(0);
    let filename = if *count == 0 {
        format!("{stem}.{CSV_FILE_EXT}")
    } else {
        format!("{stem} ({}).{CSV_FILE_EXT}", *count + 1)
    };
    *count += 1;
    dir.join(filename)
}

/// Write one file per year into `out_dir` (created if missing), in first-seen
/// year order. Returns the paths written.
pub fn write_year_files(rosters: &Rosters, out_dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_directory(out_dir)?;

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(rosters.by_year.len());

    for (year, students) in rosters.by_year.iter() {
        let path = resolve_year_filename(out_dir, &year_file_stem(year), &mut seen);
        let mut out = BufWriter::new(File::create(&path)?);
        write_rows(&mut out, &year_rows(students))?;
        out.flush()?;

        info!("Wrote {} rows for year {} to {}", students.len(), year, path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn st(name: &str, majors: &[&str]) -> Student {
        Student::new(
            name,
            "",
            YearKey::Int(2025),
            majors.iter().map(|m| m.to_string()).collect(),
            vec![],
            vec![],
            "Smith, Bob",
        )
    }

    #[test]
    fn rows_sorted_by_last_name_and_lists_joined() {
        let students = vec![st("Zed, Amy", &["CS"]), st("Doe, Jane", &["CS", "Math"]), st("Doe, Al", &[])];
        let rows = year_rows(&students);
        let lasts: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(lasts, ["Doe", "Doe", "Zed"]);
        // stable: Jane before Al
        assert_eq!(rows[0][1], "Jane");
        assert_eq!(rows[0][4], "CS, Math");
        assert_eq!(rows[1][4], "");
        assert_eq!(rows[0][3], "2025");
    }

    #[test]
    fn csv_string_has_header_and_quotes_lists() {
        let s = to_csv_string(&[st("Doe, Jane", &["CS", "Math"])]).unwrap();
        let mut lines = s.lines();
        assert_eq!(lines.next(), Some("Last Name,First Name,Email,Year,Majors,Minors,GECs,Advisor"));
        assert_eq!(lines.next(), Some(r#"Doe,Jane,,2025,"CS, Math",,,"Smith, Bob""#));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn file_stems() {
        assert_eq!(year_file_stem(&YearKey::Int(2025)), "dcs_minors_2025");
        assert_eq!(year_file_stem(&YearKey::Label("N/A".into())), "dcs_minors_N_A");
        assert_eq!(year_file_stem(&YearKey::Label("".into())), "dcs_minors_unknown");
    }

    #[test]
    fn colliding_stems_get_numbered() {
        let mut seen = HashMap::new();
        let dir = Path::new("out");
        let a = resolve_year_filename(dir, "dcs_minors_N_A", &mut seen);
        let b = resolve_year_filename(dir, "dcs_minors_N_A", &mut seen);
        assert_eq!(a, dir.join("dcs_minors_N_A.csv"));
        assert_eq!(b, dir.join("dcs_minors_N_A (2).csv"));
    }
}
