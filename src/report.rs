// src/report.rs
// Console tables: full roster, students per year, students per advisor.
use std::fmt;

use crate::config::consts::LIST_JOIN;
use crate::core::sanitize::surname;
use crate::model::{Student, YearKey};
use crate::roster::Rosters;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub footer: Option<Vec<String>>,
}

impl Table {
    pub fn new(title: &str, headers: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            footer: None,
        }
    }

    fn widths(&self) -> Vec<usize> {
        let mut w: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in self.rows.iter().chain(self.footer.iter()) {
            for (i, cell) in row.iter().enumerate() {
                let n = cell.chars().count();
                match w.get_mut(i) {
                    Some(cur) => *cur = (*cur).max(n),
                    None => w.push(n),
                }
            }
        }
        w
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let line = widths
        .iter()
        .enumerate()
        .map(|(i, w)| format!("{:<w$}", cells.get(i).map(String::as_str).unwrap_or(""), w = *w))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        let rule = "-".repeat(rule_len);

        writeln!(f, "{}", self.title)?;
        write_line(f, &self.headers, &widths)?;
        writeln!(f, "{rule}")?;
        for row in &self.rows {
            write_line(f, row, &widths)?;
        }
        if let Some(footer) = &self.footer {
            writeln!(f, "{rule}")?;
            write_line(f, footer, &widths)?;
        }
        Ok(())
    }
}

/// Every student, years ascending, last name ascending within a year.
pub fn roster_order(rosters: &Rosters) -> Vec<&Student> {
    let mut years: Vec<&YearKey> = rosters.by_year.keys().collect();
    years.sort();

    let mut out = Vec::with_capacity(rosters.student_count());
    for year in years {
        if let Some(list) = rosters.by_year.get(year) {
            let mut sorted: Vec<&Student> = list.iter().collect();
            sorted.sort_by(|a, b| a.last_name().cmp(b.last_name()));
            out.extend(sorted);
        }
    }
    out
}

pub fn roster_table(rosters: &Rosters) -> Table {
    let mut t = Table::new("Roster", &["Name", "Email", "Year", "Majors", "Minors", "Advisor"]);
    t.rows = roster_order(rosters)
        .into_iter()
        .map(|st| {
            vec![
                st.display_name(),
                st.email().to_string(),
                st.year().to_string(),
                st.majors().join(LIST_JOIN),
                st.minors().join(LIST_JOIN),
                st.advisor().to_string(),
            ]
        })
        .collect();
    t
}

pub fn year_counts(rosters: &Rosters) -> Vec<(YearKey, usize)> {
    let mut counts: Vec<(YearKey, usize)> =
        rosters.by_year.iter().map(|(year, list)| (year.clone(), list.len())).collect();
    counts.sort_by(|a, b| a.0.cmp(&b.0));
    counts
}

/// Sorted by advisor surname (text before the first comma); ties by full name.
pub fn advisor_counts(rosters: &Rosters) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> =
        rosters.by_advisor.iter().map(|(adv, list)| (adv.clone(), list.len())).collect();
    counts.sort_by(|a, b| surname(&a.0).cmp(surname(&b.0)).then_with(|| a.0.cmp(&b.0)));
    counts
}

fn count_table<K: ToString>(title: &str, key_header: &str, counts: &[(K, usize)]) -> Table {
    let mut t = Table::new(title, &[key_header, "Students"]);
    t.rows = counts.iter().map(|(k, n)| vec![k.to_string(), n.to_string()]).collect();
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    t.footer = Some(vec!["Total".to_string(), total.to_string()]);
    t
}

pub fn year_count_table(rosters: &Rosters) -> Table {
    count_table("Students per year", "Year", &year_counts(rosters))
}

pub fn advisor_count_table(rosters: &Rosters) -> Table {
    count_table("Students per advisor", "Advisor", &advisor_counts(rosters))
}

/// The three tables, in display order.
pub fn all_tables(rosters: &Rosters) -> [Table; 3] {
    [roster_table(rosters), year_count_table(rosters), advisor_count_table(rosters)]
}
