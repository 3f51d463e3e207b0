// src/specs/minors.rs
//! Roster table → `Student`s.
//!
//! Row shape comes from a `TableLayout`. Extraction is best-effort per row:
//! a row that doesn't look like a student is skipped and counted, never
//! reported as an error.
use log::debug;
use scraper::{ElementRef, Html};

use crate::config::layout::{Extract, FieldSpec, TableLayout};
use crate::core::html;
use crate::core::sanitize::split_list;
use crate::model::{Student, YearKey};
use crate::roster::Rosters;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer `<td>`s than the layout needs.
    TooFewCells,
    /// Name cell empty or not "Last, First".
    NotAName,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowOutcome {
    Student(Student),
    Skip(SkipReason),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkipCounts {
    pub too_few_cells: usize,
    pub not_a_name: usize,
}

impl SkipCounts {
    pub fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::TooFewCells => self.too_few_cells += 1,
            SkipReason::NotAName => self.not_a_name += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.too_few_cells + self.not_a_name
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub rosters: Rosters,
    pub skipped: SkipCounts,
}

/// Parse raw HTML and extract.
pub fn parse_document(html_text: &str, layout: &TableLayout) -> Extraction {
    let doc = Html::parse_document(html_text);
    extract(&doc, layout)
}

/// Groupings only.
pub fn parse_minors(doc: &Html, layout: &TableLayout) -> Rosters {
    extract(doc, layout).rosters
}

pub fn extract(doc: &Html, layout: &TableLayout) -> Extraction {
    let mut out = Extraction::default();

    // first row is the header
    for row in html::rows(doc).skip(1) {
        match extract_row(row, layout) {
            RowOutcome::Student(st) => out.rosters.insert(st),
            RowOutcome::Skip(reason) => out.skipped.record(reason),
        }
    }

    debug!(
        "Minors({}): {} students, skipped {} short rows and {} non-name rows",
        layout.version,
        out.rosters.student_count(),
        out.skipped.too_few_cells,
        out.skipped.not_a_name,
    );
    out
}

pub fn extract_row(row: ElementRef<'_>, layout: &TableLayout) -> RowOutcome {
    let cells = html::cells(row);
    if cells.len() < layout.min_cells {
        return RowOutcome::Skip(SkipReason::TooFewCells);
    }

    let f = &layout.fields;
    let read = |spec: FieldSpec| -> String {
        cells.get(spec.cell).map(|cell| read_cell(*cell, spec.strategy)).unwrap_or_default()
    };

    let name = read(f.name);
    if name.is_empty() || !name.contains(',') {
        return RowOutcome::Skip(SkipReason::NotAName);
    }

    let email = html::mailto_address(row).unwrap_or_default();
    let year = YearKey::parse(&read(f.year));
    let majors = split_list(&read(f.majors));
    let minors = split_list(&read(f.minors));
    let gecs = split_list(&read(f.gecs));
    let advisor = read(f.advisor);

    RowOutcome::Student(Student::new(name, email, year, majors, minors, gecs, advisor))
}

fn read_cell(cell: ElementRef<'_>, strategy: Extract) -> String {
    match strategy {
        Extract::Text => html::text(cell),
        Extract::VisibleText => html::visible_text(cell),
        Extract::PreferAttr { selector, attr } => {
            html::attr_of_first(cell, selector, attr).unwrap_or_else(|| html::visible_text(cell))
        }
    }
}
