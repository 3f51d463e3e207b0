// src/config/layout.rs
//! Versioned description of the roster table's column layout.
//!
//! The roster page has shipped with two different row shapes over time. Rather
//! than branching inside the extractor, each shape is a `TableLayout`: a minimum
//! cell count plus, for every logical field, the cell it lives in and how to read
//! it. The extractor only ever talks to a layout.
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How to turn a `<td>` into a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extract {
    /// All descendant text, whitespace-collapsed.
    Text,
    /// Like `Text`, but descendants marked not-visible are dropped first.
    VisibleText,
    /// Attribute `attr` of the first element matching `selector` inside the cell,
    /// falling back to the cell's visible text when missing or blank.
    PreferAttr { selector: &'static str, attr: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub cell: usize,
    pub strategy: Extract,
}

impl FieldSpec {
    pub const fn new(cell: usize, strategy: Extract) -> Self {
        Self { cell, strategy }
    }
}

/// Cell-scoped fields. Email is looked up across the whole row and has no entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldMap {
    pub name: FieldSpec,
    pub year: FieldSpec,
    pub majors: FieldSpec,
    pub minors: FieldSpec,
    pub gecs: FieldSpec,
    pub advisor: FieldSpec,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutVersion {
    /// Seven cells: Name, Email, Year, Majors, Minors, GECs, Advisor.
    Legacy,
    /// Ten cells: a leading photo/selection cell, the seven fields, two trailing cells.
    #[default]
    Current,
}

impl LayoutVersion {
    pub fn layout(self) -> TableLayout {
        match self {
            LayoutVersion::Legacy => TableLayout::LEGACY,
            LayoutVersion::Current => TableLayout::CURRENT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutVersion::Legacy => "legacy",
            LayoutVersion::Current => "current",
        }
    }
}

impl fmt::Display for LayoutVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "7" => Ok(LayoutVersion::Legacy),
            "current" | "10" => Ok(LayoutVersion::Current),
            _ => Err(Error::UnknownLayout(s.to_string())),
        }
    }
}

const NAME_LINK: Extract = Extract::PreferAttr { selector: "a", attr: "title" };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableLayout {
    pub version: LayoutVersion,
    /// Rows with fewer `<td>` cells than this are not student rows.
    pub min_cells: usize,
    pub fields: FieldMap,
}

impl TableLayout {
    pub const LEGACY: TableLayout = TableLayout {
        version: LayoutVersion::Legacy,
        min_cells: 7,
        fields: FieldMap {
            name: FieldSpec::new(0, NAME_LINK),
            year: FieldSpec::new(2, Extract::Text),
            majors: FieldSpec::new(3, Extract::Text),
            minors: FieldSpec::new(4, Extract::Text),
            gecs: FieldSpec::new(5, Extract::Text),
            advisor: FieldSpec::new(6, Extract::VisibleText),
        },
    };

    pub const CURRENT: TableLayout = TableLayout {
        version: LayoutVersion::Current,
        min_cells: 10,
        fields: FieldMap {
            name: FieldSpec::new(1, NAME_LINK),
            year: FieldSpec::new(3, Extract::Text),
            majors: FieldSpec::new(4, Extract::Text),
            minors: FieldSpec::new(5, Extract::Text),
            gecs: FieldSpec::new(6, Extract::Text),
            advisor: FieldSpec::new(7, Extract::VisibleText),
        },
    };

    /// Largest cell index any field refers to.
    pub fn max_cell(&self) -> usize {
        let f = &self.fields;
        [f.name, f.year, f.majors, f.minors, f.gecs, f.advisor]
            .iter()
            .map(|spec| spec.cell)
            .max()
            .unwrap_or(0)
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        LayoutVersion::default().layout()
    }
}
