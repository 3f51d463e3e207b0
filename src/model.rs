// src/model.rs
use std::cmp::Ordering;
use std::fmt;

use crate::core::sanitize::{given_name, is_all_digits, surname};

/// Graduation year, or whatever cohort label the page shows instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum YearKey {
    Int(u32),
    Label(String),
}

impl YearKey {
    /// All-digit text becomes `Int`; anything else (including digit strings
    /// too large for `u32`) stays a label.
    pub fn parse(text: &str) -> Self {
        let t = text.trim();
        if is_all_digits(t) {
            if let Ok(n) = t.parse() {
                return YearKey::Int(n);
            }
        }
        YearKey::Label(t.to_string())
    }
}

impl From<u32> for YearKey {
    fn from(n: u32) -> Self {
        YearKey::Int(n)
    }
}

impl From<&str> for YearKey {
    fn from(s: &str) -> Self {
        YearKey::parse(s)
    }
}

/// Numeric years first, ascending; labels after them, alphabetically.
impl Ord for YearKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (YearKey::Int(a), YearKey::Int(b)) => a.cmp(b),
            (YearKey::Int(_), YearKey::Label(_)) => Ordering::Less,
            (YearKey::Label(_), YearKey::Int(_)) => Ordering::Greater,
            (YearKey::Label(a), YearKey::Label(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for YearKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearKey::Int(n) => write!(f, "{n}"),
            YearKey::Label(s) => f.write_str(s),
        }
    }
}

/// One roster row. Built once by the extractor, never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Student {
    name: String,
    email: String,
    year: YearKey,
    majors: Vec<String>,
    minors: Vec<String>,
    gecs: Vec<String>,
    advisor: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        year: YearKey,
        majors: Vec<String>,
        minors: Vec<String>,
        gecs: Vec<String>,
        advisor: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            year,
            majors,
            minors,
            gecs,
            advisor: advisor.into(),
        }
    }

    /// "Last, First"
    pub fn name(&self) -> &str { &self.name }
    pub fn email(&self) -> &str { &self.email }
    pub fn year(&self) -> &YearKey { &self.year }
    pub fn majors(&self) -> &[String] { &self.majors }
    pub fn minors(&self) -> &[String] { &self.minors }
    pub fn gecs(&self) -> &[String] { &self.gecs }
    pub fn advisor(&self) -> &str { &self.advisor }

    pub fn last_name(&self) -> &str {
        surname(&self.name)
    }

    pub fn first_name(&self) -> &str {
        given_name(&self.name)
    }

    /// "First Last"
    pub fn display_name(&self) -> String {
        match self.first_name() {
            "" => self.last_name().to_string(),
            first => format!("{} {}", first, self.last_name()),
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
