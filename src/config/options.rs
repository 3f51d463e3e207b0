// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use super::layout::{LayoutVersion, TableLayout};
use crate::error::{Error, Result};

const TRUTHY: [&str; 5] = ["true", "t", "yes", "y", "1"];
const FALSY: [&str; 5] = ["false", "f", "no", "n", "0"];

/// Strict yes/no parsing for the CSV switch. Unknown words are an error, never guessed.
pub fn parse_bool_flag(s: &str) -> Result<bool> {
    let v = s.trim().to_ascii_lowercase();
    if TRUTHY.contains(&v.as_str()) {
        Ok(true)
    } else if FALSY.contains(&v.as_str()) {
        Ok(false)
    } else {
        Err(Error::InvalidFlag(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub mode: OutputMode,
    pub source: SourceSelector,
    pub layout: LayoutVersion,
    out_dir: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            mode: OutputMode::Tables,
            source: SourceSelector::Prompt { dir: PathBuf::from(".") },
            layout: LayoutVersion::default(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// One CSV file per year.
    Csv,
    /// Roster, year-count and advisor-count tables on stdout.
    Tables,
}

impl OutputMode {
    pub fn from_write_csv(write_csv: bool) -> Self {
        if write_csv { OutputMode::Csv } else { OutputMode::Tables }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceSelector {
    File(PathBuf),
    /// Discover `*.html` in `dir` and ask which one to use.
    Prompt { dir: PathBuf },
}

impl AppOptions {
    pub fn table_layout(&self) -> TableLayout {
        self.layout.layout()
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Blank input keeps the current directory.
    pub fn set_out_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() { PathBuf::from(DEFAULT_OUT_DIR) } else { PathBuf::from(s) };
    }
}
