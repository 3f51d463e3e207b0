//! # Page specs
//!
//! Each spec knows where the data lives in one page's HTML and how to pull it out.
//!
//! ## What lives here
//! - **Pure HTML extraction** from an already-parsed `scraper::Html`.
//! - **Row validation**: which rows are data and which are header/decoration.
//! - **Light shaping** of results into `model` values and `roster` groupings.
//!
//! ## What does **not** live here
//! - **Reading files or choosing a source** (`file`, `runner`).
//! - **Export formatting** (`csv`, `report`).
//!
//! ## Conventions
//! - Column positions come from `config::layout`, never from literals in the spec.
//! - A malformed row is skipped and counted; it never fails the page.
//! - No per-row logging; one aggregate `debug!` line per page.
//!
//! ## Typical call chain
//! ```text
//! runner → file::read_source → specs::minors::parse_document
//!                            ↘  Extraction { rosters, skipped }
//!        → csv::write_year_files | report::*
//! ```
pub mod minors;

pub use minors::{Extraction, RowOutcome, SkipCounts, SkipReason, extract, parse_document, parse_minors};
