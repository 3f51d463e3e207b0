// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod roster;
pub mod specs;

pub mod export;
pub mod file;
pub mod progress;
pub mod report;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
pub use model::{Student, YearKey};
pub use roster::{Grouping, Rosters};
