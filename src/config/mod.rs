// src/config/mod.rs

pub mod consts;
pub mod layout;
pub mod options;

pub use layout::{Extract, FieldSpec, LayoutVersion, TableLayout};
pub use options::{AppOptions, OutputMode, SourceSelector, parse_bool_flag};
