// src/config/consts.rs

// Source data
pub const SENTINEL_NONE: &str = "0000";
pub const MAILTO_PREFIX: &str = "mailto:";
pub const HTML_EXT: &str = "html";

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const CSV_FILE_PREFIX: &str = "dcs_minors_";
pub const CSV_FILE_EXT: &str = "csv";
pub const CSV_UNKNOWN_YEAR_STEM: &str = "unknown";
pub const LIST_JOIN: &str = ", ";

pub const CSV_HEADERS: [&str; 8] = [
    "Last Name",
    "First Name",
    "Email",
    "Year",
    "Majors",
    "Minors",
    "GECs",
    "Advisor",
];
