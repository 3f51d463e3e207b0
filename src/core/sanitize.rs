// src/core/sanitize.rs
use crate::config::consts::SENTINEL_NONE;

/// Collapse runs of whitespace (including NBSP) into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Split a comma-delimited cell into trimmed tokens, dropping blanks and the
/// `"0000"` placeholder.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|tok| !tok.is_empty() && *tok != SENTINEL_NONE)
        .map(str::to_string)
        .collect()
}

pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// "Last, First" → "Last". No comma: the whole (trimmed) string.
pub fn surname(name: &str) -> &str {
    match name.split_once(',') {
        Some((last, _)) => last.trim(),
        None => name.trim(),
    }
}

/// "Last, First" → "First". No comma: empty.
pub fn given_name(name: &str) -> &str {
    name.split_once(',').map(|(_, first)| first.trim()).unwrap_or("")
}

/// Keep `[A-Za-z0-9_-]`; collapse everything else into single underscores.
pub fn sanitize_file_stem(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_us = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' { out.push(ch); last_us = false; }
        else if !last_us { out.push('_'); last_us = true; }
    }
    out.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_drops_sentinel_and_blanks() {
        assert_eq!(split_list("CS, 0000"), vec!["CS"]);
        assert_eq!(split_list("  0000 ,Math,, Art History "), vec!["Math", "Art History"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" 0000 ").is_empty());
        // only the exact placeholder is dropped
        assert_eq!(split_list("00000, 0000x"), vec!["00000", "0000x"]);
    }

    #[test]
    fn normalize_ws_collapses_nbsp() {
        assert_eq!(normalize_ws("  Smith,\u{a0}\n Bob  "), "Smith, Bob");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn digits() {
        assert!(is_all_digits("2025"));
        assert!(!is_all_digits(""));
        assert!(!is_all_digits("N/A"));
        assert!(!is_all_digits("20 25"));
        assert!(!is_all_digits("٢٠٢٥"));
    }

    #[test]
    fn name_parts() {
        assert_eq!(surname("Doe, Jane"), "Doe");
        assert_eq!(given_name("Doe, Jane"), "Jane");
        assert_eq!(surname("van Buren, Ann, Jr."), "van Buren");
        assert_eq!(given_name("van Buren, Ann, Jr."), "Ann, Jr.");
        assert_eq!(surname("Cher"), "Cher");
        assert_eq!(given_name("Cher"), "");
    }

    #[test]
    fn file_stems() {
        assert_eq!(sanitize_file_stem("2025"), "2025");
        assert_eq!(sanitize_file_stem("N/A"), "N_A");
        assert_eq!(sanitize_file_stem("Class of '26"), "Class_of_26");
        assert_eq!(sanitize_file_stem("///"), "");
    }
}
