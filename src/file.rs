// src/file.rs

use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use log::debug;

use crate::config::consts::HTML_EXT;
use crate::error::{Error, Result};

/// `*.html` files directly inside `dir`, sorted by file name.
pub fn find_html_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() { continue; }
        let is_html = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(HTML_EXT));
        if is_html { found.push(path); }
    }
    if found.is_empty() {
        return Err(Error::NoHtmlFiles { dir: dir.to_path_buf() });
    }
    found.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!("Found {} HTML candidates in {}", found.len(), dir.display());
    Ok(found)
}

fn display_name(p: &Path) -> String {
    p.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| p.display().to_string())
}

/// List `candidates` on `output`, read one line from `input`.
/// Blank (or EOF) picks the first candidate; anything else is taken as a path,
/// relative to the candidates' directory when it isn't absolute.
pub fn prompt_for_source<R: BufRead, W: Write>(
    candidates: &[PathBuf],
    mut input: R,
    mut output: W,
) -> Result<PathBuf> {
    let default = candidates.first().ok_or_else(|| Error::NoHtmlFiles { dir: PathBuf::from(".") })?;

    writeln!(output, "HTML files found:\n")?;
    for c in candidates {
        writeln!(output, "{}", display_name(c))?;
    }
    write!(output, "\nEnter name of HTML source (return for default '{}'): ", display_name(default))?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let typed = line.trim();
    if typed.is_empty() {
        return Ok(default.clone());
    }

    let typed = PathBuf::from(typed);
    if typed.is_absolute() {
        return Ok(typed);
    }
    Ok(match default.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(typed),
        _ => typed,
    })
}

/// Whole file as text; invalid UTF-8 is replaced rather than rejected.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::ReadSource { path: path.to_path_buf(), source })?;
    Ok(match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() { return Ok(()); }
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Interactive pick over stdin/stdout.
pub fn prompt_stdin(candidates: &[PathBuf]) -> Result<PathBuf> {
    let stdin = io::stdin();
    prompt_for_source(candidates, stdin.lock(), io::stdout())
}
