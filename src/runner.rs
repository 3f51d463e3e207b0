// src/runner.rs
use std::path::PathBuf;

use log::{debug, info};

use crate::{
    config::options::{AppOptions, OutputMode, SourceSelector},
    error::Result,
    export, file,
    model::YearKey,
    progress::Progress,
    report,
    roster::Rosters,
    specs::minors::{self, SkipCounts},
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub source: PathBuf,
    pub students: usize,
    pub skipped: SkipCounts,
    pub files_written: Vec<PathBuf>,
}

/// Resolve the source file: explicit, or discovered + prompted on stdin.
pub fn resolve_source(opts: &AppOptions) -> Result<PathBuf> {
    match &opts.source {
        SourceSelector::File(p) => Ok(p.clone()),
        SourceSelector::Prompt { dir } => {
            let candidates = file::find_html_files(dir)?;
            file::prompt_stdin(&candidates)
        }
    }
}

/// Top-level runner: read, extract, then CSV files or tables.
pub fn run(opts: &AppOptions, progress: &mut dyn Progress) -> Result<RunSummary> {
    let source = resolve_source(opts)?;
    run_with_source(opts, source, progress)
}

/// Same as `run`, with the source already chosen.
pub fn run_with_source(
    opts: &AppOptions,
    source: PathBuf,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let text = file::read_source(&source)?;
    let layout = opts.table_layout();
    info!("Parsing {} with the {} layout", source.display(), layout.version);

    let extraction = minors::parse_document(&text, &layout);
    let rosters = &extraction.rosters;
    if extraction.skipped.total() > 0 {
        debug!("Skipped {} rows in {}", extraction.skipped.total(), source.display());
    }

    for line in summary_lines(rosters) {
        progress.log(&line);
    }

    let mut files_written = Vec::new();
    match opts.mode {
        OutputMode::Csv => {
            for path in export::write_year_files(rosters, opts.out_dir())? {
                progress.file_written(&path);
                files_written.push(path);
            }
        }
        OutputMode::Tables => {
            for table in report::all_tables(rosters) {
                progress.log("");
                progress.log(table.to_string().trim_end());
            }
        }
    }
    progress.finish();

    Ok(RunSummary {
        source,
        students: rosters.student_count(),
        skipped: extraction.skipped,
        files_written,
    })
}

fn year_repr(y: &YearKey) -> String {
    match y {
        YearKey::Int(n) => n.to_string(),
        YearKey::Label(s) => format!("{s:?}"),
    }
}

/// "Parsed N students total." plus the year and advisor keys, first-seen order.
pub fn summary_lines(rosters: &Rosters) -> [String; 3] {
    let years: Vec<String> = rosters.by_year.keys().map(year_repr).collect();
    let advisors: Vec<String> = rosters.by_advisor.keys().map(|a| format!("{a:?}")).collect();
    [
        format!("Parsed {} students total.", rosters.student_count()),
        format!("Years found: [{}]", years.join(", ")),
        format!("Advisors found: [{}]", advisors.join(", ")),
    ]
}
