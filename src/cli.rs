// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::DEFAULT_OUT_DIR;
use crate::config::layout::LayoutVersion;
use crate::config::options::{AppOptions, OutputMode, SourceSelector, parse_bool_flag};
use crate::error::Result;
use crate::progress::ConsoleProgress;
use crate::runner::{self, RunSummary};

/// Extract the DCS minors roster from its HTML page.
///
/// Prints a roster, per-year counts and per-advisor counts, or with WRITE_CSV
/// set writes one CSV file per graduation year.
#[derive(Debug, Parser)]
#[command(name = "dcs_minors", version)]
pub struct Args {
    /// Write CSV files instead of printing tables: true/false, yes/no, 1/0
    #[arg(value_name = "WRITE_CSV", value_parser = parse_write_csv)]
    pub write_csv: Option<bool>,

    /// Roster HTML file. Omit to pick from the *.html files in the current directory
    #[arg(value_name = "HTML_FILE")]
    pub html_file: Option<PathBuf>,

    /// Directory for the CSV files
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: String,

    /// Table layout of the page: legacy (7 columns) or current (10 columns)
    #[arg(long, value_name = "LAYOUT", default_value = "current", value_parser = parse_layout)]
    pub layout: LayoutVersion,
}

fn parse_write_csv(s: &str) -> std::result::Result<bool, String> {
    parse_bool_flag(s).map_err(|e| e.to_string())
}

fn parse_layout(s: &str) -> std::result::Result<LayoutVersion, String> {
    s.parse().map_err(|e: crate::error::Error| e.to_string())
}

impl Args {
    pub fn into_options(self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.mode = OutputMode::from_write_csv(self.write_csv.unwrap_or(false));
        if let Some(path) = self.html_file {
            opts.source = SourceSelector::File(path);
        }
        opts.layout = self.layout;
        opts.set_out_dir(&self.out_dir);
        opts
    }
}

/// Parse `std::env::args` and run. `--help`/`--version` print and exit 0;
/// bad arguments print usage and exit non-zero.
pub fn run() -> Result<RunSummary> {
    let opts = Args::parse().into_options();
    runner::run(&opts, &mut ConsoleProgress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    fn parse(args: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("dcs_minors").chain(args.iter().copied()))
    }

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_args_means_tables_and_prompt() {
        let opts = parse(&[]).unwrap().into_options();
        assert_eq!(opts.mode, OutputMode::Tables);
        assert!(matches!(opts.source, SourceSelector::Prompt { .. }));
        assert_eq!(opts.layout, LayoutVersion::Current);
    }

    #[test]
    fn csv_flag_and_file() {
        let opts = parse(&["True", "minors.html", "-o", "out", "--layout", "legacy"]).unwrap().into_options();
        assert_eq!(opts.mode, OutputMode::Csv);
        assert_eq!(opts.source, SourceSelector::File(PathBuf::from("minors.html")));
        assert_eq!(opts.out_dir(), Path::new("out"));
        assert_eq!(opts.layout, LayoutVersion::Legacy);
    }

    #[test]
    fn rejects_unknown_flag_words() {
        assert!(parse(&["maybe"]).is_err());
        assert!(parse(&["false", "x.html", "--layout", "v9"]).is_err());
    }

    #[test]
    fn help_is_not_a_failure() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }
}
