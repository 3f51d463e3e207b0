// src/error.rs
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTML source could not be opened or read.
    #[error("cannot open or read file '{}'", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no HTML files found in '{}'", dir.display())]
    NoHtmlFiles { dir: PathBuf },

    #[error("'{0}' is not a recognized true/false value (try true, false, yes, no, 1, 0)")]
    InvalidFlag(String),

    #[error("unknown table layout '{0}' (expected 'legacy' or 'current')")]
    UnknownLayout(String),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
