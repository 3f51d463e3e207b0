// src/progress.rs
use std::path::Path;

/// Status sink for a run. The CLI prints; tests can record.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A CSV file was written.
    fn file_written(&mut self, _path: &Path) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints to stdout.
pub struct ConsoleProgress;
impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn file_written(&mut self, path: &Path) {
        println!("Wrote {}", path.display());
    }
}

/// Collects everything; handy for tests.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub lines: Vec<String>,
    pub files: Vec<std::path::PathBuf>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }

    fn file_written(&mut self, path: &Path) {
        self.files.push(path.to_path_buf());
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}
