use crate::record_parser::{parse_line, LineOutcome};
use crate::types::{Record, StatsError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Streams validated records out of a box-score log.
///
/// Stops quietly at the first line that does not match the grammar, and stops
/// with an error at the first line that matches but fails validation.
///
/// Lines are decoded lossily, so stray non-UTF-8 bytes in a name never turn
/// into a read failure.
pub struct RecordScanner<R> {
    reader: R,
    buf: Vec<u8>,
    path: PathBuf,
    line_no: usize,
    done: bool,
}

impl RecordScanner<BufReader<File>> {
    /// Open `path` for scanning.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StatsError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            error!("Failed to open input {}: {}", path.display(), source);
            StatsError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!("Opened input {}", path.display());
        Ok(Self::with_path(BufReader::new(file), path))
    }
}

impl<R: BufRead> RecordScanner<R> {
    pub fn new(reader: R) -> Self {
        Self::with_path(reader, "<reader>")
    }

    fn with_path(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            path: path.into(),
            line_no: 0,
            done: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for RecordScanner<R> {
    type Item = Result<Record, StatsError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(source) => {
                    self.done = true;
                    error!(
                        "Read failed on {} after line {}: {}",
                        self.path.display(),
                        self.line_no,
                        source
                    );
                    return Some(Err(StatsError::FileRead {
                        path: self.path.clone(),
                        source,
                    }));
                }
            }
            self.line_no += 1;

            let line = String::from_utf8_lossy(&self.buf);
            match parse_line(&line) {
                LineOutcome::Blank => continue,
                LineOutcome::Malformed => {
                    warn!(
                        "Stopping scan of {} at line {}: not a record",
                        self.path.display(),
                        self.line_no
                    );
                    self.done = true;
                }
                LineOutcome::Parsed(raw) => {
                    let result = raw.validate(self.line_no);
                    if let Err(e) = &result {
                        error!("Rejecting {}: {}", self.path.display(), e);
                        self.done = true;
                    }
                    return Some(result);
                }
            }
        }
        None
    }
}
