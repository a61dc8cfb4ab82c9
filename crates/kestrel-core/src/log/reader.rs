use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub struct LogReader;

impl LogReader {
    /// Read every line from each file, concatenated in argument order
    ///
    /// Fails on the first file that cannot be opened or read; no partial
    /// result is returned.
    pub fn read_files(paths: &[PathBuf]) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for path in paths {
            Self::read_file(path, &mut lines)?;
        }

        tracing::info!(
            "Read {} lines from {} log file(s)",
            lines.len(),
            paths.len()
        );

        Ok(lines)
    }

    fn read_file(path: &Path, lines: &mut Vec<String>) -> Result<()> {
        tracing::debug!("Reading log file: {}", path.display());

        let file = File::open(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| Error::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            lines.push(line);
        }

        Ok(())
    }
}
