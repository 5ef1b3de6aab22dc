use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use super::parser::parse_line_porcelain;
use super::types::BlameMap;
use crate::error::{Error, Result};

/// Runs `git blame --line-porcelain` for a single file.
#[derive(Debug, Clone)]
pub struct BlameParser {
    program: OsString,
}

impl Default for BlameParser {
    fn default() -> Self {
        Self {
            program: OsString::from("git"),
        }
    }
}

impl BlameParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific git executable instead of the one on `PATH`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Blame `path`, returning an empty map when git cannot attribute it
    /// (git missing, untracked file, path outside a repository).
    pub fn parse(&self, path: &Path) -> BlameMap {
        match self.blame(path) {
            Ok(records) => records,
            Err(e) => {
                warn!("Error getting git blame info for {}: {}", path.display(), e);
                BlameMap::new()
            }
        }
    }

    /// Blame `path`, reporting why no data could be produced.
    ///
    /// Runs in the file's containing directory and blocks until git exits.
    pub fn blame(&self, path: &Path) -> Result<BlameMap> {
        let (dir, file_name) = match (path.parent(), path.file_name()) {
            (Some(dir), Some(name)) => (dir, name),
            _ => return Err(Error::NoParentDirectory(path.to_path_buf())),
        };
        // A bare file name has an empty parent; run where we are.
        let dir = if dir.as_os_str().is_empty() { Path::new(".") } else { dir };

        let output = Command::new(&self.program)
            .args(["blame", "--line-porcelain", "--"])
            .arg(file_name)
            .current_dir(dir)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::GitFailed {
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        let records = parse_line_porcelain(&output.stdout);
        debug!("Parsed {} blamed lines for {}", records.len(), path.display());
        Ok(records)
    }
}
