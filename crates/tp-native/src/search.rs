//! Candidate directories for the native library, and the diagnostic report
//! describing them.

use crate::config::EngineConfig;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Why a directory is on the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    HostDir,
    ModuleDir,
    CurrentDir,
}

/// One inspected directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub source: CandidateSource,
    pub dir: PathBuf,
    pub library_path: PathBuf,
    pub found: bool,
}

/// Ordered scan results plus the environment they were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub library_file: String,
    pub candidates: Vec<Candidate>,
    pub host_dir: Option<PathBuf>,
    pub module_dir: Option<PathBuf>,
    pub current_dir: Option<PathBuf>,
}

impl SearchReport {
    /// First candidate directory that holds the library file.
    pub fn first_found(&self) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.found)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} search paths:", self.library_file)?;
        for (i, c) in self.candidates.iter().enumerate() {
            let status = if c.found { "FOUND" } else { "NOT FOUND" };
            writeln!(f, "{}. {} - {}", i + 1, c.dir.display(), status)?;
        }
        writeln!(f)?;
        writeln!(f, "Debug info:")?;
        for (label, dir) in [
            ("Host directory", &self.host_dir),
            ("Module directory", &self.module_dir),
            ("Current directory", &self.current_dir),
        ] {
            match dir {
                Some(d) => writeln!(f, "{label}: {}", d.display())?,
                None => writeln!(f, "{label}: NULL")?,
            }
        }
        Ok(())
    }
}

/// Existing, de-duplicated candidate directories in search order.
pub fn candidate_dirs(config: &EngineConfig) -> Vec<(CandidateSource, PathBuf)> {
    let raw = [
        (CandidateSource::HostDir, config.host_dir()),
        (CandidateSource::ModuleDir, config.module_dir()),
        (CandidateSource::CurrentDir, std::env::current_dir().ok()),
    ];
    let mut dirs: Vec<(CandidateSource, PathBuf)> = Vec::with_capacity(raw.len());
    for (source, dir) in raw {
        let Some(dir) = dir else { continue };
        if !dir.is_dir() || dirs.iter().any(|(_, seen)| *seen == dir) {
            continue;
        }
        dirs.push((source, dir));
    }
    dirs
}

/// Check every candidate directory for the library file.
pub fn scan(config: &EngineConfig) -> SearchReport {
    let library_file = config.library_file().to_string();
    let candidates = candidate_dirs(config)
        .into_iter()
        .map(|(source, dir)| {
            let library_path = dir.join(&library_file);
            let found = library_path.is_file();
            Candidate {
                source,
                dir,
                library_path,
                found,
            }
        })
        .collect();
    SearchReport {
        library_file,
        candidates,
        host_dir: config.host_dir(),
        module_dir: config.module_dir(),
        current_dir: std::env::current_dir().ok(),
    }
}
