//! Session exporter.
//!
//! Turns the ledger, the ranking and the session timestamps into the
//! markdown document written when a session closes:
//!
//! ```text
//! Session started: `2024-01-01 10:00:00`
//! Session closed: `2024-01-01 10:05:12`
//!
//! # Fav ideas
//! <idea>---<idea>---
//!
//! # Ideas to be polished
//! <idea>---
//! ```
//!
//! A bucket with no ideas has no section. An empty ledger writes nothing.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{CoreError, Result};
use crate::ledger::IdeaLedger;
use crate::ranking::{Bucket, Ranking};

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "IDEAS.md";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const SEPARATOR: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimestamps {
    pub started_at: DateTime<Local>,
    pub closed_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, bytes: usize },
    /// Nothing was captured, so no file was touched.
    Skipped,
}

#[derive(Debug, Clone)]
pub struct SessionExporter {
    path: PathBuf,
}

impl SessionExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build the document, or `None` for an empty ledger.
    pub fn render(
        &self,
        ledger: &IdeaLedger,
        ranking: &Ranking,
        times: &SessionTimestamps,
    ) -> Result<Option<String>> {
        if ledger.is_empty() {
            return Ok(None);
        }

        let mut doc = String::new();
        // Writing into a String cannot fail.
        let _ = write!(
            doc,
            "Session started: `{}`",
            times.started_at.format(TIMESTAMP_FORMAT)
        );
        let _ = write!(
            doc,
            "\nSession closed: `{}`",
            times.closed_at.format(TIMESTAMP_FORMAT)
        );

        for (bucket, heading) in [
            (Bucket::Favorite, "# Fav ideas"),
            (Bucket::NeedsPolishing, "# Ideas to be polished"),
        ] {
            let ideas = ranking.bucket_contents(ledger, bucket)?;
            if ideas.is_empty() {
                continue;
            }
            doc.push_str("\n\n");
            doc.push_str(heading);
            doc.push('\n');
            for idea in ideas {
                doc.push_str(idea);
                doc.push_str(SEPARATOR);
            }
        }

        Ok(Some(doc))
    }

    /// Render and write the document in one call. No retry on failure.
    pub fn export(
        &self,
        ledger: &IdeaLedger,
        ranking: &Ranking,
        times: &SessionTimestamps,
    ) -> Result<ExportOutcome> {
        let Some(doc) = self.render(ledger, ranking, times)? else {
            return Ok(ExportOutcome::Skipped);
        };

        std::fs::write(&self.path, doc.as_bytes()).map_err(|source| CoreError::Persistence {
            path: self.path.clone(),
            source,
        })?;

        Ok(ExportOutcome::Written {
            path: self.path.clone(),
            bytes: doc.len(),
        })
    }
}

impl Default for SessionExporter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn times() -> SessionTimestamps {
        SessionTimestamps {
            started_at: Local.with_ymd_and_hms(2024, 3, 9, 10, 0, 0).unwrap(),
            closed_at: Local.with_ymd_and_hms(2024, 3, 9, 10, 5, 7).unwrap(),
        }
    }

    fn ranked(ideas: &[(&str, Bucket)]) -> (IdeaLedger, Ranking) {
        let mut ledger = IdeaLedger::new();
        for (idea, _) in ideas {
            ledger.add(idea);
        }
        let mut ranking = Ranking::new();
        for (_, bucket) in ideas {
            ranking.classify(&ledger, *bucket).unwrap();
        }
        (ledger, ranking)
    }

    #[test]
    fn renders_both_sections() {
        let (ledger, ranking) = ranked(&[
            ("Build a robot", Bucket::Favorite),
            ("Write a novel", Bucket::NeedsPolishing),
        ]);
        let doc = SessionExporter::default()
            .render(&ledger, &ranking, &times())
            .unwrap()
            .unwrap();

        assert_eq!(
            doc,
            "Session started: `2024-03-09 10:00:00`\n\
             Session closed: `2024-03-09 10:05:07`\n\
             \n\
             # Fav ideas\n\
             \nBuild a robot\n\n---\n\
             \n\
             # Ideas to be polished\n\
             \nWrite a novel\n\n---"
        );
    }

    #[test]
    fn omits_empty_bucket() {
        let (ledger, ranking) = ranked(&[("a", Bucket::NeedsPolishing)]);
        let doc = SessionExporter::default()
            .render(&ledger, &ranking, &times())
            .unwrap()
            .unwrap();
        assert!(!doc.contains("# Fav ideas"));
        assert!(doc.contains("# Ideas to be polished\n\na\n\n---"));
    }

    #[test]
    fn empty_ledger_renders_nothing() {
        let doc = SessionExporter::default()
            .render(&IdeaLedger::new(), &Ranking::new(), &times())
            .unwrap();
        assert!(doc.is_none());
    }

    #[test]
    fn corrupted_bucket_index_is_reported() {
        let (_, ranking) = ranked(&[("a", Bucket::Favorite), ("b", Bucket::Favorite)]);
        let mut shorter = IdeaLedger::new();
        shorter.add("a");
        let result = SessionExporter::default().render(&shorter, &ranking, &times());
        assert!(matches!(result, Err(CoreError::IndexOutOfRange { index: 1, len: 1 })));
    }
}
