//! Resolve last-modified dates for registry entries.
//!
//! A route's date comes from the mtime of its source artifact(s), an explicit
//! literal, or the request day. Unreadable artifacts never fail a request:
//! they are logged and replaced by the entry's fallback date.

use chrono::{DateTime, NaiveDate, Utc};
use std::path::{Path, PathBuf};
use tracing::warn;

/// A calendar date usable in `static` tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ymd(pub i32, pub u32, pub u32);

impl Ymd {
    pub fn to_date(self) -> NaiveDate {
        // Table literals are checked by tests; MIN marks a typo loudly.
        NaiveDate::from_ymd_opt(self.0, self.1, self.2).unwrap_or(NaiveDate::MIN)
    }
}

/// Where an entry's `lastmod` comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastModified {
    /// Mtime of one artifact relative to the content root.
    File {
        artifact: &'static str,
        fallback: Ymd,
    },
    /// Latest mtime across several artifacts.
    LatestOf {
        artifacts: &'static [&'static str],
        fallback: Ymd,
    },
    Literal(Ymd),
    /// The request day.
    Today,
}

/// Resolves [`LastModified`] sources against a content root.
#[derive(Debug, Clone)]
pub struct LastModifiedResolver {
    root: PathBuf,
    filesystem: bool,
    today: NaiveDate,
}

impl LastModifiedResolver {
    pub fn new(root: impl Into<PathBuf>, filesystem: bool, today: NaiveDate) -> Self {
        Self {
            root: root.into(),
            filesystem,
            today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, source: &LastModified) -> NaiveDate {
        match *source {
            LastModified::File { artifact, fallback } => self
                .artifact_mtime(artifact)
                .unwrap_or_else(|| fallback.to_date()),
            LastModified::LatestOf {
                artifacts,
                fallback,
            } => self
                .latest_mtime(artifacts)
                .unwrap_or_else(|| fallback.to_date()),
            LastModified::Literal(date) => date.to_date(),
            LastModified::Today => self.today,
        }
    }

    /// Mtime of a single artifact, or `None` if it cannot be read.
    pub fn artifact_mtime(&self, artifact: &str) -> Option<NaiveDate> {
        if !self.filesystem {
            return None;
        }
        let path = self.root.join(artifact);
        match std::fs::metadata(&path).and_then(|m| m.modified()) {
            Ok(modified) => Some(DateTime::<Utc>::from(modified).date_naive()),
            Err(e) => {
                warn!("unable to read mtime for {}: {e}", path.display());
                None
            }
        }
    }

    /// Most recent mtime across artifacts; unreadable ones are skipped.
    pub fn latest_mtime(&self, artifacts: &[&str]) -> Option<NaiveDate> {
        artifacts
            .iter()
            .filter_map(|artifact| self.artifact_mtime(artifact))
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_missing_file_uses_fallback() {
        let dir = tempdir().unwrap();
        let resolver = LastModifiedResolver::new(dir.path(), true, today());
        let date = resolver.resolve(&LastModified::File {
            artifact: "does/not/exist.tsx",
            fallback: Ymd(2025, 10, 8),
        });
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 10, 8).unwrap());
    }

    #[test]
    fn test_existing_file_uses_mtime() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("page.tsx"), "export default 1").unwrap();
        let resolver = LastModifiedResolver::new(dir.path(), true, today());
        let date = resolver.resolve(&LastModified::File {
            artifact: "page.tsx",
            fallback: Ymd(2000, 1, 1),
        });
        let expected: DateTime<Utc> = fs::metadata(dir.path().join("page.tsx"))
            .unwrap()
            .modified()
            .unwrap()
            .into();
        assert_eq!(date, expected.date_naive());
    }

    #[test]
    fn test_latest_of_skips_unreadable() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.tsx"), "a").unwrap();
        let resolver = LastModifiedResolver::new(dir.path(), true, today());
        let date = resolver.resolve(&LastModified::LatestOf {
            artifacts: &["missing.tsx", "a.tsx"],
            fallback: Ymd(2000, 1, 1),
        });
        assert_ne!(date, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());

        let date = resolver.resolve(&LastModified::LatestOf {
            artifacts: &["missing.tsx", "gone.tsx"],
            fallback: Ymd(2000, 1, 1),
        });
        assert_eq!(date, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }

    #[test]
    fn test_without_filesystem_capability_falls_back() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("page.tsx"), "x").unwrap();
        let resolver = LastModifiedResolver::new(dir.path(), false, today());
        let date = resolver.resolve(&LastModified::File {
            artifact: "page.tsx",
            fallback: Ymd(2025, 1, 1),
        });
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn test_literal_and_today() {
        let resolver = LastModifiedResolver::new(".", true, today());
        assert_eq!(resolver.resolve(&LastModified::Today), today());
        assert_eq!(
            resolver.resolve(&LastModified::Literal(Ymd(2025, 9, 15))),
            NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()
        );
    }
}
