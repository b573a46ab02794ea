//! Persistence of the working report set.
//!
//! The engine itself never reads or writes a store; callers inject one at
//! the edge and hand the loaded reports to the pure functions.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::InsightError;
use crate::report::{CompanyMeta, ReportBundle, StandardizedReport};
use crate::InsightResult;

/// Everything a user has loaded: their reports, an optional peer set for
/// target comparison and the last generated narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub company_meta: CompanyMeta,
    pub reports: Vec<StandardizedReport>,
    #[serde(default)]
    pub target: Option<ReportBundle>,
    #[serde(default)]
    pub cached_report: Option<String>,
    pub saved_at: DateTime<Utc>,
}

impl Session {
    pub fn new(bundle: ReportBundle) -> Self {
        Session {
            company_meta: bundle.company_meta,
            reports: bundle.reports,
            target: None,
            cached_report: None,
            saved_at: Utc::now(),
        }
    }

    pub fn with_target(mut self, target: ReportBundle) -> Self {
        self.target = Some(target);
        self
    }

    /// Target reports, empty when no peer set is loaded.
    pub fn target_reports(&self) -> &[StandardizedReport] {
        self.target
            .as_ref()
            .map(|t| t.reports.as_slice())
            .unwrap_or(&[])
    }
}

pub trait ReportStore: Send + Sync {
    /// The saved session, `None` when nothing has been saved.
    fn load(&self) -> InsightResult<Option<Session>>;

    /// Replace the saved session.
    fn save(&self, session: &Session) -> InsightResult<()>;

    fn clear(&self) -> InsightResult<()>;
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MemoryStore {
    session: RwLock<Option<Session>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> InsightError {
    InsightError::Store("store lock poisoned".into())
}

impl ReportStore for MemoryStore {
    fn load(&self) -> InsightResult<Option<Session>> {
        Ok(self.session.read().map_err(poisoned)?.clone())
    }

    fn save(&self, session: &Session) -> InsightResult<()> {
        *self.session.write().map_err(poisoned)? = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> InsightResult<()> {
        *self.session.write().map_err(poisoned)? = None;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JSON file
// ---------------------------------------------------------------------------

/// One pretty-printed JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportStore for JsonFileStore {
    fn load(&self) -> InsightResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let session: Session = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), reports = session.reports.len(), "loaded session");
        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> InsightResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        // Write beside the target and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(session)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), reports = session.reports.len(), "saved session");
        Ok(())
    }

    fn clear(&self) -> InsightResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{annual, company};
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        Session::new(ReportBundle {
            company_meta: CompanyMeta {
                name: "Acme".into(),
                ..CompanyMeta::default()
            },
            reports: vec![annual("2022", company(1.0)), annual("2023", company(2.0))],
        })
    }

    fn exercise(store: &dyn ReportStore) {
        assert_eq!(store.load().unwrap(), None);
        let s = session();
        store.save(&s).unwrap();
        assert_eq!(store.load().unwrap(), Some(s.clone()));

        let mut updated = s;
        updated.cached_report = Some("# Report".into());
        store.save(&updated).unwrap();
        assert_eq!(store.load().unwrap().unwrap().cached_report.as_deref(), Some("# Report"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn test_memory_store() {
        exercise(&MemoryStore::new());
    }

    #[test]
    fn test_json_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("session.json"));
        exercise(&store);
    }

    #[test]
    fn test_corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();
        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, InsightError::SerializationError(_)));
    }

    #[test]
    fn test_target_reports() {
        let s = session();
        assert!(s.target_reports().is_empty());
        let s = s.with_target(ReportBundle {
            reports: vec![annual("2023", company(2.0))],
            ..ReportBundle::default()
        });
        assert_eq!(s.target_reports().len(), 1);
    }
}
