//! Multi-record assessment store.
//!
//! An explicitly owned collection, not a global: callers construct one with
//! [`AssessmentStore::open`] (rehydrate from disk, else empty) or
//! [`AssessmentStore::in_memory`] and pass it to whatever surface needs it.
//! Every mutation persists the whole collection; persistence is best-effort
//! and the in-memory collection stays authoritative for the session.

use crate::error::{BcResult, BuildcheckError};
use crate::scorer::{AssessmentInput, ScoreResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingInfo {
    pub building_name: String,
    pub address: String,
    pub screener_name: String,
    pub assessment_date: DateTime<Utc>,
}

impl Default for BuildingInfo {
    fn default() -> Self {
        Self {
            building_name: String::new(),
            address: String::new(),
            screener_name: String::new(),
            assessment_date: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub id: String,
    pub building_info: BuildingInfo,
    pub input: AssessmentInput,
    /// Present only after a calculation has run at least once.
    pub result: Option<ScoreResult>,
    /// True only once the user has accepted a calculated result.
    pub completed: bool,
}

impl AssessmentRecord {
    fn blank(id: String) -> Self {
        Self {
            id,
            building_info: BuildingInfo::default(),
            input: AssessmentInput::default(),
            result: None,
            completed: false,
        }
    }

    /// Export precondition: completed, scored, and identified.
    pub fn is_exportable(&self) -> bool {
        self.completed
            && self.result.is_some()
            && !self.building_info.building_name.trim().is_empty()
            && !self.building_info.address.trim().is_empty()
            && !self.building_info.screener_name.trim().is_empty()
    }
}

/// Partial update for one record, shallow-merged at the top level: a `Some`
/// field replaces the record's field wholesale. Nested structs are never
/// deep-merged, so callers must supply complete `BuildingInfo` /
/// `AssessmentInput` values.
#[derive(Debug, Default, Clone)]
pub struct RecordPatch {
    pub building_info: Option<BuildingInfo>,
    pub input: Option<AssessmentInput>,
    pub result: Option<ScoreResult>,
    pub completed: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    records: Vec<AssessmentRecord>,
    current_id: Option<String>,
}

#[derive(Debug)]
pub struct AssessmentStore {
    records: Vec<AssessmentRecord>,
    current_id: Option<String>,
    path: Option<PathBuf>,
}

impl AssessmentStore {
    /// A store with no backing file. Mutations skip persistence entirely.
    pub fn in_memory() -> Self {
        Self {
            records: Vec::new(),
            current_id: None,
            path: None,
        }
    }

    /// Rehydrate from a prior snapshot. A missing file or a snapshot that
    /// fails to parse falls back to an empty collection; neither is an error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let snapshot = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Snapshot>(&raw) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "snapshot unreadable, starting empty");
                    Snapshot::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "no snapshot found, starting empty");
                Snapshot::default()
            }
        };

        // A persisted selection must still reference an existing record.
        let current_id = snapshot
            .current_id
            .filter(|id| snapshot.records.iter().any(|r| &r.id == id));

        Self {
            records: snapshot.records,
            current_id,
            path: Some(path),
        }
    }

    /// Append a blank record, make it current, and return its id.
    pub fn create(&mut self) -> String {
        let id = generate_id();
        self.records.push(AssessmentRecord::blank(id.clone()));
        self.current_id = Some(id.clone());
        self.persist();
        id
    }

    /// Shallow-merge a patch into the record matching `id`.
    pub fn update(&mut self, id: &str, patch: RecordPatch) -> BcResult<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| BuildcheckError::RecordNotFound(id.to_string()))?;

        if let Some(info) = patch.building_info {
            record.building_info = info;
        }
        if let Some(input) = patch.input {
            record.input = input;
        }
        if let Some(result) = patch.result {
            record.result = Some(result);
        }
        if let Some(completed) = patch.completed {
            record.completed = completed;
        }
        self.persist();
        Ok(())
    }

    /// Delete a record. When the current record goes, the selection moves to
    /// the first remaining record, or clears if the collection is now empty.
    pub fn remove(&mut self, id: &str) -> BcResult<()> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| BuildcheckError::RecordNotFound(id.to_string()))?;
        self.records.remove(index);

        if self.current_id.as_deref() == Some(id) {
            self.current_id = self.records.first().map(|r| r.id.clone());
        }
        self.persist();
        Ok(())
    }

    /// Set (or clear) the current selection. Validation is eager: an id that
    /// does not reference an existing record is rejected, so the selection can
    /// never dangle.
    pub fn select_current(&mut self, id: Option<&str>) -> BcResult<()> {
        if let Some(id) = id {
            if !self.records.iter().any(|r| r.id == id) {
                return Err(BuildcheckError::RecordNotFound(id.to_string()));
            }
        }
        self.current_id = id.map(str::to_string);
        self.persist();
        Ok(())
    }

    pub fn get_current(&self) -> Option<&AssessmentRecord> {
        let id = self.current_id.as_deref()?;
        self.get(id)
    }

    pub fn get(&self, id: &str) -> Option<&AssessmentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[AssessmentRecord] {
        &self.records
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Synchronous whole-collection write. Failures are logged and swallowed:
    /// durable storage being unavailable must not take down the session.
    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Err(e) = self.write_snapshot(path) {
            warn!(path = %path.display(), error = %e, "failed to persist assessments");
        }
    }

    fn write_snapshot(&self, path: &Path) -> BcResult<()> {
        let snapshot = Snapshot {
            records: self.records.clone(),
            current_id: self.current_id.clone(),
        };
        let raw = serde_json::to_string_pretty(&snapshot)?;
        fs::write(path, raw)?;
        Ok(())
    }
}

/// Opaque record id: millisecond timestamp plus random suffix. Unique for the
/// lifetime of the process and effectively unique across sessions.
fn generate_id() -> String {
    format!("{:x}-{:012x}", Utc::now().timestamp_millis(), fastrand::u64(..))
}
