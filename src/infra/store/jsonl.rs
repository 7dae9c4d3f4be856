//! File-backed load store using a JSON-lines journal.
//!
//! Every mutation is one line appended to the journal; the in-memory view is
//! updated only after the line is written. A transition (status + event) is a
//! single line, so a crash never persists one half of it. On open the journal
//! is replayed; a torn final line is dropped with a warning.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::core::{Load, LoadStatus, LoadStatusEvent, LoadStore, StoreError};

/// Event as written to the journal, timestamps in epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JournalEvent {
    id: String,
    load_id: String,
    status: LoadStatus,
    #[serde(with = "crate::util::serde::ts_millis")]
    created_at: DateTime<Utc>,
}

impl From<LoadStatusEvent> for JournalEvent {
    fn from(e: LoadStatusEvent) -> Self {
        Self {
            id: e.id,
            load_id: e.load_id,
            status: e.status,
            created_at: e.created_at,
        }
    }
}

impl From<JournalEvent> for LoadStatusEvent {
    fn from(e: JournalEvent) -> Self {
        Self {
            id: e.id,
            load_id: e.load_id,
            status: e.status,
            created_at: e.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum JournalRecord {
    Load { load: Load },
    Status { load_id: String, status: LoadStatus },
    Event { event: JournalEvent },
    Transition { event: JournalEvent },
}

struct State {
    loads: HashMap<String, Load>,
    events: Vec<LoadStatusEvent>,
    file: File,
    /// Byte length of the journal up to the last fully written record.
    committed_len: u64,
}

impl State {
    fn apply(&mut self, record: JournalRecord) {
        match record {
            JournalRecord::Load { load } => {
                self.loads.insert(load.id.clone(), load);
            }
            JournalRecord::Status { load_id, status } => {
                if let Some(load) = self.loads.get_mut(&load_id) {
                    load.status = status;
                }
            }
            JournalRecord::Event { event } => self.events.push(event.into()),
            JournalRecord::Transition { event } => {
                if let Some(load) = self.loads.get_mut(&event.load_id) {
                    load.status = event.status;
                }
                self.events.push(event.into());
            }
        }
    }

    /// Append one record. The journal never keeps a partial line: stray bytes
    /// past the committed length are cut before writing, and a failed write
    /// is rolled back to the committed length.
    async fn append(&mut self, record: &JournalRecord) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(record).map_err(backend)?;
        line.push('\n');

        let on_disk = self.file.metadata().await.map_err(backend)?.len();
        if on_disk != self.committed_len {
            tracing::warn!(
                on_disk,
                committed = self.committed_len,
                "truncating uncommitted journal bytes"
            );
            self.file.set_len(self.committed_len).await.map_err(backend)?;
        }

        if let Err(e) = self.write_line(line.as_bytes()).await {
            tracing::error!(error = %e, "journal append failed, rolling back");
            self.file.set_len(self.committed_len).await.map_err(backend)?;
            return Err(backend(e));
        }
        self.committed_len += line.len() as u64;
        Ok(())
    }

    async fn write_line(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        self.file.write_all(bytes).await?;
        self.file.flush().await
    }

    fn owned(&self, organization_id: &str, load_id: &str) -> Option<&Load> {
        self.loads
            .get(load_id)
            .filter(|load| load.is_owned_by(organization_id))
    }
}

fn backend(err: impl std::fmt::Display) -> StoreError {
    StoreError::Backend(err.to_string())
}

/// Load store persisted to `<dir>/loads.jsonl`.
pub struct JsonlLoadStore {
    path: PathBuf,
    state: Mutex<State>,
}

impl JsonlLoadStore {
    /// Journal file name inside the store directory.
    pub const FILE_NAME: &'static str = "loads.jsonl";

    /// Open (or create) the store under `dir`, replaying any existing journal.
    ///
    /// # Errors
    /// I/O failures, or a corrupt record anywhere but the last line.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).await.map_err(backend)?;
        let path = dir.join(Self::FILE_NAME);

        let records = match fs::read_to_string(&path).await {
            Ok(contents) => {
                let (records, valid_len) = parse_journal(&path, &contents)?;
                let mut kept = contents[..valid_len].to_string();
                if !kept.is_empty() && !kept.ends_with('\n') {
                    kept.push('\n');
                }
                if kept != contents {
                    fs::write(&path, kept).await.map_err(backend)?;
                }
                records
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(backend(e)),
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(backend)?;

        let committed_len = file.metadata().await.map_err(backend)?.len();
        let mut state = State {
            loads: HashMap::new(),
            events: Vec::new(),
            file,
            committed_len,
        };
        let replayed = records.len();
        for record in records {
            state.apply(record);
        }
        tracing::debug!(path = %path.display(), replayed, "opened load journal");

        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    /// Path of the journal file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a load, replacing any load with the same id.
    ///
    /// # Errors
    /// Journal write failures.
    pub async fn insert_load(&self, load: Load) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        let record = JournalRecord::Load { load };
        state.append(&record).await?;
        state.apply(record);
        Ok(())
    }

    /// Snapshot of a load regardless of owner.
    pub async fn load(&self, load_id: &str) -> Option<Load> {
        self.state.lock().await.loads.get(load_id).cloned()
    }
}

/// Parse journal lines. Returns the records and the byte length of the valid
/// prefix; a shorter prefix means a torn final line was dropped.
fn parse_journal(path: &Path, contents: &str) -> Result<(Vec<JournalRecord>, usize), StoreError> {
    let lines: Vec<&str> = contents.split_inclusive('\n').collect();
    let mut records = Vec::with_capacity(lines.len());
    let mut valid_len = 0;
    for (idx, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            valid_len += line.len();
            continue;
        }
        match serde_json::from_str(line.trim_end()) {
            Ok(record) => {
                records.push(record);
                valid_len += line.len();
            }
            Err(e) if idx + 1 == lines.len() => {
                tracing::warn!(path = %path.display(), error = %e, "dropping torn journal tail");
            }
            Err(e) => {
                return Err(StoreError::Backend(format!(
                    "corrupt journal record at line {}: {e}",
                    idx + 1
                )));
            }
        }
    }
    Ok((records, valid_len))
}

#[async_trait]
impl LoadStore for JsonlLoadStore {
    async fn find_load_status(
        &self,
        organization_id: &str,
        load_id: &str,
    ) -> Result<Option<LoadStatus>, StoreError> {
        Ok(self
            .state
            .lock()
            .await
            .owned(organization_id, load_id)
            .map(|load| load.status))
    }

    async fn update_load_status(
        &self,
        load_id: &str,
        status: LoadStatus,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        if !state.loads.contains_key(load_id) {
            return Err(StoreError::NotFound(load_id.to_string()));
        }
        let record = JournalRecord::Status {
            load_id: load_id.to_string(),
            status,
        };
        state.append(&record).await?;
        state.apply(record);
        Ok(())
    }

    async fn append_status_event(&self, event: LoadStatusEvent) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        let record = JournalRecord::Event {
            event: event.into(),
        };
        state.append(&record).await?;
        state.apply(record);
        Ok(())
    }

    async fn list_status_events(
        &self,
        organization_id: &str,
        load_id: &str,
    ) -> Result<Vec<LoadStatusEvent>, StoreError> {
        let state = self.state.lock().await;
        if state.owned(organization_id, load_id).is_none() {
            return Ok(Vec::new());
        }
        Ok(state
            .events
            .iter()
            .filter(|event| event.load_id == load_id)
            .cloned()
            .collect())
    }

    async fn apply_transition(
        &self,
        organization_id: &str,
        expected: Option<LoadStatus>,
        event: LoadStatusEvent,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        let actual = state
            .owned(organization_id, &event.load_id)
            .map(|load| load.status)
            .ok_or_else(|| StoreError::NotFound(event.load_id.clone()))?;
        if let Some(expected) = expected {
            if actual != expected {
                return Err(StoreError::Conflict {
                    load_id: event.load_id,
                    expected,
                    actual,
                });
            }
        }
        let record = JournalRecord::Transition {
            event: event.into(),
        };
        state.append(&record).await?;
        state.apply(record);
        Ok(())
    }
}
