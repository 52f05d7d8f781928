use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::domain::{Category, Location, Priority, Request, RequestId};

/// Header line written ahead of the exported records.
pub const EXPORT_HEADER: &str = "--- List of NEW Requests ---";

/// One exported record: the fields of a NEW request, minus status and
/// technician (both are implied by the snapshot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingRecord {
    pub id: RequestId,
    pub location: Location,
    pub category: Category,
    pub priority: Priority,
}

impl PendingRecord {
    fn line(&self) -> String {
        format!(
            "ID: {} | Loc: {} | Cat: {} | Priority: {}",
            self.id,
            self.location,
            self.category,
            self.priority.rank()
        )
    }
}

/// Read-only snapshot of every NEW request, ascending by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingExport {
    pub records: Vec<PendingRecord>,
}

impl PendingExport {
    pub(super) fn from_requests<'a, I>(requests: I) -> Self
    where
        I: IntoIterator<Item = &'a Request>,
    {
        let records = requests
            .into_iter()
            .map(|request| PendingRecord {
                id: request.id(),
                location: request.location(),
                category: request.category(),
                priority: request.priority(),
            })
            .collect();
        Self { records }
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Render the line-oriented payload handed to a sink.
    pub fn render(&self) -> String {
        let mut payload = String::from(EXPORT_HEADER);
        payload.push('\n');
        for record in &self.records {
            let _ = writeln!(payload, "{}", record.line());
        }
        payload
    }
}

/// Outbound destination for a pending-request snapshot.
///
/// Sinks see a fully rendered snapshot; a failing sink can never corrupt the
/// registries because the export path is read-only.
pub trait ExportSink {
    fn write(&self, export: &PendingExport) -> Result<(), ExportError>;
}

/// Export dispatch error, kept apart from registry errors.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("export sink unwritable: {0}")]
    Sink(#[from] std::io::Error),
}

/// Sink writing the snapshot to a text file.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExportSink for FileSink {
    fn write(&self, export: &PendingExport) -> Result<(), ExportError> {
        fs::write(&self.path, export.render())?;
        Ok(())
    }
}
