use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::config::DeskConfig;
use crate::desk::domain::{Category, Location, Priority, RequestId};
use crate::desk::export::{ExportError, ExportSink, PendingExport};
use crate::desk::service::MaintenanceDesk;

pub(super) fn desk_config() -> DeskConfig {
    DeskConfig {
        capacity: 150,
        export_path: PathBuf::from("new_requests.txt"),
    }
}

/// Desk seeded with the fixed startup roster (Ali/Omar/Adam).
pub(super) fn desk() -> MaintenanceDesk {
    MaintenanceDesk::with_standard_roster(&desk_config()).expect("roster seeds on empty desk")
}

pub(super) fn priority(rank: u8) -> Priority {
    Priority::new(rank).expect("rank within 1..=5")
}

pub(super) fn log_request(
    desk: &mut MaintenanceDesk,
    id: u16,
    location: Location,
    category: Category,
    rank: u8,
) -> RequestId {
    let id = RequestId(id);
    desk.create_request(id, location, category, priority(rank))
        .expect("request logs");
    id
}

/// Sink capturing every snapshot it is handed.
#[derive(Default)]
pub(super) struct MemorySink {
    exports: Mutex<Vec<PendingExport>>,
}

impl MemorySink {
    pub(super) fn exports(&self) -> Vec<PendingExport> {
        self.exports.lock().expect("sink mutex poisoned").clone()
    }
}

impl ExportSink for MemorySink {
    fn write(&self, export: &PendingExport) -> Result<(), ExportError> {
        self.exports
            .lock()
            .expect("sink mutex poisoned")
            .push(export.clone());
        Ok(())
    }
}

/// Sink standing in for an unwritable destination.
pub(super) struct UnwritableSink;

impl ExportSink for UnwritableSink {
    fn write(&self, _export: &PendingExport) -> Result<(), ExportError> {
        Err(ExportError::Sink(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "destination is read only",
        )))
    }
}
