//! The maintenance desk core: identifier spaces, the request and technician
//! registries, specialty-gated assignment, and the pending-request export.
//!
//! Everything here is synchronous and in-memory. The interactive shell in
//! `services/console` validates raw operator input and renders output; this
//! module only ever sees typed values and signals failures as error values.

pub mod domain;
pub mod export;
pub mod ids;
pub mod requests;
pub mod service;
pub mod technicians;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    Category, IllegalTransition, Location, Priority, Request, RequestId, RequestStatus, Technician,
    TechnicianId,
};
pub use export::{ExportError, ExportSink, FileSink, PendingExport, PendingRecord, EXPORT_HEADER};
pub use ids::{IdSpace, IdSpaceError};
pub use requests::{RegistryError, RequestRegistry};
pub use service::{DeskError, MaintenanceDesk};
pub use technicians::{RosterError, TechnicianRegistry};
pub use views::{RequestRow, TechnicianView};
