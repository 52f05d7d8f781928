use tracing::info;

use crate::config::DeskConfig;

use super::domain::{
    Category, Location, Priority, Request, RequestId, RequestStatus, Technician, TechnicianId,
};
use super::export::{ExportError, ExportSink, PendingExport};
use super::requests::{RegistryError, RequestRegistry};
use super::technicians::{RosterError, TechnicianRegistry};

/// Facade composing the request registry, the technician roster, and the
/// export path behind one operator-facing surface.
///
/// Every mutating operation takes `&mut self`, which pins the single-operator
/// model: nothing can interleave with a read-modify-write like [`assign`].
///
/// [`assign`]: MaintenanceDesk::assign
#[derive(Debug)]
pub struct MaintenanceDesk {
    requests: RequestRegistry,
    technicians: TechnicianRegistry,
}

/// Error raised by desk operations.
#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(
        "technician {technician} specializes in {specialty}, request {request} needs {category}"
    )]
    SpecialtyMismatch {
        request: RequestId,
        technician: TechnicianId,
        specialty: Category,
        category: Category,
    },
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl MaintenanceDesk {
    /// Desk with empty registries sized from the configured bound.
    pub fn new(config: &DeskConfig) -> Self {
        Self {
            requests: RequestRegistry::with_capacity(config.capacity),
            technicians: TechnicianRegistry::with_capacity(config.capacity),
        }
    }

    /// Desk pre-seeded with the fixed startup roster.
    pub fn with_standard_roster(config: &DeskConfig) -> Result<Self, DeskError> {
        let mut desk = Self::new(config);
        desk.seed_technician(TechnicianId(1), "Ali", Category::Electricity)?;
        desk.seed_technician(TechnicianId(2), "Omar", Category::Plumbing)?;
        desk.seed_technician(TechnicianId(3), "Adam", Category::Ac)?;
        Ok(desk)
    }

    pub fn requests(&self) -> &RequestRegistry {
        &self.requests
    }

    pub fn technicians(&self) -> &TechnicianRegistry {
        &self.technicians
    }

    pub fn seed_technician(
        &mut self,
        id: TechnicianId,
        name: impl Into<String>,
        specialty: Category,
    ) -> Result<&Technician, DeskError> {
        let technician = self.technicians.seed(id, name, specialty)?;
        info!(id = technician.id.0, specialty = technician.specialty.label(), "technician seeded");
        Ok(technician)
    }

    /// Log a new repair request.
    pub fn create_request(
        &mut self,
        id: RequestId,
        location: Location,
        category: Category,
        priority: Priority,
    ) -> Result<&Request, DeskError> {
        let request = self.requests.create(id, location, category, priority)?;
        info!(
            id = request.id().0,
            location = request.location().label(),
            category = request.category().label(),
            "request logged"
        );
        Ok(request)
    }

    /// Advance a request's lifecycle, returning the stored status.
    pub fn update_status(
        &mut self,
        id: RequestId,
        target: RequestStatus,
    ) -> Result<RequestStatus, DeskError> {
        let status = self.requests.transition_status(id, target)?;
        info!(id = id.0, status = status.label(), "request status updated");
        Ok(status)
    }

    /// Assign a technician to a request.
    ///
    /// Both parties must exist, the technician's specialty must match the
    /// request's category, and the request must still be NEW. Any failure
    /// leaves the request exactly as it was; on success the technician
    /// binding and the ASSIGNED status land together.
    pub fn assign(
        &mut self,
        request_id: RequestId,
        technician_id: TechnicianId,
    ) -> Result<(), DeskError> {
        let request = self.requests.get_mut(request_id)?;
        let technician = self.technicians.get(technician_id)?;

        if technician.specialty != request.category() {
            return Err(DeskError::SpecialtyMismatch {
                request: request_id,
                technician: technician_id,
                specialty: technician.specialty,
                category: request.category(),
            });
        }

        request
            .assign_to(technician_id)
            .map_err(RegistryError::from)?;

        info!(
            request = request_id.0,
            technician = technician_id.0,
            "technician assigned"
        );
        Ok(())
    }

    /// Snapshot of every NEW request, ascending by id.
    pub fn pending_snapshot(&self) -> PendingExport {
        PendingExport::from_requests(self.requests.list_by_status(RequestStatus::New))
    }

    /// Hand the pending snapshot to `sink` and report how many records went
    /// out. Read-only: a sink failure surfaces as an export error and the
    /// registries are untouched either way.
    pub fn export_pending<S: ExportSink>(&self, sink: &S) -> Result<usize, DeskError> {
        let export = self.pending_snapshot();
        sink.write(&export).map_err(DeskError::Export)?;
        info!(count = export.count(), "pending requests exported");
        Ok(export.count())
    }
}
