use serde::Serialize;

use super::domain::{Request, Technician};

/// Sanitized tabular projection of a request for shells and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestRow {
    pub id: u16,
    pub location: &'static str,
    pub category: &'static str,
    pub priority: u8,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technician: Option<u16>,
}

impl From<&Request> for RequestRow {
    fn from(request: &Request) -> Self {
        Self {
            id: request.id().0,
            location: request.location().label(),
            category: request.category().label(),
            priority: request.priority().rank(),
            status: request.status().label(),
            technician: request.technician().map(|technician| technician.0),
        }
    }
}

/// Detail view of a roster member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnicianView {
    pub id: u16,
    pub name: String,
    pub specialty: &'static str,
}

impl From<&Technician> for TechnicianView {
    fn from(technician: &Technician) -> Self {
        Self {
            id: technician.id.0,
            name: technician.name.clone(),
            specialty: technician.specialty.label(),
        }
    }
}
