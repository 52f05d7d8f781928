use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a logged maintenance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u16);

/// Identifier for a technician; drawn from a space independent of request ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TechnicianId(pub u16);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TechnicianId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dormitory buildings served by the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    Ly5,
    Ly6,
    Ly7,
}

impl Location {
    pub const fn label(self) -> &'static str {
        match self {
            Location::Ly5 => "LY5",
            Location::Ly6 => "LY6",
            Location::Ly7 => "LY7",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of repair work; doubles as a technician's specialty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Electricity,
    Plumbing,
    Ac,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Category::Electricity => "Electricity",
            Category::Plumbing => "Plumbing",
            Category::Ac => "AC",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Urgency rank recorded with a request.
///
/// The rank is an opaque ordinal in 1..=5; the desk assigns no polarity to it
/// and never orders requests by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(rank: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&rank).then_some(Self(rank))
    }

    pub const fn rank(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Priority::new(rank)
            .ok_or_else(|| format!("priority must be {}..={}, got {rank}", Self::MIN, Self::MAX))
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

/// Lifecycle of a request: New -> Assigned -> Done, forward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    New,
    Assigned,
    Done,
}

impl RequestStatus {
    pub const fn label(self) -> &'static str {
        match self {
            RequestStatus::New => "NEW",
            RequestStatus::Assigned => "ASSIGNED",
            RequestStatus::Done => "DONE",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rejected status change; carries both ends so callers can report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal status transition {from} -> {to} (lifecycle is NEW -> ASSIGNED -> DONE)")]
pub struct IllegalTransition {
    pub from: RequestStatus,
    pub to: RequestStatus,
}

/// A logged repair request.
///
/// Fields are private so the lifecycle can only advance through [`transition`]
/// and [`assign_to`]; a technician can never be bound while the request stays
/// NEW, and no reader can observe a half-applied assignment.
///
/// [`transition`]: Request::transition
/// [`assign_to`]: Request::assign_to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Request {
    id: RequestId,
    location: Location,
    category: Category,
    priority: Priority,
    status: RequestStatus,
    technician: Option<TechnicianId>,
}

impl Request {
    pub(super) fn log(
        id: RequestId,
        location: Location,
        category: Category,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            location,
            category,
            priority,
            status: RequestStatus::New,
            technician: None,
        }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn technician(&self) -> Option<TechnicianId> {
        self.technician
    }

    /// Advance the lifecycle without touching the technician binding.
    ///
    /// Only NEW -> ASSIGNED and ASSIGNED -> DONE are permitted; the former
    /// records an assignment made outside the desk (no technician is bound).
    pub(super) fn transition(&mut self, target: RequestStatus) -> Result<(), IllegalTransition> {
        match (self.status, target) {
            (RequestStatus::New, RequestStatus::Assigned)
            | (RequestStatus::Assigned, RequestStatus::Done) => {
                self.status = target;
                Ok(())
            }
            (from, to) => Err(IllegalTransition { from, to }),
        }
    }

    /// Bind a technician and mark the request ASSIGNED in one step.
    pub(super) fn assign_to(&mut self, technician: TechnicianId) -> Result<(), IllegalTransition> {
        match self.status {
            RequestStatus::New => {
                self.technician = Some(technician);
                self.status = RequestStatus::Assigned;
                Ok(())
            }
            from => Err(IllegalTransition {
                from,
                to: RequestStatus::Assigned,
            }),
        }
    }
}

/// A member of the fixed maintenance roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Technician {
    pub id: TechnicianId,
    pub name: String,
    pub specialty: Category,
}
