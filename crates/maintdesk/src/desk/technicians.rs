use super::domain::{Category, Technician, TechnicianId};
use super::ids::{IdSpace, IdSpaceError};

/// Owner of the fixed technician roster.
///
/// Seeded once at startup and read-only afterwards; requests hold technician
/// ids as lookup keys and always read details live from here.
#[derive(Debug)]
pub struct TechnicianRegistry {
    ids: IdSpace,
    slots: Vec<Option<Technician>>,
}

/// Error enumeration for roster failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error(transparent)]
    Id(#[from] IdSpaceError),
    #[error("technician {0} does not exist")]
    NotFound(TechnicianId),
}

impl TechnicianRegistry {
    pub fn with_capacity(capacity: u16) -> Self {
        Self {
            ids: IdSpace::new(capacity),
            slots: vec![None; usize::from(capacity) + 1],
        }
    }

    /// Add a roster member. Startup-only; collisions are an error.
    pub fn seed(
        &mut self,
        id: TechnicianId,
        name: impl Into<String>,
        specialty: Category,
    ) -> Result<&Technician, RosterError> {
        self.ids.allocate(id.0)?;
        let slot = usize::from(id.0);
        Ok(&*self.slots[slot].insert(Technician {
            id,
            name: name.into(),
            specialty,
        }))
    }

    pub fn get(&self, id: TechnicianId) -> Result<&Technician, RosterError> {
        self.slots
            .get(usize::from(id.0))
            .and_then(Option::as_ref)
            .ok_or(RosterError::NotFound(id))
    }

    /// Roster members ascending by id.
    pub fn list_all(&self) -> Vec<&Technician> {
        self.slots.iter().filter_map(Option::as_ref).collect()
    }
}
