use super::domain::{Category, IllegalTransition, Location, Priority, Request, RequestId, RequestStatus};
use super::ids::{IdSpace, IdSpaceError};

/// Owner of all request records.
///
/// The id doubles as the storage slot, so every listing comes back in
/// ascending id order without sorting. Records are never deleted.
#[derive(Debug)]
pub struct RequestRegistry {
    ids: IdSpace,
    slots: Vec<Option<Request>>,
}

/// Error enumeration for request registry failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error(transparent)]
    Id(#[from] IdSpaceError),
    #[error("request {0} does not exist")]
    NotFound(RequestId),
    #[error(transparent)]
    Transition(#[from] IllegalTransition),
}

impl RequestRegistry {
    pub fn with_capacity(capacity: u16) -> Self {
        Self {
            ids: IdSpace::new(capacity),
            slots: vec![None; usize::from(capacity) + 1],
        }
    }

    pub fn capacity(&self) -> u16 {
        self.ids.capacity()
    }

    /// Log a new request under `id`.
    ///
    /// Inputs arrive already typed and validated by the shell; the only
    /// failures left are an id collision or an id past the bound. The stored
    /// record starts NEW with no technician bound.
    pub fn create(
        &mut self,
        id: RequestId,
        location: Location,
        category: Category,
        priority: Priority,
    ) -> Result<&Request, RegistryError> {
        self.ids.allocate(id.0)?;
        let slot = usize::from(id.0);
        Ok(&*self.slots[slot].insert(Request::log(id, location, category, priority)))
    }

    pub fn get(&self, id: RequestId) -> Result<&Request, RegistryError> {
        self.slots
            .get(usize::from(id.0))
            .and_then(Option::as_ref)
            .ok_or(RegistryError::NotFound(id))
    }

    pub(super) fn get_mut(&mut self, id: RequestId) -> Result<&mut Request, RegistryError> {
        self.slots
            .get_mut(usize::from(id.0))
            .and_then(Option::as_mut)
            .ok_or(RegistryError::NotFound(id))
    }

    /// Every logged request, ascending by id.
    pub fn list_all(&self) -> Vec<&Request> {
        self.slots.iter().filter_map(Option::as_ref).collect()
    }

    pub fn list_by_status(&self, status: RequestStatus) -> Vec<&Request> {
        self.slots
            .iter()
            .filter_map(Option::as_ref)
            .filter(|request| request.status() == status)
            .collect()
    }

    /// Requests in `category`, ascending by id.
    ///
    /// Zero matches is an ordinary empty listing, not an error; only a bad id
    /// lookup is a failure in this registry.
    pub fn list_by_category(&self, category: Category) -> Vec<&Request> {
        self.slots
            .iter()
            .filter_map(Option::as_ref)
            .filter(|request| request.category() == category)
            .collect()
    }

    /// Drive the status state machine for `id`.
    ///
    /// Returns the status actually stored after the transition.
    pub fn transition_status(
        &mut self,
        id: RequestId,
        target: RequestStatus,
    ) -> Result<RequestStatus, RegistryError> {
        let request = self.get_mut(id)?;
        request.transition(target)?;
        Ok(request.status())
    }
}
