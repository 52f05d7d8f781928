/// Bounded presence set of integer identifiers.
///
/// Ids run 1..=capacity and are never reclaimed; once allocated a slot stays
/// taken for the life of the process. The request and technician registries
/// each own an independent instance.
#[derive(Debug, Clone)]
pub struct IdSpace {
    used: Vec<bool>,
}

impl IdSpace {
    pub fn new(capacity: u16) -> Self {
        Self {
            // slot 0 is a hole so ids index directly
            used: vec![false; usize::from(capacity) + 1],
        }
    }

    pub fn capacity(&self) -> u16 {
        (self.used.len() - 1) as u16
    }

    /// Reserve `id`, failing when it is out of bounds or already taken.
    ///
    /// An id past the bound is the capacity condition; it is reported as an
    /// explicit error, never truncated or overwritten.
    pub fn allocate(&mut self, id: u16) -> Result<(), IdSpaceError> {
        if id == 0 || id > self.capacity() {
            return Err(IdSpaceError::OutOfRange {
                id,
                capacity: self.capacity(),
            });
        }
        if self.used[usize::from(id)] {
            return Err(IdSpaceError::Duplicate { id });
        }
        self.used[usize::from(id)] = true;
        Ok(())
    }

    pub fn is_in_use(&self, id: u16) -> bool {
        id >= 1 && id <= self.capacity() && self.used[usize::from(id)]
    }
}

/// Why an identifier could not be reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdSpaceError {
    #[error("id {id} is outside the identifier space 1..={capacity}")]
    OutOfRange { id: u16, capacity: u16 },
    #[error("id {id} is already in use")]
    Duplicate { id: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_reserves_ids_within_bounds() {
        let mut space = IdSpace::new(3);
        assert!(!space.is_in_use(1));
        space.allocate(1).expect("id 1 is free");
        assert!(space.is_in_use(1));
        space.allocate(3).expect("id 3 is free");
        assert_eq!(space.capacity(), 3);
    }

    #[test]
    fn allocate_rejects_duplicates() {
        let mut space = IdSpace::new(3);
        space.allocate(2).expect("first allocation");
        assert_eq!(space.allocate(2), Err(IdSpaceError::Duplicate { id: 2 }));
        assert!(space.is_in_use(2));
    }

    #[test]
    fn allocate_rejects_out_of_range_ids() {
        let mut space = IdSpace::new(3);
        assert_eq!(
            space.allocate(0),
            Err(IdSpaceError::OutOfRange { id: 0, capacity: 3 })
        );
        assert_eq!(
            space.allocate(4),
            Err(IdSpaceError::OutOfRange { id: 4, capacity: 3 })
        );
        assert!(!space.is_in_use(4));
    }

    #[test]
    fn is_in_use_handles_ids_past_the_bound() {
        let space = IdSpace::new(3);
        assert!(!space.is_in_use(0));
        assert!(!space.is_in_use(250));
    }
}
