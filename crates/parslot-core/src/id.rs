//! Worker identifier type

use core::fmt;

/// Identifies one worker in the pool.
///
/// Ids are assigned densely from 0 when the pool is created and never
/// change for the life of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkerId(u32);

impl WorkerId {
    /// Create a worker id
    #[inline]
    pub const fn new(id: u32) -> Self {
        WorkerId(id)
    }

    /// Raw id value
    #[inline]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let id = WorkerId::new(7);
        assert_eq!(id.as_u32(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", WorkerId::new(3)), "w3");
    }
}
