// ============================================================================
// Vector Relation
// Outcome of the combined parallel / orthogonal check
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How two vectors relate to each other.
///
/// `BothParallelAndOrthogonal` only arises in degenerate cases, e.g. when
/// one operand is the zero vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Relation {
    BothParallelAndOrthogonal,
    Parallel,
    Orthogonal,
    Neither,
}

impl Relation {
    /// Combine the two independent checks.
    pub fn from_checks(parallel: bool, orthogonal: bool) -> Self {
        match (parallel, orthogonal) {
            (true, true) => Relation::BothParallelAndOrthogonal,
            (true, false) => Relation::Parallel,
            (false, true) => Relation::Orthogonal,
            (false, false) => Relation::Neither,
        }
    }

    #[inline]
    pub fn is_parallel(self) -> bool {
        matches!(
            self,
            Relation::Parallel | Relation::BothParallelAndOrthogonal
        )
    }

    #[inline]
    pub fn is_orthogonal(self) -> bool {
        matches!(
            self,
            Relation::Orthogonal | Relation::BothParallelAndOrthogonal
        )
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::BothParallelAndOrthogonal => write!(f, "both parallel and orthogonal"),
            Relation::Parallel => write!(f, "parallel"),
            Relation::Orthogonal => write!(f, "orthogonal"),
            Relation::Neither => write!(f, "neither parallel nor orthogonal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_checks() {
        assert_eq!(
            Relation::from_checks(true, true),
            Relation::BothParallelAndOrthogonal
        );
        assert_eq!(Relation::from_checks(true, false), Relation::Parallel);
        assert_eq!(Relation::from_checks(false, true), Relation::Orthogonal);
        assert_eq!(Relation::from_checks(false, false), Relation::Neither);
    }

    #[test]
    fn test_predicates() {
        assert!(Relation::BothParallelAndOrthogonal.is_parallel());
        assert!(Relation::BothParallelAndOrthogonal.is_orthogonal());
        assert!(!Relation::Parallel.is_orthogonal());
        assert!(!Relation::Orthogonal.is_parallel());
    }

    #[test]
    fn test_display() {
        assert_eq!(Relation::Neither.to_string(), "neither parallel nor orthogonal");
    }
}
