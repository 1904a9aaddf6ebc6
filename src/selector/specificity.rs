//! Selector specificity.

use std::fmt;

/// `(ids, attributes + states + exact classes, types + subcontrols)`,
/// compared lexicographically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl std::ops::Add for Specificity {
    type Output = Specificity;

    fn add(self, rhs: Specificity) -> Specificity {
        Specificity(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(Specificity(1, 0, 0) > Specificity(0, 9, 9));
        assert!(Specificity(0, 1, 0) > Specificity(0, 0, 5));
        assert!(Specificity(0, 0, 2) > Specificity(0, 0, 1));
    }

    #[test]
    fn test_add() {
        assert_eq!(
            Specificity(0, 1, 1) + Specificity(1, 0, 1),
            Specificity(1, 1, 2)
        );
    }
}
