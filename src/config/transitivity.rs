use std::str::FromStr;

use crate::structures::attribute::AttributeSet;

/// Variant rules for transitivity.
///
/// From *L* → *M* and *M'* → *N* transitivity derives *L* → *N*, given:
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Transitivity {
    /// *M* is equal to *M'*.
    #[default]
    Exact = 0,

    /// *M* contains *M'*, as in the textbook statement of the axiom.
    Containment,
}

impl Transitivity {
    /// The minimum Transitivity type.
    pub const MIN: Transitivity = Transitivity::Exact;

    /// The maximum Transitivity type.
    pub const MAX: Transitivity = Transitivity::Containment;

    /// Whether a dependency with right side `middle` chains to a dependency with left side `next`.
    pub fn chains(&self, middle: &AttributeSet, next: &AttributeSet) -> bool {
        match self {
            Self::Exact => middle == next,
            Self::Containment => middle.is_superset(next),
        }
    }
}

impl std::fmt::Display for Transitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "Exact"),
            Self::Containment => write!(f, "Containment"),
        }
    }
}

impl FromStr for Transitivity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Exact" => Ok(Self::Exact),

            "Containment" => Ok(Self::Containment),

            _unknown_string => Err(()),
        }
    }
}
