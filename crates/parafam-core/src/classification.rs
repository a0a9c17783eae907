//! Classification verdicts for parameter sets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Verdict on a parameter set's suitability for construction.
///
/// Produced once per construction attempt by a family's `classify`
/// capability and consumed by the condition checker. Never persisted.
///
/// The "capability absent" case is not a variant: a family that cannot
/// classify its parameters returns `None` from `classify`, which the
/// checker treats as a skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// The parameters do not describe a member of the family.
    NotConstructible,

    /// A member exists, but the stronger extremality property is not
    /// established for these parameters.
    Constructible,

    /// The member is minimal.
    Minimal,

    /// The member is extreme.
    Extreme,
}

impl Classification {
    /// Returns true if construction may proceed under this verdict.
    pub fn permits_construction(&self) -> bool {
        !matches!(self, Classification::NotConstructible)
    }

    /// Returns true if the verdict establishes the stronger property
    /// (minimality or extremality), as opposed to mere constructibility.
    pub fn establishes_extremality(&self) -> bool {
        matches!(self, Classification::Minimal | Classification::Extreme)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Classification::NotConstructible => "not_constructible",
            Classification::Constructible => "constructible",
            Classification::Minimal => "minimal",
            Classification::Extreme => "extreme",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permits_construction() {
        assert!(!Classification::NotConstructible.permits_construction());
        assert!(Classification::Constructible.permits_construction());
        assert!(Classification::Minimal.permits_construction());
        assert!(Classification::Extreme.permits_construction());
    }

    #[test]
    fn establishes_extremality() {
        assert!(!Classification::NotConstructible.establishes_extremality());
        assert!(!Classification::Constructible.establishes_extremality());
        assert!(Classification::Minimal.establishes_extremality());
        assert!(Classification::Extreme.establishes_extremality());
    }

    #[test]
    fn serde_snake_case() {
        let json = serde_json::to_string(&Classification::NotConstructible).unwrap();
        assert_eq!(json, "\"not_constructible\"");
        let back: Classification = serde_json::from_str("\"extreme\"").unwrap();
        assert_eq!(back, Classification::Extreme);
    }
}
