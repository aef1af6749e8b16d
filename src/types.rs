//! Shared identifiers and the per-item outcome reported by the workshop.

use std::fmt;

/// Opaque identifier for a physical item; compared by equality only.
pub type Item = i64;

/// Where an item was found before it was put on the workbench.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Found in the cabinet with this 1-based number.
    Cabinet(usize),
    /// Found in the outside area.
    Outside,
    /// Never seen before, or not held anywhere.
    New,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Cabinet(number) => write!(f, "{number}"),
            Outcome::Outside => f.write_str("OUTSIDE"),
            Outcome::New => f.write_str("NEW"),
        }
    }
}

/// Current position of an item held by the workshop.
#[allow(dead_code)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Workbench,
    /// 1-based cabinet number.
    Cabinet(usize),
    Outside,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_renders_like_the_report() {
        assert_eq!(Outcome::Cabinet(3).to_string(), "3");
        assert_eq!(Outcome::Outside.to_string(), "OUTSIDE");
        assert_eq!(Outcome::New.to_string(), "NEW");
    }
}
