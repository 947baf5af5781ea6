//! Search configuration.

/// Which way moves are checked against the traversal rule.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchDirection {
    /// Expand from the sources along legal moves: the rule is asked
    /// `allows(current, neighbor)`.
    #[default]
    Forward,
    /// Expand backwards from the sources: the rule is asked
    /// `allows(neighbor, current)`, i.e. "could the neighbor have legally
    /// stepped onto the current point". Distances are then the cost of
    /// reaching the seeds from every other point.
    Reverse,
}

/// Knobs for a [`Search`](crate::Search).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    pub direction: SearchDirection,
    /// Points whose distance would exceed this are left unreached.
    pub max_cost: Option<u32>,
}

impl SearchOptions {
    pub const fn forward() -> Self {
        Self {
            direction: SearchDirection::Forward,
            max_cost: None,
        }
    }

    pub const fn reverse() -> Self {
        Self {
            direction: SearchDirection::Reverse,
            max_cost: None,
        }
    }

    pub const fn with_max_cost(self, max_cost: u32) -> Self {
        Self {
            max_cost: Some(max_cost),
            ..self
        }
    }
}
