//! Search configuration.

/// Which region-level search produces the parent chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Forward and backward best-first searches that stop when the two
    /// frontiers meet.
    #[default]
    Bidirectional,
    /// Single best-first search from the source that stops when the
    /// destination region is popped.
    AStar,
    /// Unweighted breadth-first search.
    BreadthFirst,
}

/// Per-[`Pathfinder`](crate::Pathfinder) search parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Upper bound on frontier pops per query, summed over both directions
    /// for the bidirectional search. `None` means unbounded.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}
