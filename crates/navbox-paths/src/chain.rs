use std::collections::{HashMap, HashSet};

use navbox_core::Region;

/// Predecessor links oriented toward the source region.
///
/// `parent(r)` is the region the route enters `r` from. The source region
/// itself has no parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentChain {
    links: HashMap<Region, Region>,
}

impl ParentChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, child: Region, parent: Region) {
        self.links.insert(child, parent);
    }

    #[inline]
    pub fn parent(&self, child: &Region) -> Option<Region> {
        self.links.get(child).copied()
    }

    #[inline]
    pub fn contains(&self, child: &Region) -> bool {
        self.links.contains_key(child)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// `(child, parent)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Region, Region)> + '_ {
        self.links.iter().map(|(&c, &p)| (c, p))
    }
}

/// What a region-level search hands to the refiner.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// `None` when the searches never connected.
    pub chain: Option<ParentChain>,
    /// Every region that received a distance (or was discovered, for BFS).
    pub explored: HashSet<Region>,
    /// Set when the expansion limit cut the search short.
    pub limit_reached: bool,
}

impl SearchOutcome {
    pub(crate) fn found(chain: ParentChain, explored: HashSet<Region>) -> Self {
        Self {
            chain: Some(chain),
            explored,
            limit_reached: false,
        }
    }

    pub(crate) fn not_found(explored: HashSet<Region>) -> Self {
        Self {
            chain: None,
            explored,
            limit_reached: false,
        }
    }

    pub(crate) fn out_of_budget(explored: HashSet<Region>) -> Self {
        Self {
            chain: None,
            explored,
            limit_reached: true,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.chain.is_some()
    }
}
