use std::collections::BinaryHeap;

use navbox_core::Region;

/// Which way a search is expanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From the source region toward the destination region.
    Forward,
    /// From the destination region toward the source region.
    Backward,
}

// ---------------------------------------------------------------------------
// Internal priority-queue entry
// ---------------------------------------------------------------------------

/// Frontier entry ordered by `priority` for use in `BinaryHeap`.
///
/// Equal priorities pop in insertion order (`seq`), so exploration order is
/// deterministic for a given mesh.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierEntry {
    pub(crate) priority: f64,
    pub(crate) seq: u64,
    pub(crate) region: Region,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Min-priority queue of regions for one search direction.
#[derive(Debug)]
pub(crate) struct Frontier {
    direction: Direction,
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new(direction: Direction) -> Self {
        Self {
            direction,
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Queue seeded with `root` at priority zero.
    pub(crate) fn seeded(direction: Direction, root: Region) -> Self {
        let mut frontier = Self::new(direction);
        frontier.push(0.0, root);
        frontier
    }

    pub(crate) fn push(&mut self, priority: f64, region: Region) {
        log::trace!("{:?} push {} at {:.3}", self.direction, region, priority);
        self.heap.push(FrontierEntry {
            priority,
            seq: self.next_seq,
            region,
        });
        self.next_seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<Region> {
        self.heap.pop().map(|e| e.region)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

// ---------------------------------------------------------------------------
// Expansion budget
// ---------------------------------------------------------------------------

/// Counts frontier pops against an optional limit.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Budget {
    used: usize,
    limit: Option<usize>,
}

impl Budget {
    pub(crate) fn new(limit: Option<usize>) -> Self {
        Self { used: 0, limit }
    }

    /// Record one expansion. Returns `false` once the limit is used up.
    pub(crate) fn spend(&mut self) -> bool {
        match self.limit {
            Some(limit) if self.used >= limit => false,
            _ => {
                self.used += 1;
                true
            }
        }
    }

    pub(crate) fn limit(&self) -> Option<usize> {
        self.limit
    }
}
