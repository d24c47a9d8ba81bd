use std::collections::{HashSet, VecDeque};

use navbox_core::Region;

use crate::Pathfinder;
use crate::chain::{ParentChain, SearchOutcome};
use crate::frontier::Budget;
use crate::traits::Pather;

impl Pathfinder {
    /// Unweighted breadth-first search from `start` to `goal`.
    ///
    /// Each region keeps the parent it was first discovered from. Useful as
    /// a reference for the weighted searches since it ignores geometry.
    pub fn bfs_search<P: Pather>(&self, pather: &P, start: Region, goal: Region) -> SearchOutcome {
        let mut seen = HashSet::new();
        seen.insert(start);

        let mut queue = VecDeque::new();
        queue.push_back(start);
        let mut chain = ParentChain::new();
        let mut budget = Budget::new(self.config.max_expansions);
        let mut nbuf = Vec::new();

        while let Some(current) = queue.pop_front() {
            if current == goal {
                return SearchOutcome::found(chain, seen);
            }
            if !budget.spend() {
                log::debug!("expansion limit {:?} reached", budget.limit());
                return SearchOutcome::out_of_budget(seen);
            }

            nbuf.clear();
            pather.neighbors(current, &mut nbuf);
            for &next in nbuf.iter() {
                if seen.insert(next) {
                    chain.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        SearchOutcome::not_found(seen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchConfig;
    use crate::testing::{corridor, grid_mesh, walk_chain};

    #[test]
    fn finds_fewest_hops_on_grid() {
        let mesh = grid_mesh(4, 4, 1.0);
        let regions = mesh.regions();
        let (start, goal) = (regions[0], regions[15]);
        let out = Pathfinder::default().bfs_search(&mesh, start, goal);
        let chain = out.chain.expect("path");
        let walk = walk_chain(&chain, goal, start).expect("chain reaches start");
        // 3 steps right + 3 steps down.
        assert_eq!(walk.len(), 7);
    }

    #[test]
    fn unreachable_goal() {
        let (mesh, cells) = corridor(3);
        let stray = Region::new(10.0, 11.0, 0.0, 1.0);
        let out = Pathfinder::default().bfs_search(&mesh, cells[0], stray);
        assert!(out.chain.is_none());
        assert_eq!(out.explored.len(), 3);
    }

    #[test]
    fn limit_counts_expansions_only() {
        let (mesh, cells) = corridor(2);
        let finder = Pathfinder::new(SearchConfig::default().with_max_expansions(1));
        assert!(finder.bfs_search(&mesh, cells[0], cells[1]).chain.is_some());

        let (mesh, cells) = corridor(4);
        let out = finder.bfs_search(&mesh, cells[0], cells[3]);
        assert!(out.limit_reached);
    }
}
