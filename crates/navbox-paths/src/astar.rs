use std::collections::{HashMap, HashSet};

use navbox_core::Region;

use crate::Pathfinder;
use crate::chain::{ParentChain, SearchOutcome};
use crate::frontier::{Budget, Direction, Frontier};
use crate::traits::AstarPather;

impl Pathfinder {
    /// Single-direction best-first search from `start` to `goal`.
    ///
    /// Stops when `goal` is popped. Returns the predecessor links of every
    /// region reached, which always include a chain from `goal` to `start`
    /// on success.
    pub fn astar_search<P: AstarPather>(
        &self,
        pather: &P,
        start: Region,
        goal: Region,
    ) -> SearchOutcome {
        let mut explored = HashSet::new();
        explored.insert(start);

        let mut open = Frontier::seeded(Direction::Forward, start);
        let mut dist: HashMap<Region, f64> = HashMap::new();
        dist.insert(start, 0.0);
        let mut chain = ParentChain::new();
        let mut budget = Budget::new(self.config.max_expansions);
        let mut nbuf = Vec::new();

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            if current == goal {
                break 'search true;
            }
            if !budget.spend() {
                log::debug!("expansion limit {:?} reached", budget.limit());
                return SearchOutcome::out_of_budget(explored);
            }

            let current_dist = dist.get(&current).copied().unwrap_or(0.0);
            nbuf.clear();
            pather.neighbors(current, &mut nbuf);

            for &next in nbuf.iter() {
                let tentative = current_dist + pather.cost(current, next);
                if dist.get(&next).is_some_and(|&known| tentative >= known) {
                    continue;
                }
                dist.insert(next, tentative);
                open.push(tentative + pather.estimate(next, goal), next);
                chain.insert(next, current);
                explored.insert(next);
            }
        };

        if found {
            SearchOutcome::found(chain, explored)
        } else {
            SearchOutcome::not_found(explored)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchConfig;
    use crate::testing::{corridor, grid_mesh, walk_chain};

    #[test]
    fn corridor_is_walked_in_order() {
        let (mesh, cells) = corridor(5);
        let out = Pathfinder::default().astar_search(&mesh, cells[0], cells[4]);
        let chain = out.chain.expect("path");
        assert_eq!(walk_chain(&chain, cells[4], cells[0]), Some(cells));
    }

    #[test]
    fn same_region_is_found_immediately() {
        let (mesh, cells) = corridor(3);
        let out = Pathfinder::default().astar_search(&mesh, cells[2], cells[2]);
        assert!(out.chain.expect("path").is_empty());
    }

    #[test]
    fn grid_goal_is_reachable() {
        let mesh = grid_mesh(5, 5, 2.0);
        let regions = mesh.regions();
        let (start, goal) = (regions[4], regions[20]);
        let out = Pathfinder::default().astar_search(&mesh, start, goal);
        let chain = out.chain.expect("path");
        let walk = walk_chain(&chain, goal, start).expect("chain reaches start");
        assert_eq!(walk.first(), Some(&start));
        assert_eq!(walk.last(), Some(&goal));
    }

    #[test]
    fn limit_applies() {
        let (mesh, cells) = corridor(10);
        let finder = Pathfinder::new(SearchConfig::default().with_max_expansions(2));
        let out = finder.astar_search(&mesh, cells[0], cells[9]);
        assert!(out.limit_reached);
    }

    #[test]
    fn popping_goal_is_not_charged() {
        let (mesh, cells) = corridor(2);
        let finder = Pathfinder::new(SearchConfig::default().with_max_expansions(1));
        let out = finder.astar_search(&mesh, cells[0], cells[1]);
        assert!(!out.limit_reached);
        assert!(out.chain.is_some());
    }
}
