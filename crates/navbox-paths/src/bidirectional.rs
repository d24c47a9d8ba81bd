//! Bidirectional best-first search over mesh regions.

use std::collections::{HashMap, HashSet};

use navbox_core::Region;

use crate::Pathfinder;
use crate::chain::{ParentChain, SearchOutcome};
use crate::frontier::{Budget, Direction, Frontier};
use crate::traits::AstarPather;

/// One direction of the search: its queue, distance table and predecessors.
struct Side {
    frontier: Frontier,
    dist: HashMap<Region, f64>,
    prev: HashMap<Region, Region>,
}

impl Side {
    fn new(direction: Direction, root: Region) -> Self {
        let mut dist = HashMap::new();
        dist.insert(root, 0.0);
        Self {
            frontier: Frontier::seeded(direction, root),
            dist,
            prev: HashMap::new(),
        }
    }

    /// Relax every neighbour of `current`, steering toward `target`.
    fn relax<P: AstarPather>(
        &mut self,
        pather: &P,
        current: Region,
        target: Region,
        nbuf: &mut Vec<Region>,
        explored: &mut HashSet<Region>,
    ) {
        let current_dist = self.dist.get(&current).copied().unwrap_or(0.0);

        nbuf.clear();
        pather.neighbors(current, nbuf);

        for &next in nbuf.iter() {
            let tentative = current_dist + pather.cost(current, next);
            let improved = match self.dist.get(&next) {
                Some(&known) => tentative < known,
                None => true,
            };
            if !improved {
                continue;
            }
            self.dist.insert(next, tentative);
            self.frontier
                .push(tentative + pather.estimate(next, target), next);
            self.prev.insert(next, current);
            explored.insert(next);
        }
    }
}

impl Pathfinder {
    /// Run forward and backward best-first searches in lock-step until one
    /// pops a region the other has already reached.
    ///
    /// On success the two predecessor maps are merged into a single chain
    /// leading from the meeting region back to `start` and from `goal` back
    /// to the meeting region.
    pub fn bidirectional_search<P: AstarPather>(
        &self,
        pather: &P,
        start: Region,
        goal: Region,
    ) -> SearchOutcome {
        let mut explored = HashSet::new();
        explored.insert(start);
        explored.insert(goal);

        if start == goal {
            return SearchOutcome::found(ParentChain::new(), explored);
        }

        let mut forward = Side::new(Direction::Forward, start);
        let mut backward = Side::new(Direction::Backward, goal);
        let mut budget = Budget::new(self.config.max_expansions);
        let mut nbuf = Vec::new();

        let meeting = 'search: loop {
            let Some(current) = forward.frontier.pop() else {
                break 'search None;
            };
            if backward.prev.contains_key(&current) {
                break 'search Some(current);
            }
            if !budget.spend() {
                log::debug!("expansion limit {:?} reached", budget.limit());
                return SearchOutcome::out_of_budget(explored);
            }
            forward.relax(pather, current, goal, &mut nbuf, &mut explored);

            let Some(current) = backward.frontier.pop() else {
                break 'search None;
            };
            if forward.prev.contains_key(&current) {
                break 'search Some(current);
            }
            if !budget.spend() {
                log::debug!("expansion limit {:?} reached", budget.limit());
                return SearchOutcome::out_of_budget(explored);
            }
            backward.relax(pather, current, start, &mut nbuf, &mut explored);
        };

        let Some(meeting) = meeting else {
            return SearchOutcome::not_found(explored);
        };
        log::trace!("frontiers met at {}", meeting);

        let chain = merge_chains(meeting, &forward.prev, &backward.prev);
        SearchOutcome::found(chain, explored)
    }
}

/// Join the two predecessor maps at `meeting` into one chain pointing at the
/// source.
fn merge_chains(
    meeting: Region,
    forward: &HashMap<Region, Region>,
    backward: &HashMap<Region, Region>,
) -> ParentChain {
    let mut chain = ParentChain::new();

    // meeting -> ... -> start: links already point at the source.
    let mut seen = HashSet::new();
    let mut current = meeting;
    while let Some(&parent) = forward.get(&current) {
        if !seen.insert(current) {
            break;
        }
        chain.insert(current, parent);
        current = parent;
    }

    let root = current;

    // meeting -> ... -> goal: invert each link. Links already leading to
    // the source win, so a region on both halves short-cuts the loop.
    seen.clear();
    let mut current = meeting;
    while let Some(&next) = backward.get(&current) {
        if !seen.insert(current) {
            break;
        }
        if next != root && !chain.contains(&next) {
            chain.insert(next, current);
        }
        current = next;
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchConfig;
    use crate::testing::{corridor, grid_mesh, walk_chain};
    use navbox_core::Mesh;

    #[test]
    fn adjacent_regions_meet_at_goal() {
        let (mesh, cells) = corridor(2);
        let out = Pathfinder::default().bidirectional_search(&mesh, cells[0], cells[1]);
        let chain = out.chain.expect("path");
        assert_eq!(chain.parent(&cells[1]), Some(cells[0]));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn corridor_chain_reaches_start() {
        let (mesh, cells) = corridor(7);
        let out = Pathfinder::default().bidirectional_search(&mesh, cells[0], cells[6]);
        let chain = out.chain.expect("path");
        let walk = walk_chain(&chain, cells[6], cells[0]).expect("chain reaches start");
        assert_eq!(walk, cells);
    }

    #[test]
    fn backward_links_are_inverted_on_merge() {
        let (mesh, cells) = corridor(5);
        let out = Pathfinder::default().bidirectional_search(&mesh, cells[0], cells[4]);
        let chain = out.chain.expect("path");
        for i in 1..5 {
            assert_eq!(chain.parent(&cells[i]), Some(cells[i - 1]));
        }
        assert!(!chain.contains(&cells[0]));
    }

    #[test]
    fn same_region_is_trivial() {
        let (mesh, cells) = corridor(3);
        let out = Pathfinder::default().bidirectional_search(&mesh, cells[1], cells[1]);
        assert!(out.chain.expect("path").is_empty());
        assert_eq!(out.explored.len(), 1);
    }

    #[test]
    fn disconnected_regions_have_no_path() {
        let a = Region::new(0.0, 1.0, 0.0, 1.0);
        let b = Region::new(2.0, 3.0, 0.0, 1.0);
        let c = Region::new(3.0, 4.0, 0.0, 1.0);
        let mut builder = Mesh::builder();
        builder.add_region(a).add_region(b).add_region(c).connect(b, c);
        let mesh = builder.build().unwrap();

        let out = Pathfinder::default().bidirectional_search(&mesh, a, c);
        assert!(out.chain.is_none());
        assert!(!out.limit_reached);
        // The backward side still explored b.
        assert!(out.explored.contains(&b));
    }

    #[test]
    fn grid_chain_follows_adjacency() {
        let mesh = grid_mesh(6, 4, 1.0);
        let regions = mesh.regions();
        let start = regions[0];
        let goal = regions[regions.len() - 1];
        let out = Pathfinder::default().bidirectional_search(&mesh, start, goal);
        let chain = out.chain.expect("path");
        let walk = walk_chain(&chain, goal, start).expect("chain reaches start");
        for pair in walk.windows(2) {
            assert!(mesh.are_adjacent(&pair[0], &pair[1]));
        }
    }

    #[test]
    fn expansion_limit_stops_search() {
        let (mesh, cells) = corridor(20);
        let finder = Pathfinder::new(SearchConfig::default().with_max_expansions(4));
        let out = finder.bidirectional_search(&mesh, cells[0], cells[19]);
        assert!(out.chain.is_none());
        assert!(out.limit_reached);
    }

    #[test]
    fn meeting_pop_is_not_charged() {
        let (mesh, cells) = corridor(2);
        let finder = Pathfinder::new(SearchConfig::default().with_max_expansions(1));
        let out = finder.bidirectional_search(&mesh, cells[0], cells[1]);
        assert!(!out.limit_reached);
        assert_eq!(out.chain.expect("path").parent(&cells[1]), Some(cells[0]));
    }

    #[test]
    fn merge_follows_both_maps() {
        let r = |i: f64| Region::new(i, i + 1.0, 0.0, 1.0);
        let mut forward = HashMap::new();
        forward.insert(r(1.0), r(0.0));
        forward.insert(r(2.0), r(1.0));
        let mut backward = HashMap::new();
        backward.insert(r(2.0), r(3.0));
        backward.insert(r(3.0), r(4.0));

        let chain = merge_chains(r(2.0), &forward, &backward);
        assert_eq!(chain.parent(&r(2.0)), Some(r(1.0)));
        assert_eq!(chain.parent(&r(1.0)), Some(r(0.0)));
        assert_eq!(chain.parent(&r(3.0)), Some(r(2.0)));
        assert_eq!(chain.parent(&r(4.0)), Some(r(3.0)));
        assert_eq!(chain.len(), 4);
    }

    #[test]
    fn merge_keeps_forward_link_for_shared_region() {
        let r = |i: f64| Region::new(i, i + 1.0, 0.0, 1.0);
        // Forward: 2 -> 1 -> 0. Backward from 2 passes back through 1.
        let mut forward = HashMap::new();
        forward.insert(r(2.0), r(1.0));
        forward.insert(r(1.0), r(0.0));
        let mut backward = HashMap::new();
        backward.insert(r(2.0), r(1.0));
        backward.insert(r(1.0), r(5.0));

        let chain = merge_chains(r(2.0), &forward, &backward);
        assert_eq!(chain.parent(&r(1.0)), Some(r(0.0)));
        assert_eq!(chain.parent(&r(5.0)), Some(r(1.0)));
        assert_eq!(
            walk_chain(&chain, r(5.0), r(0.0)),
            Some(vec![r(0.0), r(1.0), r(5.0)])
        );
    }
}
