/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use crate::{heuristics, Node, Problem, SearchResult, SearchStats, WorldState};

/// A* search: best-first expansion ordered by cost + heuristic.
///
/// The frontier is a binary heap without decrease-key; a cheaper path to an
/// already-queued state is simply re-inserted, and stale entries are
/// discarded lazily at pop time against the best-cost map. The search keeps
/// going after the first goal until the best frontier entry can no longer
/// beat it, so the returned goal is the cheapest reachable one.
pub fn astar(problem: &Problem) -> (SearchResult, SearchStats) {
    let mut stats = SearchStats::default();

    let root = problem.root_node();
    if problem.is_goal(&root.state) {
        return (SearchResult::empty(), stats);
    }

    let mut frontier = BinaryHeap::new();
    let mut reached: FxHashMap<WorldState, u32> = FxHashMap::default();
    reached.insert(root.state.clone(), root.cost_heuristic_sum());
    frontier.push(Reverse(root));

    let mut solution: Option<Node> = None;

    while let Some(Reverse(node)) = frontier.pop() {
        let bound = solution
            .as_ref()
            .map_or(u32::MAX, |goal| goal.cost_heuristic_sum());
        if node.cost_heuristic_sum() >= bound {
            break;
        }
        // stale entry: a cheaper path to this state was queued after this one
        if reached
            .get(&node.state)
            .map_or(false, |&best| node.cost_heuristic_sum() > best)
        {
            continue;
        }

        stats.expanded += 1;
        for action in problem.best_actions(&node.state) {
            let child = problem.child(&node, action);
            let sum = child.cost_heuristic_sum();
            if reached.get(&child.state).map_or(true, |&best| sum < best) {
                reached.insert(child.state.clone(), sum);
                let bound = solution
                    .as_ref()
                    .map_or(u32::MAX, |goal| goal.cost_heuristic_sum());
                if problem.is_goal(&child.state) && sum < bound {
                    solution = Some(child.clone());
                }
                frontier.push(Reverse(child));
            }
        }
    }

    match solution {
        Some(goal) => {
            log::debug!(
                "goal found at cost {} after expanding {} nodes",
                goal.path_cost,
                stats.expanded
            );
            let actions = problem.unwind_solution(&goal);
            let total_reward = goal.reward - i64::from(goal.path_cost);
            (
                SearchResult {
                    actions,
                    total_reward,
                },
                stats,
            )
        }
        None => {
            log::debug!("frontier exhausted after {} nodes, no path", stats.expanded);
            (SearchResult::empty(), stats)
        }
    }
}

/// Uniform-cost search: A* with the zero heuristic, so the ordering key is
/// the path cost alone.
pub fn uniform_cost(problem: &Problem) -> (SearchResult, SearchStats) {
    astar(&problem.with_heuristic(heuristics::zero))
}
