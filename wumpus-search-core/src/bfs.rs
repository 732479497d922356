/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::{Problem, SearchResult, SearchStats, WorldState};

/// Breadth-first search: FIFO frontier with the goal test applied eagerly
/// to generated children.
///
/// Returns the first goal found, which minimizes the number of actions, not
/// their cost: with the shot costing 10, BFS can return a plan that A*
/// beats on total cost. That limitation is inherent and deliberate.
pub fn breadth_first(problem: &Problem) -> (SearchResult, SearchStats) {
    let mut stats = SearchStats::default();

    let root = problem.root_node();
    if problem.is_goal(&root.state) {
        return (SearchResult::empty(), stats);
    }

    let mut frontier = VecDeque::new();
    let mut reached: FxHashSet<WorldState> = FxHashSet::default();
    reached.insert(root.state.clone());
    frontier.push_back(root);

    while let Some(node) = frontier.pop_front() {
        stats.expanded += 1;
        for action in problem.best_actions(&node.state) {
            let child = problem.child(&node, action);
            if problem.is_goal(&child.state) {
                log::debug!(
                    "goal found at depth {} after expanding {} nodes",
                    child.path_cost,
                    stats.expanded
                );
                let actions = problem.unwind_solution(&child);
                let total_reward = child.reward - i64::from(child.path_cost);
                return (
                    SearchResult {
                        actions,
                        total_reward,
                    },
                    stats,
                );
            }
            if !reached.contains(&child.state) {
                reached.insert(child.state.clone());
                frontier.push_back(child);
            }
        }
    }

    log::debug!("frontier exhausted after {} nodes, no path", stats.expanded);
    (SearchResult::empty(), stats)
}
