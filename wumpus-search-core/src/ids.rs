/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use crate::{Node, Problem, SearchResult, SearchStats};

/// Outcome of one depth-limited pass.
#[derive(Debug)]
pub enum DepthLimited {
    /// A goal node within the depth bound.
    Solution(Node),
    /// Some branch hit the bound before being exhausted; a deeper pass may
    /// still find a solution.
    Cutoff,
    /// The whole reachable space fits under the bound and holds no goal.
    Exhausted,
}

struct Frame {
    node: Node,
    children: std::vec::IntoIter<Node>,
}

/// Children of `node`, minus any state already present on the current
/// branch. Siblings do not share visited state; only ancestors bound the
/// cycles, which keeps the memory at O(depth).
fn expand(problem: &Problem, node: &Node, branch: &[Frame]) -> Vec<Node> {
    problem
        .best_actions(&node.state)
        .into_iter()
        .map(|action| problem.child(node, action))
        .filter(|child| {
            child.state != node.state && branch.iter().all(|frame| frame.node.state != child.state)
        })
        .collect()
}

/// Depth-limited depth-first search with an explicit stack. `limit` bounds
/// the number of actions in a solution.
pub fn depth_limited(problem: &Problem, limit: u32) -> (DepthLimited, SearchStats) {
    let mut stats = SearchStats::default();

    let root = problem.root_node();
    stats.expanded += 1;
    if problem.is_goal(&root.state) {
        return (DepthLimited::Solution(root), stats);
    }
    if limit == 0 {
        return (DepthLimited::Cutoff, stats);
    }

    let mut cutoff_occurred = false;
    let children = expand(problem, &root, &[]);
    let mut stack = vec![Frame {
        node: root,
        children: children.into_iter(),
    }];

    loop {
        let next = match stack.last_mut() {
            None => break,
            Some(frame) => frame.children.next(),
        };
        match next {
            None => {
                stack.pop();
            }
            Some(child) => {
                stats.expanded += 1;
                if problem.is_goal(&child.state) {
                    return (DepthLimited::Solution(child), stats);
                }
                // the child sits at depth stack.len()
                if stack.len() as u32 >= limit {
                    cutoff_occurred = true;
                    continue;
                }
                let children = expand(problem, &child, &stack);
                stack.push(Frame {
                    node: child,
                    children: children.into_iter(),
                });
            }
        }
    }

    if cutoff_occurred {
        (DepthLimited::Cutoff, stats)
    } else {
        (DepthLimited::Exhausted, stats)
    }
}

/// Iterative-deepening search: repeated depth-limited passes with an
/// increasing bound. The bound grows only on a cutoff; an exhausted pass
/// proves there is no solution at any depth.
pub fn iterative_deepening(problem: &Problem) -> (SearchResult, SearchStats) {
    let mut stats = SearchStats::default();
    let mut limit = 0;
    loop {
        let (outcome, pass_stats) = depth_limited(problem, limit);
        stats.expanded += pass_stats.expanded;
        match outcome {
            DepthLimited::Solution(node) => {
                log::debug!(
                    "solution of cost {} at depth limit {limit}, {} nodes in total",
                    node.path_cost,
                    stats.expanded
                );
                let actions = problem.unwind_solution(&node);
                let total_reward = node.reward - i64::from(node.path_cost);
                return (
                    SearchResult {
                        actions,
                        total_reward,
                    },
                    stats,
                );
            }
            DepthLimited::Cutoff => {
                log::debug!("depth limit {limit}: cutoff, {} nodes", pass_stats.expanded);
                limit += 1;
            }
            DepthLimited::Exhausted => {
                log::debug!("depth limit {limit}: space exhausted, no solution");
                return (SearchResult::empty(), stats);
            }
        }
    }
}
