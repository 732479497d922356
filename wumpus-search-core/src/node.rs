/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use std::{cmp::Ordering, fmt, sync::Arc};

use crate::{Action, Coord2D, Heading, WorldState};

/// Strong reference counted search node.
pub type Node = Arc<SearchNode>;

/// A search-tree node: a state plus the path that produced it.
///
/// The parent link is only used to reconstruct the action sequence; identity
/// for visited-set purposes is the wrapped state, never cost or reward.
pub struct SearchNode {
    pub state: WorldState,
    /// cumulative action cost from the root
    pub path_cost: u32,
    /// cumulative reward from the root
    pub reward: i64,
    /// heuristic estimate for `state`, computed by the problem at creation
    pub heuristic: u32,
    /// the action that produced this node, `None` for the root
    pub action: Option<Action>,
    pub parent: Option<Node>,
    /// the goal cell at creation time, kept for tie-breaking
    pub(crate) goal: Coord2D,
}

impl SearchNode {
    /// The priority key of best-first frontiers: path cost plus heuristic.
    pub fn cost_heuristic_sum(&self) -> u32 {
        self.path_cost + self.heuristic
    }

    fn goal_distance(&self) -> u32 {
        self.state.agent_location.manhattan_dist(self.goal)
    }
}

impl fmt::Debug for SearchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchNode")
            .field("location", &self.state.agent_location)
            .field("heading", &self.state.agent_heading)
            .field("path_cost", &self.path_cost)
            .field("reward", &self.reward)
            .field("heuristic", &self.heuristic)
            .field("action", &self.action)
            .finish()
    }
}

/// Facing priority North > East > West > South.
fn heading_rank(heading: Heading) -> u8 {
    match heading {
        Heading::NORTH => 0,
        Heading::EAST => 1,
        Heading::WEST => 2,
        Heading::SOUTH => 3,
        _ => 4,
    }
}

/// Total order used by priority-queue frontiers, "less" meaning "expand
/// first". Tie-breaking keeps the queue deterministic: cost + heuristic,
/// then the heuristic alone, then the Manhattan distance to the goal, then
/// the facing priority, then the facing's y component.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost_heuristic_sum()
            .cmp(&other.cost_heuristic_sum())
            .then_with(|| self.heuristic.cmp(&other.heuristic))
            .then_with(|| self.goal_distance().cmp(&other.goal_distance()))
            .then_with(|| {
                heading_rank(self.state.agent_heading).cmp(&heading_rank(other.state.agent_heading))
            })
            .then_with(|| self.state.agent_heading.y.cmp(&other.state.agent_heading.y))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}
