/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 */

//! Classical graph-search algorithms for the Hunt-the-Wumpus grid puzzle.
//!
//! An agent navigates a grid holding pits, blocks, a wumpus, a gold and
//! exits. It must grab the gold and climb out alive, neutralizing at most
//! one wumpus with its single arrow. This crate provides the problem model
//! ([`Problem`], [`WorldState`]), a family of heuristic estimators
//! ([`heuristics`], including the obstacle-aware
//! [`smart_manhattan_distance`]) and four solvers: [`astar`],
//! [`uniform_cost`], [`breadth_first`] and [`iterative_deepening`].
//!
//! The crate owns no I/O: it consumes a [`WorldSnapshot`] produced by an
//! external world loader and returns a [`SearchResult`]. "No path" is a
//! normal outcome, reported as an empty action sequence with zero reward,
//! never as an error.

mod action;
mod astar;
mod bfs;
mod coord2d;
mod heading;
pub mod heuristics;
mod ids;
mod node;
mod problem;
mod smart_manhattan;
mod world;

pub use action::*;
pub use astar::*;
pub use bfs::*;
pub use coord2d::*;
pub use heading::*;
pub use ids::*;
pub use node::*;
pub use problem::*;
pub use smart_manhattan::*;
pub use world::*;

/// The outcome of a search: the ordered action sequence and the total
/// reward, defined as accumulated reward minus accumulated path cost. The
/// empty result (no path) carries zero reward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub actions: Vec<Action>,
    pub total_reward: i64,
}

impl SearchResult {
    pub fn empty() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Counters accumulated during one search run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// number of nodes taken off the frontier and expanded
    pub expanded: usize,
}
