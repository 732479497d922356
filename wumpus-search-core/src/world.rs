/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use serde::Deserialize;

use crate::{Coord2D, Heading};

/// The world-wide invariants shared by all states of one problem instance.
///
/// Owned by the [`Problem`](crate::Problem) and set once at construction;
/// never mutated during search.
#[derive(Clone, Debug)]
pub struct WorldConfig {
    pub width: i32,
    pub height: i32,
    pub blocks: Vec<Coord2D>,
    pub pits: Vec<Coord2D>,
    pub exits: Vec<Coord2D>,
    /// blocks ∪ pits, the cells the distance estimators route around
    obstacles: Vec<Coord2D>,
}

impl WorldConfig {
    pub fn new(
        width: i32,
        height: i32,
        blocks: Vec<Coord2D>,
        pits: Vec<Coord2D>,
        exits: Vec<Coord2D>,
    ) -> Self {
        let obstacles = blocks.iter().chain(pits.iter()).copied().collect();
        WorldConfig {
            width,
            height,
            blocks,
            pits,
            exits,
            obstacles,
        }
    }

    pub fn in_bounds(&self, location: Coord2D) -> bool {
        location.x >= 0 && location.x < self.width && location.y >= 0 && location.y < self.height
    }

    pub fn is_block(&self, location: Coord2D) -> bool {
        self.blocks.contains(&location)
    }

    pub fn is_pit(&self, location: Coord2D) -> bool {
        self.pits.contains(&location)
    }

    pub fn is_exit(&self, location: Coord2D) -> bool {
        self.exits.contains(&location)
    }

    /// A cell is legal when it is inside the grid and not statically blocked.
    pub fn is_legal(&self, location: Coord2D) -> bool {
        self.in_bounds(location) && !self.is_block(location)
    }

    /// All cells that are permanently impassable or lethal: blocks and pits.
    pub fn obstacles(&self) -> &[Coord2D] {
        &self.obstacles
    }
}

/// A world description as produced by the external world loader.
///
/// The JSON shape matches the wumpus world files, e.g.:
///
/// ```json
/// {
///     "id": "classic wumpus world",
///     "size": [7, 7],
///     "hunters": [[0, 0]],
///     "pits": [[4, 0], [3, 1]],
///     "wumpuses": [[1, 2]],
///     "exits": [[0, 0]],
///     "golds": [[6, 3]],
///     "blocks": []
/// }
/// ```
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorldSnapshot {
    #[serde(default)]
    pub id: String,
    pub size: (i32, i32),
    pub hunters: Vec<(i32, i32)>,
    #[serde(default)]
    pub pits: Vec<(i32, i32)>,
    #[serde(default)]
    pub wumpuses: Vec<(i32, i32)>,
    #[serde(default)]
    pub golds: Vec<(i32, i32)>,
    pub exits: Vec<(i32, i32)>,
    #[serde(default)]
    pub blocks: Vec<(i32, i32)>,
}

pub(crate) fn to_coords(pairs: &[(i32, i32)]) -> Vec<Coord2D> {
    pairs.iter().map(|&(x, y)| Coord2D::new(x, y)).collect()
}

/// One configuration of the puzzle.
///
/// States are immutable: applying an action produces a new state. The
/// remaining-entity lists are kept sorted so that equality and hashing are
/// insensitive to the order entities were listed in the snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WorldState {
    pub agent_location: Coord2D,
    pub agent_heading: Heading,
    pub alive: bool,
    pub arrow_available: bool,
    pub climbed_out: bool,
    pub wumpuses: Vec<Coord2D>,
    pub golds: Vec<Coord2D>,
}

impl WorldState {
    pub fn new(
        agent_location: Coord2D,
        agent_heading: Heading,
        mut wumpuses: Vec<Coord2D>,
        mut golds: Vec<Coord2D>,
    ) -> Self {
        wumpuses.sort();
        golds.sort();
        WorldState {
            agent_location,
            agent_heading,
            alive: true,
            arrow_available: true,
            climbed_out: false,
            wumpuses,
            golds,
        }
    }

    /// The location the agent currently needs to reach: the first remaining
    /// gold if any, else the first exit.
    pub fn goal_location(&self, config: &WorldConfig) -> Coord2D {
        self.golds.first().copied().unwrap_or(config.exits[0])
    }
}
