/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 */

//! Estimators of the remaining cost-to-goal.
//!
//! Every heuristic is a pure function of the world configuration and a
//! state, returning a non-negative estimate. The goal location is the first
//! remaining gold if any, else the first exit. A* is only guaranteed optimal
//! with the admissible estimators ([`zero`], [`manhattan`]); the
//! neighbour-based ones trade admissibility for guidance.

use crate::smart_manhattan::smart_manhattan_distance;
use crate::{Coord2D, Heading, WorldConfig, WorldState};

/// The signature shared by all heuristics.
pub type HeuristicFn = fn(&WorldConfig, &WorldState) -> u32;

/// The trivial estimator, turning A* into uniform-cost search.
pub fn zero(_config: &WorldConfig, _state: &WorldState) -> u32 {
    0
}

/// The unit headings that lead from `from` towards `to` without moving away:
/// one when the cells are axis-aligned, two otherwise, none when equal.
pub fn orientations_to_reach(to: Coord2D, from: Coord2D) -> Vec<Heading> {
    if from == to {
        return vec![];
    }
    if to.x == from.x {
        return vec![if to.y > from.y {
            Heading::NORTH
        } else {
            Heading::SOUTH
        }];
    }
    if to.y == from.y {
        return vec![if to.x > from.x {
            Heading::EAST
        } else {
            Heading::WEST
        }];
    }
    let x_component = if to.x > from.x { 1 } else { -1 };
    let y_component = if to.y > from.y { 1 } else { -1 };
    vec![Heading::new(x_component, 0), Heading::new(0, y_component)]
}

/// Minimum number of 90° turns before `heading` points from `from` towards
/// `to`: 0 if already aligned, 1 if one rotation in either sense suffices,
/// 2 if the facing is opposite.
pub fn turn_cost(to: Coord2D, from: Coord2D, heading: Heading) -> u32 {
    let reaching = orientations_to_reach(to, from);
    if reaching.is_empty() || reaching.contains(&heading) {
        return 0;
    }
    let clockwise = heading.perpendicular_clockwise();
    if reaching.contains(&clockwise) || reaching.contains(&-clockwise) {
        1
    } else {
        2
    }
}

/// The unavoidable extra turn on the way from `from` to `to` when the two
/// cells are not row- or column-aligned.
fn bend_overhead(to: Coord2D, from: Coord2D) -> u32 {
    if to.x == from.x || to.y == from.y {
        0
    } else {
        1
    }
}

/// Manhattan distance to the goal, plus the gold-to-exit return trip while
/// the gold is still out.
pub fn manhattan(config: &WorldConfig, state: &WorldState) -> u32 {
    let goal = state.goal_location(config);
    let mut base = 0;
    if let Some(&gold) = state.golds.first() {
        base = gold.manhattan_dist(config.exits[0]);
    }
    state.agent_location.manhattan_dist(goal) + base
}

/// [`manhattan`] plus the reorientation cost towards the goal, a bend
/// penalty when the goal is off-axis, and one pending-grab and one
/// pending-climb step.
pub fn manhattan_with_orientation(config: &WorldConfig, state: &WorldState) -> u32 {
    let goal = state.goal_location(config);
    let mut base = 0;
    if let Some(&gold) = state.golds.first() {
        base = gold.manhattan_dist(config.exits[0]);
        base += 1;
    }
    if !state.climbed_out {
        base += 1;
    }

    let distance = state.agent_location.manhattan_dist(goal);
    let orientation = turn_cost(goal, state.agent_location, state.agent_heading);
    distance + orientation + bend_overhead(goal, state.agent_location) + base
}

/// Manhattan distance plus a flat 10-point shot penalty per wumpus sitting
/// on a remaining gold. Exploratory; not admissible.
pub fn wumpus_gold_together(config: &WorldConfig, state: &WorldState) -> u32 {
    let goal = state.goal_location(config);
    let mut base = 0;
    if let Some(&gold) = state.golds.first() {
        base = gold.manhattan_dist(config.exits[0]);
    }
    let to_be_killed = state
        .wumpuses
        .iter()
        .filter(|wumpus| state.golds.contains(wumpus))
        .count() as u32;
    state.agent_location.manhattan_dist(goal) + 10 * to_be_killed + base
}

/// The four orthogonal neighbours in facing-relative order: forward, right,
/// backward, left.
fn neighbours(state: &WorldState) -> [Coord2D; 4] {
    let location = state.agent_location;
    let heading = state.agent_heading;
    let perpendicular = heading.perpendicular_clockwise();
    [
        location + heading,
        location + perpendicular,
        location - heading,
        location - perpendicular,
    ]
}

fn passable(config: &WorldConfig, location: Coord2D) -> bool {
    config.in_bounds(location) && !config.obstacles().contains(&location)
}

/// Minimizes, over the passable orthogonal neighbours, the cost to turn
/// towards the neighbour, step into it, shoot the wumpus occupying it if
/// any, reorient towards the goal and walk the remaining Manhattan distance.
/// Exploratory; not admissible.
pub fn best_neighbour(config: &WorldConfig, state: &WorldState) -> u32 {
    let goal = state.goal_location(config);
    let mut base = 0;
    if let Some(&gold) = state.golds.first() {
        let exit = config.exits[0];
        base = gold.manhattan_dist(exit) + bend_overhead(exit, gold);
        base += 1;
    }
    if !state.climbed_out {
        base += 1;
    }

    if state.agent_location == goal {
        let shot = if state.wumpuses.contains(&state.agent_location) {
            10
        } else {
            0
        };
        return base + shot;
    }

    let location = state.agent_location;
    let escapes: Vec<Coord2D> = neighbours(state)
        .into_iter()
        .filter(|&neighbour| passable(config, neighbour))
        .collect();
    if escapes.is_empty() {
        return location.manhattan_dist(goal) + base;
    }

    let cheapest = escapes
        .into_iter()
        .map(|escape| {
            let shot = if state.wumpuses.contains(&escape) { 10 } else { 0 };
            turn_cost(escape, location, state.agent_heading)
                + 1
                + shot
                + turn_cost(goal, escape, Heading::between(location, escape))
                + escape.manhattan_dist(goal)
                + bend_overhead(goal, escape)
        })
        .min()
        .unwrap_or(0);
    base + cheapest
}

fn wumpus_on_goal_penalty(config: &WorldConfig, state: &WorldState) -> u32 {
    if state.wumpuses.is_empty() {
        return 0;
    }
    let exit = config.exits[0];
    let threatened = match state.golds.first() {
        Some(gold) => state.wumpuses.contains(gold) || state.wumpuses.contains(&exit),
        None => state.wumpuses.contains(&exit),
    };
    if threatened {
        10
    } else {
        0
    }
}

/// [`manhattan_with_orientation`] upgraded to the obstacle-aware
/// [`smart_manhattan_distance`] for both the outbound and the return trip,
/// plus a flat shot penalty when a wumpus camps on the gold or the exit.
pub fn smart_manhattan(config: &WorldConfig, state: &WorldState) -> u32 {
    let goal = state.goal_location(config);
    let obstacles = config.obstacles();
    let mut base = 0;
    if let Some(&gold) = state.golds.first() {
        base = smart_manhattan_distance(gold, config.exits[0], obstacles);
        base += 1;
    }
    if !state.climbed_out {
        base += 1;
    }
    base += wumpus_on_goal_penalty(config, state);

    if state.agent_location == goal {
        return base;
    }

    turn_cost(goal, state.agent_location, state.agent_heading)
        + smart_manhattan_distance(state.agent_location, goal, obstacles)
        + base
}

/// [`best_neighbour`] with the obstacle-aware distances of
/// [`smart_manhattan`]. Exploratory; not admissible.
pub fn best_neighbour_smart_manhattan(config: &WorldConfig, state: &WorldState) -> u32 {
    let goal = state.goal_location(config);
    let obstacles = config.obstacles();
    let mut base = 0;
    if let Some(&gold) = state.golds.first() {
        base = smart_manhattan_distance(gold, config.exits[0], obstacles);
        base += 1;
    }
    if !state.climbed_out {
        base += 1;
    }
    base += wumpus_on_goal_penalty(config, state);

    if state.agent_location == goal {
        return base;
    }

    let location = state.agent_location;
    let escapes: Vec<Coord2D> = neighbours(state)
        .into_iter()
        .filter(|&neighbour| passable(config, neighbour))
        .collect();
    if escapes.is_empty() {
        return smart_manhattan_distance(location, goal, obstacles) + base;
    }

    let cheapest = escapes
        .into_iter()
        .map(|escape| {
            // a wumpus on the goal cell is already charged in the base cost
            let shot = if escape != goal && state.wumpuses.contains(&escape) {
                10
            } else {
                0
            };
            turn_cost(escape, location, state.agent_heading)
                + 1
                + shot
                + smart_manhattan_distance(escape, goal, obstacles)
                + turn_cost(goal, escape, Heading::between(location, escape))
        })
        .min()
        .unwrap_or(0);
    cheapest + base
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_config() -> WorldConfig {
        WorldConfig::new(7, 7, vec![], vec![], vec![Coord2D::new(0, 0)])
    }

    fn state_at(x: i32, y: i32, heading: Heading, golds: Vec<Coord2D>) -> WorldState {
        WorldState::new(Coord2D::new(x, y), heading, vec![], golds)
    }

    #[test]
    fn turn_cost_levels() {
        let goal = Coord2D::new(0, 5);
        let from = Coord2D::new(0, 0);
        assert_eq!(turn_cost(goal, from, Heading::NORTH), 0);
        assert_eq!(turn_cost(goal, from, Heading::EAST), 1);
        assert_eq!(turn_cost(goal, from, Heading::WEST), 1);
        assert_eq!(turn_cost(goal, from, Heading::SOUTH), 2);
        // off-axis goal is reachable by either of two headings
        let diagonal = Coord2D::new(3, 5);
        assert_eq!(turn_cost(diagonal, from, Heading::NORTH), 0);
        assert_eq!(turn_cost(diagonal, from, Heading::EAST), 0);
        assert_eq!(turn_cost(diagonal, from, Heading::SOUTH), 1);
        // on the goal cell there is nothing to turn towards
        assert_eq!(turn_cost(from, from, Heading::SOUTH), 0);
    }

    #[test]
    fn manhattan_counts_return_trip() {
        let config = open_config();
        let state = state_at(2, 0, Heading::NORTH, vec![Coord2D::new(6, 3)]);
        // 4 + 3 to the gold, 6 + 3 back to the exit
        assert_eq!(manhattan(&config, &state), 7 + 9);
        let back = state_at(2, 0, Heading::NORTH, vec![]);
        assert_eq!(manhattan(&config, &back), 2);
    }

    #[test]
    fn orientation_overhead_added_when_off_axis() {
        let config = open_config();
        // facing North, goal straight North: no turn, no bend, +1 grab +1 climb
        let aligned = state_at(2, 0, Heading::NORTH, vec![Coord2D::new(2, 4)]);
        assert_eq!(
            manhattan_with_orientation(&config, &aligned),
            4 + (2 + 4) + 1 + 1
        );
        // off-axis goal from an opposite heading: distance 2 + two turns + bend
        let off = state_at(1, 1, Heading::SOUTH, vec![Coord2D::new(2, 2)]);
        assert_eq!(
            manhattan_with_orientation(&config, &off),
            2 + 1 + 1 + (2 + 2) + 1 + 1
        );
    }

    #[test]
    fn wumpus_gold_together_penalizes_coincidence() {
        let config = open_config();
        let mut state = state_at(0, 0, Heading::NORTH, vec![Coord2D::new(3, 0)]);
        state.wumpuses = vec![Coord2D::new(3, 0)];
        assert_eq!(wumpus_gold_together(&config, &state), 3 + 10 + 3);
        state.wumpuses = vec![Coord2D::new(1, 1)];
        assert_eq!(wumpus_gold_together(&config, &state), 3 + 3);
    }

    #[test]
    fn smart_manhattan_on_goal_returns_base_only() {
        let config = open_config();
        let state = state_at(0, 0, Heading::NORTH, vec![]);
        // standing on the exit: one climb pending
        assert_eq!(smart_manhattan(&config, &state), 1);
    }

    #[test]
    fn best_neighbour_prefers_open_side() {
        // pits wall off everything except the cell to the East
        let config = WorldConfig::new(
            3,
            3,
            vec![],
            vec![Coord2D::new(1, 2), Coord2D::new(0, 1)],
            vec![Coord2D::new(0, 0)],
        );
        let state = WorldState::new(Coord2D::new(1, 1), Heading::NORTH, vec![], vec![]);
        // exit is the goal; go East is not an option towards (0,0), but the
        // estimate must still be finite and at least the plain distance
        assert!(best_neighbour(&config, &state) >= manhattan(&config, &state));
    }

    #[test]
    fn estimators_agree_on_goal_free_world() {
        let config = open_config();
        let state = state_at(0, 3, Heading::SOUTH, vec![]);
        // aligned goal, no obstacles: smart distance equals plain manhattan
        assert_eq!(
            smart_manhattan(&config, &state),
            manhattan(&config, &state) + turn_cost(Coord2D::new(0, 0), state.agent_location, state.agent_heading) + 1
        );
    }
}
