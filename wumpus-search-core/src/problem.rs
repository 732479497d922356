/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 */

use std::sync::Arc;

use crate::heuristics::HeuristicFn;
use crate::world::to_coords;
use crate::{
    Action, Coord2D, Heading, Node, SearchNode, WorldConfig, WorldSnapshot, WorldState,
    ALL_ACTIONS,
};

/// The formal search problem: the world invariants, the initial state, the
/// permitted action set and the heuristic used to guide informed search.
///
/// Immutable for the duration of a search run.
pub struct Problem {
    config: WorldConfig,
    initial_state: WorldState,
    possible_actions: Vec<Action>,
    heuristic: HeuristicFn,
}

impl Problem {
    pub fn new(
        config: WorldConfig,
        initial_state: WorldState,
        possible_actions: Vec<Action>,
        heuristic: HeuristicFn,
    ) -> Self {
        Problem {
            config,
            initial_state,
            possible_actions,
            heuristic,
        }
    }

    /// Builds a problem from a world snapshot, granting the full action set.
    /// The snapshot must be well-formed: one hunter, at least one exit.
    pub fn from_snapshot(snapshot: &WorldSnapshot, heuristic: HeuristicFn) -> Self {
        let (width, height) = snapshot.size;
        let config = WorldConfig::new(
            width,
            height,
            to_coords(&snapshot.blocks),
            to_coords(&snapshot.pits),
            to_coords(&snapshot.exits),
        );
        let (x, y) = snapshot.hunters[0];
        let initial_state = WorldState::new(
            Coord2D::new(x, y),
            Heading::NORTH,
            to_coords(&snapshot.wumpuses),
            to_coords(&snapshot.golds),
        );
        Problem::new(config, initial_state, ALL_ACTIONS.to_vec(), heuristic)
    }

    /// The same problem guided by a different heuristic.
    pub fn with_heuristic(&self, heuristic: HeuristicFn) -> Self {
        Problem {
            config: self.config.clone(),
            initial_state: self.initial_state.clone(),
            possible_actions: self.possible_actions.clone(),
            heuristic,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn initial_state(&self) -> &WorldState {
        &self.initial_state
    }

    /// The root of the search tree.
    pub fn root_node(&self) -> Node {
        Arc::new(SearchNode {
            heuristic: (self.heuristic)(&self.config, &self.initial_state),
            goal: self.initial_state.goal_location(&self.config),
            state: self.initial_state.clone(),
            path_cost: 0,
            reward: 0,
            action: None,
            parent: None,
        })
    }

    /// The goal: climbed out with no gold left behind, still alive.
    pub fn is_goal(&self, state: &WorldState) -> bool {
        state.climbed_out && state.golds.is_empty() && state.alive
    }

    /// The whole permitted action set, or nothing once the agent has climbed
    /// out or died.
    pub fn available_actions(&self, state: &WorldState) -> &[Action] {
        if state.climbed_out || !state.alive {
            &[]
        } else {
            &self.possible_actions
        }
    }

    /// Filters [`Self::available_actions`] down to the actions that actually
    /// change the state.
    pub fn effective_actions(&self, state: &WorldState) -> Vec<Action> {
        self.available_actions(state)
            .iter()
            .copied()
            .filter(|action| match action {
                Action::TurnLeft | Action::TurnRight => true,
                Action::Move => self
                    .config
                    .is_legal(state.agent_location + state.agent_heading),
                Action::Shoot => state.arrow_available,
                Action::Grab => state.golds.contains(&state.agent_location),
                Action::Climb => self.config.is_exit(state.agent_location),
            })
            .collect()
    }

    /// Prunes [`Self::effective_actions`] with domain knowledge: no shot
    /// without a wumpus ahead, no climb while gold remains, no step into a
    /// pit, and no turn that a local look at the side and rear neighbours
    /// proves redundant. A gold sitting on a pit is a certified dead end and
    /// yields no actions at all.
    pub fn best_actions(&self, state: &WorldState) -> Vec<Action> {
        if let Some(gold) = state.golds.first() {
            if self.config.is_pit(*gold) {
                return vec![];
            }
        }

        let location = state.agent_location;
        let heading = state.agent_heading;
        let ahead = location + heading;

        let drop_shoot = !state.wumpuses.contains(&ahead);
        let drop_climb = !state.golds.is_empty();
        let drop_move = self.config.is_pit(ahead);

        let perpendicular = heading.perpendicular_clockwise();
        let passable = |cell: Coord2D| self.config.is_legal(cell) && !self.config.is_pit(cell);
        let left_open = passable(location - perpendicular);
        let right_open = passable(location + perpendicular);
        let rear_open = passable(location - heading);

        let mut drop_left = false;
        let mut drop_right = false;
        if !left_open {
            drop_left = true;
            if !right_open && !rear_open {
                drop_right = true;
            }
        } else if !right_open {
            drop_right = true;
        }

        self.effective_actions(state)
            .into_iter()
            .filter(|action| match action {
                Action::TurnLeft => !drop_left,
                Action::TurnRight => !drop_right,
                Action::Move => !drop_move,
                Action::Shoot => !drop_shoot,
                Action::Grab => true,
                Action::Climb => !drop_climb,
            })
            .collect()
    }

    /// Pure transition function. An action outside
    /// [`Self::effective_actions`] returns the state unchanged; it is a
    /// no-op, not an error.
    pub fn successor(&self, state: &WorldState, action: Action) -> WorldState {
        if !self.effective_actions(state).contains(&action) {
            return state.clone();
        }

        let mut next = state.clone();
        match action {
            Action::TurnLeft => {
                next.agent_heading = -state.agent_heading.perpendicular_clockwise();
            }
            Action::TurnRight => {
                next.agent_heading = state.agent_heading.perpendicular_clockwise();
            }
            Action::Move => {
                let mut destination = state.agent_location + state.agent_heading;
                if !self.config.is_legal(destination) {
                    destination = state.agent_location;
                }
                next.alive =
                    !state.wumpuses.contains(&destination) && !self.config.is_pit(destination);
                next.agent_location = destination;
            }
            Action::Shoot => {
                let target = state.agent_location + state.agent_heading;
                next.arrow_available = false;
                next.wumpuses.retain(|wumpus| *wumpus != target);
            }
            Action::Grab => {
                next.golds.retain(|gold| *gold != state.agent_location);
            }
            Action::Climb => {
                next.climbed_out = self.config.is_exit(state.agent_location);
            }
        }
        next
    }

    /// The child node reached by applying `action` to `node`, with the
    /// action cost and reward accumulated and the heuristic recomputed.
    ///
    /// Costs: 1 for everything except a shot that actually consumes the
    /// arrow, which costs 10. Rewards: −1000 for a move that kills the
    /// agent, +1000 for a grab that actually removes a gold, 0 otherwise.
    pub fn child(&self, node: &Node, action: Action) -> Node {
        let state = &node.state;
        let next = self.successor(state, action);

        let cost = match action {
            Action::Shoot if state.arrow_available && !next.arrow_available => 10,
            _ => 1,
        };
        let reward = match action {
            Action::Move if !next.alive => -1000,
            Action::Grab if next.golds.len() < state.golds.len() => 1000,
            _ => 0,
        };

        Arc::new(SearchNode {
            heuristic: (self.heuristic)(&self.config, &next),
            goal: next.goal_location(&self.config),
            state: next,
            path_cost: node.path_cost + cost,
            reward: node.reward + reward,
            action: Some(action),
            parent: Some(node.clone()),
        })
    }

    /// Walks the parent links back to the root and returns the action
    /// sequence in execution order. The root contributes no action.
    pub fn unwind_solution(&self, node: &Node) -> Vec<Action> {
        let mut actions = Vec::new();
        let mut current: &SearchNode = node;
        while let (Some(parent), Some(action)) = (current.parent.as_deref(), current.action) {
            actions.push(action);
            current = parent;
        }
        actions.reverse();
        actions
    }

    /// Replays an action sequence from the initial state and returns the
    /// accumulated path cost and reward.
    pub fn replay(&self, actions: &[Action]) -> (u32, i64) {
        let mut node = self.root_node();
        for &action in actions {
            node = self.child(&node, action);
        }
        (node.path_cost, node.reward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics;

    fn open_problem(width: i32, height: i32) -> Problem {
        let config = WorldConfig::new(width, height, vec![], vec![], vec![Coord2D::new(0, 0)]);
        let state = WorldState::new(Coord2D::new(0, 0), Heading::NORTH, vec![], vec![]);
        Problem::new(config, state, ALL_ACTIONS.to_vec(), heuristics::zero)
    }

    #[test]
    fn no_actions_once_exited_or_dead() {
        let problem = open_problem(3, 3);
        let mut state = problem.initial_state().clone();
        state.climbed_out = true;
        assert!(problem.available_actions(&state).is_empty());
        state.climbed_out = false;
        state.alive = false;
        assert!(problem.available_actions(&state).is_empty());
    }

    #[test]
    fn effective_filters_by_context() {
        let config = WorldConfig::new(
            2,
            2,
            vec![],
            vec![],
            vec![Coord2D::new(0, 0)],
        );
        let state = WorldState::new(
            Coord2D::new(0, 1),
            Heading::NORTH,
            vec![],
            vec![Coord2D::new(0, 1)],
        );
        let problem = Problem::new(config, state, ALL_ACTIONS.to_vec(), heuristics::zero);
        let actions = problem.effective_actions(problem.initial_state());
        // forward is off-grid, the agent stands on a gold but not on an exit
        assert!(!actions.contains(&Action::Move));
        assert!(actions.contains(&Action::Grab));
        assert!(!actions.contains(&Action::Climb));
        assert!(actions.contains(&Action::Shoot));
        assert!(actions.contains(&Action::TurnLeft) || actions.contains(&Action::TurnRight));
    }

    #[test]
    fn ineffective_action_is_a_no_op() {
        let problem = open_problem(3, 3);
        let mut state = problem.initial_state().clone();
        state.arrow_available = false;
        let next = problem.successor(&state, Action::Shoot);
        assert_eq!(next, state);
        // grabbing thin air changes nothing either
        assert_eq!(problem.successor(&state, Action::Grab), state);
    }

    #[test]
    fn turns_rotate_the_heading() {
        let problem = open_problem(3, 3);
        let state = problem.initial_state();
        let left = problem.successor(state, Action::TurnLeft);
        assert_eq!(left.agent_heading, Heading::WEST);
        let right = problem.successor(state, Action::TurnRight);
        assert_eq!(right.agent_heading, Heading::EAST);
        assert_eq!(left.agent_location, state.agent_location);
    }

    #[test]
    fn moving_into_a_pit_kills_with_penalty() {
        let config = WorldConfig::new(
            3,
            3,
            vec![],
            vec![Coord2D::new(0, 1)],
            vec![Coord2D::new(0, 0)],
        );
        let state = WorldState::new(Coord2D::new(0, 0), Heading::NORTH, vec![], vec![]);
        let problem = Problem::new(config, state, ALL_ACTIONS.to_vec(), heuristics::zero);
        let child = problem.child(&problem.root_node(), Action::Move);
        assert!(!child.state.alive);
        assert_eq!(child.reward, -1000);
        assert_eq!(child.path_cost, 1);
        assert!(problem.available_actions(&child.state).is_empty());
    }

    #[test]
    fn shooting_consumes_the_arrow_and_costs_ten() {
        let config = WorldConfig::new(3, 3, vec![], vec![], vec![Coord2D::new(0, 0)]);
        let state = WorldState::new(
            Coord2D::new(0, 0),
            Heading::NORTH,
            vec![Coord2D::new(0, 1)],
            vec![],
        );
        let problem = Problem::new(config, state, ALL_ACTIONS.to_vec(), heuristics::zero);
        let shot = problem.child(&problem.root_node(), Action::Shoot);
        assert!(!shot.state.arrow_available);
        assert!(shot.state.wumpuses.is_empty());
        assert_eq!(shot.path_cost, 10);
        // a second shot is ineffective: no-op at unit cost
        let again = problem.child(&shot, Action::Shoot);
        assert_eq!(again.state, shot.state);
        assert_eq!(again.path_cost, 11);
    }

    #[test]
    fn grab_rewards_only_when_gold_is_removed() {
        let config = WorldConfig::new(3, 3, vec![], vec![], vec![Coord2D::new(0, 0)]);
        let state = WorldState::new(
            Coord2D::new(0, 0),
            Heading::NORTH,
            vec![],
            vec![Coord2D::new(0, 0)],
        );
        let problem = Problem::new(config, state, ALL_ACTIONS.to_vec(), heuristics::zero);
        let grabbed = problem.child(&problem.root_node(), Action::Grab);
        assert!(grabbed.state.golds.is_empty());
        assert_eq!(grabbed.reward, 1000);
        let again = problem.child(&grabbed, Action::Grab);
        assert_eq!(again.reward, 1000);
    }

    #[test]
    fn climb_requires_an_exit_cell() {
        let problem = open_problem(3, 3);
        let at_exit = problem.successor(problem.initial_state(), Action::Climb);
        assert!(at_exit.climbed_out);
        assert!(problem.is_goal(&at_exit));

        let mut away = problem.initial_state().clone();
        away.agent_location = Coord2D::new(1, 1);
        let not_exited = problem.successor(&away, Action::Climb);
        assert!(!not_exited.climbed_out);
    }

    #[test]
    fn best_actions_prune_useless_branches() {
        let config = WorldConfig::new(
            3,
            3,
            vec![],
            vec![Coord2D::new(0, 1)],
            vec![Coord2D::new(0, 0)],
        );
        let state = WorldState::new(
            Coord2D::new(0, 0),
            Heading::NORTH,
            vec![],
            vec![Coord2D::new(2, 2)],
        );
        let problem = Problem::new(config, state, ALL_ACTIONS.to_vec(), heuristics::zero);
        let actions = problem.best_actions(problem.initial_state());
        // pit ahead: no move; no wumpus ahead: no shot; gold remains: no climb
        assert!(!actions.contains(&Action::Move));
        assert!(!actions.contains(&Action::Shoot));
        assert!(!actions.contains(&Action::Climb));
        assert!(actions.contains(&Action::TurnRight));
    }

    #[test]
    fn gold_on_a_pit_is_a_dead_end() {
        let config = WorldConfig::new(
            3,
            3,
            vec![],
            vec![Coord2D::new(2, 2)],
            vec![Coord2D::new(0, 0)],
        );
        let state = WorldState::new(
            Coord2D::new(0, 0),
            Heading::NORTH,
            vec![],
            vec![Coord2D::new(2, 2)],
        );
        let problem = Problem::new(config, state, ALL_ACTIONS.to_vec(), heuristics::zero);
        assert!(problem.best_actions(problem.initial_state()).is_empty());
    }

    #[test]
    fn unwind_reproduces_the_action_chain() {
        let problem = open_problem(4, 4);
        let chain = [
            Action::TurnRight,
            Action::Move,
            Action::Move,
            Action::TurnLeft,
            Action::Move,
        ];
        let mut node = problem.root_node();
        for &action in &chain {
            node = problem.child(&node, action);
        }
        assert_eq!(problem.unwind_solution(&node), chain);
        let (cost, reward) = problem.replay(&chain);
        assert_eq!(cost, chain.len() as u32);
        assert_eq!(reward, 0);
    }
}
